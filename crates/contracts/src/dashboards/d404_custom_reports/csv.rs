//! CSV text for the custom report export.
//!
//! Comma separated, rows joined with `\n`, no trailing newline. Values are
//! written verbatim: commas or newlines inside a value are not escaped.

use super::generator::ReportRow;
use super::metric::Metric;

pub const CSV_SEPARATOR: &str = ",";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header line of display names followed by one line per row.
///
/// A row without a value for one of `columns` gets an empty cell.
pub fn build_csv(columns: &[Metric], rows: &[ReportRow]) -> String {
    let header = columns
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(CSV_SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|m| row.get(m.id).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        lines.push(cells.join(CSV_SEPARATOR));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_custom_reports::generator::ReportValue;
    use crate::dashboards::d404_custom_reports::metric::MetricType;

    const SCORE: Metric = Metric {
        id: "score",
        name: "Score",
        metric_type: MetricType::Numeric,
        filters: &[],
    };

    const STATUS: Metric = Metric {
        id: "completion-status",
        name: "Completion Status",
        metric_type: MetricType::Status,
        filters: &[],
    };

    fn row(cells: &[(&str, ReportValue)]) -> ReportRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_single_column() {
        let rows = vec![row(&[("score", ReportValue::Number(42))])];
        assert_eq!(build_csv(&[SCORE], &rows), "Score\n42");
    }

    #[test]
    fn test_column_order_follows_selection() {
        let rows = vec![
            row(&[("score", ReportValue::Number(7)), ("completion-status", "Completed".into())]),
            row(&[("score", ReportValue::Number(99)), ("completion-status", "Not Started".into())]),
        ];
        assert_eq!(
            build_csv(&[STATUS, SCORE], &rows),
            "Completion Status,Score\nCompleted,7\nNot Started,99"
        );
    }

    #[test]
    fn test_missing_value_is_empty_cell() {
        let rows = vec![row(&[("score", ReportValue::Number(1))])];
        assert_eq!(
            build_csv(&[SCORE, STATUS], &rows),
            "Score,Completion Status\n1,"
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let rows = vec![row(&[("score", "a,b".into())])];
        assert_eq!(build_csv(&[SCORE], &rows), "Score\na,b");
    }
}
