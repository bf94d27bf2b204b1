use super::metric::{Metric, MetricType};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const STATUS_VALUES: [&str; 3] = ["Completed", "In Progress", "Not Started"];
pub const CATEGORY_VALUES: [&str; 3] = ["Category A", "Category B", "Category C"];

/// First number used for identifier values (`ID-1000`, `ID-1001`, ...).
const IDENTIFIER_BASE: usize = 1000;

/// A single synthetic cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Number(n) => write!(f, "{}", n),
            ReportValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for ReportValue {
    fn from(s: String) -> Self {
        ReportValue::Text(s)
    }
}

impl From<&str> for ReportValue {
    fn from(s: &str) -> Self {
        ReportValue::Text(s.to_string())
    }
}

/// Metric id -> value for every metric selected at generation time.
pub type ReportRow = BTreeMap<String, ReportValue>;

/// Build `row_count` rows with one value per metric in `metrics`.
pub fn generate_rows<R: Rng + ?Sized>(
    metrics: &[Metric],
    row_count: usize,
    year: i32,
    rng: &mut R,
) -> Vec<ReportRow> {
    (0..row_count)
        .map(|row_index| {
            metrics
                .iter()
                .map(|metric| {
                    let value = generate_value(metric.metric_type, row_index, year, &mut *rng);
                    (metric.id.to_string(), value)
                })
                .collect()
        })
        .collect()
}

/// Synthesize one value for a metric of type `metric_type` in row `row_index`.
pub fn generate_value<R: Rng + ?Sized>(
    metric_type: MetricType,
    row_index: usize,
    year: i32,
    rng: &mut R,
) -> ReportValue {
    match metric_type {
        MetricType::Identifier => format!("ID-{}", IDENTIFIER_BASE + row_index).into(),
        MetricType::Date => {
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            locale_date(year, month, day).into()
        }
        MetricType::Status => pick(&STATUS_VALUES, rng).into(),
        MetricType::Numeric => ReportValue::Number(rng.gen_range(1..=100)),
        MetricType::Time => format!("{} mins", rng.gen_range(1..=120)).into(),
        MetricType::Category => pick(&CATEGORY_VALUES, rng).into(),
    }
}

fn pick<R: Rng + ?Sized>(values: &[&'static str], rng: &mut R) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// en-US short date: "3/7/2024"
fn locale_date(year: i32, month: u32, day: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => format!("{}/{}/{}", month, day, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_custom_reports::metric::find_metric;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn metrics(ids: &[&str]) -> Vec<Metric> {
        ids.iter()
            .map(|id| *find_metric(id).unwrap())
            .collect()
    }

    #[test]
    fn test_row_shape_follows_selection() {
        let mut rng = StdRng::seed_from_u64(7);
        let selected = metrics(&["master-id", "score", "time-spent"]);
        let rows = generate_rows(&selected, 50, 2024, &mut rng);
        assert_eq!(rows.len(), 50);
        for row in &rows {
            assert_eq!(row.len(), 3);
            assert!(row.contains_key("master-id"));
            assert!(row.contains_key("score"));
            assert!(row.contains_key("time-spent"));
        }
    }

    #[test]
    fn test_empty_selection_gives_empty_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        let rows = generate_rows(&[], 50, 2024, &mut rng);
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_identifiers_follow_row_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let rows = generate_rows(&metrics(&["master-id"]), 50, 2024, &mut rng);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row["master-id"], ReportValue::Text(format!("ID-{}", 1000 + i)));
        }
    }

    #[test]
    fn test_numeric_and_time_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..2000 {
            match generate_value(MetricType::Numeric, i, 2024, &mut rng) {
                ReportValue::Number(n) => assert!((1..=100).contains(&n), "numeric {n}"),
                other => panic!("unexpected numeric value {other:?}"),
            }
            let time = generate_value(MetricType::Time, i, 2024, &mut rng).to_string();
            let minutes: u32 = time
                .strip_suffix(" mins")
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("bad time value {time}"));
            assert!((1..=120).contains(&minutes));
        }
    }

    #[test]
    fn test_dates_fall_in_year() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..500 {
            let text = generate_value(MetricType::Date, i, 2024, &mut rng).to_string();
            let date = NaiveDate::parse_from_str(&text, "%m/%d/%Y").unwrap();
            assert_eq!(chrono::Datelike::year(&date), 2024);
            assert!(chrono::Datelike::day(&date) <= 28);
        }
    }

    #[test]
    fn test_status_and_category_sets() {
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..300 {
            let status = generate_value(MetricType::Status, i, 2024, &mut rng).to_string();
            assert!(STATUS_VALUES.contains(&status.as_str()));
            let category = generate_value(MetricType::Category, i, 2024, &mut rng).to_string();
            assert!(CATEGORY_VALUES.contains(&category.as_str()));
        }
    }

    #[test]
    fn test_locale_date_format() {
        assert_eq!(locale_date(2024, 3, 7), "3/7/2024");
        assert_eq!(locale_date(2024, 12, 28), "12/28/2024");
    }

    #[test]
    fn test_value_json_is_untagged() {
        let mut row = ReportRow::new();
        row.insert("score".to_string(), ReportValue::Number(42));
        row.insert("master-id".to_string(), "ID-1000".into());
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"master-id":"ID-1000","score":42}"#);
    }
}
