use super::csv::build_csv;
use super::generator::ReportRow;
use super::metric::Metric;
use std::collections::HashMap;

/// Metric id -> filter name -> checkbox state.
///
/// Entries are created on first toggle and never removed, even after the
/// metric is deselected.
pub type ActiveFilters = HashMap<String, HashMap<String, bool>>;

/// Fixed label of the "Data Completeness" tile.
pub const DATA_COMPLETENESS: &str = "100%";

/// Figures shown in the dashboard summary tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_records: usize,
    pub selected_metrics: usize,
    /// Metrics that have at least one filter entry, stale ones included.
    pub active_filters: usize,
    pub data_completeness: &'static str,
}

/// State of one mounted report builder.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    selected: Vec<Metric>,
    active_filters: ActiveFilters,
    report: Option<Vec<ReportRow>>,
    dashboard_visible: bool,
    generating: bool,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Remove `metric` if selected, otherwise append it.
    pub fn toggle_metric(&mut self, metric: &Metric) {
        if let Some(pos) = self.selected.iter().position(|m| m.id == metric.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(metric.clone());
        }
    }

    pub fn is_selected(&self, metric_id: &str) -> bool {
        self.selected.iter().any(|m| m.id == metric_id)
    }

    /// Selected metrics in selection order.
    pub fn selected(&self) -> &[Metric] {
        &self.selected
    }

    // ---------------------------------------------------------------------
    // Filters
    // ---------------------------------------------------------------------

    /// Record a checkbox state. `filter` is not checked against the metric's
    /// declared filters.
    pub fn toggle_filter(&mut self, metric_id: &str, filter: &str, value: bool) {
        self.active_filters
            .entry(metric_id.to_string())
            .or_default()
            .insert(filter.to_string(), value);
    }

    pub fn filter_state(&self, metric_id: &str, filter: &str) -> bool {
        self.active_filters
            .get(metric_id)
            .and_then(|filters| filters.get(filter))
            .copied()
            .unwrap_or(false)
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    // ---------------------------------------------------------------------
    // Generation
    // ---------------------------------------------------------------------

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Whether the "Generate Report" control is enabled.
    pub fn can_generate(&self) -> bool {
        !self.selected.is_empty() && !self.generating
    }

    /// Mark a generation as running and return the metrics it must cover.
    ///
    /// Returns `None` while another generation is still running. An empty
    /// selection is not rejected here; the UI gates it.
    pub fn begin_generation(&mut self) -> Option<Vec<Metric>> {
        if self.generating {
            return None;
        }
        self.generating = true;
        Some(self.selected.clone())
    }

    /// Replace the report with `rows` and show the dashboard.
    pub fn finish_generation(&mut self, rows: Vec<ReportRow>) {
        self.report = Some(rows);
        self.dashboard_visible = true;
        self.generating = false;
    }

    // ---------------------------------------------------------------------
    // Report & dashboard
    // ---------------------------------------------------------------------

    pub fn report(&self) -> Option<&[ReportRow]> {
        self.report.as_deref()
    }

    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    pub fn is_dashboard_visible(&self) -> bool {
        self.dashboard_visible
    }

    /// Flip dashboard visibility. No-op without a report.
    pub fn toggle_dashboard(&mut self) {
        if self.report.is_some() {
            self.dashboard_visible = !self.dashboard_visible;
        }
    }

    /// First `limit` rows of the report.
    pub fn preview_rows(&self, limit: usize) -> &[ReportRow] {
        let rows = self.report.as_deref().unwrap_or_default();
        &rows[..rows.len().min(limit)]
    }

    /// Rows not covered by `preview_rows(limit)`.
    pub fn hidden_row_count(&self, limit: usize) -> usize {
        self.report
            .as_ref()
            .map(|rows| rows.len().saturating_sub(limit))
            .unwrap_or(0)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_records: self.report.as_ref().map(Vec::len).unwrap_or(0),
            selected_metrics: self.selected.len(),
            active_filters: self.active_filters.len(),
            data_completeness: DATA_COMPLETENESS,
        }
    }

    /// CSV text of the report over the current selection, `None` when there
    /// is nothing to export.
    pub fn export_csv(&self) -> Option<String> {
        match self.report.as_deref() {
            Some(rows) if !rows.is_empty() => Some(build_csv(&self.selected, rows)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_custom_reports::generator::{
        generate_rows, ReportValue, STATUS_VALUES,
    };
    use crate::dashboards::d404_custom_reports::metric::{find_metric, MetricType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn metric(id: &str) -> &'static Metric {
        find_metric(id).unwrap()
    }

    fn selected_ids(builder: &ReportBuilder) -> Vec<&'static str> {
        builder.selected().iter().map(|m| m.id).collect()
    }

    fn generate(builder: &mut ReportBuilder, seed: u64) {
        let metrics = builder.begin_generation().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        builder.finish_generation(generate_rows(&metrics, 50, 2024, &mut rng));
    }

    #[test]
    fn test_toggle_metric_twice_restores_selection() {
        let mut builder = ReportBuilder::new();
        builder.toggle_metric(metric("score"));
        builder.toggle_metric(metric("attempts"));
        builder.toggle_metric(metric("time-spent"));

        builder.toggle_metric(metric("attempts"));
        assert_eq!(selected_ids(&builder), vec!["score", "time-spent"]);

        builder.toggle_metric(metric("attempts"));
        assert_eq!(selected_ids(&builder), vec!["score", "time-spent", "attempts"]);
        assert!(builder.is_selected("attempts"));

        builder.toggle_metric(metric("score"));
        builder.toggle_metric(metric("score"));
        assert_eq!(selected_ids(&builder), vec!["time-spent", "attempts", "score"]);
    }

    #[test]
    fn test_toggle_filter_keeps_entry() {
        let mut builder = ReportBuilder::new();
        builder.toggle_filter("score", "Average", true);
        assert!(builder.filter_state("score", "Average"));

        builder.toggle_filter("score", "Average", false);
        assert_eq!(builder.active_filters()["score"].get("Average"), Some(&false));
        assert!(!builder.filter_state("score", "Average"));
    }

    #[test]
    fn test_toggle_filter_accepts_undeclared_names() {
        let mut builder = ReportBuilder::new();
        builder.toggle_filter("score", "Not A Filter", true);
        builder.toggle_filter("nope", "Count", true);
        assert!(builder.filter_state("score", "Not A Filter"));
        assert!(builder.filter_state("nope", "Count"));
    }

    #[test]
    fn test_stale_filters_count_in_summary() {
        let mut builder = ReportBuilder::new();
        builder.toggle_metric(metric("score"));
        builder.toggle_filter("score", "Count", true);
        builder.toggle_metric(metric("score"));
        builder.toggle_metric(metric("attempts"));

        let summary = builder.summary();
        assert_eq!(summary.selected_metrics, 1);
        assert_eq!(summary.active_filters, 1);
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.data_completeness, "100%");
    }

    #[test]
    fn test_toggle_dashboard_without_report_is_noop() {
        let mut builder = ReportBuilder::new();
        builder.toggle_dashboard();
        assert!(!builder.is_dashboard_visible());
        assert!(!builder.has_report());
    }

    #[test]
    fn test_generation_lifecycle() {
        let mut builder = ReportBuilder::new();
        assert!(!builder.can_generate());
        builder.toggle_metric(metric("score"));
        assert!(builder.can_generate());

        let snapshot = builder.begin_generation().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(builder.is_generating());
        assert!(!builder.can_generate());
        assert!(builder.begin_generation().is_none());

        let mut rng = StdRng::seed_from_u64(9);
        builder.finish_generation(generate_rows(&snapshot, 50, 2024, &mut rng));
        assert!(!builder.is_generating());
        assert!(builder.is_dashboard_visible());
        assert_eq!(builder.report().map(<[_]>::len), Some(50));

        builder.toggle_dashboard();
        assert!(!builder.is_dashboard_visible());
        builder.toggle_dashboard();
        assert!(builder.is_dashboard_visible());
    }

    #[test]
    fn test_regeneration_replaces_report() {
        let mut builder = ReportBuilder::new();
        builder.toggle_metric(metric("score"));
        generate(&mut builder, 1);
        builder.toggle_metric(metric("score"));
        builder.toggle_metric(metric("master-id"));
        generate(&mut builder, 2);

        let rows = builder.report().unwrap();
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|r| r.len() == 1 && r.contains_key("master-id")));
    }

    #[test]
    fn test_empty_selection_generation() {
        let mut builder = ReportBuilder::new();
        generate(&mut builder, 4);
        let rows = builder.report().unwrap();
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_master_id_and_status_scenario() {
        let mut builder = ReportBuilder::new();
        builder.toggle_metric(metric("master-id"));
        builder.toggle_metric(metric("completion-status"));
        generate(&mut builder, 2024);

        let rows = builder.report().unwrap();
        assert_eq!(rows.len(), 50);
        for row in rows {
            assert_eq!(row.len(), 2);
            let id = row["master-id"].to_string();
            assert!(id.starts_with("ID-10"), "{id}");
            assert_eq!(id.len(), 7);
            let status = row["completion-status"].to_string();
            assert!(STATUS_VALUES.contains(&status.as_str()), "{status}");
        }
    }

    #[test]
    fn test_preview_and_hidden_rows() {
        let mut builder = ReportBuilder::new();
        assert!(builder.preview_rows(10).is_empty());
        assert_eq!(builder.hidden_row_count(10), 0);

        builder.toggle_metric(metric("attempts"));
        generate(&mut builder, 8);
        assert_eq!(builder.preview_rows(10).len(), 10);
        assert_eq!(builder.hidden_row_count(10), 40);
        assert_eq!(builder.preview_rows(100).len(), 50);
        assert_eq!(builder.hidden_row_count(100), 0);
    }

    #[test]
    fn test_export_csv() {
        let mut builder = ReportBuilder::new();
        assert!(builder.export_csv().is_none());

        let score = Metric {
            id: "score",
            name: "Score",
            metric_type: MetricType::Numeric,
            filters: &[],
        };
        builder.toggle_metric(&score);
        builder.begin_generation();
        let mut row = ReportRow::new();
        row.insert("score".to_string(), ReportValue::Number(42));
        builder.finish_generation(vec![row]);

        assert_eq!(builder.export_csv().as_deref(), Some("Score\n42"));
    }

    #[test]
    fn test_export_uses_current_selection() {
        let mut builder = ReportBuilder::new();
        builder.toggle_metric(metric("master-id"));
        generate(&mut builder, 6);
        builder.toggle_metric(metric("score"));

        let csv = builder.export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "Master-O ID,Score");
        assert_eq!(lines[1], "ID-1000,");
    }
}
