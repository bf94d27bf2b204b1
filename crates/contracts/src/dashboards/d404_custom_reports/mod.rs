//! Custom reports dashboard: metric catalog, builder state, synthetic data
//! and CSV export.

pub mod builder;
pub mod csv;
pub mod generator;
pub mod metric;
pub mod settings;

pub use builder::{ActiveFilters, ReportBuilder, ReportSummary};
pub use generator::{generate_rows, ReportRow, ReportValue};
pub use metric::{Metric, MetricType, METRIC_CATALOG};
pub use settings::{load_settings, ReportSettings};
