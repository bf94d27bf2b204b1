mod dashboard;
mod metric_picker;
mod report_view;
mod selected_metrics;

pub use dashboard::CustomReportsDashboard;

use contracts::dashboards::d404_custom_reports::MetricType;
use thaw::BadgeColor;

/// Badge colour of a metric type chip.
fn type_badge_color(metric_type: MetricType) -> BadgeColor {
    match metric_type {
        MetricType::Date | MetricType::Identifier => BadgeColor::Brand,
        MetricType::Numeric => BadgeColor::Success,
        MetricType::Status => BadgeColor::Warning,
        MetricType::Time => BadgeColor::Informative,
        MetricType::Category => BadgeColor::Important,
    }
}
