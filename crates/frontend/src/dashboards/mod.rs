pub mod d404_custom_reports;

pub use d404_custom_reports::ui::CustomReportsDashboard;
