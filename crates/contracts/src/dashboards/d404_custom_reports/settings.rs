use serde::{Deserialize, Serialize};

/// Tunables of the custom reports demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Rows produced by one generation.
    pub row_count: usize,
    /// Artificial delay before the generated report is committed.
    pub generation_delay_ms: u32,
    /// Year every synthetic date falls into.
    pub sample_year: i32,
    /// Rows shown in the dashboard table.
    pub preview_rows: usize,
    pub export_filename: String,
    /// Relative path of the page embedded by the car-game view.
    pub car_game_src: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            row_count: 50,
            generation_delay_ms: 2000,
            sample_year: 2024,
            preview_rows: 10,
            export_filename: "custom_report.csv".to_string(),
            car_game_src: "../car-game.html".to_string(),
        }
    }
}

/// Default settings embedded in the bundle
const DEFAULT_SETTINGS: &str = r#"{
    "row_count": 50,
    "generation_delay_ms": 2000,
    "sample_year": 2024,
    "preview_rows": 10,
    "export_filename": "custom_report.csv",
    "car_game_src": "../car-game.html"
}"#;

/// Parse settings from a JSON document; missing keys take their defaults.
pub fn parse_settings(json: &str) -> anyhow::Result<ReportSettings> {
    let settings: ReportSettings = serde_json::from_str(json)?;
    Ok(settings)
}

/// Load the embedded settings.
pub fn load_settings() -> anyhow::Result<ReportSettings> {
    parse_settings(DEFAULT_SETTINGS)
}
