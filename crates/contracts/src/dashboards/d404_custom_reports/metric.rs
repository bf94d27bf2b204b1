use serde::Serialize;

// ---------------------------------------------------------------------------
// Metric identity & type
// ---------------------------------------------------------------------------

/// Kind of value a metric produces; drives data synthesis and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricType {
    Identifier,
    Date,
    Category,
    Status,
    Numeric,
    Time,
}

impl MetricType {
    /// Lowercase label shown in the type badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Identifier => "identifier",
            MetricType::Date => "date",
            MetricType::Category => "category",
            MetricType::Status => "status",
            MetricType::Numeric => "numeric",
            MetricType::Time => "time",
        }
    }

    /// Glyph rendered next to the metric name in cards and table headers.
    pub fn glyph(&self) -> &'static str {
        match self {
            MetricType::Date => "\u{1F4C5}",
            MetricType::Numeric => "\u{1F522}",
            MetricType::Status => "\u{1F504}",
            MetricType::Time => "\u{23F1}\u{FE0F}",
            MetricType::Category => "\u{1F4C2}",
            MetricType::Identifier => "\u{1F4CA}",
        }
    }
}

/// A named, typed reportable field with the filters it supports.
///
/// Only ever built statically, so it serializes but never deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub filters: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Static catalog
// ---------------------------------------------------------------------------

const DATE_FILTERS: &[&str] = &["Date Range", "Specific Date"];
const DISTINCT_FILTERS: &[&str] = &["Count", "Distinct Count", "Distinct Value"];

/// Every metric the report builder offers, in display order.
pub static METRIC_CATALOG: [Metric; 13] = [
    Metric {
        id: "master-id",
        name: "Master-O ID",
        metric_type: MetricType::Identifier,
        filters: DISTINCT_FILTERS,
    },
    Metric {
        id: "content-launch-date",
        name: "Content Launch Date",
        metric_type: MetricType::Date,
        filters: DATE_FILTERS,
    },
    Metric {
        id: "challenges",
        name: "Challenges",
        metric_type: MetricType::Category,
        filters: &["Status"],
    },
    Metric {
        id: "completion-status",
        name: "Completion Status",
        metric_type: MetricType::Status,
        filters: &[
            "Status Count",
            "Status Percentage",
            "Less than",
            "Greater than",
            "Range",
        ],
    },
    Metric {
        id: "completion-date",
        name: "Completion Date",
        metric_type: MetricType::Date,
        filters: DATE_FILTERS,
    },
    Metric {
        id: "completed-days",
        name: "Completed In Days",
        metric_type: MetricType::Numeric,
        filters: &["Count", "Less than", "Greater than"],
    },
    Metric {
        id: "attempts",
        name: "Attempts",
        metric_type: MetricType::Numeric,
        filters: &["Status Count"],
    },
    Metric {
        id: "score",
        name: "Score",
        metric_type: MetricType::Numeric,
        filters: &["Count", "Average", "Percentage"],
    },
    Metric {
        id: "max-score",
        name: "Max Score",
        metric_type: MetricType::Numeric,
        filters: &["Count"],
    },
    Metric {
        id: "time-spent",
        name: "Time Spent",
        metric_type: MetricType::Time,
        filters: &["Time Value", "Average"],
    },
    Metric {
        id: "microskill-name",
        name: "Microskill Name",
        metric_type: MetricType::Category,
        filters: DISTINCT_FILTERS,
    },
    Metric {
        id: "login-status",
        name: "Login Status",
        metric_type: MetricType::Status,
        filters: &["Status Count"],
    },
    Metric {
        id: "last-login-date",
        name: "Last Login Date",
        metric_type: MetricType::Date,
        filters: DATE_FILTERS,
    },
];

/// Looks up a catalog metric by id.
#[cfg(test)]
pub(crate) fn find_metric(id: &str) -> Option<&'static Metric> {
    METRIC_CATALOG.iter().find(|m| m.id == id)
}
