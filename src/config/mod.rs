// ==========================================
// Lastmanagement Dashboard - Configuration Layer
// ==========================================
// Chart definitions, classifier keywords and the
// designated-day calendar for the annual projection.
// ==========================================
// Everything here is data: the defaults mirror the
// Lastmanagement workbook, but a JSON config serves any
// dataset with the same shape.
// ==========================================

use crate::engine::classifier::ClassifierKeywords;
use crate::engine::projection::DesignatedDays;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================
// OverlaySpec - optional secondary-axis series
// ==========================================

/// What to draw on the secondary axis of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "column")]
pub enum OverlaySpec {
    /// A metric column drawn as-is (e.g. the SOC line).
    Column(String),
    /// Per-day running total of a metric column, computed by the
    /// cumulative aggregator.
    Cumulative(String),
}

impl OverlaySpec {
    /// The source column the overlay reads from.
    pub fn column(&self) -> &str {
        match self {
            OverlaySpec::Column(name) | OverlaySpec::Cumulative(name) => name,
        }
    }
}

// ==========================================
// ChartSpec - one requested chart
// ==========================================

/// One chart's data requirements, by source column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,

    /// Primary-axis metric columns.
    pub metrics: Vec<String>,

    /// Optional secondary-axis series.
    #[serde(default)]
    pub overlay: Option<OverlaySpec>,

    /// Status columns classified into per-point charge-state bands.
    #[serde(default)]
    pub status_bands: Vec<String>,
}

// ==========================================
// AnnualSpec - cost projection configuration
// ==========================================

/// Configuration of the annual cost projection: which metric to
/// total per day and which four days represent the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSpec {
    pub metric: String,
    pub days: DesignatedDays,
}

// ==========================================
// DashboardConfig - the whole engine configuration
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Source column holding the calendar day (DD.MM.YYYY).
    pub day_column: String,

    /// Source column holding the interval label ("08:00–08:15").
    pub interval_column: String,

    /// Keywords for the free-text status classifier.
    #[serde(default)]
    pub keywords: ClassifierKeywords,

    /// Requested charts.
    pub charts: Vec<ChartSpec>,

    /// Optional annual cost projection.
    #[serde(default)]
    pub annual: Option<AnnualSpec>,
}

impl DashboardConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Union of all columns the configured charts need, used to bind
    /// the source table once for every chart.
    pub fn column_request(&self) -> crate::importer::ColumnRequest {
        let mut metrics: Vec<String> = Vec::new();
        let mut status_fields: Vec<String> = Vec::new();

        let mut push_unique = |list: &mut Vec<String>, name: &str| {
            if !list.iter().any(|existing| existing == name) {
                list.push(name.to_string());
            }
        };

        for chart in &self.charts {
            for metric in &chart.metrics {
                push_unique(&mut metrics, metric);
            }
            if let Some(overlay) = &chart.overlay {
                push_unique(&mut metrics, overlay.column());
            }
            for band in &chart.status_bands {
                push_unique(&mut status_fields, band);
            }
        }
        if let Some(annual) = &self.annual {
            push_unique(&mut metrics, &annual.metric);
        }

        crate::importer::ColumnRequest {
            day: self.day_column.clone(),
            interval: self.interval_column.clone(),
            metrics,
            status_fields,
        }
    }
}

impl Default for DashboardConfig {
    /// The Lastmanagement workbook's hydrogen storage chart: storage
    /// delta bars, SOC on the secondary axis, electrolyser release
    /// band.
    fn default() -> Self {
        Self {
            day_column: "Tag".to_string(),
            interval_column: "Uhrzeit".to_string(),
            keywords: ClassifierKeywords::default(),
            charts: vec![ChartSpec {
                id: "speicherverlauf".to_string(),
                title: "Speicherverlauf über mehrere Tage, SOC (0–1) und Ladefreigabe"
                    .to_string(),
                metrics: vec!["Speicherveränderung [kg]".to_string()],
                overlay: Some(OverlaySpec::Column("SOC [%]".to_string())),
                status_bands: vec!["Zeit für Elektrolyseur".to_string()],
            }],
            annual: None,
        }
    }
}
