// ==========================================
// Test Data Builders
// ==========================================
// CSV fixtures mirroring the Lastmanagement workbook
// layout, written to temp files with tempfile.
// ==========================================

use chrono::NaiveDate;
use h2_lastmanagement::engine::projection::DesignatedDays;
use h2_lastmanagement::{AnnualSpec, ChartSpec, DashboardConfig, OverlaySpec};
use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for a Lastmanagement-shaped CSV fixture.
pub struct WorkbookBuilder {
    header: String,
    lines: Vec<String>,
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        Self {
            header: "Tag,Uhrzeit,Speicherveränderung [kg],SOC [%],Stromkosten [€],Zeit für Elektrolyseur".to_string(),
            lines: Vec::new(),
        }
    }

    pub fn row(
        mut self,
        day: &str,
        interval: &str,
        delta: &str,
        soc: &str,
        cost: &str,
        status: &str,
    ) -> Self {
        self.lines
            .push(format!("{day},{interval},{delta},{soc},{cost},{status}"));
        self
    }

    /// Write the fixture to a temp CSV file. The file is deleted
    /// when the returned handle drops.
    pub fn write(self) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("cannot create temp fixture");
        writeln!(file, "{}", self.header).unwrap();
        for line in self.lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }
}

/// Two full days of plausible quarter-hour-ish data.
pub fn two_day_workbook() -> NamedTempFile {
    WorkbookBuilder::new()
        .row("01.02.2025", "08:00–08:15", "1", "0.50", "0.40", "darf laden")
        .row("01.02.2025", "08:15–08:30", "-2", "0.45", "0.10", "darf nicht laden")
        .row("01.02.2025", "08:30–08:45", "3", "0.55", "0.60", "darf laden")
        .row("02.02.2025", "08:00–08:15", "4", "0.60", "0.80", "darf laden")
        .row("02.02.2025", "08:15–08:30", "-1", "0.58", "0.05", "unbekannt")
        .row("02.02.2025", "08:30–08:45", "1", "0.60", "0.20", "darf laden")
        .write()
}

/// Dashboard config matching the fixture columns: storage chart with
/// SOC overlay and release band, plus a cost chart with a per-day
/// cumulative overlay.
pub fn fixture_config() -> DashboardConfig {
    DashboardConfig {
        day_column: "Tag".to_string(),
        interval_column: "Uhrzeit".to_string(),
        keywords: Default::default(),
        charts: vec![
            ChartSpec {
                id: "speicherverlauf".to_string(),
                title: "Speicherverlauf".to_string(),
                metrics: vec!["Speicherveränderung [kg]".to_string()],
                overlay: Some(OverlaySpec::Column("SOC [%]".to_string())),
                status_bands: vec!["Zeit für Elektrolyseur".to_string()],
            },
            ChartSpec {
                id: "stromkosten".to_string(),
                title: "Stromkosten".to_string(),
                metrics: vec!["Stromkosten [€]".to_string()],
                overlay: Some(OverlaySpec::Cumulative("Stromkosten [€]".to_string())),
                status_bands: vec![],
            },
        ],
        annual: None,
    }
}

pub fn designated_days() -> DesignatedDays {
    DesignatedDays {
        baseline: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        standard: NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
        maintenance: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        post_maintenance: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
    }
}

pub fn annual_spec() -> AnnualSpec {
    AnnualSpec {
        metric: "Stromkosten [€]".to_string(),
        days: designated_days(),
    }
}
