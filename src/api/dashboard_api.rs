// ==========================================
// Lastmanagement Dashboard - Dashboard API
// ==========================================
// Facade over the engine: runs the pipeline per
// requested chart and hands out series bundles and
// scalar projections.
// ==========================================
// Architecture: API layer -> engine layer (pure
// transforms); file loading sits in the importer and
// runs once, before the core.
// ==========================================

use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ChartSpec, DashboardConfig, OverlaySpec};
use crate::domain::record::TimestampedRecord;
use crate::domain::series::{AnnotationBand, LabeledSeries, SeriesBundle};
use crate::engine::cumulative::Partition;
use crate::engine::projection::{self, DesignatedDays};
use crate::importer::{self, ColumnBinding, ImportError, IngestBatch};

// ==========================================
// DashboardApi
// ==========================================

/// Dashboard facade.
///
/// Responsibilities:
/// 1. Ingest: file -> canonical timestamped record stream
/// 2. Series assembly: records -> one `SeriesBundle` per chart
/// 3. Scalar figures: annual cost projection
///
/// Everything downstream of ingest is a pure transform; a caller
/// that wants a different view (e.g. another day range) reruns the
/// transform on filtered records instead of patching prior output.
pub struct DashboardApi {
    config: DashboardConfig,
}

impl DashboardApi {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ==========================================
    // Ingest
    // ==========================================

    /// Load a source file into the canonical record stream.
    ///
    /// Binds every column the configured charts request before any
    /// row is processed; a missing column fails here, as a
    /// configuration error.
    pub fn ingest_file<P: AsRef<Path>>(&self, path: P) -> ApiResult<IngestBatch> {
        let table = importer::parse_file(path.as_ref())?;
        let binding = ColumnBinding::bind(&table, &self.config.column_request())?;

        let batch = importer::build_records(&table, &binding);
        batch.report.log_summary();
        tracing::info!(
            batch_id = %batch.report.batch_id,
            records = batch.records.len(),
            source = %path.as_ref().display(),
            "ingest complete"
        );
        Ok(batch)
    }

    // ==========================================
    // Selection boundary
    // ==========================================

    /// Inclusive day-range filter, applied to the raw record set
    /// before it enters the core. The core itself has no notion of
    /// "all days" vs "one day".
    pub fn filter_day_range(
        records: &[TimestampedRecord],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<TimestampedRecord> {
        records
            .iter()
            .filter(|r| r.day().is_some_and(|d| d >= from && d <= to))
            .cloned()
            .collect()
    }

    // ==========================================
    // Series assembly
    // ==========================================

    /// Assemble the series bundle for one chart.
    ///
    /// # Parameters
    /// - records: chronologically ordered record stream (ingest
    ///   order, optionally day-range filtered)
    /// - spec: the chart definition; its columns must have been part
    ///   of the ingest configuration
    ///
    /// # Returns
    /// - Ok(SeriesBundle): axis, primary series, optional overlay
    ///   and status bands, all aligned to the same length
    /// - Err(ApiError::Import(MissingColumn)): the chart requests a
    ///   column the ingest never loaded
    pub fn build_chart(
        &self,
        records: &[TimestampedRecord],
        spec: &ChartSpec,
    ) -> ApiResult<SeriesBundle> {
        self.check_chart_columns(records, spec)?;

        let timestamps = records.iter().map(|r| r.timestamp).collect();

        let series = spec
            .metrics
            .iter()
            .map(|metric| LabeledSeries {
                label: metric.clone(),
                values: records.iter().map(|r| r.metric(metric)).collect(),
            })
            .collect();

        let overlay = spec.overlay.as_ref().map(|overlay| match overlay {
            OverlaySpec::Column(metric) => LabeledSeries {
                label: metric.clone(),
                values: records.iter().map(|r| r.metric(metric)).collect(),
            },
            OverlaySpec::Cumulative(metric) => {
                let partition = Partition::new(records, |r: &TimestampedRecord| r.day());
                let running = partition.running_total(records, |r| r.metric(metric));
                LabeledSeries {
                    label: format!("{} (kumuliert)", metric),
                    values: running.into_iter().map(Some).collect(),
                }
            }
        });

        let bands = spec
            .status_bands
            .iter()
            .map(|field| AnnotationBand {
                label: field.clone(),
                states: records
                    .iter()
                    .map(|r| self.config.keywords.classify(r.status(field)))
                    .collect(),
            })
            .collect();

        let bundle = SeriesBundle {
            chart_id: spec.id.clone(),
            title: spec.title.clone(),
            timestamps,
            series,
            overlay,
            bands,
        };
        debug_assert!(bundle.is_aligned());
        Ok(bundle)
    }

    /// Assemble every configured chart.
    pub fn build_all_charts(
        &self,
        records: &[TimestampedRecord],
    ) -> ApiResult<Vec<SeriesBundle>> {
        self.config
            .charts
            .iter()
            .map(|spec| self.build_chart(records, spec))
            .collect()
    }

    // ==========================================
    // Annual projection
    // ==========================================

    /// Project the annual total of one metric from the designated
    /// representative days.
    ///
    /// Materializes the per-day total table from the record stream
    /// (unparseable days contribute no group) and delegates to the
    /// extrapolator. The result is unrounded; presentation rounds
    /// via [`projection::round_for_display`].
    pub fn annual_projection(
        &self,
        records: &[TimestampedRecord],
        metric: &str,
        days: &DesignatedDays,
    ) -> ApiResult<f64> {
        let partition = Partition::new(records, |r: &TimestampedRecord| r.day());
        let day_totals: HashMap<NaiveDate, f64> = partition
            .group_totals(records, |r| r.metric(metric))
            .into_iter()
            .filter_map(|(day, total)| day.map(|d| (d, total)))
            .collect();

        Ok(projection::project_annual(&day_totals, days)?)
    }

    /// Annual projection from the configured [`crate::config::AnnualSpec`].
    pub fn configured_annual_projection(
        &self,
        records: &[TimestampedRecord],
    ) -> ApiResult<Option<f64>> {
        match &self.config.annual {
            None => Ok(None),
            Some(annual) => self
                .annual_projection(records, &annual.metric, &annual.days)
                .map(Some),
        }
    }

    // ==========================================
    // internals
    // ==========================================

    /// A chart may only use columns the ingest configuration loaded;
    /// anything else is a configuration error, reported before any
    /// aggregation for the chart runs.
    fn check_chart_columns(
        &self,
        records: &[TimestampedRecord],
        spec: &ChartSpec,
    ) -> ApiResult<()> {
        if spec.id.trim().is_empty() {
            return Err(ApiError::InvalidInput("chart id must not be empty".into()));
        }
        let Some(first) = records.first() else {
            return Ok(()); // empty selection: nothing to check against
        };

        let mut wanted: Vec<&str> = spec.metrics.iter().map(String::as_str).collect();
        if let Some(overlay) = &spec.overlay {
            wanted.push(overlay.column());
        }
        for metric in wanted {
            if !first.record.metrics.contains_key(metric) {
                return Err(ImportError::MissingColumn {
                    column: metric.to_string(),
                    context: format!("chart '{}'", spec.id),
                }
                .into());
            }
        }
        for band in &spec.status_bands {
            if !first.record.status_fields.contains_key(band) {
                return Err(ImportError::MissingColumn {
                    column: band.clone(),
                    context: format!("chart '{}'", spec.id),
                }
                .into());
            }
        }
        Ok(())
    }
}
