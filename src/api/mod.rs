//! Remote health data source

pub mod http;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::{DateRange, Insights, JournalEntry, MetricRecord, SleepRecord};

/// The four independent reads the dashboard composes over
///
/// Each call covers one inclusive date range and may fail on its own; the
/// orchestrator decides how failures combine.
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Derived insights (trends, sentiment, recommendations) for the range
    async fn get_insights(&self, range: &DateRange) -> Result<Insights>;

    /// Daily activity metrics, ordered as the backend returns them
    async fn get_metrics(&self, range: &DateRange) -> Result<Vec<MetricRecord>>;

    /// Sleep records, ordered as the backend returns them
    async fn get_sleep(&self, range: &DateRange) -> Result<Vec<SleepRecord>>;

    /// Journal entries, ordered as the backend returns them
    async fn get_journal(&self, range: &DateRange) -> Result<Vec<JournalEntry>>;
}
