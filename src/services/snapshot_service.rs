//! Snapshot Service
//!
//! Issues the four remote reads for one date range and settles them into a
//! `HealthSnapshot` under a single completion policy.

use crate::api::types::{DateRange, HealthSnapshot};
use crate::api::HealthDataSource;
use crate::error::{AppError, Resource, Result};
use tracing::{info, warn};

/// How per-resource failures combine into one fetch result
///
/// The policy decision lives here and nowhere else; composition never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Any failed read fails the whole refresh; no partial snapshot escapes
    AllOrNothing,
    /// Failed reads degrade to empty sequences / absent insights
    BestEffort,
}

/// Active completion policy
pub const COMPLETION_POLICY: FetchPolicy = FetchPolicy::AllOrNothing;

/// Snapshot service for the four-way concurrent fetch
pub struct SnapshotService;

impl SnapshotService {
    /// Fetch a snapshot under the active completion policy
    pub async fn fetch(
        source: &dyn HealthDataSource,
        range: &DateRange,
    ) -> Result<HealthSnapshot> {
        Self::fetch_with_policy(source, range, COMPLETION_POLICY).await
    }

    /// Fetch a snapshot under an explicit completion policy
    ///
    /// The four reads are launched together and inspected only after all of
    /// them settle; no ordering holds between their completions.
    pub async fn fetch_with_policy(
        source: &dyn HealthDataSource,
        range: &DateRange,
        policy: FetchPolicy,
    ) -> Result<HealthSnapshot> {
        // Reject before any read goes out
        if range.start > range.end {
            return Err(AppError::Validation(format!(
                "start date {} is after end date {}",
                range.start, range.end
            )));
        }

        info!(
            "SnapshotService::fetch - {} to {} ({:?})",
            range.start, range.end, policy
        );

        let (insights, metrics, sleep, journal) = tokio::join!(
            source.get_insights(range),
            source.get_metrics(range),
            source.get_sleep(range),
            source.get_journal(range),
        );

        let insights = insights.map_err(|e| e.for_resource(Resource::Insights));
        let metrics = metrics.map_err(|e| e.for_resource(Resource::Metrics));
        let sleep = sleep.map_err(|e| e.for_resource(Resource::Sleep));
        let journal = journal.map_err(|e| e.for_resource(Resource::Journal));

        match policy {
            FetchPolicy::AllOrNothing => Ok(HealthSnapshot {
                insights: Some(insights?),
                metrics: metrics?,
                sleep: sleep?,
                journal: journal?,
            }),
            FetchPolicy::BestEffort => Ok(HealthSnapshot {
                insights: Self::degrade(insights, Resource::Insights),
                metrics: Self::degrade(metrics, Resource::Metrics).unwrap_or_default(),
                sleep: Self::degrade(sleep, Resource::Sleep).unwrap_or_default(),
                journal: Self::degrade(journal, Resource::Journal).unwrap_or_default(),
            }),
        }
    }

    fn degrade<T>(result: Result<T>, resource: Resource) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Degrading failed {} read: {}", resource, e);
                None
            }
        }
    }
}
