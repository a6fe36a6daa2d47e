//! Dashboard Service
//!
//! Drives the dashboard state machine: Idle -> Loading -> Ready | Failed,
//! re-entered on every range change. An in-flight fetch is not cancelled when
//! the range changes again; its late resolution is discarded via the request
//! generation token (last range wins).

use crate::api::types::DateRange;
use crate::error::ErrorResponse;
use crate::services::compose_service::ComposeService;
use crate::services::snapshot_service::SnapshotService;
use crate::state::{AppState, DashboardState};
use tracing::{debug, error, info};

/// Dashboard service for refresh orchestration
pub struct DashboardService;

impl DashboardService {
    /// Refresh the dashboard for a new range and return the resulting state
    ///
    /// Returns `Failed` as a value rather than an error: a failed fetch is a
    /// presentable state, and stale resolutions must not clobber newer ones.
    pub async fn refresh(state: &AppState, range: DateRange) -> DashboardState {
        info!(
            "DashboardService::refresh - {} to {}",
            range.start, range.end
        );

        let token = state.begin_refresh(range);

        let next = match SnapshotService::fetch(state.source.as_ref(), &range).await {
            Ok(snapshot) => DashboardState::Ready(ComposeService::compose(&snapshot)),
            Err(e) => {
                error!("Dashboard refresh failed: {}", e);
                DashboardState::Failed(ErrorResponse::from(&e))
            }
        };

        if !state.commit(token, next) {
            debug!(
                "Discarding stale response for superseded range {} to {}",
                range.start, range.end
            );
        }

        state.dashboard_state()
    }

    /// Re-fetch the currently selected range (initial load, manual refresh)
    pub async fn refresh_current(state: &AppState) -> DashboardState {
        let range = state.current_range();
        Self::refresh(state, range).await
    }
}
