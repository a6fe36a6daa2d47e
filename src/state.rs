//! Application state management

use crate::api::http::HttpHealthDataSource;
use crate::api::types::DateRange;
use crate::api::HealthDataSource;
use crate::error::{ErrorResponse, Result};
use crate::services::compose_service::ComposedDashboard;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dashboard lifecycle, exposed to the frontend as-is
///
/// `Failed` carries the fetch diagnostics so the UI can render "data
/// unavailable" distinctly from a `Ready` state with empty sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum DashboardState {
    Idle,
    Loading,
    Ready(ComposedDashboard),
    Failed(ErrorResponse),
}

/// Controller state that must move as one unit
///
/// Range, refresh generation, and dashboard position live behind a single
/// lock: adopting a range, bumping the generation, and entering `Loading`
/// must never interleave with another refresh, or "last range wins" breaks
/// (a later bump could hand the winning token to an earlier range).
struct RefreshCursor {
    /// Active reporting window, replaced wholesale on user interaction
    range: DateRange,

    /// Monotonic refresh generation; resolutions carrying an older token
    /// are stale and must be discarded (last range wins)
    generation: u64,

    /// Current dashboard state machine position
    dashboard: DashboardState,
}

/// Application state shared across all commands
pub struct AppState {
    /// Remote health data source
    pub source: Arc<dyn HealthDataSource>,

    cursor: RwLock<RefreshCursor>,
}

impl AppState {
    /// Create state over an explicit source and initial range
    pub fn new(source: Arc<dyn HealthDataSource>, initial_range: DateRange) -> Self {
        Self {
            source,
            cursor: RwLock::new(RefreshCursor {
                range: initial_range,
                generation: 0,
                dashboard: DashboardState::Idle,
            }),
        }
    }

    /// Create state against the configured HTTP backend, defaulting the
    /// range to the last seven days
    pub fn from_env() -> Result<Self> {
        let source = Arc::new(HttpHealthDataSource::from_env()?);
        let range = DateRange::last_seven_days(chrono::Local::now().date_naive());
        Ok(Self::new(source, range))
    }

    /// Snapshot of the current dashboard state
    pub fn dashboard_state(&self) -> DashboardState {
        self.cursor.read().dashboard.clone()
    }

    /// The active reporting window
    pub fn current_range(&self) -> DateRange {
        self.cursor.read().range
    }

    /// Adopt `range` as current, enter `Loading`, and hand out the token a
    /// resolution must present. Any previous `Ready` data is discarded.
    /// One write guard covers all three updates.
    pub(crate) fn begin_refresh(&self, range: DateRange) -> u64 {
        let mut cursor = self.cursor.write();
        cursor.range = range;
        cursor.generation += 1;
        cursor.dashboard = DashboardState::Loading;
        cursor.generation
    }

    /// Commit a resolved state if `token` still belongs to the newest
    /// refresh; returns false when the response was stale and dropped.
    /// The token check and the state write happen under the same guard, so
    /// a concurrent `begin_refresh` can never slip between them.
    pub(crate) fn commit(&self, token: u64, next: DashboardState) -> bool {
        let mut cursor = self.cursor.write();
        if cursor.generation != token {
            return false;
        }
        cursor.dashboard = next;
        true
    }
}
