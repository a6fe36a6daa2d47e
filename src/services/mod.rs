//! Services Layer
//!
//! Business logic called by the Tauri IPC commands.
//!
//! # Architecture
//!
//! ```text
//! Frontend UI --> Tauri Commands --> DashboardService
//!                                        |-- SnapshotService --> HealthDataSource
//!                                        `-- ComposeService  (pure)
//! ```
//!
//! # Services
//!
//! - `SnapshotService` - Four-way concurrent fetch over one date range
//! - `ComposeService` - Snapshot to render-ready view model, with defaults
//! - `DashboardService` - Refresh state machine with stale-response guard

pub mod compose_service;
pub mod dashboard_service;
pub mod snapshot_service;

// Re-export commonly used types and services
pub use compose_service::{
    ComposeService, ComposedDashboard, DailyView, MetricsSummary, RecommendationEntry,
    SentimentSummary,
};
pub use dashboard_service::DashboardService;
pub use snapshot_service::{FetchPolicy, SnapshotService};
