//! Dashboard commands

use crate::api::types::DateRange;
use crate::error::{AppError, Result};
use crate::services::DashboardService;
use crate::state::{AppState, DashboardState};
use chrono::NaiveDate;
use serde::Serialize;
use tauri::State;

/// Active date range as ISO day strings
#[derive(Debug, Clone, Serialize)]
pub struct DateRangeDto {
    pub start: String,
    pub end: String,
}

impl From<DateRange> for DateRangeDto {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start.format("%Y-%m-%d").to_string(),
            end: range.end.format("%Y-%m-%d").to_string(),
        }
    }
}

fn parse_day(value: &str, field: &str) -> Result<NaiveDate> {
    value
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be YYYY-MM-DD, got '{}'", field, value)))
}

/// Get the current dashboard state
#[tauri::command]
pub fn get_dashboard_state(state: State<'_, AppState>) -> DashboardState {
    state.dashboard_state()
}

/// Get the currently selected date range
#[tauri::command]
pub fn get_date_range(state: State<'_, AppState>) -> DateRangeDto {
    state.current_range().into()
}

/// Select a new date range and refresh; returns the resulting state
#[tauri::command]
pub async fn set_date_range(
    state: State<'_, AppState>,
    start: String,
    end: String,
) -> Result<DashboardState> {
    let range = DateRange::new(parse_day(&start, "start")?, parse_day(&end, "end")?)?;
    Ok(DashboardService::refresh(&state, range).await)
}

/// Re-fetch the current range (initial load and manual refresh)
#[tauri::command]
pub async fn refresh_dashboard(state: State<'_, AppState>) -> Result<DashboardState> {
    Ok(DashboardService::refresh_current(&state).await)
}
