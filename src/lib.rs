//! MindBody Desktop - Personal Health Dashboard
//!
//! A desktop application that composes activity, sleep, and journal-sentiment
//! data from the MindBody backend into a single per-day dashboard view.

pub mod api;
pub mod commands;
pub mod error;
pub mod services;
pub mod state;

use services::DashboardService;
use state::AppState;
use tauri::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize and run the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindbody_desktop=debug,tauri=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MindBody Desktop...");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Initialize application state
            let app_state = AppState::from_env()?;
            app.manage(app_state);

            // Kick off the initial load for the default window
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<AppState>();
                DashboardService::refresh_current(&state).await;
            });

            tracing::info!("Application state initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::dashboard::get_dashboard_state,
            commands::dashboard::get_date_range,
            commands::dashboard::set_date_range,
            commands::dashboard::refresh_dashboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
