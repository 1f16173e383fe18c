use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use festival_planner::cache::CachedPlanner;
use festival_planner::config::ServerConfig;
use festival_planner::domain::LineUp;
use festival_planner::ingest::{read_line_up, read_timetable};
use festival_planner::planner::DayPlanner;
use festival_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Ingest the festival files (fail fast if unreadable)
    let timetable = read_timetable(&config.timetable_path)
        .map_err(|e| format!("{}: {e}", config.timetable_path.display()))?;
    info!(
        services = timetable.len(),
        venues = timetable.venues().len(),
        "loaded timetable"
    );

    let line_up = match &config.lineup_path {
        Some(path) => read_line_up(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => LineUp::new(),
    };
    info!(events = line_up.len(), "loaded line-up");

    // Build the planner; it keeps its own copy of the timetable
    let planner = DayPlanner::with_config(&timetable, config.planner.clone());
    let planner = CachedPlanner::new(planner, &config.cache);

    let state = AppState::new(planner, line_up);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Festival Planner listening on http://{}", config.addr);
    info!("  GET  /health        - Health check");
    info!("  GET  /services      - All shuttle services");
    info!("  GET  /venues        - All venues");
    info!("  GET  /destinations  - Direct destinations from a venue");
    info!("  GET  /reach         - Point-to-point reachability");
    info!("  GET  /lineup        - Loaded line-up");
    info!("  POST /plan/check    - Check a plan of events");

    axum::serve(listener, app).await?;
    Ok(())
}
