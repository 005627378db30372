//! Linkdeck server: HTTP surface over the dashboard state machine.
pub mod config;
pub mod error;
pub mod runner;
pub mod state;
pub mod web {
    pub mod handlers;
    pub mod router;
}

use std::sync::Arc;

use linkdeck_engine::{ReqwestProber, RestRecordSource};

use crate::config::Config;
use crate::runner::Dashboard;
use crate::state::AppState;

/// Assembles the application state from configuration.
///
/// Must run inside a tokio runtime: the dashboard runner spawns its engine
/// and event-pump tasks here.
pub fn build_state(cfg: &Config) -> anyhow::Result<AppState> {
    let prober = ReqwestProber::new(&cfg.probe)
        .map_err(|err| anyhow::anyhow!("failed to build prober: {err}"))?;
    let records = RestRecordSource::new(cfg.records.clone())?;
    let dashboard = Dashboard::new(cfg.probe.clone(), Arc::new(prober));

    Ok(AppState {
        records: Arc::new(records),
        settings: cfg.records.clone(),
        dashboard,
    })
}

pub fn build_app(cfg: Config) -> anyhow::Result<(axum::Router, u16)> {
    let state = build_state(&cfg)?;
    Ok((web::router::build_router(state), cfg.port))
}
