use std::sync::Arc;

use dash_logging::dash_warn;
use linkdeck_core::UrlEntry;
use linkdeck_engine::{mock_entries, RecordError, RecordRow, RecordSettings, RecordSource};

use crate::error::AppError;
use crate::runner::Dashboard;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordSource>,
    pub settings: RecordSettings,
    pub dashboard: Dashboard,
}

impl AppState {
    /// Entry set for the listing path. Never fails: without a usable token
    /// the mock listing is served, and an upstream failure also degrades to
    /// mock data rather than a blank dashboard.
    pub async fn load_entries(&self) -> Vec<UrlEntry> {
        if self.settings.use_mock() {
            return mock_entries().into_iter().map(to_entry).collect();
        }
        match self.records.list_entries().await {
            Ok(rows) => rows.into_iter().map(to_entry).collect(),
            Err(err) => {
                dash_warn!("record listing failed, falling back to mock data: {}", err);
                mock_entries().into_iter().map(to_entry).collect()
            }
        }
    }

    /// Entry set for the redirect path. With a real upstream configured,
    /// failures surface to the caller instead of silently redirecting off
    /// mock data.
    pub async fn entries_for_redirect(&self) -> Result<Vec<UrlEntry>, AppError> {
        if self.settings.use_mock() {
            return Ok(mock_entries().into_iter().map(to_entry).collect());
        }
        match self.records.list_entries().await {
            Ok(rows) => Ok(rows.into_iter().map(to_entry).collect()),
            Err(err @ (RecordError::MissingApiUrl | RecordError::MissingTableId)) => {
                Err(AppError::Config(err.to_string()))
            }
            Err(err) => Err(AppError::Upstream(err)),
        }
    }
}

fn to_entry(row: RecordRow) -> UrlEntry {
    UrlEntry {
        id: row.id,
        title: row.title,
        url: row.url,
        description: row.description,
    }
}
