use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use dash_logging::dash_info;
use linkdeck_core::{LinkRowView, LinkStatus, Msg, UrlEntry};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

pub async fn health() -> &'static str {
    "ok"
}

/// Static dashboard chrome; everything dynamic goes through the API.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[derive(Debug, Serialize)]
pub struct UrlListBody {
    pub urls: Vec<UrlEntry>,
}

/// Listing endpoint. Loading also replaces the dashboard's entry set, which
/// resets the checked-batch set and status map and schedules the first batch.
pub async fn list_urls(State(state): State<AppState>) -> Json<UrlListBody> {
    let urls = state.load_entries().await;
    state.dashboard.dispatch(Msg::EntriesLoaded(urls.clone()));
    Json(UrlListBody { urls })
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub generation: u64,
    pub statuses: BTreeMap<String, LinkStatus>,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    let (generation, statuses) = state.dashboard.snapshot();
    Json(StatusBody {
        generation,
        statuses,
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub term: String,
}

#[derive(Debug, Serialize)]
pub struct RowBody {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub status: LinkStatus,
}

#[derive(Debug, Serialize)]
pub struct FilteredBody {
    pub rows: Vec<RowBody>,
}

pub async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchBody>,
) -> Json<FilteredBody> {
    state.dashboard.dispatch(Msg::SearchChanged(body.term));
    let rows = state.dashboard.view().rows.into_iter().map(row_body).collect();
    Json(FilteredBody { rows })
}

#[derive(Debug, Deserialize)]
pub struct VisibleBody {
    pub position: usize,
}

/// Viewport notification: a row at this filtered-view position came into
/// view. Duplicate notifications for the same batch are absorbed by the
/// state machine.
pub async fn visible(
    State(state): State<AppState>,
    Json(body): Json<VisibleBody>,
) -> Json<serde_json::Value> {
    state.dashboard.dispatch(Msg::RowVisible {
        position: body.position,
    });
    Json(serde_json::json!({ "ok": true }))
}

/// Short-link endpoint: `GET /<title>` redirects to the matching entry.
pub async fn redirect_to_target(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response> {
    let entries = state.entries_for_redirect().await?;
    let needle = title.trim().to_lowercase();
    let entry = entries
        .iter()
        .find(|entry| entry.title.trim().to_lowercase() == needle)
        .ok_or(AppError::NotFound)?;

    dash_info!("redirecting '{}' to {}", title, entry.url);
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, entry.url.clone())],
    )
        .into_response())
}

fn row_body(row: LinkRowView) -> RowBody {
    RowBody {
        id: row.id,
        title: row.title,
        url: row.url,
        description: row.description,
        status: row.status,
    }
}
