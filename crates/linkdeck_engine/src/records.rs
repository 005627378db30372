use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

/// Token value shipped in the example environment file; treated the same as
/// no token at all.
pub const MOCK_TOKEN_PLACEHOLDER: &str = "your_api_token_here";

/// Tokens shorter than this cannot be real and also select mock data.
const MIN_TOKEN_LEN: usize = 10;

/// Single-page fetch; the dashboard is not expected to outgrow this.
const RECORD_PAGE_LIMIT: usize = 1000;

const RECORDS_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the remote tabular records API.
#[derive(Debug, Clone, Default)]
pub struct RecordSettings {
    pub api_url: Option<String>,
    pub table_id: Option<String>,
    pub api_token: Option<String>,
}

impl RecordSettings {
    /// True when no usable access token is configured, in which case the
    /// built-in mock listing stands in for the upstream transparently.
    pub fn use_mock(&self) -> bool {
        match self.api_token.as_deref() {
            None => true,
            Some(token) => token == MOCK_TOKEN_PLACEHOLDER || token.len() < MIN_TOKEN_LEN,
        }
    }

    /// Full listing URL for the configured table.
    pub fn records_url(&self) -> Result<String, RecordError> {
        let api_url = self.api_url.as_deref().ok_or(RecordError::MissingApiUrl)?;
        let table_id = self
            .table_id
            .as_deref()
            .ok_or(RecordError::MissingTableId)?;
        Ok(format!(
            "{api_url}{table_id}/records?offset=0&limit={RECORD_PAGE_LIMIT}"
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("records API URL not configured")]
    MissingApiUrl,
    #[error("records table ID not configured")]
    MissingTableId,
    #[error("records API error: status {0}")]
    UpstreamStatus(u16),
    #[error("records API request failed: {0}")]
    Transport(String),
    #[error("records API returned malformed data: {0}")]
    Malformed(String),
}

/// One transformed record row. Field names in the upstream payload vary in
/// capitalization, so rows are normalized here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
}

#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<RecordRow>, RecordError>;
}

/// Record source backed by the remote spreadsheet-style REST API.
#[derive(Debug, Clone)]
pub struct RestRecordSource {
    settings: RecordSettings,
    client: reqwest::Client,
}

impl RestRecordSource {
    pub fn new(settings: RecordSettings) -> Result<Self, RecordError> {
        let client = reqwest::Client::builder()
            .timeout(RECORDS_REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RecordError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl RecordSource for RestRecordSource {
    async fn list_entries(&self) -> Result<Vec<RecordRow>, RecordError> {
        let url = self.settings.records_url()?;
        let token = self.settings.api_token.as_deref().unwrap_or_default();

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("xc-token", token)
            .send()
            .await
            .map_err(|err| RecordError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordError::UpstreamStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| RecordError::Transport(err.to_string()))?;
        let page: RecordPage = serde_json::from_slice(&bytes)
            .map_err(|err| RecordError::Malformed(err.to_string()))?;

        Ok(page.list.into_iter().filter_map(transform_row).collect())
    }
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    list: Vec<serde_json::Value>,
}

/// Normalizes one upstream row. Rows without a title or url are skipped; a
/// missing id falls back to the title, which is unique per table.
fn transform_row(value: serde_json::Value) -> Option<RecordRow> {
    let title = field(&value, ["Title", "title"])?;
    let url = field(&value, ["Url", "url"])?;
    let id = field(&value, ["Id", "id"]).unwrap_or_else(|| title.clone());
    let description = field(&value, ["Description", "description"]).unwrap_or_default();
    Some(RecordRow {
        id,
        title,
        url,
        description,
    })
}

fn field(value: &serde_json::Value, names: [&str; 2]) -> Option<String> {
    names.iter().find_map(|name| match value.get(name) {
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

/// The fixed built-in listing used whenever the upstream is missing or
/// unreachable.
pub fn mock_entries() -> Vec<RecordRow> {
    vec![
        RecordRow {
            id: "1".to_string(),
            title: "google".to_string(),
            url: "https://www.google.com".to_string(),
            description: "Google search engine - the most popular search engine in the world"
                .to_string(),
        },
        RecordRow {
            id: "2".to_string(),
            title: "github".to_string(),
            url: "https://www.github.com".to_string(),
            description: "GitHub - code hosting platform for version control and collaboration"
                .to_string(),
        },
        RecordRow {
            id: "3".to_string(),
            title: "stackoverflow".to_string(),
            url: "https://stackoverflow.com".to_string(),
            description: "Stack Overflow - question and answer site for professional programmers"
                .to_string(),
        },
    ]
}
