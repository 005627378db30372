use std::time::Duration;

use crate::{ProbeError, ProbeFailure};

/// Tunables for the liveness checker. None of these are correctness
/// requirements; they bound how long and how hard the checker works.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Pause between two probes of the same batch.
    pub probe_gap: Duration,
    /// Delay before the proactive first-batch run after a reload.
    pub first_batch_delay: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(5),
            probe_gap: Duration::from_millis(250),
            first_batch_delay: Duration::from_millis(300),
        }
    }
}

#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Best-effort existence check. `Ok(())` means the exchange completed;
    /// it says nothing about the response status.
    async fn probe(&self, url: &str) -> Result<(), ProbeError>;
}

/// HEAD-request prober. Mirrors an opaque cross-origin check: a completed
/// request of any status counts as reachable, only transport-level failure
/// counts as unreachable.
#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(settings: &ProbeSettings) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProbeError::new(ProbeFailure::Network, err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, url: &str) -> Result<(), ProbeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ProbeError::new(ProbeFailure::InvalidUrl, err.to_string()))?;

        self.client
            .head(parsed)
            .send()
            .await
            .map(|_response| ())
            .map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::new(ProbeFailure::Timeout, err.to_string());
    }
    ProbeError::new(ProbeFailure::Network, err.to_string())
}
