use std::fmt;

/// One entry to probe: stable record id plus the absolute target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// One probe finished. `alive` means the HTTP exchange completed at all;
    /// the response status is deliberately not inspected.
    ProbeResolved {
        generation: u64,
        id: String,
        alive: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeError {
    pub kind: ProbeFailure,
    pub message: String,
}

impl ProbeError {
    pub(crate) fn new(kind: ProbeFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFailure {
    InvalidUrl,
    Timeout,
    Network,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::InvalidUrl => write!(f, "invalid url"),
            ProbeFailure::Timeout => write!(f, "timeout"),
            ProbeFailure::Network => write!(f, "network error"),
        }
    }
}
