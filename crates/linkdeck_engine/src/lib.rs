//! Linkdeck engine: liveness probing and record-source IO.
mod engine;
mod probe;
mod records;
mod types;

pub use engine::EngineHandle;
pub use probe::{ProbeSettings, Prober, ReqwestProber};
pub use records::{
    mock_entries, RecordError, RecordRow, RecordSettings, RecordSource, RestRecordSource,
    MOCK_TOKEN_PLACEHOLDER,
};
pub use types::{EngineEvent, ProbeError, ProbeFailure, ProbeTarget};
