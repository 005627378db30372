//! Linkdeck core: pure dashboard state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ProbeSchedule, ProbeTarget};
pub use msg::Msg;
pub use state::{batch_of, DashState, LinkStatus, UrlEntry, BATCH_SIZE};
pub use update::update;
pub use view_model::{DashViewModel, LinkRowView};
