#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A freshly loaded full entry set replaces the previous one.
    EntriesLoaded(Vec<crate::UrlEntry>),
    /// User edited the search box (debounced text).
    SearchChanged(String),
    /// A rendered row at this filtered-view position became visible.
    RowVisible { position: usize },
    /// One liveness probe finished.
    ProbeResolved {
        generation: u64,
        id: String,
        alive: bool,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
