use crate::LinkStatus;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashViewModel {
    pub rows: Vec<LinkRowView>,
    pub search: String,
    pub generation: u64,
    /// Size of the full entry set, before filtering.
    pub total: usize,
    /// Entries dropped at ingest because their url was not absolute.
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRowView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub status: LinkStatus,
}
