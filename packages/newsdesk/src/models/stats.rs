use serde::Serialize;

/// Snapshot of store-wide counts. Recomputed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub users: u64,
    pub admins: u64,
    pub regular_users: u64,
    pub news: u64,
    /// Total view records, not distinct viewers.
    pub views: u64,
    pub images: u64,
}
