//! Read-time freshness policy.

/// How `get` treats an entry that has outlived its TTL but has not been swept yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Expired entries stay readable until the reaper removes them.
    #[default]
    ServeStale,
    /// Expired entries read as misses, and `add` may replace them.
    RejectStale,
}

impl ExpiryPolicy {
    /// Maps the `reject_stale` config flag to a policy.
    pub fn from_reject_stale(reject_stale: bool) -> Self {
        if reject_stale {
            Self::RejectStale
        } else {
            Self::ServeStale
        }
    }
}
