//! Allowed-list persistence port (interface).

use crate::domain::AllowedEntry;
use crate::error::Result;

/// Port for persisting the ordered list of allowed SSIDs.
pub trait AllowedListRepository: Send + Sync {
    /// Load the saved entries in their stored order.
    ///
    /// A missing backing file yields an empty list.
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<AllowedEntry>>> + Send;

    /// Replace the saved entries.
    fn save(
        &self,
        entries: &[AllowedEntry],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
