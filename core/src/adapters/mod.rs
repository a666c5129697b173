//! Adapters layer - the netsh process and the allowed-list file.
//!
//! [`NetshRunner`] implements [`CommandRunnerPort`](crate::ports::CommandRunnerPort)
//! and [`AllowedListStore`] implements
//! [`AllowedListRepository`](crate::ports::AllowedListRepository).

pub mod allowed_store;
pub mod netsh;

// Re-export main types for convenience
pub use allowed_store::AllowedListStore;
pub use netsh::NetshRunner;
