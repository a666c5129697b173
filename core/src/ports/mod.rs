//! Ports layer - Trait definitions (interfaces).
//!
//! The application layer reaches the OS only through these traits, so tests
//! can swap in recording doubles. Implementations live in `adapters`.

mod runner;
mod store;

pub use runner::CommandRunnerPort;
pub use store::AllowedListRepository;
