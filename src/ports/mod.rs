//! Ports (trait boundaries) for external collaborators.
//!
//! The explorer owns these traits; adapters in the infrastructure layer
//! implement them.

pub mod observer;

pub use observer::{ExploreObserver, SilentObserver};
