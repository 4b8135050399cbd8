//! Adapters implementing domain ports.

pub mod progress;

pub use progress::ProgressObserver;
