//! Ports (trait boundaries) between the DAG builder and its surroundings.
//!
//! The builder owns the traits; progress bars and other reporting live in
//! adapters outside the core.

pub mod observer;

pub use observer::{BuildObserver, NullObserver};
