//! Process-level helpers

pub mod signals;

pub use signals::{run_until_shutdown, shutdown_signal};
