//! Library components of the `dinemap` command-line explorer.

pub mod config;
pub mod logging;
pub mod session;
pub mod summary;
