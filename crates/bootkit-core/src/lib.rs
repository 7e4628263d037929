//! Bootkit Core - Shared functionality for all Bootkit tools
//!
//! Configuration loading, standard paths, and logging setup used by
//! `recite` and `scaffold`.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{Config, ConfigError};
pub use paths::Paths;
