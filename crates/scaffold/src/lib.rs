//! scaffold - Project scaffolding for Bootkit
//!
//! Makes sure a fixed set of project files exists, creating empty files and
//! any missing parent directories. Existing files are never touched, so the
//! tool can be rerun safely at any time.

pub mod event;
pub mod manifest;
pub mod scaffolder;

pub use event::{EventSink, ScaffoldEvent, TracingSink};
pub use manifest::Manifest;
pub use scaffolder::{ScaffoldError, Scaffolder, Summary};
