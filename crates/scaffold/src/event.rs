//! Scaffolding events and where they go

use std::fmt;
use std::path::PathBuf;

/// One action taken (or skipped) while scaffolding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// A missing parent directory (and its ancestors) was created
    CreatedDirectory(PathBuf),
    /// A missing file was created empty
    CreatedFile(PathBuf),
    /// The file was already there and left alone
    AlreadyExists(PathBuf),
}

impl fmt::Display for ScaffoldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatedDirectory(path) => write!(f, "Created directory: {}", path.display()),
            Self::CreatedFile(path) => write!(f, "Created file: {}", path.display()),
            Self::AlreadyExists(path) => write!(f, "File already exists: {}", path.display()),
        }
    }
}

/// Receives scaffolding events as they happen
pub trait EventSink {
    fn record(&mut self, event: &ScaffoldEvent);
}

/// Logs each event at INFO
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &ScaffoldEvent) {
        tracing::info!("{}", event);
    }
}

impl EventSink for Vec<ScaffoldEvent> {
    fn record(&mut self, event: &ScaffoldEvent) {
        self.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ScaffoldEvent::CreatedDirectory("src".into()).to_string(),
            "Created directory: src"
        );
        assert_eq!(
            ScaffoldEvent::CreatedFile("src/app.py".into()).to_string(),
            "Created file: src/app.py"
        );
        assert_eq!(
            ScaffoldEvent::AlreadyExists(".env".into()).to_string(),
            "File already exists: .env"
        );
    }
}
