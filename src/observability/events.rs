//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded from file
    ConfigLoaded,
    /// Command dispatch started
    CommandStart,
    /// Command dispatch finished
    CommandComplete,

    // Reference output
    /// Operator table printed
    TableRendered,
    /// Example gallery printed
    GalleryRendered,

    // Query building
    /// Query built from operator and keyword
    QueryBuilt,
    /// Unknown operator dropped from a query
    OperatorUnknown,
    /// Demo search executed
    DemoSearch,
    /// Record appended to the result log
    ResultAppended,

    // Persistence
    /// Persistence started
    PersistStart,
    /// Persistence complete
    PersistComplete,
    /// Persistence failed (reported, not fatal)
    PersistFailed,

    // Terminal
    /// Input closed while a prompt was waiting (FATAL)
    InputClosed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CommandStart => "COMMAND_START",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::TableRendered => "TABLE_RENDERED",
            Event::GalleryRendered => "GALLERY_RENDERED",
            Event::QueryBuilt => "QUERY_BUILT",
            Event::OperatorUnknown => "OPERATOR_UNKNOWN",
            Event::DemoSearch => "DEMO_SEARCH",
            Event::ResultAppended => "RESULT_APPENDED",
            Event::PersistStart => "PERSIST_START",
            Event::PersistComplete => "PERSIST_COMPLETE",
            Event::PersistFailed => "PERSIST_FAILED",
            Event::InputClosed => "INPUT_CLOSED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::InputClosed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::QueryBuilt.as_str(), "QUERY_BUILT");
        assert_eq!(Event::PersistFailed.to_string(), "PERSIST_FAILED");
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::InputClosed.is_fatal());
        assert!(!Event::PersistFailed.is_fatal());
    }
}
