//! Observability
//!
//! Structured JSON logging of typed lifecycle events on stderr. Logging
//! is read-only: it never changes what the tool prints on stdout or
//! writes to disk.
//!
//! # Usage
//!
//! ```ignore
//! use dorkbr::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryBuilt, &[("query", "intitle:\"admin\"")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log a lifecycle event at an explicit severity
pub fn log_event_at(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}
