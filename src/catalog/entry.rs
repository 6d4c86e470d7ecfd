//! Catalog entry types

use std::fmt;

/// How freely an operator can be used (mixed with others, or alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Yes,
    No,
    Limited,
}

impl Usage {
    /// Label shown in the reference table
    pub fn label(&self) -> &'static str {
        match self {
            Usage::Yes => "sim",
            Usage::No => "não",
            Usage::Limited => "não muito",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Search service an operator applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Web,
    Images,
    Groups,
    News,
}

impl Service {
    /// Every service, in table column order
    pub const ALL: [Service; 4] = [Service::Web, Service::Images, Service::Groups, Service::News];

    /// Column header for this service
    pub fn label(&self) -> &'static str {
        match self {
            Service::Web => "Web",
            Service::Images => "Imagens",
            Service::Groups => "Grupos",
            Service::News => "Notícias",
        }
    }
}

/// Immutable operator metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    pub name: &'static str,
    pub purpose: &'static str,
    pub combinable: Usage,
    pub standalone: Usage,
    pub services: &'static [Service],
}

impl OperatorEntry {
    pub const fn new(
        name: &'static str,
        purpose: &'static str,
        combinable: Usage,
        standalone: Usage,
        services: &'static [Service],
    ) -> Self {
        Self {
            name,
            purpose,
            combinable,
            standalone,
            services,
        }
    }

    /// Whether the operator works on the given service.
    pub fn supports(&self, service: Service) -> bool {
        self.services.contains(&service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_labels() {
        assert_eq!(Usage::Yes.label(), "sim");
        assert_eq!(Usage::No.label(), "não");
        assert_eq!(Usage::Limited.label(), "não muito");
    }

    #[test]
    fn test_usage_display_pads() {
        assert_eq!(format!("{:<5}|", Usage::No), "não  |");
    }

    #[test]
    fn test_supports() {
        let entry = OperatorEntry::new("author", "x", Usage::Yes, Usage::Limited, &[Service::Groups]);
        assert!(entry.supports(Service::Groups));
        assert!(!entry.supports(Service::Web));
    }
}
