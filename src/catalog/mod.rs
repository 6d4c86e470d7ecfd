//! Operator catalog
//!
//! The catalog is a fixed, ordered list of search operators with their
//! descriptive metadata. It is built once at first use and never mutated.
//!
//! # Invariants
//!
//! - Operator names are unique
//! - Iteration order is the declaration order below

mod entry;
mod render;

pub use entry::{OperatorEntry, Service, Usage};
pub use render::{render_table, TABLE_WIDTH};

use self::entry::Service::{Groups, Images, News, Web};
use self::entry::Usage::{Limited, No, Yes};

const ALL_SERVICES: &[Service] = &[Web, Images, Groups, News];

static BUILTIN: Catalog = Catalog {
    entries: &[
        OperatorEntry::new("intitle", "Pesquisa no título da página", Yes, Yes, ALL_SERVICES),
        OperatorEntry::new("allintitle", "Título da página (todas palavras)", No, Yes, ALL_SERVICES),
        OperatorEntry::new("inurl", "Pesquisa na URL", Yes, Yes, ALL_SERVICES),
        OperatorEntry::new("allinurl", "URL (todas palavras)", No, Yes, ALL_SERVICES),
        OperatorEntry::new("filetype", "Pesquisa arquivos específicos", Yes, Limited, &[Web, Groups]),
        OperatorEntry::new("allintext", "Apenas texto da página", Limited, Yes, ALL_SERVICES),
        OperatorEntry::new("site", "Pesquisa site específico", Yes, Limited, &[Web, Images, Groups]),
        OperatorEntry::new("link", "Links para páginas", No, Limited, &[Web]),
        OperatorEntry::new("inanchor", "Texto âncora de links", Yes, Yes, ALL_SERVICES),
        OperatorEntry::new("numrange", "Localiza números", Yes, Limited, &[Web, Images, Groups]),
        OperatorEntry::new("daterange", "Faixa de datas", Yes, Limited, &[Web, Groups]),
        OperatorEntry::new("author", "Autor do grupo", Yes, Limited, &[Groups, News]),
        OperatorEntry::new("group", "Nome do grupo", Limited, Yes, &[Groups]),
        // Standalone behaves like intitle; recorded as limited.
        OperatorEntry::new("insubject", "Assunto do grupo", Yes, Limited, &[Groups]),
        OperatorEntry::new("msgid", "ID da mensagem do grupo", No, Limited, &[Groups]),
    ],
};

/// Fixed operator catalog.
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [OperatorEntry],
}

impl Catalog {
    /// The built-in catalog shared by the whole process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Look up an operator by exact name.
    pub fn get(&self, name: &str) -> Option<&OperatorEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Whether `name` is a known operator.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorEntry> {
        self.entries.iter()
    }

    /// Operator names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_all_operators() {
        assert_eq!(Catalog::builtin().len(), 15);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Catalog::builtin().names().collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_order_is_declaration_order() {
        let names: Vec<_> = Catalog::builtin().names().collect();
        assert_eq!(names.first(), Some(&"intitle"));
        assert_eq!(names.last(), Some(&"msgid"));
        assert_eq!(names[4], "filetype");
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        let site = catalog.get("site").unwrap();
        assert_eq!(site.standalone, Usage::Limited);
        assert!(site.supports(Service::Images));
        assert!(!site.supports(Service::News));

        assert!(catalog.contains("msgid"));
        assert!(!catalog.contains("unknownop"));
        // Lookup is case-sensitive
        assert!(!catalog.contains("INTITLE"));
    }
}
