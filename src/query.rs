//! Query construction
//!
//! A query is built from up to three clauses joined by single spaces, in
//! fixed order:
//!
//! 1. `operator:"keyword"` (or `"keyword"` when the operator is unknown)
//! 2. `site:<site>`
//! 3. `filetype:<type>`
//!
//! The keyword is quoted verbatim. Encoding for use in a URL is done
//! separately by [`search_url`].

use crate::catalog::Catalog;

/// Search endpoint used when no other base is configured
pub const DEFAULT_SEARCH_BASE: &str = "https://www.google.com/search";

/// Build a query string.
///
/// Unknown operators are dropped and the keyword becomes a bare quoted
/// term. Empty `site` or `file_type` values count as absent.
pub fn construct(
    catalog: &Catalog,
    operator: &str,
    keyword: &str,
    site: Option<&str>,
    file_type: Option<&str>,
) -> String {
    let mut parts = Vec::with_capacity(3);

    if catalog.contains(operator) {
        parts.push(format!("{}:\"{}\"", operator, keyword));
    } else {
        parts.push(format!("\"{}\"", keyword));
    }

    if let Some(site) = site.filter(|s| !s.is_empty()) {
        parts.push(format!("site:{}", site));
    }
    if let Some(file_type) = file_type.filter(|t| !t.is_empty()) {
        parts.push(format!("filetype:{}", file_type));
    }

    parts.join(" ")
}

/// Ready-to-use search URL: `<base>?q=<percent-encoded query>`.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}?q={}", base, urlencoding::encode(query))
}
