//! Query result records and the per-run result log
//!
//! The log is append-only and preserves insertion order. It lives inside
//! the session that owns it and is never reloaded from disk.

mod display;

pub use display::{render_log, DisplayLimits};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Operator recorded when a demo search has no tokens
pub const DEFAULT_OPERATOR: &str = "intitle";

const DEMO_TITLE: &str = "Resultado Demo";
const DEMO_URL: &str = "https://exemplo.com";
const DEMO_SNIPPET: &str = "Trecho demo do resultado";
const BUILT_TITLE: &str = "Dork gerado";
const BUILT_SNIPPET: &str = "Consulta montada no modo interativo";

/// One result record.
///
/// Field order here is the export schema: JSON keys and CSV columns both
/// follow [`QueryResult::FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub operator_used: String,
    pub query: String,
    pub timestamp: String,
}

impl QueryResult {
    /// Ordered field names shared by every export format
    pub const FIELDS: [&'static str; 6] =
        ["title", "url", "snippet", "operator_used", "query", "timestamp"];

    /// Placeholder record for a demo search over `tokens`.
    pub fn demo<S: AsRef<str>>(tokens: &[S], now: DateTime<Local>) -> Self {
        let operator_used = tokens
            .first()
            .map(|t| t.as_ref().to_string())
            .unwrap_or_else(|| DEFAULT_OPERATOR.to_string());

        Self {
            title: DEMO_TITLE.to_string(),
            url: DEMO_URL.to_string(),
            snippet: DEMO_SNIPPET.to_string(),
            operator_used,
            query: join_tokens(tokens),
            timestamp: format_timestamp(now),
        }
    }

    /// Record for a query built interactively; `url` is its search URL.
    pub fn built(operator: &str, query: &str, url: &str, now: DateTime<Local>) -> Self {
        Self {
            title: BUILT_TITLE.to_string(),
            url: url.to_string(),
            snippet: BUILT_SNIPPET.to_string(),
            operator_used: operator.to_string(),
            query: query.to_string(),
            timestamp: format_timestamp(now),
        }
    }

    /// Values in [`QueryResult::FIELDS`] order.
    pub fn as_row(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.url.as_str(),
            self.snippet.as_str(),
            self.operator_used.as_str(),
            self.query.as_str(),
            self.timestamp.as_str(),
        ]
    }
}

/// Join free-text tokens into a single query.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Record timestamp format (local time, microsecond precision).
pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Append-only, ordered log of results for one run.
#[derive(Debug, Default, Clone)]
pub struct ResultLog {
    records: Vec<QueryResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: QueryResult) {
        self.records.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryResult> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[QueryResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_demo_uses_first_token() {
        let r = QueryResult::demo(&["intitle:admin", "senha"], fixed_now());
        assert_eq!(r.operator_used, "intitle:admin");
        assert_eq!(r.query, "intitle:admin senha");
        assert_eq!(r.title, DEMO_TITLE);
    }

    #[test]
    fn test_demo_without_tokens() {
        let tokens: [&str; 0] = [];
        let r = QueryResult::demo(&tokens, fixed_now());
        assert_eq!(r.operator_used, DEFAULT_OPERATOR);
        assert_eq!(r.query, "");
    }

    #[test]
    fn test_built_record() {
        let r = QueryResult::built("inurl", "inurl:\"admin\"", "https://s?q=x", fixed_now());
        assert_eq!(r.operator_used, "inurl");
        assert_eq!(r.url, "https://s?q=x");
        assert_eq!(r.timestamp, "2024-03-09 14:05:07.000000");
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(fixed_now()), "2024-03-09 14:05:07.000000");
    }

    #[test]
    fn test_row_matches_fields() {
        let r = QueryResult::demo(&["a"], fixed_now());
        let json = serde_json::to_value(&r).unwrap();
        for (field, value) in QueryResult::FIELDS.iter().zip(r.as_row()) {
            assert_eq!(json[field], value);
        }
    }

    #[test]
    fn test_log_preserves_order() {
        let mut log = ResultLog::new();
        assert!(log.is_empty());
        log.push(QueryResult::demo(&["first"], fixed_now()));
        log.push(QueryResult::demo(&["second"], fixed_now()));

        let ops: Vec<_> = log.iter().map(|r| r.operator_used.as_str()).collect();
        assert_eq!(ops, vec!["first", "second"]);
        assert_eq!(log.len(), 2);
    }
}
