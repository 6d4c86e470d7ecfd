//! dorkbr - search query builder and operator reference
//!
//! Builds search-engine query strings ("dorks") from a fixed operator
//! catalog, prints reference material, and exports result records to
//! JSON or CSV.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod observability;
pub mod persist;
pub mod query;
pub mod results;
