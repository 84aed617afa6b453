//! Core types and services for fmp-mcp.
//!
//! This crate owns the outbound Financial Modeling Prep API gateway, the
//! loosely-typed accessors over its JSON records, and the report rendering
//! that turns raw records into the text returned to tool callers.

pub mod client;
pub mod control;
pub mod record;
pub mod report;
