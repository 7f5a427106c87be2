//! Vendor Response Formatters
//!
//! Each formatter turns an intent plus extracted parameters into one
//! vendor's envelope. Both render the same catalog facts; field names,
//! type vocabularies and casing are what differ.

pub mod databricks;
pub mod snowflake;

use serde::Serialize;

use crate::catalog::{FixtureCatalog, DEFAULT_TABLE};
use crate::classifier::{Intent, Vendor};
use crate::extract::DEFAULT_LIMIT;

pub use databricks::DatabricksFormatter;
pub use snowflake::SnowflakeFormatter;

/// Value reported for a bare `COUNT(*)` / `COUNT(1)`
pub const COUNT_STAR_RESULT: i64 = 5;

/// Values pulled out of the statement text for the intents that use them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parameters<'a> {
    /// Row cap, set for select intents
    pub limit: Option<usize>,
    /// Resolved table, set for `DescribeTable`
    pub table: Option<&'a str>,
}

impl Parameters<'_> {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn table(&self) -> &str {
        self.table.unwrap_or(DEFAULT_TABLE)
    }
}

/// Builds one vendor's response envelope
pub trait ResponseFormatter {
    type Envelope: Serialize;

    fn vendor(&self) -> Vendor;

    /// Never fails; unknown intents yield an empty but well-formed envelope
    fn format(
        &self,
        intent: Intent,
        params: &Parameters<'_>,
        catalog: &FixtureCatalog,
        statement_id: String,
    ) -> Self::Envelope;
}
