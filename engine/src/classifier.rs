//! Statement Classifier
//!
//! Maps raw statement text to an [`Intent`] with ordered substring rules.
//! Rules are not mutually exclusive, so the first match wins and the
//! order of each rule table matters.

use std::fmt;

/// Emulated warehouse API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Snowflake,
    Databricks,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Snowflake => write!(f, "snowflake"),
            Vendor::Databricks => write!(f, "databricks"),
        }
    }
}

/// Recognized statement category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Ping,
    ShowTables,
    ShowViews,
    ShowDatabases,
    ShowSchemas,
    ShowCatalogs,
    DescribeTable,
    SelectEmployees,
    SelectProducts,
    CountStar,
    Unrecognized,
}

impl Intent {
    /// Whether the statement's row cap matters for this intent
    pub fn takes_limit(&self) -> bool {
        matches!(self, Intent::SelectEmployees | Intent::SelectProducts)
    }
}

/// A rule matches when the statement contains any of its patterns
#[derive(Debug)]
pub struct Rule {
    pub intent: Intent,
    pub patterns: &'static [&'static str],
}

impl Rule {
    fn matches(&self, statement: &str) -> bool {
        self.patterns.iter().any(|p| statement.contains(p))
    }
}

const fn rule(intent: Intent, patterns: &'static [&'static str]) -> Rule {
    Rule { intent, patterns }
}

/// Snowflake rule table, evaluated top to bottom
pub const SNOWFLAKE_RULES: &[Rule] = &[
    rule(Intent::Ping, &["SELECT 1"]),
    rule(Intent::ShowTables, &["SHOW TABLES"]),
    rule(Intent::ShowViews, &["SHOW VIEWS"]),
    rule(Intent::ShowDatabases, &["SHOW DATABASES"]),
    rule(Intent::ShowSchemas, &["SHOW SCHEMAS"]),
    rule(Intent::DescribeTable, &["DESCRIBE TABLE"]),
    rule(
        Intent::SelectEmployees,
        &["FROM EMPLOYEES", "FROM PUBLIC.EMPLOYEES"],
    ),
    rule(
        Intent::SelectProducts,
        &["FROM PRODUCTS", "FROM PUBLIC.PRODUCTS"],
    ),
    rule(Intent::CountStar, &["COUNT(*)", "COUNT(1)"]),
];

/// Databricks rule table, evaluated top to bottom
pub const DATABRICKS_RULES: &[Rule] = &[
    rule(Intent::Ping, &["SELECT 1"]),
    rule(Intent::ShowTables, &["SHOW TABLES"]),
    rule(Intent::ShowViews, &["SHOW VIEWS"]),
    rule(Intent::ShowDatabases, &["SHOW DATABASES"]),
    rule(Intent::ShowSchemas, &["SHOW SCHEMAS"]),
    rule(Intent::ShowCatalogs, &["SHOW CATALOGS"]),
    rule(Intent::DescribeTable, &["DESCRIBE TABLE"]),
    rule(
        Intent::SelectEmployees,
        &["FROM EMPLOYEES", "FROM DEFAULT.EMPLOYEES"],
    ),
    rule(
        Intent::SelectProducts,
        &["FROM PRODUCTS", "FROM DEFAULT.PRODUCTS"],
    ),
    rule(Intent::CountStar, &["COUNT(*)", "COUNT(1)"]),
];

/// Rule table for a vendor
pub fn rules(vendor: Vendor) -> &'static [Rule] {
    match vendor {
        Vendor::Snowflake => SNOWFLAKE_RULES,
        Vendor::Databricks => DATABRICKS_RULES,
    }
}

/// Upper-case and trim statement text
pub fn normalize(statement: &str) -> String {
    statement.trim().to_uppercase()
}

/// Classify an already normalized statement
pub fn classify_normalized(vendor: Vendor, normalized: &str) -> Intent {
    rules(vendor)
        .iter()
        .find(|r| r.matches(normalized))
        .map(|r| r.intent)
        .unwrap_or(Intent::Unrecognized)
}

/// Classify raw statement text
pub fn classify(vendor: Vendor, statement: &str) -> Intent {
    classify_normalized(vendor, &normalize(statement))
}
