//! Statement Executor
//!
//! Runs classify → extract → format for one vendor against the shared
//! fixture catalog.

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::FixtureCatalog;
use crate::classifier::{self, Intent, Vendor};
use crate::extract;
use crate::formatter::{DatabricksFormatter, Parameters, ResponseFormatter, SnowflakeFormatter};
use crate::protocol::{DatabricksResponse, SnowflakeResponse};

/// Statement execution engine
#[derive(Debug, Clone)]
pub struct Executor {
    /// Shared read-only dataset
    catalog: Arc<FixtureCatalog>,
}

impl Executor {
    /// Create an executor over the sample catalog
    pub fn new() -> Self {
        Self::with_catalog(Arc::new(FixtureCatalog::new()))
    }

    pub fn with_catalog(catalog: Arc<FixtureCatalog>) -> Self {
        Self { catalog }
    }

    /// Classify a statement and extract the parameters its intent needs
    pub fn prepare(&self, vendor: Vendor, statement: &str) -> (Intent, Parameters<'_>) {
        let normalized = classifier::normalize(statement);
        let intent = classifier::classify_normalized(vendor, &normalized);

        let mut params = Parameters::default();
        if intent.takes_limit() {
            params.limit = Some(extract::extract_limit(&normalized));
        }
        if intent == Intent::DescribeTable {
            params.table = Some(extract::resolve_table_name(&self.catalog, &normalized));
        }

        tracing::debug!(
            %vendor,
            ?intent,
            limit = ?params.limit,
            table = ?params.table,
            "Classified statement"
        );

        (intent, params)
    }

    /// Execute a statement, producing the formatter's envelope
    pub fn execute<F: ResponseFormatter>(&self, formatter: &F, statement: &str) -> F::Envelope {
        let (intent, params) = self.prepare(formatter.vendor(), statement);
        let statement_id = Uuid::new_v4().to_string();
        formatter.format(intent, &params, &self.catalog, statement_id)
    }

    pub fn execute_snowflake(&self, statement: &str) -> SnowflakeResponse {
        self.execute(&SnowflakeFormatter, statement)
    }

    pub fn execute_databricks(&self, statement: &str) -> DatabricksResponse {
        self.execute(&DatabricksFormatter, statement)
    }

    /// Databricks statement status; the id is echoed back, never looked up
    pub fn statement_status(&self, statement_id: &str) -> DatabricksResponse {
        DatabricksFormatter.statement_status(statement_id.to_string())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_one_on_both_vendors() {
        let executor = Executor::new();
        for sql in ["SELECT 1", "  select 1  ", "\nSelect 1;\t"] {
            let response = executor.execute_snowflake(sql);
            assert_eq!(response.data, vec![vec![Some("1".to_string())]]);

            let response = executor.execute_databricks(sql);
            assert_eq!(response.result.data_array, vec![vec![json!(1)]]);
        }
    }

    #[test]
    fn test_employee_row_count_follows_limit() {
        let executor = Executor::new();
        let cases = [
            ("SELECT * FROM EMPLOYEES", 5),
            ("select * from employees limit 3", 3),
            ("select * from employees limit 0", 0),
            ("select * from employees limit 50", 5),
            ("select * from employees limit abc", 5),
            ("select * from public.employees limit 1", 1),
        ];
        for (sql, expected) in cases {
            let response = executor.execute_snowflake(sql);
            assert_eq!(response.data.len(), expected, "{sql}");
            assert_eq!(response.result_set_meta_data.num_rows, expected as i64);
        }

        let response = executor.execute_databricks("select * from default.employees limit 4");
        assert_eq!(response.result.data_array.len(), 4);
        assert_eq!(response.manifest.total_row_count, 4);
    }

    #[test]
    fn test_prepare_extracts_only_relevant_parameters() {
        let executor = Executor::new();

        let (intent, params) = executor.prepare(Vendor::Snowflake, "SHOW TABLES LIMIT 1");
        assert_eq!(intent, Intent::ShowTables);
        assert_eq!(params, Parameters::default());

        let (intent, params) = executor.prepare(Vendor::Snowflake, "describe table products");
        assert_eq!(intent, Intent::DescribeTable);
        assert_eq!(params.table, Some("PRODUCTS"));
        assert_eq!(params.limit, None);

        let (intent, params) = executor.prepare(Vendor::Databricks, "SELECT * FROM products LIMIT 2");
        assert_eq!(intent, Intent::SelectProducts);
        assert_eq!(params.limit, Some(2));
    }

    #[test]
    fn test_count_from_employees_is_a_select() {
        let executor = Executor::new();
        let response = executor.execute_snowflake("SELECT COUNT(*) FROM EMPLOYEES");
        assert_eq!(response.data.len(), 5);
        assert_eq!(response.result_set_meta_data.row_type[0].name, "id");
    }

    #[test]
    fn test_same_statement_same_data() {
        let executor = Executor::new();
        let first = executor.execute_snowflake("SHOW TABLES");
        let second = executor.execute_snowflake("SHOW TABLES");
        assert_eq!(first.data, second.data);
        assert_ne!(first.statement_handle, second.statement_handle);

        let first = executor.execute_databricks("select * from products");
        let second = executor.execute_databricks("select * from products");
        assert_eq!(first.result.data_array, second.result.data_array);
        assert_ne!(first.statement_id, second.statement_id);
    }

    #[test]
    fn test_garbage_never_fails() {
        let executor = Executor::new();
        for sql in ["", "   ", "DROP EVERYTHING", "\u{1F600}", "LIMIT LIMIT LIMIT"] {
            let response = executor.execute_snowflake(sql);
            assert!(response.data.is_empty());
            assert_eq!(response.code, "090001");

            let response = executor.execute_databricks(sql);
            assert!(response.result.data_array.is_empty());
            assert!(response.manifest.schema.columns.is_empty());
        }
    }
}
