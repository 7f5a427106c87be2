//! Databricks SQL Statement Execution API envelopes

use serde_json::{json, Value};

use crate::catalog::{FixtureCatalog, SqlType, TableKind};
use crate::classifier::{Intent, Vendor};
use crate::protocol::DatabricksResponse;

use super::{Parameters, ResponseFormatter, COUNT_STAR_RESULT};

/// Databricks name for the catalog's PUBLIC schema
const DEFAULT_SCHEMA: &str = "default";

#[derive(Debug, Clone, Copy, Default)]
pub struct DatabricksFormatter;

impl DatabricksFormatter {
    /// Status of a previously submitted statement
    ///
    /// Any id is accepted, including ones never issued.
    pub fn statement_status(&self, statement_id: String) -> DatabricksResponse {
        DatabricksResponse::succeeded(
            statement_id,
            column_defs(&[("result", "STRING")]),
            vec![vec![json!("OK")]],
        )
    }
}

impl ResponseFormatter for DatabricksFormatter {
    type Envelope = DatabricksResponse;

    fn vendor(&self) -> Vendor {
        Vendor::Databricks
    }

    fn format(
        &self,
        intent: Intent,
        params: &Parameters<'_>,
        catalog: &FixtureCatalog,
        statement_id: String,
    ) -> DatabricksResponse {
        let (columns, data_array) = match intent {
            Intent::Ping => (column_defs(&[("1", "INT")]), vec![vec![json!(1)]]),
            Intent::ShowTables => (
                column_defs(&[
                    ("database", "STRING"),
                    ("tableName", "STRING"),
                    ("isTemporary", "BOOLEAN"),
                ]),
                catalog
                    .tables()
                    .iter()
                    .map(|t| {
                        vec![
                            json!(schema_name(&t.schema_name)),
                            json!(t.name.to_lowercase()),
                            json!(t.kind == TableKind::View),
                        ]
                    })
                    .collect(),
            ),
            // SHOW DATABASES is an alias of SHOW SCHEMAS
            Intent::ShowDatabases | Intent::ShowSchemas => (
                column_defs(&[("databaseName", "STRING")]),
                catalog
                    .schemas()
                    .iter()
                    .map(|s| vec![json!(schema_name(s))])
                    .collect(),
            ),
            Intent::ShowCatalogs => (
                column_defs(&[("catalog", "STRING")]),
                catalog.catalogs().iter().map(|c| vec![json!(c)]).collect(),
            ),
            Intent::DescribeTable => (
                column_defs(&[
                    ("col_name", "STRING"),
                    ("data_type", "STRING"),
                    ("comment", "STRING"),
                ]),
                catalog
                    .columns(params.table())
                    .iter()
                    .map(|c| {
                        vec![
                            json!(c.name.to_lowercase()),
                            json!(data_type(c.sql_type)),
                            json!(c.comment),
                        ]
                    })
                    .collect(),
            ),
            Intent::SelectEmployees => select(catalog, "EMPLOYEES", params.limit()),
            Intent::SelectProducts => select(catalog, "PRODUCTS", params.limit()),
            Intent::CountStar => (
                column_defs(&[("count(1)", "BIGINT")]),
                vec![vec![json!(COUNT_STAR_RESULT)]],
            ),
            // No SHOW VIEWS in the Databricks command set
            Intent::ShowViews | Intent::Unrecognized => (vec![], vec![]),
        };

        DatabricksResponse::succeeded(statement_id, columns, data_array)
    }
}

fn select(
    catalog: &FixtureCatalog,
    table: &str,
    limit: usize,
) -> (Vec<(String, String)>, Vec<Vec<Value>>) {
    (
        catalog
            .columns(table)
            .iter()
            .map(|c| (c.name.to_lowercase(), type_name(c.sql_type).to_string()))
            .collect(),
        catalog
            .rows(table)
            .iter()
            .take(limit)
            .map(|r| r.iter().map(|v| json!(v)).collect())
            .collect(),
    )
}

fn column_defs(defs: &[(&str, &str)]) -> Vec<(String, String)> {
    defs.iter()
        .map(|(name, type_name)| (name.to_string(), type_name.to_string()))
        .collect()
}

fn schema_name(schema: &str) -> String {
    if schema == "PUBLIC" {
        DEFAULT_SCHEMA.to_string()
    } else {
        schema.to_lowercase()
    }
}

fn type_name(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::Number { scale: 0, .. } => "BIGINT",
        SqlType::Number { .. } | SqlType::Decimal { .. } => "DECIMAL",
        SqlType::Varchar => "STRING",
    }
}

/// Spark SQL type text as shown by DESCRIBE
fn data_type(sql_type: SqlType) -> String {
    match sql_type {
        SqlType::Number { scale: 0, .. } => "bigint".to_string(),
        SqlType::Number { precision, scale } | SqlType::Decimal { precision, scale } => {
            format!("decimal({precision},{scale})")
        }
        SqlType::Varchar => "string".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(intent: Intent, params: Parameters<'_>) -> DatabricksResponse {
        let catalog = FixtureCatalog::new();
        DatabricksFormatter.format(intent, &params, &catalog, "stmt".to_string())
    }

    fn column_types(response: &DatabricksResponse) -> Vec<(&str, &str)> {
        response
            .manifest
            .schema
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.type_name.as_str()))
            .collect()
    }

    #[test]
    fn test_ping() {
        let response = format(Intent::Ping, Parameters::default());
        assert_eq!(response.result.data_array, vec![vec![json!(1)]]);
        assert_eq!(column_types(&response), vec![("1", "INT")]);
        assert_eq!(response.manifest.total_row_count, 1);
        assert_eq!(response.statement_id, "stmt");
    }

    #[test]
    fn test_show_tables_lower_case_with_temp_flag() {
        let response = format(Intent::ShowTables, Parameters::default());
        assert_eq!(
            response.result.data_array,
            vec![
                vec![json!("default"), json!("employees"), json!(false)],
                vec![json!("default"), json!("products"), json!(false)],
                vec![json!("default"), json!("employee_summary"), json!(true)],
            ]
        );
        assert_eq!(column_types(&response)[2], ("isTemporary", "BOOLEAN"));
    }

    #[test]
    fn test_show_schemas_and_databases() {
        for intent in [Intent::ShowSchemas, Intent::ShowDatabases] {
            let response = format(intent, Parameters::default());
            assert_eq!(
                response.result.data_array,
                vec![vec![json!("default")], vec![json!("information_schema")]]
            );
            assert_eq!(column_types(&response), vec![("databaseName", "STRING")]);
        }
    }

    #[test]
    fn test_show_catalogs() {
        let response = format(Intent::ShowCatalogs, Parameters::default());
        assert_eq!(
            response.result.data_array,
            vec![vec![json!("main")], vec![json!("hive_metastore")]]
        );
    }

    #[test]
    fn test_show_views_is_empty() {
        let response = format(Intent::ShowViews, Parameters::default());
        assert!(response.result.data_array.is_empty());
        assert!(response.manifest.schema.columns.is_empty());
        assert_eq!(response.manifest.total_row_count, 0);
    }

    #[test]
    fn test_describe_employees() {
        let response = format(Intent::DescribeTable, Parameters::default());
        assert_eq!(
            response.result.data_array,
            vec![
                vec![json!("id"), json!("bigint"), json!("Primary key")],
                vec![json!("name"), json!("string"), json!("Employee name")],
                vec![json!("email"), json!("string"), json!("Email address")],
                vec![json!("department"), json!("string"), json!("Department name")],
                vec![json!("salary"), json!("decimal(10,2)"), json!("Annual salary")],
            ]
        );
    }

    #[test]
    fn test_select_employees_column_types() {
        let response = format(Intent::SelectEmployees, Parameters::default());
        assert_eq!(
            column_types(&response),
            vec![
                ("id", "BIGINT"),
                ("name", "STRING"),
                ("email", "STRING"),
                ("department", "STRING"),
                ("salary", "DECIMAL"),
            ]
        );
        assert_eq!(response.manifest.total_row_count, 5);
    }

    #[test]
    fn test_select_products_limit() {
        let params = Parameters {
            limit: Some(2),
            table: None,
        };
        let response = format(Intent::SelectProducts, params);
        assert_eq!(
            response.result.data_array,
            vec![
                vec![
                    json!("P001"),
                    json!("Widget Pro"),
                    json!("Electronics"),
                    json!("299.99"),
                    json!("150")
                ],
                vec![
                    json!("P002"),
                    json!("Gadget Plus"),
                    json!("Electronics"),
                    json!("199.99"),
                    json!("200")
                ],
            ]
        );
        assert_eq!(column_types(&response)[4], ("stock", "BIGINT"));
    }

    #[test]
    fn test_select_ignores_describe_table() {
        let params = Parameters {
            limit: None,
            table: Some("EMPLOYEES"),
        };
        let response = format(Intent::SelectProducts, params);
        assert_eq!(column_types(&response)[0], ("product_id", "STRING"));
        assert_eq!(response.result.data_array.len(), 3);
    }

    #[test]
    fn test_count_star() {
        let response = format(Intent::CountStar, Parameters::default());
        assert_eq!(response.result.data_array, vec![vec![json!(5)]]);
        assert_eq!(column_types(&response), vec![("count(1)", "BIGINT")]);
    }

    #[test]
    fn test_statement_status_accepts_any_id() {
        let response = DatabricksFormatter.statement_status("never-issued".to_string());
        assert_eq!(response.statement_id, "never-issued");
        assert_eq!(response.result.data_array, vec![vec![json!("OK")]]);
        assert_eq!(column_types(&response), vec![("result", "STRING")]);
    }
}
