//! Snowflake SQL API v2 envelopes

use crate::catalog::{FixtureCatalog, FixtureColumn, SqlType};
use crate::classifier::{Intent, Vendor};
use crate::protocol::{ColumnMetaData, SnowflakeResponse};

use super::{Parameters, ResponseFormatter, COUNT_STAR_RESULT};

const EXECUTED: &str = "Statement executed successfully.";
const EXECUTED_NO_RESULTS: &str = "Statement executed successfully (no results).";

/// Maximum VARCHAR length Snowflake reports for TEXT columns
const TEXT_LENGTH: i32 = 16_777_216;

#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeFormatter;

impl ResponseFormatter for SnowflakeFormatter {
    type Envelope = SnowflakeResponse;

    fn vendor(&self) -> Vendor {
        Vendor::Snowflake
    }

    fn format(
        &self,
        intent: Intent,
        params: &Parameters<'_>,
        catalog: &FixtureCatalog,
        statement_handle: String,
    ) -> SnowflakeResponse {
        let (row_type, data) = match intent {
            Intent::Ping => (vec![fixed("1", false)], vec![cells(["1"])]),
            Intent::ShowTables => (
                vec![
                    text("schema_name", true),
                    text("name", false),
                    text("kind", true),
                    fixed("rows", true),
                ],
                catalog
                    .tables()
                    .iter()
                    .map(|t| {
                        cells([
                            t.schema_name.clone(),
                            t.name.clone(),
                            t.kind.as_str().to_string(),
                            t.declared_row_count.to_string(),
                        ])
                    })
                    .collect(),
            ),
            Intent::ShowViews => (
                vec![text("schema_name", true), text("name", false)],
                catalog
                    .views()
                    .map(|v| cells([v.schema_name.clone(), v.name.clone()]))
                    .collect(),
            ),
            Intent::ShowDatabases => name_list(catalog.databases()),
            Intent::ShowSchemas => name_list(catalog.schemas()),
            Intent::DescribeTable => (
                vec![text("name", false), text("type", false), text("null?", false)],
                catalog
                    .columns(params.table())
                    .iter()
                    .map(|c| {
                        let nullable = if c.nullable { "YES" } else { "NO" };
                        cells([c.name.as_str(), c.sql_type.declared_name(), nullable])
                    })
                    .collect(),
            ),
            Intent::SelectEmployees => select(catalog, "EMPLOYEES", params.limit()),
            Intent::SelectProducts => select(catalog, "PRODUCTS", params.limit()),
            Intent::CountStar => (
                vec![fixed("COUNT(*)", false)],
                vec![cells([COUNT_STAR_RESULT.to_string()])],
            ),
            // Snowflake has no catalogs; the classifier never yields ShowCatalogs here
            Intent::ShowCatalogs | Intent::Unrecognized => {
                return SnowflakeResponse::success(
                    vec![],
                    vec![],
                    statement_handle,
                    EXECUTED_NO_RESULTS,
                );
            }
        };

        SnowflakeResponse::success(data, row_type, statement_handle, EXECUTED)
    }
}

fn cells<S: Into<String>, const N: usize>(values: [S; N]) -> Vec<Option<String>> {
    values.into_iter().map(|v| Some(v.into())).collect()
}

fn select(
    catalog: &FixtureCatalog,
    table: &str,
    limit: usize,
) -> (Vec<ColumnMetaData>, Vec<Vec<Option<String>>>) {
    (
        catalog.columns(table).iter().map(column_meta).collect(),
        catalog
            .rows(table)
            .iter()
            .take(limit)
            .map(|r| r.iter().cloned().map(Some).collect())
            .collect(),
    )
}

fn name_list(names: &[String]) -> (Vec<ColumnMetaData>, Vec<Vec<Option<String>>>) {
    (
        vec![text("name", false)],
        names.iter().map(|n| cells([n.as_str()])).collect(),
    )
}

fn text(name: &str, nullable: bool) -> ColumnMetaData {
    ColumnMetaData {
        name: name.to_string(),
        r#type: "TEXT".to_string(),
        precision: None,
        scale: None,
        length: Some(TEXT_LENGTH),
        nullable,
    }
}

fn fixed(name: &str, nullable: bool) -> ColumnMetaData {
    ColumnMetaData {
        name: name.to_string(),
        r#type: "FIXED".to_string(),
        precision: Some(38),
        scale: Some(0),
        length: None,
        nullable,
    }
}

/// Row type entry for a fixture column; names are reported in lower case
fn column_meta(column: &FixtureColumn) -> ColumnMetaData {
    let name = column.name.to_lowercase();
    match column.sql_type {
        SqlType::Varchar => text(&name, column.nullable),
        SqlType::Number { precision, scale } => ColumnMetaData {
            precision: Some(precision.into()),
            scale: Some(scale.into()),
            ..fixed(&name, column.nullable)
        },
        SqlType::Decimal { precision, scale } => ColumnMetaData {
            name,
            r#type: "DECIMAL".to_string(),
            precision: Some(precision.into()),
            scale: Some(scale.into()),
            length: None,
            nullable: column.nullable,
        },
    }
}
