//! Wire protocol types
//!
//! Snowflake SQL API v2 and Databricks SQL Statement Execution API 2.0
//! request/response shapes. The two response families never share a type.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Execute request accepted by both vendor endpoints
///
/// Only `statement` is read. Other fields the real APIs define
/// (warehouse, schema, wait_timeout, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementRequest {
    #[serde(default)]
    pub statement: String,
}

impl StatementRequest {
    /// Decode a raw request body; an empty body is an empty statement
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(body)?)
    }
}

// ---------------------------------------------------------------------------
// Snowflake
// ---------------------------------------------------------------------------

/// Snowflake code for a successfully executed statement
pub const SNOWFLAKE_SUCCESS_CODE: &str = "090001";

/// Snowflake SQL API v2 response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeResponse {
    pub result_set_meta_data: ResultSetMetaData,

    /// Every cell is rendered as a JSON string
    pub data: Vec<Vec<Option<String>>>,

    pub code: String,

    pub sql_state: String,

    pub statement_handle: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result set metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSetMetaData {
    pub num_rows: i64,

    pub format: String,

    pub row_type: Vec<ColumnMetaData>,
}

/// Column metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetaData {
    pub name: String,

    /// Snowflake type (FIXED, TEXT, DECIMAL)
    pub r#type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,

    pub nullable: bool,
}

impl SnowflakeResponse {
    /// Build a successful response
    pub fn success(
        data: Vec<Vec<Option<String>>>,
        row_type: Vec<ColumnMetaData>,
        statement_handle: String,
        message: &str,
    ) -> Self {
        let num_rows = data.len() as i64;
        Self {
            result_set_meta_data: ResultSetMetaData {
                num_rows,
                format: "jsonv2".to_string(),
                row_type,
            },
            data,
            code: SNOWFLAKE_SUCCESS_CODE.to_string(),
            sql_state: "00000".to_string(),
            statement_handle,
            message: Some(message.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Databricks
// ---------------------------------------------------------------------------

/// Statement execution state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementState {
    Succeeded,
}

/// Databricks SQL Statement Execution API response
#[derive(Debug, Clone, Serialize)]
pub struct DatabricksResponse {
    pub statement_id: String,
    pub status: StatementStatus,
    pub manifest: ResultManifest,
    pub result: ResultData,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementStatus {
    pub state: StatementState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultManifest {
    pub format: String,
    pub schema: ResultSchema,
    pub total_row_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSchema {
    pub column_count: i64,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,

    /// Databricks type (STRING, BIGINT, INT, BOOLEAN, DECIMAL)
    pub type_name: String,

    pub position: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultData {
    pub row_count: i64,
    pub data_array: Vec<Vec<serde_json::Value>>,
}

impl DatabricksResponse {
    /// Build a succeeded response; column positions follow `columns` order
    pub fn succeeded(
        statement_id: String,
        columns: Vec<(String, String)>,
        data_array: Vec<Vec<serde_json::Value>>,
    ) -> Self {
        let columns: Vec<ColumnInfo> = columns
            .into_iter()
            .enumerate()
            .map(|(position, (name, type_name))| ColumnInfo {
                name,
                type_name,
                position: position as i64,
            })
            .collect();
        let row_count = data_array.len() as i64;

        Self {
            statement_id,
            status: StatementStatus {
                state: StatementState::Succeeded,
            },
            manifest: ResultManifest {
                format: "JSON_ARRAY".to_string(),
                schema: ResultSchema {
                    column_count: columns.len() as i64,
                    columns,
                },
                total_row_count: row_count,
            },
            result: ResultData {
                row_count,
                data_array,
            },
        }
    }
}
