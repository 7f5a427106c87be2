//! Fixture Catalog
//!
//! The fixed dataset both vendor endpoints render. It is built once at
//! startup and only ever handed out behind a shared reference.

use indexmap::IndexMap;

/// Table every lookup falls back to when a name is unknown
pub const DEFAULT_TABLE: &str = "EMPLOYEES";

/// Kind of catalog object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Table,
    View,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Table => "TABLE",
            TableKind::View => "VIEW",
        }
    }
}

/// Declared SQL type of a fixture column
///
/// Each formatter maps this onto its own vendor vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// NUMBER(precision, scale)
    Number { precision: u8, scale: u8 },
    /// VARCHAR
    Varchar,
    /// DECIMAL(precision, scale)
    Decimal { precision: u8, scale: u8 },
}

impl SqlType {
    /// Type name as written in the table definition
    pub fn declared_name(&self) -> &'static str {
        match self {
            SqlType::Number { .. } => "NUMBER",
            SqlType::Varchar => "VARCHAR",
            SqlType::Decimal { .. } => "DECIMAL",
        }
    }
}

/// Table or view entry in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTable {
    pub schema_name: String,
    pub name: String,
    pub kind: TableKind,
    pub declared_row_count: u64,
}

/// Column metadata, owned by a table through its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureColumn {
    pub name: String,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub comment: String,
}

/// One record; values are in column order
pub type FixtureRow = Vec<String>;

/// Read-only sample warehouse
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    tables: Vec<FixtureTable>,
    columns: IndexMap<String, Vec<FixtureColumn>>,
    rows: IndexMap<String, Vec<FixtureRow>>,
    databases: Vec<String>,
    schemas: Vec<String>,
    catalogs: Vec<String>,
}

impl FixtureCatalog {
    /// Build the sample dataset
    pub fn new() -> Self {
        let tables = vec![
            table("PUBLIC", "EMPLOYEES", TableKind::Table, 5),
            table("PUBLIC", "PRODUCTS", TableKind::Table, 3),
            table("PUBLIC", "EMPLOYEE_SUMMARY", TableKind::View, 0),
        ];

        let mut columns = IndexMap::new();
        columns.insert(
            "EMPLOYEES".to_string(),
            vec![
                column("ID", integer(), false, "Primary key"),
                column("NAME", SqlType::Varchar, false, "Employee name"),
                column("EMAIL", SqlType::Varchar, true, "Email address"),
                column("DEPARTMENT", SqlType::Varchar, true, "Department name"),
                column(
                    "SALARY",
                    SqlType::Number {
                        precision: 10,
                        scale: 2,
                    },
                    true,
                    "Annual salary",
                ),
            ],
        );
        columns.insert(
            "PRODUCTS".to_string(),
            vec![
                column("PRODUCT_ID", SqlType::Varchar, false, "Product identifier"),
                column("NAME", SqlType::Varchar, false, "Product name"),
                column("CATEGORY", SqlType::Varchar, true, "Product category"),
                column(
                    "PRICE",
                    SqlType::Decimal {
                        precision: 10,
                        scale: 2,
                    },
                    true,
                    "Unit price",
                ),
                column("STOCK", integer(), true, "Units in stock"),
            ],
        );

        let mut rows = IndexMap::new();
        rows.insert(
            "EMPLOYEES".to_string(),
            vec![
                row(&["1", "Alice Johnson", "alice@example.com", "Engineering", "95000"]),
                row(&["2", "Bob Smith", "bob@example.com", "Marketing", "75000"]),
                row(&["3", "Carol Williams", "carol@example.com", "Engineering", "105000"]),
                row(&["4", "David Brown", "david@example.com", "Sales", "85000"]),
                row(&["5", "Eve Davis", "eve@example.com", "Engineering", "92000"]),
            ],
        );
        rows.insert(
            "PRODUCTS".to_string(),
            vec![
                row(&["P001", "Widget Pro", "Electronics", "299.99", "150"]),
                row(&["P002", "Gadget Plus", "Electronics", "199.99", "200"]),
                row(&["P003", "Super Tool", "Tools", "49.99", "500"]),
            ],
        );

        Self {
            tables,
            columns,
            rows,
            databases: vec!["MOCK_DB".to_string(), "SAMPLE_DATA".to_string()],
            schemas: vec!["PUBLIC".to_string(), "INFORMATION_SCHEMA".to_string()],
            catalogs: vec!["main".to_string(), "hive_metastore".to_string()],
        }
    }

    /// All tables and views, in declaration order
    pub fn tables(&self) -> &[FixtureTable] {
        &self.tables
    }

    /// Views only
    pub fn views(&self) -> impl Iterator<Item = &FixtureTable> {
        self.tables.iter().filter(|t| t.kind == TableKind::View)
    }

    /// Names of tables that carry column definitions, in declaration order
    pub fn described_table_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Columns of `table`, or of [`DEFAULT_TABLE`] when the name is unknown
    pub fn columns(&self, table: &str) -> &[FixtureColumn] {
        self.columns
            .get(table)
            .or_else(|| self.columns.get(DEFAULT_TABLE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Row data of `table`; empty for views and unknown names
    pub fn rows(&self, table: &str) -> &[FixtureRow] {
        self.rows.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    /// Unity Catalog names (Databricks only)
    pub fn catalogs(&self) -> &[String] {
        &self.catalogs
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn table(schema_name: &str, name: &str, kind: TableKind, declared_row_count: u64) -> FixtureTable {
    FixtureTable {
        schema_name: schema_name.to_string(),
        name: name.to_string(),
        kind,
        declared_row_count,
    }
}

fn column(name: &str, sql_type: SqlType, nullable: bool, comment: &str) -> FixtureColumn {
    FixtureColumn {
        name: name.to_string(),
        sql_type,
        nullable,
        comment: comment.to_string(),
    }
}

fn integer() -> SqlType {
    SqlType::Number {
        precision: 38,
        scale: 0,
    }
}

fn row(values: &[&str]) -> FixtureRow {
    values.iter().map(|v| v.to_string()).collect()
}
