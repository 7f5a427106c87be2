//! Best-effort parameter extraction from normalized statement text

use crate::catalog::{FixtureCatalog, DEFAULT_TABLE};
use crate::error::{Error, Result};

/// Row cap applied when a statement has no usable LIMIT
pub const DEFAULT_LIMIT: usize = 10;

const LIMIT_KEYWORD: &str = "LIMIT";

/// Parse the operand following the first `LIMIT` token
pub fn parse_limit(statement: &str) -> Result<Option<usize>> {
    let Some((_, rest)) = statement.split_once(LIMIT_KEYWORD) else {
        return Ok(None);
    };

    let operand = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::InvalidLimit(String::new()))?;

    operand
        .parse::<usize>()
        .map(Some)
        .map_err(|_| Error::InvalidLimit(operand.to_string()))
}

/// Row cap for a statement, falling back to [`DEFAULT_LIMIT`]
pub fn extract_limit(statement: &str) -> usize {
    match parse_limit(statement) {
        Ok(Some(limit)) => limit,
        Ok(None) => DEFAULT_LIMIT,
        Err(e) => {
            tracing::debug!("{}; using default limit {}", e, DEFAULT_LIMIT);
            DEFAULT_LIMIT
        }
    }
}

/// First described table whose name occurs in the statement, else the default table
pub fn resolve_table_name<'a>(catalog: &'a FixtureCatalog, statement: &str) -> &'a str {
    catalog
        .described_table_names()
        .find(|name| statement.contains(name))
        .unwrap_or(DEFAULT_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_absent() {
        assert_eq!(parse_limit("SELECT * FROM EMPLOYEES").unwrap(), None);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES"), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_present() {
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT 2"), 2);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT   3 OFFSET 1"), 3);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT 0"), 0);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT 100"), 100);
    }

    #[test]
    fn test_limit_unparsable_falls_back() {
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT"), DEFAULT_LIMIT);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT ALL"), DEFAULT_LIMIT);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT -1"), DEFAULT_LIMIT);
        assert_eq!(extract_limit("SELECT * FROM EMPLOYEES LIMIT 2;"), DEFAULT_LIMIT);
        assert_eq!(
            extract_limit("SELECT * FROM EMPLOYEES LIMIT 99999999999999999999999"),
            DEFAULT_LIMIT
        );
        assert!(matches!(
            parse_limit("SELECT * FROM EMPLOYEES LIMIT X"),
            Err(Error::InvalidLimit(op)) if op == "X"
        ));
    }

    #[test]
    fn test_first_limit_token_is_used() {
        assert_eq!(
            extract_limit("SELECT * FROM (SELECT * FROM PRODUCTS LIMIT 1) LIMIT 3"),
            1
        );
    }

    #[test]
    fn test_resolve_known_tables() {
        let catalog = FixtureCatalog::new();
        assert_eq!(resolve_table_name(&catalog, "DESCRIBE TABLE PRODUCTS"), "PRODUCTS");
        assert_eq!(
            resolve_table_name(&catalog, "DESCRIBE TABLE PUBLIC.EMPLOYEES"),
            "EMPLOYEES"
        );
    }

    #[test]
    fn test_resolve_unknown_table_falls_back() {
        let catalog = FixtureCatalog::new();
        assert_eq!(
            resolve_table_name(&catalog, "DESCRIBE TABLE UNKNOWNTABLE"),
            "EMPLOYEES"
        );
        assert_eq!(resolve_table_name(&catalog, "DESCRIBE TABLE"), "EMPLOYEES");
    }

    #[test]
    fn test_resolve_uses_catalog_order() {
        let catalog = FixtureCatalog::new();
        // Both names occur; EMPLOYEES is declared first
        assert_eq!(
            resolve_table_name(&catalog, "DESCRIBE TABLE PRODUCTS EMPLOYEES"),
            "EMPLOYEES"
        );
    }
}
