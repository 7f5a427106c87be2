//! Mock Cloud Engine
//!
//! Classifies SQL statement text and synthesizes Snowflake- and
//! Databricks-shaped responses from a fixed fixture catalog.

pub mod catalog;
pub mod classifier;
pub mod error;
pub mod executor;
pub mod extract;
pub mod formatter;
pub mod protocol;

pub use catalog::FixtureCatalog;
pub use classifier::{Intent, Vendor};
pub use error::{Error, Result};
pub use executor::Executor;
