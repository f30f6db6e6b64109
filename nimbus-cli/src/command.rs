//! Command traits
//!
//! Every subcommand is a clap `Args` struct implementing exactly one of:
//! - [`ShowOne`]: produces a single record as key/value pairs
//! - [`Lister`]: produces columns and rows
//! - [`Action`]: produces no output
//!
//! Each trait names the service client the command talks to.

use async_trait::async_trait;
use nimbus_core::Record;
use serde_json::Value;

use crate::error::CliResult;
use crate::output::{self, OutputFormat};

/// A single record, as parallel column and value vectors
#[derive(Debug, Clone, PartialEq)]
pub struct ShowData {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl ShowData {
    /// Sorted key/value pairs of a record
    ///
    /// An empty record yields a single blank pair so that table output still
    /// has a row.
    pub fn from_record(record: Record) -> Self {
        if record.is_empty() {
            return Self {
                columns: vec![String::new()],
                values: vec![Value::String(String::new())],
            };
        }
        let (columns, values) = record.into_sorted_pairs();
        Self { columns, values }
    }

    /// Value shown for a column, if present
    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }
}

/// Rows produced on demand
pub type Rows = Box<dyn Iterator<Item = Vec<String>> + Send>;

/// Column headers plus a lazily produced row sequence
pub struct Listing {
    pub columns: Vec<String>,
    pub rows: Rows,
}

impl Listing {
    pub fn new(columns: Vec<String>, rows: impl Iterator<Item = Vec<String>> + Send + 'static) -> Self {
        Self {
            columns,
            rows: Box::new(rows),
        }
    }
}

impl std::fmt::Debug for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listing")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

/// A command that displays one record
#[async_trait]
pub trait ShowOne: std::fmt::Debug + Send + Sync {
    type Client: ?Sized + Send + Sync;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData>;
}

/// A command that displays a list of records
#[async_trait]
pub trait Lister: std::fmt::Debug + Send + Sync {
    type Client: ?Sized + Send + Sync;

    async fn take_action(&self, client: &Self::Client) -> CliResult<Listing>;
}

/// A command with no output
#[async_trait]
pub trait Action: std::fmt::Debug + Send + Sync {
    type Client: ?Sized + Send + Sync;

    async fn take_action(&self, client: &Self::Client) -> CliResult<()>;
}

/// Run a [`ShowOne`] command and print its record
pub async fn run_show<C: ShowOne>(cmd: &C, client: &C::Client, format: OutputFormat) -> CliResult<()> {
    let data = cmd.take_action(client).await?;
    output::print_show(&data, format)
}

/// Run a [`Lister`] command and print its rows
pub async fn run_list<C: Lister>(cmd: &C, client: &C::Client, format: OutputFormat) -> CliResult<()> {
    let listing = cmd.take_action(client).await?;
    output::print_list(listing, format)
}

/// Run an [`Action`] command
pub async fn run_action<C: Action>(cmd: &C, client: &C::Client) -> CliResult<()> {
    cmd.take_action(client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;
    use serde_json::json;

    #[test]
    fn test_show_data_sorted() {
        let data = ShowData::from_record(record(json!({"name": "n", "id": "1"})));
        assert_eq!(data.columns, vec!["id", "name"]);
        assert_eq!(data.get("name"), Some(&json!("n")));
        assert_eq!(data.get("links"), None);
    }

    #[test]
    fn test_empty_record_yields_blank_row() {
        let data = ShowData::from_record(Record::new());
        assert_eq!(data.columns, vec![""]);
        assert_eq!(data.values, vec![json!("")]);
    }
}
