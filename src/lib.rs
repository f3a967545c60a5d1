//! Dialect-aware bulk INSERT batching.
//!
//! Takes a single-row parameterized insert template plus a slice of rows,
//! rewrites the template into dialect-correct multi-row statements chunked
//! against the dialect's bound-parameter ceiling, and executes all chunks
//! inside one transaction over a caller-supplied connection.
//!
//! For three rows, the MySQL-family template
//!
//! ```text
//! insert into service (description, tag) values (?,?)
//! ```
//!
//! becomes
//!
//! ```text
//! insert into service (description, tag) values (?,?),(?,?),(?,?)
//! ```
//!
//! while the Oracle family, which has no multi-row `VALUES` form, gets an
//! `insert all .. select * from dual` envelope with uniquely numbered
//! `:k` bind variables.

pub mod bulk;
pub mod chunk;
pub mod context;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod row;
pub mod statement;
pub mod template;
pub mod tracing;
pub mod value;

mod executor;

// Re-export key types and traits
pub use bulk::Bulk;
pub use context::Context;
pub use dialect::{Dialect, MYSQL_MAX_PLACEHOLDERS, ORACLE_MAX_PLACEHOLDERS};
pub use drivers::{Connection, Transaction};
pub use error::{BulkError, Result};
pub use row::BulkRow;
pub use statement::Statement;
pub use template::InsertTemplate;
pub use value::{ToValue, Value};
