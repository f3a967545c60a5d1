//! Driver contract: the seam between statement generation and a database.
//!
//! A driver supplies `begin` / `execute` / `commit` / `rollback`; everything
//! above this seam is pure text and value shuffling. The bundled reference
//! implementation lives behind the `rusqlite` feature; `tests/common`
//! carries a scripted mock that keeps the contract honest from the other
//! side.

use crate::context::Context;
use crate::error::Result;
use crate::value::Value;

#[cfg(feature = "rusqlite")]
pub mod rusqlite;

/// A database connection able to open one transaction at a time.
pub trait Connection {
    type Transaction<'conn>: Transaction
    where
        Self: 'conn;

    /// Opens a transaction spanning the statements of one request.
    fn begin(&mut self) -> Result<Self::Transaction<'_>>;
}

/// An open transaction.
///
/// `execute` receives the caller's [`Context`] uninterpreted by the core;
/// drivers decide whether to enforce it.
pub trait Transaction {
    /// Executes one statement, returning the affected row count.
    fn execute(&mut self, ctx: &Context, sql: &str, params: &[Value<'_>]) -> Result<usize>;

    /// Commits the transaction.
    fn commit(self) -> Result<()>;

    /// Rolls the transaction back.
    fn rollback(self) -> Result<()>;
}
