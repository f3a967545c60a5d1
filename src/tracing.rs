//! Tracing utilities for statement generation and transaction observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the generated SQL text and
/// argument count.
///
/// ```ignore
/// bulk_trace_statement!(&statement.sql, statement.params.len());
/// ```
#[macro_export]
macro_rules! bulk_trace_statement {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, params = $param_count, "sqlbulk.statement");
    };
}

/// Emit an info-level tracing event for transaction lifecycle (begin,
/// commit, rollback).
///
/// ```ignore
/// bulk_trace_tx!("begin");
/// bulk_trace_tx!("commit");
/// ```
#[macro_export]
macro_rules! bulk_trace_tx {
    ($event:literal) => {
        #[cfg(feature = "tracing")]
        tracing::info!(event = $event, "sqlbulk.transaction");
    };
}
