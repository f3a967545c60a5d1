//! Transactional execution of a request's statement list.

use crate::bulk_trace_tx;
use crate::context::Context;
use crate::drivers::{Connection, Transaction};
use crate::error::{BulkError, Result};
use crate::statement::Statement;

/// Runs all statements of one request inside a single transaction.
///
/// Statements execute strictly in order. The first failure rolls the
/// transaction back and propagates; nothing executed before it survives.
/// Begin and commit failures surface as [`BulkError::Transaction`]. A
/// rollback's own failure is discarded; the execution error is the one
/// worth reporting.
pub(crate) fn run<C: Connection>(
    conn: &mut C,
    ctx: &Context,
    statements: &[Statement<'_>],
) -> Result<()> {
    if statements.is_empty() {
        return Ok(());
    }

    let mut tx = conn
        .begin()
        .map_err(|e| BulkError::Transaction(format!("error starting transaction: {e}")))?;
    bulk_trace_tx!("begin");

    for statement in statements {
        if let Err(err) = tx.execute(ctx, &statement.sql, &statement.params) {
            bulk_trace_tx!("rollback");
            let _ = tx.rollback();
            return Err(err);
        }
    }

    tx.commit()
        .map_err(|e| BulkError::Transaction(format!("error on transaction commit: {e}")))?;
    bulk_trace_tx!("commit");

    Ok(())
}
