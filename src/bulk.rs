//! The bulk insert facade.

use crate::bulk_trace_statement;
use crate::chunk::chunk_rows;
use crate::context::Context;
use crate::dialect::Dialect;
use crate::drivers::Connection;
use crate::error::{BulkError, Result};
use crate::executor;
use crate::row::BulkRow;
use crate::statement::{self, Statement};
use crate::template::InsertTemplate;

/// Rewrites single-row insert templates into batched bulk inserts and runs
/// them in one transaction.
///
/// Constructed with a dialect selector and, for execution, a connection.
/// The placeholder ceiling defaults to the dialect's fixed limit and can be
/// lowered through [`max_placeholders`](Bulk::max_placeholders) to exercise
/// chunk splitting without huge inputs.
///
/// ```
/// use sqlbulk::{Bulk, Dialect};
///
/// let bulk = Bulk::<()>::new(Dialect::MySQL);
/// let rows = [("a description", 7i64), ("another", 8i64)];
/// let statements = bulk
///     .statements("insert into service (description, tag) values (?,?)", &rows)
///     .unwrap();
///
/// assert_eq!(
///     statements[0].sql,
///     "insert into service (description, tag) values (?,?),(?,?)"
/// );
/// assert_eq!(statements[0].params.len(), 4);
/// ```
#[derive(Debug)]
pub struct Bulk<C> {
    dialect: Dialect,
    ceiling: usize,
    conn: Option<C>,
}

impl<C> Bulk<C> {
    /// A connection-less instance. Statement generation works; execution
    /// always fails with [`BulkError::Connection`].
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ceiling: dialect.max_placeholders(),
            conn: None,
        }
    }

    /// An executable instance over `conn`.
    pub fn with_connection(dialect: Dialect, conn: C) -> Self {
        Self {
            dialect,
            ceiling: dialect.max_placeholders(),
            conn: Some(conn),
        }
    }

    /// Overrides the placeholder ceiling. Chunk sizes follow
    /// `rows_per_chunk * fields_per_row <= ceiling`.
    pub fn max_placeholders(mut self, ceiling: usize) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// The dialect this instance generates statements for.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The configured connection, if any.
    pub fn connection(&self) -> Option<&C> {
        self.conn.as_ref()
    }

    /// Validates the request and generates the per-chunk statements without
    /// touching the database.
    ///
    /// This is exactly what [`bulk_insert`](Bulk::bulk_insert) will execute,
    /// exposed for inspection and testing.
    pub fn statements<'r, R: BulkRow>(
        &self,
        query: &str,
        rows: &'r [R],
    ) -> Result<Vec<Statement<'r>>> {
        check_request(query, rows)?;

        let template = InsertTemplate::parse(query, rows[0].width())?;
        let chunks = chunk_rows(rows, template.field_count(), self.ceiling)?;

        let mut statements = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let statement = match self.dialect {
                Dialect::MySQL => statement::multi_values(&template, chunk),
                Dialect::Oracle => statement::insert_all(&template, chunk),
            };
            bulk_trace_statement!(&statement.sql, statement.params.len());
            statements.push(statement);
        }

        Ok(statements)
    }

    /// Transforms `query` into its bulk variant and executes every chunk
    /// statement inside one transaction.
    ///
    /// `ctx` is passed through to each statement execution uninterpreted;
    /// enforcement is up to the driver. The first failing statement rolls
    /// everything back; there is no partial commit within a request.
    pub fn bulk_insert<R: BulkRow>(
        &mut self,
        ctx: &Context,
        query: &str,
        rows: &[R],
    ) -> Result<()>
    where
        C: Connection,
    {
        let statements = self.statements(query, rows)?;

        let Some(conn) = self.conn.as_mut() else {
            return Err(BulkError::Connection("no connection configured".into()));
        };

        executor::run(conn, ctx, &statements)
    }
}

/// Rejects requests no statement should be generated for: empty row sets,
/// rows of differing widths, empty templates, in that order. A missing
/// connection is only ever reported for otherwise-valid input.
fn check_request<R: BulkRow>(query: &str, rows: &[R]) -> Result<()> {
    if rows.is_empty() {
        return Err(BulkError::InvalidRequest("no rows in request".into()));
    }

    let width = rows[0].width();
    for (i, row) in rows.iter().enumerate().skip(1) {
        let actual = row.width();
        if actual != width {
            return Err(BulkError::InvalidRequest(format!(
                "invalid shape for row {i}: {actual} fields where row 0 has {width}"
            )));
        }
    }

    if query.is_empty() {
        return Err(BulkError::InvalidRequest("query is empty".into()));
    }

    Ok(())
}
