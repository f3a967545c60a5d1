//! Reference driver over a rusqlite connection.
//!
//! SQLite shares the anonymous `?` marker convention with the multi-values
//! dialect, so statements generated for [`crate::Dialect::MySQL`] execute
//! unchanged here. The driver enforces the caller's [`Context`] before each
//! statement; an in-flight statement is left to SQLite.

use rusqlite::params_from_iter;
use rusqlite::types::{ToSqlOutput, Value as SqliteValue, ValueRef};

use crate::context::Context;
use crate::drivers::{Connection, Transaction};
use crate::error::{BulkError, Result};
use crate::value::Value;

pub struct RusqliteTransaction<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl Connection for rusqlite::Connection {
    type Transaction<'conn>
        = RusqliteTransaction<'conn>
    where
        Self: 'conn;

    fn begin(&mut self) -> Result<Self::Transaction<'_>> {
        Ok(RusqliteTransaction {
            tx: self.transaction()?,
        })
    }
}

impl Transaction for RusqliteTransaction<'_> {
    fn execute(&mut self, ctx: &Context, sql: &str, params: &[Value<'_>]) -> Result<usize> {
        if ctx.is_cancelled() {
            return Err(BulkError::Transaction(
                "statement cancelled by caller".into(),
            ));
        }
        if ctx.deadline_exceeded() {
            return Err(BulkError::Transaction(
                "statement deadline exceeded".into(),
            ));
        }

        Ok(self.tx.execute(sql, params_from_iter(params.iter()))?)
    }

    fn commit(self) -> Result<()> {
        Ok(self.tx.commit()?)
    }

    fn rollback(self) -> Result<()> {
        Ok(self.tx.rollback()?)
    }
}

impl rusqlite::ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Integer(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Owned(SqliteValue::Real(*r)),
            Value::Text(t) => ToSqlOutput::Borrowed(ValueRef::Text(t.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            Value::Null => ToSqlOutput::Owned(SqliteValue::Null),
        })
    }
}
