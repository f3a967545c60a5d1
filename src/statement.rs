//! Per-chunk statement builders for the two dialect strategies.

use compact_str::CompactString;

use crate::row::{BulkRow, flatten};
use crate::template::InsertTemplate;
use crate::value::Value;

/// A ready-to-execute statement: dialect-specific SQL text plus its
/// arguments flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'a> {
    pub sql: String,
    pub params: Vec<Value<'a>>,
}

/// Multi-row `VALUES` builder (MySQL family).
///
/// Emits one placeholder group per row, comma-joined after the template's
/// `values` keyword:
///
/// ```text
/// insert into service (description, tag) values (?,?),(?,?),(?,?)
/// ```
///
/// Markers stay anonymous; the driver binds them positionally.
pub fn multi_values<'r, R: BulkRow>(template: &InsertTemplate, chunk: &'r [R]) -> Statement<'r> {
    let group = template.group();
    let mut sql = CompactString::with_capacity(
        template.normalized().len() + chunk.len() * (group.len() + 1),
    );

    sql.push_str(template.normalized());
    sql.push(' ');
    for i in 0..chunk.len() {
        if i > 0 {
            sql.push(',');
        }
        sql.push_str(group);
    }

    Statement {
        sql: sql.into(),
        params: flatten(chunk, template.field_count()),
    }
}

/// `INSERT ALL` builder (Oracle family).
///
/// Oracle has no multi-row `VALUES` insert; independent single-row
/// fragments are wrapped in an `insert all .. select * from dual` envelope
/// instead:
///
/// ```text
/// insert all into service (description, tag) values (:0,:1)
///            into service (description, tag) values (:2,:3)
/// select * from dual
/// ```
///
/// Oracle also rejects repeated anonymous markers within one statement, so
/// every positional marker is rewritten into a uniquely numbered bind
/// variable, left to right, covering `0..rows*fields` with no gaps.
pub fn insert_all<'r, R: BulkRow>(template: &InsertTemplate, chunk: &'r [R]) -> Statement<'r> {
    // Bare `into <table> (<columns>) values` fragment.
    let fragment = template.normalized().replacen("insert", "", 1);

    let mut merged = CompactString::with_capacity(
        chunk.len() * (fragment.len() + template.group().len() + 2),
    );
    for i in 0..chunk.len() {
        if i > 0 {
            merged.push(' ');
        }
        merged.push_str(&fragment);
        merged.push(' ');
        merged.push_str(template.group());
    }

    let wrapped = format!("insert all {merged} select * from dual");
    let statement = remove_double_spaces(&number_markers(&wrapped));

    Statement {
        sql: statement,
        params: flatten(chunk, template.field_count()),
    }
}

/// Rewrites the k-th positional marker (0-indexed, left to right) into the
/// numbered bind variable `:k`.
fn number_markers(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() * 2);
    let mut index = 0usize;
    for ch in sql.chars() {
        if ch == '?' {
            out.push(':');
            out.push_str(&index.to_string());
            index += 1;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Collapses double-space runs left over from fragment concatenation.
fn remove_double_spaces(sql: &str) -> String {
    sql.replace("  ", " ")
}
