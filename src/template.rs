//! Insert template parsing.
//!
//! A template arrives as free-form single-row insert text, e.g.
//! `insert into service (description, tag) values (?,?)`. Parsing pulls the
//! declared column list out of the first parenthesized group, checks it
//! against the row shape, and normalizes the text down to the part both
//! statement builders grow from: everything up to and including the
//! `values` keyword.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::{BulkError, Result};

/// A parsed insert template, ready for chunk-specific value lists.
#[derive(Debug, Clone)]
pub struct InsertTemplate {
    /// Template text up to and including the `values` keyword; any
    /// pre-existing value-list suffix is discarded.
    normalized: String,
    /// Declared column names, whitespace removed.
    columns: SmallVec<[CompactString; 8]>,
    /// Single-row placeholder group: `(?,?,...,?)`.
    group: CompactString,
}

impl InsertTemplate {
    /// Parses `template` against a row of `field_count` fields.
    ///
    /// Fails with [`BulkError::Parse`] when the column list cannot be
    /// located (or a column token is itself a `?` marker), and with
    /// [`BulkError::SchemaMismatch`] when the column list and the row shape
    /// disagree.
    pub fn parse(template: &str, field_count: usize) -> Result<Self> {
        let columns = extract_columns(template)?;
        if columns.len() != field_count {
            return Err(BulkError::SchemaMismatch {
                columns: columns.len(),
                fields: field_count,
            });
        }

        Ok(Self {
            normalized: strip_values(template),
            columns,
            group: placeholder_group(field_count),
        })
    }

    /// Template text ending in the `values` keyword.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Declared column names.
    pub fn columns(&self) -> &[CompactString] {
        &self.columns
    }

    /// Markers per row; equals the declared column count.
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// The single-row placeholder group, `(?,?,...,?)`.
    pub fn group(&self) -> &str {
        &self.group
    }
}

/// Extracts the declared column list: the text between the first `(` and
/// the first `)` after it, whitespace-stripped and comma-split.
fn extract_columns(template: &str) -> Result<SmallVec<[CompactString; 8]>> {
    let open = template.find('(');
    let close = open.and_then(|at| {
        template[at + 1..].find(')').map(|rel| at + 1 + rel)
    });

    let (Some(open), Some(close)) = (open, close) else {
        return Err(BulkError::Parse(format!(
            "query columns not properly defined, query: {template}"
        )));
    };

    let cleaned: CompactString = template[open + 1..close]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let columns: SmallVec<[CompactString; 8]> =
        cleaned.split(',').map(CompactString::from).collect();

    for column in &columns {
        if column.as_str() == "?" {
            return Err(BulkError::Parse(format!("invalid column name: {column}")));
        }
    }

    Ok(columns)
}

/// Truncates the template at the `values` keyword (case-sensitive) and
/// re-appends the keyword itself, discarding any existing value list. A
/// template with no `values` keyword gets one appended.
fn strip_values(template: &str) -> String {
    match template.find("values") {
        Some(at) if at > 0 => format!("{}values", &template[..at]),
        _ => format!("{template} values"),
    }
}

/// Builds the single-row placeholder group for `field_count` fields.
fn placeholder_group(field_count: usize) -> CompactString {
    let mut group = CompactString::with_capacity(field_count * 2 + 1);
    group.push('(');
    for i in 0..field_count {
        if i > 0 {
            group.push(',');
        }
        group.push('?');
    }
    group.push(')');
    group
}
