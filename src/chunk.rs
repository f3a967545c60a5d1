//! Row-sequence chunking against a dialect's placeholder ceiling.

use crate::error::{BulkError, Result};
use crate::row::BulkRow;

/// Splits `rows` into contiguous chunks such that every chunk satisfies
/// `chunk_len * fields_per_row <= ceiling`.
///
/// When the whole sequence fits it comes back as one chunk. Otherwise the
/// chunk size is the largest `rows.len() / i` (for the smallest positive
/// `i`) that falls under `ceiling / fields_per_row`, and the final chunk
/// holds the remainder, which can be much smaller when the division is
/// uneven. Order is preserved: concatenating the chunks reproduces `rows`.
pub fn chunk_rows<'r, R: BulkRow>(
    rows: &'r [R],
    fields_per_row: usize,
    ceiling: usize,
) -> Result<Vec<&'r [R]>> {
    if fields_per_row == 0 {
        return Err(BulkError::Schema("rows have no fields".into()));
    }

    let limit = ceiling / fields_per_row;
    if limit == 0 {
        return Err(BulkError::Schema(format!(
            "a single row carries {fields_per_row} placeholders, above the ceiling of {ceiling}"
        )));
    }

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = if rows.len() > limit {
        // find_batch_size returns 0 when limit == 1; a zero size cannot
        // tile the slice, and one row per chunk still fits the ceiling.
        find_batch_size(rows.len(), limit).max(1)
    } else {
        rows.len()
    };

    Ok(rows.chunks(chunk_size).collect())
}

/// Smallest divisor search: the first positive `i` where `n / i` drops
/// under `limit` fixes the batch size at `n / i`.
fn find_batch_size(n: usize, limit: usize) -> usize {
    let mut i = 1;
    loop {
        let result = n / i;
        if result < limit {
            return result;
        }
        i += 1;
    }
}
