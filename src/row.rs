//! Row contract: ordered field extraction for insertable records.

use crate::value::{ToValue, Value};

/// A record insertable as one row of a bulk statement.
///
/// Implementors expose their fields as an ordered [`Value`] list; the field
/// order must line up with the column list declared in the insert template.
/// All rows of one request must report the same [`width`](BulkRow::width);
/// the request is rejected otherwise.
///
/// Tuples of [`ToValue`] scalars up to arity 16 implement this out of the
/// box, as does `Vec<Value>` for rows whose shape is only known at runtime.
pub trait BulkRow {
    /// Ordered field values, borrowed from the row.
    fn fields(&self) -> Vec<Value<'_>>;

    /// Number of fields. Override when the count is known without
    /// materializing the values.
    fn width(&self) -> usize {
        self.fields().len()
    }
}

impl<R: BulkRow> BulkRow for &R {
    fn fields(&self) -> Vec<Value<'_>> {
        (**self).fields()
    }

    fn width(&self) -> usize {
        (**self).width()
    }
}

impl<'v> BulkRow for Vec<Value<'v>> {
    fn fields(&self) -> Vec<Value<'_>> {
        self.iter().map(ToValue::to_value).collect()
    }

    fn width(&self) -> usize {
        self.len()
    }
}

macro_rules! impl_row_for_tuple {
    ($count:literal => $($name:ident : $idx:tt),+) => {
        impl<$($name: ToValue),+> BulkRow for ($($name,)+) {
            fn fields(&self) -> Vec<Value<'_>> {
                vec![$(self.$idx.to_value()),+]
            }

            fn width(&self) -> usize {
                $count
            }
        }
    };
}

impl_row_for_tuple!(1 => A:0);
impl_row_for_tuple!(2 => A:0, B:1);
impl_row_for_tuple!(3 => A:0, B:1, C:2);
impl_row_for_tuple!(4 => A:0, B:1, C:2, D:3);
impl_row_for_tuple!(5 => A:0, B:1, C:2, D:3, E:4);
impl_row_for_tuple!(6 => A:0, B:1, C:2, D:3, E:4, F:5);
impl_row_for_tuple!(7 => A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_row_for_tuple!(8 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);
impl_row_for_tuple!(9 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8);
impl_row_for_tuple!(10 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9);
impl_row_for_tuple!(11 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10);
impl_row_for_tuple!(12 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11);
impl_row_for_tuple!(13 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11, M:12);
impl_row_for_tuple!(14 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11, M:12, N:13);
impl_row_for_tuple!(15 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11, M:12, N:13, O:14);
impl_row_for_tuple!(16 => A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7, I:8, J:9, K:10, L:11, M:12, N:13, O:14, P:15);

/// Row-major flattening of a chunk's field values.
///
/// Order: row 0 field 0, row 0 field 1, ..., row 1 field 0, and so on; the
/// same order both statement builders assign their markers in.
pub(crate) fn flatten<'r, R: BulkRow>(chunk: &'r [R], width: usize) -> Vec<Value<'r>> {
    let mut args = Vec::with_capacity(chunk.len() * width);
    for row in chunk {
        args.extend(row.fields());
    }
    args
}
