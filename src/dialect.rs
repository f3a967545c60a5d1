//! Dialect selection and per-dialect bound-parameter ceilings.

/// One statement cannot carry more bound parameters than the server accepts,
/// so row sequences are chunked against these ceilings.
pub const MYSQL_MAX_PLACEHOLDERS: usize = 65_535;
pub const ORACLE_MAX_PLACEHOLDERS: usize = 1_000;

/// Database family the generated statements target.
///
/// The two families disagree on bulk insert shape: MySQL takes a multi-row
/// `VALUES (..),(..)` list with anonymous `?` markers, Oracle has no
/// multi-row `VALUES` form and instead wraps per-row fragments in
/// `insert all .. select * from dual` with uniquely numbered `:k` binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Multi-row `VALUES` dialect (MySQL family).
    MySQL,
    /// `INSERT ALL` dialect (Oracle family).
    Oracle,
}

impl Dialect {
    /// Maximum bound parameters one statement may carry for this dialect.
    #[inline]
    pub const fn max_placeholders(&self) -> usize {
        match self {
            Dialect::MySQL => MYSQL_MAX_PLACEHOLDERS,
            Dialect::Oracle => ORACLE_MAX_PLACEHOLDERS,
        }
    }
}
