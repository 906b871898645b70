use contracts::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Opaque vertex identity usable on either side of a match.
///
/// Graph vertices are usually `String` labels and table positions are
/// [`TableId`]s; any ordered, hashable, printable type qualifies.
pub trait Vertex: Clone + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync {}

impl<T> Vertex for T where T: Clone + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync {}

/// 1-based row/column position in a distance table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId {
    /// The position, starting at 1.
    inner: u32,
}

impl TableId {
    /// Creates an identity for a 1-based table position.
    #[debug_requires(position >= 1, "table positions start at 1")]
    #[must_use]
    pub fn new(position: u32) -> Self {
        Self { inner: position }
    }

    /// Creates the identity for a 0-based matrix row.
    ///
    /// Rows past the last representable position saturate at `u32::MAX`.
    #[debug_requires(row < u32::MAX as usize, "row does not fit a table position")]
    #[must_use]
    pub fn from_row(row: usize) -> Self {
        let inner = u32::try_from(row)
            .ok()
            .and_then(|r| r.checked_add(1))
            .unwrap_or(u32::MAX);
        Self { inner }
    }

    /// Returns the 1-based position.
    #[must_use]
    pub const fn position(self) -> u32 {
        self.inner
    }

    /// Returns the 0-based matrix row. Position 0 maps to row 0.
    #[must_use]
    pub const fn row(self) -> usize {
        self.inner.saturating_sub(1) as usize
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<TableId> for u32 {
    #[inline]
    fn from(id: TableId) -> Self {
        id.inner
    }
}
