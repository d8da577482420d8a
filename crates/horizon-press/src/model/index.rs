//! Model index for addressing items in item models.
//!
//! A `ModelIndex` names a cell by row and column under a parent. The models
//! in this crate are flat, so every valid index has the invalid index as its
//! parent, but the type keeps the parent link so views written against the
//! general contract work unchanged.

use std::hash::{Hash, Hasher};

/// Represents a position within an `ItemModel`.
///
/// # Index Validity
///
/// Model indices should be used immediately and not stored long-term.
/// After a reset, insertion or removal, previously obtained indices may
/// refer to a different row or to no row at all.
#[derive(Clone)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    /// `None` indicates a root-level item.
    parent: Option<Box<ModelIndex>>,
    /// Model-specific identifier.
    internal_id: u64,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index stands for the root of the model when passed as a
    /// parent, and for "no such item" when returned from a lookup.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            parent: None,
            internal_id: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index with a custom internal ID.
    #[inline]
    pub fn with_internal_id(
        row: usize,
        column: usize,
        parent: ModelIndex,
        internal_id: u64,
    ) -> Self {
        Self {
            row,
            column,
            parent: if parent.is_valid() {
                Some(Box::new(parent))
            } else {
                None
            },
            internal_id,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index within its parent (0 for invalid indices).
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index within its parent (0 for invalid indices).
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the parent index, or an invalid index if this is a root item.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// Returns `true` if this index has a valid parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("internal_id", &self.internal_id)
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => true,
            (true, true) => {
                self.row == other.row
                    && self.column == other.column
                    && self.parent == other.parent
                    && self.internal_id == other.internal_id
            }
            _ => false,
        }
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.row.hash(state);
            self.column.hash(state);
            self.internal_id.hash(state);
        }
    }
}
