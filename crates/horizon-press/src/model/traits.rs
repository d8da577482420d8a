//! Core traits for the model/view layer.
//!
//! This module defines the contract list widgets consume ([`ItemModel`]),
//! the signals a model emits ([`ModelSignals`]), and the narrow notification
//! seam models mutate through ([`ViewNotifier`]).

use horizon_press_core::Signal;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Flags indicating what operations are allowed on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item can be edited.
    pub editable: bool,
    /// Item can be dragged.
    pub drag_enabled: bool,
    /// Item can receive drops.
    pub drop_enabled: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
    /// Item should never have children (optimizes views).
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled item (no flags set).
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// The core trait for item models in the model/view layer.
///
/// At minimum, implement [`row_count`](ItemModel::row_count),
/// [`column_count`](ItemModel::column_count), [`data`](ItemModel::data),
/// [`index`](ItemModel::index), [`parent`](ItemModel::parent) and
/// [`signals`](ItemModel::signals).
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    ///
    /// For list models, return the item count when parent is invalid.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the item at index.
    ///
    /// Return `ItemData::None` for invalid indices and unsupported roles.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Creates a model index for the given row and column under parent.
    ///
    /// Return `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    /// Returns the flags for the item at the given index.
    ///
    /// The default returns selectable and enabled flags.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Returns `true` if `(row, column)` under `parent` addresses an item.
    fn has_index(&self, row: usize, column: usize, parent: &ModelIndex) -> bool {
        row < self.row_count(parent) && column < self.column_count(parent)
    }

    /// Returns the display text for an item (convenience for `data(index, Display)`).
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }

    /// Returns the tooltip for an item (convenience for `data(index, ToolTip)`).
    fn tooltip(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::ToolTip).into_string()
    }
}

/// Collection of signals emitted by item models.
///
/// # Signal Usage
///
/// - **Before modifications**: Emit `rows_about_to_be_*`
/// - **After modifications**: Emit `rows_*`
/// - **Major restructuring**: Emit the `model_*reset` pair
pub struct ModelSignals {
    /// Emitted just before rows are inserted.
    /// Args: (parent index, first row, last row)
    pub rows_about_to_be_inserted: Signal<(ModelIndex, usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (parent index, first row, last row)
    pub rows_inserted: Signal<(ModelIndex, usize, usize)>,

    /// Emitted just before rows are removed.
    /// Args: (parent index, first row, last row)
    pub rows_about_to_be_removed: Signal<(ModelIndex, usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (parent index, first row, last row)
    pub rows_removed: Signal<(ModelIndex, usize, usize)>,

    /// Emitted before the model is reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and inserted signals.
    pub fn emit_rows_inserted<F>(&self, parent: ModelIndex, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted
            .emit((parent.clone(), first, last));
        insert_fn();
        self.rows_inserted.emit((parent, first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about_to_be_removed and removed signals.
    pub fn emit_rows_removed<F>(&self, parent: ModelIndex, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed
            .emit((parent.clone(), first, last));
        remove_fn();
        self.rows_removed.emit((parent, first, last));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

/// The notification seam a flat model mutates through.
///
/// Each operation brackets `mutate` with a before/after notification so a
/// view never observes the model mid-change. [`ModelSignals`] is the
/// implementation views connect to; tests can record calls instead.
pub trait ViewNotifier: Send + Sync {
    /// Full structural reset around `mutate`.
    fn reset(&self, mutate: &mut dyn FnMut());

    /// Insertion of rows `first..=last` (positions after the insert) around `mutate`.
    fn insert_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut());

    /// Removal of rows `first..=last` (positions before the removal) around `mutate`.
    fn remove_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut());
}

impl ViewNotifier for ModelSignals {
    fn reset(&self, mutate: &mut dyn FnMut()) {
        self.emit_reset(mutate);
    }

    fn insert_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut()) {
        self.emit_rows_inserted(ModelIndex::invalid(), first, last, mutate);
    }

    fn remove_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut()) {
        self.emit_rows_removed(ModelIndex::invalid(), first, last, mutate);
    }
}
