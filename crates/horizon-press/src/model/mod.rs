//! Model/view layer.
//!
//! Models expose rows of data to list widgets through the [`ItemModel`]
//! trait and announce structural changes through [`ModelSignals`]. The
//! [`ColorListModel`] projects a document color table, sorted by name,
//! value or type, optionally led by a "no color" row.
//!
//! # Core Components
//!
//! - [`ModelIndex`]: Addresses an item within a model
//! - [`ItemRole`]: Kind of data requested (display, tooltip, ...)
//! - [`ItemData`]: Type-erased container for returned data
//! - [`ItemModel`]: The contract views consume
//! - [`ViewNotifier`]: Before/after notification around a mutation

mod color_list_model;
mod index;
mod role;
mod traits;

pub use color_list_model::{
    COLOR_VALUE_ROLE, ColorEntry, ColorListModel, EntryKind, NONE_COLOR_NAME, SortRule,
};
pub use index::ModelIndex;
pub use role::{ItemData, ItemRole};
pub use traits::{ItemFlags, ItemModel, ModelSignals, ViewNotifier};
