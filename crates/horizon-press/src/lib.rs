//! Horizon Press - document model and model/view layer.
//!
//! This crate holds the in-memory document graph read by the scripting
//! bridge and the list models that project parts of it into views.
//!
//! # Example
//!
//! ```
//! use horizon_press::document::{ColorDef, ColorList};
//! use horizon_press::model::{ColorListModel, ItemModel, ModelIndex, SortRule};
//!
//! let mut colors = ColorList::new();
//! colors.insert("Warm Red", ColorDef::rgb(255, 43, 0));
//! colors.insert("Ocean", ColorDef::rgb(0, 170, 255));
//!
//! let model = ColorListModel::new();
//! model.set_sort_rule(SortRule::ByValue);
//! model.set_color_list_with_none(&colors, true);
//!
//! let first = model.index(0, 0, &ModelIndex::invalid());
//! assert_eq!(model.display_text(&first).as_deref(), Some("None"));
//! ```

pub mod document;
pub mod model;

pub use horizon_press_core::{logging, ConnectionGuard, ConnectionId, Signal};
