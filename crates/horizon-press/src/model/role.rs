//! Data roles for item models.
//!
//! Roles define what kind of data is being requested from a model item.
//! Each item can answer several roles: a color row has a display name, a
//! tooltip describing its channels, and the raw color value for delegates.

use std::any::Any;
use std::sync::Arc;

/// Standard roles for accessing different aspects of item data.
///
/// # Example
///
/// ```ignore
/// use horizon_press::model::{ItemModel, ModelIndex, ItemRole};
///
/// // Get display text
/// let text = model.data(&index, ItemRole::Display);
///
/// // Get custom data
/// let custom = model.data(&index, ItemRole::User(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display. Should return `String`.
    Display,
    /// Icon or decoration to show.
    Decoration,
    /// Value for editing (may be richer than display text).
    Edit,
    /// Tooltip text shown on hover. Should return `String`.
    ToolTip,
    /// Text shown in the status bar when the item is hovered.
    StatusTip,
    /// Extended "What's This?" help text.
    WhatsThis,
    /// Application-specific data. Use `ItemRole::User(n)` where n >= 0.
    User(u32),
}

/// Type-erased container for item data.
///
/// Custom payloads are reference counted, so cloning an `ItemData` never
/// loses information.
#[derive(Debug, Clone, Default)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data (for Display, ToolTip, etc.).
    String(String),
    /// Custom data (type-erased).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl ItemData {
    /// Creates new custom data from any type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        ItemData::Custom(Arc::new(value))
    }

    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to downcast custom data to the specified type.
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            ItemData::Custom(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<Option<String>> for ItemData {
    fn from(opt: Option<String>) -> Self {
        opt.map_or(ItemData::None, ItemData::String)
    }
}
