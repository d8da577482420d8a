//! In-memory document model.
//!
//! A [`Document`] owns its pages, its page items (in stacking order), the
//! current item selection, and its color table. Geometry is stored in
//! points; [`Unit`] converts to the unit the user works in.
//!
//! # Example
//!
//! ```
//! use horizon_press::document::{Document, ItemKind, Page, PageItem, Unit};
//!
//! let mut doc = Document::new(Unit::Millimeters);
//! doc.add_page(Page::new(595.0, 842.0));
//! let index = doc.add_item(
//!     PageItem::new(ItemKind::TextFrame, "Headline")
//!         .on_page(0)
//!         .with_geometry(72.0, 72.0, 144.0, 36.0),
//! );
//!
//! assert_eq!(doc.item_by_name("Headline").map(|item| item.kind), Some(ItemKind::TextFrame));
//! assert!((doc.page_x(doc.items[index].x) - 25.4).abs() < 1e-9);
//! ```

mod color;
mod item;

pub use color::{ColorDef, ColorList, ColorModel, Hsv, Rgb};
pub use item::{
    ColorSpace, ImageData, ItemKind, LineCap, LineJoin, LineStyle, ObjectAttribute, PageItem,
    StoryText, StyledChar,
};

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use horizon_press_core::logging::targets;

/// A global counter for generating unique document IDs.
static DOCUMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies an open document.
///
/// Color list entries keep the ID of the document they were taken from so
/// views can resolve document-specific rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Allocates a fresh, process-unique ID.
    pub fn next() -> Self {
        Self(DOCUMENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::next()
    }
}

/// Measurement unit for values surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Points,
    Millimeters,
    Inches,
    Picas,
    Centimeters,
    Cicero,
}

impl Unit {
    /// Number of units per point.
    pub fn ratio(self) -> f64 {
        match self {
            Unit::Points => 1.0,
            Unit::Millimeters => 25.4 / 72.0,
            Unit::Inches => 1.0 / 72.0,
            Unit::Picas => 1.0 / 12.0,
            Unit::Centimeters => 2.54 / 72.0,
            Unit::Cicero => 25.4 / 72.0 / 4.512,
        }
    }

    /// Converts a length in points to this unit.
    pub fn from_points(self, points: f64) -> f64 {
        points * self.ratio()
    }
}

/// A page and its placement on the document canvas, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub x_offset: f64,
    #[serde(default)]
    pub y_offset: f64,
    pub width: f64,
    pub height: f64,
}

impl Page {
    /// Creates a page at the canvas origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            width,
            height,
        }
    }

    /// Places the page on the canvas.
    pub fn at(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }
}

/// An open document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip)]
    id: DocumentId,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    current_page: usize,
    /// Items in stacking order.
    #[serde(default)]
    pub items: Vec<PageItem>,
    /// Indices into `items`, in selection order.
    #[serde(default)]
    selection: Vec<usize>,
    #[serde(default)]
    colors: ColorList,
}

impl Document {
    /// Creates an empty document.
    pub fn new(unit: Unit) -> Self {
        let id = DocumentId::next();
        tracing::debug!(target: targets::DOCUMENT, id = id.get(), "document created");
        Self {
            id,
            unit,
            pages: Vec::new(),
            current_page: 0,
            items: Vec::new(),
            selection: Vec::new(),
            colors: ColorList::for_document(id),
        }
    }

    /// Returns this document's ID.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Pages
    // -------------------------------------------------------------------------

    /// Appends a page, returning its index.
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page the user is working on.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Changes the current page. Returns `false` if the index is out of range.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        if page >= self.pages.len() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Converts a length in points to the document unit.
    pub fn points_to_value(&self, points: f64) -> f64 {
        self.unit.from_points(points)
    }

    /// Converts a canvas x coordinate to the current page, in document units.
    pub fn page_x(&self, x: f64) -> f64 {
        let origin = self.pages.get(self.current_page).map_or(0.0, |p| p.x_offset);
        self.points_to_value(x - origin)
    }

    /// Converts a canvas y coordinate to the current page, in document units.
    pub fn page_y(&self, y: f64) -> f64 {
        let origin = self.pages.get(self.current_page).map_or(0.0, |p| p.y_offset);
        self.points_to_value(y - origin)
    }

    // -------------------------------------------------------------------------
    // Items and selection
    // -------------------------------------------------------------------------

    /// Appends an item on top of the stacking order, returning its index.
    pub fn add_item(&mut self, item: PageItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Finds an item by name.
    pub fn item_by_name(&self, name: &str) -> Option<&PageItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Finds an item by name for modification.
    pub fn item_by_name_mut(&mut self, name: &str) -> Option<&mut PageItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Adds the item at `index` to the selection.
    ///
    /// Returns `false` if there is no such item.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if !self.selection.contains(&index) {
            self.selection.push(index);
        }
        true
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Number of selected items.
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns the first selected item.
    pub fn first_selected(&self) -> Option<&PageItem> {
        self.selection.first().and_then(|&index| self.items.get(index))
    }

    // -------------------------------------------------------------------------
    // Colors
    // -------------------------------------------------------------------------

    /// The document's color table.
    pub fn colors(&self) -> &ColorList {
        &self.colors
    }

    /// The document's color table, for modification.
    pub fn colors_mut(&mut self) -> &mut ColorList {
        &mut self.colors
    }

    /// Re-establishes invariants after deserialization.
    ///
    /// Attaches the color table to this document and drops selection
    /// entries pointing past the item list.
    pub fn normalize(&mut self) {
        self.colors.set_document(Some(self.id));
        let count = self.items.len();
        self.selection.retain(|&index| index < count);
        if self.current_page >= self.pages.len() {
            self.current_page = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new(Unit::Points);
        doc.add_page(Page::new(600.0, 800.0));
        doc.add_page(Page::new(600.0, 800.0).at(0.0, 820.0));
        doc.add_item(PageItem::new(ItemKind::TextFrame, "Title").on_page(0));
        doc.add_item(PageItem::new(ItemKind::ImageFrame, "Photo").on_page(1));
        doc
    }

    #[test]
    fn test_unit_ratios() {
        assert_eq!(Unit::Points.from_points(72.0), 72.0);
        assert!((Unit::Inches.from_points(72.0) - 1.0).abs() < 1e-12);
        assert!((Unit::Millimeters.from_points(72.0) - 25.4).abs() < 1e-12);
        assert!((Unit::Picas.from_points(12.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_page_relative_coordinates() {
        let mut doc = sample();
        assert_eq!(doc.page_y(900.0), 900.0);
        assert!(doc.set_current_page(1));
        assert_eq!(doc.page_y(900.0), 80.0);
        assert!(!doc.set_current_page(2));
        assert_eq!(doc.current_page(), 1);
    }

    #[test]
    fn test_selection() {
        let mut doc = sample();
        assert!(doc.first_selected().is_none());
        assert!(doc.select(1));
        assert!(doc.select(0));
        assert!(!doc.select(7));
        assert_eq!(doc.selection_count(), 2);
        assert_eq!(doc.first_selected().map(|i| i.name.as_str()), Some("Photo"));
        doc.clear_selection();
        assert_eq!(doc.selection_count(), 0);
    }

    #[test]
    fn test_colors_belong_to_document() {
        let doc = sample();
        assert_eq!(doc.colors().document(), Some(doc.id()));
    }

    #[test]
    fn test_document_from_json() {
        let json = r#"{
            "unit": "Inches",
            "pages": [{ "width": 612.0, "height": 792.0 }],
            "items": [
                { "name": "Logo", "kind": "ImageFrame", "owner_page": 0, "x": 144.0 }
            ],
            "selection": [0, 4],
            "colors": {
                "Brand Blue": { "model": "rgb", "r": 0, "g": 84, "b": 166 }
            }
        }"#;

        let mut doc: Document = serde_json::from_str(json).expect("valid document");
        doc.normalize();

        assert_eq!(doc.selection_count(), 1);
        assert_eq!(doc.page_x(144.0), 2.0);
        assert_eq!(doc.colors().document(), Some(doc.id()));
        assert_eq!(
            doc.colors().get("Brand Blue"),
            Some(&ColorDef::rgb(0, 84, 166))
        );
        let logo = doc.item_by_name("Logo").expect("logo item");
        assert_eq!(logo.line_color, "Black");
        assert_eq!(logo.image.x_resolution, 72.0);
    }
}
