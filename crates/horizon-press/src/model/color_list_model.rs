//! List model projecting a document color table into views.
//!
//! `ColorListModel` keeps its own copy of a [`ColorList`], taken when the
//! table is set, ordered by one of three [`SortRule`]s, and optionally
//! preceded by a "no color" row. Every structural change goes through a
//! [`ViewNotifier`], so views see a reset pair for bulk changes and
//! row-scoped pairs for single insertions and removals.
//!
//! # Example
//!
//! ```
//! use horizon_press::document::{ColorDef, ColorList};
//! use horizon_press::model::{ColorListModel, ItemModel, ModelIndex, SortRule};
//!
//! let mut colors = ColorList::new();
//! colors.insert("Process Cyan", ColorDef::cmyk(255, 0, 0, 0));
//! colors.insert("Registration", ColorDef::cmyk(255, 255, 255, 255).with_registration(true));
//!
//! let model = ColorListModel::new();
//! model.set_sort_rule(SortRule::ByType);
//! model.set_color_list(&colors);
//!
//! let first = model.index(0, 0, &ModelIndex::invalid());
//! assert_eq!(model.display_text(&first).as_deref(), Some("Registration"));
//! assert_eq!(model.tooltip(&first).as_deref(), Some("C: 100% M: 100% Y: 100% K: 100%"));
//! ```

use parking_lot::RwLock;

use horizon_press_core::logging::{span_names, targets};

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, ModelSignals, ViewNotifier};
use crate::document::{ColorDef, ColorList, ColorModel, DocumentId};

/// Name shown for, and value returned by, the "no color" row.
pub const NONE_COLOR_NAME: &str = "None";

/// Role returning the raw color value of a row.
///
/// Yields the row's [`ColorEntry`] as custom data, or the string
/// [`NONE_COLOR_NAME`] for the "no color" row.
pub const COLOR_VALUE_ROLE: ItemRole = ItemRole::User(0);

/// Ordering applied to the rows of a [`ColorListModel`].
///
/// The "no color" row sorts first under every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortRule {
    /// By color name.
    #[default]
    ByName,
    /// By hue, then saturation, then value of the RGB projection, then name.
    ByValue,
    /// Registration, then spot, then CMYK process, then everything else;
    /// by name within each group.
    ByType,
}

/// What a row stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// The synthetic "no color" row.
    NoColor,
    /// A color from the table.
    Color(ColorDef),
}

/// One row of a [`ColorListModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    kind: EntryKind,
    document: Option<DocumentId>,
    name: String,
}

impl ColorEntry {
    /// Creates a row for a named color of a document.
    pub fn new(name: impl Into<String>, color: ColorDef, document: Option<DocumentId>) -> Self {
        Self {
            kind: EntryKind::Color(color),
            document,
            name: name.into(),
        }
    }

    /// Creates the "no color" row.
    pub fn none_color() -> Self {
        Self {
            kind: EntryKind::NoColor,
            document: None,
            name: NONE_COLOR_NAME.to_string(),
        }
    }

    /// Returns `true` for the "no color" row.
    pub fn is_none_color(&self) -> bool {
        matches!(self.kind, EntryKind::NoColor)
    }

    /// The row kind.
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// The color definition, `None` for the "no color" row.
    pub fn color(&self) -> Option<&ColorDef> {
        match &self.kind {
            EntryKind::Color(color) => Some(color),
            EntryKind::NoColor => None,
        }
    }

    /// The document the color was taken from, for rendering context.
    pub fn document(&self) -> Option<DocumentId> {
        self.document
    }

    /// The color name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Describes the color's channels in its own color model.
    pub fn tooltip(&self) -> Option<String> {
        self.color().map(describe_channels)
    }

    fn sort_key(&self, rule: SortRule) -> (bool, String) {
        let color = match &self.kind {
            EntryKind::NoColor => return (false, String::new()),
            EntryKind::Color(color) => color,
        };

        let key = match rule {
            SortRule::ByName => self.name.clone(),
            SortRule::ByValue => {
                let hsv = color.raw_rgb().to_hsv();
                format!(
                    "{:03}-{:03}-{:03}-{}",
                    hsv.hue, hsv.saturation, hsv.value, self.name
                )
            }
            SortRule::ByType => {
                let group = if color.registration {
                    'A'
                } else if color.spot {
                    'B'
                } else if color.is_cmyk() {
                    'C'
                } else {
                    'D'
                };
                format!("{group}-{}", self.name)
            }
        };
        (true, key)
    }
}

fn describe_channels(color: &ColorDef) -> String {
    match color.model {
        ColorModel::Rgb { r, g, b } => format!("R: {r} G: {g} B: {b}"),
        ColorModel::Cmyk { c, m, y, k } => {
            let percent = |v: u8| (f64::from(v) / 2.55).round() as i32;
            format!(
                "C: {}% M: {}% Y: {}% K: {}%",
                percent(c),
                percent(m),
                percent(y),
                percent(k)
            )
        }
        ColorModel::Lab { l, a, b } => format!("L: {l:.2}% a: {a:.2}% b: {b:.2}%"),
    }
}

fn sort_entries(entries: &mut [ColorEntry], rule: SortRule) {
    entries.sort_by_cached_key(|entry| entry.sort_key(rule));
}

struct ColorListState {
    entries: Vec<ColorEntry>,
    show_none: bool,
    sort_rule: SortRule,
}

/// A single-column list model over a document's colors.
///
/// The type parameter selects how structural changes are announced. The
/// default, [`ModelSignals`], makes the model a full [`ItemModel`] that
/// views can connect to.
pub struct ColorListModel<N: ViewNotifier = ModelSignals> {
    state: RwLock<ColorListState>,
    notifier: N,
}

impl ColorListModel {
    /// Creates an empty model sorted by name, without the "no color" row.
    pub fn new() -> Self {
        Self::with_notifier(ModelSignals::new())
    }
}

impl Default for ColorListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ViewNotifier> ColorListModel<N> {
    /// Creates an empty model announcing changes through `notifier`.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            state: RwLock::new(ColorListState {
                entries: Vec::new(),
                show_none: false,
                sort_rule: SortRule::default(),
            }),
            notifier,
        }
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    /// Returns `true` if the model has no rows.
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Returns `true` if the "no color" row is requested.
    pub fn is_none_color_shown(&self) -> bool {
        self.state.read().show_none
    }

    /// Returns the current sort rule.
    pub fn sort_rule(&self) -> SortRule {
        self.state.read().sort_rule
    }

    /// Returns a copy of the rows in display order.
    pub fn entries(&self) -> Vec<ColorEntry> {
        self.state.read().entries.clone()
    }

    /// Returns a copy of the row at `row`.
    pub fn entry(&self, row: usize) -> Option<ColorEntry> {
        self.state.read().entries.get(row).cloned()
    }

    /// Removes all rows, including the "no color" row, and turns the
    /// "no color" setting off.
    pub fn clear(&self) {
        let _span = tracing::debug_span!(target: targets::MODEL, span_names::MODEL_CHANGE).entered();
        tracing::debug!(target: targets::MODEL, "clearing color list");
        self.notifier.reset(&mut || {
            let mut state = self.state.write();
            state.entries.clear();
            state.show_none = false;
        });
    }

    /// Replaces the rows with `colors`, keeping the "no color" setting.
    pub fn set_color_list(&self, colors: &ColorList) {
        let show_none = self.is_none_color_shown();
        self.set_color_list_with_none(colors, show_none);
    }

    /// Replaces the rows with `colors` and sets whether the "no color" row
    /// is shown.
    ///
    /// The table is copied; later edits to `colors` are not reflected until
    /// the next call.
    pub fn set_color_list_with_none(&self, colors: &ColorList, show_none: bool) {
        let _span = tracing::debug_span!(target: targets::MODEL, span_names::MODEL_CHANGE).entered();

        let document = colors.document();
        let mut entries = Vec::with_capacity(colors.len() + usize::from(show_none));
        if show_none {
            entries.push(ColorEntry::none_color());
        }
        entries.extend(
            colors
                .iter()
                .map(|(name, color)| ColorEntry::new(name, color.clone(), document)),
        );

        tracing::debug!(
            target: targets::MODEL,
            colors = colors.len(),
            show_none,
            "replacing color list"
        );

        self.notifier.reset(&mut || {
            let mut state = self.state.write();
            state.show_none = show_none;
            sort_entries(&mut entries, state.sort_rule);
            state.entries = std::mem::take(&mut entries);
        });
    }

    /// Shows or hides the "no color" row.
    ///
    /// Does nothing if the setting is unchanged; otherwise the row is added
    /// or removed inside a reset.
    pub fn set_show_none_color(&self, show_none: bool) {
        if self.state.read().show_none == show_none {
            return;
        }

        tracing::debug!(target: targets::MODEL, show_none, "toggling no-color row");
        self.notifier.reset(&mut || {
            let mut state = self.state.write();
            state.show_none = show_none;
            if show_none {
                state.entries.insert(0, ColorEntry::none_color());
            } else {
                state.entries.retain(|entry| !entry.is_none_color());
            }
        });
    }

    /// Changes the sort rule and reorders the rows.
    ///
    /// Does nothing if the rule is unchanged.
    pub fn set_sort_rule(&self, sort_rule: SortRule) {
        if self.state.read().sort_rule == sort_rule {
            return;
        }

        tracing::debug!(target: targets::MODEL, ?sort_rule, "re-sorting color list");
        self.notifier.reset(&mut || {
            let mut state = self.state.write();
            state.sort_rule = sort_rule;
            sort_entries(&mut state.entries, sort_rule);
        });
    }

    /// Inserts one row at `row`.
    ///
    /// Returns `false` without notifying if `row` is past the end or
    /// `entry` is the "no color" row, which only
    /// [`set_show_none_color`](Self::set_show_none_color) adds.
    pub fn insert(&self, row: usize, entry: ColorEntry) -> bool {
        if entry.is_none_color() || row > self.len() {
            return false;
        }

        tracing::debug!(target: targets::MODEL, row, name = entry.name(), "inserting color row");
        let mut entry = Some(entry);
        self.notifier.insert_rows(row, row, &mut || {
            if let Some(entry) = entry.take() {
                self.state.write().entries.insert(row, entry);
            }
        });
        true
    }

    /// Removes the row at `row`.
    ///
    /// Returns `false` without notifying if `row` is out of range.
    pub fn remove_row(&self, row: usize) -> bool {
        self.remove_rows(row, 1)
    }

    /// Removes `count` rows starting at `row`.
    ///
    /// Returns `false` without notifying if `count` is zero, the range
    /// does not fit inside the model, or the range covers the "no color"
    /// row.
    pub fn remove_rows(&self, row: usize, count: usize) -> bool {
        {
            let state = self.state.read();
            let len = state.entries.len();
            if count == 0 || row >= len || count > len - row {
                return false;
            }
            if state.entries[row..row + count]
                .iter()
                .any(ColorEntry::is_none_color)
            {
                return false;
            }
        }

        let last = row + count - 1;
        tracing::debug!(target: targets::MODEL, first = row, last, "removing color rows");
        self.notifier.remove_rows(row, last, &mut || {
            self.state.write().entries.drain(row..=last);
        });
        true
    }

    /// Returns the data for `role` on the row at `row`.
    pub fn row_data(&self, row: usize, role: ItemRole) -> ItemData {
        let state = self.state.read();
        let Some(entry) = state.entries.get(row) else {
            return ItemData::None;
        };

        match role {
            ItemRole::Display => ItemData::from(entry.name()),
            ItemRole::ToolTip => ItemData::from(entry.tooltip()),
            COLOR_VALUE_ROLE => {
                if entry.is_none_color() {
                    ItemData::from(NONE_COLOR_NAME)
                } else {
                    ItemData::new(entry.clone())
                }
            }
            _ => ItemData::None,
        }
    }
}

impl ItemModel for ColorListModel<ModelSignals> {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() {
            0 // Flat list has no children
        } else {
            self.len()
        }
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        1
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || index.has_parent() || index.column() != 0 {
            return ItemData::None;
        }
        self.row_data(index.row(), role)
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if parent.is_valid() || column > 0 || row >= self.len() {
            return ModelIndex::invalid();
        }
        ModelIndex::with_internal_id(row, column, ModelIndex::invalid(), row as u64)
    }

    fn parent(&self, _index: &ModelIndex) -> ModelIndex {
        ModelIndex::invalid() // Flat list has no parents
    }

    fn signals(&self) -> &ModelSignals {
        &self.notifier
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if !index.is_valid() || index.row() >= self.len() {
            return ItemFlags::disabled();
        }
        ItemFlags::new()
    }
}
