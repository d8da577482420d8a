//! Page items and the properties the scripting bridge reads from them.

use serde::{Deserialize, Serialize};

/// The kind of a page item.
///
/// Each kind has a stable integer code shared with scripts, which filter
/// item listings by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    ImageFrame,
    TextFrame,
    Line,
    Polygon,
    PolyLine,
    PathText,
    LatexFrame,
    OsgFrame,
    Symbol,
    Group,
    RegularPolygon,
    Arc,
    Spiral,
    Table,
    NoteFrame,
    /// A multi-item selection acting as one item.
    Multiple,
}

impl ItemKind {
    /// Returns the integer code of this kind.
    pub fn code(self) -> i32 {
        match self {
            ItemKind::ImageFrame => 2,
            ItemKind::TextFrame => 4,
            ItemKind::Line => 5,
            ItemKind::Polygon => 6,
            ItemKind::PolyLine => 7,
            ItemKind::PathText => 8,
            ItemKind::LatexFrame => 9,
            ItemKind::OsgFrame => 10,
            ItemKind::Symbol => 11,
            ItemKind::Group => 12,
            ItemKind::RegularPolygon => 13,
            ItemKind::Arc => 14,
            ItemKind::Spiral => 15,
            ItemKind::Table => 16,
            ItemKind::NoteFrame => 17,
            ItemKind::Multiple => 99,
        }
    }

    /// Creates a kind from its integer code.
    ///
    /// Returns `None` for codes that name no kind.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            2 => Some(ItemKind::ImageFrame),
            4 => Some(ItemKind::TextFrame),
            5 => Some(ItemKind::Line),
            6 => Some(ItemKind::Polygon),
            7 => Some(ItemKind::PolyLine),
            8 => Some(ItemKind::PathText),
            9 => Some(ItemKind::LatexFrame),
            10 => Some(ItemKind::OsgFrame),
            11 => Some(ItemKind::Symbol),
            12 => Some(ItemKind::Group),
            13 => Some(ItemKind::RegularPolygon),
            14 => Some(ItemKind::Arc),
            15 => Some(ItemKind::Spiral),
            16 => Some(ItemKind::Table),
            17 => Some(ItemKind::NoteFrame),
            99 => Some(ItemKind::Multiple),
            _ => None,
        }
    }

    /// Returns `true` for kinds that carry story text.
    pub fn carries_text(self) -> bool {
        matches!(self, ItemKind::TextFrame | ItemKind::PathText)
    }
}

/// How two stroked segments are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

impl LineJoin {
    /// Returns the integer code of this join.
    pub fn code(self) -> i32 {
        match self {
            LineJoin::Miter => 0x00,
            LineJoin::Bevel => 0x40,
            LineJoin::Round => 0x80,
        }
    }
}

/// How the open ends of a stroke are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Flat,
    Square,
    Round,
}

impl LineCap {
    /// Returns the integer code of this cap.
    pub fn code(self) -> i32 {
        match self {
            LineCap::Flat => 0x00,
            LineCap::Square => 0x10,
            LineCap::Round => 0x20,
        }
    }
}

/// The dash pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    NoPen,
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl LineStyle {
    /// Returns the integer code of this style.
    pub fn code(self) -> i32 {
        match self {
            LineStyle::NoPen => 0,
            LineStyle::Solid => 1,
            LineStyle::Dash => 2,
            LineStyle::Dot => 3,
            LineStyle::DashDot => 4,
            LineStyle::DashDotDot => 5,
        }
    }
}

/// The channel model of a placed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Cmyk,
    Gray,
    Duotone,
    Monochrome,
}

impl ColorSpace {
    /// Returns the colorspace id (0=RGB, 1=CMYK, 2=Gray, 3=Duotone, 4=Monochrome).
    pub fn id(self) -> i32 {
        match self {
            ColorSpace::Rgb => 0,
            ColorSpace::Cmyk => 1,
            ColorSpace::Gray => 2,
            ColorSpace::Duotone => 3,
            ColorSpace::Monochrome => 4,
        }
    }
}

/// The image placed in a frame, along with its source metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    /// Path of the source file, empty if no image is loaded.
    pub file: String,
    /// Horizontal scale in page units.
    pub x_scale: f64,
    /// Vertical scale in page units.
    pub y_scale: f64,
    /// Horizontal source resolution in DPI.
    pub x_resolution: f64,
    /// Vertical source resolution in DPI.
    pub y_resolution: f64,
    /// Loaded image width in pixels.
    pub pixel_width: u32,
    /// Loaded image height in pixels.
    pub pixel_height: u32,
    /// Channel model of the source.
    pub colorspace: ColorSpace,
}

impl Default for ImageData {
    fn default() -> Self {
        Self {
            file: String::new(),
            x_scale: 1.0,
            y_scale: 1.0,
            x_resolution: 72.0,
            y_resolution: 72.0,
            pixel_width: 0,
            pixel_height: 0,
            colorspace: ColorSpace::Rgb,
        }
    }
}

impl ImageData {
    /// Returns `true` when no pixels are loaded.
    pub fn is_empty(&self) -> bool {
        self.pixel_width == 0 || self.pixel_height == 0
    }
}

/// One character of story text and its character style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledChar {
    pub ch: char,
    pub fill_color: String,
    pub fill_shade: i32,
    #[serde(default)]
    pub selected: bool,
}

/// The text carried by a text frame or path text item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryText {
    chars: Vec<StyledChar>,
}

impl StoryText {
    /// Creates a story with every character in the same style.
    pub fn styled(text: &str, fill_color: &str, fill_shade: i32) -> Self {
        Self {
            chars: text
                .chars()
                .map(|ch| StyledChar {
                    ch,
                    fill_color: fill_color.to_string(),
                    fill_shade,
                    selected: false,
                })
                .collect(),
        }
    }

    /// Appends one styled character.
    pub fn push(&mut self, ch: StyledChar) {
        self.chars.push(ch);
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the story is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `pos`.
    pub fn char_at(&self, pos: usize) -> Option<&StyledChar> {
        self.chars.get(pos)
    }

    /// Flags the characters in `range` as selected, clearing all others.
    pub fn select(&mut self, range: std::ops::Range<usize>) {
        for (pos, ch) in self.chars.iter_mut().enumerate() {
            ch.selected = range.contains(&pos);
        }
    }

    /// Returns the first character flagged as selected.
    pub fn first_selected(&self) -> Option<&StyledChar> {
        self.chars.iter().find(|ch| ch.selected)
    }
}

/// A user-defined attribute attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectAttribute {
    pub name: String,
    pub kind: String,
    pub value: String,
    pub parameter: String,
    pub relationship: String,
    pub relationship_to: String,
    pub auto_add_to: String,
}

/// A placeable element on a document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItem {
    pub name: String,
    pub kind: ItemKind,
    /// Index of the page the item sits on, `None` for pasteboard items.
    #[serde(default)]
    pub owner_page: Option<usize>,

    // Geometry in points, rotation in degrees clockwise.
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,

    #[serde(default = "defaults::fill_color")]
    pub fill_color: String,
    #[serde(default = "defaults::shade")]
    pub fill_shade: i32,
    /// Stored as the complement of opacity.
    #[serde(default)]
    pub fill_transparency: f64,
    #[serde(default)]
    pub fill_blend_mode: i32,

    #[serde(default = "defaults::line_color")]
    pub line_color: String,
    #[serde(default = "defaults::shade")]
    pub line_shade: i32,
    /// Stored as the complement of opacity.
    #[serde(default)]
    pub line_transparency: f64,
    #[serde(default)]
    pub line_blend_mode: i32,
    #[serde(default = "defaults::line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_join: LineJoin,
    #[serde(default)]
    pub line_cap: LineCap,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub custom_line_style: String,
    #[serde(default)]
    pub corner_radius: f64,

    #[serde(default)]
    pub image: ImageData,
    #[serde(default)]
    pub text: StoryText,
    /// Set while the item is in text edit mode with a non-empty selection.
    #[serde(default)]
    pub has_text_selection: bool,
    #[serde(default)]
    pub attributes: Vec<ObjectAttribute>,
}

mod defaults {
    pub fn fill_color() -> String {
        "None".to_string()
    }

    pub fn line_color() -> String {
        "Black".to_string()
    }

    pub fn shade() -> i32 {
        100
    }

    pub fn line_width() -> f64 {
        1.0
    }
}

impl PageItem {
    /// Creates an item of the given kind with default styling.
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            owner_page: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            fill_color: defaults::fill_color(),
            fill_shade: defaults::shade(),
            fill_transparency: 0.0,
            fill_blend_mode: 0,
            line_color: defaults::line_color(),
            line_shade: defaults::shade(),
            line_transparency: 0.0,
            line_blend_mode: 0,
            line_width: defaults::line_width(),
            line_join: LineJoin::default(),
            line_cap: LineCap::default(),
            line_style: LineStyle::default(),
            custom_line_style: String::new(),
            corner_radius: 0.0,
            image: ImageData::default(),
            text: StoryText::default(),
            has_text_selection: false,
            attributes: Vec::new(),
        }
    }

    /// Places the item on a page.
    pub fn on_page(mut self, page: usize) -> Self {
        self.owner_page = Some(page);
        self
    }

    /// Sets position and size in points.
    pub fn with_geometry(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for code in -1..=100 {
            if let Some(kind) = ItemKind::from_code(code) {
                assert_eq!(kind.code(), code);
            }
        }
        assert_eq!(ItemKind::from_code(3), None);
        assert_eq!(ItemKind::from_code(99), Some(ItemKind::Multiple));
    }

    #[test]
    fn test_story_selection() {
        let mut text = StoryText::styled("Hello", "Black", 100);
        assert!(text.first_selected().is_none());

        text.select(2..4);
        let first = text.first_selected().map(|c| c.ch);
        assert_eq!(first, Some('l'));
        assert!(!text.char_at(4).map(|c| c.selected).unwrap_or(true));
    }

    #[test]
    fn test_empty_image() {
        let mut image = ImageData::default();
        assert!(image.is_empty());
        image.pixel_width = 10;
        assert!(image.is_empty());
        image.pixel_height = 10;
        assert!(!image.is_empty());
    }
}
