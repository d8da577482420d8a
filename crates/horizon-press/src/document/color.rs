//! Color definitions and the per-document color table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DocumentId;

/// The channel model a color is defined in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ColorModel {
    /// RGB with 8-bit channels.
    Rgb { r: u8, g: u8, b: u8 },
    /// CMYK with channels on a 0-255 scale.
    Cmyk { c: u8, m: u8, y: u8, k: u8 },
    /// CIE L*a*b*.
    Lab { l: f64, a: f64, b: f64 },
}

/// A named color's definition in a document palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDef {
    /// Channel model and values.
    #[serde(flatten)]
    pub model: ColorModel,
    /// Printed as a separate spot plate.
    #[serde(default)]
    pub spot: bool,
    /// Prints on every separation (crop and registration marks).
    #[serde(default)]
    pub registration: bool,
}

impl Default for ColorDef {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl ColorDef {
    /// Creates an RGB process color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            model: ColorModel::Rgb { r, g, b },
            spot: false,
            registration: false,
        }
    }

    /// Creates a CMYK process color with channels on a 0-255 scale.
    pub fn cmyk(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            model: ColorModel::Cmyk { c, m, y, k },
            spot: false,
            registration: false,
        }
    }

    /// Creates a L*a*b* color.
    pub fn lab(l: f64, a: f64, b: f64) -> Self {
        Self {
            model: ColorModel::Lab { l, a, b },
            spot: false,
            registration: false,
        }
    }

    /// Marks the color as a spot color.
    pub fn with_spot(mut self, spot: bool) -> Self {
        self.spot = spot;
        self
    }

    /// Marks the color as the registration color.
    pub fn with_registration(mut self, registration: bool) -> Self {
        self.registration = registration;
        self
    }

    /// Returns `true` for CMYK-defined colors.
    pub fn is_cmyk(&self) -> bool {
        matches!(self.model, ColorModel::Cmyk { .. })
    }

    /// Projects the color into RGB without any color management.
    ///
    /// CMYK channels are folded with black (`255 - min(255, c + k)`), L*a*b*
    /// goes through XYZ (D65) into gamma-encoded sRGB.
    pub fn raw_rgb(&self) -> Rgb {
        match self.model {
            ColorModel::Rgb { r, g, b } => Rgb { r, g, b },
            ColorModel::Cmyk { c, m, y, k } => {
                let fold = |v: u8| 255 - (u16::from(v) + u16::from(k)).min(255) as u8;
                Rgb {
                    r: fold(c),
                    g: fold(m),
                    b: fold(y),
                }
            }
            ColorModel::Lab { l, a, b } => lab_to_rgb(l, a, b),
        }
    }
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSV as used for palette ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue in degrees, 0-359, or -1 for achromatic colors.
    pub hue: i32,
    /// Saturation, 0-255.
    pub saturation: i32,
    /// Value, 0-255.
    pub value: i32,
}

impl Rgb {
    /// Converts to integer HSV.
    pub fn to_hsv(self) -> Hsv {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let value = max as i32;
        if delta == 0.0 {
            return Hsv {
                hue: -1,
                saturation: 0,
                value,
            };
        }

        // Hue is held in hundredths of a degree and truncated on the way
        // out; saturation is held in 16 bits and shifted down to 8.
        let saturation = ((delta / max) * 65535.0).round() as i32 >> 8;
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let mut degrees = sector * 60.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }
        let hue = (degrees * 100.0).round() as i32 / 100 % 360;

        Hsv {
            hue,
            saturation,
            value,
        }
    }
}

fn lab_to_rgb(l: f64, a: f64, b: f64) -> Rgb {
    // D65 reference white
    const XN: f64 = 0.950_47;
    const YN: f64 = 1.0;
    const ZN: f64 = 1.088_83;
    const EPSILON: f64 = 6.0 / 29.0;

    let finv = |t: f64| {
        if t > EPSILON {
            t * t * t
        } else {
            3.0 * EPSILON * EPSILON * (t - 4.0 / 29.0)
        }
    };

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = XN * finv(fx);
    let y = YN * finv(fy);
    let z = ZN * finv(fz);

    let linear = [
        3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z,
        -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z,
        0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z,
    ];

    let encode = |c: f64| {
        let c = c.clamp(0.0, 1.0);
        let v = if c <= 0.003_130_8 {
            12.92 * c
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: encode(linear[0]),
        g: encode(linear[1]),
        b: encode(linear[2]),
    }
}

/// A document's named color table.
///
/// Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorList {
    #[serde(skip)]
    document: Option<DocumentId>,
    #[serde(flatten)]
    colors: BTreeMap<String, ColorDef>,
}

impl ColorList {
    /// Creates an empty table not attached to any document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table owned by the given document.
    pub fn for_document(document: DocumentId) -> Self {
        Self {
            document: Some(document),
            colors: BTreeMap::new(),
        }
    }

    /// Returns the owning document, if any.
    pub fn document(&self) -> Option<DocumentId> {
        self.document
    }

    /// Attaches the table to a document.
    pub fn set_document(&mut self, document: Option<DocumentId>) {
        self.document = document;
    }

    /// Inserts or replaces a color, returning the previous definition.
    pub fn insert(&mut self, name: impl Into<String>, color: ColorDef) -> Option<ColorDef> {
        self.colors.insert(name.into(), color)
    }

    /// Removes a color by name.
    pub fn remove(&mut self, name: &str) -> Option<ColorDef> {
        self.colors.remove(name)
    }

    /// Looks up a color by name.
    pub fn get(&self, name: &str) -> Option<&ColorDef> {
        self.colors.get(name)
    }

    /// Returns `true` if a color with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Number of colors in the table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(name, definition)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorDef)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }
}
