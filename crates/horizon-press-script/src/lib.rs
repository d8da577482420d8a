//! Horizon Press scripting bridge.
//!
//! Exposes page-item properties to Lua scripts. The accessors in
//! [`accessors`] are plain functions over a [`ScriptContext`]; [`bindings`]
//! registers them as Lua functions and [`ScriptHost`] ties an interpreter
//! to a context the application controls.
//!
//! # Example
//!
//! ```
//! use horizon_press::document::{Document, ItemKind, Page, PageItem, Unit};
//! use horizon_press_script::ScriptHost;
//!
//! let mut doc = Document::new(Unit::Points);
//! doc.add_page(Page::new(595.0, 842.0));
//! let mut frame = PageItem::new(ItemKind::TextFrame, "Intro")
//!     .on_page(0)
//!     .with_geometry(36.0, 48.0, 200.0, 100.0);
//! frame.rotation = 15.0;
//! doc.add_item(frame);
//!
//! let host = ScriptHost::new().unwrap();
//! host.open_document(doc);
//!
//! let (x, y, angle): (f64, f64, f64) = host
//!     .eval(r#"
//!         local x, y = press.getPosition("Intro")
//!         return x, y, press.getRotation("Intro")
//!     "#)
//!     .unwrap();
//! assert_eq!((x, y, angle), (36.0, 48.0, -15.0));
//! ```
//!
//! # Lua API
//!
//! All functions live in one global table, `press` by default. Each takes
//! an optional item name; without one the first selected item is used.
//!
//! | Function | Returns |
//! |----------|---------|
//! | `getObjectType` | type tag such as `"TextFrame"`, or `""` |
//! | `getFillColor`, `getLineColor`, `getCustomLineStyle`, `getImageFile` | string |
//! | `getFillTransparency`, `getLineTransparency` | opacity in `[0, 1]` |
//! | `getFillShade`, `getLineShade`, `getFillBlendmode`, `getLineBlendmode` | integer |
//! | `getLineWidth`, `getRotation` | number |
//! | `getLineJoin`, `getLineEnd`, `getLineStyle`, `getCornerRadius` | integer |
//! | `getPosition`, `getSize`, `getImageScale` | two numbers |
//! | `getAllObjects(type?, page?)` or `getAllObjects{type=, page=}` | sequence of names |
//! | `getObjectAttributes` | sequence of attribute tables |
//! | `getImageColorSpace` | colorspace id, or `-1` without image data |
//!
//! Failures raise Lua errors whose message starts with `NoDocOpenError`,
//! `NoValidObjectError`, `NotFoundError`, `WrongFrameTypeError` or
//! `RuntimeError`.

pub mod accessors;
pub mod bindings;
mod config;
mod context;
mod error;
mod host;

pub use config::{DEFAULT_TABLE_NAME, SANDBOXED_GLOBALS, ScriptHostConfig};
pub use context::ScriptContext;
pub use error::{ConfigError, ErrorKind, Result, ScriptError};
pub use host::ScriptHost;
