//! Property accessors over a [`ScriptContext`].
//!
//! Every accessor first checks that a document is open, then resolves its
//! target item (see [`ScriptContext::resolve_item`]) and returns one value.
//! They hold no state and never modify the document; the Lua bindings in
//! [`crate::bindings`] are thin wrappers around these functions.

use horizon_press::document::{ItemKind, ObjectAttribute, PageItem};

use crate::context::ScriptContext;
use crate::error::{Result, ScriptError};

/// Type-filter value meaning "any kind" in [`all_objects`].
pub const ANY_KIND: i32 = -1;

fn item<'a>(ctx: &'a ScriptContext, name: Option<&str>) -> Result<&'a PageItem> {
    ctx.resolve_item(name)
}

/// Returns the type tag of the item, or `""` for kinds without a tag.
pub fn object_type(ctx: &ScriptContext, name: Option<&str>) -> Result<&'static str> {
    Ok(match item(ctx, name)?.kind {
        ItemKind::TextFrame => "TextFrame",
        ItemKind::PathText => "PathText",
        ItemKind::ImageFrame => "ImageFrame",
        ItemKind::Line => "Line",
        ItemKind::Polygon => "Polygon",
        ItemKind::PolyLine => "Polyline",
        ItemKind::LatexFrame => "LatexFrame",
        ItemKind::Multiple => "Multiple",
        _ => "",
    })
}

/// Returns the fill color name.
pub fn fill_color(ctx: &ScriptContext, name: Option<&str>) -> Result<String> {
    Ok(item(ctx, name)?.fill_color.clone())
}

/// Returns the fill opacity.
pub fn fill_transparency(ctx: &ScriptContext, name: Option<&str>) -> Result<f64> {
    Ok(1.0 - item(ctx, name)?.fill_transparency)
}

/// Returns the fill blend mode id.
pub fn fill_blend_mode(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.fill_blend_mode)
}

/// Returns the fill shade, 0-100.
pub fn fill_shade(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.fill_shade)
}

/// Returns the name of the custom line style, or `""`.
pub fn custom_line_style(ctx: &ScriptContext, name: Option<&str>) -> Result<String> {
    Ok(item(ctx, name)?.custom_line_style.clone())
}

/// Returns the line color.
///
/// While a text item has an active text selection the fill color of the
/// first selected character is returned instead; if no character is
/// flagged selected the call fails with a not-found error.
pub fn line_color(ctx: &ScriptContext, name: Option<&str>) -> Result<String> {
    let item = item(ctx, name)?;
    if item.has_text_selection && item.kind.carries_text() {
        return item
            .text
            .first_selected()
            .map(|ch| ch.fill_color.clone())
            .ok_or_else(|| ScriptError::not_found("Color not found"));
    }
    Ok(item.line_color.clone())
}

/// Returns the line opacity.
pub fn line_transparency(ctx: &ScriptContext, name: Option<&str>) -> Result<f64> {
    Ok(1.0 - item(ctx, name)?.line_transparency)
}

/// Returns the line blend mode id.
pub fn line_blend_mode(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.line_blend_mode)
}

/// Returns the line width in points.
pub fn line_width(ctx: &ScriptContext, name: Option<&str>) -> Result<f64> {
    Ok(item(ctx, name)?.line_width)
}

/// Returns the line shade.
///
/// Follows the same text-selection precedence as [`line_color`], but
/// yields `0` instead of failing when no character is flagged selected.
pub fn line_shade(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    let item = item(ctx, name)?;
    if item.has_text_selection && item.kind.carries_text() {
        return Ok(item.text.first_selected().map_or(0, |ch| ch.fill_shade));
    }
    Ok(item.line_shade)
}

/// Returns the line join code.
pub fn line_join(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.line_join.code())
}

/// Returns the line end (cap) code.
pub fn line_cap(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.line_cap.code())
}

/// Returns the line dash style code.
pub fn line_style(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    Ok(item(ctx, name)?.line_style.code())
}

/// Returns the corner radius, truncated toward zero.
pub fn corner_radius(ctx: &ScriptContext, name: Option<&str>) -> Result<i64> {
    Ok(item(ctx, name)?.corner_radius.trunc() as i64)
}

/// Returns the effective image scale, adjusted by the source resolution.
pub fn image_scale(ctx: &ScriptContext, name: Option<&str>) -> Result<(f64, f64)> {
    let image = &item(ctx, name)?.image;
    Ok((
        image.x_scale / 72.0 * image.x_resolution,
        image.y_scale / 72.0 * image.y_resolution,
    ))
}

/// Returns the path of the loaded image, or `""`.
pub fn image_file(ctx: &ScriptContext, name: Option<&str>) -> Result<String> {
    Ok(item(ctx, name)?.image.file.clone())
}

/// Returns the item position relative to the current page, in document units.
pub fn position(ctx: &ScriptContext, name: Option<&str>) -> Result<(f64, f64)> {
    let doc = ctx.require_document()?;
    let item = item(ctx, name)?;
    Ok((doc.page_x(item.x), doc.page_y(item.y)))
}

/// Returns the item size in document units.
pub fn size(ctx: &ScriptContext, name: Option<&str>) -> Result<(f64, f64)> {
    let doc = ctx.require_document()?;
    let item = item(ctx, name)?;
    Ok((doc.points_to_value(item.width), doc.points_to_value(item.height)))
}

/// Returns the rotation in degrees, counter-clockwise positive.
pub fn rotation(ctx: &ScriptContext, name: Option<&str>) -> Result<f64> {
    Ok(-item(ctx, name)?.rotation)
}

/// Lists the names of the items on a page, in stacking order.
///
/// `kind` filters by item kind code ([`ANY_KIND`] or `None` for all kinds).
/// `page` defaults to the current page and must be a valid page index.
pub fn all_objects(
    ctx: &ScriptContext,
    kind: Option<i32>,
    page: Option<i64>,
) -> Result<Vec<String>> {
    let doc = ctx.require_document()?;

    let page = match page {
        None => Some(doc.current_page()),
        Some(page) => usize::try_from(page).ok(),
    };
    let page = page
        .filter(|&page| page < doc.page_count())
        .ok_or_else(|| ScriptError::runtime("page number is invalid."))?;

    let kind = kind.filter(|&code| code != ANY_KIND);
    Ok(doc
        .items
        .iter()
        .filter(|item| item.owner_page == Some(page))
        .filter(|item| kind.is_none_or(|code| item.kind.code() == code))
        .map(|item| item.name.clone())
        .collect())
}

/// Returns the item's custom attributes in stored order.
pub fn object_attributes(ctx: &ScriptContext, name: Option<&str>) -> Result<Vec<ObjectAttribute>> {
    Ok(item(ctx, name)?.attributes.clone())
}

/// Returns the colorspace id of the placed image.
///
/// Yields `-1` when no image pixels are loaded. Fails for anything but an
/// image frame.
pub fn image_colorspace(ctx: &ScriptContext, name: Option<&str>) -> Result<i32> {
    let item = item(ctx, name)?;
    if item.kind != ItemKind::ImageFrame {
        return Err(ScriptError::wrong_frame_type("Page item must be an ImageFrame"));
    }
    if item.image.is_empty() {
        return Ok(-1);
    }
    Ok(item.image.colorspace.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use horizon_press::document::{ColorSpace, Document, Page, StoryText, Unit};

    fn context() -> ScriptContext {
        let mut doc = Document::new(Unit::Points);
        doc.add_page(Page::new(600.0, 800.0));
        doc.add_page(Page::new(600.0, 800.0).at(0.0, 850.0));

        let mut frame = PageItem::new(ItemKind::TextFrame, "Body").on_page(0);
        frame.text = StoryText::styled("Lorem", "Red", 60);
        frame.line_color = "Blue".to_string();
        frame.line_shade = 80;
        doc.add_item(frame);

        let mut photo = PageItem::new(ItemKind::ImageFrame, "Photo")
            .on_page(1)
            .with_geometry(100.0, 900.0, 200.0, 100.0);
        photo.rotation = 90.0;
        photo.image.colorspace = ColorSpace::Cmyk;
        doc.add_item(photo);

        doc.add_item(PageItem::new(ItemKind::Group, "Group 1").on_page(0));
        ScriptContext::with_document(doc)
    }

    fn body_mut(ctx: &mut ScriptContext) -> &mut PageItem {
        ctx.document_mut()
            .and_then(|doc| doc.item_by_name_mut("Body"))
            .expect("body frame")
    }

    #[test]
    fn test_object_type_tags() {
        let ctx = context();
        assert_eq!(object_type(&ctx, Some("Body")).unwrap(), "TextFrame");
        assert_eq!(object_type(&ctx, Some("Photo")).unwrap(), "ImageFrame");
        assert_eq!(object_type(&ctx, Some("Group 1")).unwrap(), "");
    }

    #[test]
    fn test_every_accessor_checks_document_first() {
        let ctx = ScriptContext::new();
        assert_eq!(fill_color(&ctx, Some("Body")).unwrap_err().kind(), ErrorKind::NoDocOpen);
        assert_eq!(all_objects(&ctx, None, Some(99)).unwrap_err().kind(), ErrorKind::NoDocOpen);
        assert_eq!(size(&ctx, None).unwrap_err().kind(), ErrorKind::NoDocOpen);
    }

    #[test]
    fn test_transparency_is_opacity() {
        let mut ctx = context();
        for stored in [0.0, 0.25, 0.5, 1.0] {
            body_mut(&mut ctx).fill_transparency = stored;
            body_mut(&mut ctx).line_transparency = stored;
            assert_eq!(fill_transparency(&ctx, Some("Body")).unwrap(), 1.0 - stored);
            assert_eq!(line_transparency(&ctx, Some("Body")).unwrap(), 1.0 - stored);
        }
    }

    #[test]
    fn test_line_color_prefers_selected_text() {
        let mut ctx = context();
        assert_eq!(line_color(&ctx, Some("Body")).unwrap(), "Blue");
        assert_eq!(line_shade(&ctx, Some("Body")).unwrap(), 80);

        body_mut(&mut ctx).has_text_selection = true;
        let err = line_color(&ctx, Some("Body")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(line_shade(&ctx, Some("Body")).unwrap(), 0);

        body_mut(&mut ctx).text.select(1..3);
        assert_eq!(line_color(&ctx, Some("Body")).unwrap(), "Red");
        assert_eq!(line_shade(&ctx, Some("Body")).unwrap(), 60);
    }

    #[test]
    fn test_selection_flag_ignored_on_shapes() {
        let mut ctx = context();
        if let Some(photo) = ctx.document_mut().and_then(|doc| doc.item_by_name_mut("Photo")) {
            photo.has_text_selection = true;
        }
        assert_eq!(line_color(&ctx, Some("Photo")).unwrap(), "Black");
    }

    #[test]
    fn test_geometry() {
        let mut ctx = context();
        assert_eq!(rotation(&ctx, Some("Photo")).unwrap(), -90.0);
        assert_eq!(size(&ctx, Some("Photo")).unwrap(), (200.0, 100.0));
        assert_eq!(position(&ctx, Some("Photo")).unwrap(), (100.0, 900.0));

        if let Some(doc) = ctx.document_mut() {
            doc.set_current_page(1);
            doc.unit = Unit::Inches;
        }
        let (x, y) = position(&ctx, Some("Photo")).unwrap();
        assert!((x - 100.0 / 72.0).abs() < 1e-9);
        assert!((y - 50.0 / 72.0).abs() < 1e-9);
        let (w, h) = size(&ctx, Some("Photo")).unwrap();
        assert!((w - 200.0 / 72.0).abs() < 1e-9);
        assert!((h - 100.0 / 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_corner_radius_truncates() {
        let mut ctx = context();
        body_mut(&mut ctx).corner_radius = 7.9;
        assert_eq!(corner_radius(&ctx, Some("Body")).unwrap(), 7);
    }

    #[test]
    fn test_image_scale_uses_resolution() {
        let mut ctx = context();
        if let Some(photo) = ctx.document_mut().and_then(|doc| doc.item_by_name_mut("Photo")) {
            photo.image.x_scale = 0.5;
            photo.image.y_scale = 0.25;
            photo.image.x_resolution = 300.0;
            photo.image.y_resolution = 144.0;
        }
        assert_eq!(image_scale(&ctx, Some("Photo")).unwrap(), (0.5 / 72.0 * 300.0, 0.25 / 72.0 * 144.0));
    }

    #[test]
    fn test_all_objects_filters() {
        let ctx = context();
        assert_eq!(all_objects(&ctx, None, None).unwrap(), vec!["Body", "Group 1"]);
        assert_eq!(
            all_objects(&ctx, Some(ItemKind::Group.code()), Some(0)).unwrap(),
            vec!["Group 1"]
        );
        assert_eq!(all_objects(&ctx, Some(ANY_KIND), Some(1)).unwrap(), vec!["Photo"]);

        for page in [2, -1] {
            let err = all_objects(&ctx, None, Some(page)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Runtime);
            assert_eq!(err.to_string(), "RuntimeError: page number is invalid.");
        }
    }

    #[test]
    fn test_all_objects_without_pages() {
        let ctx = ScriptContext::with_document(Document::new(Unit::Points));
        let err = all_objects(&ctx, None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
    }

    #[test]
    fn test_image_colorspace() {
        let mut ctx = context();
        assert_eq!(image_colorspace(&ctx, Some("Photo")).unwrap(), -1);

        if let Some(photo) = ctx.document_mut().and_then(|doc| doc.item_by_name_mut("Photo")) {
            photo.image.pixel_width = 640;
            photo.image.pixel_height = 480;
        }
        assert_eq!(image_colorspace(&ctx, Some("Photo")).unwrap(), 1);

        let err = image_colorspace(&ctx, Some("Body")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongFrameType);
    }
}
