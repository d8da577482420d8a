//! Registration of the accessors into a Lua table.
//!
//! Each accessor becomes a Lua function taking an optional item name.
//! Pairs come back as two return values, listings as sequences, and
//! attribute records as tables keyed by field name. Domain errors are
//! raised as Lua errors whose message starts with the category name.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use mlua::{IntoLuaMulti, Lua, Table, Value};

use horizon_press::document::{ItemKind, ObjectAttribute};
use horizon_press_core::logging::{span_names, targets};

use crate::accessors;
use crate::context::ScriptContext;
use crate::error::Result;

/// Context shared between the host and the registered functions.
pub type SharedContext = Rc<RefCell<ScriptContext>>;

/// Registers every accessor into `table`.
pub fn register(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_object_api(lua, table, ctx)?;
    register_fill_api(lua, table, ctx)?;
    register_line_api(lua, table, ctx)?;
    register_geometry_api(lua, table, ctx)?;
    register_image_api(lua, table, ctx)?;
    register_constants(lua, table)?;
    Ok(())
}

/// Runs one accessor call, logging failures and converting them to Lua errors.
fn call<R>(function: &'static str, accessor: impl FnOnce() -> Result<R>) -> mlua::Result<R> {
    let _span = tracing::trace_span!(target: targets::SCRIPT, span_names::SCRIPT_CALL, function).entered();
    accessor().map_err(|err| {
        tracing::debug!(target: targets::SCRIPT, function, kind = %err.kind(), "accessor failed: {err}");
        mlua::Error::external(err)
    })
}

fn borrow(ctx: &SharedContext) -> mlua::Result<Ref<'_, ScriptContext>> {
    ctx.try_borrow()
        .map_err(|_| mlua::Error::runtime("document context is being modified"))
}

/// Registers an accessor of the form `f(name?)`.
fn register_item_fn<R, F>(
    lua: &Lua,
    table: &Table,
    ctx: &SharedContext,
    function: &'static str,
    accessor: F,
) -> mlua::Result<()>
where
    R: IntoLuaMulti,
    F: Fn(&ScriptContext, Option<&str>) -> Result<R> + 'static,
{
    let ctx = Rc::clone(ctx);
    let lua_fn = lua.create_function(move |_, name: Option<String>| {
        let ctx = borrow(&ctx)?;
        call(function, || accessor(&*ctx, name.as_deref()))
    })?;
    table.set(function, lua_fn)
}

fn register_object_api(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_item_fn(lua, table, ctx, "getObjectType", accessors::object_type)?;

    // getObjectAttributes(name?) -> { { Name = ..., Type = ..., ... }, ... }
    let c = Rc::clone(ctx);
    let lua_fn = lua.create_function(move |lua, name: Option<String>| {
        let ctx = borrow(&c)?;
        let attributes = call("getObjectAttributes", || {
            accessors::object_attributes(&ctx, name.as_deref())
        })?;
        attribute_list(lua, &attributes)
    })?;
    table.set("getObjectAttributes", lua_fn)?;

    // getAllObjects(type?, page?) or getAllObjects{ type = ..., page = ... }
    let c = Rc::clone(ctx);
    let lua_fn = lua.create_function(move |lua, (filter, page): (Value, Option<i64>)| {
        let (kind, page) = match filter {
            Value::Table(options) => (
                options.get::<Option<i32>>("type")?,
                options.get::<Option<i64>>("page")?,
            ),
            other => (lua.unpack::<Option<i32>>(other)?, page),
        };
        let ctx = borrow(&c)?;
        call("getAllObjects", || accessors::all_objects(&ctx, kind, page))
    })?;
    table.set("getAllObjects", lua_fn)
}

/// Builds the attribute sequence; any failure drops the partial list.
fn attribute_list(lua: &Lua, attributes: &[ObjectAttribute]) -> mlua::Result<Table> {
    let list = lua.create_table_with_capacity(attributes.len(), 0)?;
    for attribute in attributes {
        let record = lua.create_table_with_capacity(0, 7)?;
        record.set("Name", attribute.name.as_str())?;
        record.set("Type", attribute.kind.as_str())?;
        record.set("Value", attribute.value.as_str())?;
        record.set("Parameter", attribute.parameter.as_str())?;
        record.set("Relationship", attribute.relationship.as_str())?;
        record.set("RelationshipTo", attribute.relationship_to.as_str())?;
        record.set("AutoAddTo", attribute.auto_add_to.as_str())?;
        list.push(record)?;
    }
    Ok(list)
}

fn register_fill_api(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_item_fn(lua, table, ctx, "getFillColor", accessors::fill_color)?;
    register_item_fn(lua, table, ctx, "getFillTransparency", accessors::fill_transparency)?;
    register_item_fn(lua, table, ctx, "getFillBlendmode", accessors::fill_blend_mode)?;
    register_item_fn(lua, table, ctx, "getFillShade", accessors::fill_shade)
}

fn register_line_api(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_item_fn(lua, table, ctx, "getLineColor", accessors::line_color)?;
    register_item_fn(lua, table, ctx, "getLineTransparency", accessors::line_transparency)?;
    register_item_fn(lua, table, ctx, "getLineBlendmode", accessors::line_blend_mode)?;
    register_item_fn(lua, table, ctx, "getLineWidth", accessors::line_width)?;
    register_item_fn(lua, table, ctx, "getLineShade", accessors::line_shade)?;
    register_item_fn(lua, table, ctx, "getLineJoin", accessors::line_join)?;
    register_item_fn(lua, table, ctx, "getLineEnd", accessors::line_cap)?;
    register_item_fn(lua, table, ctx, "getLineStyle", accessors::line_style)?;
    register_item_fn(lua, table, ctx, "getCustomLineStyle", accessors::custom_line_style)
}

fn register_geometry_api(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_item_fn(lua, table, ctx, "getPosition", accessors::position)?;
    register_item_fn(lua, table, ctx, "getSize", accessors::size)?;
    register_item_fn(lua, table, ctx, "getRotation", accessors::rotation)?;
    register_item_fn(lua, table, ctx, "getCornerRadius", accessors::corner_radius)
}

fn register_image_api(lua: &Lua, table: &Table, ctx: &SharedContext) -> mlua::Result<()> {
    register_item_fn(lua, table, ctx, "getImageScale", accessors::image_scale)?;
    register_item_fn(lua, table, ctx, "getImageFile", accessors::image_file)?;
    register_item_fn(lua, table, ctx, "getImageColorSpace", accessors::image_colorspace)
}

/// Exposes the item kind codes used by `getAllObjects` as `ItemKind.<Name>`.
fn register_constants(lua: &Lua, table: &Table) -> mlua::Result<()> {
    let kinds = lua.create_table()?;
    for kind in (0..=ItemKind::Multiple.code()).filter_map(ItemKind::from_code) {
        kinds.set(format!("{kind:?}"), kind.code())?;
    }
    table.set("ItemKind", kinds)
}
