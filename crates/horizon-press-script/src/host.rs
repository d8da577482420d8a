//! The script host: an interpreter bound to a document context.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use mlua::{FromLuaMulti, Lua};

use horizon_press::document::Document;
use horizon_press_core::logging::targets;

use crate::bindings::{self, SharedContext};
use crate::config::{SANDBOXED_GLOBALS, ScriptHostConfig};
use crate::context::ScriptContext;
use crate::error::Result;

/// Restricts `load` to source text and drops `string.dump`, so scripts
/// cannot produce or run precompiled chunks. An explicit `env` argument,
/// even `nil`, is passed through as given.
const TEXT_ONLY_LOAD: &str = r##"
local raw_load = load
load = function(chunk, name, _, ...)
    if select("#", ...) > 0 then
        return raw_load(chunk, name, "t", ...)
    end
    return raw_load(chunk, name, "t")
end
string.dump = nil
"##;

/// Owns a Lua interpreter with the accessors registered.
///
/// The host keeps the document scripts read from. The embedding
/// application opens, replaces or closes it between script runs.
///
/// # Example
///
/// ```
/// use horizon_press::document::{Document, ItemKind, PageItem, Unit};
/// use horizon_press_script::ScriptHost;
///
/// let host = ScriptHost::new().unwrap();
///
/// let mut doc = Document::new(Unit::Points);
/// doc.add_item(PageItem::new(ItemKind::Line, "Rule"));
/// host.open_document(doc);
///
/// let tag: String = host.eval(r#"return press.getObjectType("Rule")"#).unwrap();
/// assert_eq!(tag, "Line");
/// ```
pub struct ScriptHost {
    lua: Lua,
    context: SharedContext,
    config: ScriptHostConfig,
}

impl ScriptHost {
    /// Creates a host with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ScriptHostConfig::default())
    }

    /// Creates a host with the given configuration.
    pub fn with_config(config: ScriptHostConfig) -> Result<Self> {
        config.validate()?;

        let lua = Lua::new();
        if let Some(limit) = config.memory_limit {
            lua.set_memory_limit(limit)?;
        }

        let globals = lua.globals();
        if config.sandbox {
            for name in SANDBOXED_GLOBALS {
                globals.set(*name, mlua::Nil)?;
            }
            lua.load(TEXT_ONLY_LOAD).set_name("=sandbox").exec()?;
        }

        let context = Rc::new(RefCell::new(ScriptContext::new()));
        let table = lua.create_table()?;
        bindings::register(&lua, &table, &context)?;
        globals.set(config.table_name.as_str(), table)?;

        tracing::debug!(
            target: targets::SCRIPT,
            table = %config.table_name,
            sandbox = config.sandbox,
            memory_limit = ?config.memory_limit,
            "script host created"
        );

        Ok(Self {
            lua,
            context,
            config,
        })
    }

    /// Returns the configuration the host was created with.
    pub fn config(&self) -> &ScriptHostConfig {
        &self.config
    }

    /// Returns the underlying interpreter.
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Opens `document`, returning the previously open one.
    pub fn open_document(&self, document: Document) -> Option<Document> {
        tracing::debug!(target: targets::SCRIPT, id = document.id().get(), "document opened for scripting");
        self.context.borrow_mut().open(document)
    }

    /// Closes the open document and returns it.
    pub fn close_document(&self) -> Option<Document> {
        self.context.borrow_mut().close()
    }

    /// Returns `true` if a document is open.
    pub fn has_document(&self) -> bool {
        self.context.borrow().document().is_some()
    }

    /// Mutably borrows the context, for editing the document between runs.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a running script.
    pub fn context_mut(&self) -> RefMut<'_, ScriptContext> {
        self.context.borrow_mut()
    }

    /// Runs a chunk for its side effects.
    pub fn exec(&self, chunk: &str) -> Result<()> {
        self.lua.load(chunk).set_name("=script").exec()?;
        Ok(())
    }

    /// Runs a chunk and converts its return values.
    pub fn eval<T: FromLuaMulti>(&self, chunk: &str) -> Result<T> {
        Ok(self.lua.load(chunk).set_name("=script").eval()?)
    }
}
