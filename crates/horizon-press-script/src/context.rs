//! The document handle accessors read from.

use horizon_press::document::{Document, PageItem};

use crate::error::{Result, ScriptError};

/// State shared between the host and every registered accessor.
///
/// Holds the document scripts operate on, if one is open. Accessors never
/// reach for a global "current document"; the host threads this context
/// through every call.
#[derive(Debug, Default)]
pub struct ScriptContext {
    document: Option<Document>,
}

impl ScriptContext {
    /// Creates a context with no open document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context operating on `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Returns the open document.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns the open document for modification.
    pub fn document_mut(&mut self) -> Option<&mut Document> {
        self.document.as_mut()
    }

    /// Opens `document`, returning the previously open one.
    pub fn open(&mut self, document: Document) -> Option<Document> {
        self.document.replace(document)
    }

    /// Closes the open document and returns it.
    pub fn close(&mut self) -> Option<Document> {
        self.document.take()
    }

    /// Returns the open document or fails with [`ScriptError::NoDocument`].
    pub fn require_document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(ScriptError::NoDocument)
    }

    /// Resolves the item an accessor targets.
    ///
    /// A missing or empty name means the first selected item.
    pub fn resolve_item(&self, name: Option<&str>) -> Result<&PageItem> {
        let doc = self.require_document()?;
        match name {
            Some(name) if !name.is_empty() => doc
                .item_by_name(name)
                .ok_or_else(|| ScriptError::not_found("Object not found")),
            _ => doc.first_selected().ok_or(ScriptError::NoSelection),
        }
    }
}
