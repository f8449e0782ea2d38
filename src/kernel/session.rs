//! Open documents and the identity of the current one.
//!
//! Identified documents live in `documents`, most recently opened first, unique by path.
//! The untitled slot is held apart in `scratch`; there is never more than one.

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::{FileHandle, SaveRequest};

pub const UNTITLED_NAME: &str = "Untitled File";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Untitled,
    Dirty,
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: Option<PathBuf>,
    pub display_name: String,
    pub content: String,
    pub dirty: bool,
}

impl Document {
    pub fn untitled() -> Self {
        Self {
            path: None,
            display_name: UNTITLED_NAME.to_string(),
            content: String::new(),
            dirty: false,
        }
    }

    pub fn from_handle(handle: FileHandle) -> Self {
        Self {
            path: Some(handle.path),
            display_name: handle.name,
            content: handle.content,
            dirty: false,
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    pub fn status(&self) -> DocumentStatus {
        match (&self.path, self.dirty) {
            (_, true) => DocumentStatus::Dirty,
            (None, false) => DocumentStatus::Untitled,
            (Some(_), false) => DocumentStatus::Saved,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentDocument {
    #[default]
    None,
    Untitled,
    Path(PathBuf),
}

/// State-discarding transitions the unsaved-changes guard is consulted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    NewDocument,
    Select(PathBuf),
    Close(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardCheck {
    Proceed,
    Confirm { display_name: String },
}

impl DiscardCheck {
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, DiscardCheck::Confirm { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    documents: Vec<Document>,
    current: CurrentDocument,
    scratch: Document,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            current: CurrentDocument::None,
            scratch: Document::untitled(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn current(&self) -> &CurrentDocument {
        &self.current
    }

    pub fn document(&self, path: &Path) -> Option<&Document> {
        self.documents
            .iter()
            .find(|doc| doc.path.as_deref() == Some(path))
    }

    fn document_mut(&mut self, path: &Path) -> Option<&mut Document> {
        self.documents
            .iter_mut()
            .find(|doc| doc.path.as_deref() == Some(path))
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.document(path).is_some()
    }

    pub fn current_document(&self) -> Option<&Document> {
        match &self.current {
            CurrentDocument::None => None,
            CurrentDocument::Untitled => Some(&self.scratch),
            CurrentDocument::Path(path) => self.document(path),
        }
    }

    pub fn current_path(&self) -> Option<&Path> {
        match &self.current {
            CurrentDocument::Path(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// Header title: the current document's name, or the untitled label.
    pub fn title(&self) -> &str {
        self.current_document()
            .map(|doc| doc.display_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_NAME)
    }

    pub fn is_dirty(&self) -> bool {
        self.current_document().is_some_and(|doc| doc.dirty)
    }

    /// Replaces any entry with the same path by the freshly loaded one, at the front.
    pub fn open_or_focus(&mut self, handle: FileHandle) -> bool {
        let path = handle.path.clone();
        self.documents
            .retain(|doc| doc.path.as_deref() != Some(path.as_path()));
        self.documents.insert(0, Document::from_handle(handle));
        self.current = CurrentDocument::Path(path);
        true
    }

    /// Applies a fresh disk read to an open document and makes it current.
    pub fn focus_with_content(&mut self, path: &Path, content: String) -> bool {
        let Some(doc) = self.document_mut(path) else {
            return false;
        };
        doc.content = content;
        doc.dirty = false;
        self.current = CurrentDocument::Path(path.to_path_buf());
        true
    }

    /// Switches to a blank untitled slot. Unsaved scratch content is dropped.
    pub fn new_document(&mut self) -> bool {
        self.scratch = Document::untitled();
        self.current = CurrentDocument::Untitled;
        true
    }

    pub fn update_content(&mut self, text: String) -> bool {
        match &self.current {
            CurrentDocument::Path(path) => {
                let path = path.clone();
                if let Some(doc) = self.document_mut(&path) {
                    doc.content = text;
                    doc.dirty = true;
                    return true;
                }
                self.edit_scratch(text)
            }
            CurrentDocument::Untitled | CurrentDocument::None => self.edit_scratch(text),
        }
    }

    fn edit_scratch(&mut self, text: String) -> bool {
        self.scratch.content = text;
        self.scratch.dirty = true;
        self.current = CurrentDocument::Untitled;
        true
    }

    pub fn save_request(&self) -> Option<SaveRequest> {
        let doc = self.current_document()?;
        Some(SaveRequest {
            file: doc.path.clone(),
            content: doc.content.clone(),
        })
    }

    /// Clears dirty only if the document still holds what was written.
    pub fn mark_saved(&mut self, path: &Path, saved_content: &str) -> bool {
        let Some(doc) = self.document_mut(path) else {
            return false;
        };
        if !doc.dirty || doc.content != saved_content {
            return false;
        }
        doc.dirty = false;
        true
    }

    /// The untitled slot got an identity from the host: it joins the registry.
    pub fn complete_save_as(&mut self, handle: FileHandle) -> bool {
        self.scratch = Document::untitled();
        self.open_or_focus(handle)
    }

    pub fn remove(&mut self, path: &Path) -> Option<Document> {
        let index = self
            .documents
            .iter()
            .position(|doc| doc.path.as_deref() == Some(path))?;
        let removed = self.documents.remove(index);
        if self.current_path() == Some(path) {
            self.current = CurrentDocument::None;
        }
        Some(removed)
    }

    /// Drops the current selection without touching the registry.
    pub fn clear_current(&mut self) -> bool {
        if self.current == CurrentDocument::None {
            return false;
        }
        self.scratch = Document::untitled();
        self.current = CurrentDocument::None;
        true
    }

    /// Single guard for every transition that can throw away unsaved edits.
    pub fn discard_check(&self, transition: &Transition) -> DiscardCheck {
        let at_risk = match transition {
            Transition::NewDocument => self.current_document(),
            Transition::Select(path) | Transition::Close(path) => self.document(path),
        };
        match at_risk {
            Some(doc) if doc.dirty => DiscardCheck::Confirm {
                display_name: doc.display_name.clone(),
            },
            _ => DiscardCheck::Proceed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
