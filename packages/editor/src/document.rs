//! # Document Handle
//!
//! Owns the element list and selection the engines borrow from.
//!
//! A Document can be:
//! - **Memory-backed**: built from elements or JSON, for tests and tools
//! - **File-backed**: loaded from and saved to a JSON file on disk
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Validate → Apply mutation → Render request → Save
//!   ↓        ↓            ↓                ↓            ↓
//! File   Mutation    Elements        Host renderer    File
//! ```
//!
//! The document keeps a control group index next to the element list. Any
//! mutable borrow of the list marks the index stale; it is rebuilt on next
//! use.

use crate::control::{ControlGroupIndex, ControlHost};
use crate::element::{Element, Table};
use crate::errors::EditorError;
use crate::line_spacing;
use crate::mutations::{Mutation, MutationResult};
use crate::selection::Range;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk shape of a document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentData {
    #[serde(default)]
    elements: Vec<Element>,

    #[serde(default)]
    range: Range,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentDataRef<'a> {
    elements: &'a [Element],
    range: &'a Range,
}

/// Editable element document
#[derive(Debug)]
pub struct Document {
    /// Source file (if file-backed)
    pub path: Option<PathBuf>,

    /// Current version number (increments on each mutation that changes content)
    pub version: u64,

    pub(crate) elements: Vec<Element>,
    pub(crate) range: Range,

    /// `None` when stale
    group_index: Option<ControlGroupIndex>,
    dirty: bool,
}

impl Document {
    /// Create a memory-backed document
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            path: None,
            version: 0,
            elements,
            range: Range::default(),
            group_index: None,
            dirty: false,
        }
    }

    /// Parse a memory-backed document from JSON
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let data: DocumentData = serde_json::from_str(source)?;
        let mut doc = Self::new(data.elements);
        doc.range = data.range;
        Ok(doc)
    }

    /// Load a file-backed document
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let mut doc = Self::from_json(&source)?;
        doc.path = Some(path.to_path_buf());

        debug!(path = %path.display(), elements = doc.elements.len(), "Loaded document");
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        let data = DocumentDataRef {
            elements: &self.elements,
            range: &self.range,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NotFileBacked)?;
        std::fs::write(&path, self.to_json()?)?;
        self.dirty = false;

        debug!(path = %path.display(), version = self.version, "Saved document");
        Ok(())
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Mutable access to the elements; invalidates the group index
    pub fn elements_mut(&mut self) -> &mut [Element] {
        self.group_index = None;
        self.dirty = true;
        &mut self.elements
    }

    pub fn range(&self) -> &Range {
        &self.range
    }

    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    pub fn table(&self, index: usize) -> Option<&Table> {
        self.elements.get(index)?.table.as_ref()
    }

    /// Control group index, rebuilt if stale
    pub fn group_index(&mut self) -> &ControlGroupIndex {
        self.group_index
            .get_or_insert_with(|| ControlGroupIndex::build(&self.elements))
    }

    /// Elements together with an up-to-date group index over them.
    ///
    /// The slice cannot change length, and control sweeps never change group
    /// membership, so the index stays valid for the borrow.
    pub(crate) fn elements_with_group_index(&mut self) -> (&mut [Element], &ControlGroupIndex) {
        let elements = &mut self.elements;
        let index = self
            .group_index
            .get_or_insert_with(|| ControlGroupIndex::build(elements));
        (elements.as_mut_slice(), index)
    }

    /// Remove a whole element (used when a table loses all its rows)
    pub(crate) fn remove_element(&mut self, index: usize) -> Option<Element> {
        if index >= self.elements.len() {
            return None;
        }
        self.group_index = None;
        Some(self.elements.remove(index))
    }

    /// Line spacing at the current selection start
    pub fn current_line_spacing(&self) -> f64 {
        line_spacing::current_line_spacing(&self.elements, &self.range)
    }

    /// Validate and apply a mutation
    pub fn apply<H: ControlHost>(
        &mut self,
        mutation: Mutation,
        host: &mut H,
    ) -> Result<MutationResult, EditorError> {
        let outcome = match mutation.apply(self, host) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(mutation = mutation.name(), error = %e, "Mutation rejected");
                return Err(e.into());
            }
        };

        if outcome.changed() {
            self.version += 1;
            self.dirty = true;
            debug!(
                mutation = mutation.name(),
                version = self.version,
                ?outcome,
                "Applied mutation"
            );
        } else {
            debug!(mutation = mutation.name(), ?outcome, "Mutation changed nothing");
        }

        Ok(MutationResult {
            version: self.version,
            outcome,
        })
    }
}
