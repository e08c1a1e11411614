//! # Canvas Editor
//!
//! Element-mutation core of the canvas document editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dialog / context menu (host)                │
//! │  - raw text → canvas_common validate/convert│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document + Mutation                 │
//! │  - table: column width, row height, delete  │
//! │  - control: single-choice group selection   │
//! │  - line_spacing: per-element spacing        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: render request, content-changed event │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Borrow, don't own**: engines take `&mut` to caller data per call
//! 2. **Validate before mutate**: invalid input never reaches an engine
//! 3. **Total mutations**: no partial application, stale indexes are skipped
//! 4. **Structural safety**: a table never ends up with zero rows
//!
//! ## Usage
//!
//! ```rust,ignore
//! use canvas_common::DimensionDialog;
//! use canvas_editor::{Document, Mutation, RecordingHost, TableSelection};
//!
//! let mut doc = Document::load("doc.json")?;
//! let mut host = RecordingHost::new();
//!
//! let width = DimensionDialog::column_width(None).confirm(Some("2"))?;
//! doc.apply(
//!     Mutation::SetColumnWidth {
//!         element_index: 0,
//!         columns: TableSelection::new([1]),
//!         width,
//!     },
//!     &mut host,
//! )?;
//!
//! doc.save()?;
//! ```

pub mod control;
mod document;
mod element;
mod errors;
pub mod host;
pub mod line_spacing;
mod mutations;
mod options;
mod selection;
pub mod table;

pub use control::{
    ControlContext, ControlGroupIndex, ControlHost, ControlRuleOption, RadioControl,
    RadioParticle, SelectOutcome, SkipReason,
};
pub use document::Document;
pub use element::{Col, Control, ControlComponent, Element, ElementType, RadioState, Table, Td, Tr};
pub use errors::EditorError;
pub use host::{
    ContentNotifier, ControlRule, RecordingHost, RenderOptions, Renderer, TableHost,
};
pub use line_spacing::{
    LineSpacingOption, DEFAULT_LINE_SPACING, LINE_SPACING_OPTIONS, MAX_LINE_SPACING,
    MIN_LINE_SPACING,
};
pub use mutations::{Mutation, MutationError, MutationOutcome, MutationResult};
pub use options::{ControlOptions, EditorOptions, RadioOptions, RadioStyle};
pub use selection::{Range, TablePosition, TableSelection};
pub use table::DeleteRowsOutcome;

// Re-export the dialog-side helpers for convenience
pub use canvas_common::{cm_to_pixels, pixels_to_cm, DimensionDialog, ValidationError};
