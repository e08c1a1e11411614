//! # Host Collaborators
//!
//! The engines never paint, never own the document and never decide whether
//! a control is editable. Those decisions belong to the host editor, which
//! exposes them through the traits below.
//!
//! `RecordingHost` implements every trait in memory. It backs the tests and
//! the headless CLI.

use crate::control::ControlContext;
use std::collections::HashSet;

/// Options for a render request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Element index the cursor should land on after the render
    pub cur_index: Option<usize>,

    /// Recompute layout before painting
    pub is_compute: bool,

    /// Move the cursor to `cur_index`
    pub is_set_cursor: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cur_index: None,
            is_compute: true,
            is_set_cursor: true,
        }
    }
}

impl RenderOptions {
    pub fn at(cur_index: usize) -> Self {
        Self {
            cur_index: Some(cur_index),
            ..Self::default()
        }
    }

    pub fn without_cursor() -> Self {
        Self {
            is_set_cursor: false,
            ..Self::default()
        }
    }

    /// Repaint only, keep layout and cursor
    pub fn paint_only() -> Self {
        Self {
            cur_index: None,
            is_compute: false,
            is_set_cursor: false,
        }
    }
}

/// Receives re-render requests
pub trait Renderer {
    fn render(&mut self, options: RenderOptions);
}

/// Receives content-changed notifications for controls
pub trait ContentNotifier {
    fn emit_control_content_change(&mut self, context: &ControlContext);
}

/// Decides whether a control may currently be edited
pub trait ControlRule {
    fn is_disabled_control(&self, context: &ControlContext) -> bool;
}

/// Table collaborator: can render and can delete the whole table element
pub trait TableHost: Renderer {
    /// Remove the table element currently being edited
    fn delete_table(&mut self);
}

/// In-memory host that records every request it receives
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub renders: Vec<RenderOptions>,

    /// Group ids of each content-changed notification, in order
    pub notifications: Vec<Option<String>>,

    pub table_deletes: usize,

    /// Groups reported as disabled by the control rule
    pub disabled_groups: HashSet<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled_group(mut self, group_id: impl Into<String>) -> Self {
        self.disabled_groups.insert(group_id.into());
        self
    }

    pub fn last_render(&self) -> Option<&RenderOptions> {
        self.renders.last()
    }

    pub fn clear(&mut self) {
        self.renders.clear();
        self.notifications.clear();
        self.table_deletes = 0;
    }
}

impl Renderer for RecordingHost {
    fn render(&mut self, options: RenderOptions) {
        self.renders.push(options);
    }
}

impl ContentNotifier for RecordingHost {
    fn emit_control_content_change(&mut self, context: &ControlContext) {
        self.notifications.push(context.group_id.clone());
    }
}

impl ControlRule for RecordingHost {
    fn is_disabled_control(&self, context: &ControlContext) -> bool {
        context
            .group_id
            .as_ref()
            .is_some_and(|group| self.disabled_groups.contains(group))
    }
}

impl TableHost for RecordingHost {
    fn delete_table(&mut self) {
        self.table_deletes += 1;
    }
}
