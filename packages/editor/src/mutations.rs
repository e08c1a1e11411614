//! # Document Mutations
//!
//! Commands issued by dialogs and context menus against a [`Document`].
//!
//! Each mutation is validated before it touches the document, then routed to
//! the engine that owns its semantics:
//!
//! - `SetColumnWidth` / `SetRowHeight` / `DeleteRows` → [`crate::table`]
//! - `SetControlSelect` / `ToggleRadio` → [`crate::control`]
//! - `SetLineSpacing` → [`crate::line_spacing`]
//!
//! Dimension values are already-converted pixels. A zero dimension cannot be
//! expressed.

use crate::control::{ControlHost, ControlRuleOption, RadioControl, RadioParticle, SelectOutcome};
use crate::document::Document;
use crate::element::{Element, Table};
use crate::host::{RenderOptions, Renderer, TableHost};
use crate::line_spacing::set_line_spacing;
use crate::selection::{Range, TablePosition, TableSelection};
use crate::table::{self, DeleteRowsOutcome};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Semantic mutations on the element model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mutation {
    /// Set the width of the selected columns of a table
    #[serde(rename_all = "camelCase")]
    SetColumnWidth {
        element_index: usize,
        columns: TableSelection,
        width: NonZeroU32,
    },

    /// Set the height of the selected rows of a table
    #[serde(rename_all = "camelCase")]
    SetRowHeight {
        element_index: usize,
        rows: TableSelection,
        height: NonZeroU32,
    },

    /// Delete the selected rows (or the table, when all are selected)
    #[serde(rename_all = "camelCase")]
    DeleteRows {
        element_index: usize,
        rows: TableSelection,
    },

    /// Select an option of a single-choice control group
    #[serde(rename_all = "camelCase")]
    SetControlSelect {
        element_index: usize,
        code: String,
        #[serde(default)]
        options: ControlRuleOption,
    },

    /// Click a radio. Standalone particles flip; grouped options select
    /// through their group.
    #[serde(rename_all = "camelCase")]
    ToggleRadio { element_index: usize },

    /// Set line spacing over a range (the document's range when absent)
    #[serde(rename_all = "camelCase")]
    SetLineSpacing {
        spacing: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<Range>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Element not found: {0}")]
    ElementNotFound(usize),

    #[error("Element {0} is not a table")]
    NotATable(usize),

    #[error("Element {0} is not a single-choice control")]
    NotAControl(usize),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// What a mutation did
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Resized { changed: usize },
    Rows(DeleteRowsOutcome),
    Control(SelectOutcome),
    RadioToggled,
    LineSpacing { updated: usize },
}

impl MutationOutcome {
    /// Whether the document content changed
    pub fn changed(&self) -> bool {
        match self {
            MutationOutcome::Resized { changed } => *changed > 0,
            MutationOutcome::Rows(outcome) => *outcome != DeleteRowsOutcome::Unchanged,
            MutationOutcome::Control(outcome) => matches!(outcome, SelectOutcome::Applied { .. }),
            MutationOutcome::RadioToggled => true,
            MutationOutcome::LineSpacing { updated } => *updated > 0,
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    pub outcome: MutationOutcome,
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetColumnWidth { .. } => "setColumnWidth",
            Mutation::SetRowHeight { .. } => "setRowHeight",
            Mutation::DeleteRows { .. } => "deleteRows",
            Mutation::SetControlSelect { .. } => "setControlSelect",
            Mutation::ToggleRadio { .. } => "toggleRadio",
            Mutation::SetLineSpacing { .. } => "setLineSpacing",
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::SetColumnWidth { element_index, .. }
            | Mutation::SetRowHeight { element_index, .. }
            | Mutation::DeleteRows { element_index, .. } => {
                let table = Self::table(doc, *element_index)?;
                if table.tr_list.is_empty() || table.colgroup.is_empty() {
                    return Err(MutationError::InvalidStructure(format!(
                        "table {element_index} has no rows or columns"
                    )));
                }
                Ok(())
            }

            Mutation::SetControlSelect { element_index, .. } => {
                let element = doc
                    .elements()
                    .get(*element_index)
                    .ok_or(MutationError::ElementNotFound(*element_index))?;
                if element.is_exclusive_choice() {
                    Ok(())
                } else {
                    Err(MutationError::NotAControl(*element_index))
                }
            }

            Mutation::ToggleRadio { element_index } => {
                let element = doc
                    .elements()
                    .get(*element_index)
                    .ok_or(MutationError::ElementNotFound(*element_index))?;
                if Self::grouped_option_code(element).is_none() && Self::in_group(element) {
                    return Err(MutationError::InvalidStructure(format!(
                        "grouped option {element_index} has no code"
                    )));
                }
                Ok(())
            }

            // Out-of-range spacing is a silent no-op, not an error
            Mutation::SetLineSpacing { .. } => Ok(()),
        }
    }

    /// Apply mutation to the document with validation
    pub(crate) fn apply<H: ControlHost>(
        &self,
        doc: &mut Document,
        host: &mut H,
    ) -> Result<MutationOutcome, MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::SetColumnWidth {
                element_index,
                columns,
                width,
            } => {
                let table = Self::table_mut(doc, *element_index)?;
                let changed = table::set_column_width(table, columns, *width, host);
                Ok(MutationOutcome::Resized { changed })
            }

            Mutation::SetRowHeight {
                element_index,
                rows,
                height,
            } => {
                let table = Self::table_mut(doc, *element_index)?;
                let changed = table::set_row_height(table, rows, *height, host);
                Ok(MutationOutcome::Resized { changed })
            }

            Mutation::DeleteRows {
                element_index,
                rows,
            } => Self::apply_delete_rows(doc, *element_index, rows, host),

            Mutation::SetControlSelect {
                element_index,
                code,
                options,
            } => {
                let (elements, group_index) = doc.elements_with_group_index();
                let outcome = RadioControl::new(*element_index).set_select(
                    code,
                    elements,
                    Some(group_index),
                    *options,
                    host,
                );
                Ok(MutationOutcome::Control(outcome))
            }

            Mutation::ToggleRadio { element_index } => {
                // Grouped options are clicks on their group, never a bare flip
                let grouped_code = doc
                    .elements()
                    .get(*element_index)
                    .and_then(Self::grouped_option_code)
                    .map(str::to_string);
                if let Some(code) = grouped_code {
                    let (elements, group_index) = doc.elements_with_group_index();
                    let outcome = RadioControl::new(*element_index).set_select(
                        &code,
                        elements,
                        Some(group_index),
                        ControlRuleOption::default(),
                        host,
                    );
                    return Ok(MutationOutcome::Control(outcome));
                }

                let element = doc
                    .elements
                    .get_mut(*element_index)
                    .ok_or(MutationError::ElementNotFound(*element_index))?;
                RadioParticle::default().toggle(element, host);
                Ok(MutationOutcome::RadioToggled)
            }

            Mutation::SetLineSpacing { spacing, range } => {
                let range = range.unwrap_or(doc.range);
                let updated = set_line_spacing(&mut doc.elements, &range, *spacing, host);
                Ok(MutationOutcome::LineSpacing { updated })
            }
        }
    }

    fn apply_delete_rows<H: ControlHost>(
        doc: &mut Document,
        element_index: usize,
        rows: &TableSelection,
        host: &mut H,
    ) -> Result<MutationOutcome, MutationError> {
        let table = Self::table_mut(doc, element_index)?;
        let mut deleter = DeferredTableDelete::new(host);
        let outcome = table::delete_rows(table, rows, &mut deleter);

        match outcome {
            DeleteRowsOutcome::TableDeleted => {
                doc.remove_element(element_index);
                let cur_index = element_index.checked_sub(1);
                doc.range = Range {
                    start_index: cur_index,
                    end_index: cur_index,
                    table: None,
                };
                host.render(RenderOptions {
                    cur_index,
                    ..RenderOptions::default()
                });
            }
            DeleteRowsOutcome::RowsDeleted { cursor_row, .. } => {
                let cells = table.tr_list[cursor_row].td_list.len();
                let td_index = doc
                    .range
                    .table
                    .filter(|position| position.index == element_index)
                    .map_or(0, |position| position.td_index)
                    .min(cells.saturating_sub(1));
                doc.range.table = Some(TablePosition {
                    index: element_index,
                    tr_index: cursor_row,
                    td_index,
                });
            }
            DeleteRowsOutcome::Unchanged => {}
        }

        Ok(MutationOutcome::Rows(outcome))
    }

    fn in_group(element: &Element) -> bool {
        element.is_exclusive_choice() && element.group_id().is_some()
    }

    /// Code of a single-choice option that belongs to a group
    fn grouped_option_code(element: &Element) -> Option<&str> {
        if !Self::in_group(element) {
            return None;
        }
        element.radio.as_ref()?.code.as_deref()
    }

    fn table(doc: &Document, index: usize) -> Result<&Table, MutationError> {
        doc.elements()
            .get(index)
            .ok_or(MutationError::ElementNotFound(index))?
            .table
            .as_ref()
            .ok_or(MutationError::NotATable(index))
    }

    fn table_mut(doc: &mut Document, index: usize) -> Result<&mut Table, MutationError> {
        doc.elements
            .get_mut(index)
            .ok_or(MutationError::ElementNotFound(index))?
            .table
            .as_mut()
            .ok_or(MutationError::NotATable(index))
    }
}

/// Table host that forwards renders but leaves whole-table deletion to
/// `apply_delete_rows`, which removes the element once the table borrow ends
struct DeferredTableDelete<'a, H> {
    host: &'a mut H,
}

impl<'a, H> DeferredTableDelete<'a, H> {
    fn new(host: &'a mut H) -> Self {
        Self { host }
    }
}

impl<H: Renderer> Renderer for DeferredTableDelete<'_, H> {
    fn render(&mut self, options: RenderOptions) {
        self.host.render(options);
    }
}

impl<H: Renderer> TableHost for DeferredTableDelete<'_, H> {
    fn delete_table(&mut self) {
        tracing::debug!("Table delete deferred to the document");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::SetColumnWidth {
            element_index: 0,
            columns: TableSelection::new([1, 2]),
            width: NonZeroU32::new(76).unwrap(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"setColumnWidth","elementIndex":0,"columns":[1,2],"width":76}"#
        );

        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_zero_width_does_not_deserialize() {
        let json = r#"{"kind":"setColumnWidth","elementIndex":0,"columns":[0],"width":0}"#;
        assert!(serde_json::from_str::<Mutation>(json).is_err());
    }

    #[test]
    fn test_select_options_default() {
        let json = r#"{"kind":"setControlSelect","elementIndex":2,"code":"x"}"#;
        let mutation: Mutation = serde_json::from_str(json).unwrap();
        assert_eq!(
            mutation,
            Mutation::SetControlSelect {
                element_index: 2,
                code: "x".to_string(),
                options: ControlRuleOption::default(),
            }
        );
        assert_eq!(mutation.name(), "setControlSelect");
    }
}
