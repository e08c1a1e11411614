//! # Element Model
//!
//! The slice of the editor's element model that the mutation engines touch.
//!
//! Elements are stored as a flat list. Tables nest further element lists
//! inside their cells (`trList[r].tdList[c].value`), which is where cell
//! text and its line spacing live.
//!
//! Field names serialize in camelCase so persisted documents keep the
//! `colgroup` / `trList` / `groupId` / `lineSpacing` keys.

use serde::{Deserialize, Serialize};

/// Kind of a document element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    #[default]
    Text,
    Table,
    Radio,
    Checkbox,
    Control,
    Image,
    Separator,
    PageBreak,
}

/// Kind of component inside a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlComponent {
    Prefix,
    Postfix,
    Placeholder,
    Value,
    Checkbox,
    Radio,
}

/// Form control metadata attached to an element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Binds elements into one mutually exclusive group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Code of the option last selected in the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Selection state of a single radio option
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioState {
    #[serde(default)]
    pub value: bool,

    /// Identity of this option within its group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Col {
    pub width: u32,
}

/// One table cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Td {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub value: Vec<Element>,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub height: u32,

    #[serde(default)]
    pub td_list: Vec<Td>,
}

/// Table structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub colgroup: Vec<Col>,
    pub tr_list: Vec<Tr>,
}

impl Table {
    /// Build a table with the given column widths and row heights, one empty
    /// cell per column
    pub fn with_dimensions(widths: &[u32], heights: &[u32]) -> Self {
        let colgroup = widths.iter().map(|&width| Col { width }).collect();
        let tr_list = heights
            .iter()
            .enumerate()
            .map(|(r, &height)| Tr {
                id: Some(format!("tr-{r}")),
                height,
                td_list: (0..widths.len())
                    .map(|c| Td {
                        id: Some(format!("td-{r}-{c}")),
                        value: Vec::new(),
                    })
                    .collect(),
            })
            .collect();

        Self { colgroup, tr_list }
    }

    /// Total table width, always derived from the column widths
    pub fn width(&self) -> u64 {
        self.colgroup.iter().map(|col| u64::from(col.width)).sum()
    }

    pub fn widths(&self) -> Vec<u32> {
        self.colgroup.iter().map(|col| col.width).collect()
    }

    pub fn heights(&self) -> Vec<u32> {
        self.tr_list.iter().map(|tr| tr.height).collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Td> {
        self.tr_list.get(row)?.td_list.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Td> {
        self.tr_list.get_mut(row)?.td_list.get_mut(col)
    }
}

/// A document element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub value: String,

    #[serde(rename = "type", default)]
    pub kind: ElementType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_component: Option<ControlComponent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<Control>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio: Option<RadioState>,

    /// Absent means the default spacing of 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn table(table: Table) -> Self {
        Self {
            kind: ElementType::Table,
            table: Some(table),
            ..Self::default()
        }
    }

    /// A radio option belonging to `group_id`, identified by `code`
    pub fn radio(group_id: impl Into<String>, code: impl Into<String>, selected: bool) -> Self {
        let code = code.into();
        Self {
            value: String::new(),
            kind: ElementType::Control,
            control_component: Some(ControlComponent::Radio),
            control: Some(Control {
                group_id: Some(group_id.into()),
                code: selected.then(|| code.clone()),
            }),
            radio: Some(RadioState {
                value: selected,
                code: Some(code),
            }),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn group_id(&self) -> Option<&str> {
        self.control.as_ref()?.group_id.as_deref()
    }

    /// Whether this element takes part in single-choice exclusivity
    pub fn is_exclusive_choice(&self) -> bool {
        self.kind == ElementType::Radio || self.control_component == Some(ControlComponent::Radio)
    }

    pub fn is_selected(&self) -> bool {
        self.radio.as_ref().is_some_and(|radio| radio.value)
    }
}
