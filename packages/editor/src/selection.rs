//! Selection state handed to the engines.
//!
//! `Range` is the caret/selection over a flat element list. Unset bounds are
//! `None` rather than a `-1` sentinel. `TableSelection` is the explicit set of
//! row or column indexes a table batch operation acts on.

use serde::{Deserialize, Serialize};

/// Caret position inside a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePosition {
    /// Index of the table element in the document's element list
    pub index: usize,
    pub tr_index: usize,
    pub td_index: usize,
}

/// Selection range over an element list (inclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TablePosition>,
}

impl Range {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index: Some(start_index),
            end_index: Some(end_index),
            table: None,
        }
    }

    pub fn collapsed(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Nothing selected at all
    pub fn is_unset(&self) -> bool {
        self.start_index.is_none() && self.end_index.is_none()
    }

    /// Inclusive bounds, with a missing bound taking the other's value
    pub fn bounds(&self) -> Option<(usize, usize)> {
        match (self.start_index, self.end_index) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(start), None) => Some((start, start)),
            (None, Some(end)) => Some((end, end)),
            (None, None) => None,
        }
    }
}

/// Explicit row or column indexes selected for a table batch operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableSelection(Vec<usize>);

impl TableSelection {
    pub fn new(indexes: impl IntoIterator<Item = usize>) -> Self {
        Self(indexes.into_iter().collect())
    }

    /// Expand an inclusive, possibly reversed, index range
    pub fn from_range(start: usize, end: usize) -> Self {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        Self((lo..=hi).collect())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Distinct indexes that exist in a collection of `len` items, ascending
    pub fn in_bounds(&self, len: usize) -> Vec<usize> {
        let mut indexes: Vec<usize> = self.0.iter().copied().filter(|&i| i < len).collect();
        indexes.sort_unstable();
        indexes.dedup();
        indexes
    }
}

impl From<Vec<usize>> for TableSelection {
    fn from(indexes: Vec<usize>) -> Self {
        Self(indexes)
    }
}

impl From<&[usize]> for TableSelection {
    fn from(indexes: &[usize]) -> Self {
        Self(indexes.to_vec())
    }
}
