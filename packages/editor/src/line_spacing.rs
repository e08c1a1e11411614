//! # Line Spacing
//!
//! Per-element line spacing over a selection range.
//!
//! Line spacing is a property of text elements only. Table row heights are
//! stored separately and nothing here reads or writes them, including for
//! text inside table cells.

use crate::element::Element;
use crate::host::{RenderOptions, Renderer};
use crate::selection::Range;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

pub const MIN_LINE_SPACING: f64 = 0.1;
pub const MAX_LINE_SPACING: f64 = 3.0;
pub const DEFAULT_LINE_SPACING: f64 = 1.0;

/// One entry of the line spacing menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpacingOption {
    pub label: Cow<'static, str>,
    pub value: f64,
}

const fn option(label: &'static str, value: f64) -> LineSpacingOption {
    LineSpacingOption {
        label: Cow::Borrowed(label),
        value,
    }
}

/// 0.1 to 0.9 in steps of 0.1, then 1.0 to 3.0 in steps of 0.5
pub const LINE_SPACING_OPTIONS: [LineSpacingOption; 14] = [
    option("0.1", 0.1),
    option("0.2", 0.2),
    option("0.3", 0.3),
    option("0.4", 0.4),
    option("0.5", 0.5),
    option("0.6", 0.6),
    option("0.7", 0.7),
    option("0.8", 0.8),
    option("0.9", 0.9),
    option("1.0", 1.0),
    option("1.5", 1.5),
    option("2.0", 2.0),
    option("2.5", 2.5),
    option("3.0", 3.0),
];

pub fn is_valid_line_spacing(spacing: f64) -> bool {
    (MIN_LINE_SPACING..=MAX_LINE_SPACING).contains(&spacing)
}

/// Assign `spacing` to every element in the inclusive range.
///
/// Does nothing for a spacing outside `[0.1, 3.0]` or an unset range.
/// Returns the number of elements updated.
pub fn set_line_spacing(
    elements: &mut [Element],
    range: &Range,
    spacing: f64,
    renderer: &mut dyn Renderer,
) -> usize {
    if !is_valid_line_spacing(spacing) {
        debug!(spacing, "Line spacing out of range, ignored");
        return 0;
    }
    let Some((start, end)) = range.bounds() else {
        debug!("No selection, line spacing ignored");
        return 0;
    };

    let mut updated = 0;
    for element in elements.iter_mut().take(end.saturating_add(1)).skip(start) {
        element.line_spacing = Some(spacing);
        updated += 1;
    }

    debug!(start, end, spacing, updated, "Set line spacing");

    renderer.render(RenderOptions::at(end));
    updated
}

/// Spacing of the element at the selection start, or the default
pub fn current_line_spacing(elements: &[Element], range: &Range) -> f64 {
    range
        .start_index
        .and_then(|start| elements.get(start))
        .and_then(|element| element.line_spacing)
        .unwrap_or(DEFAULT_LINE_SPACING)
}
