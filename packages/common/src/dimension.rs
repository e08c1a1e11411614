//! Headless confirm flow of the column width / row height dialogs.
//!
//! ```text
//! raw text → validate → parse cm → cm_to_pixels → NonZeroU32
//! ```
//!
//! The dialog widget itself lives outside this crate. What remains here is
//! the part that decides whether the editor gets called at all, and with
//! which pixel value.

use crate::error::ValidationError;
use crate::units::{cm_to_pixels, pixels_to_cm};
use crate::validator::{parse_positive, Dimension};
use std::num::NonZeroU32;

/// Confirm logic for one dimension dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionDialog {
    pub dimension: Dimension,

    /// Current value of the edited column/row, shown as the default
    pub default_pixels: Option<u32>,
}

impl DimensionDialog {
    pub fn column_width(default_pixels: Option<u32>) -> Self {
        Self {
            dimension: Dimension::ColumnWidth,
            default_pixels,
        }
    }

    pub fn row_height(default_pixels: Option<u32>) -> Self {
        Self {
            dimension: Dimension::RowHeight,
            default_pixels,
        }
    }

    /// Text prefilled in the input, in centimeters; empty without a default
    pub fn default_display(&self) -> String {
        match self.default_pixels {
            Some(px) if px > 0 => format!("{}", pixels_to_cm(px)),
            _ => String::new(),
        }
    }

    /// Validate and convert the user's centimeter input to pixels.
    ///
    /// A value that passes validation but rounds to zero pixels is rejected,
    /// so the table engine only ever receives positive dimensions.
    pub fn confirm(&self, raw: Option<&str>) -> Result<NonZeroU32, ValidationError> {
        let cm = parse_positive(raw, self.dimension)?;
        let pixels = cm_to_pixels(cm);

        tracing::debug!(dimension = %self.dimension, cm, pixels, "Dimension dialog confirmed");

        NonZeroU32::new(pixels).ok_or(ValidationError::BelowOnePixel(self.dimension))
    }
}
