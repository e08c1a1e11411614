//! Editor options relevant to the mutation core.

use crate::line_spacing::{LineSpacingOption, LINE_SPACING_OPTIONS};
use serde::{Deserialize, Serialize};

/// How single-choice controls are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadioStyle {
    #[default]
    Round,
    /// Square box with a tick, checkbox look
    Square,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioOptions {
    #[serde(default)]
    pub style: RadioStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOptions {
    #[serde(default)]
    pub radio: RadioOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    #[serde(default)]
    pub control: ControlOptions,

    /// Entries offered by the line spacing menu
    #[serde(default = "default_line_spacing_options")]
    pub line_spacing_options: Vec<LineSpacingOption>,
}

fn default_line_spacing_options() -> Vec<LineSpacingOption> {
    LINE_SPACING_OPTIONS.to_vec()
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            control: ControlOptions::default(),
            line_spacing_options: default_line_spacing_options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let json = r#"{ "control": { "radio": { "style": "square" } } }"#;
        let options: EditorOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.control.radio.style, RadioStyle::Square);
        assert_eq!(options.line_spacing_options.len(), LINE_SPACING_OPTIONS.len());
    }

    #[test]
    fn test_default_options() {
        let options = EditorOptions::default();
        assert_eq!(options.control.radio.style, RadioStyle::Round);
    }
}
