use crate::element::{Element, RadioState};
use crate::host::{RenderOptions, Renderer};
use crate::options::RadioStyle;

/// Standalone radio particle: a radio element outside any control group
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioParticle {
    pub style: RadioStyle,
}

impl RadioParticle {
    pub fn new(style: RadioStyle) -> Self {
        Self { style }
    }

    /// Flip the particle's value, creating a selected state if it had none.
    /// Repaints without relayout or cursor movement.
    pub fn toggle(&self, element: &mut Element, renderer: &mut dyn Renderer) {
        match element.radio.as_mut() {
            Some(radio) => radio.value = !radio.value,
            None => {
                element.radio = Some(RadioState {
                    value: true,
                    code: None,
                })
            }
        }
        renderer.render(RenderOptions::paint_only());
    }

    /// Plain-text glyph for previews
    pub fn glyph(&self, selected: bool) -> &'static str {
        match (self.style, selected) {
            (RadioStyle::Round, true) => "(•)",
            (RadioStyle::Round, false) => "( )",
            (RadioStyle::Square, true) => "[x]",
            (RadioStyle::Square, false) => "[ ]",
        }
    }
}
