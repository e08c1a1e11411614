//! # Form Controls
//!
//! Single-choice (radio) controls and the group index used to find the
//! members of a control group without scanning the whole element list.

mod particle;
mod radio;

pub use particle::RadioParticle;
pub use radio::{RadioControl, SelectOutcome, SkipReason};

use crate::element::Element;
use crate::host::{ContentNotifier, ControlRule, Renderer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload describing which control an operation acts on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlContext {
    /// Position of the acted-on element in its element list
    pub element_index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Per-call rule overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRuleOption {
    /// Apply the change even when the host reports the control disabled
    #[serde(default)]
    pub ignore_disabled_rule: bool,
}

/// Everything a control operation needs from the host
pub trait ControlHost: Renderer + ContentNotifier + ControlRule {}

impl<T: Renderer + ContentNotifier + ControlRule> ControlHost for T {}

/// Positions of the single-choice members of each control group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlGroupIndex {
    groups: HashMap<String, Vec<usize>>,
}

impl ControlGroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every exclusive-choice element that belongs to a group
    pub fn build(elements: &[Element]) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, element) in elements.iter().enumerate() {
            if !element.is_exclusive_choice() {
                continue;
            }
            if let Some(group_id) = element.group_id() {
                groups.entry(group_id.to_string()).or_default().push(index);
            }
        }

        tracing::debug!(groups = groups.len(), "Control group index built");
        Self { groups }
    }

    /// Member positions of `group_id`, ascending
    pub fn members(&self, group_id: &str) -> &[usize] {
        self.groups.get(group_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
