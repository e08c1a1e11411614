use super::{ControlContext, ControlGroupIndex, ControlHost, ControlRuleOption};
use crate::element::{Control, Element};
use crate::host::RenderOptions;
use tracing::debug;

/// Why a selection request changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The host rule reports the control disabled
    Disabled,
    /// The control index points past the element list
    NotFound,
    /// The clicked element has no group
    NoGroup,
}

/// Result of a selection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Skipped(SkipReason),

    /// The group was swept; `selected` is the code now selected, if any
    Applied {
        selected: Option<String>,
        members: usize,
    },
}

/// A single-choice control rooted at one element of an element list.
///
/// The control borrows nothing between calls; each operation receives the
/// element list it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioControl {
    index: usize,
}

impl RadioControl {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn element<'a>(&self, elements: &'a [Element]) -> Option<&'a Element> {
        elements.get(self.index)
    }

    /// The group's selected code as seen from this element
    pub fn code<'a>(&self, elements: &'a [Element]) -> Option<&'a str> {
        self.element(elements)?.control.as_ref()?.code.as_deref()
    }

    /// The elements making up this control's value
    pub fn value<'a>(&self, elements: &'a [Element]) -> &'a [Element] {
        elements.get(self.index..=self.index).unwrap_or(&[])
    }

    /// Select `clicked_code` within this control's group.
    ///
    /// Clicking the option that is already selected deselects the whole
    /// group. Deselected members keep their `control.code`; only newly
    /// selected members have it synchronized to the selected code.
    ///
    /// With `group_index` the sweep visits only indexed members, otherwise
    /// it scans the whole list.
    pub fn set_select(
        &self,
        clicked_code: &str,
        elements: &mut [Element],
        group_index: Option<&ControlGroupIndex>,
        options: ControlRuleOption,
        host: &mut dyn ControlHost,
    ) -> SelectOutcome {
        let Some(element) = elements.get(self.index) else {
            return SelectOutcome::Skipped(SkipReason::NotFound);
        };

        let context = ControlContext {
            element_index: self.index,
            group_id: element.group_id().map(str::to_string),
        };

        if !options.ignore_disabled_rule && host.is_disabled_control(&context) {
            debug!(index = self.index, "Control disabled, selection ignored");
            return SelectOutcome::Skipped(SkipReason::Disabled);
        }

        let Some(group_id) = context.group_id.clone() else {
            return SelectOutcome::Skipped(SkipReason::NoGroup);
        };

        let toggles_off = element
            .radio
            .as_ref()
            .is_some_and(|radio| radio.value && radio.code.as_deref() == Some(clicked_code));
        let target = (!toggles_off).then_some(clicked_code);

        let members = match group_index {
            Some(index) => {
                let mut members = 0;
                for &position in index.members(&group_id) {
                    if let Some(member) = elements.get_mut(position) {
                        if sweep_member(member, &group_id, target) {
                            members += 1;
                        }
                    }
                }
                members
            }
            None => elements
                .iter_mut()
                .map(|member| sweep_member(member, &group_id, target))
                .filter(|&swept| swept)
                .count(),
        };

        debug!(
            group_id = %group_id,
            selected = ?target,
            members,
            "Swept radio group"
        );

        host.render(RenderOptions::without_cursor());
        host.emit_control_content_change(&context);

        SelectOutcome::Applied {
            selected: target.map(str::to_string),
            members,
        }
    }

    /// Direct text edits never change a single-choice control
    pub fn set_value(&self) -> i64 {
        -1
    }

    pub fn keydown(&self) -> Option<usize> {
        None
    }

    pub fn cut(&self) -> i64 {
        -1
    }
}

/// Apply the exclusivity rule to one element. Returns whether it was a
/// member of the group.
fn sweep_member(element: &mut Element, group_id: &str, target: Option<&str>) -> bool {
    if element.group_id() != Some(group_id) || !element.is_exclusive_choice() {
        return false;
    }
    let Some(radio) = element.radio.as_mut() else {
        return false;
    };

    let selected = target.is_some() && radio.code.as_deref() == target;
    radio.value = selected;

    if selected {
        let control = element.control.get_or_insert_with(Control::default);
        control.code = target.map(str::to_string);
    }
    true
}
