//! Interaction state: hover/selection transitions and highlight sets
//!
//! State is a plain value; [`InteractionState::next`] is the reducer and
//! returns `None` when an event leaves the state untouched.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::{find_step, DomainError, ProcessStep, StepDetails};

/// Names connected to `name` in either direction.
///
/// Union of the step's outgoing `connects_to` and every step that connects to
/// it. Names that resolve to no step are left out, and an unknown `name`
/// yields an empty set.
pub fn highlight_set_for(steps: &[ProcessStep], name: &str) -> BTreeSet<String> {
    let Some(step) = find_step(steps, name) else {
        return BTreeSet::new();
    };

    let outgoing = step
        .connects_to
        .iter()
        .filter(|target| find_step(steps, target).is_some())
        .cloned();
    let incoming = steps
        .iter()
        .filter(|s| s.connects(name))
        .map(|s| s.name.clone());

    outgoing.chain(incoming).collect()
}

/// Pointer input the diagram reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Hover(String),
    Unhover,
    ClickNode(String),
    ClickBackground,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Hover(name) => write!(f, "hover={name}"),
            Event::Unhover => f.write_str("unhover"),
            Event::ClickNode(name) => write!(f, "click={name}"),
            Event::ClickBackground => f.write_str("background"),
        }
    }
}

impl FromStr for Event {
    type Err = DomainError;

    /// Parses `hover=<name>`, `unhover`, `click=<name>` and `background`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidEvent {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (kind, arg) = match s.split_once('=') {
            Some((kind, arg)) => (kind.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        match (kind, arg) {
            ("hover", Some(name)) if !name.is_empty() => Ok(Event::Hover(name.to_string())),
            ("click", Some(name)) if !name.is_empty() => Ok(Event::ClickNode(name.to_string())),
            ("hover" | "click", _) => Err(invalid("missing step name")),
            ("unhover", None) => Ok(Event::Unhover),
            ("background", None) => Ok(Event::ClickBackground),
            ("unhover" | "background", Some(_)) => Err(invalid("takes no argument")),
            _ => Err(invalid("expected hover=<name>, unhover, click=<name> or background")),
        }
    }
}

/// At most one step is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered(String),
    Selected(String),
}

impl InteractionState {
    /// State after `event`, or `None` if nothing changes.
    ///
    /// Hover input is ignored while a step is selected; events naming unknown
    /// steps are ignored.
    pub fn next(&self, event: &Event, steps: &[ProcessStep]) -> Option<InteractionState> {
        use InteractionState::*;

        let known = |name: &str| find_step(steps, name).is_some();

        match (self, event) {
            (Selected(current), Event::ClickNode(name)) if current == name => None,
            (_, Event::ClickNode(name)) if known(name.as_str()) => Some(Selected(name.clone())),
            (Selected(_), Event::ClickBackground) => Some(Idle),
            (Selected(_), _) => None,
            (Hovered(current), Event::Hover(name)) if current == name => None,
            (_, Event::Hover(name)) if known(name.as_str()) => Some(Hovered(name.clone())),
            (Hovered(_), Event::Unhover) => Some(Idle),
            _ => None,
        }
    }

    /// The hovered or selected step name.
    pub fn active(&self) -> Option<&str> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Hovered(name) | InteractionState::Selected(name) => Some(name),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            InteractionState::Selected(name) => Some(name),
            _ => None,
        }
    }

    /// Highlight set of the active step; empty when idle.
    pub fn highlights(&self, steps: &[ProcessStep]) -> BTreeSet<String> {
        self.active()
            .map(|name| highlight_set_for(steps, name))
            .unwrap_or_default()
    }

    /// Whether `name` is the active step or connected to it.
    pub fn emphasizes(&self, steps: &[ProcessStep], name: &str) -> bool {
        self.active() == Some(name) || self.highlights(steps).contains(name)
    }

    /// Details view for the selected step.
    pub fn details(&self, steps: &[ProcessStep]) -> Option<StepDetails> {
        self.selected()
            .and_then(|name| find_step(steps, name))
            .map(StepDetails::from)
    }
}

/// Holds the current state and counts real changes.
///
/// The revision is what a renderer watches: it only moves when an event
/// produced a different state.
#[derive(Debug, Clone, Default)]
pub struct InteractionStore {
    state: InteractionState,
    revision: u64,
}

impl InteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `event`; returns whether the state changed.
    pub fn dispatch(&mut self, event: &Event, steps: &[ProcessStep]) -> bool {
        match self.state.next(event, steps) {
            Some(next) => {
                self.state = next;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Apply events in order; returns the events that left the state unchanged.
    pub fn replay<'e>(&mut self, events: impl IntoIterator<Item = &'e Event>, steps: &[ProcessStep]) -> Vec<&'e Event> {
        events
            .into_iter()
            .filter(|event| !self.dispatch(event, steps))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn chain() -> Vec<ProcessStep> {
        vec![
            ProcessStep::new("1", Role::Contributor, "", "", 1, &["2"]),
            ProcessStep::new("2", Role::TeamManager, "", "", 2, &["3"]),
            ProcessStep::new("3", Role::Contributor, "", "", 3, &[]),
        ]
    }

    #[test]
    fn given_event_strings_when_parsing_then_maps_to_events() {
        assert_eq!("hover=Apply".parse::<Event>().unwrap(), Event::Hover("Apply".into()));
        assert_eq!("click= 2 ".parse::<Event>().unwrap(), Event::ClickNode("2".into()));
        assert_eq!("unhover".parse::<Event>().unwrap(), Event::Unhover);
        assert_eq!("background".parse::<Event>().unwrap(), Event::ClickBackground);
        assert!("hover=".parse::<Event>().is_err());
        assert!("background=x".parse::<Event>().is_err());
        assert!("drag=1".parse::<Event>().is_err());
    }

    #[test]
    fn given_event_when_displayed_then_round_trips_through_parse() {
        let event = Event::ClickNode("Send knowledge check".into());
        assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
    }

    #[test]
    fn given_idle_when_hovering_unknown_step_then_ignored() {
        let steps = chain();
        assert_eq!(InteractionState::Idle.next(&Event::Hover("9".into()), &steps), None);
    }

    #[test]
    fn given_selected_when_hovering_then_selection_is_kept() {
        let steps = chain();
        let state = InteractionState::Selected("1".into());
        assert_eq!(state.next(&Event::Hover("2".into()), &steps), None);
        assert_eq!(state.next(&Event::Unhover, &steps), None);
    }

    #[test]
    fn given_selected_when_clicking_other_node_then_switches_selection() {
        let steps = chain();
        let state = InteractionState::Selected("1".into());
        assert_eq!(
            state.next(&Event::ClickNode("3".into()), &steps),
            Some(InteractionState::Selected("3".into()))
        );
    }

    #[test]
    fn given_selected_step_when_asking_details_then_includes_outgoing_connections() {
        let steps = chain();
        let details = InteractionState::Selected("2".into()).details(&steps).unwrap();
        assert_eq!(details.role, Role::TeamManager);
        assert_eq!(details.connects_to, vec!["3".to_string()]);
        assert!(InteractionState::Hovered("2".into()).details(&steps).is_none());
    }
}
