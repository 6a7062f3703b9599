/// Effect system for the select reducer
/// The reducer returns (State, Vec<Effect>); the store performs the effects
use crate::state::FocusTarget;

/// Effects that the reducer can request to be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Report a committed option (store position) to the change callback
    NotifyChange { position: usize },

    /// Move focus on the next tick, once the target is interactable
    ScheduleFocus(FocusTarget),
}
