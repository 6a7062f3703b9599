use crate::state::FocusTarget;

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    Tab,
    /// Shift+Tab
    BackTab,
}

/// Action enum - every input event the widget understands
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click on the control header
    Activate,
    KeyPress(Key),

    // Search field editing (ignored unless searchable)
    SearchInput(char),
    SearchBackspace,
    SetSearchText(String),

    // Pointer over the open list, by visible index
    ClickRow(usize),
    HoverRow(usize),
    LeaveList,

    // Focus ownership
    FocusGained(FocusTarget),
    /// Focus moved outside the widget
    Blur,
}
