use ratatui::crossterm::event::{KeyEvent, MouseEvent};

/// Action enum - represents all possible actions in the application
/// Raw terminal input is translated into the other variants by `update`
#[derive(Debug, Clone)]
pub enum Action {
    // Terminal input, forwarded by the event handler
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),

    /// Route a widget action to the select at this index
    Select(usize, styled_select::Action),

    // Focus between selects
    FocusNext,
    FocusPrevious,
    /// Focus a select (if not already) with its natural focus target
    FocusSelect(usize),
    /// Focus leaves every select
    BlurFocused,

    /// Change callback of a select fired (select index, option value)
    SelectionCommitted(usize, String),

    // Event log pane
    ToggleEventLog,
    ScrollEventLogUp,
    ScrollEventLogDown,
    ClearEventLog,

    Quit,
    None,
}
