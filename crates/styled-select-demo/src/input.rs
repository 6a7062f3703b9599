//! Translation of terminal input into application actions

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
};
use styled_select::{Action as SelectAction, Key};

use crate::actions::Action;

/// Context for key event handling
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEventContext {
    pub focused: Option<usize>,
    pub focused_open: bool,
    pub focused_searchable: bool,
    pub event_log_open: bool,
}

/// Where a select was drawn during the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectLayout {
    pub header: Rect,
    pub list: Option<ListLayout>,
}

/// The open list of a select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Whole list area including borders
    pub area: Rect,
    /// Area holding the rows
    pub rows: Rect,
    /// Visible index of the first drawn row
    pub scroll_offset: usize,
    /// Number of selectable rows drawn (0 for the "no results" row)
    pub row_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Header(usize),
    /// (select index, visible row index)
    Row(usize, usize),
    /// Inside an open list but not on a selectable row
    ListBody(usize),
    Outside,
}

/// Pointer context for mouse handling
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerContext {
    pub focused: Option<usize>,
    pub open_select: Option<usize>,
    pub pointer_in_list: bool,
}

pub fn handle_key_event(key: KeyEvent, ctx: &KeyEventContext) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    let Some(index) = ctx.focused else {
        return match key.code {
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('`') | KeyCode::Char('~') => Action::ToggleEventLog,
            KeyCode::Char('c') if ctx.event_log_open => Action::ClearEventLog,
            KeyCode::Char('j') | KeyCode::Down if ctx.event_log_open => Action::ScrollEventLogDown,
            KeyCode::Char('k') | KeyCode::Up if ctx.event_log_open => Action::ScrollEventLogUp,
            _ => Action::None,
        };
    };

    let select = |action| Action::Select(index, action);

    if ctx.focused_open {
        return match key.code {
            KeyCode::Down => select(SelectAction::KeyPress(Key::ArrowDown)),
            KeyCode::Up => select(SelectAction::KeyPress(Key::ArrowUp)),
            KeyCode::Tab => select(SelectAction::KeyPress(Key::Tab)),
            KeyCode::BackTab => select(SelectAction::KeyPress(Key::BackTab)),
            KeyCode::Enter => select(SelectAction::KeyPress(Key::Enter)),
            KeyCode::Char(' ') => select(SelectAction::KeyPress(Key::Space)),
            KeyCode::Esc => select(SelectAction::KeyPress(Key::Escape)),
            KeyCode::Backspace if ctx.focused_searchable => select(SelectAction::SearchBackspace),
            KeyCode::Char(c) if ctx.focused_searchable => select(SelectAction::SearchInput(c)),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Esc => Action::BlurFocused,
        KeyCode::Enter => select(SelectAction::KeyPress(Key::Enter)),
        KeyCode::Char(' ') => select(SelectAction::KeyPress(Key::Space)),
        KeyCode::Backspace if ctx.focused_searchable => select(SelectAction::SearchBackspace),
        KeyCode::Char(c) if ctx.focused_searchable => select(SelectAction::SearchInput(c)),
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('`') | KeyCode::Char('~') => Action::ToggleEventLog,
        _ => Action::None,
    }
}

/// Find what is under the pointer; open lists are drawn on top so they win
pub fn hit_test(layouts: &[SelectLayout], column: u16, row: u16) -> Hit {
    let position = Position::new(column, row);

    for (index, layout) in layouts.iter().enumerate() {
        let Some(list) = layout.list else {
            continue;
        };
        if list.rows.contains(position) {
            let offset = usize::from(row - list.rows.y);
            if offset < list.row_count {
                return Hit::Row(index, list.scroll_offset + offset);
            }
            return Hit::ListBody(index);
        }
        if list.area.contains(position) {
            return Hit::ListBody(index);
        }
    }

    layouts
        .iter()
        .position(|layout| layout.header.contains(position))
        .map_or(Hit::Outside, Hit::Header)
}

pub fn handle_mouse_event(
    mouse: MouseEvent,
    layouts: &[SelectLayout],
    ctx: &PointerContext,
) -> Vec<Action> {
    let hit = hit_test(layouts, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::Header(index) => vec![
                Action::FocusSelect(index),
                Action::Select(index, SelectAction::Activate),
            ],
            Hit::Row(index, row) => vec![Action::Select(index, SelectAction::ClickRow(row))],
            Hit::ListBody(_) => Vec::new(),
            Hit::Outside if ctx.focused.is_some() => vec![Action::BlurFocused],
            Hit::Outside => Vec::new(),
        },
        MouseEventKind::Moved => {
            let Some(open) = ctx.open_select else {
                return Vec::new();
            };
            match hit {
                Hit::Row(index, row) if index == open => {
                    vec![Action::Select(index, SelectAction::HoverRow(row))]
                }
                _ if ctx.pointer_in_list => vec![Action::Select(open, SelectAction::LeaveList)],
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn layouts() -> Vec<SelectLayout> {
        vec![
            SelectLayout {
                header: Rect::new(0, 0, 20, 3),
                list: Some(ListLayout {
                    area: Rect::new(0, 3, 20, 5),
                    rows: Rect::new(1, 4, 18, 3),
                    scroll_offset: 1,
                    row_count: 2,
                }),
            },
            SelectLayout {
                header: Rect::new(0, 4, 20, 3),
                list: None,
            },
        ]
    }

    #[test]
    fn test_unfocused_keys() {
        let ctx = KeyEventContext::default();
        assert!(matches!(handle_key_event(key(KeyCode::Tab), &ctx), Action::FocusNext));
        assert!(matches!(handle_key_event(key(KeyCode::BackTab), &ctx), Action::FocusPrevious));
        assert!(matches!(handle_key_event(key(KeyCode::Char('q')), &ctx), Action::Quit));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctx = KeyEventContext {
            focused: Some(0),
            focused_open: true,
            focused_searchable: true,
            ..Default::default()
        };
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key_event(event, &ctx), Action::Quit));
    }

    #[test]
    fn test_open_select_consumes_tab() {
        let ctx = KeyEventContext {
            focused: Some(1),
            focused_open: true,
            ..Default::default()
        };
        assert!(matches!(
            handle_key_event(key(KeyCode::Tab), &ctx),
            Action::Select(1, SelectAction::KeyPress(Key::Tab))
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::BackTab), &ctx),
            Action::Select(1, SelectAction::KeyPress(Key::BackTab))
        ));
        // typing does nothing without a search field
        assert!(matches!(handle_key_event(key(KeyCode::Char('x')), &ctx), Action::None));
    }

    #[test]
    fn test_typing_goes_to_search_field() {
        let ctx = KeyEventContext {
            focused: Some(0),
            focused_searchable: true,
            ..Default::default()
        };
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('q')), &ctx),
            Action::Select(0, SelectAction::SearchInput('q'))
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char(' ')), &ctx),
            Action::Select(0, SelectAction::KeyPress(Key::Space))
        ));
    }

    #[test]
    fn test_closed_plain_select_keys() {
        let ctx = KeyEventContext {
            focused: Some(0),
            ..Default::default()
        };
        assert!(matches!(handle_key_event(key(KeyCode::Tab), &ctx), Action::FocusNext));
        assert!(matches!(handle_key_event(key(KeyCode::Esc), &ctx), Action::BlurFocused));
        assert!(matches!(
            handle_key_event(key(KeyCode::Enter), &ctx),
            Action::Select(0, SelectAction::KeyPress(Key::Enter))
        ));
        assert!(matches!(handle_key_event(key(KeyCode::Char('q')), &ctx), Action::Quit));
    }

    #[test]
    fn test_hit_test_prefers_open_list() {
        let layouts = layouts();
        assert_eq!(hit_test(&layouts, 5, 1), Hit::Header(0));
        // row area overlaps the second header
        assert_eq!(hit_test(&layouts, 5, 4), Hit::Row(0, 1));
        assert_eq!(hit_test(&layouts, 5, 5), Hit::Row(0, 2));
        assert_eq!(hit_test(&layouts, 5, 6), Hit::ListBody(0));
        assert_eq!(hit_test(&layouts, 0, 4), Hit::ListBody(0));
        assert_eq!(hit_test(&layouts, 30, 30), Hit::Outside);
    }

    #[test]
    fn test_click_mapping() {
        let layouts = layouts();
        let ctx = PointerContext {
            focused: Some(0),
            open_select: Some(0),
            pointer_in_list: false,
        };

        let actions = handle_mouse_event(click(5, 5), &layouts, &ctx);
        assert!(matches!(actions.as_slice(), [Action::Select(0, SelectAction::ClickRow(2))]));

        let actions = handle_mouse_event(click(5, 1), &layouts, &ctx);
        assert!(matches!(
            actions.as_slice(),
            [Action::FocusSelect(0), Action::Select(0, SelectAction::Activate)]
        ));

        let actions = handle_mouse_event(click(40, 40), &layouts, &ctx);
        assert!(matches!(actions.as_slice(), [Action::BlurFocused]));
    }

    #[test]
    fn test_hover_and_leave_mapping() {
        let layouts = layouts();
        let mut ctx = PointerContext {
            focused: Some(0),
            open_select: Some(0),
            pointer_in_list: false,
        };

        let actions = handle_mouse_event(mouse(MouseEventKind::Moved, 5, 4), &layouts, &ctx);
        assert!(matches!(actions.as_slice(), [Action::Select(0, SelectAction::HoverRow(1))]));

        // moving around outside without having entered the list does nothing
        let actions = handle_mouse_event(mouse(MouseEventKind::Moved, 40, 40), &layouts, &ctx);
        assert!(actions.is_empty());

        ctx.pointer_in_list = true;
        let actions = handle_mouse_event(mouse(MouseEventKind::Moved, 40, 40), &layouts, &ctx);
        assert!(matches!(actions.as_slice(), [Action::Select(0, SelectAction::LeaveList)]));
    }
}
