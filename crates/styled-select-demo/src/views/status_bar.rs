use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::Paragraph,
};

use crate::theme::Theme;
use crate::view_models::status_bar::StatusBarViewModel;

/// Render the bottom line: committed values on the left, key hints on the right
pub fn render_status_bar(f: &mut Frame, area: Rect, vm: &StatusBarViewModel, theme: &Theme) {
    let style = StatusBarViewModel::bar_style(theme);
    let hints_width = vm
        .hints
        .iter()
        .map(|span| span.width() as u16)
        .sum::<u16>();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vm.selections.clone())).style(style),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vm.hints.clone()))
            .style(style)
            .right_aligned(),
        chunks[1],
    );
}
