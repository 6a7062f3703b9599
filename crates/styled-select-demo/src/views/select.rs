use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use crate::input::ListLayout;
use crate::theme::Theme;
use crate::view_models::select::{ListViewModel, SelectViewModel};

/// Bordered header, one line of content
pub const HEADER_HEIGHT: u16 = 3;
/// Gap between stacked selects
pub const HEADER_GAP: u16 = 1;
/// Most option rows shown at once before the list scrolls
pub const MAX_LIST_ROWS: u16 = 6;

/// Where the dropdown of a select goes and how many rows fit in it
///
/// Opens below the header unless there is more room above.
pub fn list_placement(header: Rect, bounds: Rect, row_count: usize) -> Rect {
    let wanted = (row_count.max(1) as u16).min(MAX_LIST_ROWS) + 2;
    let below = bounds.bottom().saturating_sub(header.bottom());
    let above = header.y.saturating_sub(bounds.y);

    if below >= wanted || below >= above {
        Rect {
            x: header.x,
            y: header.bottom(),
            width: header.width,
            height: wanted.min(below),
        }
    } else {
        let height = wanted.min(above);
        Rect {
            x: header.x,
            y: header.y - height,
            width: header.width,
            height,
        }
    }
}

/// Render the control header of a select
/// Pure presentation - uses pre-computed view model
pub fn render_select_header(f: &mut Frame, area: Rect, vm: &SelectViewModel, theme: &Theme) {
    let block = Block::bordered()
        .title(vm.title.clone())
        .title_style(theme.panel_title())
        .border_style(vm.border_style)
        .style(vm.header_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vm.header_spans.clone())).style(vm.header_style),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(vm.indicator)
            .style(vm.header_style.patch(theme.key_description()))
            .right_aligned(),
        chunks[1],
    );
}

/// Render the open dropdown as an overlay
/// Returns the hit areas for pointer handling
pub fn render_select_list(
    f: &mut Frame,
    area: Rect,
    vm: &ListViewModel,
    theme: &Theme,
) -> ListLayout {
    f.render_widget(Clear, area);

    let mut block = Block::bordered()
        .border_style(theme.select_border(true))
        .style(theme.panel_background());
    if vm.total_rows > vm.rows.len() {
        block = block.title_bottom(
            Line::from(format!(
                " {}-{} of {} ",
                vm.scroll_offset + 1,
                vm.scroll_offset + vm.rows.len(),
                vm.total_rows
            ))
            .style(theme.muted())
            .right_aligned(),
        );
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    // One paragraph per row so the resolved background fills the width
    for (offset, row) in vm.rows.iter().enumerate().take(inner.height as usize) {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + offset as u16,
            width: inner.width,
            height: 1,
        };
        let mut spans = vec![Span::raw(row.indicator)];
        spans.extend(row.spans.iter().cloned());
        if row.is_selected {
            spans.push(Span::raw(" ✓"));
        }
        let style = if row.is_highlighted {
            row.style.add_modifier(Modifier::BOLD)
        } else {
            row.style
        };
        f.render_widget(Paragraph::new(Line::from(spans)).style(style), row_area);
    }

    ListLayout {
        area,
        rows: inner,
        scroll_offset: vm.scroll_offset,
        row_count: vm.selectable_rows().min(inner.height as usize),
    }
}
