use ratatui::{
    prelude::*,
    widgets::{Block, Clear, List, ListItem},
};

use crate::log_capture::LogBuffer;
use crate::theme::Theme;

/// Scroll state of the event log pane
#[derive(Debug, Clone)]
pub struct EventLogState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    /// Percentage of the screen height the pane covers
    pub height_percent: u16,
    /// Rows visible during the last draw
    pub viewport_height: usize,
}

impl Default for EventLogState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            viewport_height: 0,
        }
    }
}

/// Render the event log as a drop-down panel over the top of the screen
/// Returns the visible viewport height for scrolling
pub fn render_event_log(
    f: &mut Frame,
    area: Rect,
    logs: &LogBuffer,
    state: &EventLogState,
    theme: &Theme,
) -> usize {
    let pane_height = (area.height * state.height_percent) / 100;
    let pane_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: pane_height.min(area.height),
    };

    f.render_widget(Clear, pane_area);

    let Ok(logs) = logs.lock() else {
        return 0;
    };

    let visible_height = pane_height.saturating_sub(2) as usize;
    let total_logs = logs.len();

    let scroll_offset = if state.auto_scroll {
        total_logs.saturating_sub(visible_height)
    } else {
        state
            .scroll_offset
            .min(total_logs.saturating_sub(visible_height))
    };

    let items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let target = if entry.target.len() > 20 {
                format!("{}...", &entry.target[..17])
            } else {
                format!("{:20}", entry.target)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S%.3f")),
                    theme.log_metadata(),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.to_string().to_uppercase()),
                    theme.log_level(entry.level),
                ),
                Span::styled(format!("{} ", target), theme.log_metadata()),
                Span::styled(entry.message.clone(), theme.text()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::bordered()
            .title(format!(
                " Event Log ({}/{}) {} ",
                scroll_offset + visible_height.min(total_logs),
                total_logs,
                if state.auto_scroll { "[AUTO]" } else { "[MANUAL]" }
            ))
            .title_bottom(" ` Close | j/k Scroll | c Clear ")
            .title_style(theme.panel_title())
            .border_style(theme.select_border(true))
            .style(theme.panel_background()),
    );

    f.render_widget(list, pane_area);

    visible_height
}
