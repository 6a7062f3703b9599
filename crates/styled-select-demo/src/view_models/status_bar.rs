use ratatui::{style::Style, text::Span};

use crate::theme::Theme;

/// View model for the bottom status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// "title: value" per select, or "title: -" before the first commit
    pub selections: Vec<Span<'static>>,
    /// Key hints matching the current interaction mode
    pub hints: Vec<Span<'static>>,
}

/// What a select last committed, as shown in the status bar
pub struct CommittedValue<'a> {
    pub title: &'a str,
    pub value: Option<&'a str>,
}

impl StatusBarViewModel {
    pub fn new(committed: &[CommittedValue<'_>], select_open: bool, theme: &Theme) -> Self {
        let mut selections = Vec::new();
        for (i, entry) in committed.iter().enumerate() {
            if i > 0 {
                selections.push(Span::styled("  ", theme.muted()));
            }
            selections.push(Span::styled(format!("{}: ", entry.title), theme.key_description()));
            match entry.value {
                Some(value) => selections.push(Span::styled(value.to_string(), theme.success())),
                None => selections.push(Span::styled("-", theme.muted())),
            }
        }

        let keys: &[(&str, &str)] = if select_open {
            &[
                ("↑↓/Tab", "move"),
                ("Enter", "choose"),
                ("Esc", "close"),
            ]
        } else {
            &[
                ("Tab", "next"),
                ("Enter", "open"),
                ("`", "log"),
                ("q", "quit"),
            ]
        };

        let mut hints = Vec::new();
        for (key, description) in keys {
            hints.push(Span::styled(key.to_string(), theme.key_hint()));
            hints.push(Span::styled(format!(" {}  ", description), theme.key_description()));
        }

        Self { selections, hints }
    }

    /// Style of the bar itself
    pub fn bar_style(theme: &Theme) -> Style {
        theme.panel_background()
    }
}
