use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - colours for everything around the selects
///
/// Option rows carry their own styles; this only covers chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Borders
    pub border: Color,
    pub focus_ring: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme (default) - white panels, gray borders, blue focus ring
    pub fn light() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c100,
            bg_panel: tailwind::WHITE,

            text_primary: tailwind::GRAY.c800,
            text_secondary: tailwind::GRAY.c600,
            text_muted: tailwind::GRAY.c400,

            accent_primary: tailwind::BLUE.c500,

            border: tailwind::GRAY.c300,
            focus_ring: tailwind::BLUE.c500,

            status_success: tailwind::GREEN.c600,
            status_error: tailwind::RED.c600,
            status_warning: tailwind::AMBER.c600,
            status_info: tailwind::BLUE.c600,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (dropdown list, event log)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    /// Border of a select, depending on focus
    pub fn select_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.focus_ring)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Tab" in "Tab next")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for muted/helper text (placeholder, "No results found")
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for log line timestamps
    pub fn log_metadata(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.bg_panel)
    }

    /// Colour of a log level label
    pub fn log_level(&self, level: ::log::Level) -> Style {
        let color = match level {
            ::log::Level::Error => self.status_error,
            ::log::Level::Warn => self.status_warning,
            ::log::Level::Info => self.status_info,
            ::log::Level::Debug | ::log::Level::Trace => self.text_muted,
        };
        Style::default().fg(color).bg(self.bg_panel)
    }
}
