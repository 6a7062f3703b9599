use ratatui::{
    style::{Modifier, Style},
    text::Span,
};
use styled_select::{FocusTarget, Label, LabelLeaf, ListContent, SelectStore, NO_RESULTS_TEXT};

use crate::theme::Theme;

/// Caret drawn in the header while the search field has focus
const CURSOR: &str = "▏";

/// View model for one select - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct SelectViewModel {
    /// Block title
    pub title: String,
    /// Header content: search text, selected label or placeholder
    pub header_spans: Vec<Span<'static>>,
    /// Header style (container class plus the selected option's base style)
    pub header_style: Style,
    pub border_style: Style,
    /// "▼" closed, "▲" open
    pub indicator: &'static str,
    /// Present while the dropdown is open
    pub list: Option<ListViewModel>,
}

/// The open dropdown
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Pre-computed visible rows with resolved styles applied
    pub rows: Vec<OptionRow>,
    /// Visible index of the first row in `rows`
    pub scroll_offset: usize,
    /// Number of rows passing the search
    pub total_rows: usize,
    /// Single "No results found" row instead of options
    pub no_results: bool,
}

#[derive(Debug, Clone)]
pub struct OptionRow {
    /// "› " on the highlighted row, blank otherwise
    pub indicator: &'static str,
    pub spans: Vec<Span<'static>>,
    pub style: Style,
    pub is_selected: bool,
    pub is_highlighted: bool,
}

impl SelectViewModel {
    /// Build view model from a select store
    pub fn from_store(
        store: &SelectStore,
        title: &str,
        is_focused: bool,
        visible_height: usize,
        theme: &Theme,
    ) -> Self {
        let state = store.state();
        let container = store.class_name().to_style();
        let search_focused = state.focus == FocusTarget::SearchField;

        let mut header_spans = Vec::new();
        let mut header_style = container;

        if !state.search_text.is_empty() {
            header_spans.push(Span::styled(state.search_text.clone(), theme.text()));
            if search_focused {
                header_spans.push(Span::styled(CURSOR, theme.key_hint()));
            }
        } else {
            if search_focused {
                header_spans.push(Span::styled(CURSOR, theme.key_hint()));
            }
            match store.selected_option() {
                Some(option) => {
                    header_style = container.patch(option.style.to_style());
                    header_spans.extend(label_spans(&option.label));
                }
                None => {
                    let placeholder = store.placeholder().to_string();
                    header_spans.push(Span::styled(placeholder, theme.muted()));
                }
            }
        }

        let list = state
            .is_open()
            .then(|| ListViewModel::from_store(store, visible_height, theme));

        Self {
            title: format!(" {} ", title),
            header_spans,
            header_style,
            border_style: theme.select_border(is_focused),
            indicator: if state.is_open() { "▲" } else { "▼" },
            list,
        }
    }
}

impl ListViewModel {
    fn from_store(store: &SelectStore, visible_height: usize, theme: &Theme) -> Self {
        let rows = match store.list_content() {
            ListContent::NoResults => {
                return Self {
                    rows: vec![OptionRow {
                        indicator: "  ",
                        spans: vec![Span::raw(NO_RESULTS_TEXT)],
                        style: theme.muted().add_modifier(Modifier::ITALIC),
                        is_selected: false,
                        is_highlighted: false,
                    }],
                    scroll_offset: 0,
                    total_rows: 0,
                    no_results: true,
                };
            }
            ListContent::Rows(rows) => rows,
        };

        let total_rows = rows.len();
        let scroll_offset = scroll_offset(
            store.state().highlighted.unwrap_or(0),
            total_rows,
            visible_height,
        );

        let rows = rows
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .map(|row| OptionRow {
                indicator: if row.is_highlighted { "› " } else { "  " },
                spans: label_spans(&row.option.option.label),
                style: row.style.to_style(),
                is_selected: row.is_selected,
                is_highlighted: row.is_highlighted,
            })
            .collect();

        Self {
            rows,
            scroll_offset,
            total_rows,
            no_results: false,
        }
    }

    /// Number of rows the pointer can hit
    pub fn selectable_rows(&self) -> usize {
        if self.no_results { 0 } else { self.rows.len() }
    }
}

/// Calculate scroll offset to keep the highlighted row visible
fn scroll_offset(highlighted: usize, total: usize, visible_height: usize) -> usize {
    if total <= visible_height {
        0
    } else if highlighted < visible_height / 2 {
        0
    } else if highlighted >= total.saturating_sub(visible_height / 2) {
        total.saturating_sub(visible_height)
    } else {
        highlighted.saturating_sub(visible_height / 2)
    }
}

/// One span per label leaf, glyphs in bold
fn label_spans(label: &Label) -> Vec<Span<'static>> {
    label
        .leaves()
        .into_iter()
        .map(|leaf| match leaf {
            LabelLeaf::Text(text) => Span::raw(text.to_string()),
            LabelLeaf::Glyph(glyph) => {
                Span::styled(glyph.to_string(), Style::default().add_modifier(Modifier::BOLD))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use styled_select::{Action, Hue, Key, SelectOption, SelectProps, Shade, TwColor};

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn store(searchable: bool, count: usize) -> SelectStore {
        let options = (0..count)
            .map(|i| {
                let label = Label::node([Label::glyph("* "), Label::text(format!("Item {i}"))]);
                SelectOption::new(format!("v{i}"), label).with_style("bg-pink-100")
            })
            .collect();
        SelectStore::new(
            SelectProps::new(options)
                .searchable(searchable)
                .placeholder("Pick one"),
            |_| {},
        )
    }

    #[test]
    fn test_closed_header_shows_placeholder() {
        let theme = Theme::default();
        let vm = SelectViewModel::from_store(&store(false, 3), "Role", false, 5, &theme);

        assert_eq!(text(&vm.header_spans), "Pick one");
        assert_eq!(vm.header_spans[0].style, theme.muted());
        assert_eq!(vm.indicator, "▼");
        assert_eq!(vm.title, " Role ");
        assert!(vm.list.is_none());
    }

    #[test]
    fn test_header_uses_selected_label_and_style() {
        let theme = Theme::default();
        let mut store = store(false, 3);
        store.dispatch(Action::Activate);
        store.dispatch(Action::KeyPress(Key::ArrowDown));
        store.dispatch(Action::KeyPress(Key::Enter));

        let vm = SelectViewModel::from_store(&store, "Role", true, 5, &theme);
        assert_eq!(text(&vm.header_spans), "* Item 0");
        assert_eq!(
            vm.header_style.bg,
            TwColor::shaded(Hue::Pink, Shade::C100).to_color()
        );
        assert_eq!(vm.border_style, theme.select_border(true));
    }

    #[test]
    fn test_search_text_replaces_label() {
        let theme = Theme::default();
        let mut store = store(true, 3);
        store.dispatch(Action::SearchInput('2'));
        store.tick();

        let vm = SelectViewModel::from_store(&store, "Role", true, 5, &theme);
        assert_eq!(text(&vm.header_spans), format!("2{CURSOR}"));

        let list = vm.list.unwrap();
        assert_eq!(list.total_rows, 1);
        assert_eq!(text(&list.rows[0].spans), "* Item 2");
    }

    #[test]
    fn test_no_results_row() {
        let theme = Theme::default();
        let mut store = store(false, 0);
        store.dispatch(Action::Activate);

        let list = SelectViewModel::from_store(&store, "Empty", true, 5, &theme)
            .list
            .unwrap();
        assert!(list.no_results);
        assert_eq!(list.selectable_rows(), 0);
        assert_eq!(text(&list.rows[0].spans), NO_RESULTS_TEXT);
    }

    #[test]
    fn test_list_scrolls_with_highlight() {
        let theme = Theme::default();
        let mut store = store(false, 10);
        store.dispatch(Action::Activate);
        for _ in 0..8 {
            store.dispatch(Action::KeyPress(Key::ArrowDown));
        }
        assert_eq!(store.state().highlighted, Some(7));

        let list = SelectViewModel::from_store(&store, "Role", true, 4, &theme)
            .list
            .unwrap();
        assert_eq!(list.scroll_offset, 5);
        assert_eq!(list.rows.len(), 4);
        assert!(list.rows[2].is_highlighted);
        assert_eq!(list.rows[2].indicator, "› ");
    }

    #[test]
    fn test_scroll_offset_bounds() {
        assert_eq!(scroll_offset(0, 3, 5), 0);
        assert_eq!(scroll_offset(1, 10, 4), 0);
        assert_eq!(scroll_offset(9, 10, 4), 6);
        assert_eq!(scroll_offset(5, 10, 4), 3);
    }
}
