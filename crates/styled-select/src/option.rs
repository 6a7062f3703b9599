//! Selectable options and the store that indexes them

use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::style::StyleDescriptor;

/// One selectable entry, provided by the host and never mutated by the widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier, unique within the list
    pub value: String,

    pub label: Label,

    /// Base appearance
    #[serde(default)]
    pub style: StyleDescriptor,

    /// Appearance when selected (and, composed, when selected + highlighted)
    #[serde(default)]
    pub highlight_style: Option<StyleDescriptor>,

    /// Appearance when highlighted but not selected
    #[serde(default)]
    pub focus_style: Option<StyleDescriptor>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<StyleDescriptor>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_highlight_style(mut self, style: impl Into<StyleDescriptor>) -> Self {
        self.highlight_style = Some(style.into());
        self
    }

    pub fn with_focus_style(mut self, style: impl Into<StyleDescriptor>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Flattened label text used for searching
    pub fn searchable_text(&self) -> String {
        self.label.flatten_text()
    }
}

/// An option annotated with its load-time position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedOption {
    pub position: usize,
    pub option: SelectOption,
    /// Lowercased label text, computed once at load
    search_key: String,
}

impl IndexedOption {
    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

/// Immutable, position-indexed option list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    entries: Vec<IndexedOption>,
}

impl OptionStore {
    /// Index the host's options in their given order
    pub fn load(options: Vec<SelectOption>) -> Self {
        let entries = options
            .into_iter()
            .enumerate()
            .map(|(position, option)| IndexedOption {
                position,
                search_key: option.searchable_text().to_lowercase(),
                option,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[IndexedOption] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&IndexedOption> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the first option whose value matches
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.option.value == value)
            .map(|entry| entry.position)
    }
}
