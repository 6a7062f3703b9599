use crate::option::{OptionStore, SelectOption};
use crate::style::StyleDescriptor;

/// Constructor parameters supplied by the host
#[derive(Debug, Clone, Default)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    /// Seeds the initial selection only; later changes are not observed
    pub value: Option<String>,
    pub is_searchable: bool,
    /// Shown when nothing is selected
    pub placeholder: String,
    /// Extra appearance for the outer container
    pub class_name: StyleDescriptor,
}

impl SelectProps {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn searchable(mut self, is_searchable: bool) -> Self {
        self.is_searchable = is_searchable;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<StyleDescriptor>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

/// Which part of the widget holds input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    None,
    Control,
    SearchField,
}

/// Interaction state of one select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectState {
    pub phase: Phase,
    pub search_text: String,
    /// Store position of the committed option
    pub selected: Option<usize>,
    /// Index into the current visible list, `None` when nothing is highlighted
    pub highlighted: Option<usize>,
    pub focus: FocusTarget,
}

impl SelectState {
    /// Closed state with the selection seeded from the host's value
    pub fn initial(options: &OptionStore, value: Option<&str>) -> Self {
        let selected = value.and_then(|v| options.position_of(v));
        if value.is_some() && selected.is_none() {
            log::debug!("Initial value {:?} not among options, starting unselected", value);
        }

        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OptionStore {
        OptionStore::load(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
            SelectOption::new("c", "C"),
        ])
    }

    #[test]
    fn test_initial_selection_from_value() {
        let state = SelectState::initial(&options(), Some("b"));
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.phase, Phase::Closed);
        assert_eq!(state.highlighted, None);
        assert!(state.search_text.is_empty());
    }

    #[test]
    fn test_unknown_value_starts_unselected() {
        assert_eq!(SelectState::initial(&options(), Some("zzz")).selected, None);
        assert_eq!(SelectState::initial(&options(), None).selected, None);
    }

    #[test]
    fn test_props_builder() {
        let props = SelectProps::new(vec![])
            .value("a")
            .searchable(true)
            .placeholder("Buscar 1")
            .class_name("bg-blue-100");

        assert_eq!(props.value.as_deref(), Some("a"));
        assert!(props.is_searchable);
        assert_eq!(props.placeholder, "Buscar 1");
        assert!(props.class_name.background.is_some());
    }
}
