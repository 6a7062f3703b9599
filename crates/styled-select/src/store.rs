use std::fmt::Debug;

use crate::{
    actions::Action,
    effect::Effect,
    label::Label,
    option::{IndexedOption, OptionStore, SelectOption},
    reducer::{reduce, selected_visible_index, ReduceContext},
    resolver::resolve_style,
    search::visible_options,
    state::{FocusTarget, SelectProps, SelectState},
    style::StyleDescriptor,
};

/// Text of the single informational row shown when nothing is visible
pub const NO_RESULTS_TEXT: &str = "No results found";

/// Callback invoked with each committed option
pub type ChangeCallback = Box<dyn FnMut(&SelectOption)>;

/// A row of the open list, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// Position in the visible list
    pub index: usize,
    pub option: &'a IndexedOption,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub style: StyleDescriptor,
}

/// What the open list shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent<'a> {
    Rows(Vec<Row<'a>>),
    /// Exactly one informational row; not selectable
    NoResults,
}

/// Redux-style store for one select widget
///
/// Holds the option store and interaction state, dispatches actions through
/// the pure reducer and performs the returned effects: change notifications
/// run synchronously inside `dispatch`, focus transfers wait for `tick`.
pub struct SelectStore {
    options: OptionStore,
    is_searchable: bool,
    placeholder: String,
    class_name: StyleDescriptor,
    state: SelectState,
    on_change: ChangeCallback,
    pending_focus: Vec<FocusTarget>,
}

impl SelectStore {
    /// Create a store; `on_change` is never called during construction
    pub fn new(props: SelectProps, on_change: impl FnMut(&SelectOption) + 'static) -> Self {
        let options = OptionStore::load(props.options);
        let state = SelectState::initial(&options, props.value.as_deref());

        Self {
            options,
            is_searchable: props.is_searchable,
            placeholder: props.placeholder,
            class_name: props.class_name,
            state,
            on_change: Box::new(on_change),
            pending_focus: Vec::new(),
        }
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn options(&self) -> &OptionStore {
        &self.options
    }

    pub fn is_searchable(&self) -> bool {
        self.is_searchable
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn class_name(&self) -> &StyleDescriptor {
        &self.class_name
    }

    fn context(&self) -> ReduceContext<'_> {
        ReduceContext {
            options: &self.options,
            searchable: self.is_searchable,
        }
    }

    /// Dispatch an action to update state
    ///
    /// Effects are executed before returning, so a commit's change callback
    /// has already run when this returns.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("select action: {:?}", action);

        let (new_state, effects) = reduce(self.context(), self.state.clone(), &action);
        self.state = new_state;

        // a released widget must not take focus back on the next tick
        if self.state.focus == FocusTarget::None && !self.pending_focus.is_empty() {
            log::debug!("select dropped {} pending focus request(s)", self.pending_focus.len());
            self.pending_focus.clear();
        }

        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        log::debug!("select effect: {:?}", effect);

        match effect {
            Effect::NotifyChange { position } => {
                if let Some(entry) = self.options.get(position) {
                    log::info!("Selected option '{}'", entry.option.value);
                    (self.on_change)(&entry.option);
                }
            }
            Effect::ScheduleFocus(target) => self.pending_focus.push(target),
        }
    }

    /// Run deferred work queued by the previous dispatches
    ///
    /// The host calls this once per loop iteration, after rendering. Returns
    /// whether anything ran.
    pub fn tick(&mut self) -> bool {
        if self.pending_focus.is_empty() {
            return false;
        }

        for target in std::mem::take(&mut self.pending_focus) {
            if self.state.focus != target {
                self.dispatch(Action::FocusGained(target));
            }
        }
        true
    }

    pub fn has_pending_tick(&self) -> bool {
        !self.pending_focus.is_empty()
    }

    /// Replace the option list
    ///
    /// The selection survives when its value is still present; the highlight
    /// is recomputed against the new visible list.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        let selected_value = self.selected_option().map(|o| o.value.clone());
        self.options = OptionStore::load(options);
        self.state.selected = selected_value.and_then(|v| self.options.position_of(&v));

        let visible = self.visible_positions();
        self.state.highlighted = selected_visible_index(&visible, &self.state);
    }

    fn visible_positions(&self) -> Vec<usize> {
        crate::search::filter_options(&self.options, &self.state.search_text, self.is_searchable)
    }

    /// Options passing the current search, in display order
    pub fn visible(&self) -> Vec<&IndexedOption> {
        visible_options(&self.options, &self.state.search_text, self.is_searchable)
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.state
            .selected
            .and_then(|position| self.options.get(position))
            .map(|entry| &entry.option)
    }

    /// Label for the control header, `None` means show the placeholder
    pub fn display_label(&self) -> Option<&Label> {
        self.selected_option().map(|option| &option.label)
    }

    /// Rows of the open list with their resolved styles
    pub fn list_content(&self) -> ListContent<'_> {
        let visible = self.visible();
        if visible.is_empty() {
            return ListContent::NoResults;
        }

        let rows = visible
            .into_iter()
            .enumerate()
            .map(|(index, option)| {
                let is_selected = self.state.selected == Some(option.position);
                let is_highlighted = self.state.highlighted == Some(index);
                Row {
                    index,
                    option,
                    is_selected,
                    is_highlighted,
                    style: resolve_style(&option.option, is_selected, is_highlighted),
                }
            })
            .collect();

        ListContent::Rows(rows)
    }
}

impl Debug for SelectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectStore")
            .field("option_count", &self.options.len())
            .field("is_searchable", &self.is_searchable)
            .field("state", &self.state)
            .finish()
    }
}
