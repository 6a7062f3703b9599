use crate::{
    actions::{Action, Key},
    effect::Effect,
    option::OptionStore,
    search::filter_options,
    state::{FocusTarget, Phase, SelectState},
};

/// Read-only inputs the reducer needs besides state
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    pub options: &'a OptionStore,
    pub searchable: bool,
}

impl ReduceContext<'_> {
    fn visible(&self, state: &SelectState) -> Vec<usize> {
        filter_options(self.options, &state.search_text, self.searchable)
    }
}

/// Root reducer
/// Pure function: takes state and action, returns new state and effects
pub fn reduce(
    ctx: ReduceContext<'_>,
    mut state: SelectState,
    action: &Action,
) -> (SelectState, Vec<Effect>) {
    let mut effects = Vec::new();
    let visible = ctx.visible(&state);

    match action {
        Action::Activate => {
            if state.is_open() {
                close(ctx, &mut state);
            } else {
                open(ctx, &mut state, &mut effects);
            }
        }
        Action::KeyPress(key) if !state.is_open() => {
            if matches!(key, Key::Enter | Key::Space) {
                open(ctx, &mut state, &mut effects);
            }
        }
        Action::KeyPress(key) => match key {
            Key::ArrowDown => {
                state.highlighted = match visible.len() {
                    0 => None,
                    len => Some(state.highlighted.map_or(0, |h| h + 1).min(len - 1)),
                };
            }
            Key::ArrowUp => {
                state.highlighted = match visible.len() {
                    0 => None,
                    len => Some(state.highlighted.map_or(0, |h| h.saturating_sub(1)).min(len - 1)),
                };
            }
            Key::Tab => {
                state.highlighted = match visible.len() {
                    0 => None,
                    len => Some(match state.highlighted {
                        Some(h) if h + 1 < len => h + 1,
                        _ => 0,
                    }),
                };
            }
            Key::BackTab => {
                state.highlighted = match visible.len() {
                    0 => None,
                    len => Some(match state.highlighted {
                        Some(h) if h > 0 && h < len => h - 1,
                        _ => len - 1,
                    }),
                };
            }
            Key::Enter | Key::Space => {
                if let Some(position) = state.highlighted.and_then(|h| visible.get(h).copied()) {
                    commit(ctx, &mut state, position, &mut effects);
                }
            }
            Key::Escape => close(ctx, &mut state),
        },
        Action::SearchInput(c) => {
            if ctx.searchable {
                let mut text = state.search_text.clone();
                text.push(*c);
                change_search(ctx, &mut state, text);
            }
        }
        Action::SearchBackspace => {
            if ctx.searchable && !state.search_text.is_empty() {
                let mut text = state.search_text.clone();
                text.pop();
                change_search(ctx, &mut state, text);
            }
        }
        Action::SetSearchText(text) => {
            if ctx.searchable && *text != state.search_text {
                change_search(ctx, &mut state, text.clone());
            }
        }
        Action::ClickRow(index) => {
            if state.is_open() {
                if let Some(position) = visible.get(*index).copied() {
                    commit(ctx, &mut state, position, &mut effects);
                }
            }
        }
        Action::HoverRow(index) => {
            if state.is_open() && *index < visible.len() {
                state.highlighted = Some(*index);
            }
        }
        Action::LeaveList => {
            if state.is_open() {
                state.highlighted = None;
            }
        }
        Action::FocusGained(target) => {
            state.focus = *target;
            if *target == FocusTarget::SearchField {
                state.highlighted = selected_visible_index(&visible, &state);
            }
        }
        Action::Blur => {
            if state.is_open() {
                close(ctx, &mut state);
            }
            state.focus = FocusTarget::None;
        }
    }

    (state, effects)
}

/// Visible index of the committed option, if it passes the current filter
pub fn selected_visible_index(visible: &[usize], state: &SelectState) -> Option<usize> {
    let selected = state.selected?;
    visible.iter().position(|&position| position == selected)
}

fn open(ctx: ReduceContext<'_>, state: &mut SelectState, effects: &mut Vec<Effect>) {
    state.phase = Phase::Open;
    state.highlighted = selected_visible_index(&ctx.visible(state), state);

    if state.focus == FocusTarget::None {
        state.focus = FocusTarget::Control;
    }
    if ctx.searchable {
        effects.push(Effect::ScheduleFocus(FocusTarget::SearchField));
    }
}

fn close(ctx: ReduceContext<'_>, state: &mut SelectState) {
    state.phase = Phase::Closed;
    state.search_text.clear();
    state.highlighted = selected_visible_index(&ctx.visible(state), state);
}

fn change_search(ctx: ReduceContext<'_>, state: &mut SelectState, text: String) {
    state.search_text = text;
    state.phase = Phase::Open;
    // input only ever comes from the search field
    state.focus = FocusTarget::SearchField;
    state.highlighted = selected_visible_index(&ctx.visible(state), state);
}

fn commit(
    ctx: ReduceContext<'_>,
    state: &mut SelectState,
    position: usize,
    effects: &mut Vec<Effect>,
) {
    state.selected = Some(position);
    effects.push(Effect::NotifyChange { position });
    close(ctx, state);

    if ctx.searchable {
        effects.push(Effect::ScheduleFocus(FocusTarget::SearchField));
    } else {
        state.focus = FocusTarget::None;
    }
}
