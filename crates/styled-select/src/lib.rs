//! Styled select widget core
//!
//! This crate provides the behaviour of a single-choice selection list:
//! - Option store with stable positions
//! - Case-insensitive search over nested labels
//! - Open/closed state machine with keyboard and pointer navigation
//! - Style resolution for selected / highlighted rows
//!
//! Rendering is left to the host; the store exposes ready-to-draw rows.
//!
//! # Example
//!
//! ```rust
//! use styled_select::{Action, Key, SelectOption, SelectProps, SelectStore};
//!
//! let options = vec![
//!     SelectOption::new("a", "Alpha"),
//!     SelectOption::new("b", "Beta"),
//!     SelectOption::new("c", "Gamma"),
//! ];
//!
//! let mut select = SelectStore::new(SelectProps::new(options).value("b"), |option| {
//!     println!("picked {}", option.value);
//! });
//!
//! select.dispatch(Action::Activate);
//! select.dispatch(Action::KeyPress(Key::ArrowDown));
//! select.dispatch(Action::KeyPress(Key::Enter));
//!
//! assert_eq!(select.selected_option().map(|o| o.value.as_str()), Some("c"));
//! ```

mod actions;
mod effect;
mod label;
mod option;
mod reducer;
mod resolver;
mod search;
mod state;
mod store;
mod style;

pub use actions::{Action, Key};
pub use effect::Effect;
pub use label::{Label, LabelLeaf};
pub use option::{IndexedOption, OptionStore, SelectOption};
pub use reducer::{reduce, ReduceContext};
pub use resolver::{
    default_focus_style, default_selected_highlight_style, default_selected_style, resolve_style,
};
pub use search::{filter_options, visible_options};
pub use state::{FocusTarget, Phase, SelectProps, SelectState};
pub use store::{ChangeCallback, ListContent, Row, SelectStore, NO_RESULTS_TEXT};
pub use style::{Hue, Shade, StyleDescriptor, StyleError, TwColor};
