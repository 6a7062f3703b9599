//! Row style resolution from selection and highlight flags

use crate::option::SelectOption;
use crate::style::{Hue, Shade, StyleDescriptor, TwColor};

/// Built-in "selected" appearance (`bg-blue-400`)
pub fn default_selected_style() -> StyleDescriptor {
    StyleDescriptor::new().with_background(TwColor::shaded(Hue::Blue, Shade::C400))
}

/// Built-in "selected + highlighted" appearance (`bg-blue-500 active:bg-blue-400`)
pub fn default_selected_highlight_style() -> StyleDescriptor {
    StyleDescriptor::new()
        .with_background(TwColor::shaded(Hue::Blue, Shade::C500))
        .with_active_background(TwColor::shaded(Hue::Blue, Shade::C400))
}

/// Built-in "highlighted" appearance (`bg-blue-200 active:bg-blue-300`)
pub fn default_focus_style() -> StyleDescriptor {
    StyleDescriptor::new()
        .with_background(TwColor::shaded(Hue::Blue, Shade::C200))
        .with_active_background(TwColor::shaded(Hue::Blue, Shade::C300))
}

/// Resolve the appearance of a row
///
/// Precedence, highest first: selected + highlighted, selected, highlighted,
/// plain. Whenever a state style applies, the option's own background is
/// dropped before the state style is laid over it.
pub fn resolve_style(
    option: &SelectOption,
    is_selected: bool,
    is_highlighted: bool,
) -> StyleDescriptor {
    let base = || option.style.clone().without_background();

    match (is_selected, is_highlighted) {
        (true, true) => {
            let composed = option.highlight_style.as_ref().and_then(|highlight| {
                highlight
                    .promote_hover()
                    .or_else(|| highlight.darken_background())
            });
            base().overlay(&composed.unwrap_or_else(default_selected_highlight_style))
        }
        (true, false) => match &option.highlight_style {
            Some(highlight) => base().overlay(highlight),
            None => base().overlay(&default_selected_style()),
        },
        (false, true) => match &option.focus_style {
            Some(focus) => base().overlay(focus),
            None => base().overlay(&default_focus_style()),
        },
        (false, false) => option.style.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_option() -> SelectOption {
        SelectOption::new("option1", "Diseño UX").with_style("bg-pink-100 text-purple-800")
    }

    fn bg(hue: Hue, shade: Shade) -> Option<TwColor> {
        Some(TwColor::shaded(hue, shade))
    }

    #[test]
    fn test_plain_row_keeps_option_style() {
        let option = sample_option();
        assert_eq!(resolve_style(&option, false, false), option.style);
    }

    #[test]
    fn test_selected_uses_highlight_style_over_stripped_base() {
        let option = sample_option().with_highlight_style("bg-pink-200");
        let style = resolve_style(&option, true, false);

        assert_eq!(style.background, bg(Hue::Pink, Shade::C200));
        assert_eq!(style.text_color, bg(Hue::Purple, Shade::C800));
    }

    #[test]
    fn test_selected_falls_back_to_default() {
        let style = resolve_style(&sample_option(), true, false);
        assert_eq!(style.background, bg(Hue::Blue, Shade::C400));
        assert_eq!(style.text_color, bg(Hue::Purple, Shade::C800));
    }

    #[test]
    fn test_highlighted_uses_focus_style_or_default() {
        let custom = sample_option().with_focus_style("bg-green-50");
        assert_eq!(
            resolve_style(&custom, false, true).background,
            bg(Hue::Green, Shade::C50)
        );

        let style = resolve_style(&sample_option(), false, true);
        assert_eq!(style.background, bg(Hue::Blue, Shade::C200));
        assert_eq!(style.active_background, bg(Hue::Blue, Shade::C300));
    }

    #[test]
    fn test_selected_and_highlighted_promotes_hover() {
        let option =
            sample_option().with_highlight_style("bg-pink-200 hover:bg-pink-400 font-bold");
        let style = resolve_style(&option, true, true);

        assert_eq!(style.background, bg(Hue::Pink, Shade::C400));
        assert_eq!(style.hover_background, None);
        assert_eq!(style.extras, vec!["font-bold"]);
    }

    #[test]
    fn test_selected_and_highlighted_darkens_background() {
        let option = sample_option().with_highlight_style("bg-purple-200");
        let style = resolve_style(&option, true, true);
        assert_eq!(style.background, bg(Hue::Purple, Shade::C300));

        let capped = sample_option().with_highlight_style("bg-green-900");
        assert_eq!(
            resolve_style(&capped, true, true).background,
            bg(Hue::Green, Shade::C900)
        );
    }

    #[test]
    fn test_selected_and_highlighted_without_colours_uses_default() {
        let option = sample_option().with_highlight_style("font-bold");
        let style = resolve_style(&option, true, true);

        assert_eq!(style.background, bg(Hue::Blue, Shade::C500));
        assert_eq!(style.active_background, bg(Hue::Blue, Shade::C400));

        let no_highlight = resolve_style(&sample_option(), true, true);
        assert_eq!(no_highlight.background, bg(Hue::Blue, Shade::C500));
    }

    #[test]
    fn test_composed_style_differs_from_single_states() {
        let option = sample_option().with_highlight_style("bg-pink-200");
        let both = resolve_style(&option, true, true);

        assert_ne!(both, resolve_style(&option, true, false));
        assert_ne!(both, resolve_style(&option, false, true));
    }
}
