//! Structured style descriptors
//!
//! Hosts describe option appearance with Tailwind-like fragments
//! (`"bg-pink-100 text-purple-800 hover:bg-green-500"`). Fragments are parsed
//! once into a [`StyleDescriptor`] and all composition happens on the typed
//! fields, never on the text.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{palette::tailwind, Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by strict colour-token parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("empty colour token")]
    Empty,

    #[error("unknown colour family: {0}")]
    UnknownHue(String),

    #[error("invalid shade '{shade}' for colour family {hue}")]
    InvalidShade { hue: String, shade: String },
}

/// Tailwind colour families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Hue {
    const ALL: [Hue; 22] = [
        Hue::Slate,
        Hue::Gray,
        Hue::Zinc,
        Hue::Neutral,
        Hue::Stone,
        Hue::Red,
        Hue::Orange,
        Hue::Amber,
        Hue::Yellow,
        Hue::Lime,
        Hue::Green,
        Hue::Emerald,
        Hue::Teal,
        Hue::Cyan,
        Hue::Sky,
        Hue::Blue,
        Hue::Indigo,
        Hue::Violet,
        Hue::Purple,
        Hue::Fuchsia,
        Hue::Pink,
        Hue::Rose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hue::Slate => "slate",
            Hue::Gray => "gray",
            Hue::Zinc => "zinc",
            Hue::Neutral => "neutral",
            Hue::Stone => "stone",
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Amber => "amber",
            Hue::Yellow => "yellow",
            Hue::Lime => "lime",
            Hue::Green => "green",
            Hue::Emerald => "emerald",
            Hue::Teal => "teal",
            Hue::Cyan => "cyan",
            Hue::Sky => "sky",
            Hue::Blue => "blue",
            Hue::Indigo => "indigo",
            Hue::Violet => "violet",
            Hue::Purple => "purple",
            Hue::Fuchsia => "fuchsia",
            Hue::Pink => "pink",
            Hue::Rose => "rose",
        }
    }

    fn palette(self) -> tailwind::Palette {
        match self {
            Hue::Slate => tailwind::SLATE,
            Hue::Gray => tailwind::GRAY,
            Hue::Zinc => tailwind::ZINC,
            Hue::Neutral => tailwind::NEUTRAL,
            Hue::Stone => tailwind::STONE,
            Hue::Red => tailwind::RED,
            Hue::Orange => tailwind::ORANGE,
            Hue::Amber => tailwind::AMBER,
            Hue::Yellow => tailwind::YELLOW,
            Hue::Lime => tailwind::LIME,
            Hue::Green => tailwind::GREEN,
            Hue::Emerald => tailwind::EMERALD,
            Hue::Teal => tailwind::TEAL,
            Hue::Cyan => tailwind::CYAN,
            Hue::Sky => tailwind::SKY,
            Hue::Blue => tailwind::BLUE,
            Hue::Indigo => tailwind::INDIGO,
            Hue::Violet => tailwind::VIOLET,
            Hue::Purple => tailwind::PURPLE,
            Hue::Fuchsia => tailwind::FUCHSIA,
            Hue::Pink => tailwind::PINK,
            Hue::Rose => tailwind::ROSE,
        }
    }
}

impl FromStr for Hue {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hue::ALL
            .iter()
            .copied()
            .find(|hue| hue.name() == s)
            .ok_or_else(|| StyleError::UnknownHue(s.to_string()))
    }
}

/// Intensity step within a colour family (50 = lightest, 950 = darkest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    C50,
    C100,
    C200,
    C300,
    C400,
    C500,
    C600,
    C700,
    C800,
    C900,
    C950,
}

impl Shade {
    pub fn value(self) -> u16 {
        match self {
            Shade::C50 => 50,
            Shade::C100 => 100,
            Shade::C200 => 200,
            Shade::C300 => 300,
            Shade::C400 => 400,
            Shade::C500 => 500,
            Shade::C600 => 600,
            Shade::C700 => 700,
            Shade::C800 => 800,
            Shade::C900 => 900,
            Shade::C950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Some(match value {
            50 => Shade::C50,
            100 => Shade::C100,
            200 => Shade::C200,
            300 => Shade::C300,
            400 => Shade::C400,
            500 => Shade::C500,
            600 => Shade::C600,
            700 => Shade::C700,
            800 => Shade::C800,
            900 => Shade::C900,
            950 => Shade::C950,
            _ => return None,
        })
    }

    /// One step darker, capped at 900. 950 is already past the cap and stays.
    pub fn darker(self) -> Self {
        match self {
            Shade::C50 => Shade::C100,
            Shade::C100 => Shade::C200,
            Shade::C200 => Shade::C300,
            Shade::C300 => Shade::C400,
            Shade::C400 => Shade::C500,
            Shade::C500 => Shade::C600,
            Shade::C600 => Shade::C700,
            Shade::C700 => Shade::C800,
            Shade::C800 | Shade::C900 => Shade::C900,
            Shade::C950 => Shade::C950,
        }
    }
}

/// A colour as written in a style fragment (`white`, `pink-200`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwColor {
    White,
    Black,
    Transparent,
    Shaded { hue: Hue, shade: Shade },
}

impl TwColor {
    pub fn shaded(hue: Hue, shade: Shade) -> Self {
        TwColor::Shaded { hue, shade }
    }

    /// Same colour one shade darker; named colours have no shade and are returned as is
    pub fn darker(self) -> Self {
        match self {
            TwColor::Shaded { hue, shade } => TwColor::Shaded {
                hue,
                shade: shade.darker(),
            },
            named => named,
        }
    }

    /// Terminal colour, `None` for transparent (leave the cell background alone)
    pub fn to_color(self) -> Option<Color> {
        match self {
            TwColor::White => Some(tailwind::WHITE),
            TwColor::Black => Some(tailwind::BLACK),
            TwColor::Transparent => None,
            TwColor::Shaded { hue, shade } => {
                let palette = hue.palette();
                Some(match shade {
                    Shade::C50 => palette.c50,
                    Shade::C100 => palette.c100,
                    Shade::C200 => palette.c200,
                    Shade::C300 => palette.c300,
                    Shade::C400 => palette.c400,
                    Shade::C500 => palette.c500,
                    Shade::C600 => palette.c600,
                    Shade::C700 => palette.c700,
                    Shade::C800 => palette.c800,
                    Shade::C900 => palette.c900,
                    Shade::C950 => palette.c950,
                })
            }
        }
    }
}

impl FromStr for TwColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(StyleError::Empty),
            "white" => Ok(TwColor::White),
            "black" => Ok(TwColor::Black),
            "transparent" => Ok(TwColor::Transparent),
            _ => {
                let (hue, shade) = s
                    .rsplit_once('-')
                    .ok_or_else(|| StyleError::UnknownHue(s.to_string()))?;
                let hue: Hue = hue.parse()?;
                let shade = shade
                    .parse::<u16>()
                    .ok()
                    .and_then(Shade::from_value)
                    .ok_or_else(|| StyleError::InvalidShade {
                        hue: hue.name().to_string(),
                        shade: shade.to_string(),
                    })?;
                Ok(TwColor::Shaded { hue, shade })
            }
        }
    }
}

impl fmt::Display for TwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwColor::White => f.write_str("white"),
            TwColor::Black => f.write_str("black"),
            TwColor::Transparent => f.write_str("transparent"),
            TwColor::Shaded { hue, shade } => write!(f, "{}-{}", hue.name(), shade.value()),
        }
    }
}

/// Visual appearance of a row or container
///
/// Overlaying one descriptor on another replaces the colour slots the overlay
/// sets and appends its extra fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StyleDescriptor {
    pub background: Option<TwColor>,
    pub text_color: Option<TwColor>,
    pub hover_background: Option<TwColor>,
    pub active_background: Option<TwColor>,
    /// Fragments without a colour slot (`font-bold`, `italic`, `rounded`, ...)
    pub extras: Vec<String>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse style fragments, keeping anything unrecognised as an extra
    pub fn parse(fragments: &str) -> Self {
        let mut style = Self::default();

        for token in fragments.split_whitespace() {
            if let Some(color) = token.strip_prefix("hover:bg-") {
                match color.parse() {
                    Ok(color) => style.hover_background = Some(color),
                    Err(err) => style.keep_malformed(token, &err),
                }
            } else if let Some(color) = token.strip_prefix("active:bg-") {
                match color.parse() {
                    Ok(color) => style.active_background = Some(color),
                    Err(err) => style.keep_malformed(token, &err),
                }
            } else if let Some(color) = token.strip_prefix("bg-") {
                match color.parse() {
                    Ok(color) => style.background = Some(color),
                    Err(err) => style.keep_malformed(token, &err),
                }
            } else if let Some(color) = token.strip_prefix("text-") {
                // text-sm, text-center etc. are not colours
                match color.parse() {
                    Ok(color) => style.text_color = Some(color),
                    Err(_) => style.push_extra(token),
                }
            } else {
                style.push_extra(token);
            }
        }

        style
    }

    fn keep_malformed(&mut self, token: &str, err: &StyleError) {
        log::debug!("Keeping malformed style fragment '{}' as extra: {}", token, err);
        self.push_extra(token);
    }

    fn push_extra(&mut self, token: &str) {
        if !self.extras.iter().any(|e| e == token) {
            self.extras.push(token.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.text_color.is_none()
            && self.hover_background.is_none()
            && self.active_background.is_none()
            && self.extras.is_empty()
    }

    pub fn with_background(mut self, color: TwColor) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: TwColor) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_hover_background(mut self, color: TwColor) -> Self {
        self.hover_background = Some(color);
        self
    }

    pub fn with_active_background(mut self, color: TwColor) -> Self {
        self.active_background = Some(color);
        self
    }

    pub fn with_extra(mut self, extra: &str) -> Self {
        self.push_extra(extra);
        self
    }

    /// Drop the base background so an overlay never competes with it
    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    /// `other` wins for every colour slot it sets; its extras are appended
    pub fn overlay(mut self, other: &StyleDescriptor) -> Self {
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.text_color.is_some() {
            self.text_color = other.text_color;
        }
        if other.hover_background.is_some() {
            self.hover_background = other.hover_background;
        }
        if other.active_background.is_some() {
            self.active_background = other.active_background;
        }
        for extra in &other.extras {
            self.push_extra(extra);
        }
        self
    }

    /// Turn a hover-only background into the persistent one
    ///
    /// Returns `None` when there is no hover background to promote.
    pub fn promote_hover(&self) -> Option<Self> {
        let hover = self.hover_background?;
        let mut promoted = self.clone();
        promoted.hover_background = None;
        promoted.background = Some(hover);
        Some(promoted)
    }

    /// Darken the background one shade. `None` without a background.
    pub fn darken_background(&self) -> Option<Self> {
        let background = self.background?;
        let mut darker = self.clone();
        darker.background = Some(background.darker());
        Some(darker)
    }

    /// Terminal rendition; hover and active slots have no terminal meaning
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();

        if let Some(bg) = self.background.and_then(TwColor::to_color) {
            style = style.bg(bg);
        }
        if let Some(fg) = self.text_color.and_then(TwColor::to_color) {
            style = style.fg(fg);
        }

        for extra in &self.extras {
            let modifier = match extra.as_str() {
                "font-bold" | "font-semibold" | "font-extrabold" => Modifier::BOLD,
                "italic" => Modifier::ITALIC,
                "underline" => Modifier::UNDERLINED,
                "line-through" => Modifier::CROSSED_OUT,
                e if e.starts_with("opacity-") => Modifier::DIM,
                _ => continue,
            };
            style = style.add_modifier(modifier);
        }

        style
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        if let Some(bg) = self.background {
            tokens.push(format!("bg-{}", bg));
        }
        if let Some(fg) = self.text_color {
            tokens.push(format!("text-{}", fg));
        }
        if let Some(hover) = self.hover_background {
            tokens.push(format!("hover:bg-{}", hover));
        }
        if let Some(active) = self.active_background {
            tokens.push(format!("active:bg-{}", active));
        }
        tokens.extend(self.extras.iter().cloned());
        f.write_str(&tokens.join(" "))
    }
}

impl From<&str> for StyleDescriptor {
    fn from(fragments: &str) -> Self {
        Self::parse(fragments)
    }
}

impl From<String> for StyleDescriptor {
    fn from(fragments: String) -> Self {
        Self::parse(&fragments)
    }
}

impl From<StyleDescriptor> for String {
    fn from(style: StyleDescriptor) -> Self {
        style.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragments() {
        let style = StyleDescriptor::parse("bg-pink-100 text-purple-800 hover:bg-green-500");

        assert_eq!(style.background, Some(TwColor::shaded(Hue::Pink, Shade::C100)));
        assert_eq!(style.text_color, Some(TwColor::shaded(Hue::Purple, Shade::C800)));
        assert_eq!(
            style.hover_background,
            Some(TwColor::shaded(Hue::Green, Shade::C500))
        );
        assert!(style.extras.is_empty());
    }

    #[test]
    fn test_non_colour_fragments_become_extras() {
        let style = StyleDescriptor::parse("text-sm font-bold rounded text-white");

        assert_eq!(style.text_color, Some(TwColor::White));
        assert_eq!(style.extras, vec!["text-sm", "font-bold", "rounded"]);
    }

    #[test]
    fn test_malformed_colour_is_kept_not_fatal() {
        let style = StyleDescriptor::parse("bg-pink-abc bg-chartreuse-200");

        assert_eq!(style.background, None);
        assert_eq!(style.extras, vec!["bg-pink-abc", "bg-chartreuse-200"]);
    }

    #[test]
    fn test_strict_colour_errors() {
        assert_eq!("".parse::<TwColor>(), Err(StyleError::Empty));
        assert_eq!(
            "chartreuse-200".parse::<TwColor>(),
            Err(StyleError::UnknownHue("chartreuse".to_string()))
        );
        assert_eq!(
            "blue-250".parse::<TwColor>(),
            Err(StyleError::InvalidShade {
                hue: "blue".to_string(),
                shade: "250".to_string()
            })
        );
    }

    #[test]
    fn test_darker_is_capped() {
        assert_eq!(Shade::C200.darker(), Shade::C300);
        assert_eq!(Shade::C800.darker(), Shade::C900);
        assert_eq!(Shade::C900.darker(), Shade::C900);
        assert_eq!(Shade::C950.darker(), Shade::C950);
        assert_eq!(TwColor::White.darker(), TwColor::White);
    }

    #[test]
    fn test_overlay_replaces_set_slots_only() {
        let base = StyleDescriptor::parse("bg-blue-100 text-blue-800 italic");
        let overlay = StyleDescriptor::parse("bg-purple-200 font-bold italic");

        let merged = base.overlay(&overlay);
        assert_eq!(merged.background, Some(TwColor::shaded(Hue::Purple, Shade::C200)));
        assert_eq!(merged.text_color, Some(TwColor::shaded(Hue::Blue, Shade::C800)));
        assert_eq!(merged.extras, vec!["italic", "font-bold"]);
    }

    #[test]
    fn test_promote_hover() {
        let style = StyleDescriptor::parse("bg-pink-200 hover:bg-pink-400");
        let promoted = style.promote_hover().unwrap();

        assert_eq!(promoted.background, Some(TwColor::shaded(Hue::Pink, Shade::C400)));
        assert_eq!(promoted.hover_background, None);
        assert!(StyleDescriptor::parse("bg-pink-200").promote_hover().is_none());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let text = "bg-blue-500 text-white active:bg-blue-400 font-bold";
        let style = StyleDescriptor::parse(text);
        assert_eq!(style.to_string(), text);
    }

    #[test]
    fn test_to_style_maps_palette_and_modifiers() {
        let style = StyleDescriptor::parse("bg-cyan-400 text-slate-950 font-bold transparent");
        let rendered = style.to_style();

        assert_eq!(rendered.bg, Some(tailwind::CYAN.c400));
        assert_eq!(rendered.fg, Some(tailwind::SLATE.c950));
        assert!(rendered.add_modifier.contains(Modifier::BOLD));

        let clear = StyleDescriptor::parse("bg-transparent").to_style();
        assert_eq!(clear.bg, None);
    }
}
