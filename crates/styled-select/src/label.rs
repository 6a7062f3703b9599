//! Renderable option labels and their searchable text

use serde::{Deserialize, Serialize};

/// Content shown for an option
///
/// A label is either a leaf (plain text or a glyph) or a node with ordered
/// children, so composite labels such as "icon + caption" can be described
/// without the widget knowing how they are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Literal text, searchable
    Text(String),

    /// Icon-like leaf (e.g. "●" or a Nerd Font symbol). Rendered, never searched.
    Glyph { glyph: String },

    /// Ordered child content
    Node { children: Vec<Label> },
}

impl Label {
    pub fn text(text: impl Into<String>) -> Self {
        Label::Text(text.into())
    }

    pub fn glyph(glyph: impl Into<String>) -> Self {
        Label::Glyph {
            glyph: glyph.into(),
        }
    }

    pub fn node(children: impl IntoIterator<Item = Label>) -> Self {
        Label::Node {
            children: children.into_iter().collect(),
        }
    }

    /// Concatenate all text leaves in document order (depth-first)
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Label::Text(text) => out.push_str(text),
            Label::Glyph { .. } => {}
            Label::Node { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Visit every leaf in document order, glyphs included
    ///
    /// Used by renderers that need each leaf as its own span.
    pub fn leaves(&self) -> Vec<LabelLeaf<'_>> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<LabelLeaf<'a>>) {
        match self {
            Label::Text(text) => out.push(LabelLeaf::Text(text)),
            Label::Glyph { glyph } => out.push(LabelLeaf::Glyph(glyph)),
            Label::Node { children } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// A single leaf of a [`Label`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLeaf<'a> {
    Text(&'a str),
    Glyph(&'a str),
}

impl Default for Label {
    fn default() -> Self {
        Label::Text(String::new())
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(Label::text("Backend Dev").flatten_text(), "Backend Dev");
    }

    #[test]
    fn test_nested_text_in_document_order() {
        let label = Label::node([
            Label::glyph("@"),
            Label::node([Label::text("Dise"), Label::text("ño")]),
            Label::text(" UX"),
        ]);

        assert_eq!(label.flatten_text(), "Diseño UX");
    }

    #[test]
    fn test_glyph_only_label_has_no_text() {
        let label = Label::node([Label::glyph("*"), Label::node([])]);
        assert_eq!(label.flatten_text(), "");
    }

    #[test]
    fn test_leaves_include_glyphs() {
        let label = Label::node([Label::glyph("*"), Label::text("IA Engineer")]);
        assert_eq!(
            label.leaves(),
            vec![LabelLeaf::Glyph("*"), LabelLeaf::Text("IA Engineer")]
        );
    }

    #[test]
    fn test_deserialize_untagged() {
        #[derive(Deserialize)]
        struct Wrapper {
            label: Label,
        }

        let parsed: Wrapper = toml::from_str(
            r##"
            label = { children = [{ glyph = "#" }, "Backend Dev"] }
            "##,
        )
        .unwrap();

        assert_eq!(
            parsed.label,
            Label::node([Label::glyph("#"), Label::text("Backend Dev")])
        );
    }
}
