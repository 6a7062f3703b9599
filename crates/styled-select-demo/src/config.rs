use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use styled_select::{Label, SelectOption, SelectProps, StyleDescriptor};

const CONFIG_FILE: &str = "styled-select.toml";

/// Application configuration loaded from styled-select.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,
    #[serde(default = "default_selects")]
    pub selects: Vec<SelectConfig>,
}

/// One select on screen
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectConfig {
    /// Key used for session persistence
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_searchable: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub class_name: StyleDescriptor,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl SelectConfig {
    /// Widget props, seeding the selection from a previous session when known
    pub fn to_props(&self, value: Option<&str>) -> SelectProps {
        let mut props = SelectProps::new(self.options.clone())
            .searchable(self.is_searchable)
            .placeholder(self.placeholder.clone())
            .class_name(self.class_name.clone());
        if let Some(value) = value {
            props = props.value(value);
        }
        props
    }
}

fn default_session_file() -> String {
    env::temp_dir()
        .join("styled-select")
        .join("session.json")
        .to_string_lossy()
        .to_string()
}

fn default_persist_session() -> bool {
    true
}

fn role_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(
            "option1",
            Label::node([Label::glyph("☺ "), Label::text("Diseño UX")]),
        )
        .with_style("bg-pink-100 text-purple-800 hover:bg-green-500")
        .with_highlight_style("bg-pink-200"),
        SelectOption::new(
            "option2",
            Label::node([Label::glyph("▣ "), Label::text("Backend Dev")]),
        )
        .with_style("bg-blue-100 text-blue-800 hover:bg-orange-500")
        .with_highlight_style("bg-purple-200"),
        SelectOption::new(
            "option3",
            Label::node([Label::glyph("✦ "), Label::text("IA Engineer")]),
        )
        .with_style("bg-green-100 text-green-800 hover:bg-yellow-500")
        .with_highlight_style("bg-green-200"),
    ]
}

fn default_selects() -> Vec<SelectConfig> {
    vec![
        SelectConfig {
            id: "searchable".to_string(),
            title: "Role (searchable)".to_string(),
            is_searchable: true,
            placeholder: "Buscar 1".to_string(),
            class_name: StyleDescriptor::parse("bg-blue-100"),
            options: role_options(),
        },
        SelectConfig {
            id: "simple".to_string(),
            title: "Role".to_string(),
            is_searchable: false,
            placeholder: "Buscar 2".to_string(),
            class_name: StyleDescriptor::default(),
            options: role_options(),
        },
        SelectConfig {
            id: "empty".to_string(),
            title: "Nothing to pick".to_string(),
            is_searchable: true,
            placeholder: "Buscar 3".to_string(),
            class_name: StyleDescriptor::default(),
            options: Vec::new(),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            persist_session: default_persist_session(),
            selects: default_selects(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        // Try current directory first
        if let Some(config) = Self::read(PathBuf::from(CONFIG_FILE)) {
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Some(config) = Self::read(home_config) {
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    fn read(path: PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                None
            }
        }
    }
}
