//! Last committed value per select, kept between runs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io::BufReader, path::Path};

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedSession {
    /// select id -> option value
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
}

impl PersistedSession {
    pub fn value_for(&self, select_id: &str) -> Option<&str> {
        self.selections.get(select_id).map(String::as_str)
    }
}

pub fn load_session(path: &Path) -> Result<PersistedSession> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open session file {}", path.display()))?;
    let reader = BufReader::new(file);
    let session: PersistedSession =
        serde_json::from_reader(reader).context("Failed to parse session from file")?;

    log::debug!("Loaded session: {:?}", session);

    Ok(session)
}

pub fn store_session(path: &Path, session: &PersistedSession) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create session directory {}", parent.display()))?;
    }
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create session file {}", path.display()))?;
    serde_json::to_writer_pretty(file, session).context("Failed to write session to file")?;

    log::debug!("Stored session: {:?}", session);

    Ok(())
}
