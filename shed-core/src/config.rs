//! On-disk configuration formats for the store and for workspaces.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Root store configuration, pinning the shell the store was initialized
/// under. Lives at `<config dir>/config.toml`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Dialect tag of the shell the store belongs to.
    pub shell: String,
}

/// Per-workspace configuration. Lives at
/// `<config dir>/workspaces/<name>/config.toml`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Dialect tag of the shell the workspace was created under.
    #[serde(default)]
    pub app: String,
    /// The project directory the workspace is bound to.
    #[serde(default)]
    pub path: PathBuf,
}

impl StoreConfig {
    /// Reads the store config from the given file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Writes the store config to the given file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl WorkspaceConfig {
    /// Reads a workspace config from the given file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Writes a workspace config to the given file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[expect(clippy::panic_in_result_fn)]
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn workspace_config_round_trips() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        let config = WorkspaceConfig {
            app: "bash".to_string(),
            path: PathBuf::from("/tmp/project"),
        };
        config.save(&path)?;

        let loaded = WorkspaceConfig::load(&path)?;
        assert_eq!(loaded.app, "bash");
        assert_eq!(loaded.path, PathBuf::from("/tmp/project"));
        Ok(())
    }

    #[test]
    fn missing_entries_default_to_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app = \"zsh\"\n")?;

        let loaded = WorkspaceConfig::load(&path)?;
        assert_eq!(loaded.app, "zsh");
        assert_eq!(loaded.path, PathBuf::new());
        Ok(())
    }
}
