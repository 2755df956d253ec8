use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.termrc/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct TermrcPaths {
    termrc_dir: PathBuf,
}

impl TermrcPaths {
    /// Resolve paths from the user's home directory (`~/.termrc`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            termrc_dir: home.join(".termrc"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(termrc_dir: PathBuf) -> Self {
        Self { termrc_dir }
    }

    pub fn termrc_dir(&self) -> &Path {
        &self.termrc_dir
    }

    /// User-level config: `~/.termrc/config.toml`.
    pub fn user_config(&self) -> PathBuf {
        self.termrc_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.termrc/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".termrc").join("config.toml")
    }
}
