// src/config/file.rs
// File-based configuration (TOML)

use crate::error::{Result, TrimError};
use crate::filter::{DEFAULT_EXCLUDED_MATERIALS, FaceRange, FilterOptions, FilterRules, WriteMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrimConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Materials whose `usemtl` lines are removed
    pub excluded_materials: Vec<String>,
    /// First-vertex indices whose face lines are removed
    pub face_range: FaceRange,
    pub write_mode: WriteMode,
    pub dry_run: bool,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excluded_materials: DEFAULT_EXCLUDED_MATERIALS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            face_range: FaceRange::default(),
            write_mode: WriteMode::default(),
            dry_run: false,
        }
    }
}

impl TrimConfig {
    /// Load config from an explicit path. A missing or invalid file is an
    /// error, since the caller asked for it by name.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TrimError::io(path, e))?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "Loaded config from file");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.face_range.validate().map_err(TrimError::Config)?;
        if self.excluded_materials.is_empty() {
            warn!("No excluded materials configured; only faces will be removed");
        }
        Ok(())
    }

    pub fn rules(&self) -> FilterRules {
        FilterRules::new(self.excluded_materials.iter().cloned(), self.face_range)
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            write_mode: self.write_mode,
            dry_run: self.dry_run,
        }
    }
}
