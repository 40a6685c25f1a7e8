// src/cli/mod.rs
// CLI arguments and how they override the config file

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use objtrim::config::TrimConfig;
use objtrim::filter::WriteMode;
use std::path::PathBuf;
use tracing::Level;

pub mod run;

pub use run::run_filter;

#[derive(Parser, Debug)]
#[command(name = "objtrim")]
#[command(about = "Strip excluded materials and placeholder faces from OBJ files in place")]
#[command(version)]
pub struct Cli {
    /// Directory to scan (default: current directory)
    #[arg(index = 1)]
    pub root: Option<PathBuf>,

    /// Material to strip; repeat for several. Replaces the configured list.
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Lowest first-vertex index whose faces are stripped
    #[arg(long, value_name = "N")]
    pub face_min: Option<u32>,

    /// Highest first-vertex index whose faces are stripped
    #[arg(long, value_name = "N")]
    pub face_max: Option<u32>,

    /// TOML config file
    #[arg(short, long, env = "OBJTRIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// How filtered files replace the originals
    #[arg(long, value_enum)]
    pub write_mode: Option<WriteMode>,

    /// Report what would be removed without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<TrimConfig> {
        let mut config = match &self.config {
            Some(path) => TrimConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => TrimConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut TrimConfig) {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if !self.exclude.is_empty() {
            config.excluded_materials = self.exclude.clone();
        }
        if let Some(min) = self.face_min {
            config.face_range.min = min;
        }
        if let Some(max) = self.face_max {
            config.face_range.max = max;
        }
        if let Some(mode) = self.write_mode {
            config.write_mode = mode;
        }
        if self.dry_run {
            config.dry_run = true;
        }
    }
}
