//! Directory traversal for OBJ files.
//!
//! `ObjWalker` is a small builder over `walkdir::WalkDir` that yields every
//! file under a root whose name ends with a suffix (`.obj` by default).
//! `filter_files` runs the line filter over everything it yields.

// src/walker.rs
use crate::error::{Result, TrimError};
use crate::filter::{FilterOptions, FilterRules, FilterStats, filter_geometry};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Suffix of the files the filter applies to.
pub const OBJ_SUFFIX: &str = ".obj";

/// Configuration for OBJ file walking with builder pattern.
#[derive(Debug, Clone)]
pub struct ObjWalker {
    /// Root path to walk from
    root: PathBuf,
    /// Case-sensitive file name suffix
    suffix: String,
    /// Whether to descend into symlinked directories
    follow_links: bool,
    /// Maximum depth to traverse (None = unlimited)
    max_depth: Option<usize>,
}

impl ObjWalker {
    /// Create a walker for `.obj` files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: OBJ_SUFFIX.to_string(),
            follow_links: false,
            max_depth: None,
        }
    }

    /// Match a different file name suffix (default: `.obj`).
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set whether to follow symbolic links to directories (default: false).
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth to traverse (default: None = unlimited).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Plain suffix match on the raw file name, so a file called exactly
    /// `.obj` matches and `MODEL.OBJ` does not.
    fn matches_name(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.suffix.as_bytes())
    }

    /// Walk matching files. Directories that cannot be read are logged and
    /// skipped.
    pub fn walk_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut walker = walkdir::WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        walker.into_iter().filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    return None;
                }
            };

            let file_type = entry.file_type();
            let is_file = file_type.is_file()
                || (file_type.is_symlink() && entry.path().is_file());
            if !is_file || !self.matches_name(entry.file_name()) {
                return None;
            }

            Some(entry.into_path())
        })
    }
}

/// Totals over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_visited: usize,
    pub files_changed: usize,
    pub materials_dropped: usize,
    pub faces_dropped: usize,
}

impl RunSummary {
    pub fn record(&mut self, stats: &FilterStats) {
        self.files_visited += 1;
        if stats.changed() {
            self.files_changed += 1;
        }
        self.materials_dropped += stats.materials_dropped;
        self.faces_dropped += stats.faces_dropped;
    }

    pub fn lines_removed(&self) -> usize {
        self.materials_dropped + self.faces_dropped
    }
}

/// Filter every OBJ file under `root`.
///
/// The first file that fails aborts the run; files after it are left as
/// they were.
pub fn filter_files(
    root: &Path,
    rules: &FilterRules,
    options: FilterOptions,
) -> Result<RunSummary> {
    filter_with(&ObjWalker::new(root), rules, options)
}

/// Like [`filter_files`], with a custom walker.
pub fn filter_with(
    walker: &ObjWalker,
    rules: &FilterRules,
    options: FilterOptions,
) -> Result<RunSummary> {
    if !walker.root().is_dir() {
        return Err(TrimError::Config(format!(
            "{} is not a directory",
            walker.root().display()
        )));
    }

    let mut summary = RunSummary::default();
    for path in walker.walk_paths() {
        debug!(path = %path.display(), "Filtering");
        let stats = filter_geometry(&path, rules, options)?;
        summary.record(&stats);
    }

    Ok(summary)
}
