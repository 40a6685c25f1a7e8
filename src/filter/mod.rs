// src/filter/mod.rs
// Line filter: drops excluded materials and placeholder faces from one OBJ file

mod rules;
mod write;

pub use rules::{DEFAULT_EXCLUDED_MATERIALS, FaceRange, FilterRules};
pub use write::{WriteMode, write_back};

use crate::error::{Result, TrimError};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// What happens to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Keep,
    /// `usemtl` naming an excluded material
    DropMaterial,
    /// Face line whose first vertex index is in the face range
    DropFace,
}

/// A `usemtl` line with no material name. `line` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("usemtl without material name on line {line}")]
pub struct MalformedLine {
    pub line: usize,
}

/// Per-file counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: usize,
    pub lines_kept: usize,
    pub materials_dropped: usize,
    pub faces_dropped: usize,
}

impl FilterStats {
    pub fn lines_removed(&self) -> usize {
        self.materials_dropped + self.faces_dropped
    }

    pub fn changed(&self) -> bool {
        self.lines_removed() > 0
    }
}

/// Options that affect how results are persisted, not what is filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub write_mode: WriteMode,
    pub dry_run: bool,
}

/// Decide the fate of one line (terminator may be included).
///
/// Returns `None` for a `usemtl` line that has no material token.
pub fn classify_line(line: &str, rules: &FilterRules) -> Option<LineAction> {
    if line.starts_with("usemtl") {
        let material = line.split_whitespace().nth(1)?;
        return Some(if rules.is_excluded(material) {
            LineAction::DropMaterial
        } else {
            LineAction::Keep
        });
    }

    if rules.face_range().matches_face(line) {
        return Some(LineAction::DropFace);
    }

    Some(LineAction::Keep)
}

/// Split into lines ending in `\n`, `\r\n` or a lone `\r`, each keeping its
/// own terminator. A final line without a terminator is yielded as is.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\r', '\n']) {
            None => rest.len(),
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Filter a whole document. Kept lines keep their original terminators,
/// so the output is the input with whole lines removed and nothing else.
pub fn filter_text(
    text: &str,
    rules: &FilterRules,
) -> std::result::Result<(String, FilterStats), MalformedLine> {
    let mut out = String::with_capacity(text.len());
    let mut stats = FilterStats::default();

    for (idx, line) in split_lines(text).enumerate() {
        stats.lines_read += 1;
        match classify_line(line, rules).ok_or(MalformedLine { line: idx + 1 })? {
            LineAction::Keep => {
                stats.lines_kept += 1;
                out.push_str(line);
            }
            LineAction::DropMaterial => stats.materials_dropped += 1,
            LineAction::DropFace => stats.faces_dropped += 1,
        }
    }

    Ok((out, stats))
}

/// Filter one file in place.
///
/// The file is read fully, filtered, then written back (unless
/// `options.dry_run`). On a malformed `usemtl` line nothing is written.
pub fn filter_geometry(
    path: &Path,
    rules: &FilterRules,
    options: FilterOptions,
) -> Result<FilterStats> {
    let text = std::fs::read_to_string(path).map_err(|e| TrimError::io(path, e))?;

    let (filtered, stats) =
        filter_text(&text, rules).map_err(|e| TrimError::MalformedMaterial {
            path: path.to_path_buf(),
            line: e.line,
        })?;

    if options.dry_run {
        info!(
            path = %path.display(),
            materials = stats.materials_dropped,
            faces = stats.faces_dropped,
            "Would remove {} lines (dry run)",
            stats.lines_removed()
        );
        return Ok(stats);
    }

    write_back(path, filtered.as_bytes(), options.write_mode)
        .map_err(|e| TrimError::io(path, e))?;

    if stats.changed() {
        info!(
            path = %path.display(),
            materials = stats.materials_dropped,
            faces = stats.faces_dropped,
            "Removed {} lines",
            stats.lines_removed()
        );
    } else {
        debug!(path = %path.display(), "No lines removed");
    }

    Ok(stats)
}
