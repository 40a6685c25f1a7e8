// src/filter/write.rs
// Writing filtered content back over the original file

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// How a filtered file replaces the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Temp file in the same directory, then rename over the original
    #[default]
    Atomic,
    /// Truncate and rewrite the original directly
    Truncate,
}

/// Replace the contents of `path` according to `mode`.
pub fn write_back(path: &Path, bytes: &[u8], mode: WriteMode) -> io::Result<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, bytes),
        WriteMode::Truncate => fs::write(path, bytes),
    }
}

/// Temp-file + rename replacement. Mirrors the original permissions, and
/// writes through symlinks by resolving the target first.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    // Temp name must not end in .obj or a concurrent walk could pick it up
    let mut tmp = tempfile::Builder::new()
        .prefix(".objtrim-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let permissions = fs::metadata(&target)?.permissions();
    tmp.as_file().set_permissions(permissions)?;

    tmp.persist(&target).map_err(|e| e.error)?;

    // Fsync parent directory entry to reduce risk of metadata loss on crash
    if let Ok(parent) = fs::File::open(dir) {
        let _ = parent.sync_all();
    }

    Ok(())
}
