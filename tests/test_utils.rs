//! Test utilities for objtrim integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree of OBJ (and other) files
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel`, creating parent directories
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).expect("Failed to read test file")
    }
}

/// A small kart model: one excluded material block with placeholder faces,
/// one kept material block with real faces.
pub const KART_OBJ: &str = "\
# kart body
mtllib kart.mtl
o Body
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
vt 0.0 0.0
vn 0.0 0.0 1.0
usemtl 245_257_63_235_4_3
f 1/1/1 2/1/1 3/1/1
f 48/1/1 2/1/1 3/1/1
usemtl paint_red
f 49/1/1 50/1/1 51/1/1
f 480/1/1 481/1/1 482/1/1
usemtl 245_256_63_235_4_4
s off
";

/// `KART_OBJ` after filtering with the default rules
pub const KART_OBJ_FILTERED: &str = "\
# kart body
mtllib kart.mtl
o Body
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
vt 0.0 0.0
vn 0.0 0.0 1.0
usemtl paint_red
f 49/1/1 50/1/1 51/1/1
f 480/1/1 481/1/1 482/1/1
s off
";
