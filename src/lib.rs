// src/lib.rs
// objtrim - strip excluded materials and placeholder faces from OBJ files

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod filter;
pub mod walker;

pub use error::{Result, TrimError};
pub use filter::{FilterOptions, FilterRules, FilterStats, filter_geometry};
pub use walker::{ObjWalker, RunSummary, filter_files};
