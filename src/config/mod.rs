// src/config/mod.rs
// Configuration: built-in defaults, optional TOML file, CLI overrides

pub mod file;

pub use file::TrimConfig;
