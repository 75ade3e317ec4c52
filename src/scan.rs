//! Source directory scanning.
//!
//! Lists the source directory (non-recursively) and keeps the regular files
//! whose names carry an eligible extension. Everything else is ignored:
//! subdirectories, images, fonts, editor backups.
//!
//! Entries are sorted by file name. `fs::read_dir` returns them in whatever
//! order the filesystem keeps, and a stable order keeps the CLI output and
//! the conversion order reproducible across machines.

use crate::config::ConverterConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),
}

/// What kind of asset a file is. Only HTML gets minified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Html,
    Css,
    Js,
    /// Any other configured extension; embedded verbatim.
    Other,
}

impl AssetKind {
    pub fn from_file_name(file_name: &str) -> Self {
        match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some("html") => AssetKind::Html,
            Some("css") => AssetKind::Css,
            Some("js") => AssetKind::Js,
            _ => AssetKind::Other,
        }
    }
}

/// An eligible file in the source directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: AssetKind,
}

/// List the eligible assets of `config.source_dir`, sorted by file name.
pub fn scan(config: &ConverterConfig) -> Result<Vec<Asset>, ScanError> {
    let source = &config.source_dir;
    if !source.is_dir() {
        return Err(ScanError::MissingSource(source.clone()));
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot match an extension list written in TOML
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !config.is_eligible(&file_name) {
            continue;
        }
        assets.push(Asset {
            kind: AssetKind::from_file_name(&file_name),
            path,
            file_name,
        });
    }

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(assets)
}
