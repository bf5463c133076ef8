//! Batch conversion of world files into JSON documents.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use mudworld_data::ZoneDef;
use walkdir::WalkDir;

use crate::parser::parse_wld_file;

/// Convert every world file directly under `from` with extension `ext`
/// into a pretty-printed JSON document under `to`, swapping the
/// extension for `json`.
///
/// Files are processed one at a time in file-name order; the first
/// failure aborts the whole batch. Returns the written output paths.
///
/// # Errors
/// File selection, parsing, serialization, and write failures all abort
/// the batch with context naming the offending path.
pub fn convert_rooms(to: &Path, from: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(to).with_context(|| format!("couldn't create output directory '{}'", to.display()))?;

    let mut written = Vec::new();
    for entry in WalkDir::new(from).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(OsStr::to_str) != Some(ext) {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        let rooms = parse_wld_file(path)?;
        info!("{} rooms parsed from {}", rooms.len(), path.display());

        let zone = ZoneDef { rooms };
        let json = serde_json::to_string_pretty(&zone)
            .with_context(|| format!("failed to convert '{}' to json", path.display()))?;

        let out = to.join(file_name).with_extension("json");
        fs::write(&out, json).with_context(|| format!("couldn't write '{}'", out.display()))?;
        written.push(out);
    }
    Ok(written)
}
