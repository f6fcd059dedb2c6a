//! Decode every script file in a directory.
//!
//! Only regular files with a `.txt` extension are read; subdirectories and
//! other files are skipped. Each file gets its own reader, closed as soon as
//! that file is decoded. A file that cannot be read or parsed is recorded in
//! [`DirectoryParse::failures`] and the rest of the directory is still decoded.

use crate::decoder::{decode_file_with, ParseOptions};
use crate::error::{Result, ScriptError};
use crate::types::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File extension recognised as script text.
pub const SCRIPT_EXTENSION: &str = "txt";

/// Outcome of decoding a directory, keyed by file stem (`infantry.txt` → `infantry`).
#[derive(Debug, Default)]
pub struct DirectoryParse {
    pub files: BTreeMap<String, Value>,
    pub failures: BTreeMap<String, ScriptError>,
}

impl DirectoryParse {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode all `.txt` files directly inside `dir`.
///
/// Fails only if the directory itself cannot be listed.
pub fn decode_dir(dir: impl AsRef<Path>) -> Result<DirectoryParse> {
    decode_dir_with(dir, &ParseOptions::default())
}

pub fn decode_dir_with(dir: impl AsRef<Path>, options: &ParseOptions) -> Result<DirectoryParse> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| ScriptError::from(e).in_file(dir))?;

    let mut result = DirectoryParse::default();
    for entry in entries {
        let path = entry.map_err(|e| ScriptError::from(e).in_file(dir))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
            tracing::trace!(path = %path.display(), "skipping non-script entry");
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };

        match decode_file_with(&path, options) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), "decoded script file");
                result.files.insert(stem, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode script file");
                result.failures.insert(stem, e);
            }
        }
    }

    Ok(result)
}
