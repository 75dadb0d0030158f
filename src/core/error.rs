use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors raised while loading a translation directory.
///
/// Resolution itself never fails; a missing message is an empty string.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A directory or file could not be read.
    #[error("[JsonStore] failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A discovered `.json` file is not valid JSON.
    #[error("[JsonStore] invalid json in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A lone root-level file must be an object so its keys can be merged at the top level.
    #[error("[JsonStore] {} must contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },
}

impl LoadError {
    /// Path of the file or directory that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::InvalidJson { path, .. }
            | LoadError::NotAnObject { path } => path.as_path(),
        }
    }
}
