//! Loaders for third-party scanner output files.
//!
//! Each loader reads one JSON artifact from the reports directory, appends
//! normalized [`Issue`](crate::report::Issue)s to the shared
//! [`Report`](crate::report::Report), and adjusts the aggregate posture
//! according to its own rules. A missing or malformed file is logged and
//! skipped; no loader failure ever propagates to the caller.

pub mod gitleaks;
pub mod grype;
pub mod semgrep;

use crate::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// Read and deserialize one scan artifact.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ReportError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ReportError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| ReportError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
