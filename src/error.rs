//! Error types for secdigest.
//!
//! Input errors are non-fatal by design: each loader absorbs its own
//! failures and logs them, so a missing or corrupt scan file never aborts
//! the run. The variants here exist so the log lines can say precisely
//! what went wrong.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Scan results file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report: {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_not_found() {
        let err = ReportError::FileNotFound(PathBuf::from("security-reports/pii-scan.json"));
        assert_eq!(
            err.to_string(),
            "Scan results file not found: security-reports/pii-scan.json"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ReportError::ParseError {
            path: PathBuf::from("gitleaks-report.json"),
            source,
        };
        assert_eq!(err.to_string(), "Invalid JSON in gitleaks-report.json");
    }

    #[test]
    fn test_error_display_write_error() {
        let err = ReportError::WriteError {
            path: PathBuf::from("out.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write report: out.html");
    }
}
