pub mod cli;
pub mod error;
pub mod guidance;
pub mod loaders;
pub mod recommend;
pub mod report;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::Cli;
pub use error::{ReportError, Result};
pub use report::{ComplianceStatus, Issue, IssueKind, Report, RiskLevel};
pub use reporter::{html::HtmlReporter, Reporter};

/// Input artifact names within the reports directory.
pub const SEMGREP_FILE: &str = "pii-scan.json";
pub const GITLEAKS_FILE: &str = "gitleaks-report.json";
pub const VULNERABILITIES_FILE: &str = "vulnerabilities.json";
