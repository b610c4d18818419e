//! Report generation pipeline.
//!
//! Loaders run in a fixed order: static analysis first, then secret
//! detection (whose CRITICAL override must win), then vulnerabilities.
//! The run always completes and always writes a report, even with zero
//! inputs present.

use crate::cli::Cli;
use crate::error::{ReportError, Result};
use crate::recommend;
use crate::report::Report;
use crate::reporter::{html::HtmlReporter, Reporter};
use crate::{loaders, GITLEAKS_FILE, SEMGREP_FILE, VULNERABILITIES_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Build the report from whatever scan artifacts are present.
pub fn build_report(dir: &Path) -> Report {
    let mut report = Report::new();

    loaders::semgrep::load(&dir.join(SEMGREP_FILE), &mut report);
    loaders::gitleaks::load(&dir.join(GITLEAKS_FILE), &mut report);
    loaders::grype::load(&dir.join(VULNERABILITIES_FILE), &mut report);

    report.recommendations = recommend::recommendations(&report.issues);
    report
}

/// Run the full pipeline and write the HTML report.
///
/// Always exits 0: input and output problems are logged, never fatal.
pub fn generate(cli: &Cli) -> ExitCode {
    if let Err(e) = fs::create_dir_all(&cli.dir) {
        warn!(dir = %cli.dir.display(), error = %e, "Failed to create reports directory");
    }

    info!(dir = %cli.dir.display(), "Aggregating scan results");
    let report = build_report(&cli.dir);

    let html = HtmlReporter::new().report(&report);
    let output_path = output_path(cli);
    if let Err(e) = write_report(&output_path, &html) {
        warn!(error = %e, "Report not written");
    }

    println!(
        "Executive security report generated: {}",
        output_path.display()
    );
    println!(
        "Report summary: {} - {} risk",
        report.compliance_status, report.risk_level
    );

    ExitCode::SUCCESS
}

fn write_report(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|e| ReportError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn output_path(cli: &Cli) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| cli.dir.join("executive-report.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ComplianceStatus, RiskLevel};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_report_with_no_inputs() {
        let dir = TempDir::new().unwrap();
        let report = build_report(dir.path());

        assert!(report.issues.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.compliance_status, ComplianceStatus::Compliant);
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn test_secret_override_wins_over_static_analysis() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SEMGREP_FILE),
            r#"{"paths": {"scanned": ["a.js"]}, "results": []}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(GITLEAKS_FILE),
            r#"[{"Description": "API Key", "File": "env.sh", "StartLine": 2, "RuleID": "generic-api-key"}]"#,
        )
        .unwrap();

        let report = build_report(dir.path());
        assert_eq!(report.risk_level, RiskLevel::Critical);
        assert_eq!(report.compliance_status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_vulnerabilities_add_issues_without_changing_posture() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(VULNERABILITIES_FILE),
            r#"{"matches": [{"artifact": {"name": "express"}, "vulnerability": {"id": "CVE-1", "severity": "HIGH"}}]}"#,
        )
        .unwrap();

        let report = build_report(dir.path());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(report.recommendations[0].contains("IMMEDIATE ACTION"));
    }
}
