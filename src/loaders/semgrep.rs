//! Static-analysis (Semgrep PII scan) loader.
//!
//! This is the only loader that knows how many files were scanned, so it
//! also sets `total_files_scanned`. It classifies the aggregate posture
//! from its own results: any ERROR-severity finding means HIGH risk and
//! NON-COMPLIANT, anything milder means MEDIUM / PARTIALLY COMPLIANT.

use crate::guidance;
use crate::report::{ComplianceStatus, Issue, IssueKind, Report, RiskLevel};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SemgrepOutput {
    #[serde(default)]
    paths: ScannedPaths,
    #[serde(default)]
    results: Vec<SemgrepResult>,
}

#[derive(Debug, Default, Deserialize)]
struct ScannedPaths {
    #[serde(default)]
    scanned: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SemgrepResult {
    check_id: String,
    path: String,
    start: Position,
    extra: ResultExtra,
}

#[derive(Debug, Deserialize)]
struct Position {
    line: usize,
}

#[derive(Debug, Deserialize)]
struct ResultExtra {
    severity: String,
    message: String,
}

/// Load Semgrep PII detection results into the report.
pub fn load(path: &Path, report: &mut Report) {
    let output: SemgrepOutput = match super::read_json(path) {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, "Skipping static analysis results");
            return;
        }
    };

    report.total_files_scanned = output.paths.scanned.len();

    for result in &output.results {
        let guidance = guidance::for_rule(&result.check_id);
        report.issues.push(Issue {
            kind: IssueKind::GdprViolation,
            severity: result.extra.severity.clone(),
            message: result.extra.message.clone(),
            file: result.path.clone(),
            line: result.start.line,
            rule_id: result.check_id.clone(),
            business_impact: guidance.impact.to_string(),
            remediation: guidance.remediation.to_string(),
        });
    }

    if output.results.is_empty() {
        report.risk_level = RiskLevel::Low;
        report.compliance_status = ComplianceStatus::Compliant;
    } else if output.results.iter().any(|r| r.extra.severity == "ERROR") {
        report.risk_level = RiskLevel::High;
        report.compliance_status = ComplianceStatus::NonCompliant;
    } else {
        report.risk_level = RiskLevel::Medium;
        report.compliance_status = ComplianceStatus::PartiallyCompliant;
    }

    debug!(
        files = report.total_files_scanned,
        violations = output.results.len(),
        "Loaded static analysis results"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(content: &str) -> Report {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        let mut report = Report::new();
        load(file.path(), &mut report);
        report
    }

    #[test]
    fn test_missing_file_leaves_report_unchanged() {
        let mut report = Report::new();
        load(Path::new("/nonexistent/pii-scan.json"), &mut report);
        assert!(report.issues.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.compliance_status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_malformed_json_leaves_report_unchanged() {
        let report = load_str("{{{ definitely not json");
        assert!(report.issues.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_results_is_compliant() {
        let report = load_str(
            r#"{"paths": {"scanned": ["a.js", "b.js", "c.js"]}, "results": []}"#,
        );
        assert_eq!(report.total_files_scanned, 3);
        assert!(report.issues.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.compliance_status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_error_severity_is_non_compliant() {
        let report = load_str(
            r#"{
                "paths": {"scanned": ["src/user.js"]},
                "results": [{
                    "check_id": "rules.gdpr.hardcoded-personal-data",
                    "path": "src/user.js",
                    "start": {"line": 14},
                    "extra": {"severity": "ERROR", "message": "Hardcoded email address"}
                }]
            }"#,
        );
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.compliance_status, ComplianceStatus::NonCompliant);

        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::GdprViolation);
        assert_eq!(issue.severity, "ERROR");
        assert_eq!(issue.line, 14);
        assert!(issue.business_impact.contains("GDPR Article 5"));
    }

    #[test]
    fn test_warning_only_is_partially_compliant() {
        let report = load_str(
            r#"{
                "paths": {"scanned": ["src/log.js"]},
                "results": [{
                    "check_id": "rules.gdpr.detect-pii-in-logs",
                    "path": "src/log.js",
                    "start": {"line": 7},
                    "extra": {"severity": "WARNING", "message": "PII in log statement"}
                }]
            }"#,
        );
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(
            report.compliance_status,
            ComplianceStatus::PartiallyCompliant
        );
    }

    #[test]
    fn test_unknown_rule_gets_fallback_guidance() {
        let report = load_str(
            r#"{
                "paths": {"scanned": []},
                "results": [{
                    "check_id": "rules.custom.brand-new-rule",
                    "path": "src/a.js",
                    "start": {"line": 1},
                    "extra": {"severity": "WARNING", "message": "Something"}
                }]
            }"#,
        );
        assert_eq!(
            report.issues[0].business_impact,
            "Potential compliance and security risk"
        );
    }
}
