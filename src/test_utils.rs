#[cfg(test)]
pub mod fixtures {
    use crate::report::{Issue, IssueKind, Report};

    pub fn test_report(issues: Vec<Issue>) -> Report {
        let mut report = Report::new();
        report.scan_date = "2026-08-28 12:00:00 UTC".to_string();
        report.total_files_scanned = 42;
        report.issues = issues;
        report
    }

    pub fn gdpr_issue(severity: &str) -> Issue {
        Issue {
            kind: IssueKind::GdprViolation,
            severity: severity.to_string(),
            message: "Hardcoded email address detected".to_string(),
            file: "src/models/user.js".to_string(),
            line: 14,
            rule_id: "rules.gdpr.hardcoded-personal-data".to_string(),
            business_impact: "GDPR Article 5 violation - ICO fine risk up to £20M, reputational damage"
                .to_string(),
            remediation: "Remove hardcoded PII, use environment variables or secure configuration"
                .to_string(),
        }
    }

    pub fn secret_issue() -> Issue {
        Issue {
            kind: IssueKind::SecretExposure,
            severity: "HIGH".to_string(),
            message: "Potential AWS Access Key detected".to_string(),
            file: "config/deploy.sh".to_string(),
            line: 12,
            rule_id: "aws-access-token".to_string(),
            business_impact: "Data breach risk, ICO fine exposure (up to £20M)".to_string(),
            remediation: "Remove secret from code, rotate credentials, implement secrets management"
                .to_string(),
        }
    }
}
