//! Secret-detection (Gitleaks) loader.
//!
//! Any leaked secret is treated as an automatic worst case: every finding
//! forces the aggregate posture to CRITICAL / NON-COMPLIANT, overriding
//! whatever the static-analysis loader decided. This loader therefore has
//! highest precedence regardless of how the others classify.

use crate::report::{Issue, IssueKind, Report};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

const SECRET_SEVERITY: &str = "HIGH";
const SECRET_IMPACT: &str = "Data breach risk, ICO fine exposure (up to £20M)";
const SECRET_REMEDIATION: &str =
    "Remove secret from code, rotate credentials, implement secrets management";

/// One Gitleaks finding. All fields are optional in the wild, so each has
/// a fallback.
#[derive(Debug, Deserialize)]
struct GitleaksFinding {
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "File")]
    file: Option<String>,
    #[serde(rename = "StartLine")]
    start_line: Option<usize>,
    #[serde(rename = "RuleID")]
    rule_id: Option<String>,
}

/// Load Gitleaks secret detection results into the report.
pub fn load(path: &Path, report: &mut Report) {
    let findings: Vec<GitleaksFinding> = match super::read_json(path) {
        Ok(findings) => findings,
        Err(e) => {
            warn!(error = %e, "Skipping secret detection results");
            return;
        }
    };

    for finding in &findings {
        let description = finding.description.as_deref().unwrap_or("secret");
        report.issues.push(Issue {
            kind: IssueKind::SecretExposure,
            severity: SECRET_SEVERITY.to_string(),
            message: format!("Potential {description} detected"),
            file: finding.file.clone().unwrap_or_else(|| "Unknown".to_string()),
            line: finding.start_line.unwrap_or(0),
            rule_id: finding
                .rule_id
                .clone()
                .unwrap_or_else(|| "secret-detection".to_string()),
            business_impact: SECRET_IMPACT.to_string(),
            remediation: SECRET_REMEDIATION.to_string(),
        });

        // Any secret in the codebase is an automatic worst case.
        report.escalate_to_critical();
    }

    debug!(secrets = findings.len(), "Loaded secret detection results");
}
