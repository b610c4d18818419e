//! Dependency-vulnerability (Grype/Syft) loader.
//!
//! Only HIGH and CRITICAL matches become issues; lower severities are
//! dropped silently. This loader does not alter the aggregate
//! risk/compliance posture. Only the static-analysis and secret loaders
//! feed the aggregate; that asymmetry is intentional and documented in
//! DESIGN.md.

use crate::report::{Issue, IssueKind, Report};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

const VULN_IMPACT: &str = "Supply chain security risk, potential data exposure";

#[derive(Debug, Deserialize)]
struct GrypeOutput {
    #[serde(default)]
    matches: Vec<VulnerabilityMatch>,
}

#[derive(Debug, Deserialize)]
struct VulnerabilityMatch {
    #[serde(default)]
    artifact: Artifact,
    #[serde(default)]
    vulnerability: Vulnerability,
}

#[derive(Debug, Default, Deserialize)]
struct Artifact {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Vulnerability {
    id: Option<String>,
    severity: Option<String>,
    fix: Option<Fix>,
}

#[derive(Debug, Deserialize)]
struct Fix {
    #[serde(default)]
    versions: Vec<String>,
}

impl VulnerabilityMatch {
    fn fix_version(&self) -> &str {
        self.vulnerability
            .fix
            .as_ref()
            .and_then(|fix| fix.versions.first())
            .map(String::as_str)
            .unwrap_or("latest")
    }
}

/// Load Grype vulnerability scan results into the report.
pub fn load(path: &Path, report: &mut Report) {
    let output: GrypeOutput = match super::read_json(path) {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, "Skipping vulnerability scan results");
            return;
        }
    };

    let mut added = 0;
    for vuln_match in &output.matches {
        let severity = vuln_match
            .vulnerability
            .severity
            .as_deref()
            .unwrap_or("UNKNOWN");
        if severity != "HIGH" && severity != "CRITICAL" {
            continue;
        }

        let artifact = vuln_match.artifact.name.as_deref().unwrap_or("Unknown");
        report.issues.push(Issue {
            kind: IssueKind::DependencyVulnerability,
            severity: severity.to_string(),
            message: format!("Vulnerable dependency: {artifact}"),
            file: "package.json".to_string(),
            line: 0,
            rule_id: vuln_match
                .vulnerability
                .id
                .clone()
                .unwrap_or_else(|| "vuln-scan".to_string()),
            business_impact: VULN_IMPACT.to_string(),
            remediation: format!("Update to version {}", vuln_match.fix_version()),
        });
        added += 1;
    }

    debug!(
        matches = output.matches.len(),
        reported = added,
        "Loaded vulnerability scan results"
    );
}
