//! Core report data model.
//!
//! A single [`Report`] is built per run: the loaders append [`Issue`]s and
//! adjust the aggregate risk/compliance posture, the recommender fills in
//! `recommendations`, and the reporter renders the final value read-only.

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "GDPR-Compliant DevSecOps Pipeline";
pub const COMPLIANCE_FRAMEWORK: &str = "UK GDPR + DevSecOps Best Practices";

/// Which scanner family a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    GdprViolation,
    SecretExposure,
    DependencyVulnerability,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::GdprViolation => "GDPR Compliance Violation",
            IssueKind::SecretExposure => "Secret/PII Exposure",
            IssueKind::DependencyVulnerability => "Dependency Vulnerability",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized finding, regardless of source scanner.
///
/// `severity` carries the scanner-native label (Semgrep emits ERROR/WARNING,
/// the others LOW through CRITICAL) and is rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: String,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub rule_id: String,
    pub business_impact: String,
    pub remediation: String,
}

impl Issue {
    /// Whether this issue counts toward the "immediate action" threshold.
    pub fn is_high_or_critical(&self) -> bool {
        self.severity == "HIGH" || self.severity == "CRITICAL"
    }

    /// Whether this issue carries a GDPR-specific business impact.
    pub fn is_gdpr_related(&self) -> bool {
        self.business_impact.contains("GDPR")
    }
}

/// Overall risk posture for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// CSS class suffix used by the HTML template.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regulatory posture derived from findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "COMPLIANT",
            ComplianceStatus::PartiallyCompliant => "PARTIALLY COMPLIANT",
            ComplianceStatus::NonCompliant => "NON-COMPLIANT",
        }
    }

    /// CSS class used by the HTML template (lowercased, spaces to dashes).
    pub fn css_class(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::PartiallyCompliant => "partially-compliant",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate report state for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub scan_date: String,
    pub project_name: String,
    pub compliance_framework: String,
    pub total_files_scanned: usize,
    pub issues: Vec<Issue>,
    pub compliance_status: ComplianceStatus,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            scan_date: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            project_name: PROJECT_NAME.to_string(),
            compliance_framework: COMPLIANCE_FRAMEWORK.to_string(),
            total_files_scanned: 0,
            issues: Vec::new(),
            compliance_status: ComplianceStatus::Compliant,
            risk_level: RiskLevel::Low,
            recommendations: Vec::new(),
        }
    }

    /// Force the worst-case posture. Secret findings use this; nothing
    /// downgrades it afterwards.
    pub fn escalate_to_critical(&mut self) {
        self.risk_level = RiskLevel::Critical;
        self.compliance_status = ComplianceStatus::NonCompliant;
    }

}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
