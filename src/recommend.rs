//! Executive recommendations derived from the aggregated findings.

use crate::report::Issue;

const ALL_CLEAR: [&str; 3] = [
    "Continue current security practices",
    "Consider implementing additional monitoring for runtime security",
    "Schedule quarterly security reviews to maintain compliance posture",
];

const HIGH_SEVERITY_FOLLOWUPS: [&str; 2] = [
    "Implement mandatory security training for development team",
    "Review and strengthen code review processes",
];

const GDPR_FOLLOWUPS: [&str; 3] = [
    "Schedule legal review of data processing practices",
    "Conduct GDPR compliance training for technical teams",
    "Implement Data Protection Impact Assessment (DPIA) process",
];

/// Derive the recommendation list from the final set of issues.
///
/// Blocks accumulate: the high-severity block comes first, then the GDPR
/// block when any issue's business impact mentions GDPR.
pub fn recommendations(issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return ALL_CLEAR.iter().map(|s| s.to_string()).collect();
    }

    let mut recommendations = Vec::new();

    let high_severity_count = issues.iter().filter(|i| i.is_high_or_critical()).count();
    if high_severity_count > 0 {
        recommendations.push(format!(
            "IMMEDIATE ACTION: Address {high_severity_count} high/critical severity issues"
        ));
        recommendations.extend(HIGH_SEVERITY_FOLLOWUPS.iter().map(|s| s.to_string()));
    }

    if issues.iter().any(|i| i.is_gdpr_related()) {
        recommendations.extend(GDPR_FOLLOWUPS.iter().map(|s| s.to_string()));
    }

    recommendations
}
