//! Rule-to-business-impact mapping.
//!
//! Static analysis rule IDs are namespaced (e.g.
//! `rules.gdpr.hardcoded-personal-data`); the lookup key is the last
//! dot-separated segment. Unknown rules fall back to a generic entry so
//! every finding always carries impact and remediation text.

/// Executive-facing guidance for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub impact: &'static str,
    pub remediation: &'static str,
}

const DEFAULT_GUIDANCE: Guidance = Guidance {
    impact: "Potential compliance and security risk",
    remediation: "Review security best practices and implement appropriate controls",
};

/// Look up guidance for a static-analysis rule ID.
pub fn for_rule(rule_id: &str) -> Guidance {
    let key = rule_id.rsplit('.').next().unwrap_or(rule_id);
    match key {
        "hardcoded-personal-data" => Guidance {
            impact: "GDPR Article 5 violation - ICO fine risk up to £20M, reputational damage",
            remediation: "Remove hardcoded PII, use environment variables or secure configuration",
        },
        "detect-pii-in-logs" => Guidance {
            impact: "Data exposure in logs - breach notification requirement, compliance violation",
            remediation: "Implement PII filtering in logging, use structured logging with field redaction",
        },
        "unencrypted-pii-storage" => Guidance {
            impact: "Article 32 violation - data security inadequacy, audit failure risk",
            remediation: "Implement field-level encryption for sensitive data in database",
        },
        "missing-consent-check" => Guidance {
            impact: "Article 6 violation - unlawful processing, subject access request complications",
            remediation: "Add consent validation before data processing operations",
        },
        "missing-audit-log" => Guidance {
            impact: "Article 30 violation - inability to demonstrate compliance during audit",
            remediation: "Implement comprehensive audit logging for all data operations",
        },
        _ => DEFAULT_GUIDANCE,
    }
}
