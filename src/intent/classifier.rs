use crate::models::{Category, QuerySpec};
use tracing::debug;

struct IntentRule {
    keywords: &'static [&'static str],
    endpoint: &'static str,
    category: Category,
}

/// Evaluated top to bottom; the first rule with any keyword contained in the
/// lower-cased query wins. Order is part of the contract: "alert" beats "vuln".
const RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["alert", "issue"],
        endpoint: "/alerts",
        category: Category::Alerts,
    },
    IntentRule {
        keywords: &["asset", "resource", "inventory"],
        endpoint: "/assets",
        category: Category::Assets,
    },
    IntentRule {
        keywords: &["vulnerability", "vuln", "cve"],
        endpoint: "/alerts?type=vulnerability",
        category: Category::Vulnerabilities,
    },
    IntentRule {
        keywords: &["compliance", "policy"],
        endpoint: "/alerts?type=compliance",
        category: Category::ComplianceIssues,
    },
    IntentRule {
        keywords: &["misconfiguration", "config"],
        endpoint: "/alerts?type=misconfiguration",
        category: Category::Misconfigurations,
    },
];

static DEFAULT_RULE: IntentRule = IntentRule {
    keywords: &[],
    endpoint: "/alerts",
    category: Category::Alerts,
};

/// Map a free-text question to the remote query it asks for. Never fails.
pub fn classify(query: &str) -> QuerySpec {
    let lower = query.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .unwrap_or(&DEFAULT_RULE);

    debug!(endpoint = rule.endpoint, category = %rule.category, "Classified query");
    QuerySpec::new(rule.endpoint, rule.category)
}
