use serde::{Deserialize, Serialize};

/// A listed item that can be tested against a [`Predicate`](crate::Predicate).
///
/// The resolver only ever reads these two fields. Everything else the
/// implementing type carries is handed back to the caller untouched.
pub trait Candidate {
    /// Human-readable name of the rule group.
    fn name(&self) -> &str;

    /// `CloudWatch` metric name of the rule group.
    fn metric_name(&self) -> &str;
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn metric_name(&self) -> &str {
        (**self).metric_name()
    }
}

/// Summary of a subscribed (marketplace) rule group, as returned by the
/// `ListSubscribedRuleGroups` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroupSummary {
    /// Provider-assigned identifier of the rule group.
    pub rule_group_id: String,

    /// Human-readable name.
    pub name: String,

    /// Metric name used for the group's `CloudWatch` metrics.
    pub metric_name: String,
}

impl RuleGroupSummary {
    pub fn new(
        rule_group_id: impl Into<String>,
        name: impl Into<String>,
        metric_name: impl Into<String>,
    ) -> Self {
        Self {
            rule_group_id: rule_group_id.into(),
            name: name.into(),
            metric_name: metric_name.into(),
        }
    }
}

impl Candidate for RuleGroupSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn metric_name(&self) -> &str {
        &self.metric_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_exposes_candidate_fields() {
        let summary = RuleGroupSummary::new("rg-1", "Fortinet Managed Rules", "FortinetOWASP");
        assert_eq!(Candidate::name(&summary), "Fortinet Managed Rules");
        assert_eq!(Candidate::metric_name(&summary), "FortinetOWASP");
    }

    #[test]
    fn summary_deserializes_from_snake_case() {
        let json = serde_json::json!({
            "rule_group_id": "rg-2",
            "name": "F5 Bot Detection",
            "metric_name": "F5Bots"
        });
        let summary: RuleGroupSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary, RuleGroupSummary::new("rg-2", "F5 Bot Detection", "F5Bots"));
    }
}
