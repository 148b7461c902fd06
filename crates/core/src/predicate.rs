use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::ResolveError;

/// Partially specified key selecting one rule group.
///
/// Either field may be left out; an empty string counts as left out. At least
/// one of the two must be set for the predicate to be usable. Comparison is
/// exact string equality with no case folding or trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
}

impl Predicate {
    pub fn new(name: Option<String>, metric_name: Option<String>) -> Self {
        Self { name, metric_name }
    }

    /// Select by name only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    /// Select by metric name only.
    pub fn by_metric_name(metric_name: impl Into<String>) -> Self {
        Self::default().with_metric_name(metric_name)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_metric_name(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = Some(metric_name.into());
        self
    }

    /// The name constraint, if one is set and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The metric name constraint, if one is set and non-empty.
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.name().is_none() && self.metric_name().is_none() {
            return Err(ResolveError::InvalidArgument(
                "must specify either name or metric_name".to_owned(),
            ));
        }
        Ok(())
    }

    /// Test each specified field independently against the candidate.
    pub fn matches<C: Candidate + ?Sized>(&self, candidate: &C) -> bool {
        if self.name().is_some_and(|name| candidate.name() != name) {
            return false;
        }
        if self
            .metric_name()
            .is_some_and(|metric_name| candidate.metric_name() != metric_name)
        {
            return false;
        }
        true
    }

    pub(crate) fn no_match(&self) -> ResolveError {
        ResolveError::NoMatch {
            name: self.name().unwrap_or_default().to_owned(),
            metric_name: self.metric_name().unwrap_or_default().to_owned(),
        }
    }

    pub(crate) fn ambiguous(&self) -> ResolveError {
        ResolveError::AmbiguousMatch {
            name: self.name().unwrap_or_default().to_owned(),
            metric_name: self.metric_name().unwrap_or_default().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::RuleGroupSummary;

    fn group(name: &str, metric_name: &str) -> RuleGroupSummary {
        RuleGroupSummary::new(format!("id-{name}-{metric_name}"), name, metric_name)
    }

    #[test]
    fn empty_predicate_is_invalid() {
        let err = Predicate::default().validate().unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument(_)));

        let blank = Predicate::new(Some(String::new()), Some(String::new()));
        assert!(blank.validate().is_err());
    }

    #[test]
    fn either_field_is_enough() {
        assert!(Predicate::by_name("A").validate().is_ok());
        assert!(Predicate::by_metric_name("m1").validate().is_ok());
        assert!(
            Predicate::new(Some(String::new()), Some("m1".into()))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn blank_fields_are_unconstrained() {
        let predicate = Predicate::new(Some("A".into()), Some(String::new()));
        assert_eq!(predicate.name(), Some("A"));
        assert_eq!(predicate.metric_name(), None);
        assert!(predicate.matches(&group("A", "anything")));
    }

    #[test]
    fn name_only_ignores_metric_name() {
        let predicate = Predicate::by_name("A");
        assert!(predicate.matches(&group("A", "m1")));
        assert!(predicate.matches(&group("A", "m2")));
        assert!(!predicate.matches(&group("B", "m1")));
    }

    #[test]
    fn metric_name_only_ignores_name() {
        let predicate = Predicate::by_metric_name("m1");
        assert!(predicate.matches(&group("A", "m1")));
        assert!(predicate.matches(&group("B", "m1")));
        assert!(!predicate.matches(&group("A", "m2")));
    }

    #[test]
    fn both_fields_must_match() {
        let predicate = Predicate::by_name("A").with_metric_name("m1");
        assert!(predicate.matches(&group("A", "m1")));
        assert!(!predicate.matches(&group("A", "m2")));
        assert!(!predicate.matches(&group("B", "m1")));
    }

    #[test]
    fn matching_is_exact() {
        let predicate = Predicate::by_name("Alpha");
        assert!(!predicate.matches(&group("alpha", "m")));
        assert!(!predicate.matches(&group("Alpha ", "m")));
    }

    #[test]
    fn diagnostics_carry_original_values() {
        let predicate = Predicate::by_name("Z");
        match predicate.no_match() {
            ResolveError::NoMatch { name, metric_name } => {
                assert_eq!(name, "Z");
                assert_eq!(metric_name, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn deserializes_partial_json() {
        let predicate: Predicate =
            serde_json::from_value(serde_json::json!({ "metric_name": "m1" })).unwrap();
        assert_eq!(predicate, Predicate::by_metric_name("m1"));
    }
}
