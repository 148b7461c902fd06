use thiserror::Error;

/// Boxed provider error carried as the source of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`Resolver::resolve`](crate::Resolver::resolve).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The predicate does not constrain anything.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider reported that the listed collection does not exist.
    #[error("subscribed rule groups not found (page {page}, marker {marker:?})")]
    NotFound {
        /// Zero-based index of the page request that failed.
        page: usize,
        /// Continuation marker sent with the failed request.
        marker: Option<String>,
        #[source]
        source: BoxError,
    },

    /// Any other failure reported by the lister.
    #[error("listing page {page} (marker {marker:?}) failed: {source}")]
    Transport {
        /// Zero-based index of the page request that failed.
        page: usize,
        /// Continuation marker sent with the failed request.
        marker: Option<String>,
        #[source]
        source: BoxError,
    },

    /// The whole listing was scanned and nothing satisfied the predicate.
    #[error("no matches found for name {name:?} and metric name {metric_name:?}")]
    NoMatch { name: String, metric_name: String },

    /// More than one listed item satisfied the predicate.
    #[error("multiple matches found for name {name:?} and metric name {metric_name:?}")]
    AmbiguousMatch { name: String, metric_name: String },
}

/// Field-less tag of a [`ResolveError`], convenient for matching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    InvalidArgument,
    NotFound,
    Transport,
    NoMatch,
    AmbiguousMatch,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::InvalidArgument(_) => ResolveErrorKind::InvalidArgument,
            Self::NotFound { .. } => ResolveErrorKind::NotFound,
            Self::Transport { .. } => ResolveErrorKind::Transport,
            Self::NoMatch { .. } => ResolveErrorKind::NoMatch,
            Self::AmbiguousMatch { .. } => ResolveErrorKind::AmbiguousMatch,
        }
    }

    /// Returns `true` if the rule group does not exist, either because the
    /// listing itself is missing or because no listed item matched.
    ///
    /// Callers use this for "skip if absent" flows such as teardown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoMatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_source(msg: &str) -> BoxError {
        Box::new(std::io::Error::other(msg.to_owned()))
    }

    #[test]
    fn kind_tags_every_variant() {
        let cases = [
            (
                ResolveError::InvalidArgument("x".into()),
                ResolveErrorKind::InvalidArgument,
            ),
            (
                ResolveError::NotFound {
                    page: 0,
                    marker: None,
                    source: io_source("gone"),
                },
                ResolveErrorKind::NotFound,
            ),
            (
                ResolveError::Transport {
                    page: 1,
                    marker: Some("m".into()),
                    source: io_source("reset"),
                },
                ResolveErrorKind::Transport,
            ),
            (
                ResolveError::NoMatch {
                    name: "a".into(),
                    metric_name: String::new(),
                },
                ResolveErrorKind::NoMatch,
            ),
            (
                ResolveError::AmbiguousMatch {
                    name: "a".into(),
                    metric_name: String::new(),
                },
                ResolveErrorKind::AmbiguousMatch,
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn not_found_and_no_match_count_as_absent() {
        let not_found = ResolveError::NotFound {
            page: 0,
            marker: None,
            source: io_source("gone"),
        };
        let no_match = ResolveError::NoMatch {
            name: "a".into(),
            metric_name: String::new(),
        };
        let ambiguous = ResolveError::AmbiguousMatch {
            name: "a".into(),
            metric_name: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(no_match.is_not_found());
        assert!(!ambiguous.is_not_found());
    }

    #[test]
    fn error_display() {
        let err = ResolveError::NoMatch {
            name: "Z".into(),
            metric_name: String::new(),
        };
        assert_eq!(
            err.to_string(),
            r#"no matches found for name "Z" and metric name """#
        );

        let err = ResolveError::Transport {
            page: 2,
            marker: Some("next".into()),
            source: io_source("connection reset"),
        };
        assert_eq!(
            err.to_string(),
            r#"listing page 2 (marker Some("next")) failed: connection reset"#
        );
    }

    #[test]
    fn not_found_exposes_source() {
        use std::error::Error as _;

        let err = ResolveError::NotFound {
            page: 0,
            marker: None,
            source: io_source("WAFNonexistentItemException"),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("WAFNonexistentItemException"));
    }
}
