use futures::TryStreamExt;
use tracing::{debug, info, instrument, warn};

use crate::candidate::Candidate;
use crate::error::ResolveError;
use crate::lister::Lister;
use crate::paginate::paginate;
use crate::predicate::Predicate;

/// Accumulator folded over every listed candidate of one resolve call.
struct MatchState<'p, T> {
    predicate: &'p Predicate,
    matched: Option<T>,
    pages: usize,
    scanned: usize,
}

impl<'p, T: Candidate> MatchState<'p, T> {
    fn new(predicate: &'p Predicate) -> Self {
        Self {
            predicate,
            matched: None,
            pages: 0,
            scanned: 0,
        }
    }

    /// Record one candidate. Fails on the second candidate that matches.
    fn observe(&mut self, candidate: T) -> Result<(), ResolveError> {
        self.scanned += 1;

        if !self.predicate.matches(&candidate) {
            return Ok(());
        }

        if let Some(previous) = &self.matched {
            warn!(
                first = previous.name(),
                second = candidate.name(),
                page = self.pages,
                "more than one rule group matches"
            );
            return Err(self.predicate.ambiguous());
        }

        debug!(
            name = candidate.name(),
            metric_name = candidate.metric_name(),
            page = self.pages,
            "candidate matches, scanning remaining pages"
        );
        self.matched = Some(candidate);
        Ok(())
    }

    fn finish(self) -> Result<T, ResolveError> {
        match self.matched {
            Some(found) => {
                info!(
                    name = found.name(),
                    metric_name = found.metric_name(),
                    pages = self.pages,
                    scanned = self.scanned,
                    "rule group resolved"
                );
                Ok(found)
            }
            None => {
                info!(pages = self.pages, scanned = self.scanned, "no rule group matches");
                Err(self.predicate.no_match())
            }
        }
    }
}

/// Resolves a [`Predicate`] to exactly one listed item.
///
/// The whole listing is scanned before a result is returned, so a duplicate on
/// the last page is still reported as [`ResolveError::AmbiguousMatch`] even if
/// the first match was on page one. Pages are fetched one after another; the
/// resolver holds no state between calls.
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    lister: L,
}

impl<L: Lister> Resolver<L> {
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    pub fn into_inner(self) -> L {
        self.lister
    }

    /// Scan every page and return the single item matching `predicate`.
    ///
    /// The predicate is validated before any page is requested.
    #[instrument(
        skip_all,
        fields(name = predicate.name(), metric_name = predicate.metric_name())
    )]
    pub async fn resolve(&self, predicate: &Predicate) -> Result<L::Item, ResolveError> {
        predicate.validate()?;

        let state = paginate(&self.lister)
            .try_fold(MatchState::new(predicate), |mut state, page| async move {
                state.pages += 1;
                for candidate in page.items {
                    state.observe(candidate)?;
                }
                Ok::<_, ResolveError>(state)
            })
            .await?;

        state.finish()
    }
}

/// One-shot form of [`Resolver::resolve`] over a borrowed lister.
pub async fn resolve<L: Lister>(
    predicate: &Predicate,
    lister: &L,
) -> Result<L::Item, ResolveError> {
    Resolver::new(lister).resolve(predicate).await
}
