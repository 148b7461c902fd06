use futures::{Stream, stream};
use tracing::{debug, error, warn};

use crate::error::ResolveError;
use crate::lister::{ListError, Lister};
use crate::page::Page;

/// Position of the pagination stream between polls.
enum Cursor {
    First,
    Next(String),
    Done,
}

/// Lazily walk every page of `lister`.
///
/// Each poll issues at most one `list_page` call, sending the marker returned
/// by the previous page. The stream ends after the page that carries no
/// marker. Nothing is prefetched, so dropping the stream stops the listing.
///
/// Lister failures are classified into [`ResolveError::NotFound`] or
/// [`ResolveError::Transport`] and tagged with the page index and marker of
/// the failed request. No request is made after an error.
pub fn paginate<L: Lister>(
    lister: &L,
) -> impl Stream<Item = Result<Page<L::Item>, ResolveError>> + Send + '_ {
    stream::try_unfold((Cursor::First, 0usize), move |(cursor, index)| async move {
        let marker = match cursor {
            Cursor::Done => return Ok(None),
            Cursor::First => None,
            Cursor::Next(marker) => Some(marker),
        };

        debug!(page = index, marker = ?marker, "requesting page");

        let page = lister
            .list_page(marker.clone())
            .await
            .map_err(|e| classify(e, index, marker))?;

        let cursor = match &page.next_marker {
            Some(next) => Cursor::Next(next.clone()),
            None => Cursor::Done,
        };

        debug!(page = index, items = page.items.len(), last = page.is_last(), "received page");

        Ok(Some((page, (cursor, index + 1))))
    })
}

fn classify<E: ListError>(err: E, page: usize, marker: Option<String>) -> ResolveError {
    if err.is_not_found() {
        warn!(page, marker = ?marker, error = %err, "listing target does not exist");
        ResolveError::NotFound {
            page,
            marker,
            source: Box::new(err),
        }
    } else {
        error!(page, marker = ?marker, error = %err, "page request failed");
        ResolveError::Transport {
            page,
            marker,
            source: Box::new(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;
    use crate::candidate::RuleGroupSummary;
    use crate::memory::{MemoryListError, MemoryLister};

    fn group(n: u8) -> RuleGroupSummary {
        RuleGroupSummary::new(format!("rg-{n}"), format!("group-{n}"), format!("metric{n}"))
    }

    fn ids(pages: Vec<Page<RuleGroupSummary>>) -> Vec<String> {
        pages
            .into_iter()
            .flat_map(|p| p.items)
            .map(|g| g.rule_group_id)
            .collect()
    }

    #[tokio::test]
    async fn yields_every_page_in_order() {
        let lister =
            MemoryLister::new(vec![vec![group(1), group(2)], vec![group(3)], vec![group(4)]]);

        let pages: Vec<_> = paginate(&lister).try_collect().await.unwrap();

        assert_eq!(ids(pages), vec!["rg-1", "rg-2", "rg-3", "rg-4"]);
        assert_eq!(
            lister.requested_markers(),
            vec![None, Some("page-1".to_owned()), Some("page-2".to_owned())]
        );
    }

    #[tokio::test]
    async fn empty_listing_is_one_request() {
        let lister: MemoryLister<RuleGroupSummary> = MemoryLister::new(Vec::new());

        let pages: Vec<_> = paginate(&lister).try_collect().await.unwrap();

        assert_eq!(pages.len(), 1);
        assert!(pages[0].items.is_empty());
        assert_eq!(lister.call_count(), 1);
    }

    #[tokio::test]
    async fn nothing_is_requested_until_polled() {
        let lister = MemoryLister::new(vec![vec![group(1)], vec![group(2)]]);

        let stream = paginate(&lister);
        assert_eq!(lister.call_count(), 0);
        drop(stream);
        assert_eq!(lister.call_count(), 0);
    }

    #[tokio::test]
    async fn failure_stops_the_stream() {
        let lister = MemoryLister::new(vec![vec![group(1)], vec![group(2)], vec![group(3)]])
            .fail_at(1, MemoryListError::Failed("connection reset".into()));

        let err = paginate(&lister)
            .try_collect::<Vec<_>>()
            .await
            .unwrap_err();

        match err {
            ResolveError::Transport { page, marker, .. } => {
                assert_eq!(page, 1);
                assert_eq!(marker.as_deref(), Some("page-1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(lister.call_count(), 2);
    }

    #[tokio::test]
    async fn not_found_is_classified() {
        let lister = MemoryLister::new(vec![vec![group(1)]])
            .fail_at(0, MemoryListError::NotFound("no such list".into()));

        let err = paginate(&lister)
            .try_collect::<Vec<_>>()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::NotFound {
                page: 0,
                marker: None,
                ..
            }
        ));
    }
}
