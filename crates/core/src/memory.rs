use parking_lot::Mutex;
use thiserror::Error;

use crate::candidate::Candidate;
use crate::lister::{ListError, Lister};
use crate::page::Page;

/// Errors produced by [`MemoryLister`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryListError {
    #[error("nonexistent item: {0}")]
    NotFound(String),

    #[error("listing failed: {0}")]
    Failed(String),

    #[error("unknown marker: {0}")]
    UnknownMarker(String),
}

impl ListError for MemoryListError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// In-memory [`Lister`] that serves a fixed sequence of pages.
///
/// Page `n` (zero-based) is reached with the marker `"page-<n>"`; the last
/// page carries no marker. An empty page list still answers the first
/// request with one empty, final page. Every request is recorded so tests can
/// assert on exactly which pages were fetched.
#[derive(Debug)]
pub struct MemoryLister<T> {
    pages: Vec<Vec<T>>,
    failure: Option<(usize, MemoryListError)>,
    requests: Mutex<Vec<Option<String>>>,
}

impl<T> MemoryLister<T> {
    pub fn new(pages: Vec<Vec<T>>) -> Self {
        Self {
            pages,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Make the request for page `page` fail with `error`.
    #[must_use]
    pub fn fail_at(mut self, page: usize, error: MemoryListError) -> Self {
        self.failure = Some((page, error));
        self
    }

    /// Number of `list_page` calls made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Markers received so far, in call order.
    pub fn requested_markers(&self) -> Vec<Option<String>> {
        self.requests.lock().clone()
    }

    fn marker_for(index: usize) -> String {
        format!("page-{index}")
    }

    fn index_of(marker: Option<&str>) -> Result<usize, MemoryListError> {
        match marker {
            None => Ok(0),
            Some(m) => m
                .strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| MemoryListError::UnknownMarker(m.to_owned())),
        }
    }
}

impl<T: Clone> MemoryLister<T> {
    fn page(&self, marker: Option<String>) -> Result<Page<T>, MemoryListError> {
        self.requests.lock().push(marker.clone());

        let index = Self::index_of(marker.as_deref())?;

        if let Some((failing, error)) = &self.failure {
            if *failing == index {
                return Err(error.clone());
            }
        }

        if index == 0 && self.pages.is_empty() {
            return Ok(Page::last(Vec::new()));
        }

        let items = self
            .pages
            .get(index)
            .cloned()
            .ok_or_else(|| MemoryListError::UnknownMarker(Self::marker_for(index)))?;

        if index + 1 < self.pages.len() {
            Ok(Page::with_next(items, Self::marker_for(index + 1)))
        } else {
            Ok(Page::last(items))
        }
    }
}

impl<T> Lister for MemoryLister<T>
where
    T: Candidate + Clone + Send + Sync,
{
    type Item = T;
    type Error = MemoryListError;

    fn list_page(
        &self,
        marker: Option<String>,
    ) -> impl std::future::Future<Output = Result<Page<T>, MemoryListError>> + Send {
        std::future::ready(self.page(marker))
    }
}
