/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in listing order.
    pub items: Vec<T>,

    /// Opaque continuation marker. `None` marks the final page.
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    /// Build the final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_marker: None,
        }
    }

    /// Build a page that is followed by the page at `next_marker`.
    pub fn with_next(items: Vec<T>, next_marker: impl Into<String>) -> Self {
        Self {
            items,
            next_marker: Some(next_marker.into()),
        }
    }

    /// Returns `true` if no further pages follow this one.
    pub fn is_last(&self) -> bool {
        self.next_marker.is_none()
    }
}
