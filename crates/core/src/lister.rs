use crate::candidate::Candidate;
use crate::page::Page;

/// Classification hook for errors returned by a [`Lister`].
///
/// The resolver only needs to tell "the listing target does not exist" apart
/// from every other failure.
pub trait ListError: std::error::Error + Send + Sync + 'static {
    /// Returns `true` if the provider reported that the listed collection or
    /// item does not exist.
    fn is_not_found(&self) -> bool;
}

/// Source of successive pages of candidates.
///
/// This is the only I/O boundary of the resolver. Implementations decide how
/// a page is fetched (SDK call, HTTP, fixture file) and how the call is
/// authenticated. Any retry or cancellation behaviour belongs here as well.
///
/// The trait uses native `async fn` style return types and is therefore not
/// object-safe; use generics at call sites.
pub trait Lister: Send + Sync {
    /// Item type produced by the listing.
    type Item: Candidate + Send;

    /// Error type reported by a failed page request.
    type Error: ListError;

    /// Fetch the page identified by `marker`, or the first page when `marker`
    /// is `None`.
    fn list_page(
        &self,
        marker: Option<String>,
    ) -> impl std::future::Future<Output = Result<Page<Self::Item>, Self::Error>> + Send;
}

impl<L: Lister + ?Sized> Lister for &L {
    type Item = L::Item;
    type Error = L::Error;

    fn list_page(
        &self,
        marker: Option<String>,
    ) -> impl std::future::Future<Output = Result<Page<Self::Item>, Self::Error>> + Send {
        (**self).list_page(marker)
    }
}
