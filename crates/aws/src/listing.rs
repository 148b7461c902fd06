use waf_lookup_core::{Page, RuleGroupSummary};

/// Assemble a page from mapped summaries and the raw `NextMarker`.
///
/// An empty marker is treated the same as an absent one so a misbehaving
/// endpoint cannot keep the scan looping on the first page.
pub(crate) fn page_from_parts(
    items: Vec<RuleGroupSummary>,
    next_marker: Option<&str>,
) -> Page<RuleGroupSummary> {
    match next_marker.filter(|m| !m.is_empty()) {
        Some(marker) => Page::with_next(items, marker),
        None => Page::last(items),
    }
}
