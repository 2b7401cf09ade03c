use super::error::ListingError;

/// Rejects a page that lies beyond the data available for `limit`.
///
/// A zero limit disables paging, and an empty collection admits every page so
/// that "no results" is reported as an empty page rather than an error.
pub fn ensure_page_in_range(total_count: u64, limit: u64, page: u64) -> Result<(), ListingError> {
    if limit == 0 {
        return Ok(());
    }

    let page_count = total_count.div_ceil(limit);
    if page_count > 0 && page > page_count {
        return Err(ListingError::PageOutOfRange);
    }

    Ok(())
}
