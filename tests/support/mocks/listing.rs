// tests/support/mocks/listing.rs
use newsboard::domain::listing::{PageWindow, SortDirection};
use std::cmp::Ordering;

/// Applies the direction to an ordering that already includes the id tie-breaker.
pub fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// `OFFSET` then optional `LIMIT`, as the SQL rendering does.
pub fn apply_window<T>(rows: Vec<T>, window: PageWindow) -> Vec<T> {
    let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
    let limit = window
        .limit()
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
        .unwrap_or(usize::MAX);
    rows.into_iter().skip(offset).take(limit).collect()
}
