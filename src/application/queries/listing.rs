// src/application/queries/listing.rs
use crate::{
    application::{dto::Page, error::ApplicationResult},
    domain::{
        errors::DomainResult,
        listing::{ListQuery, ensure_page_in_range},
    },
};
use std::future::Future;

/// Runs the page and count queries of one listing concurrently and applies
/// the pagination guard to the combined result.
pub(super) async fn assemble_page<T, P, C>(
    query: &ListQuery,
    page: P,
    count: C,
) -> ApplicationResult<Page<T>>
where
    P: Future<Output = DomainResult<Vec<T>>>,
    C: Future<Output = DomainResult<u64>>,
{
    let (items, total_count) = tokio::try_join!(page, count)?;
    ensure_page_in_range(total_count, query.limit(), query.page())?;

    tracing::debug!(
        total_count,
        returned = items.len(),
        limit = query.limit(),
        page = query.page(),
        "collection page assembled"
    );

    Ok(Page::new(items, total_count))
}

/// Drives a parent existence check alongside its listing. A missing parent is
/// reported even when the listing itself failed.
pub(super) async fn with_parent<T, E, L>(existence: E, listing: L) -> ApplicationResult<T>
where
    E: Future<Output = ApplicationResult<()>>,
    L: Future<Output = ApplicationResult<T>>,
{
    let (parent, listing) = tokio::join!(existence, listing);
    parent?;
    listing
}
