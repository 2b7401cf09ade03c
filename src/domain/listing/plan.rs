use super::params::{ListQuery, SortOrder};

/// Row window of a page. A missing limit returns every row after the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: Option<u64>,
    offset: u64,
}

impl PageWindow {
    pub fn for_page(limit: u64, page: u64) -> Self {
        if limit == 0 {
            return Self {
                limit: None,
                offset: 0,
            };
        }

        Self {
            limit: Some(limit),
            offset: page.saturating_sub(1).saturating_mul(limit),
        }
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Filtered, ordered, windowed selection of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec<F> {
    pub filter: F,
    pub order: SortOrder,
    pub window: PageWindow,
}

/// Number of rows matching the filter alone, ignoring order and window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSpec<F> {
    pub filter: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPlan<F> {
    pub page: PageSpec<F>,
    pub count: CountSpec<F>,
}

impl<F: Clone> ListingPlan<F> {
    pub fn build(query: &ListQuery, filter: F) -> Self {
        Self {
            page: PageSpec {
                filter: filter.clone(),
                order: query.order(),
                window: PageWindow::for_page(query.limit(), query.page()),
            },
            count: CountSpec { filter },
        }
    }
}
