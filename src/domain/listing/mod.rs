//! Collection query engine shared by the article and comment listings.
//!
//! Raw query-string values are resolved against [`ListDefaults`], validated
//! into a [`ListQuery`], turned into a [`ListingPlan`] (one page query and one
//! count query) and finally checked by [`ensure_page_in_range`] once the
//! total number of matching rows is known.

pub mod error;
pub mod guard;
pub mod params;
pub mod plan;

pub use error::{ListValidationError, ListingError, ResourceKind};
pub use guard::ensure_page_in_range;
pub use params::{
    ListDefaults, ListParams, ListQuery, RawListParams, SortColumn, SortDirection, SortOrder,
};
pub use plan::{CountSpec, ListingPlan, PageSpec, PageWindow};
