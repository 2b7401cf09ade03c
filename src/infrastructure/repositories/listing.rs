// src/infrastructure/repositories/listing.rs
use crate::domain::listing::{PageWindow, SortOrder};
use sqlx::{Postgres, QueryBuilder};

/// Appends `ORDER BY` with the row identity as a tie-breaker in the same
/// direction. `column` and `id_column` must be trusted identifiers.
pub(super) fn push_order(
    builder: &mut QueryBuilder<'_, Postgres>,
    column: &'static str,
    id_column: &'static str,
    order: SortOrder,
) {
    let direction = order.direction.as_sql();
    builder.push(" ORDER BY ");
    builder.push(column);
    builder.push(" ");
    builder.push(direction);
    if column != id_column {
        builder.push(", ");
        builder.push(id_column);
        builder.push(" ");
        builder.push(direction);
    }
}

/// Appends `LIMIT`/`OFFSET`. An unbounded window emits no `LIMIT`.
pub(super) fn push_window(builder: &mut QueryBuilder<'_, Postgres>, window: PageWindow) {
    if let Some(limit) = window.limit() {
        builder.push(" LIMIT ");
        builder.push_bind(to_bigint(limit));
    }
    builder.push(" OFFSET ");
    builder.push_bind(to_bigint(window.offset()));
}

fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
