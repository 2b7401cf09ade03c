use super::error::ListValidationError;
use crate::domain::topic::TopicSlug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
}

impl SortColumn {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Topic,
        Self::Author,
        Self::CreatedAt,
        Self::Votes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Topic => "topic",
            Self::Author => "author",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
        }
    }

    /// Exact, case-sensitive match against the column names.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == value)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Case-insensitive: `ASC`, `asc` and `Asc` are all accepted.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Values used for any collection parameter the client leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDefaults {
    /// `sort_by`; `created_at` unless configured otherwise.
    pub sort_column: SortColumn,
    /// `order`; `desc`.
    pub sort_direction: SortDirection,
    /// `limit`; 10 rows per page. An explicit `limit=0` lifts the limit, an
    /// absent one never does.
    pub limit: u64,
    /// `p`; the first page.
    pub page: u64,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            sort_column: SortColumn::CreatedAt,
            sort_direction: SortDirection::Desc,
            limit: 10,
            page: 1,
        }
    }
}

impl ListDefaults {
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }
}

/// Collection parameters exactly as they arrived on the query string.
#[derive(Debug, Clone, Default)]
pub struct RawListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Collection parameters with every default filled in, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub topic: Option<TopicSlug>,
    pub sort_by: String,
    pub order: String,
    pub limit: String,
    pub page: String,
}

impl ListParams {
    pub fn resolve(raw: RawListParams, defaults: &ListDefaults) -> Self {
        Self {
            topic: TopicSlug::from_query(raw.topic),
            sort_by: raw
                .sort_by
                .unwrap_or_else(|| defaults.sort_column.as_str().to_string()),
            order: raw
                .order
                .unwrap_or_else(|| defaults.sort_direction.as_str().to_string()),
            limit: raw.limit.unwrap_or_else(|| defaults.limit.to_string()),
            page: raw.p.unwrap_or_else(|| defaults.page.to_string()),
        }
    }
}

/// A validated collection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    topic: Option<TopicSlug>,
    order: SortOrder,
    limit: u64,
    page: u64,
}

impl ListQuery {
    /// Validates resolved parameters. The first failing check wins:
    /// sort column, direction, limit syntax, page syntax, then ranges.
    pub fn parse(params: &ListParams) -> Result<Self, ListValidationError> {
        let column =
            SortColumn::parse(&params.sort_by).ok_or(ListValidationError::InvalidSortColumn)?;
        let direction =
            SortDirection::parse(&params.order).ok_or(ListValidationError::InvalidSortDirection)?;
        let limit = parse_whole_number(&params.limit).ok_or(ListValidationError::InvalidLimit)?;
        let page = parse_whole_number(&params.page).ok_or(ListValidationError::InvalidPage)?;

        let limit = u64::try_from(limit).ok();
        let page = u64::try_from(page).ok().filter(|page| *page >= 1);
        let (Some(limit), Some(page)) = (limit, page) else {
            return Err(ListValidationError::NonPositivePaging);
        };

        Ok(Self {
            topic: params.topic.clone(),
            order: SortOrder { column, direction },
            limit,
            page,
        })
    }

    pub fn topic(&self) -> Option<&TopicSlug> {
        self.topic.as_ref()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Zero means every matching row.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn page(&self) -> u64 {
        self.page
    }
}

fn parse_whole_number(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
