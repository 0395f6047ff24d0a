//! Pagination and sort-direction types.
//!
//! Unlike a clamp-to-defaults helper, out-of-domain page parameters are
//! rejected: a zero page number or page size is an `InvalidParameter` error.

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Validate and convert to `(skip, take)`.
    pub fn validate(self) -> Result<(usize, usize), QueryError> {
        if self.per_page < 1 {
            return Err(QueryError::InvalidParameter(format!("page size must be >= 1, got {}", self.per_page)));
        }
        if self.page < 1 {
            return Err(QueryError::InvalidParameter(format!("page number must be >= 1, got {}", self.page)));
        }
        let skip = (self.page - 1).saturating_mul(self.per_page);
        Ok((usize::try_from(skip).unwrap_or(usize::MAX), usize::try_from(self.per_page).unwrap_or(usize::MAX)))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 1 } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc` in any case; anything else, padded tokens included, is `InvalidSortOrder`.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        if token.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(QueryError::InvalidSortOrder(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One materialized page plus the number of matches before paging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        match usize::try_from(self.per_page) {
            Ok(per_page) if per_page > 0 => self.total.div_ceil(per_page),
            _ => 0,
        }
    }
}
