use query::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("query error: {0}")]
    Query(#[from] QueryError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("no data for {}", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) => 1200,
            ServiceError::Query(e) => e.code(),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_keep_their_codes() {
        let e: ServiceError = QueryError::InvalidSortOrder("sideways".into()).into();
        assert_eq!(e.code(), 2003);
        assert_eq!(e.to_string(), "query error: invalid sort order `sideways`: expected `asc` or `desc`");
    }

    #[test]
    fn not_found_reads_as_no_data() {
        assert_eq!(ServiceError::not_found("invoice").to_string(), "not found: no data for invoice");
    }
}
