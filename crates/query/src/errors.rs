use thiserror::Error;

/// Errors raised while validating or compiling a list query.
///
/// Every variant is terminal for the call: no partial page is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown property `{property}` on {entity}")]
    UnknownProperty { entity: &'static str, property: String },
    #[error("invalid sort order `{0}`: expected `asc` or `desc`")]
    InvalidSortOrder(String),
    #[error("operator `{operator}` is not supported for property `{property}`")]
    UnsupportedOperator { operator: String, property: String },
    #[error("invalid value `{value}` for property `{property}`: expected {expected}")]
    InvalidFilterValue { property: String, value: String, expected: &'static str },
    #[error("malformed filter: {0}")]
    MalformedFilter(String),
}

impl QueryError {
    pub fn unknown_property(entity: &'static str, property: &str) -> Self {
        Self::UnknownProperty { entity, property: property.to_string() }
    }

    /// Caller/configuration bugs, as opposed to out-of-domain request values.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownProperty { .. } | QueryError::UnsupportedOperator { .. } | QueryError::MalformedFilter(_)
        )
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            QueryError::InvalidParameter(_) => 2001,
            QueryError::UnknownProperty { .. } => 2002,
            QueryError::InvalidSortOrder(_) => 2003,
            QueryError::UnsupportedOperator { .. } => 2004,
            QueryError::InvalidFilterValue { .. } => 2005,
            QueryError::MalformedFilter(_) => 2006,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_grouped() {
        assert!(QueryError::unknown_property("student", "nope").is_configuration_error());
        assert!(QueryError::UnsupportedOperator { operator: "Like".into(), property: "name".into() }.is_configuration_error());
        assert!(!QueryError::InvalidParameter("page".into()).is_configuration_error());
        assert!(!QueryError::InvalidSortOrder("up".into()).is_configuration_error());
    }

    #[test]
    fn display_names_the_property() {
        let e = QueryError::unknown_property("invoice", "DoesNotExist");
        assert_eq!(e.to_string(), "unknown property `DoesNotExist` on invoice");
        assert_eq!(e.code(), 2002);
    }
}
