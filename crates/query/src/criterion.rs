//! Structured filter criteria: `{PropertyName, Operator, Value}` triples.
//!
//! Callers usually ship criteria as a JSON array, e.g.
//! `[{"PropertyName":"Status","Operator":"Equal","Value":"Active"}]`;
//! [`parse_filters`] turns that into typed [`FilterCriterion`] values.

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    /// Parse an operator token, case-insensitively. Short aliases (`eq`, `gte`, ...) are accepted.
    pub fn parse(token: &str) -> Option<Self> {
        let op = match token.trim().to_ascii_lowercase().as_str() {
            "equal" | "equals" | "eq" => FilterOperator::Equal,
            "notequal" | "notequals" | "ne" => FilterOperator::NotEqual,
            "greaterthan" | "gt" => FilterOperator::GreaterThan,
            "greaterthanorequal" | "gte" => FilterOperator::GreaterThanOrEqual,
            "lessthan" | "lt" => FilterOperator::LessThan,
            "lessthanorequal" | "lte" => FilterOperator::LessThanOrEqual,
            "contains" => FilterOperator::Contains,
            "startswith" => FilterOperator::StartsWith,
            "endswith" => FilterOperator::EndsWith,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "Equal",
            FilterOperator::NotEqual => "NotEqual",
            FilterOperator::GreaterThan => "GreaterThan",
            FilterOperator::GreaterThanOrEqual => "GreaterThanOrEqual",
            FilterOperator::LessThan => "LessThan",
            FilterOperator::LessThanOrEqual => "LessThanOrEqual",
            FilterOperator::Contains => "Contains",
            FilterOperator::StartsWith => "StartsWith",
            FilterOperator::EndsWith => "EndsWith",
        }
    }

    /// Substring operators only make sense on text fields.
    pub fn is_text_only(&self) -> bool {
        matches!(self, FilterOperator::Contains | FilterOperator::StartsWith | FilterOperator::EndsWith)
    }

    /// Ordering operators never match a null field value.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            FilterOperator::GreaterThan
                | FilterOperator::GreaterThanOrEqual
                | FilterOperator::LessThan
                | FilterOperator::LessThanOrEqual
        )
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One predicate against a named entity property. A `None` value means null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "RawCriterion")]
pub struct FilterCriterion {
    pub property_name: String,
    pub operator: FilterOperator,
    pub value: Option<String>,
}

impl FilterCriterion {
    pub fn new(property_name: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self { property_name: property_name.into(), operator, value: Some(value.into()) }
    }

    /// Criterion comparing the property against null (`Equal` / `NotEqual`).
    pub fn null(property_name: impl Into<String>, operator: FilterOperator) -> Self {
        Self { property_name: property_name.into(), operator, value: None }
    }

    pub fn eq(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property_name, FilterOperator::Equal, value)
    }
}

/// Wire shape before the operator token is checked.
#[derive(Debug, Deserialize)]
struct RawCriterion {
    #[serde(rename = "PropertyName", alias = "propertyName", alias = "property_name")]
    property_name: String,
    #[serde(rename = "Operator", alias = "operator")]
    operator: String,
    #[serde(rename = "Value", alias = "value", default)]
    value: Option<serde_json::Value>,
}

impl TryFrom<RawCriterion> for FilterCriterion {
    type Error = QueryError;

    fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
        let operator = FilterOperator::parse(&raw.operator).ok_or_else(|| QueryError::UnsupportedOperator {
            operator: raw.operator.clone(),
            property: raw.property_name.clone(),
        })?;
        let value = match raw.value {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other @ (serde_json::Value::Bool(_) | serde_json::Value::Number(_))) => Some(other.to_string()),
            Some(other) => {
                return Err(QueryError::MalformedFilter(format!(
                    "value for `{}` must be a scalar, got {}",
                    raw.property_name, other
                )))
            }
        };
        Ok(Self { property_name: raw.property_name, operator, value })
    }
}

/// Parse a JSON array of criteria. Empty input or `null` yields no criteria.
pub fn parse_filters(json: &str) -> Result<Vec<FilterCriterion>, QueryError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: Option<Vec<RawCriterion>> =
        serde_json::from_str(json).map_err(|e| QueryError::MalformedFilter(e.to_string()))?;
    raw.unwrap_or_default().into_iter().map(FilterCriterion::try_from).collect()
}
