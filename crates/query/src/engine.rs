//! Filter, search, sort and paginate an entity collection.
//!
//! A [`ListQuery`] is compiled against the entity's field registry before any
//! candidate is looked at, so invalid paging, unknown properties, unsupported
//! operators and bad sort orders fail the same way on empty and non-empty data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::criterion::{FilterCriterion, FilterOperator};
use crate::errors::QueryError;
use crate::field::{Field, FieldKind, FieldValue, Queryable};
use crate::pagination::{Page, Pagination, SortOrder};

fn default_sort_order() -> String { SortOrder::Asc.as_str().to_string() }

/// Caller-facing list request. The sort order stays a raw token so that
/// unrecognised values can be reported as `InvalidSortOrder`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filters: Vec<FilterCriterion>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub sort_field: Option<String>,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            search: None,
            pagination: Pagination::default(),
            sort_field: None,
            sort_order: default_sort_order(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self { Self::default() }

    pub fn filter(mut self, criterion: FilterCriterion) -> Self {
        self.filters.push(criterion);
        self
    }

    pub fn filters(mut self, criteria: impl IntoIterator<Item = FilterCriterion>) -> Self {
        self.filters.extend(criteria);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self.sort_order = order.into();
        self
    }
}

/// One criterion resolved against a registered field.
struct CompiledFilter<T: 'static> {
    field: &'static Field<T>,
    operator: FilterOperator,
    operand: FieldValue,
    /// Lowercased operand for the substring operators.
    needle: String,
}

impl<T: Queryable> CompiledFilter<T> {
    fn compile(criterion: &FilterCriterion) -> Result<Self, QueryError> {
        let field = T::fields().resolve(&criterion.property_name)?;
        let operator = criterion.operator;
        if operator.is_text_only() && field.kind() != FieldKind::Text {
            return Err(QueryError::UnsupportedOperator {
                operator: operator.as_str().to_string(),
                property: field.name().to_string(),
            });
        }
        let operand = match criterion.value.as_deref() {
            None if operator.is_text_only() || operator.is_ordering() => {
                return Err(QueryError::InvalidFilterValue {
                    property: field.name().to_string(),
                    value: "null".to_string(),
                    expected: field.kind().as_str(),
                })
            }
            None => FieldValue::Null,
            Some(raw) => field.kind().parse(raw).ok_or_else(|| QueryError::InvalidFilterValue {
                property: field.name().to_string(),
                value: raw.to_string(),
                expected: field.kind().as_str(),
            })?,
        };
        let needle = operand.as_text().map(str::to_lowercase).unwrap_or_default();
        Ok(Self { field, operator, operand, needle })
    }

    fn matches(&self, item: &T) -> bool {
        let actual = self.field.value(item);
        match self.operator {
            FilterOperator::Equal => actual.loose_eq(&self.operand),
            FilterOperator::NotEqual => !actual.loose_eq(&self.operand),
            FilterOperator::GreaterThan => !actual.is_null() && actual.loose_cmp(&self.operand).is_gt(),
            FilterOperator::GreaterThanOrEqual => !actual.is_null() && actual.loose_cmp(&self.operand).is_ge(),
            FilterOperator::LessThan => !actual.is_null() && actual.loose_cmp(&self.operand).is_lt(),
            FilterOperator::LessThanOrEqual => !actual.is_null() && actual.loose_cmp(&self.operand).is_le(),
            FilterOperator::Contains => text_matches(&actual, |s| s.contains(&self.needle)),
            FilterOperator::StartsWith => text_matches(&actual, |s| s.starts_with(&self.needle)),
            FilterOperator::EndsWith => text_matches(&actual, |s| s.ends_with(&self.needle)),
        }
    }
}

fn text_matches(value: &FieldValue, pred: impl Fn(&str) -> bool) -> bool {
    value.as_text().is_some_and(|s| pred(&s.to_lowercase()))
}

/// A validated query bound to entity type `T`.
pub struct CompiledQuery<T: 'static> {
    filters: Vec<CompiledFilter<T>>,
    search: Option<String>,
    sort: Option<(&'static Field<T>, SortOrder)>,
    pagination: Pagination,
    skip: usize,
    take: usize,
}

impl<T: Queryable> CompiledQuery<T> {
    /// Validate paging, sort order, sort field and every criterion, in that order.
    pub fn compile(query: &ListQuery) -> Result<Self, QueryError> {
        let (skip, take) = query.pagination.validate()?;
        let order = SortOrder::parse(&query.sort_order)?;
        let registry = T::fields();
        let sort = match query.sort_field.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some((registry.resolve(name)?, order)),
            _ => None,
        };
        let filters = query.filters.iter().map(CompiledFilter::<T>::compile).collect::<Result<Vec<_>, _>>()?;
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Ok(Self { filters, search, sort, pagination: query.pagination, skip, take })
    }

    /// Conjunction of all criteria, then free-text search.
    pub fn accepts(&self, item: &T) -> bool {
        self.filters.iter().all(|f| f.matches(item)) && self.search_matches(item)
    }

    fn search_matches(&self, item: &T) -> bool {
        let Some(term) = self.search.as_deref() else { return true };
        T::fields()
            .text_fields()
            .any(|field| text_matches(&field.value(item), |s| s.contains(term)))
    }

    /// Run the query over `candidates`, preserving their order when no sort field is set.
    pub fn execute<I>(&self, candidates: I) -> Page<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut matching: Vec<T> = candidates.into_iter().filter(|item| self.accepts(item)).collect();
        let total = matching.len();

        if let Some((field, order)) = self.sort {
            let mut keyed: Vec<(FieldValue, T)> = matching.into_iter().map(|item| (field.value(&item), item)).collect();
            // stable ascending sort; descending is its exact reverse
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            if order == SortOrder::Desc {
                keyed.reverse();
            }
            matching = keyed.into_iter().map(|(_, item)| item).collect();
        }

        let items: Vec<T> = matching.into_iter().skip(self.skip).take(self.take).collect();
        debug!(
            entity = T::fields().entity(),
            total,
            returned = items.len(),
            page = self.pagination.page,
            per_page = self.pagination.per_page,
            "query executed"
        );
        Page { items, total, page: self.pagination.page, per_page: self.pagination.per_page }
    }
}

/// Compile `query` and run it over `candidates`.
pub fn execute<T, I>(candidates: I, query: &ListQuery) -> Result<Page<T>, QueryError>
where
    T: Queryable,
    I: IntoIterator<Item = T>,
{
    Ok(CompiledQuery::<T>::compile(query)?.execute(candidates))
}

/// Like [`execute`] but returns only the page's items.
pub fn page<T, I>(candidates: I, query: &ListQuery) -> Result<Vec<T>, QueryError>
where
    T: Queryable,
    I: IntoIterator<Item = T>,
{
    execute(candidates, query).map(|p| p.items)
}
