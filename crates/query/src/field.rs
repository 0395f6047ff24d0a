//! Field registry: the named, typed accessors a query may filter, search and sort by.
//!
//! Each entity type builds one [`FieldRegistry`] (usually in a `Lazy` static) and
//! hands it out through [`Queryable::fields`]. Lookups are case-insensitive and
//! ignore underscores, so `FirstName`, `firstname` and `first_name` resolve to
//! the same field.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::Uuid;

use crate::errors::QueryError;

/// Implemented by every entity the query engine can page over.
pub trait Queryable: Sized + 'static {
    fn fields() -> &'static FieldRegistry<Self>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Uuid,
    Date,
    Timestamp,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "an integer",
            FieldKind::Float => "a number",
            FieldKind::Boolean => "true or false",
            FieldKind::Uuid => "a uuid",
            FieldKind::Date => "a date (YYYY-MM-DD)",
            FieldKind::Timestamp => "an RFC 3339 timestamp",
        }
    }

    /// Parse a raw filter operand into a value of this kind.
    pub fn parse(&self, raw: &str) -> Option<FieldValue> {
        let trimmed = raw.trim();
        match self {
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => trimmed.parse::<i64>().ok().map(FieldValue::Integer),
            FieldKind::Float => trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(FieldValue::Float),
            FieldKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(FieldValue::Boolean(true)),
                "false" | "0" => Some(FieldValue::Boolean(false)),
                _ => None,
            },
            FieldKind::Uuid => Uuid::parse_str(trimmed).ok().map(FieldValue::Uuid),
            FieldKind::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
                .map(FieldValue::Date),
            FieldKind::Timestamp => DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc().fixed_offset())
                })
                .map(FieldValue::Timestamp),
        }
    }
}

/// A single field value read off an entity.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<FixedOffset>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Uuid(_) => 4,
            FieldValue::Date(_) => 5,
            FieldValue::Timestamp(_) => 6,
        }
    }

    /// Comparison used by filters: text ignores case, nulls sort first.
    pub fn loose_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Integer(a), FieldValue::Float(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    pub fn loose_eq(&self, other: &Self) -> bool {
        self.loose_cmp(other) == Ordering::Equal
    }

    /// Total order used for sorting; case-only text differences are broken ordinally.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.loose_cmp(other).then_with(|| match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        })
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self { FieldValue::Text(v) }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self { FieldValue::Text(v.to_string()) }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self { FieldValue::Integer(i64::from(v)) }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self { FieldValue::Integer(v) }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self { FieldValue::Float(v) }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self { FieldValue::Boolean(v) }
}

impl From<Uuid> for FieldValue {
    fn from(v: Uuid) -> Self { FieldValue::Uuid(v) }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self { FieldValue::Date(v) }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(v: DateTime<FixedOffset>) -> Self { FieldValue::Timestamp(v) }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

pub type Getter<T> = fn(&T) -> FieldValue;

/// One registered field: its name, kind and accessor.
pub struct Field<T> {
    name: &'static str,
    key: String,
    kind: FieldKind,
    get: Getter<T>,
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str { self.name }

    pub fn kind(&self) -> FieldKind { self.kind }

    pub fn value(&self, item: &T) -> FieldValue {
        (self.get)(item)
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).field("kind", &self.kind).finish()
    }
}

/// Lookup key shared by registration and resolution.
fn field_key(name: &str) -> String {
    name.chars().filter(|c| *c != '_').flat_map(char::to_lowercase).collect()
}

/// Table of `{field name -> typed accessor}` for one entity type.
#[derive(Debug)]
pub struct FieldRegistry<T> {
    entity: &'static str,
    fields: Vec<Field<T>>,
}

impl<T> FieldRegistry<T> {
    pub fn new(entity: &'static str) -> Self {
        Self { entity, fields: Vec::new() }
    }

    /// Register a field. Names are expected to be unique after key folding.
    pub fn field(mut self, name: &'static str, kind: FieldKind, get: Getter<T>) -> Self {
        let key = field_key(name);
        debug_assert!(self.fields.iter().all(|f| f.key != key), "duplicate field `{name}`");
        self.fields.push(Field { name, key, kind, get });
        self
    }

    pub fn text(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Text, get) }
    pub fn integer(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Integer, get) }
    pub fn float(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Float, get) }
    pub fn boolean(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Boolean, get) }
    pub fn uuid(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Uuid, get) }
    pub fn date(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Date, get) }
    pub fn timestamp(self, name: &'static str, get: Getter<T>) -> Self { self.field(name, FieldKind::Timestamp, get) }

    pub fn entity(&self) -> &'static str { self.entity }

    pub fn lookup(&self, name: &str) -> Option<&Field<T>> {
        let key = field_key(name);
        self.fields.iter().find(|f| f.key == key)
    }

    /// Resolve a field by name or fail with `UnknownProperty`.
    pub fn resolve(&self, name: &str) -> Result<&Field<T>, QueryError> {
        self.lookup(name).ok_or_else(|| QueryError::unknown_property(self.entity, name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.iter()
    }

    /// Fields scanned by free-text search.
    pub fn text_fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Text)
    }
}
