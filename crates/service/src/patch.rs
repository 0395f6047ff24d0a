//! Partial updates addressed by field name.

use models::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

/// Set one named field to a new JSON value. `Value::Null` clears optional fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldPatch {
    pub field: String,
    pub value: Value,
}

impl FieldPatch {
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), value: value.into() }
    }

    pub fn clear(field: impl Into<String>) -> Self { Self::set(field, Value::Null) }
}

/// Apply `patches` to a copy of `record`, all or nothing.
///
/// Field names resolve through the record's query registry, so the same
/// spellings accepted by filters (`LastName`, `last_name`) work here.
pub fn apply_patch<T: Record>(record: &T, patches: &[FieldPatch]) -> Result<T, ServiceError> {
    let registry = T::fields();
    let mut doc = serde_json::to_value(record).map_err(|e| ServiceError::Validation(e.to_string()))?;
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| ServiceError::Validation(format!("{} does not serialize to an object", registry.entity())))?;

    for patch in patches {
        let field = registry.resolve(&patch.field)?;
        if field.name() == "id" {
            return Err(ServiceError::Validation("field `id` cannot be changed".into()));
        }
        obj.insert(field.name().to_string(), patch.value.clone());
    }

    let mut patched: T = serde_json::from_value(doc)
        .map_err(|e| ServiceError::Validation(format!("invalid patch for {}: {}", registry.entity(), e)))?;
    patched.set_id(record.id());
    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::student;
    use query::QueryError;
    use serde_json::json;

    #[test]
    fn patches_resolve_any_field_spelling() -> Result<(), anyhow::Error> {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let patched = apply_patch(
            &ada,
            &[FieldPatch::set("LastName", "Byron"), FieldPatch::set("grade_level", 10), FieldPatch::set("Email", "ada@example.org")],
        )?;
        assert_eq!(patched.last_name, "Byron");
        assert_eq!(patched.grade_level, 10);
        assert_eq!(patched.email.as_deref(), Some("ada@example.org"));
        assert_eq!(patched.first_name, ada.first_name);
        assert_eq!(patched.id, ada.id);
        Ok(())
    }

    #[test]
    fn null_clears_optional_fields() -> Result<(), anyhow::Error> {
        let mut ada = student("S-001", "Ada", "Lovelace", 9);
        ada.email = Some("ada@example.org".into());
        let patched = apply_patch(&ada, &[FieldPatch::clear("email"), FieldPatch::set("date_of_birth", json!("2009-12-10"))])?;
        assert_eq!(patched.email, None);
        assert_eq!(patched.date_of_birth.map(|d| d.to_string()).as_deref(), Some("2009-12-10"));
        Ok(())
    }

    #[test]
    fn id_is_immutable() {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let err = apply_patch(&ada, &[FieldPatch::set("Id", uuid::Uuid::new_v4().to_string())]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn unknown_field_is_reported_by_name() {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let err = apply_patch(&ada, &[FieldPatch::set("Nickname", "Countess")]).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Query(QueryError::UnknownProperty { entity: "student", ref property }) if property == "Nickname"
        ));
    }

    #[test]
    fn type_mismatch_leaves_nothing_applied() {
        let ada = student("S-001", "Ada", "Lovelace", 9);
        let err = apply_patch(&ada, &[FieldPatch::set("last_name", "Byron"), FieldPatch::set("grade_level", "tenth")]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(ada.last_name, "Lovelace");
        assert!(matches!(
            apply_patch(&ada, &[FieldPatch::clear("first_name")]),
            Err(ServiceError::Validation(_))
        ));
    }
}
