use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::FieldError;

/// Maximum length of an item name, counted in characters
pub const NAME_MAX_CHARS: usize = 100;

/// A stored data item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"id": 1, "name": "Sales", "value": 1000.5}))]
pub struct DataItem {
    /// Item ID, assigned by the server
    pub id: i64,
    /// Item name (1-100 characters)
    pub name: String,
    /// Item value
    pub value: f64,
}

/// Validated payload for creating a data item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"name": "Sales", "value": 1000.5}))]
pub struct NewDataItem {
    pub name: String,
    pub value: f64,
}

impl NewDataItem {
    /// Validate an untyped JSON body, collecting one `FieldError` per bad field.
    ///
    /// Unknown fields (including a client-supplied `id`) are ignored.
    pub fn from_json(body: &JsonValue) -> Result<Self, Vec<FieldError>> {
        let Some(fields) = body.as_object() else {
            return Err(vec![FieldError::new(
                &[],
                "Input should be a valid JSON object",
                "model_type",
            )]);
        };

        let mut errors = Vec::new();

        let name = match fields.get("name") {
            None | Some(JsonValue::Null) => {
                errors.push(FieldError::new(&["name"], "Field required", "missing"));
                None
            }
            Some(JsonValue::String(name)) => {
                let len = name.chars().count();
                if len == 0 {
                    errors.push(FieldError::new(
                        &["name"],
                        "String should have at least 1 character",
                        "string_too_short",
                    ));
                    None
                } else if len > NAME_MAX_CHARS {
                    errors.push(FieldError::new(
                        &["name"],
                        &format!("String should have at most {} characters", NAME_MAX_CHARS),
                        "string_too_long",
                    ));
                    None
                } else {
                    Some(name.clone())
                }
            }
            Some(_) => {
                errors.push(FieldError::new(
                    &["name"],
                    "Input should be a valid string",
                    "string_type",
                ));
                None
            }
        };

        let value = match fields.get("value") {
            None | Some(JsonValue::Null) => {
                errors.push(FieldError::new(&["value"], "Field required", "missing"));
                None
            }
            Some(JsonValue::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Some(v),
                _ => {
                    errors.push(FieldError::new(
                        &["value"],
                        "Input should be a finite number",
                        "finite_number",
                    ));
                    None
                }
            },
            Some(_) => {
                errors.push(FieldError::new(
                    &["value"],
                    "Input should be a valid number",
                    "float_type",
                ));
                None
            }
        };

        match (name, value) {
            (Some(name), Some(value)) if errors.is_empty() => Ok(NewDataItem { name, value }),
            _ => Err(errors),
        }
    }
}

/// Response type for health check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"status": "ok", "version": "1.0.0"}))]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response type for successful DELETE operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_types(errors: &[FieldError]) -> Vec<(&str, &str)> {
        errors
            .iter()
            .map(|e| (e.loc.first().map(String::as_str).unwrap_or(""), e.kind.as_str()))
            .collect()
    }

    #[test]
    fn test_valid_payload() {
        let item = NewDataItem::from_json(&json!({"name": "Sales", "value": 1000.5})).unwrap();
        assert_eq!(item.name, "Sales");
        assert_eq!(item.value, 1000.5);
    }

    #[test]
    fn test_integer_value_is_accepted() {
        let item = NewDataItem::from_json(&json!({"name": "Item1", "value": 100})).unwrap();
        assert_eq!(item.value, 100.0);
    }

    #[test]
    fn test_negative_value_is_accepted() {
        let item = NewDataItem::from_json(&json!({"name": "Refunds", "value": -42.25})).unwrap();
        assert_eq!(item.value, -42.25);
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let item =
            NewDataItem::from_json(&json!({"id": 77, "name": "Sales", "value": 1.0})).unwrap();
        assert_eq!(item, NewDataItem { name: "Sales".to_string(), value: 1.0 });
    }

    #[test]
    fn test_empty_name_and_missing_value() {
        let errors = NewDataItem::from_json(&json!({"name": ""})).unwrap_err();
        assert_eq!(
            error_types(&errors),
            vec![("name", "string_too_short"), ("value", "missing")]
        );
    }

    #[test]
    fn test_name_length_limit_counts_characters() {
        let at_limit = "é".repeat(NAME_MAX_CHARS);
        assert!(NewDataItem::from_json(&json!({"name": at_limit, "value": 1})).is_ok());

        let over_limit = "a".repeat(NAME_MAX_CHARS + 1);
        let errors = NewDataItem::from_json(&json!({"name": over_limit, "value": 1})).unwrap_err();
        assert_eq!(error_types(&errors), vec![("name", "string_too_long")]);
    }

    #[test]
    fn test_wrong_types() {
        let errors =
            NewDataItem::from_json(&json!({"name": 12, "value": "not_a_number"})).unwrap_err();
        assert_eq!(
            error_types(&errors),
            vec![("name", "string_type"), ("value", "float_type")]
        );
    }

    #[test]
    fn test_boolean_value_is_rejected() {
        let errors = NewDataItem::from_json(&json!({"name": "Flag", "value": true})).unwrap_err();
        assert_eq!(error_types(&errors), vec![("value", "float_type")]);
    }

    #[test]
    fn test_non_object_body() {
        let errors = NewDataItem::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, "model_type");
        assert!(errors[0].loc.is_empty());
    }
}
