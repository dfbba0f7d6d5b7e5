//! Domain entities for the Tasks domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use clarity_common::{Error, Result};

/// Maximum title string length (varchar(200))
const MAX_TITLE_LENGTH: usize = 200;

/// Task entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task; `completed` starts false
    pub fn new(
        title: String,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(Error::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        Ok(Task {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            due_date,
            created_at: Utc::now(),
        })
    }
}

/// Validated partial update for a task.
///
/// The outer `Option` marks a field as present in the patch; the inner
/// `Option` on the two nullable columns distinguishes "set" from "clear".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Build a patch from an arbitrary request body, validated against the
    /// allow-list of mutable fields. Unknown fields and wrong types are
    /// rejected; `null` clears `description` and `due_date`.
    pub fn from_map(fields: &serde_json::Map<String, Value>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::Validation("No fields to update".to_string()));
        }

        let mut patch = TaskPatch::default();

        for (field, value) in fields {
            match field.as_str() {
                "title" => {
                    let title = value
                        .as_str()
                        .ok_or_else(|| Error::Validation("title must be a string".to_string()))?;
                    if title.trim().is_empty() {
                        return Err(Error::Validation("title cannot be empty".to_string()));
                    }
                    if title.len() > MAX_TITLE_LENGTH {
                        return Err(Error::Validation(format!(
                            "title must be at most {} characters",
                            MAX_TITLE_LENGTH
                        )));
                    }
                    patch.title = Some(title.to_string());
                }
                "description" => {
                    patch.description = Some(match value {
                        Value::Null => None,
                        Value::String(s) => Some(s.clone()),
                        _ => {
                            return Err(Error::Validation(
                                "description must be a string or null".to_string(),
                            ))
                        }
                    });
                }
                "completed" => {
                    patch.completed = Some(value.as_bool().ok_or_else(|| {
                        Error::Validation("completed must be a boolean".to_string())
                    })?);
                }
                "due_date" => {
                    patch.due_date = Some(match value {
                        Value::Null => None,
                        other => Some(serde_json::from_value(other.clone()).map_err(|_| {
                            Error::Validation(
                                "due_date must be an RFC 3339 timestamp or null".to_string(),
                            )
                        })?),
                    });
                }
                unknown => {
                    return Err(Error::Validation(format!("Unknown field: {}", unknown)));
                }
            }
        }

        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_task_creation_defaults() {
        let task = Task::new("Buy milk".to_string(), None, None).unwrap();

        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_none());
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_task_title_empty_rejected() {
        let result = Task::new("".to_string(), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_title_201_chars_rejected() {
        let result = Task::new("a".repeat(201), None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at most 200"));
    }

    #[test]
    fn test_task_serialization_roundtrip() {
        let task = Task::new(
            "Buy milk".to_string(),
            Some("two liters".to_string()),
            None,
        )
        .unwrap();

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(task, deserialized);
    }

    #[test]
    fn test_patch_typed_fields_accepted() {
        let patch = TaskPatch::from_map(&map(json!({
            "title": "Renamed",
            "completed": true,
            "due_date": "2026-08-10T12:00:00Z"
        })))
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.completed, Some(true));
        assert!(patch.due_date.unwrap().is_some());
        assert!(patch.description.is_none());
    }

    #[test]
    fn test_patch_null_clears_nullable_fields() {
        let patch = TaskPatch::from_map(&map(json!({
            "description": null,
            "due_date": null
        })))
        .unwrap();

        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.due_date, Some(None));
    }

    #[test]
    fn test_patch_unknown_field_rejected() {
        let result = TaskPatch::from_map(&map(json!({ "priority": "high" })));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown field"));
    }

    #[test]
    fn test_patch_wrong_type_rejected() {
        let result = TaskPatch::from_map(&map(json!({ "completed": "yes" })));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("boolean"));

        let result = TaskPatch::from_map(&map(json!({ "due_date": "next tuesday" })));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("RFC 3339"));
    }

    #[test]
    fn test_patch_title_null_rejected() {
        let result = TaskPatch::from_map(&map(json!({ "title": null })));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_empty_body_rejected() {
        let result = TaskPatch::from_map(&map(json!({})));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No fields"));
    }
}
