//! Question input validation.
//!
//! Create payloads arrive as loosely typed JSON: `category` and
//! `difficulty` may be JSON integers or strings holding an integer literal.
//! Everything is checked here before any write reaches the store.

use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Difficulty assigned when the payload omits it.
pub const DEFAULT_DIFFICULTY: i32 = 1;

/// Lowest accepted difficulty.
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty.
pub const MAX_DIFFICULTY: i32 = 5;

/// A validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: DbId,
    #[validate(range(
        min = MIN_DIFFICULTY,
        max = MAX_DIFFICULTY,
        message = "difficulty is out of range"
    ))]
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build a [`NewQuestion`] from raw payload fields.
    ///
    /// Text fields must be non-blank JSON strings and are stored exactly as
    /// submitted.
    pub fn from_raw(
        question: Option<&Value>,
        answer: Option<&Value>,
        category: Option<&Value>,
        difficulty: Option<&Value>,
    ) -> Result<Self, CoreError> {
        let question = require_text("question", question)?;
        let answer = require_text("answer", answer)?;

        let category = match category {
            Some(value) if !value.is_null() => parse_int_field("category", value)?,
            _ => {
                return Err(CoreError::Validation("category is required".to_string()));
            }
        };

        let difficulty = match difficulty {
            Some(value) if !value.is_null() => {
                let raw = parse_int_field("difficulty", value)?;
                i32::try_from(raw).map_err(|_| {
                    CoreError::Validation(format!(
                        "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {raw}"
                    ))
                })?
            }
            _ => DEFAULT_DIFFICULTY,
        };

        let new_question = Self {
            question,
            answer,
            category,
            difficulty,
        };
        new_question
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        Ok(new_question)
    }
}

/// Interpret a JSON value as an integer.
///
/// Accepts JSON integers and strings holding an integer literal (surrounding
/// whitespace is ignored). Floats, booleans, non-numeric strings, arrays and
/// objects are rejected.
pub fn parse_int_field(field: &str, value: &Value) -> Result<i64, CoreError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| CoreError::Validation(format!("{field} must be an integer, got {value}")))
}

fn require_text(field: &str, value: Option<&Value>) -> Result<String, CoreError> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(CoreError::Validation(format!("{field} must not be blank"))),
        None | Some(Value::Null) => Err(CoreError::Validation(format!("{field} is required"))),
        Some(other) => Err(CoreError::Validation(format!(
            "{field} must be a string, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
