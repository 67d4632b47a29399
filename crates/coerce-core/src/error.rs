//! Error types for validation chains.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule name reported when a failure has no rule context.
pub const INITIALIZING: &str = "Initializing";

/// Label used for chains declared without a field name.
pub const UNNAMED_FIELD: &str = "<unnamed>";

/// Failure of a single rule inside a chain.
///
/// Produced at the first failing rule; carries the message chosen by the
/// chain, the failing rule's name, and the chain's field label.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (rule: {rule}, chain: {})", .chain.as_deref().unwrap_or("none"))]
pub struct ValidationFailure {
    /// Human-readable error message
    pub message: String,
    /// Name of the failing rule, or [`INITIALIZING`]
    pub rule: String,
    /// Field label of the originating chain
    pub field: Option<String>,
    /// Display snapshot of the originating chain
    pub chain: Option<String>,
}

impl ValidationFailure {
    /// Create a failure without rule or chain context.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule: INITIALIZING.to_string(),
            field: None,
            chain: None,
        }
    }

    /// Create a failure raised by a rule.
    pub fn for_rule(message: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            ..Self::new(message)
        }
    }

    /// Attach the field label.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the chain snapshot.
    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    /// Structured projection of the failure.
    pub fn report(&self) -> ErrorReport {
        match &self.field {
            Some(field) => ErrorReport::Field {
                error: self.message.clone(),
                validation_function: self.rule.clone(),
                field: field.clone(),
            },
            None => ErrorReport::Bare {
                error_messages: self.message.clone(),
                validation: self.rule.clone(),
            },
        }
    }
}

/// Map-shaped view of a [`ValidationFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorReport {
    /// Failure with field context
    Field {
        #[serde(rename = "Error")]
        error: String,
        #[serde(rename = "ValidationFunction")]
        validation_function: String,
        #[serde(rename = "Field")]
        field: String,
    },
    /// Failure without field context
    Bare {
        #[serde(rename = "ErrorMessages")]
        error_messages: String,
        #[serde(rename = "Validation")]
        validation: String,
    },
}

impl ErrorReport {
    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Errors raised by chains and record schemas.
///
/// `Validation` means the input data was bad; the remaining variants mean
/// the schema or its caller is misconfigured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("field `{field}` is not registered on record `{record}`")]
    UnregisteredField { record: String, field: String },

    #[error("field `{field}` is declared more than once on record `{record}`")]
    DuplicateField { record: String, field: String },
}

impl CoerceError {
    /// Whether this error reports bad input data.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoerceError::Validation(_))
    }

    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            CoerceError::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Result type alias for chain and record operations
pub type Result<T, E = CoerceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_context_uses_sentinel() {
        let failure = ValidationFailure::new("boom");
        assert_eq!(failure.rule, INITIALIZING);
        assert_eq!(
            failure.report(),
            ErrorReport::Bare {
                error_messages: "boom".to_string(),
                validation: INITIALIZING.to_string(),
            }
        );
    }

    #[test]
    fn report_with_field_serializes_to_named_keys() {
        let failure = ValidationFailure::for_rule("too young", "min").field("age");
        let json = failure.report().to_json();
        assert_eq!(
            json,
            serde_json::json!({
                "Error": "too young",
                "ValidationFunction": "min",
                "Field": "age",
            })
        );
    }

    #[test]
    fn report_without_field_serializes_to_bare_keys() {
        let json = ValidationFailure::new("bad input").report().to_json();
        assert_eq!(
            json,
            serde_json::json!({"ErrorMessages": "bad input", "Validation": "Initializing"})
        );
    }

    #[test]
    fn display_combines_message_rule_and_chain() {
        let failure = ValidationFailure::for_rule("nope", "email")
            .field("contact")
            .chain("Coerce(contact: email)");
        assert_eq!(
            failure.to_string(),
            "nope (rule: email, chain: Coerce(contact: email))"
        );
        assert_eq!(
            ValidationFailure::new("x").to_string(),
            "x (rule: Initializing, chain: none)"
        );
    }

    #[test]
    fn coerce_error_distinguishes_kinds() {
        let err: CoerceError = ValidationFailure::new("bad").into();
        assert!(err.is_validation());
        assert!(err.validation().is_some());

        let err = CoerceError::UnregisteredField {
            record: "Person".to_string(),
            field: "nickname".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "field `nickname` is not registered on record `Person`"
        );
    }
}
