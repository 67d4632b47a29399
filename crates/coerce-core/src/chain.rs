//! The `Coerce` rule chain.

use crate::error::{ValidationFailure, UNNAMED_FIELD};
use crate::rules::{LengthBounds, Outcome, Rule, RuleKind};
use crate::value::Value;
use std::fmt;

/// An ordered validation and coercion pipeline for one field.
///
/// Rules run in the order they were appended. Each rule sees the working
/// value left by the rules before it, so coercions carry forward. The first
/// failing rule stops the chain.
///
/// ## Example
///
/// ```rust
/// use coerce_core::{Coerce, Value};
///
/// let age = Coerce::named("age").integer().min(17).max(120);
///
/// assert_eq!(age.parse("42").unwrap(), Value::Int(42));
/// assert!(age.parse("17").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coerce {
    name: Option<String>,
    default_message: Option<String>,
    rules: Vec<Rule>,
}

impl Coerce {
    /// Create an empty, unnamed chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chain labelled with a field name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the message used by every rule without its own message.
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The field name, or a stable placeholder for unnamed chains.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_FIELD)
    }

    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a prebuilt rule.
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Attach a custom message to the most recently appended rule.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        match self.rules.last_mut() {
            Some(rule) => rule.message = Some(message.into()),
            None => tracing::warn!(
                chain = self.label(),
                "message() called before any rule was added; ignored"
            ),
        }
        self
    }

    /// Coerce to an integer.
    pub fn integer(self) -> Self {
        self.rule(RuleKind::Integer)
    }

    /// Coerce to a float.
    pub fn float(self) -> Self {
        self.rule(RuleKind::Float)
    }

    /// Require a value that would coerce to an integer or a float.
    pub fn numeric(self) -> Self {
        self.rule(RuleKind::Numeric)
    }

    /// Accept `true`/`false`, `1`/`0`, or `"True"`/`"False"`.
    pub fn boolean(self) -> Self {
        self.rule(RuleKind::Boolean)
    }

    /// Render as text; fails unless the raw input was text.
    pub fn string(self) -> Self {
        self.rule(RuleKind::String)
    }

    /// Require the working value to still equal the raw input.
    pub fn strict(self) -> Self {
        self.rule(RuleKind::Strict)
    }

    pub fn list(self) -> Self {
        self.rule(RuleKind::List)
    }

    pub fn dictionary(self) -> Self {
        self.dictionary_with_keys(Vec::<String>::new())
    }

    /// Require a mapping that also holds every key in `keys`, none of them null.
    pub fn dictionary_with_keys<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(RuleKind::Dictionary {
            required_keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    /// Require a mapping in which every key is present and not null.
    pub fn required_keys<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(RuleKind::RequiredKeys(
            keys.into_iter().map(Into::into).collect(),
        ))
    }

    /// Require a number strictly greater than `bound`.
    pub fn min(self, bound: impl Into<Value>) -> Self {
        self.rule(RuleKind::Min(bound.into()))
    }

    /// Require a number no greater than `bound`.
    pub fn max(self, bound: impl Into<Value>) -> Self {
        self.rule(RuleKind::Max(bound.into()))
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(RuleKind::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(RuleKind::MaxLength(max))
    }

    /// Require a length within bounds: `length(5)` or `length((3, 10))`.
    pub fn length(self, bounds: impl Into<LengthBounds>) -> Self {
        self.rule(RuleKind::Length(bounds.into()))
    }

    pub fn contains(self, element: impl Into<Value>) -> Self {
        self.rule(RuleKind::Contains(element.into()))
    }

    pub fn email(self) -> Self {
        self.rule(RuleKind::Email)
    }

    pub fn lowercase(self) -> Self {
        self.rule(RuleKind::Lowercase)
    }

    pub fn date(self) -> Self {
        self.rule(RuleKind::Date)
    }

    pub fn datetime(self) -> Self {
        self.rule(RuleKind::DateTime)
    }

    /// Coerce to a date using a named format alias such as `"YYYY-MM-DD"`.
    ///
    /// Existing dates are rendered to text with the same format.
    pub fn date_with_format(self, alias: impl Into<String>) -> Self {
        self.rule(RuleKind::DateWithFormat(alias.into()))
    }

    /// Run every rule over `value`.
    ///
    /// Returns the final working value, or the failure of the first rule
    /// that rejected it.
    pub fn parse(&self, value: impl Into<Value>) -> Result<Value, ValidationFailure> {
        let raw = value.into();

        let parsed = self
            .rules
            .iter()
            .try_fold(raw.clone(), |current, rule| match rule.apply(&current, &raw) {
                Outcome::Pass => Ok(current),
                Outcome::Coerced(next) => Ok(next),
                Outcome::Fail => Err(self.failure(rule, &raw)),
            })?;

        tracing::trace!(chain = self.label(), rules = self.rules.len(), "chain passed");
        Ok(parsed)
    }

    fn failure(&self, rule: &Rule, raw: &Value) -> ValidationFailure {
        let message = rule
            .message
            .clone()
            .or_else(|| self.default_message.clone())
            .unwrap_or_else(|| format!("Error in validating data for value {raw}"));

        tracing::debug!(
            chain = self.label(),
            rule = rule.name(),
            input = raw.type_name(),
            "validation failed"
        );

        ValidationFailure::for_rule(message, rule.name())
            .field(self.label())
            .chain(self.to_string())
    }
}

impl fmt::Display for Coerce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coerce({}", self.label())?;
        for (i, rule) in self.rules.iter().enumerate() {
            let sep = if i == 0 { ": " } else { " -> " };
            write!(f, "{sep}{}", rule.name())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNNAMED_FIELD;

    #[test]
    fn empty_chain_is_identity() {
        let chain = Coerce::new();
        assert_eq!(chain.parse("anything").unwrap(), Value::from("anything"));
        assert_eq!(chain.parse(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn builders_append_in_order() {
        let chain = Coerce::named("age").integer().min(18).max(30);
        let names: Vec<_> = chain.rules().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["integer", "min", "max"]);
        assert_eq!(chain.to_string(), "Coerce(age: integer -> min -> max)");
    }

    #[test]
    fn coercion_carries_forward() {
        let chain = Coerce::new().integer().min(5);
        assert_eq!(chain.parse("10").unwrap(), Value::Int(10));
    }

    #[test]
    fn stops_at_first_failure() {
        let chain = Coerce::named("n")
            .integer()
            .message("first")
            .min(100)
            .message("second");
        let err = chain.parse("abc").unwrap_err();
        assert_eq!(err.rule, "integer");
        assert_eq!(err.message, "first");
    }

    #[test]
    fn default_message_names_original_input() {
        let err = Coerce::new().integer().min(5).parse("3").unwrap_err();
        assert_eq!(err.message, "Error in validating data for value 3");
        assert_eq!(err.rule, "min");

        let err = Coerce::new().lowercase().email().parse("NOT AN EMAIL").unwrap_err();
        assert_eq!(err.message, "Error in validating data for value NOT AN EMAIL");
    }

    #[test]
    fn message_precedence() {
        let chain = Coerce::named("age")
            .with_default_message("chain says no")
            .integer()
            .min(18)
            .message("too young");

        assert_eq!(chain.parse("x").unwrap_err().message, "chain says no");
        assert_eq!(chain.parse("12").unwrap_err().message, "too young");
    }

    #[test]
    fn message_on_empty_chain_is_ignored() {
        let chain = Coerce::new().message("nothing to attach to");
        assert!(chain.is_empty());
    }

    #[test]
    fn failure_carries_field_and_chain() {
        let err = Coerce::named("email").email().parse("nope").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("email"));
        assert_eq!(err.chain.as_deref(), Some("Coerce(email: email)"));

        let err = Coerce::new().email().parse("nope").unwrap_err();
        assert_eq!(err.field.as_deref(), Some(UNNAMED_FIELD));
    }

    #[test]
    fn parse_does_not_retain_state() {
        let chain = Coerce::new().integer();
        assert_eq!(chain.parse("1").unwrap(), Value::Int(1));
        assert!(chain.parse("x").is_err());
        assert_eq!(chain.parse("2").unwrap(), Value::Int(2));
    }
}
