//! # Form controller
//!
//! A [`FormState`] holds one screen's field values, which fields the user has
//! touched, the current validation errors, and the [`SubmitPhase`]. Views keep
//! it in a `Signal` and feed it events:
//!
//! | Event | Call |
//! |-------|------|
//! | input changed | [`change`](FormState::change) |
//! | field lost focus | [`blur`](FormState::blur) |
//! | submit pressed | [`begin_submit`](FormState::begin_submit), then [`succeed`](FormState::succeed) or [`fail`](FormState::fail) |
//!
//! Errors are only shown for touched fields. Submitting touches every field, so
//! a blocked submit reveals everything that is wrong at once.
//!
//! Rules are declared statically per screen as a [`Schema`] (see
//! [`crate::schemas`]). A field's rules are checked in order and the first
//! failure wins. Apart from [`Rule::Required`], rules do not fire on an empty
//! value.

use std::collections::{BTreeMap, BTreeSet};

use crate::phase::SubmitPhase;

/// A check on a field's own value.
pub type Predicate = fn(&str) -> bool;

#[derive(Clone, Copy, Debug)]
pub enum Rule {
    Required,
    /// At least this many characters.
    MinLen(usize),
    /// At most this many characters.
    MaxLen(usize),
    Check(Predicate),
    /// Parses as a finite number.
    Number,
    /// Equal to the named field.
    SameAs(&'static str),
    /// Numerically not below the named field. Passes while either side is not a number.
    AtLeast(&'static str),
}

impl Rule {
    fn passes(&self, value: &str, form: &FormState) -> bool {
        match *self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinLen(n) => value.chars().count() >= n,
            Rule::MaxLen(n) => value.chars().count() <= n,
            Rule::Check(predicate) => predicate(value),
            Rule::Number => parse_number(value).is_some(),
            Rule::SameAs(other) => value == form.value(other),
            Rule::AtLeast(other) => match (parse_number(value), parse_number(form.value(other))) {
                (Some(v), Some(o)) => v >= o,
                _ => true,
            },
        }
    }

    fn depends_on(&self) -> Option<&'static str> {
        match *self {
            Rule::SameAs(other) | Rule::AtLeast(other) => Some(other),
            _ => None,
        }
    }
}

/// A rule and the message shown when it fails.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

/// All fields of one form, in display order.
pub type Schema = &'static [FieldSpec];

/// Parse a user-typed number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Values, touched flags, errors, and phase of one form.
#[derive(Clone, Debug)]
pub struct FormState {
    schema: Schema,
    values: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
    errors: BTreeMap<&'static str, &'static str>,
    phase: SubmitPhase,
    server_error: Option<String>,
}

impl FormState {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: schema.iter().map(|f| (f.name, String::new())).collect(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            phase: SubmitPhase::Idle,
            server_error: None,
        }
    }

    /// Builder-style prefill, used for the update form.
    pub fn with_values<'a>(mut self, values: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        for (name, value) in values {
            if let Some(key) = self.key(name) {
                self.values.insert(key, value);
            }
        }
        self
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// The error to display for `name`: `None` until the field is touched.
    pub fn error(&self, name: &str) -> Option<&'static str> {
        if self.touched.contains(name) {
            self.errors.get(name).copied()
        } else {
            None
        }
    }

    /// Whether every field passes, without touching anything.
    pub fn is_valid(&self) -> bool {
        self.schema.iter().all(|spec| self.check(spec).is_none())
    }

    pub fn change(&mut self, name: &str, value: String) {
        let Some(key) = self.key(name) else {
            tracing::debug!("Change for unknown field {}", name);
            return;
        };
        self.values.insert(key, value);
        if self.touched.contains(key) {
            self.revalidate(key);
        }
        // Fields comparing against this one may have flipped
        let schema = self.schema;
        let dependents: Vec<&'static str> = schema
            .iter()
            .filter(|spec| spec.rules.iter().any(|r| r.rule.depends_on() == Some(key)))
            .map(|spec| spec.name)
            .filter(|dep| self.touched.contains(dep))
            .collect();
        for dep in dependents {
            self.revalidate(dep);
        }
    }

    pub fn blur(&mut self, name: &str) {
        if let Some(key) = self.key(name) {
            self.touched.insert(key);
            self.revalidate(key);
        }
    }

    /// Touch and check every field. Returns whether the form is valid.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for spec in self.schema {
            self.touched.insert(spec.name);
            if let Some(message) = self.check(spec) {
                self.errors.insert(spec.name, message);
            }
        }
        self.errors.is_empty()
    }

    /// Start a submission.
    ///
    /// Returns `false` when the form is invalid or already locked by an earlier
    /// submission; the caller must not send anything in that case.
    pub fn begin_submit(&mut self) -> bool {
        if !self.phase.advance(SubmitPhase::Validating) {
            return false;
        }
        if !self.validate_all() {
            self.phase.advance(SubmitPhase::Idle);
            return false;
        }
        self.server_error = None;
        self.phase.advance(SubmitPhase::Submitting)
    }

    pub fn succeed(&mut self) {
        self.phase.advance(SubmitPhase::Success);
    }

    /// Record a failed request. Values are kept so the user can retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.phase.advance(SubmitPhase::Error) {
            self.server_error = Some(message.into());
        }
    }

    pub fn navigating(&mut self) {
        self.phase.advance(SubmitPhase::Navigating);
    }

    fn key(&self, name: &str) -> Option<&'static str> {
        self.schema.iter().find(|f| f.name == name).map(|f| f.name)
    }

    fn revalidate(&mut self, key: &'static str) {
        let schema = self.schema;
        let Some(spec) = schema.iter().find(|f| f.name == key) else {
            return;
        };
        match self.check(spec) {
            Some(message) => {
                self.errors.insert(key, message);
            }
            None => {
                self.errors.remove(key);
            }
        }
    }

    fn check(&self, spec: &FieldSpec) -> Option<&'static str> {
        let value = self.value(spec.name);
        spec.rules
            .iter()
            .filter(|r| matches!(r.rule, Rule::Required) || !value.is_empty())
            .find(|r| !r.rule.passes(value, self))
            .map(|r| r.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: Schema = &[
        FieldSpec {
            name: "min",
            rules: &[
                FieldRule::new(Rule::Required, "min required"),
                FieldRule::new(Rule::Number, "min numeric"),
            ],
        },
        FieldSpec {
            name: "max",
            rules: &[
                FieldRule::new(Rule::Required, "max required"),
                FieldRule::new(Rule::Number, "max numeric"),
                FieldRule::new(Rule::AtLeast("min"), "max below min"),
            ],
        },
    ];

    const PASSWORDS: Schema = &[
        FieldSpec {
            name: "password",
            rules: &[FieldRule::new(Rule::MinLen(3), "too short")],
        },
        FieldSpec {
            name: "confirm",
            rules: &[
                FieldRule::new(Rule::Required, "confirm required"),
                FieldRule::new(Rule::SameAs("password"), "mismatch"),
            ],
        },
    ];

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = FormState::new(RANGE);
        form.change("min", "abc".into());
        assert_eq!(form.error("min"), None);
        form.blur("min");
        assert_eq!(form.error("min"), Some("min numeric"));
        form.change("min", "4".into());
        assert_eq!(form.error("min"), None);
    }

    #[test]
    fn test_optional_rules_skip_empty_values() {
        let mut form = FormState::new(PASSWORDS);
        form.blur("password");
        assert_eq!(form.error("password"), None);
    }

    #[test]
    fn test_dependent_field_revalidates() {
        let mut form = FormState::new(PASSWORDS);
        form.change("password", "secret".into());
        form.change("confirm", "secret".into());
        form.blur("confirm");
        assert_eq!(form.error("confirm"), None);

        form.change("password", "secret2".into());
        assert_eq!(form.error("confirm"), Some("mismatch"));
    }

    #[test]
    fn test_max_not_below_min() {
        let mut form = FormState::new(RANGE)
            .with_values([("min", "10".to_string()), ("max", "5".to_string())]);
        assert!(!form.validate_all());
        assert_eq!(form.error("max"), Some("max below min"));

        form.change("max", "10".into());
        assert!(form.validate_all());
    }

    #[test]
    fn test_invalid_form_never_reaches_submitting() {
        let mut form = FormState::new(RANGE);
        assert!(!form.begin_submit());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.error("min"), Some("min required"));
        assert_eq!(form.error("max"), Some("max required"));
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut form = FormState::new(RANGE)
            .with_values([("min", "1".to_string()), ("max", "2".to_string())]);
        assert!(form.begin_submit());
        assert!(!form.begin_submit());

        form.fail("boom");
        assert_eq!(form.server_error(), Some("boom"));
        assert_eq!(form.value("max"), "2");

        assert!(form.begin_submit());
        assert_eq!(form.server_error(), None);
        form.succeed();
        form.navigating();
        assert_eq!(form.phase(), SubmitPhase::Navigating);
        assert!(!form.begin_submit());
    }
}
