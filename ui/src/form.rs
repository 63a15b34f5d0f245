//! Form validation as plain data.
//!
//! Every field carries an ordered list of rules. A field's errors are the messages of
//! the rules it fails, in order, and a form is valid when no field has errors. Values
//! only change through [`Form::set`], so components stay controlled.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    /// Any finite non-negative decimal.
    Number,
    /// A non-negative whole number.
    Integer,
}

impl Rule {
    /// Only `Required` rejects empty input; the others judge what was typed.
    pub fn passes(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return !matches!(self, Rule::Required);
        }

        match self {
            Rule::Required => true,
            Rule::MinLength(n) => value.chars().count() >= *n,
            Rule::MaxLength(n) => value.chars().count() <= *n,
            Rule::Email => EMAIL.is_match(trimmed),
            Rule::Number => trimmed
                .parse::<f64>()
                .is_ok_and(|n| n.is_finite() && n >= 0.0),
            Rule::Integer => trimmed.parse::<u32>().is_ok(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Rule::Required => "This field is required".to_string(),
            Rule::MinLength(n) => format!("Minimum length is {n}"),
            Rule::MaxLength(n) => format!("Maximum length is {n}"),
            Rule::Email => "Please enter a valid email address".to_string(),
            Rule::Number => "Please enter a valid number".to_string(),
            Rule::Integer => "Please enter a whole number".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
    pub rules: Vec<Rule>,
    pub touched: bool,
    pub dirty: bool,
    initial: String,
}

impl Field {
    pub fn errors(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(&self.value))
            .map(Rule::message)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule.passes(&self.value))
    }

    /// Errors are only shown once the user has interacted with the field.
    pub fn show_errors(&self) -> bool {
        !self.is_valid() && (self.touched || self.dirty)
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, initial: &str, rules: Vec<Rule>) -> Self {
        self.fields.push(Field {
            name,
            value: initial.to_string(),
            rules,
            touched: false,
            dirty: false,
            initial: initial.to_string(),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The field's current value; empty for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.get_mut(name) {
            field.value = value.into();
            field.dirty = true;
        } else {
            tracing::warn!(name, "set on unknown form field");
        }
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.get_mut(name) {
            field.touched = true;
        }
    }

    pub fn errors(&self, name: &str) -> Vec<String> {
        self.get(name).map(Field::errors).unwrap_or_default()
    }

    pub fn show_errors(&self, name: &str) -> bool {
        self.get(name).is_some_and(Field::show_errors)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Used when a submit is blocked, so every field's messages render.
    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Back to the initial values with no interaction recorded.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.initial.clone();
            field.touched = false;
            field.dirty = false;
        }
    }
}
