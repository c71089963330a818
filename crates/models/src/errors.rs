use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const REQUIRED: &str = "this field is required";
pub const BLANK: &str = "this field may not be blank";

/// Per-field validation messages, keyed by the wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Merge only fields that have no messages yet.
    pub fn merge_new_fields(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_insert(messages);
        }
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

    pub fn get(&self, field: &str) -> Option<&[String]> { self.0.get(field).map(Vec::as_slice) }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ModelError> {
        if self.is_empty() { Ok(()) } else { Err(ModelError::Validation(self)) }
    }

    /// Checks a length limit counted in characters, not bytes.
    pub fn check_max_len(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("ensure this field has no more than {max} characters"));
        }
    }

    pub fn check_not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, BLANK);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for m in messages {
                if !first { f.write_str("; ")?; }
                write!(f, "{field}: {m}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errs = FieldErrors::new();
        errs.add(field, message);
        Self::Validation(errs)
    }
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_every_message() {
        let mut errs = FieldErrors::new();
        errs.add("name", BLANK);
        errs.add("email", "enter a valid email address");
        assert_eq!(errs.to_string(), "email: enter a valid email address; name: this field may not be blank");
    }

    #[test]
    fn merge_appends_messages_for_same_field() {
        let mut a = FieldErrors::new();
        a.add("name", "one");
        let mut b = FieldErrors::new();
        b.add("name", "two");
        b.add("bio", "three");
        a.merge(b);
        assert_eq!(a.get("name"), Some(&["one".to_string(), "two".to_string()][..]));
        assert!(a.contains("bio"));
    }

    #[test]
    fn merge_new_fields_keeps_existing_messages() {
        let mut a = FieldErrors::new();
        a.add("username", REQUIRED);
        let mut b = FieldErrors::new();
        b.add("username", BLANK);
        b.add("email", "enter a valid email address");
        a.merge_new_fields(b);
        assert_eq!(a.get("username"), Some(&[REQUIRED.to_string()][..]));
        assert!(a.contains("email"));
    }

    #[test]
    fn max_len_counts_chars() {
        let mut errs = FieldErrors::new();
        errs.check_max_len("location", "ÅÅÅ", 3);
        assert!(errs.is_empty());
        errs.check_max_len("location", "ÅÅÅÅ", 3);
        assert!(errs.contains("location"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errs = FieldErrors::new();
        errs.add("username", REQUIRED);
        let v = serde_json::to_value(&errs).unwrap();
        assert_eq!(v, serde_json::json!({"username": [REQUIRED]}));
    }
}
