//! Helpers shared by the write payloads of every resource.
use models::errors::{FieldErrors, REQUIRED};
use serde::{Deserialize, Deserializer};

/// Supplied value, else the current one (partial updates only), else a "required" error.
pub(crate) fn required<T>(errs: &mut FieldErrors, field: &str, supplied: Option<T>, current: Option<T>) -> Option<T> {
    let value = supplied.or(current);
    if value.is_none() {
        errs.add(field, REQUIRED);
    }
    value
}

/// Supplied value, else the current one (partial updates only), else the type default.
pub(crate) fn optional<T: Default>(supplied: Option<T>, current: Option<T>) -> T {
    supplied.or(current).unwrap_or_default()
}

/// Tells an explicit `null` (`Some(None)`) apart from an absent key (`None`).
pub(crate) fn nullable<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

/// Text fields drop surrounding whitespace before validation and storage.
pub(crate) fn trimmed<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.map(|s| s.trim().to_string()))
}

/// Accepts a JSON number or a numeric string. Unparseable strings become NaN
/// so field validation reports them.
pub(crate) fn decimal<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    Ok(Option::<Raw>::deserialize(d)?.map(|raw| match raw {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "nullable")]
        link: Option<Option<String>>,
        #[serde(default, deserialize_with = "decimal")]
        rate: Option<f64>,
        #[serde(default, deserialize_with = "trimmed")]
        name: Option<String>,
    }

    #[test]
    fn nullable_distinguishes_null_from_absent() {
        let p: Payload = serde_json::from_str(r#"{"link": null}"#).unwrap();
        assert_eq!(p.link, Some(None));
        let p: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.link, None);
        let p: Payload = serde_json::from_str(r#"{"link": "https://a.io"}"#).unwrap();
        assert_eq!(p.link, Some(Some("https://a.io".into())));
    }

    #[test]
    fn decimal_accepts_numbers_and_strings() {
        let p: Payload = serde_json::from_str(r#"{"rate": 42.5}"#).unwrap();
        assert_eq!(p.rate, Some(42.5));
        let p: Payload = serde_json::from_str(r#"{"rate": "42.50"}"#).unwrap();
        assert_eq!(p.rate, Some(42.5));
        let p: Payload = serde_json::from_str(r#"{"rate": "abc"}"#).unwrap();
        assert!(p.rate.unwrap().is_nan());
        let p: Payload = serde_json::from_str(r#"{"rate": null}"#).unwrap();
        assert_eq!(p.rate, None);
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let p: Payload = serde_json::from_str(r#"{"name": "  Tile  "}"#).unwrap();
        assert_eq!(p.name.as_deref(), Some("Tile"));
        let p: Payload = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(p.name.as_deref(), Some(""));
        let p: Payload = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(p.name, None);
    }

    #[test]
    fn required_falls_back_to_current() {
        let mut errs = FieldErrors::new();
        assert_eq!(required(&mut errs, "name", None, Some("x")), Some("x"));
        assert!(errs.is_empty());
        assert_eq!(required::<&str>(&mut errs, "name", None, None), None);
        assert!(errs.contains("name"));
    }
}
