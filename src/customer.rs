//! Customer records and the payloads that create or patch them.
//!
//! `name` and `site` are kept as arbitrary JSON values: the registry stores
//! whatever the client sent, without type checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a customer. Assigned by the store, never changed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl CustomerId {
    /// Parses a path segment the lenient way: leading whitespace and an
    /// optional sign are skipped, then the leading run of digits is read and
    /// the rest ignored (`"3abc"` and `"3.0"` are both `3`). A `0x` prefix
    /// switches to hexadecimal.
    ///
    /// `None` when no digits are found or the value is negative; the routes
    /// treat that as an id matching no record.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (radix, s) = match s.get(..2) {
            Some("0x" | "0X") => (16, &s[2..]),
            _ => (10, s),
        };

        let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
        let value = u64::from_str_radix(&s[..end], radix).ok()?;
        if negative && value != 0 {
            return None;
        }
        Some(Self(value))
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One record in the registry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: Value,
    pub site: Value,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<Value>, site: impl Into<Value>) -> Self {
        Self { id: CustomerId(id), name: name.into(), site: site.into() }
    }
}

/// Body of `POST /customers`. A missing field is stored as `null`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewCustomer {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub site: Value,
}

/// Body of `PUT /customers/{id}`. `None` means the field was absent or `null`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CustomerPatch {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub site: Option<Value>,
}

/// Whether a value counts as supplied under the skip-empty update policy:
/// `null`, `false`, `0` and `""` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The records every process starts with.
pub fn seed() -> Vec<Customer> {
    vec![
        Customer::new(1, "eumesmo", "www.google.com"),
        Customer::new(2, "fulano", "www.example.com"),
        Customer::new(3, "beltrano", "www.testsite.com"),
        Customer::new(4, "ciclano", "www.meusite.com"),
        Customer::new(5, "amigo", "www.sitio.com"),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(CustomerId::parse("3"), Some(CustomerId(3)));
        assert_eq!(CustomerId::parse("abc"), None);
        assert_eq!(CustomerId::parse("-1"), None);
        assert_eq!(CustomerId::parse(""), None);
        assert_eq!(CustomerId::parse("-"), None);
    }

    #[test]
    fn parses_leading_digits_and_ignores_the_rest() {
        assert_eq!(CustomerId::parse("3abc"), Some(CustomerId(3)));
        assert_eq!(CustomerId::parse("3.0"), Some(CustomerId(3)));
        assert_eq!(CustomerId::parse(" 3"), Some(CustomerId(3)));
        assert_eq!(CustomerId::parse("+4"), Some(CustomerId(4)));
        assert_eq!(CustomerId::parse("0x5"), Some(CustomerId(5)));
        assert_eq!(CustomerId::parse("x3"), None);
    }

    #[test]
    fn serialises_as_flat_object() {
        let json = serde_json::to_value(Customer::new(6, "novo", "www.novo.com")).unwrap();
        assert_eq!(json, json!({ "id": 6, "name": "novo", "site": "www.novo.com" }));
    }

    #[test]
    fn payload_fields_accept_any_json_type() {
        let new: NewCustomer = serde_json::from_str(r#"{"name":5}"#).unwrap();
        assert_eq!(new.name, json!(5));
        assert_eq!(new.site, Value::Null);

        let patch: CustomerPatch = serde_json::from_str(r#"{"name":null,"site":[1]}"#).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.site, Some(json!([1])));
    }

    #[test]
    fn falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(5), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn seed_ids_are_one_through_five() {
        let ids: Vec<u64> = seed().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }
}
