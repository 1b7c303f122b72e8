use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Read-only structured data attached to an event occurrence.
///
/// A payload is a mapping from field name to [`serde_json::Value`], built
/// once and immutable thereafter. Source payloads are shaped ad hoc per
/// event type, so the container accepts arbitrary field sets; handlers read
/// fields by name and get [`Error::FieldNotFound`] for anything that was not
/// supplied at construction, never a default.
///
/// Where an event's schema is known ahead of time, prefer a typed struct
/// implementing [`Event`](crate::Event) and let [`Payload::encode`] /
/// [`Payload::decode`] bridge between the two.
///
/// # Examples
///
/// ```rust
/// use minibus::payload;
///
/// let payload = payload! { user_id: 1, content_type: "serie" };
/// assert_eq!(payload.get_u64("user_id").unwrap(), 1);
/// assert_eq!(payload.get_str("content_type").unwrap(), "serie");
/// assert!(payload.get("nonexistent").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Build a payload from an already-assembled field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Serialize a typed event into a payload.
    ///
    /// Fails with [`Error::PayloadShape`] if the value does not serialize to
    /// a JSON object (e.g. a newtype over a scalar).
    pub fn encode<T: Serialize>(event: &T) -> Result<Self> {
        match serde_json::to_value(event)? {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(Error::PayloadShape(json_type_name(&other))),
        }
    }

    /// Deserialize the payload back into a typed event.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }

    /// Read a field by name. Undeclared fields fail with
    /// [`Error::FieldNotFound`] rather than returning a default.
    pub fn get(&self, field: &str) -> Result<&Value> {
        self.0
            .get(field)
            .ok_or_else(|| Error::FieldNotFound(field.to_string()))
    }

    /// Read a field by name, `None` if absent.
    pub fn get_opt(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Read a field as a string slice.
    pub fn get_str(&self, field: &str) -> Result<&str> {
        self.get(field)?
            .as_str()
            .ok_or_else(|| Error::FieldType {
                field: field.to_string(),
                expected: "string",
            })
    }

    /// Read a field as an unsigned integer.
    pub fn get_u64(&self, field: &str) -> Result<u64> {
        self.get(field)?
            .as_u64()
            .ok_or_else(|| Error::FieldType {
                field: field.to_string(),
                expected: "u64",
            })
    }

    /// Read a field as a signed integer.
    pub fn get_i64(&self, field: &str) -> Result<i64> {
        self.get(field)?
            .as_i64()
            .ok_or_else(|| Error::FieldType {
                field: field.to_string(),
                expected: "i64",
            })
    }

    /// Read a field as a boolean.
    pub fn get_bool(&self, field: &str) -> Result<bool> {
        self.get(field)?
            .as_bool()
            .ok_or_else(|| Error::FieldType {
                field: field.to_string(),
                expected: "bool",
            })
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field name, value)` pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a [`Payload`] from field/value pairs.
///
/// Values accept anything `serde_json::json!` accepts.
///
/// ```rust
/// use minibus::payload;
///
/// let p = payload! { user: "Jane", attempts: 3 };
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::Payload::default()
    };
    ($($field:ident : $value:expr),+ $(,)?) => {{
        let mut fields = $crate::__private::Map::new();
        $(
            fields.insert(
                ::std::string::String::from(stringify!($field)),
                $crate::__private::json!($value),
            );
        )+
        $crate::Payload::new(fields)
    }};
}
