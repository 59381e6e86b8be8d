use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why a fetched dataset payload could not be turned into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),
    #[error("payload does not contain a record array")]
    NotAnArray,
    #[error("payload contains no records")]
    Empty,
}

impl PayloadError {
    /// Empty and shapeless payloads are rendered as "no data found",
    /// everything else as a load failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, PayloadError::NotAnArray | PayloadError::Empty)
    }
}

/// Records decoded from a payload together with the number of array elements
/// that did not fit the record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

/// Parses raw text as JSON.
pub fn parse_json(text: &str) -> Result<Value, PayloadError> {
    serde_json::from_str(text).map_err(|e| PayloadError::Malformed(e.to_string()))
}

/// Decodes every element of a JSON array independently; elements that fail to
/// decode are counted instead of failing the whole payload.
pub fn decode_records<T: DeserializeOwned>(value: Value) -> Result<Decoded<T>, PayloadError> {
    let Value::Array(elements) = value else {
        return Err(PayloadError::NotAnArray);
    };
    if elements.is_empty() {
        return Err(PayloadError::Empty);
    }

    let total = elements.len();
    let items: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();
    let skipped = total - items.len();

    Ok(Decoded { items, skipped })
}

/// Optional text field that tolerates any JSON type: strings are kept,
/// numbers and booleans are rendered as text, null and containers are absent.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Like [`lenient_text`], with absent values read as the empty string.
pub fn lenient_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_decode_records_skips_bad_elements() {
        let value = parse_json(r#"[{"id":"a"},{"name":"no id"},{"id":"b"}]"#).unwrap();
        let decoded: Decoded<Row> = decode_records(value).unwrap();
        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[1].id, "b");
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_decode_records_rejects_non_array_and_empty() {
        let object = parse_json(r#"{"id":"a"}"#).unwrap();
        assert_eq!(
            decode_records::<Row>(object).unwrap_err(),
            PayloadError::NotAnArray
        );

        let empty = parse_json("[]").unwrap();
        assert_eq!(decode_records::<Row>(empty).unwrap_err(), PayloadError::Empty);
    }

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient_text")]
        flag: Option<String>,
        #[serde(default, deserialize_with = "lenient_text_or_empty")]
        path: String,
    }

    #[test]
    fn test_lenient_text_accepts_any_json_type() {
        let loose: Loose = serde_json::from_str(r#"{"flag":true,"path":null}"#).unwrap();
        assert_eq!(loose.flag.as_deref(), Some("true"));
        assert_eq!(loose.path, "");

        let loose: Loose = serde_json::from_str(r#"{"flag":[1],"path":42}"#).unwrap();
        assert_eq!(loose.flag, None);
        assert_eq!(loose.path, "42");

        let loose: Loose = serde_json::from_str("{}").unwrap();
        assert_eq!(loose.flag, None);
        assert_eq!(loose.path, "");
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
        assert!(!err.is_no_data());
        assert!(PayloadError::Empty.is_no_data());
    }
}
