use serde::Deserialize;
use serde_json::Value;

use crate::shared::payload::{decode_records, lenient_text, parse_json, Decoded, PayloadError};

/// Строка листа tagging.json
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagRecord {
    pub key: String,

    /// Rows without a value are kept in the dataset but never shown
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub comments: Option<String>,
}

/// DA sheet document. Only `data` is read; paging fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaggingDocument {
    #[serde(default)]
    pub data: Option<Value>,
}

/// Decodes a tagging sheet: a JSON object whose `data` field holds the rows.
pub fn decode_tagging(text: &str) -> Result<Decoded<TagRecord>, PayloadError> {
    let value = parse_json(text)?;
    let document: TaggingDocument =
        serde_json::from_value(value).map_err(|_| PayloadError::NotAnArray)?;
    decode_records(document.data.ok_or(PayloadError::NotAnArray)?)
}

/// Text inserted into the document for the selected tag keys.
pub fn tags_to_text<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .map(|k| k.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
