use serde::Deserialize;

use crate::shared::html::escape;
use crate::shared::payload::{
    decode_records, lenient_text, lenient_text_or_empty, parse_json, Decoded, PayloadError,
};

// ============================================================================
// Record
// ============================================================================

/// Цвет из каталога colors-worker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorRecord {
    #[serde(rename = "colorCode")]
    pub color_code: String,

    #[serde(rename = "colorName")]
    pub color_name: String,

    #[serde(rename = "hexRGB", default, deserialize_with = "lenient_text_or_empty")]
    pub hex_rgb: String,

    #[serde(default, deserialize_with = "lenient_text_or_empty")]
    pub path: String,

    #[serde(rename = "colorFamily", default, deserialize_with = "lenient_text")]
    pub color_family: Option<String>,

    /// "Y" marks a retired color; any other value, of any type, does not
    #[serde(default, deserialize_with = "lenient_text")]
    pub archived: Option<String>,
}

impl ColorRecord {
    pub fn is_archived(&self) -> bool {
        self.archived.as_deref() == Some("Y")
    }

    /// CSS color for the swatch
    pub fn swatch_color(&self) -> String {
        format!("#{}", self.hex_rgb)
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Decodes the colors endpoint response: a bare JSON array of color records.
pub fn decode_colors(text: &str) -> Result<Decoded<ColorRecord>, PayloadError> {
    decode_records(parse_json(text)?)
}

// ============================================================================
// Commit formatting
// ============================================================================

/// Builds the fully qualified EDS URL for a color page path.
pub fn build_eds_url(org: &str, repo: &str, path: &str) -> String {
    format!("https://main--{}--{}.aem.live{}", repo, org, path)
}

/// Renders the selected colors as an unordered list of links, one per color,
/// in the order given.
pub fn colors_to_html_list<'a, I>(org: &str, repo: &str, colors: I) -> String
where
    I: IntoIterator<Item = &'a ColorRecord>,
{
    let items: String = colors
        .into_iter()
        .map(|color| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&build_eds_url(org, repo, &color.path)),
                escape(&color.color_name)
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}
