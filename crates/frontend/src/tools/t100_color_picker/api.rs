use contracts::shared::payload::PayloadError;
use contracts::tools::t100_color_picker::{decode_colors, ColorRecord};
use gloo_net::http::Request;

use crate::shared::load_state::LoadError;

/// Загрузить каталог цветов из colors-worker
pub async fn fetch_colors(endpoint: &str) -> Result<Vec<ColorRecord>, LoadError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    let decoded = decode_colors(&text)?;
    if decoded.skipped > 0 {
        log::warn!("skipped {} malformed color records", decoded.skipped);
    }
    if decoded.items.is_empty() {
        return Err(PayloadError::Empty.into());
    }

    Ok(decoded.items)
}
