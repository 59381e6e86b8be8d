use contracts::shared::payload::PayloadError;
use contracts::tools::t101_tag_picker::{decode_tagging, TagRecord};
use wasm_bindgen_futures::JsFuture;

use crate::shared::host::DaActions;
use crate::shared::load_state::LoadError;

/// Загрузить лист тегов через daFetch (с авторизацией хоста)
pub async fn fetch_tagging(actions: &DaActions, url: &str) -> Result<Vec<TagRecord>, LoadError> {
    let response = actions
        .da_fetch(url)
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = response
        .text()
        .map_err(|e| LoadError::Request(format!("{:?}", e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Request(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| LoadError::Request("response body is not text".to_string()))?;

    let decoded = decode_tagging(&text)?;
    if decoded.skipped > 0 {
        log::warn!("skipped {} tagging rows without a key", decoded.skipped);
    }
    if decoded.items.is_empty() {
        return Err(PayloadError::Empty.into());
    }

    Ok(decoded.items)
}
