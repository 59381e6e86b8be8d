//! Loading/error wrapper shared by the picker tools.

use contracts::host::HostError;
use contracts::shared::payload::PayloadError;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl LoadError {
    /// Shapeless or empty payloads mean "no data", not a failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadError::Payload(p) if p.is_no_data())
    }
}

/// Состояние загрузки инструмента
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Loading,
    /// Host SDK could not be acquired
    InitFailed(HostError),
    /// Dataset fetch failed or the payload was not JSON
    Failed(LoadError),
    /// Dataset is empty or has no record array
    NoData,
    Ready(T),
}

impl<T> LoadState<T> {
    /// Maps a dataset load outcome onto the matching state.
    pub fn from_load(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(ready) => LoadState::Ready(ready),
            Err(e) if e.is_no_data() => LoadState::NoData,
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Тексты состояний загрузки для конкретного инструмента
#[derive(Debug, Clone, Copy)]
pub struct LoadMessages {
    pub loading: &'static str,
    pub init_failed: &'static str,
    pub failed: &'static str,
    pub no_data: &'static str,
}

#[component]
pub fn LoadingIndicator(text: &'static str) -> impl IntoView {
    view! { <div class="loading">{text}</div> }
}

#[component]
pub fn ErrorMessage(text: &'static str) -> impl IntoView {
    view! { <div class="error-message">{text}</div> }
}

/// "No data" is rendered inside the tool container, below its header.
#[component]
pub fn NoDataMessage(
    text: &'static str,
    title: &'static str,
    class_prefix: &'static str,
) -> impl IntoView {
    view! {
        <div class={format!("{}-container", class_prefix)}>
            <h2 class={format!("{}-header", class_prefix)}>{title}</h2>
            <div class="warning-message">{text}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_load_classifies_errors() {
        assert!(matches!(
            LoadState::<()>::from_load(Err(PayloadError::Empty.into())),
            LoadState::NoData
        ));
        assert!(matches!(
            LoadState::<()>::from_load(Err(PayloadError::NotAnArray.into())),
            LoadState::NoData
        ));
        assert!(matches!(
            LoadState::<()>::from_load(Err(PayloadError::Malformed("eof".into()).into())),
            LoadState::Failed(_)
        ));
        assert!(matches!(
            LoadState::<()>::from_load(Err(LoadError::Status {
                status: 404,
                status_text: "Not Found".into()
            })),
            LoadState::Failed(_)
        ));
        assert!(matches!(LoadState::from_load(Ok(3)), LoadState::Ready(3)));
    }
}
