//! Bindings to the DA library SDK (`https://da.live/nx/utils/sdk.js`).
//!
//! The SDK resolves to `{ context, token, actions }`; the tools only need the
//! site coordinates from `context` and four `actions`.

mod bindings;

use contracts::host::{HostContext, HostError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub use bindings::DaActions;

/// Resolved SDK handle
#[derive(Clone, Debug)]
pub struct HostSdk {
    pub context: HostContext,
    pub token: Option<String>,
    pub actions: DaActions,
}

/// Awaits the SDK module and unpacks its default export.
pub async fn load_sdk() -> Result<HostSdk, HostError> {
    let promise = bindings::load_da_sdk().map_err(|e| HostError::Unavailable(describe(&e)))?;
    let sdk = JsFuture::from(promise)
        .await
        .map_err(|e| HostError::Unavailable(describe(&e)))?;

    let context_value = field(&sdk, "context")?;
    let context: HostContext = serde_wasm_bindgen::from_value(context_value)
        .map_err(|e| HostError::Unavailable(format!("bad context: {}", e)))?;
    context.validate()?;

    let token = field(&sdk, "token").ok().and_then(|t| t.as_string());

    let actions = field(&sdk, "actions")?;
    if !actions.is_object() {
        return Err(HostError::MissingField("actions"));
    }

    Ok(HostSdk {
        context,
        token,
        actions: actions.unchecked_into::<DaActions>(),
    })
}

impl DaActions {
    /// Inserts rich content at the cursor of the edited document.
    pub async fn send_html(&self, html: &str) -> Result<(), HostError> {
        settle("sendHTML", self.send_html_raw(html)).await.map(|_| ())
    }

    /// Inserts plain text at the cursor of the edited document.
    pub async fn send_text(&self, text: &str) -> Result<(), HostError> {
        settle("sendText", self.send_text_raw(text)).await.map(|_| ())
    }

    pub async fn close_library(&self) -> Result<(), HostError> {
        settle("closeLibrary", self.close_library_raw()).await.map(|_| ())
    }

    /// Authenticated fetch against the DA admin API.
    pub async fn da_fetch(&self, url: &str) -> Result<web_sys::Response, HostError> {
        let value = settle("daFetch", self.da_fetch_raw(url)).await?;
        if !value.is_object() {
            return Err(HostError::Action {
                action: "daFetch",
                message: "no response object".to_string(),
            });
        }
        // The SDK may hand over a response from another realm, so no instanceof check
        Ok(value.unchecked_into::<web_sys::Response>())
    }
}

/// Actions may return a promise or a plain value.
async fn settle(action: &'static str, call: Result<JsValue, JsValue>) -> Result<JsValue, HostError> {
    let value = call.map_err(|e| action_error(action, &e))?;
    JsFuture::from(js_sys::Promise::resolve(&value))
        .await
        .map_err(|e| action_error(action, &e))
}

fn field(target: &JsValue, name: &'static str) -> Result<JsValue, HostError> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| HostError::MissingField(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(HostError::MissingField(name));
    }
    Ok(value)
}

fn action_error(action: &'static str, error: &JsValue) -> HostError {
    HostError::Action {
        action,
        message: describe(error),
    }
}

fn describe(error: &JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", error)
}
