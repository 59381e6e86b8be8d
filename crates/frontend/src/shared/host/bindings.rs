use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function loadDaSdk() {
  return import('https://da.live/nx/utils/sdk.js').then((mod) => mod.default);
}
")]
extern "C" {
    #[wasm_bindgen(js_name = loadDaSdk, catch)]
    pub fn load_da_sdk() -> Result<js_sys::Promise, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `actions` object of the DA SDK
    #[derive(Clone, Debug)]
    pub type DaActions;

    #[wasm_bindgen(method, catch, js_name = sendHTML)]
    pub fn send_html_raw(this: &DaActions, html: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = sendText)]
    pub fn send_text_raw(this: &DaActions, text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = closeLibrary)]
    pub fn close_library_raw(this: &DaActions) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = daFetch)]
    pub fn da_fetch_raw(this: &DaActions, url: &str) -> Result<JsValue, JsValue>;
}
