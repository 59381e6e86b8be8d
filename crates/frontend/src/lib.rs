pub mod blocks;
pub mod shared;
pub mod tools;

use std::any::Any;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::shared::config::{load_page_config, ToolsConfig};
use crate::tools::t100_color_picker::ColorPicker;
use crate::tools::t101_tag_picker::TagPicker;

#[wasm_bindgen(start)]
pub fn start() {
    let level = load_page_config()
        .map(|config| config.log_level())
        .unwrap_or(log::Level::Debug);
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
}

/// A mounted tool. Dropping or unmounting it tears the component tree down
/// and removes its root element from the page.
#[wasm_bindgen]
pub struct ToolHandle {
    root: web_sys::HtmlElement,
    mounted: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl ToolHandle {
    pub fn unmount(mut self) {
        drop(self.mounted.take());
        self.root.remove();
    }
}

/// Mounts the color picker into a fresh root element appended to `<body>`.
#[wasm_bindgen]
pub fn mount_color_picker() -> Result<ToolHandle, JsValue> {
    let config = page_config()?;
    mount_tool("colors-tool", move || view! { <ColorPicker config=config /> })
}

/// Mounts the tag picker into a fresh root element appended to `<body>`.
#[wasm_bindgen]
pub fn mount_tag_picker() -> Result<ToolHandle, JsValue> {
    let config = page_config()?;
    mount_tool("tags-tool", move || view! { <TagPicker config=config /> })
}

#[wasm_bindgen]
pub fn decorate_hero(block: web_sys::Element) {
    blocks::b200_hero::decorate(&block);
}

#[wasm_bindgen]
pub fn decorate_quote(block: web_sys::Element) {
    if let Err(e) = blocks::b201_quote::decorate(&block) {
        log::error!("quote: decoration failed: {:?}", e);
    }
}

fn page_config() -> Result<ToolsConfig, JsValue> {
    load_page_config().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn mount_tool<F, N>(class: &str, view_fn: F) -> Result<ToolHandle, JsValue>
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let root: web_sys::HtmlElement = document.create_element("div")?.dyn_into()?;
    root.set_class_name(class);
    body.append_child(&root)?;

    let handle = leptos::mount::mount_to(root.clone(), view_fn);
    Ok(ToolHandle {
        root,
        mounted: Some(Box::new(handle)),
    })
}
