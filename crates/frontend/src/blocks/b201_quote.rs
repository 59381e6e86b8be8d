use wasm_bindgen::JsValue;
use web_sys::Element;

/// Rebuilds a quote block authored as `[image, quote, author]` rows into
/// `[image, div.quote-content > (blockquote, author)]`.
pub fn decorate(block: &Element) -> Result<(), JsValue> {
    let children = block.children();
    let (Some(image), Some(quote), Some(author)) =
        (children.item(0), children.item(1), children.item(2))
    else {
        log::warn!("quote: expected 3 rows, found {}", children.length());
        return Ok(());
    };

    let document = block
        .owner_document()
        .ok_or_else(|| JsValue::from_str("quote block is detached"))?;

    let blockquote = document.create_element("blockquote")?;
    let text = quote.text_content().unwrap_or_default();
    blockquote.set_text_content(Some(text.trim()));

    let content = document.create_element("div")?;
    content.set_class_name("quote-content");
    content.append_child(&blockquote)?;
    content.append_child(&author)?;

    block.set_text_content(Some(""));
    block.append_child(&image)?;
    block.append_child(&content)?;
    Ok(())
}
