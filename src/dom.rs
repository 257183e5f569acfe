use wasm_bindgen::JsCast;
use web_sys as web;

/// Create an element with a class attribute; empty class is skipped.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let e = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create_element {tag}: {e:?}"))?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    Ok(e)
}

/// Create an element with a class and text content.
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    Ok(e)
}

/// Icon placeholder span; the stylesheet draws the glyph for `.icon-<key>`.
pub fn icon_el(document: &web::Document, key: &str) -> anyhow::Result<web::Element> {
    el(document, "span", &format!("icon icon-{key}"))
}

/// Anchor with href, class and text.
pub fn link_el(
    document: &web::Document,
    href: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let a = text_el(document, "a", class, text)?;
    _ = a.set_attribute("href", href);
    Ok(a)
}

#[inline]
pub fn add_click_listener_to(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
