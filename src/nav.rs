//! Navigation bar: brand mark, desktop anchor links, the mobile menu button
//! and its slide-down panel. Owns the page UI flags through one shared
//! `Rc<RefCell<PageUi>>`; the scroll listener and the menu button are the
//! only writers.

use crate::core::content::*;
use crate::core::PageUi;
use crate::dom::{add_click_listener_to, el, icon_el, link_el, text_el};
use crate::reveal::MenuReveal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn build_and_wire(
    document: &web::Document,
    ui: Rc<RefCell<PageUi>>,
) -> anyhow::Result<()> {
    let nav = document
        .get_element_by_id("top-nav")
        .ok_or_else(|| anyhow::anyhow!("missing #top-nav"))?;

    let inner = el(document, "div", "nav-inner")?;

    let brand = el(document, "div", "brand")?;
    _ = brand.append_child(&text_el(document, "span", "brand-glyph", BRAND_GLYPH)?);
    let name = el(document, "span", "brand-name")?;
    _ = name.append_child(&text_el(document, "span", "", BRAND_NAME)?);
    _ = name.append_child(&text_el(document, "span", "accent", BRAND_ACCENT)?);
    _ = brand.append_child(&name);
    _ = inner.append_child(&brand);

    let links = el(document, "div", "nav-links")?;
    for link in NAV_LINKS.iter() {
        _ = links.append_child(&link_el(document, link.anchor, "nav-link", link.label)?);
    }
    _ = inner.append_child(&links);

    let button = el(document, "button", "menu-button")?;
    let button_icon = icon_el(document, Icon::Menu.key())?;
    _ = button.append_child(&button_icon);
    _ = inner.append_child(&button);
    _ = nav.append_child(&inner);

    // Mobile panel, hidden until toggled; re-enters on every open
    let panel = el(document, "div", "menu-panel reveal reveal-drop")?;
    let menu_reveal = Rc::new(RefCell::new(MenuReveal::new()));
    for link in NAV_LINKS.iter() {
        let a = link_el(document, link.anchor, "menu-link", link.label)?;
        let ui_close = ui.clone();
        let reveal_close = menu_reveal.clone();
        let panel_close = panel.clone();
        let icon_close = button_icon.clone();
        add_click_listener_to(&a, move || {
            ui_close.borrow_mut().close_menu();
            reveal_close.borrow_mut().set_open(&panel_close, false);
            set_menu_icon(&icon_close, false);
        });
        _ = panel.append_child(&a);
    }
    _ = nav.append_child(&panel);

    wire_menu_button(&button, &button_icon, &panel, menu_reveal, ui.clone());
    wire_scroll_listener(&nav, ui);
    Ok(())
}

fn set_menu_icon(icon: &web::Element, open: bool) {
    let key = if open { Icon::Close } else { Icon::Menu };
    icon.set_class_name(&format!("icon icon-{}", key.key()));
}

fn wire_menu_button(
    button: &web::Element,
    button_icon: &web::Element,
    panel: &web::Element,
    menu_reveal: Rc<RefCell<MenuReveal>>,
    ui: Rc<RefCell<PageUi>>,
) {
    let panel = panel.clone();
    let button_icon = button_icon.clone();
    add_click_listener_to(button, move || {
        let open = ui.borrow_mut().toggle_menu();
        menu_reveal.borrow_mut().set_open(&panel, open);
        set_menu_icon(&button_icon, open);
    });
}

/// Registered once on mount; feeds every scroll event through
/// `PageUi::observe_scroll` and mirrors the flag onto the nav's `scrolled`
/// class (compact/translucent vs spacious/transparent).
fn wire_scroll_listener(nav: &web::Element, ui: Rc<RefCell<PageUi>>) {
    let nav = nav.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            if let Ok(offset) = w.scroll_y() {
                let mut ui = ui.borrow_mut();
                ui.observe_scroll(offset);
                _ = nav.class_list().toggle_with_force("scrolled", ui.scrolled);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
