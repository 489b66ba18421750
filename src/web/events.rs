//! Event listeners for the navigation chrome. Each initializer is a no-op
//! when its markup is missing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, Window};

use super::dom::{set_style, toggle_class};
use crate::config::InteractionConfig;
use crate::error::Result;
use crate::interact::{
    anchor_target, collapses_nav, navbar_scrolled, MenuState, ACTIVE_CLASS, SCROLLED_CLASS,
};

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn apply_menu(btn: &Element, nav: &Element, document: &Document, menu: &MenuState) {
    let open = menu.is_open();
    toggle_class(btn, ACTIVE_CLASS, open);
    toggle_class(nav, ACTIVE_CLASS, open);
    if let Some(body) = document.body() {
        set_style(&body, "overflow", menu.body_overflow());
    }
}

/// Burger button toggles the nav panel; any nav link closes it.
pub fn init_mobile_menu(document: &Document) -> Result<()> {
    let (btn, nav) = match (query(document, ".mobile-menu-btn"), query(document, ".nav-links")) {
        (Some(btn), Some(nav)) => (btn, nav),
        _ => return Ok(()),
    };
    let menu = Rc::new(RefCell::new(MenuState::default()));

    {
        let (btn_c, nav_c, doc_c, menu_c) = (btn.clone(), nav.clone(), document.clone(), menu.clone());
        let on_toggle = Closure::<dyn FnMut()>::new(move || {
            let mut menu = menu_c.borrow_mut();
            menu.toggle();
            apply_menu(&btn_c, &nav_c, &doc_c, &menu);
        });
        btn.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }

    let links = nav.query_selector_all("a")?;
    for i in 0..links.length() {
        let link = match links.item(i) {
            Some(link) => link,
            None => continue,
        };
        let (btn_c, nav_c, doc_c, menu_c) = (btn.clone(), nav.clone(), document.clone(), menu.clone());
        let on_close = Closure::<dyn FnMut()>::new(move || {
            let mut menu = menu_c.borrow_mut();
            menu.close();
            apply_menu(&btn_c, &nav_c, &doc_c, &menu);
        });
        link.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }
    Ok(())
}

/// Same-page anchors scroll smoothly instead of jumping.
pub fn init_smooth_scroll(window: &Window, document: &Document, config: &InteractionConfig) -> Result<()> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..anchors.length() {
        let anchor = match anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(anchor) => anchor,
            None => continue,
        };
        let (anchor_c, win_c, doc_c, cfg) = (anchor.clone(), window.clone(), document.clone(), config.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let href = anchor_c.get_attribute("href").unwrap_or_default();
            let target = match anchor_target(&href).and_then(|sel| query(&doc_c, sel)) {
                Some(target) => target,
                None => return,
            };

            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);

            let width = win_c
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(f64::MAX);
            if collapses_nav(&cfg, width) {
                if let Some(nav) = query(&doc_c, ".nav-links") {
                    set_style(&nav, "display", "none");
                }
            }
        });
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Toggle `.navbar.scrolled` past the scroll threshold. Call once.
pub fn init_scroll_observer(window: &Window, document: &Document, config: &InteractionConfig) -> Result<()> {
    let navbar = match query(document, ".navbar") {
        Some(navbar) => navbar,
        None => return Ok(()),
    };
    let (win_c, cfg) = (window.clone(), config.clone());
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let y = win_c.scroll_y().unwrap_or(0.0);
        toggle_class(&navbar, SCROLLED_CLASS, navbar_scrolled(&cfg, y));
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}
