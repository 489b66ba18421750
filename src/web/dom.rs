use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::page::Page;

/// [`Page`] over the live document.
#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        DomPage { document }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[dom] invalid selector {}: {:?}", selector, e);
                None
            }
        }
    }
}

/// Set an inline style property; non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            log::warn!("[dom] could not set {}: {:?}", property, e);
        }
    }
}

/// Add or remove a class depending on `on`.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("[dom] could not toggle {}: {:?}", class, e);
    }
}

impl Page for DomPage {
    fn set_text(&self, selector: &str, text: &str) -> bool {
        match self.find(selector) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn set_html(&self, selector: &str, html: &str) -> bool {
        match self.find(selector) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn hide(&self, selector: &str) -> bool {
        match self.find(selector) {
            Some(el) => {
                set_style(&el, "display", "none");
                true
            }
            None => false,
        }
    }
}
