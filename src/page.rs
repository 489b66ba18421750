//! The rendering surface.
//! Everything the loaders do to the document goes through [`Page`], addressed by
//! CSS selector. The browser build implements it over `web-sys`; tests record calls.

/// DOM mutations used by the loaders. Each returns `false` when the selector
/// matched nothing, which callers treat as "markup not present" and skip.
pub trait Page {
    fn set_text(&self, selector: &str, text: &str) -> bool;
    fn set_html(&self, selector: &str, html: &str) -> bool;
    /// Hide an element (`display: none`).
    fn hide(&self, selector: &str) -> bool;
}

/// Hide `section` unless `present` holds. Returns `present` so callers can
/// bail out in one line.
pub fn hide_unless(page: &dyn Page, present: bool, section: &str) -> bool {
    if !present && !page.hide(section) {
        log::debug!("[page] section {} not in markup, nothing to hide", section);
    }
    present
}
