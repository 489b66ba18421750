//! Navigation behaviour, independent of the DOM. The browser module wires
//! these to events.

use crate::config::InteractionConfig;

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Open/closed state of the mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body `overflow` value: scrolling is locked while the menu is open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub fn navbar_scrolled(config: &InteractionConfig, scroll_y: f64) -> bool {
    scroll_y > config.scroll_threshold
}

/// Narrow viewports collapse the nav panel after an in-page jump.
pub fn collapses_nav(config: &InteractionConfig, viewport_width: f64) -> bool {
    viewport_width <= config.nav_breakpoint
}

/// Selector for a same-page anchor's target; `None` for a bare `#` or
/// anything that isn't a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_locks_scroll_while_open() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert!(menu.toggle());
        assert_eq!(menu.body_overflow(), "hidden");
        assert!(!menu.toggle());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn nav_link_click_always_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn navbar_threshold_is_strict() {
        let cfg = InteractionConfig::default();
        assert!(!navbar_scrolled(&cfg, 0.0));
        assert!(!navbar_scrolled(&cfg, 50.0));
        assert!(navbar_scrolled(&cfg, 50.5));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let cfg = InteractionConfig::default();
        assert!(collapses_nav(&cfg, 768.0));
        assert!(collapses_nav(&cfg, 375.0));
        assert!(!collapses_nav(&cfg, 1024.0));
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#about"), Some("#about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://x/#a"), None);
        assert_eq!(anchor_target("#a b"), None);
    }
}
