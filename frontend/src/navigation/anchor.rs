use std::borrow::Cow;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config::HEADER_OFFSET;

/// The pieces of the viewport the anchor handler needs.
pub trait ScrollSurface {
    /// Top of the element with `id`, relative to the viewport, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorOutcome {
    /// Default navigation was replaced by a smooth scroll to `top`.
    Scrolled { top: f64 },
    /// Nothing on the page carries that id; let the browser handle the link.
    NoTarget,
}

/// Element id named by a fragment such as `#features`. Empty fragments
/// (`""`, `"#"`) name nothing.
pub fn fragment_id(hash: &str) -> Option<Cow<'_, str>> {
    let raw = hash.strip_prefix('#')?;
    if raw.is_empty() {
        return None;
    }
    Some(urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
}

/// Resolves `id` against `surface` and issues at most one scroll command,
/// offset so the section clears the fixed header.
pub fn plan_scroll<S: ScrollSurface + ?Sized>(surface: &S, id: &str) -> AnchorOutcome {
    match surface.element_top(id) {
        Some(element_top) => {
            let top = element_top + surface.scroll_y() - HEADER_OFFSET;
            surface.smooth_scroll_to(top);
            AnchorOutcome::Scrolled { top }
        }
        None => AnchorOutcome::NoTarget,
    }
}

/// The live browser window.
pub struct WindowSurface {
    window: Window,
}

impl WindowSurface {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| WindowSurface { window })
    }
}

impl ScrollSurface for WindowSurface {
    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Closest `<a>` around the click target, when it links into this document.
fn same_page_anchor(event: &MouseEvent, window: &Window) -> Option<HtmlAnchorElement> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a").ok()??.dyn_into::<HtmlAnchorElement>().ok()?;
    let current_path = window.location().pathname().ok()?;
    (anchor.pathname() == current_path).then_some(anchor)
}

/// Page-level click handler: turns in-page fragment links into smooth scrolls.
/// Anything it does not recognise is left to the browser untouched.
pub fn intercept_click(event: &MouseEvent) {
    let Some(surface) = WindowSurface::current() else {
        return;
    };
    let Some(anchor) = same_page_anchor(event, &surface.window) else {
        return;
    };
    let hash = anchor.hash();
    let Some(id) = fragment_id(&hash) else {
        return;
    };

    match plan_scroll(&surface, &id) {
        AnchorOutcome::Scrolled { top } => {
            event.prevent_default();
            debug!("smooth scroll to #{} at {}", id, top);
        }
        AnchorOutcome::NoTarget => debug!("no element for #{}, leaving link alone", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSurface {
        tops: HashMap<&'static str, f64>,
        scroll_y: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl ScrollSurface for FakeSurface {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    fn page() -> FakeSurface {
        FakeSurface {
            tops: HashMap::from([("features", 640.0), ("gameplay", 1800.0), ("testimonials", 2900.0)]),
            scroll_y: 250.0,
            ..Default::default()
        }
    }

    #[test]
    fn scrolls_once_to_section_below_header() {
        let surface = page();
        let outcome = plan_scroll(&surface, "features");

        assert_eq!(outcome, AnchorOutcome::Scrolled { top: 640.0 + 250.0 - 100.0 });
        assert_eq!(*surface.scrolls.borrow(), vec![790.0]);
    }

    #[test]
    fn section_above_viewport_scrolls_up() {
        let surface = FakeSurface {
            tops: HashMap::from([("gameplay", -400.0)]),
            scroll_y: 2000.0,
            ..Default::default()
        };
        assert_eq!(plan_scroll(&surface, "gameplay"), AnchorOutcome::Scrolled { top: 1500.0 });
    }

    #[test]
    fn missing_target_issues_no_scroll() {
        let surface = page();
        assert_eq!(plan_scroll(&surface, "nonexistent"), AnchorOutcome::NoTarget);
        assert!(surface.scrolls.borrow().is_empty());
    }

    #[test]
    fn fragment_id_strips_hash() {
        assert_eq!(fragment_id("#features").as_deref(), Some("features"));
        assert_eq!(fragment_id("#testimonials").as_deref(), Some("testimonials"));
    }

    #[test]
    fn fragment_id_decodes_percent_escapes() {
        assert_eq!(fragment_id("#tower%20types").as_deref(), Some("tower types"));
    }

    #[test]
    fn empty_fragments_name_nothing() {
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("features"), None);
    }
}
