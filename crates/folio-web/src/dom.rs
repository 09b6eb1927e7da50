#![forbid(unsafe_code)]

//! [`LayoutSource`] over the live DOM.

use folio_core::layout::{LayoutSource, ScrollBehavior, ScrollRequest};
use folio_core::{NavError, Section};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollToOptions, Window};

/// Reads section and nav bar geometry straight from layout on every call.
pub(crate) struct DomLayout {
    window: Window,
    document: Document,
    nav: Option<HtmlElement>,
    section_selector: String,
}

impl DomLayout {
    pub(crate) fn new(section_selector: &str) -> Result<Self, NavError> {
        let window =
            web_sys::window().ok_or(NavError::MeasurementUnavailable("no global window"))?;
        let document = window
            .document()
            .ok_or(NavError::MeasurementUnavailable("window has no document"))?;
        Ok(Self {
            window,
            document,
            nav: None,
            section_selector: section_selector.to_owned(),
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn nav(&self) -> Option<&HtmlElement> {
        self.nav.as_ref()
    }

    pub(crate) fn set_nav(&mut self, nav: Option<HtmlElement>) {
        self.nav = nav;
    }

    /// Current `location.hash`, or empty.
    pub(crate) fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }
}

/// Offset-parent based measurement, as used for scroll tracking.
fn measure(element: &Element) -> Option<Section> {
    let id = element.id();
    if id.is_empty() {
        return None;
    }
    let html = element.dyn_ref::<HtmlElement>()?;
    Some(Section::new(
        id,
        f64::from(html.offset_top()),
        f64::from(element.client_height()),
    ))
}

impl LayoutSource for DomLayout {
    fn sections(&self) -> Vec<Section> {
        let Ok(list) = self.document.query_selector_all(&self.section_selector) else {
            warn!(selector = %self.section_selector, "section selector rejected");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| measure(&element))
            .collect()
    }

    /// Document-relative top from the bounding rect, which is exact even
    /// when the section sits inside a positioned ancestor. Elements outside
    /// the section selector (the nav bar, a footer) are not sections.
    fn section(&self, id: &str) -> Option<Section> {
        let element = self.document.get_element_by_id(id)?;
        if !element.matches(&self.section_selector).unwrap_or(false) {
            return None;
        }
        let rect = element.get_bounding_client_rect();
        Some(Section::new(
            id,
            rect.top() + self.scroll_offset(),
            rect.height(),
        ))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn nav_bar_height(&self) -> Option<f64> {
        self.nav
            .as_ref()
            .filter(|nav| nav.is_connected())
            .map(|nav| f64::from(nav.offset_height()))
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn replace_fragment(&mut self, id: &str) {
        let result = self.window.history().and_then(|history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")))
        });
        if let Err(err) = result {
            warn!(id, ?err, "history.replaceState failed");
        }
    }
}
