#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::coalesce::ScrollCoalescer;
use folio_core::layout::LayoutSource;
use folio_core::router::initial_target;
use folio_core::{
    ActiveChange, ActiveSectionTracker, NavError, NavItem, NavOutcome, PORTFOLIO_NAV,
    ScrollBehavior, ScrollRouter, TrackerConfig, Trigger,
};
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement};

use crate::dom::DomLayout;
use crate::journal::{ChangeJournal, NavSnapshot};
use crate::listeners::{Listener, ListenerSet};
use crate::markup::{Brand, render_nav};
use crate::{ACTIVE_CLASS, NAV_ID_ATTR};

const LINK_SELECTOR: &str = "a[data-nav-id]";

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A change notification to deliver once the core borrow is released, so a
/// callback that reads back into `FolioNav` does not hit a live borrow.
#[derive(Default)]
struct Notify {
    callback: Option<js_sys::Function>,
    active: Option<String>,
}

impl Notify {
    fn fire(self) {
        if let (Some(callback), Some(active)) = (self.callback, self.active) {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&active)) {
                warn!(?err, "onChange callback threw");
            }
        }
    }
}

struct NavCore {
    items: &'static [NavItem],
    tracker: ActiveSectionTracker,
    router: ScrollRouter,
    coalescer: ScrollCoalescer,
    layout: DomLayout,
    journal: ChangeJournal,
    on_change: Option<js_sys::Function>,
    frame_handle: Option<i32>,
    mounted: bool,
}

impl NavCore {
    /// Route a scroll/resize trigger, either now or at the next frame.
    fn push_trigger(&mut self, trigger: Trigger, frame: &Closure<dyn FnMut()>) -> Notify {
        match self.coalescer.push(trigger) {
            Some(trigger) => self.recompute(trigger),
            None => self.request_frame(frame),
        }
    }

    fn request_frame(&mut self, frame: &Closure<dyn FnMut()>) -> Notify {
        if self.frame_handle.is_some() {
            return Notify::default();
        }
        match self
            .layout
            .window()
            .request_animation_frame(frame.as_ref().unchecked_ref())
        {
            Ok(handle) => {
                self.frame_handle = Some(handle);
                Notify::default()
            }
            Err(err) => {
                // Without a frame there is no later drain; compute now.
                warn!(?err, "requestAnimationFrame failed");
                self.drain_frame()
            }
        }
    }

    fn drain_frame(&mut self) -> Notify {
        self.frame_handle = None;
        match self.coalescer.drain() {
            Some((trigger, events)) => {
                trace!(events, trigger = trigger.as_str(), "draining coalesced frame");
                self.recompute(trigger)
            }
            None => Notify::default(),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.frame_handle.take() {
            let _ = self.layout.window().cancel_animation_frame(handle);
        }
        let _ = self.coalescer.drain();
    }

    fn recompute(&mut self, trigger: Trigger) -> Notify {
        match self.tracker.recompute(&self.layout, trigger) {
            Some(change) => self.publish(&change),
            None => Notify::default(),
        }
    }

    fn navigate(&mut self, id: &str, behavior: ScrollBehavior) -> Result<NavOutcome, NavError> {
        let router = ScrollRouter::with_behavior(behavior);
        let outcome = router.navigate(&mut self.tracker, &mut self.layout, id)?;
        Ok(outcome)
    }

    /// Navigate and build the matching notification. The flag reports
    /// whether the navigation happened.
    fn click(&mut self, id: &str) -> (Notify, bool) {
        let behavior = self.router.behavior();
        match self.navigate(id, behavior) {
            Ok(outcome) if outcome.changed() => {
                let notify = self.publish(&ActiveChange {
                    previous: outcome.previous_active,
                    current: outcome.active,
                    trigger: Trigger::Click,
                });
                (notify, true)
            }
            Ok(_) => (Notify::default(), true),
            Err(err) => {
                #[cfg(debug_assertions)]
                debug!(%err, "navigation ignored");
                let _ = err;
                (Notify::default(), false)
            }
        }
    }

    fn publish(&mut self, change: &ActiveChange) -> Notify {
        self.journal.record(change, self.layout.scroll_offset());
        self.apply_link_state();
        Notify {
            callback: self.on_change.clone(),
            active: Some(change.current.clone()),
        }
    }

    /// Mirror the active id onto the rendered links.
    fn apply_link_state(&self) {
        let Some(nav) = self.layout.nav() else {
            return;
        };
        let Ok(links) = nav.query_selector_all(LINK_SELECTOR) else {
            return;
        };
        let active = self.tracker.active_id();
        for link in (0..links.length())
            .filter_map(|i| links.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            let current = link.get_attribute(NAV_ID_ATTR).as_deref() == Some(active);
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, current);
            if current {
                let _ = link.set_attribute("aria-current", "page");
            } else {
                let _ = link.remove_attribute("aria-current");
            }
        }
    }

    #[cfg(debug_assertions)]
    fn check_integrity(&self) {
        for item in folio_core::layout::check_nav_integrity(self.items, &self.layout) {
            warn!(id = item.id, name = item.name, "nav item has no section in the document");
        }
    }
}

/// The portfolio navigation bar, exported to JavaScript.
///
/// ```js
/// const nav = new FolioNav();
/// nav.render(navElement, "SA", "Subhan");
/// nav.onChange((id) => console.debug("active", id));
/// nav.mount(navElement);
/// // later
/// nav.unmount();
/// ```
#[wasm_bindgen]
pub struct FolioNav {
    core: Rc<RefCell<NavCore>>,
    frame: Rc<Closure<dyn FnMut()>>,
    listeners: Option<ListenerSet>,
}

#[wasm_bindgen]
impl FolioNav {
    /// Create an unmounted navigation bar, optionally configured from JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<FolioNav, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json.as_deref() {
            Some(json) => TrackerConfig::from_json_str(json).map_err(js_err)?,
            None => TrackerConfig::default(),
        };
        let layout = DomLayout::new(&config.section_selector).map_err(js_err)?;
        let coalescer = ScrollCoalescer::new(config.coalesce_scroll);

        let core = Rc::new(RefCell::new(NavCore {
            items: &PORTFOLIO_NAV,
            tracker: ActiveSectionTracker::with_nav(config, &PORTFOLIO_NAV),
            router: ScrollRouter::new(),
            coalescer,
            layout,
            journal: ChangeJournal::new(),
            on_change: None,
            frame_handle: None,
            mounted: false,
        }));

        let frame = {
            let core = Rc::clone(&core);
            Rc::new(Closure::wrap(Box::new(move || {
                let notify = core.borrow_mut().drain_frame();
                notify.fire();
            }) as Box<dyn FnMut()>))
        };

        Ok(FolioNav {
            core,
            frame,
            listeners: None,
        })
    }

    /// Render the link groups and brand mark into `nav`.
    pub fn render(&self, nav: &HtmlElement, initials: &str, name: &str) {
        let core = self.core.borrow();
        nav.set_inner_html(&render_nav(
            core.items,
            core.tracker.active_id(),
            Brand { initials, name },
        ));
    }

    /// Start tracking: measure once, honor a deep-link fragment, and attach
    /// scroll, resize, and click listeners. Mounting twice remounts.
    pub fn mount(&mut self, nav: HtmlElement) -> Result<(), JsValue> {
        self.unmount();

        let notify = {
            let mut core = self.core.borrow_mut();
            core.layout.set_nav(Some(nav.clone()));
            core.mounted = true;

            #[cfg(debug_assertions)]
            core.check_integrity();

            let mut notify = core.recompute(Trigger::Mount);
            let fragment = core.layout.fragment();
            if let Some(id) = initial_target(&fragment)
                && let Ok(outcome) = core.navigate(id, ScrollBehavior::Instant)
                && outcome.changed()
            {
                notify = core.publish(&ActiveChange {
                    previous: outcome.previous_active,
                    current: outcome.active,
                    trigger: Trigger::Mount,
                });
            }
            core.apply_link_state();
            notify
        };
        notify.fire();

        let mut listeners = ListenerSet::default();
        let window: web_sys::EventTarget = self.core.borrow().layout.window().clone().into();

        for (event, trigger) in [("scroll", Trigger::Scroll), ("resize", Trigger::Resize)] {
            let core = Rc::clone(&self.core);
            let frame = Rc::clone(&self.frame);
            let passive = event == "scroll";
            listeners.push(Listener::register(&window, event, passive, move |_event: Event| {
                let notify = core.borrow_mut().push_trigger(trigger, &frame);
                notify.fire();
            })?);
        }

        {
            let core = Rc::clone(&self.core);
            listeners.push(Listener::register(&nav, "click", false, move |event: Event| {
                let Some(id) = clicked_nav_id(&event) else {
                    return;
                };
                event.prevent_default();
                let (notify, _) = core.borrow_mut().click(&id);
                notify.fire();
            })?);
        }

        debug!(listeners = listeners.len(), "navigation mounted");
        self.listeners = Some(listeners);
        Ok(())
    }

    /// Mount on the first element matching the configured nav selector.
    #[wasm_bindgen(js_name = mountBySelector)]
    pub fn mount_by_selector(&mut self) -> Result<(), JsValue> {
        let nav = {
            let core = self.core.borrow();
            let selector = &core.tracker.config().nav_selector;
            core.layout
                .window()
                .document()
                .and_then(|document| document.query_selector(selector).ok().flatten())
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .ok_or_else(|| {
                    js_err(NavError::MeasurementUnavailable("navigation element not found"))
                })?
        };
        self.mount(nav)
    }

    /// Detach all listeners and cancel any pending frame.
    pub fn unmount(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            debug!(listeners = listeners.len(), "navigation unmounted");
        }
        let mut core = self.core.borrow_mut();
        core.cancel_frame();
        core.layout.set_nav(None);
        core.mounted = false;
    }

    #[wasm_bindgen(js_name = activeId)]
    pub fn active_id(&self) -> String {
        self.core.borrow().tracker.active_id().to_owned()
    }

    /// Programmatic navigation. Returns `false` if `id` is not a nav target
    /// or has no section in the document.
    pub fn navigate(&mut self, id: &str) -> bool {
        let (notify, ok) = self.core.borrow_mut().click(id);
        notify.fire();
        ok
    }

    /// Register (or clear) a callback invoked with the new id on every change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Option<js_sys::Function>) {
        self.core.borrow_mut().on_change = callback;
    }

    /// Current state as JSON.
    pub fn snapshot(&self) -> String {
        let core = self.core.borrow();
        NavSnapshot::new(
            core.tracker.state(),
            core.tracker.recompute_count(),
            core.mounted,
        )
        .to_json()
    }

    /// Drain recorded active-section changes as JSONL.
    #[wasm_bindgen(js_name = drainChangesJsonl)]
    pub fn drain_changes_jsonl(&mut self) -> String {
        self.core.borrow_mut().journal.drain_jsonl()
    }
}

impl Drop for FolioNav {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Section id of the nav link an event originated from, if any.
fn clicked_nav_id(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest(LINK_SELECTOR).ok()??;
    link.get_attribute(NAV_ID_ATTR)
}
