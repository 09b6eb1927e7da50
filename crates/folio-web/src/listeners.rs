#![forbid(unsafe_code)]

//! Scoped DOM event listeners.
//!
//! A [`Listener`] is registered when created and removed when dropped, so a
//! mounted component's listeners live exactly as long as its handle.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// Passive listeners promise not to call `preventDefault`, which lets the
    /// browser keep scrolling on the compositor thread.
    pub(crate) fn register<F>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listeners owned by one mounted component.
#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub(crate) fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
