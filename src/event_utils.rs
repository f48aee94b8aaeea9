use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

/// Listener registered on `window`. Removed on [`detach`](Self::detach) or drop.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Register `cb` for `event`. `None` when there is no `window` (e.g. in a worker).
    pub fn attach<E>(event: E, passive: bool, mut cb: impl FnMut(E::EventType) + 'static) -> Option<Self>
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        let window = web_sys::window()?;

        let opts = AddEventListenerOptions::new();
        opts.set_passive(passive);

        let event_name = event.name().to_string();
        let callback = Closure::wrap(Box::new(move |ev: Event| {
            cb(ev.unchecked_into::<E::EventType>());
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .ok()?;

        Some(Self { event_name, callback })
    }

    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(&self.event_name, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Passive window `resize` listener
pub fn on_window_resize(cb: impl FnMut(web_sys::UiEvent) + 'static) -> Option<WindowListener> {
    WindowListener::attach(leptos::ev::resize, true, cb)
}
