//! Browser interop for the web target
//!
//! # Listener lifetimes
//!
//! A JavaScript listener backed by a wasm-bindgen `Closure` must stay alive
//! while it is attached, and must be detached before the closure is freed.
//! Every handle in this module owns its closure and detaches in `Drop`, so
//! storing a handle in a `Signal<Option<_>>` ties the listener to the
//! component: set the signal to `None` (or let the component unmount) and
//! the listener is gone.
//!
//! ```ignore
//! let mut listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);
//! listener.set(DocumentEventListener::on_key(move |key| { /* ... */ }));
//! listener.set(None); // detached
//! ```
//!
//! Off the web target the handles are inert, which keeps the component code
//! free of `cfg` blocks.

/// IntersectionObserver threshold for revealing a section
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so sections reveal slightly after entering
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    /// A document event listener that removes itself when dropped.
    pub struct DocumentEventListener {
        document: web_sys::Document,
        event_name: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DocumentEventListener {
        pub fn new(
            event_name: &'static str,
            callback: impl FnMut(web_sys::Event) + 'static,
        ) -> Option<Self> {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                tracing::warn!("No document, can't listen for {}", event_name);
                return None;
            };
            let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));
            document
                .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
                .ok()?;

            Some(Self {
                document,
                event_name,
                callback,
            })
        }

        /// Listen for `keydown` on the document, passing `KeyboardEvent.key`.
        pub fn on_key(mut on_key: impl FnMut(String) + 'static) -> Option<Self> {
            Self::new("keydown", move |event: web_sys::Event| {
                if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    on_key(event.key());
                }
            })
        }
    }

    impl Drop for DocumentEventListener {
        fn drop(&mut self) {
            let _ = self.document.remove_event_listener_with_callback(
                self.event_name,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Fires once when an element first scrolls into view, then disconnects.
    pub struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl RevealObserver {
        pub fn observe(
            mounted: &dioxus::prelude::MountedData,
            mut on_visible: impl FnMut() + 'static,
        ) -> Option<Self> {
            let element = mounted.downcast::<web_sys::Element>()?;

            let callback: ObserverCallback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let visible = entries.iter().any(|entry| {
                        entry
                            .dyn_ref::<web_sys::IntersectionObserverEntry>()
                            .is_some_and(|entry| entry.is_intersecting())
                    });
                    if visible {
                        observer.disconnect();
                        on_visible();
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
            observer.observe(element);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn scroll_to_element(dom_id: &str) {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(dom_id))
        else {
            tracing::warn!("No element with id {}", dom_id);
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    pub async fn sleep_ms(ms: u64) {
        gloo_timers::future::TimeoutFuture::new(ms as u32).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod web {
    /// Inert off the web target
    pub struct DocumentEventListener;

    impl DocumentEventListener {
        pub fn on_key(_on_key: impl FnMut(String) + 'static) -> Option<Self> {
            None
        }
    }

    /// Inert off the web target
    pub struct RevealObserver;

    impl RevealObserver {
        pub fn observe(
            _mounted: &dioxus::prelude::MountedData,
            _on_visible: impl FnMut() + 'static,
        ) -> Option<Self> {
            None
        }
    }

    pub fn scroll_to_element(_dom_id: &str) {}

    pub async fn sleep_ms(ms: u64) {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

pub use web::{scroll_to_element, sleep_ms, DocumentEventListener, RevealObserver};
