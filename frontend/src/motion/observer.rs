use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = dyn FnMut(Array, IntersectionObserver);

/// Whether the running browser exposes `IntersectionObserver` at all.
pub fn intersection_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Watches one element and reports the first time it enters the viewport.
///
/// After that first report the element is unobserved, so later scroll-outs
/// never reach the callback. Dropping the value disconnects the observer and
/// frees the JS closure, which is what releases the subscription when the
/// owning component unmounts.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<EntriesCallback>,
}

impl ViewportObserver {
    pub fn observe<F>(target: &Element, threshold: f64, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<EntriesCallback>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_enter();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
