use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::motion::parallax::ScrollRange;

fn measure(window: &Window, node: &NodeRef, range: &ScrollRange) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(range.progress(rect.top(), rect.height(), viewport_height))
}

/// Tracks how far `node` has travelled through `range`, in `[0, 1]`.
///
/// Re-measured on every scroll and resize; both listeners are removed when the
/// component unmounts.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        let progress = progress.clone();
                        move || {
                            if let Some(value) = measure(&window, &node, &range) {
                                progress.set(value);
                            }
                        }
                    });
                    for event in ["scroll", "resize"] {
                        let _ = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                    }
                    // Initial measurement, before the first scroll.
                    let _ = callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&window);

                    Box::new(move || {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            range,
        );
    }

    *progress
}
