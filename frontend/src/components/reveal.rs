use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Portion of the viewport an element has to enter before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.9;

/// Flips to `true` once the referenced element scrolls into view and stays
/// there. Pair the returned ref with a `reveal` / `visible` class pair.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let check = {
                    let window = window.clone();
                    move || {
                        let (Some(window), Some(element)) = (window.as_ref(), node.cast::<Element>()) else {
                            return;
                        };
                        let height = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        if element.get_bounding_client_rect().top() < height * REVEAL_THRESHOLD {
                            visible.set(true);
                        }
                    }
                };
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    (node, *visible)
}

/// Class list for an element driven by [`use_reveal`].
pub fn reveal_classes(base: &'static str, visible: bool) -> Classes {
    classes!(base, "reveal", visible.then_some("visible"))
}
