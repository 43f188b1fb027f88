use content::Section;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// margin that shrinks the observation root to a line across the viewport
// center, so the active section is whichever one straddles the middle
const CENTER_BAND: &str = "-50% 0px -50% 0px";

// Watch every section element and mark the intersecting one active
//
// entries are applied in callback order with no debouncing: if several
// sections qualify in the same tick the last reported one wins, which
// keeps the original page's order-dependent behavior during fast scrolls
pub fn watch_sections(mut active: Signal<Section>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(section) = Section::from_anchor(&entry.target().id()) {
                    active.set(section);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(CENTER_BAND);
    options.set_threshold(&JsValue::from(0.0));

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    let Ok(sections) = document.query_selector_all("section[id]") else {
        return;
    };

    for idx in 0..sections.length() {
        if let Some(node) = sections.get(idx) {
            if let Some(element) = node.dyn_ref::<web_sys::Element>() {
                observer.observe(element);
            }
        }
    }

    // the observer and its callback live for the lifetime of the page
    callback.forget();
}
