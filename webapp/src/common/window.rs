use content::{Section, Theme};

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollRestoration, ScrollToOptions};

use crate::state::SiteState;

// Direct window and document calls live here
//
// every helper degrades to a no-op when the browser object it needs is
// missing, since none of this is worth crashing the page over

pub fn apply_body_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let _ = body
        .class_list()
        .toggle_with_force("dark-mode", theme.is_dark());
}

// Smooth-scroll to a section and record it in the history bar
//
// home is special: the window scrolls to the very top and the hash is
// dropped from the url entirely
pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };

    match section {
        Section::Home => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Ok(path) = window.location().pathname() {
                push_history(&window, &path);
            }
        }
        _ => {
            let Some(target) = window
                .document()
                .and_then(|document| document.get_element_by_id(section.anchor()))
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);

            push_history(&window, &format!("#{}", section.anchor()));
        }
    }
}

fn push_history(window: &web_sys::Window, url: &str) {
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

// Startup viewport handling
//
// scroll restoration is managed by hand so reloads and back/forward jumps
// behave: a non-home hash jumps straight to its section and marks it
// active, anything else starts pinned to the top
pub fn prepare_viewport(mut state: SiteState) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }

    let hash = window.location().hash().unwrap_or_default();
    let target = hash
        .strip_prefix('#')
        .and_then(Section::from_anchor)
        .filter(|section| *section != Section::Home);

    match target {
        Some(section) => {
            if let Some(element) = window
                .document()
                .and_then(|document| document.get_element_by_id(section.anchor()))
            {
                // jump, overriding the stylesheet's smooth behavior
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Instant);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                state.activate_section(section);
            }
        }
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}
