#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navbar::NavBar;

mod sections;
use sections::{AboutSection, HeroSection, ProjectsSection, SiteFooter};

mod state;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let state = state::provide_site_state();

    // mirror the theme onto the body element so the whole page restyles
    use_effect(move || {
        common::window::apply_body_theme((state.theme)());
    });

    // one-time wiring that needs the rendered document: manual scroll
    // restoration, hash deep links, and the section observer
    use_effect(move || {
        common::window::prepare_viewport(state);
        common::observe::watch_sections(state.active_section);
    });

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        NavBar {}
        main {
            HeroSection {}
            AboutSection {}
            ProjectsSection {}
        }
        SiteFooter {}
    }
}
