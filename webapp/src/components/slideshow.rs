use dioxus::prelude::*;

use content::Slideshow;

use crate::common;

// The published project slides, by display name
//
// names double as alt text; the deck size everywhere else follows this
// list
pub const SLIDES: [&str; 4] = [
    "Identidade visual Aurora",
    "Curta-metragem Horizonte",
    "Cena 3D Maré Alta",
    "Protótipo de jogo Rota 77",
];

// Manually advanced slideshow with arrows and indicator dots
//
// exactly one slide carries the active class at any time, by construction
// of the deck state
#[component]
pub fn ProjectSlideshow() -> Element {
    let mut deck = use_signal(|| Slideshow::new(SLIDES.len()));

    let current = deck().current();

    rsx! {
        div { class: "slideshow",
            button {
                class: "slideshow-arrow slideshow-arrow-left",
                aria_label: "Previous slide",
                onclick: move |_| deck.with_mut(|deck| deck.prev()),
                "‹"
            }
            div { class: "slides",
                for (idx , name) in SLIDES.iter().enumerate() {
                    img {
                        class: if idx == current { "slide active" } else { "slide" },
                        src: common::slide_link(idx),
                        alt: *name,
                    }
                }
            }
            button {
                class: "slideshow-arrow slideshow-arrow-right",
                aria_label: "Next slide",
                onclick: move |_| deck.with_mut(|deck| deck.next()),
                "›"
            }
        }
        div { class: "slideshow-indicators",
            for idx in 0..SLIDES.len() {
                button {
                    class: if idx == current { "indicator active" } else { "indicator" },
                    aria_label: format!("Slide {}", idx + 1),
                    onclick: move |_| deck.with_mut(|deck| deck.goto(idx)),
                }
            }
        }
    }

    // TODO: auto-advance the deck every few seconds with gloo_timers and
    // pause it while the pointer is over the slides
}
