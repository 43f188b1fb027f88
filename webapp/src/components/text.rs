use dioxus::prelude::*;

use content::markup::Segment;

use crate::state::use_site_state;

#[derive(Clone, PartialEq, Props)]
pub struct SegmentedProps {
    pub segments: Vec<Segment>,
}

// Render a run of plain/strong segments inline
#[component]
pub fn Segmented(props: SegmentedProps) -> Element {
    rsx! {
        for segment in props.segments.iter() {
            {segment_view(segment)}
        }
    }
}

fn segment_view(segment: &Segment) -> Element {
    match segment {
        Segment::Plain(text) => rsx! {
            "{text}"
        },
        Segment::Strong(text) => rsx! {
            strong { "{text}" }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BilingualProps {
    pub pt: &'static str,
    pub en: &'static str,
}

// Text that carries both language variants inline instead of going
// through the bundles
#[component]
pub fn Bilingual(props: BilingualProps) -> Element {
    let state = use_site_state();
    let language = state.language;

    let text = language().pick(props.pt, props.en);

    rsx! {
        "{text}"
    }
}
