use dioxus::prelude::*;

use content::bundle;
use content::render::{RenderPlan, TextSlot, render_plan};
use content::{Language, Section, Theme};

use crate::common::storage;

// The page's one explicit state object
//
// handlers go through the methods below instead of mutating anything
// ambient; every field is a signal owned by the top-level component and
// shared through context
#[derive(Clone, Copy)]
pub struct SiteState {
    pub language: Signal<Language>,
    pub theme: Signal<Theme>,
    pub active_section: Signal<Section>,
    pub plan: Memo<Option<RenderPlan>>,
}

impl SiteState {
    // Switch the display language and persist the choice
    //
    // rendering follows the language signal, so reapplying the current
    // language changes nothing visible
    pub fn set_language(&mut self, language: Language) {
        self.language.set(language);
        storage::persist_language(language);
        tracing::debug!("language set to {}", language.as_str());
    }

    pub fn toggle_theme(&mut self) {
        let flipped = (self.theme)().flipped();
        self.theme.set(flipped);
        storage::persist_theme(flipped);
        tracing::debug!("theme set to {}", flipped.as_str());
    }

    pub fn activate_section(&mut self, section: Section) {
        self.active_section.set(section);
    }

    // Resolve one text slot against the loaded plan
    //
    // the fallback is shown before the bundles arrive and for keys the
    // current bundle does not carry
    pub fn text(&self, slot: TextSlot, fallback: &str) -> String {
        self.plan
            .read()
            .as_ref()
            .and_then(|plan| plan.text(slot))
            .unwrap_or(fallback)
            .to_string()
    }
}

// Build the site state at the root of the tree and share it via context
pub fn provide_site_state() -> SiteState {
    let language = use_signal(storage::stored_language);
    let theme = use_signal(storage::stored_theme);
    let active_section = use_signal(Section::default);

    let translations = use_resource(|| async {
        let loaded = bundle::fetch_translations().await;
        if let Err(err) = &loaded {
            tracing::error!("failed to load translation bundles: {err}");
        }
        loaded
    });

    let plan = use_memo(move || match &*translations.read() {
        Some(Ok(translations)) => Some(render_plan(translations.bundle(language()))),
        Some(Err(_)) | None => None,
    });

    use_context_provider(|| SiteState {
        language,
        theme,
        active_section,
        plan,
    })
}

pub fn use_site_state() -> SiteState {
    use_context()
}
