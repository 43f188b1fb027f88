use anyhow::Result;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::language::Language;

// fixed locations of the two language bundles, published with the webapp
// assets
pub const URL_BUNDLE_PT: &str = "/assets/data/pt.json";
pub const URL_BUNDLE_EN: &str = "/assets/data/en.json";

// One language's full set of display strings
//
// every leaf is optional so a bundle missing a key still deserializes; the
// affected region then keeps its fallback text instead of failing the load
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub nav: Nav,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nav {
    pub home: Option<String>,
    pub about: Option<String>,
    pub projects: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(rename = "skillsetTitle")]
    pub skillset_title: Option<String>,
    #[serde(default)]
    pub skills: Skills,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub design: Option<String>,
    pub video: Option<String>,
    #[serde(rename = "3d")]
    pub three_d: Option<String>,
    pub games: Option<String>,
    pub development: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: Option<String>,
}

impl Bundle {
    // dotted paths of the keys this bundle actually carries
    pub fn key_set(&self) -> Vec<String> {
        let leaves: [(&Option<String>, &str); 14] = [
            (&self.nav.home, "nav.home"),
            (&self.nav.about, "nav.about"),
            (&self.nav.projects, "nav.projects"),
            (&self.hero.title, "hero.title"),
            (&self.hero.subtitle, "hero.subtitle"),
            (&self.hero.cta, "hero.cta"),
            (&self.about.title, "about.title"),
            (&self.about.skillset_title, "about.skillsetTitle"),
            (&self.about.skills.design, "about.skills.design"),
            (&self.about.skills.video, "about.skills.video"),
            (&self.about.skills.three_d, "about.skills.3d"),
            (&self.about.skills.games, "about.skills.games"),
            (&self.about.skills.development, "about.skills.development"),
            (&self.footer.copyright, "footer.copyright"),
        ];

        let mut keys = Vec::new();
        for (value, key) in leaves {
            if value.is_some() {
                keys.push(key.to_string());
            }
        }
        for idx in 0..self.about.bio.len() {
            keys.push(format!("about.bio[{idx}]"));
        }
        keys
    }
}

// Both bundles, loaded together
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    pub pt: Bundle,
    pub en: Bundle,
}

impl Translations {
    pub fn bundle(&self, language: Language) -> &Bundle {
        match language {
            Language::Pt => &self.pt,
            Language::En => &self.en,
        }
    }

    // Dotted paths present in exactly one of the two bundles
    //
    // the bundles are supposed to expose the same key set; drift is not
    // fatal at runtime but gets reported, and folio-bundles fails on it
    pub fn missing_keys(&self) -> Vec<String> {
        let pt = self.pt.key_set();
        let en = self.en.key_set();

        let mut out = Vec::new();
        for key in &pt {
            if !en.contains(key) {
                out.push(format!("en: {key}"));
            }
        }
        for key in &en {
            if !pt.contains(key) {
                out.push(format!("pt: {key}"));
            }
        }
        out
    }
}

// Retrieve both bundles in parallel
//
// this is a single best-effort attempt: any fetch or parse failure is
// reported to the caller, which leaves the page on its fallback text
pub async fn fetch_translations() -> Result<Translations> {
    let (pt, en) = futures::try_join!(fetch_bundle(URL_BUNDLE_PT), fetch_bundle(URL_BUNDLE_EN))?;

    let translations = Translations { pt, en };

    let drift = translations.missing_keys();
    if !drift.is_empty() {
        tracing::warn!({ drift = ?drift }, "bundle key sets differ");
    }

    Ok(translations)
}

async fn fetch_bundle(url: &str) -> Result<Bundle> {
    Ok(Request::get(url).send().await?.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bundle() -> Bundle {
        serde_json::from_str(
            r#"{
                "nav": { "home": "Início", "about": "Sobre", "projects": "Projetos" },
                "hero": { "title": "Marina", "subtitle": "Design", "cta": "Ver projetos" },
                "about": {
                    "title": "Sobre mim",
                    "bio": ["primeiro", "segundo"],
                    "skillsetTitle": "Ferramentas",
                    "skills": {
                        "design": "Design: Figma",
                        "video": "Vídeo: Premiere",
                        "3d": "3D: Blender",
                        "games": "Jogos: Godot",
                        "development": "Desenvolvimento: Rust"
                    }
                },
                "footer": { "copyright": "© 2026" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn a_full_bundle_lists_every_key() {
        let keys = full_bundle().key_set();
        assert_eq!(keys.len(), 16);
        assert!(keys.contains(&"about.skills.3d".to_string()));
        assert!(keys.contains(&"about.bio[1]".to_string()));
    }

    #[test]
    fn missing_sections_deserialize_to_defaults() {
        let bundle: Bundle = serde_json::from_str(r#"{ "nav": { "home": "Home" } }"#).unwrap();
        assert_eq!(bundle.nav.home.as_deref(), Some("Home"));
        assert_eq!(bundle.nav.about, None);
        assert!(bundle.about.bio.is_empty());
        assert_eq!(bundle.about.skills, Skills::default());
    }

    #[test]
    fn an_empty_document_is_a_valid_bundle() {
        let bundle: Bundle = serde_json::from_str("{}").unwrap();
        assert!(bundle.key_set().is_empty());
    }

    #[test]
    fn matching_bundles_report_no_drift() {
        let translations = Translations {
            pt: full_bundle(),
            en: full_bundle(),
        };
        assert!(translations.missing_keys().is_empty());
    }

    #[test]
    fn drift_names_the_bundle_lacking_the_key() {
        let mut en = full_bundle();
        en.nav.projects = None;
        en.about.bio.pop();

        let translations = Translations {
            pt: full_bundle(),
            en,
        };

        let drift = translations.missing_keys();
        assert_eq!(drift, vec!["en: nav.projects", "en: about.bio[1]"]);
    }

    #[test]
    fn bundle_lookup_follows_the_language() {
        let mut en = full_bundle();
        en.nav.home = Some("Home".to_string());

        let translations = Translations {
            pt: full_bundle(),
            en,
        };

        assert_eq!(
            translations.bundle(Language::Pt).nav.home.as_deref(),
            Some("Início")
        );
        assert_eq!(
            translations.bundle(Language::En).nav.home.as_deref(),
            Some("Home")
        );
    }
}
