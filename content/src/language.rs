use serde::{Deserialize, Serialize};

// The two site languages
//
// the persisted preference and the bundle file names both use the bare
// lowercase code, so that is the serde encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    // choose between two inline literals, for elements that carry both
    // languages directly instead of going through the bundles
    pub fn pick<'a>(self, pt: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Pt => pt,
            Language::En => en,
        }
    }
}
