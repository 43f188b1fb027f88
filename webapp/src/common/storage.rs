use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use content::{Language, Theme};

// persisted preference keys, shared with earlier revisions of the site
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    LocalStorage::set(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    LocalStorage::get(key).map_err(|err| {
        // an absent key is the normal first-visit case, not worth a log line
        if !matches!(err, StorageError::KeyNotFound(_)) {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
        }
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// Preference accessors
//
// absent or unreadable values fall back to the defaults (pt, light), so a
// cleared browser profile behaves like a first visit

pub fn stored_language() -> Language {
    get_local_storage(LANGUAGE_KEY).unwrap_or_default()
}

pub fn persist_language(language: Language) {
    set_local_storage(LANGUAGE_KEY, language);
}

pub fn stored_theme() -> Theme {
    get_local_storage(THEME_KEY).unwrap_or_default()
}

pub fn persist_theme(theme: Theme) {
    set_local_storage(THEME_KEY, theme);
}
