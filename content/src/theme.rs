use serde::{Deserialize, Serialize};

// markers embedded in the file names of themed asset pairs
pub const LIGHT_MARKER: &str = "LightMode";
pub const DARK_MARKER: &str = "DarkMode";

// The visual mode
//
// persisted as "light"/"dark"; an absent preference means light
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

// Rewrite a themed asset path for the given mode
//
// themed assets come in pairs whose file names differ only in a
// LightMode/DarkMode marker; the first marker occurrence is swapped and a
// path without one comes back unchanged
pub fn themed_asset(path: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => path.replacen(DARK_MARKER, LIGHT_MARKER, 1),
        Theme::Dark => path.replacen(LIGHT_MARKER, DARK_MARKER, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_is_the_default() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn modes_round_trip_through_serde() {
        for theme in [Theme::Light, Theme::Dark] {
            let encoded = serde_json::to_string(&theme).unwrap();
            assert_eq!(encoded, format!("\"{}\"", theme.as_str()));
            assert_eq!(serde_json::from_str::<Theme>(&encoded).unwrap(), theme);
        }
    }

    #[test]
    fn toggling_preserves_parity() {
        for toggles in 0..7 {
            let mut theme = Theme::default();
            for _ in 0..toggles {
                theme = theme.flipped();
            }
            assert_eq!(theme.is_dark(), toggles % 2 == 1);
        }
    }

    #[test]
    fn themed_paths_swap_in_both_directions() {
        assert_eq!(
            themed_asset("/assets/icons/behanceLightMode.svg", Theme::Dark),
            "/assets/icons/behanceDarkMode.svg"
        );
        assert_eq!(
            themed_asset("/assets/icons/behanceDarkMode.svg", Theme::Light),
            "/assets/icons/behanceLightMode.svg"
        );
    }

    #[test]
    fn themed_path_swap_is_idempotent_per_mode() {
        let dark = themed_asset("/assets/icons/moonLightMode.svg", Theme::Dark);
        assert_eq!(themed_asset(&dark, Theme::Dark), dark);
    }

    #[test]
    fn unmarked_paths_pass_through() {
        assert_eq!(
            themed_asset("/assets/slides/slide-1.svg", Theme::Dark),
            "/assets/slides/slide-1.svg"
        );
        assert_eq!(
            themed_asset("/assets/slides/slide-1.svg", Theme::Light),
            "/assets/slides/slide-1.svg"
        );
    }

    #[test]
    fn only_the_first_marker_is_swapped() {
        assert_eq!(
            themed_asset("/LightMode/sunLightMode.svg", Theme::Dark),
            "/DarkMode/sunLightMode.svg"
        );
    }
}
