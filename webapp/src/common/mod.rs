pub mod observe;
pub mod storage;
pub mod style;
pub mod window;

use content::Theme;
use content::theme::themed_asset;

// Social profiles shown in the footer
//
// icon files come in LightMode/DarkMode pairs and the light variant is the
// canonical path; the dark one is derived by marker swap
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Behance",
        href: "https://www.behance.net/marinaduarte",
        icon: "/assets/icons/behanceLightMode.svg",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/marinaduarte.design",
        icon: "/assets/icons/instagramLightMode.svg",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/marinaduarte",
        icon: "/assets/icons/linkedinLightMode.svg",
    },
];

pub fn social_icon_link(link: &SocialLink, theme: Theme) -> String {
    themed_asset(link.icon, theme)
}

// The theme toggle icon shows the mode a click switches to, so its file
// marker always matches the mode currently on screen
pub fn theme_icon_link(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "/assets/icons/moonLightMode.svg",
        Theme::Dark => "/assets/icons/sunDarkMode.svg",
    }
}

pub fn theme_icon_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    }
}

pub fn slide_link(index: usize) -> String {
    format!("/assets/slides/slide-{}.svg", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use content::theme::{DARK_MARKER, LIGHT_MARKER};

    #[test]
    fn theme_icon_marker_matches_the_mode() {
        assert!(theme_icon_link(Theme::Light).contains(LIGHT_MARKER));
        assert!(theme_icon_link(Theme::Dark).contains(DARK_MARKER));
    }

    #[test]
    fn theme_icon_labels_the_other_mode() {
        assert_eq!(theme_icon_label(Theme::Light), "Dark mode");
        assert_eq!(theme_icon_label(Theme::Dark), "Light mode");
    }

    #[test]
    fn social_icons_follow_the_theme() {
        for link in &SOCIAL_LINKS {
            assert!(social_icon_link(link, Theme::Light).contains(LIGHT_MARKER));
            assert!(social_icon_link(link, Theme::Dark).contains(DARK_MARKER));
        }
    }

    #[test]
    fn slides_are_numbered_from_one() {
        assert_eq!(slide_link(0), "/assets/slides/slide-1.svg");
        assert_eq!(slide_link(3), "/assets/slides/slide-4.svg");
    }
}
