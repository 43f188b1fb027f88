// The observed page sections, in document order
//
// nav links address sections by anchor; the active marker follows whichever
// section currently crosses the viewport center
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::About, Section::Projects];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_default() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
    }

    #[test]
    fn unknown_anchors_resolve_to_nothing() {
        assert_eq!(Section::from_anchor("contact"), None);
        assert_eq!(Section::from_anchor(""), None);
    }
}
