use crate::bundle::Bundle;
use crate::markup::{Segment, bold_segments, label_segments};

// Named plain-text regions of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSlot {
    NavHome,
    NavAbout,
    NavProjects,
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    AboutTitle,
    SkillsetTitle,
    FooterCopyright,
}

// The five skill category lines, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillArea {
    Design,
    Video,
    ThreeD,
    Games,
    Development,
}

impl SkillArea {
    pub const ALL: [SkillArea; 5] = [
        SkillArea::Design,
        SkillArea::Video,
        SkillArea::ThreeD,
        SkillArea::Games,
        SkillArea::Development,
    ];
}

// Regions that carry inline emphasis and render as segment runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RichSlot {
    Bio(usize),
    Skill(SkillArea),
}

// Everything one language renders to, computed away from the view
//
// building the plan twice from the same bundle yields the same plan, which
// is what makes applying a language idempotent
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPlan {
    text: Vec<(TextSlot, String)>,
    rich: Vec<(RichSlot, Vec<Segment>)>,
}

impl RenderPlan {
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.text
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, value)| value.as_str())
    }

    pub fn rich(&self, slot: RichSlot) -> Option<&[Segment]> {
        self.rich
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, segments)| segments.as_slice())
    }

    pub fn bio_len(&self) -> usize {
        self.rich
            .iter()
            .filter(|(slot, _)| matches!(slot, RichSlot::Bio(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.rich.is_empty()
    }
}

// Walk the fixed set of regions and collect what the bundle provides
//
// regions whose key is missing produce no entry, so the view keeps its
// fallback text for exactly those regions
pub fn render_plan(bundle: &Bundle) -> RenderPlan {
    let mut plan = RenderPlan::default();

    push_text(&mut plan, TextSlot::NavHome, &bundle.nav.home);
    push_text(&mut plan, TextSlot::NavAbout, &bundle.nav.about);
    push_text(&mut plan, TextSlot::NavProjects, &bundle.nav.projects);
    push_text(&mut plan, TextSlot::HeroTitle, &bundle.hero.title);
    push_text(&mut plan, TextSlot::HeroSubtitle, &bundle.hero.subtitle);
    push_text(&mut plan, TextSlot::HeroCta, &bundle.hero.cta);
    push_text(&mut plan, TextSlot::AboutTitle, &bundle.about.title);
    push_text(&mut plan, TextSlot::SkillsetTitle, &bundle.about.skillset_title);
    push_text(&mut plan, TextSlot::FooterCopyright, &bundle.footer.copyright);

    for (idx, paragraph) in bundle.about.bio.iter().enumerate() {
        plan.rich
            .push((RichSlot::Bio(idx), bold_segments(paragraph)));
    }

    for area in SkillArea::ALL {
        if let Some(line) = skill_line(bundle, area) {
            plan.rich
                .push((RichSlot::Skill(area), label_segments(line)));
        }
    }

    plan
}

fn push_text(plan: &mut RenderPlan, slot: TextSlot, value: &Option<String>) {
    if let Some(value) = value {
        plan.text.push((slot, value.clone()));
    }
}

fn skill_line(bundle: &Bundle, area: SkillArea) -> Option<&str> {
    let skills = &bundle.about.skills;
    let line = match area {
        SkillArea::Design => &skills.design,
        SkillArea::Video => &skills.video,
        SkillArea::ThreeD => &skills.three_d,
        SkillArea::Games => &skills.games,
        SkillArea::Development => &skills.development,
    };
    line.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(doc: &str) -> Bundle {
        serde_json::from_str(doc).unwrap()
    }

    #[test]
    fn planning_is_idempotent() {
        let bundle = bundle(
            r#"{
                "nav": { "home": "Início" },
                "about": { "bio": ["a **b** c"], "skills": { "design": "Design: Figma" } }
            }"#,
        );
        assert_eq!(render_plan(&bundle), render_plan(&bundle));
    }

    #[test]
    fn nav_labels_switch_with_the_bundle() {
        let pt = bundle(r#"{ "nav": { "home": "Início" } }"#);
        let en = bundle(r#"{ "nav": { "home": "Home" } }"#);

        assert_eq!(render_plan(&pt).text(TextSlot::NavHome), Some("Início"));
        assert_eq!(render_plan(&en).text(TextSlot::NavHome), Some("Home"));
    }

    #[test]
    fn missing_keys_produce_no_entries() {
        let plan = render_plan(&bundle(r#"{ "hero": { "title": "Marina" } }"#));

        assert_eq!(plan.text(TextSlot::HeroTitle), Some("Marina"));
        assert_eq!(plan.text(TextSlot::HeroSubtitle), None);
        assert_eq!(plan.text(TextSlot::NavHome), None);
        assert_eq!(plan.rich(RichSlot::Skill(SkillArea::Design)), None);
        assert_eq!(plan.bio_len(), 0);
    }

    #[test]
    fn an_empty_bundle_plans_nothing() {
        assert!(render_plan(&Bundle::default()).is_empty());
    }

    #[test]
    fn bio_paragraphs_carry_bold_runs() {
        let plan = render_plan(&bundle(
            r#"{ "about": { "bio": ["Eu sou a **Marina**.", "Sem marcação."] } }"#,
        ));

        assert_eq!(plan.bio_len(), 2);
        assert_eq!(
            plan.rich(RichSlot::Bio(0)),
            Some(
                &[
                    Segment::Plain("Eu sou a ".to_string()),
                    Segment::Strong("Marina".to_string()),
                    Segment::Plain(".".to_string()),
                ][..]
            )
        );
        assert_eq!(
            plan.rich(RichSlot::Bio(1)),
            Some(&[Segment::Plain("Sem marcação.".to_string())][..])
        );
    }

    #[test]
    fn skill_lines_emphasize_their_label() {
        let plan = render_plan(&bundle(
            r#"{ "about": { "skills": { "3d": "3D: Blender e Substance Painter" } } }"#,
        ));

        assert_eq!(
            plan.rich(RichSlot::Skill(SkillArea::ThreeD)),
            Some(
                &[
                    Segment::Strong("3D:".to_string()),
                    Segment::Plain(" Blender e Substance Painter".to_string()),
                ][..]
            )
        );
    }
}
