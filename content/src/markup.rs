use std::sync::LazyLock;

use regex::Regex;

// The two inline emphasis rules of the bundle text format
//
// **span** marks bold runs anywhere in a line, and skill lines emphasize
// their leading "label:" prefix exactly once

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?):").expect("label pattern is valid"));

// One run of rendered text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

// Split a line on **span** pairs, emphasizing the delimited runs
//
// unpaired markers are left as literal text
pub fn bold_segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Segment::Plain(text[last..whole.start()].to_string()));
        }
        out.push(Segment::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < text.len() {
        out.push(Segment::Plain(text[last..].to_string()));
    }

    out
}

// Emphasize the leading "label:" of a skill line, first match only
//
// bold markers inside the matched label collapse into the emphasis; a line
// without a colon comes back untouched
pub fn label_segments(text: &str) -> Vec<Segment> {
    let Some(caps) = LABEL.captures(text) else {
        return vec![Segment::Plain(text.to_string())];
    };
    let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
        return vec![Segment::Plain(text.to_string())];
    };

    let label = BOLD.replace_all(label.as_str(), "$1");

    let mut out = vec![Segment::Strong(format!("{label}:"))];
    if whole.end() < text.len() {
        out.push(Segment::Plain(text[whole.end()..].to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::Plain(text.to_string())
    }

    fn strong(text: &str) -> Segment {
        Segment::Strong(text.to_string())
    }

    #[test]
    fn bold_pairs_become_strong_runs() {
        assert_eq!(
            bold_segments("Olá! Eu sou a **Marina**, designer"),
            vec![plain("Olá! Eu sou a "), strong("Marina"), plain(", designer")]
        );
    }

    #[test]
    fn multiple_bold_pairs_are_all_emphasized() {
        assert_eq!(
            bold_segments("**a** e **b**"),
            vec![strong("a"), plain(" e "), strong("b")]
        );
    }

    #[test]
    fn shortest_spans_win() {
        // lazy matching pairs the first opener with the nearest closer
        assert_eq!(
            bold_segments("**a** b **c**"),
            vec![strong("a"), plain(" b "), strong("c")]
        );
        assert_eq!(bold_segments("x **** y"), vec![plain("x "), strong(""), plain(" y")]);
    }

    #[test]
    fn unpaired_markers_stay_literal() {
        assert_eq!(bold_segments("half **open"), vec![plain("half **open")]);
    }

    #[test]
    fn plain_text_passes_through_bold() {
        assert_eq!(bold_segments("nada para ver"), vec![plain("nada para ver")]);
        assert_eq!(bold_segments(""), Vec::new());
    }

    #[test]
    fn skill_labels_are_emphasized_once() {
        assert_eq!(
            label_segments("Design: Photoshop, Illustrator e Figma"),
            vec![strong("Design:"), plain(" Photoshop, Illustrator e Figma")]
        );
    }

    #[test]
    fn only_the_first_colon_counts() {
        assert_eq!(
            label_segments("Vídeo: Premiere: corte e cor"),
            vec![strong("Vídeo:"), plain(" Premiere: corte e cor")]
        );
    }

    #[test]
    fn bold_markers_fold_into_the_label() {
        assert_eq!(
            label_segments("**Name**: rest"),
            vec![strong("Name:"), plain(" rest")]
        );
    }

    #[test]
    fn colonless_lines_pass_through() {
        assert_eq!(label_segments("sem rótulo"), vec![plain("sem rótulo")]);
    }

    #[test]
    fn a_bare_label_has_no_tail() {
        assert_eq!(label_segments("Jogos:"), vec![strong("Jogos:")]);
    }
}
