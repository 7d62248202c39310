//! The static content of the page, described as data so it can be checked without a DOM.

use crate::motion::TargetId;

pub const TITLE_WORDS: [&str; 5] = ["Web", "ini", "sedang", "dalam", "perbaikan"];
pub const DIGITS: [char; 3] = ['4', '0', '4'];
pub const DESCRIPTION: &str = "Kami sedang memperbarui situs. Silakan cek kembali nanti.";
pub const BACK_LINK_LABEL: &str = "Kembali ke Beranda";
pub const BACK_LINK_HREF: &str = "/";

/// What the page shows. Built once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub title_words: Vec<String>,
    pub show_back_link: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title_words: TITLE_WORDS.iter().map(|word| word.to_string()).collect(),
            show_back_link: false,
        }
    }
}

impl DisplayConfig {
    pub fn with_back_link(show_back_link: bool) -> Self {
        Self {
            show_back_link,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceElement {
    Digit(char),
    Divider,
    TitleWord(String),
    Description(&'static str),
    BackLink {
        href: &'static str,
        label: &'static str,
    },
}

impl SurfaceElement {
    pub fn is_navigation(&self) -> bool {
        matches!(self, SurfaceElement::BackLink { .. })
    }
}

/// The elements of the page in render order, each paired with the id animations address it by.
pub fn surface_elements(config: &DisplayConfig) -> Vec<(TargetId, SurfaceElement)> {
    let digits = DIGITS
        .iter()
        .enumerate()
        .map(|(i, digit)| (TargetId::Digit(i), SurfaceElement::Digit(*digit)));
    let words = config
        .title_words
        .iter()
        .enumerate()
        .map(|(i, word)| (TargetId::TitleWord(i), SurfaceElement::TitleWord(word.clone())));
    digits
        .chain([(TargetId::Divider, SurfaceElement::Divider)])
        .chain(words)
        .chain([(
            TargetId::Description,
            SurfaceElement::Description(DESCRIPTION),
        )])
        .chain(config.show_back_link.then_some((
            TargetId::BackLink,
            SurfaceElement::BackLink {
                href: BACK_LINK_HREF,
                label: BACK_LINK_LABEL,
            },
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_link_by_default() {
        let elements = surface_elements(&DisplayConfig::default());
        assert!(!elements.iter().any(|(_, e)| e.is_navigation()));
        assert!(!elements.iter().any(|(id, _)| *id == TargetId::BackLink));
    }

    #[test]
    fn single_link_to_root_when_shown() {
        let elements = surface_elements(&DisplayConfig::with_back_link(true));
        let links: Vec<_> = elements.iter().filter(|(_, e)| e.is_navigation()).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].1,
            SurfaceElement::BackLink {
                href: "/",
                label: "Kembali ke Beranda"
            }
        );
        // the link comes last
        assert!(elements.last().unwrap().1.is_navigation());
    }

    #[test]
    fn five_title_words_in_order() {
        let words: Vec<_> = surface_elements(&DisplayConfig::default())
            .into_iter()
            .filter_map(|(_, e)| match e {
                SurfaceElement::TitleWord(word) => Some(word),
                _ => None,
            })
            .collect();
        assert_eq!(words, ["Web", "ini", "sedang", "dalam", "perbaikan"]);
    }

    #[test]
    fn render_order() {
        let ids: Vec<_> = surface_elements(&DisplayConfig::default())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            [
                TargetId::Digit(0),
                TargetId::Digit(1),
                TargetId::Digit(2),
                TargetId::Divider,
                TargetId::TitleWord(0),
                TargetId::TitleWord(1),
                TargetId::TitleWord(2),
                TargetId::TitleWord(3),
                TargetId::TitleWord(4),
                TargetId::Description,
            ]
        );
    }
}
