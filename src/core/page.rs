//! Portfolio page content: navigation links, sections and slider items.
//!
//! The browser binding reads all of this from existing markup; the terminal
//! preview renders the built-in [`Page::portfolio`] content.

use chrono::Datelike;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    /// Id of the section the link scrolls to.
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    Hero,
    Text,
    /// The content slider lives in this section.
    Slider,
    Contact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub body: Vec<String>,
    /// Participates in reveal-on-scroll (`data-animate`).
    pub animate: bool,
}

/// A single slider card.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
    pub footer: String,
}

impl Page {
    /// Built-in portfolio content.
    pub fn portfolio() -> Self {
        let link = |label: &str, target: &str| NavLink {
            label: label.to_string(),
            target: target.to_string(),
        };
        let section = |id: &str, title: &str, kind: SectionKind, body: &[&str], animate: bool| {
            Section {
                id: id.to_string(),
                title: title.to_string(),
                kind,
                body: body.iter().map(|s| s.to_string()).collect(),
                animate,
            }
        };
        let project = |title: &str, summary: &str, tags: &[&str]| Project {
            title: title.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            brand: "Hadi".to_string(),
            nav: vec![
                link("Home", "home"),
                link("About", "about"),
                link("Work", "work"),
                link("Contact", "contact"),
            ],
            sections: vec![
                section(
                    "home",
                    "Design & engineering for the web",
                    SectionKind::Hero,
                    &[
                        "Independent developer building fast, accessible sites",
                        "and the tools behind them.",
                    ],
                    false,
                ),
                section(
                    "about",
                    "About",
                    SectionKind::Text,
                    &[
                        "Ten years of shipping product interfaces, design systems",
                        "and the occasional compiler. I care about load times,",
                        "keyboard users and code that is pleasant to change.",
                        "",
                        "Currently taking on a small number of projects.",
                    ],
                    true,
                ),
                section("work", "Selected work", SectionKind::Slider, &[], true),
                section(
                    "services",
                    "Services",
                    SectionKind::Text,
                    &[
                        "· Front-end architecture and performance audits",
                        "· Design systems and component libraries",
                        "· Marketing sites with a content workflow",
                    ],
                    true,
                ),
                section(
                    "contact",
                    "Contact",
                    SectionKind::Contact,
                    &["hello@hadi.dev", "Available for remote work worldwide."],
                    true,
                ),
            ],
            projects: vec![
                project(
                    "Atlas",
                    "Mapping dashboard for a logistics startup.",
                    &["maps", "dashboard"],
                ),
                project(
                    "Northwind",
                    "E-commerce storefront rebuilt for speed.",
                    &["commerce", "perf"],
                ),
                project(
                    "Lumen",
                    "Design system shared by four product teams.",
                    &["design-system"],
                ),
                project(
                    "Tidepool",
                    "Booking flow for a chain of swim schools.",
                    &["forms", "a11y"],
                ),
                project(
                    "Quill",
                    "Editorial site with a headless CMS.",
                    &["cms", "content"],
                ),
            ],
            footer: format!("© {} Hadi. All rights reserved.", current_year()),
        }
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Sections flagged for reveal-on-scroll, in page order.
    pub fn animated_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.animate)
            .map(|(i, _)| i)
    }
}

/// Current calendar year in local time, for `data-year` stamps.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_link_targets_a_section() {
        let page = Page::portfolio();
        for link in &page.nav {
            assert!(
                page.section_index(&link.target).is_some(),
                "dangling link {}",
                link.target
            );
        }
    }

    #[test]
    fn footer_carries_the_current_year() {
        let page = Page::portfolio();
        assert!(page.footer.contains(&current_year().to_string()));
    }

    #[test]
    fn hero_is_not_animated() {
        let page = Page::portfolio();
        let animated: Vec<usize> = page.animated_sections().collect();
        assert!(!animated.contains(&0));
        assert_eq!(animated.len(), page.sections.len() - 1);
    }
}
