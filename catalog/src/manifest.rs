//! Explicit content manifest of the rendered documentation page.
//!
//! Rather than scraping the rendered document for searchable content, the
//! enumeration is explicit data: the embedder declares what the page
//! contains, the UI renders from it, and the index builder consumes it
//! directly. Node-id conventions for the sidebar live on these types so
//! the search reducer and the renderer agree on them.

use serde::{Deserialize, Serialize};
use vitrine_surface::NodeId;

/// One link in the sidebar navigation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Id of the content section this link scrolls to (`"colors"`)
    pub section_id: String,

    /// Visible label (`"Colors"`)
    pub label: String,
}

impl NavLink {
    /// Create a nav link
    #[must_use]
    pub fn new(section_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            label: label.into(),
        }
    }

    /// Node carrying this link's visibility (the list item wrapper)
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        NodeId::new(format!("nav-link:{}", self.section_id))
    }
}

/// A collapsible group of links in the sidebar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Group name (`"foundations"`, `"components"`)
    pub name: String,

    /// Links in document order
    pub links: Vec<NavLink>,
}

impl NavSection {
    /// Create a nav section
    #[must_use]
    pub fn new(name: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            name: name.into(),
            links,
        }
    }

    /// Node for the collapsible header (carries the `collapsed` class)
    #[must_use]
    pub fn header_node(&self) -> NodeId {
        NodeId::new(format!("nav-header:{}", self.name))
    }

    /// Node for the collapsible content area
    #[must_use]
    pub fn content_node(&self) -> NodeId {
        NodeId::new(format!("nav-content:{}", self.name))
    }
}

/// A heading inside a content section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Owning section id
    pub section_id: String,

    /// Heading text
    pub text: String,
}

impl Heading {
    /// Create a heading entry
    #[must_use]
    pub fn new(section_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            text: text.into(),
        }
    }
}

/// A design token (CSS custom property) with its literal value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Token name (`"--color-deep-blue"`)
    pub name: String,

    /// Literal value (`"#00064f"`); participates in search matching
    pub value: String,
}

impl TokenEntry {
    /// Create a token entry
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named component group or fixed demo component
///
/// `search_terms`, when present, replaces the label as the matching text
/// (the accordion matches "collapse" and "expand" although neither appears
/// in its label).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Owning section id
    pub section_id: String,

    /// Display name (`"Primary Buttons"`, `"Calendar"`)
    pub name: String,

    /// Custom matching text overriding the name
    pub search_terms: Option<String>,
}

impl ComponentEntry {
    /// Create a component entry matched by its name
    #[must_use]
    pub fn new(section_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            name: name.into(),
            search_terms: None,
        }
    }

    /// Create a component entry with custom matching text
    #[must_use]
    pub fn with_terms(
        section_id: impl Into<String>,
        name: impl Into<String>,
        terms: impl Into<String>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            name: name.into(),
            search_terms: Some(terms.into()),
        }
    }
}

/// Everything navigable on the page, in document order per category
///
/// A category the page does not have is simply an empty list; an absent
/// container never produces an error, it contributes zero index entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentManifest {
    /// Sidebar sections with their links
    pub nav_sections: Vec<NavSection>,

    /// Section headings
    pub headings: Vec<Heading>,

    /// Design tokens
    pub tokens: Vec<TokenEntry>,

    /// Named component groups (button variants, color groups, typography)
    pub component_groups: Vec<ComponentEntry>,

    /// Fixed demo components (Explore Cards, Accordion, Calendar)
    pub components: Vec<ComponentEntry>,

    /// Whether the ticket-booking demo region is present
    ///
    /// The booking widget has no searchable entry of its own; its presence
    /// only decides whether the booking store is initialized at all.
    pub has_booking_widget: bool,
}

impl ContentManifest {
    /// All nav links in document order
    pub fn nav_links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav_sections.iter().flat_map(|section| &section.links)
    }

    /// Resolve the nav link (and its owning section) for a content section
    ///
    /// Returns `None` when no sidebar entry points at the section; callers
    /// skip the visibility side effect for such matches and move on.
    #[must_use]
    pub fn resolve_nav(&self, section_id: &str) -> Option<(&NavSection, &NavLink)> {
        self.nav_sections.iter().find_map(|section| {
            section
                .links
                .iter()
                .find(|link| link.section_id == section_id)
                .map(|link| (section, link))
        })
    }

    /// Whether a fixed demo component with the given name is declared
    #[must_use]
    pub fn has_component(&self, name: &str) -> bool {
        self.components.iter().any(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> ContentManifest {
        ContentManifest {
            nav_sections: vec![
                NavSection::new(
                    "foundations",
                    vec![
                        NavLink::new("overview", "Overview"),
                        NavLink::new("colors", "Colors"),
                    ],
                ),
                NavSection::new("components", vec![NavLink::new("buttons", "Buttons")]),
            ],
            ..ContentManifest::default()
        }
    }

    #[test]
    fn resolve_nav_finds_owning_section() {
        let manifest = manifest();
        let (section, link) = match manifest.resolve_nav("buttons") {
            Some(found) => found,
            None => unreachable!("buttons is declared"),
        };
        assert_eq!(section.name, "components");
        assert_eq!(link.label, "Buttons");
    }

    #[test]
    fn resolve_nav_misses_unknown_sections() {
        assert!(manifest().resolve_nav("icons").is_none());
    }

    #[test]
    fn node_id_conventions() {
        let link = NavLink::new("colors", "Colors");
        assert_eq!(link.node_id().as_str(), "nav-link:colors");

        let section = NavSection::new("foundations", vec![]);
        assert_eq!(section.header_node().as_str(), "nav-header:foundations");
        assert_eq!(section.content_node().as_str(), "nav-content:foundations");
    }
}
