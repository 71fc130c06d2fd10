//! Sidebar visibility planning for filtered search results.
//!
//! Filtering is two-phase: the pure phase resolves a set of matched index
//! entries into a [`NavigationPlan`] (which links stay visible, which
//! sections expand), and the apply phase writes that plan to the surface.
//! Applying the same plan twice leaves the surface unchanged.

use std::collections::BTreeSet;

use vitrine_surface::DocumentSurface;

use crate::index::IndexEntry;
use crate::manifest::ContentManifest;

/// Class toggled on collapsed sidebar sections
const COLLAPSED_CLASS: &str = "collapsed";

/// The sidebar state a set of matches implies
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationPlan {
    /// Section ids whose nav links stay visible
    pub visible_links: BTreeSet<String>,

    /// Sidebar section names to expand
    pub expanded_sections: BTreeSet<String>,

    /// Matches whose section has no sidebar entry (skipped, not an error)
    pub unresolved: usize,
}

impl NavigationPlan {
    /// Resolve matched entries against the manifest
    ///
    /// Navigation matches contribute their own link. Heading, token and
    /// component matches resolve through the manifest to the link of their
    /// owning section; a match whose section has no sidebar entry is
    /// counted and skipped.
    #[must_use]
    pub fn for_matches(matches: &[&IndexEntry], manifest: &ContentManifest) -> Self {
        let mut plan = Self::default();

        for entry in matches {
            // Navigation entries resolve to their own link; everything else
            // resolves through its owning section.
            match manifest.resolve_nav(&entry.section_id) {
                Some((section, link)) => {
                    plan.visible_links.insert(link.section_id.clone());
                    plan.expanded_sections.insert(section.name.clone());
                },
                None => plan.unresolved += 1,
            }
        }

        plan
    }

    /// Write the plan to the surface
    ///
    /// Hides every nav link not in the plan, shows the planned ones and
    /// expands their sections. Idempotent: writes are absolute, not
    /// toggles.
    pub fn apply(&self, manifest: &ContentManifest, surface: &dyn DocumentSurface) {
        for link in manifest.nav_links() {
            let visible = self.visible_links.contains(&link.section_id);
            surface.set_visible(&link.node_id(), visible);
        }

        for section in &manifest.nav_sections {
            if self.expanded_sections.contains(&section.name) {
                surface.set_class(&section.header_node(), COLLAPSED_CLASS, false);
                surface.set_class(&section.content_node(), COLLAPSED_CLASS, false);
            }
        }

        tracing::debug!(
            visible = self.visible_links.len(),
            expanded = self.expanded_sections.len(),
            unresolved = self.unresolved,
            "navigation plan applied"
        );
    }
}

/// Restore the unfiltered sidebar: every link visible, every section open
pub fn reset_navigation(manifest: &ContentManifest, surface: &dyn DocumentSurface) {
    for link in manifest.nav_links() {
        surface.set_visible(&link.node_id(), true);
    }
    for section in &manifest.nav_sections {
        surface.set_class(&section.header_node(), COLLAPSED_CLASS, false);
        surface.set_class(&section.content_node(), COLLAPSED_CLASS, false);
    }
}
