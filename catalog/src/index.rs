//! Search index construction and substring filtering.
//!
//! The index is built once from the [`ContentManifest`] and never mutated.
//! Each entry carries a pre-lowered `search_key`; queries are normalized at
//! parse time, so the filter itself is a plain substring containment scan.

use serde::{Deserialize, Serialize};

use crate::manifest::ContentManifest;

/// The kind of content an index entry points at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// A sidebar navigation link
    Navigation,
    /// A heading inside a content section
    Heading,
    /// A design token with its literal value
    Token,
    /// A named component group or fixed demo component
    Component,
}

/// One searchable unit of the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// What kind of content this entry points at
    pub kind: EntryKind,

    /// Id of the content section the entry belongs to
    pub section_id: String,

    /// Human-readable label (display only, never matched against)
    pub label: String,

    /// Lowercased text the filter matches against
    pub search_key: String,
}

impl IndexEntry {
    fn new(
        kind: EntryKind,
        section_id: impl Into<String>,
        label: impl Into<String>,
        key: &str,
    ) -> Self {
        Self {
            kind,
            section_id: section_id.into(),
            label: label.into(),
            search_key: key.to_lowercase(),
        }
    }
}

/// A normalized, non-empty search query
///
/// Parsing trims and lowercases the raw input. Whitespace-only input yields
/// `None`, the reset sentinel: no query exists and the filter is never
/// consulted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw input; `None` means "show everything"
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Immutable list of index entries in category order
///
/// Category order is fixed: navigation links, headings, tokens, component
/// groups, then the fixed demo components. Within a category, entries keep
/// manifest (document) order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build the index from a content manifest
    #[must_use]
    pub fn build(manifest: &ContentManifest) -> Self {
        let mut entries = Vec::new();

        for link in manifest.nav_links() {
            entries.push(IndexEntry::new(
                EntryKind::Navigation,
                &link.section_id,
                &link.label,
                &link.label,
            ));
        }

        for heading in &manifest.headings {
            entries.push(IndexEntry::new(
                EntryKind::Heading,
                &heading.section_id,
                &heading.text,
                &heading.text,
            ));
        }

        for token in &manifest.tokens {
            // Tokens match on name and literal value ("#00064f" finds the
            // deep blue token).
            let key = format!("{} {}", token.name, token.value);
            entries.push(IndexEntry::new(
                EntryKind::Token,
                "tokens",
                &token.name,
                &key,
            ));
        }

        for group in manifest
            .component_groups
            .iter()
            .chain(&manifest.components)
        {
            let key = group.search_terms.as_deref().unwrap_or(&group.name);
            entries.push(IndexEntry::new(
                EntryKind::Component,
                &group.section_id,
                &group.name,
                key,
            ));
        }

        tracing::debug!(entry_count = entries.len(), "search index built");

        Self { entries }
    }

    /// All entries in category order
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose search key contains the query as a substring
    ///
    /// Order follows the index itself. Callers must only reach this with a
    /// parsed query; the empty-input case is handled upstream as a reset.
    #[must_use]
    pub fn filter(&self, query: &SearchQuery) -> Vec<&IndexEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.search_key.contains(query.as_str()))
            .collect()
    }
}
