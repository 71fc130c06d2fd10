//! # Vitrine Surface
//!
//! Presentation boundary for the Vitrine interaction layer.
//!
//! The interaction core never touches a real document tree. It reads from an
//! explicit content manifest (see `vitrine-catalog`) and writes visibility
//! and class markers through the [`DocumentSurface`] trait; transient user
//! feedback goes through [`Notifier`]. The surface is an opaque store keyed
//! by [`NodeId`] - whatever renders the page (a browser shell, a test, the
//! demo binary) supplies the implementation.
//!
//! Writes are idempotent: setting a node visible twice is the same as once,
//! which is what lets the search filter re-run freely.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, RwLock};

/// Identity of one node in the rendered document
///
/// Node ids are plain strings by convention (`"nav-link:colors"`,
/// `"nav-header:components"`); the manifest types construct them so the
/// conventions live in one place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from its string form
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of the id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Write access to the rendered document
///
/// Every operation degrades to a no-op when the target node does not exist;
/// the surrounding page must stay interactive regardless of which demo
/// widgets are present.
pub trait DocumentSurface: Send + Sync {
    /// Show or hide a node
    fn set_visible(&self, node: &NodeId, visible: bool);

    /// Toggle a class marker on a node
    fn set_class(&self, node: &NodeId, class: &str, enabled: bool);
}

/// Transient message display (toast / inline feedback)
///
/// Fire-and-forget: no return value, no acknowledgement. Used for search
/// result counts, calendar selection confirmation, and booking feedback.
pub trait Notifier: Send + Sync {
    /// Display a transient message to the user
    fn notify(&self, message: &str);
}

/// Recorded presentation state of one node
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    hidden: bool,
    classes: Vec<String>,
}

impl NodeState {
    /// Whether the node is currently visible (nodes start visible)
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Whether the node currently carries the given class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory document surface
///
/// Stands in for the pre-rendered page: a key-value store of node states,
/// queryable from tests and the demo binary. Nodes spring into existence on
/// first write and default to visible with no classes, mirroring how the
/// rendered document starts out.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    nodes: RwLock<HashMap<NodeId, NodeState>>,
}

impl InMemorySurface {
    /// Create an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a node is visible; unwritten nodes are visible
    #[must_use]
    pub fn is_visible(&self, node: &NodeId) -> bool {
        self.nodes
            .read()
            .map(|nodes| nodes.get(node).is_none_or(NodeState::is_visible))
            .unwrap_or(true)
    }

    /// Whether a node carries a class; unwritten nodes carry none
    #[must_use]
    pub fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes
            .read()
            .map(|nodes| nodes.get(node).is_some_and(|state| state.has_class(class)))
            .unwrap_or(false)
    }

    /// Snapshot of a node's state, if it has ever been written
    #[must_use]
    pub fn node(&self, node: &NodeId) -> Option<NodeState> {
        self.nodes
            .read()
            .ok()
            .and_then(|nodes| nodes.get(node).cloned())
    }

    fn with_node(&self, node: &NodeId, update: impl FnOnce(&mut NodeState)) {
        if let Ok(mut nodes) = self.nodes.write() {
            update(nodes.entry(node.clone()).or_default());
        }
    }
}

impl DocumentSurface for InMemorySurface {
    fn set_visible(&self, node: &NodeId, visible: bool) {
        self.with_node(node, |state| state.hidden = !visible);
    }

    fn set_class(&self, node: &NodeId, class: &str, enabled: bool) {
        self.with_node(node, |state| {
            if enabled {
                if !state.has_class(class) {
                    state.classes.push(class.to_string());
                }
            } else {
                state.classes.retain(|c| c != class);
            }
        });
    }
}

/// Notifier that logs messages through `tracing`
///
/// The demo binary's stand-in for the toast popup.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "vitrine::toast", "{message}");
    }
}

/// Notifier that records every message, for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recording notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages notified so far, in order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// The most recent message, if any
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_nodes_are_visible_without_classes() {
        let surface = InMemorySurface::new();
        let node = NodeId::from("nav-link:overview");

        assert!(surface.is_visible(&node));
        assert!(!surface.has_class(&node, "collapsed"));
        assert_eq!(surface.node(&node), None);
    }

    #[test]
    fn visibility_writes_are_idempotent() {
        let surface = InMemorySurface::new();
        let node = NodeId::from("nav-link:colors");

        surface.set_visible(&node, false);
        surface.set_visible(&node, false);
        assert!(!surface.is_visible(&node));

        surface.set_visible(&node, true);
        assert!(surface.is_visible(&node));
    }

    #[test]
    fn class_toggling_does_not_duplicate() {
        let surface = InMemorySurface::new();
        let node = NodeId::from("nav-section:components");

        surface.set_class(&node, "collapsed", true);
        surface.set_class(&node, "collapsed", true);
        surface.set_class(&node, "collapsed", false);

        assert!(!surface.has_class(&node, "collapsed"));
    }

    #[test]
    fn recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.last().as_deref(), Some("second"));
    }
}
