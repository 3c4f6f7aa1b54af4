// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element storage: a generational arena of host nodes with parent/child links.

use std::borrow::Cow;

use trellis_slot::props::{Handler, PropBag, PropValue};
use trellis_slot::refs::{RefCleanup, RefTarget};
use trellis_slot::types::ElementHandle;

use crate::router::ParentLookup;

/// What a host node holds.
pub(crate) enum Content {
    Element {
        tag: Cow<'static, str>,
        props: PropBag,
    },
    Text(String),
}

pub(crate) struct HostNode {
    generation: u32,
    pub(crate) parent: Option<ElementHandle>,
    pub(crate) children: Vec<ElementHandle>,
    /// Nodes mounted elsewhere through a portal rendered by this node. Removed with it.
    pub(crate) portals: Vec<ElementHandle>,
    pub(crate) content: Content,
    node_ref: Option<RefTarget>,
    ref_cleanup: Option<RefCleanup>,
}

impl HostNode {
    fn new(generation: u32, parent: Option<ElementHandle>, content: Content) -> Self {
        Self {
            generation,
            parent,
            children: Vec::new(),
            portals: Vec::new(),
            content,
            node_ref: None,
            ref_cleanup: None,
        }
    }

    pub(crate) fn props(&self) -> Option<&PropBag> {
        match &self.content {
            Content::Element { props, .. } => Some(props),
            Content::Text(_) => None,
        }
    }

    pub(crate) fn props_mut(&mut self) -> Option<&mut PropBag> {
        match &mut self.content {
            Content::Element { props, .. } => Some(props),
            Content::Text(_) => None,
        }
    }
}

/// A node removed from the tree whose ref still has to be released.
pub(crate) struct Detached {
    pub(crate) node_ref: Option<RefTarget>,
    pub(crate) cleanup: Option<RefCleanup>,
}

/// Slot storage for host nodes.
pub(crate) struct Tree {
    nodes: Vec<Option<HostNode>>, // slots
    generations: Vec<u32>,        // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish()
    }
}

impl Tree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a node as the last child of `parent` (or as a root if `None`).
    pub(crate) fn insert(&mut self, parent: Option<ElementHandle>, content: Content) -> ElementHandle {
        let parent = parent.filter(|p| self.is_alive(*p));
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(HostNode::new(generation, parent, content));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(HostNode::new(generation, parent, content)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementHandle uses 32-bit slot indices by design."
        )]
        let id = ElementHandle::new(idx as u32, generation);
        if let Some(p) = parent
            && let Some(node) = self.get_mut(p)
        {
            node.children.push(id);
        }
        id
    }

    /// Remove `id`, its children, and the nodes it portaled elsewhere.
    ///
    /// Returns the removed nodes' refs in teardown order (children before parents).
    pub(crate) fn remove(&mut self, id: ElementHandle) -> Vec<Detached> {
        let mut out = Vec::new();
        if !self.is_alive(id) {
            return out;
        }
        if let Some(parent) = self.get(id).and_then(|n| n.parent)
            && let Some(p) = self.get_mut(parent)
        {
            p.children.retain(|c| *c != id);
        }
        self.remove_subtree(id, &mut out);
        out
    }

    fn remove_subtree(&mut self, id: ElementHandle, out: &mut Vec<Detached>) {
        let (children, portals) = match self.get(id) {
            Some(n) => (n.children.clone(), n.portals.clone()),
            None => return,
        };
        for child in children {
            self.remove_subtree(child, out);
        }
        for portaled in portals {
            // Portaled nodes live under another parent; unlink them there first.
            if let Some(parent) = self.get(portaled).and_then(|n| n.parent)
                && let Some(p) = self.get_mut(parent)
            {
                p.children.retain(|c| *c != portaled);
            }
            self.remove_subtree(portaled, out);
        }
        let idx = id.slot() as usize;
        if let Some(node) = self.nodes[idx].take() {
            out.push(Detached {
                node_ref: node.node_ref,
                cleanup: node.ref_cleanup,
            });
            self.free_list.push(idx);
        }
    }

    pub(crate) fn is_alive(&self, id: ElementHandle) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get(&self, id: ElementHandle) -> Option<&HostNode> {
        self.nodes
            .get(id.slot() as usize)
            .and_then(Option::as_ref)
            .filter(|n| n.generation == id.generation())
    }

    pub(crate) fn get_mut(&mut self, id: ElementHandle) -> Option<&mut HostNode> {
        self.nodes
            .get_mut(id.slot() as usize)
            .and_then(Option::as_mut)
            .filter(|n| n.generation == id.generation())
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub(crate) fn set_ref(&mut self, id: ElementHandle, node_ref: RefTarget) {
        if let Some(node) = self.get_mut(id) {
            node.node_ref = Some(node_ref);
        }
    }

    /// Store the cleanup returned by a ref. Returns it back if `id` is gone.
    pub(crate) fn set_ref_cleanup(
        &mut self,
        id: ElementHandle,
        cleanup: RefCleanup,
    ) -> Option<RefCleanup> {
        match self.get_mut(id) {
            Some(node) => {
                node.ref_cleanup = Some(cleanup);
                None
            }
            None => Some(cleanup),
        }
    }

    pub(crate) fn prop(&self, id: ElementHandle, key: &str) -> Option<&PropValue> {
        self.get(id).and_then(HostNode::props).and_then(|p| p.get(key))
    }

    pub(crate) fn handler(&self, id: ElementHandle, key: &str) -> Option<Handler> {
        self.prop(id, key).and_then(PropValue::as_handler).cloned()
    }

    pub(crate) fn is_disabled(&self, id: ElementHandle) -> bool {
        self.prop(id, "disabled").and_then(PropValue::as_bool) == Some(true)
    }

    /// Pre-order walk of `root`'s subtree, `root` included.
    pub(crate) fn descendants(&self, root: ElementHandle) -> Vec<ElementHandle> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            out.push(id);
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    pub(crate) fn text_content(&self, id: ElementHandle) -> String {
        let mut out = String::new();
        for n in self.descendants(id) {
            if let Some(HostNode {
                content: Content::Text(t),
                ..
            }) = self.get(n)
            {
                out.push_str(t);
            }
        }
        out
    }

    /// Concatenated text of `id`'s direct text children.
    pub(crate) fn own_text(&self, id: ElementHandle) -> String {
        let mut out = String::new();
        if let Some(node) = self.get(id) {
            for &child in &node.children {
                if let Some(HostNode {
                    content: Content::Text(t),
                    ..
                }) = self.get(child)
                {
                    out.push_str(t);
                }
            }
        }
        out
    }
}

impl ParentLookup<ElementHandle> for Tree {
    fn parent_of(&self, node: &ElementHandle) -> Option<ElementHandle> {
        self.get(*node).and_then(|n| n.parent)
    }
}
