// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Slot primitive and the "render as" choice built on it.
//!
//! ## Overview
//!
//! [`Slot`] renders its single child in place of its own element, merging the slot's props
//! underneath the child's (see [`merge_props`]) and composing the slot's ref with the child's.
//! Children that are not elements render nothing.
//!
//! [`RenderAs`] is the two-way choice components make up front: render their default host
//! element, or merge onto a caller-supplied child through a [`Slot`].
//!
//! ```
//! use trellis_slot::node::{Element, Node};
//! use trellis_slot::props::PropBag;
//! use trellis_slot::slot::Slot;
//!
//! let out = Slot::new()
//!     .props(PropBag::new().with("className", "trigger").with("aria-haspopup", "dialog"))
//!     .render(Element::new("a").prop("href", "#").class_name("link"));
//!
//! let el = out.as_element().unwrap();
//! assert_eq!(el.tag(), Some("a"));
//! assert_eq!(el.props.class_name(), Some("trigger link"));
//! assert!(el.props.contains_key("aria-haspopup"));
//!
//! assert!(Slot::new().render("just text").is_empty());
//! ```

use std::borrow::Cow;

use crate::node::{Element, Node};
use crate::props::{PropBag, merge_props};
use crate::refs::{RefTarget, compose_refs};

/// Renders its child with the slot's props and ref merged in.
#[derive(Clone, Debug, Default)]
pub struct Slot {
    props: PropBag,
    parent_ref: Option<RefTarget>,
}

impl Slot {
    /// A slot with no props and no ref.
    pub fn new() -> Self {
        Self::default()
    }

    /// Props merged underneath the child's props.
    pub fn props(mut self, props: PropBag) -> Self {
        self.props = props;
        self
    }

    /// Ref composed ahead of the child's own ref.
    pub fn with_ref(mut self, parent_ref: Option<RefTarget>) -> Self {
        self.parent_ref = parent_ref;
        self
    }

    /// Render `child` with the slot's props and ref.
    ///
    /// - Elements are cloned with `merge_props(slot, child)` and the composed ref. Fragments
    ///   take the merged props but no ref.
    /// - Text, empty nodes, and portals render [`Node::Empty`].
    pub fn render(self, child: impl Into<Node>) -> Node {
        let mut el = match child.into() {
            Node::Element(el) => el,
            other => {
                log::trace!("slot child is not an element ({other:?}); rendering nothing");
                return Node::Empty;
            }
        };

        let child_ref = el.node_ref.take();
        el.props = merge_props(self.props, el.props);
        if !el.is_fragment() {
            el.node_ref = match (self.parent_ref, child_ref) {
                (Some(parent), Some(child)) => Some(compose_refs([Some(parent), Some(child)])),
                (parent, child) => parent.or(child),
            };
        }
        Node::Element(el)
    }
}

/// How a component renders: its own host element, or merged onto a caller-supplied child.
#[derive(Clone, Debug)]
pub enum RenderAs {
    /// Render a host element with this tag.
    Element(Cow<'static, str>),
    /// Merge onto this node through a [`Slot`].
    Child(Node),
}

impl RenderAs {
    /// Produce the output for `props`, `node_ref`, and `children`.
    ///
    /// For [`RenderAs::Child`] the supplied `children` are ignored: the child node keeps
    /// its own.
    pub fn render(self, props: PropBag, node_ref: Option<RefTarget>, children: Vec<Node>) -> Node {
        match self {
            Self::Element(tag) => Element::new(tag)
                .with_props(props)
                .children(children)
                .with_ref(node_ref)
                .into(),
            Self::Child(child) => Slot::new().props(props).with_ref(node_ref).render(child),
        }
    }
}
