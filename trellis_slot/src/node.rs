// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable node descriptions.
//!
//! Components describe their output as a [`Node`] tree; a host turns that tree into live
//! elements. Nodes are plain data and cheap to rebuild on every update.

use std::borrow::Cow;
use std::rc::Rc;

use crate::props::{CLASS_NAME, Handler, PropBag, PropValue, STYLE, Style};
use crate::refs::RefTarget;
use crate::types::{ElementHandle, Event, Outcome};

/// What kind of element a node describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// A concrete host element such as `button` or `div`.
    Host(Cow<'static, str>),
    /// A pass-through grouping. Its children are mounted in place of it; it never
    /// becomes a host element and cannot carry a ref.
    Fragment,
}

/// An element description: kind, props, children, and an optional ref.
#[derive(Clone, Debug)]
pub struct Element {
    /// Host tag or fragment.
    pub kind: ElementKind,
    /// Props applied to the host element.
    pub props: PropBag,
    /// Child nodes.
    pub children: Vec<Node>,
    /// Ref receiving the mounted element.
    pub node_ref: Option<RefTarget>,
}

impl Element {
    /// A host element with the given tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ElementKind::Host(tag.into()),
            props: PropBag::new(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    /// A fragment.
    pub fn fragment() -> Self {
        Self {
            kind: ElementKind::Fragment,
            props: PropBag::new(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    /// Host tag, or `None` for fragments.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Host(tag) => Some(tag),
            ElementKind::Fragment => None,
        }
    }

    /// True for fragments.
    pub fn is_fragment(&self) -> bool {
        self.kind == ElementKind::Fragment
    }

    /// Set a prop.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Set every prop of `props`, last write wins.
    pub fn with_props(mut self, props: PropBag) -> Self {
        for (k, v) in props {
            self.props.insert(k, v);
        }
        self
    }

    /// Install a handler prop.
    pub fn on(self, key: impl Into<String>, f: impl Fn(&Event) -> Outcome + 'static) -> Self {
        self.prop(key, Handler::new(f))
    }

    /// Set the class name.
    pub fn class_name(self, class: impl Into<String>) -> Self {
        self.prop(CLASS_NAME, class.into())
    }

    /// Set the inline style.
    pub fn style(self, style: Style) -> Self {
        self.prop(STYLE, style)
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set or clear the ref.
    pub fn with_ref(mut self, node_ref: Option<RefTarget>) -> Self {
        self.node_ref = node_ref;
        self
    }
}

/// A subtree mounted under a different container than its logical parent.
#[derive(Clone, Debug, Default)]
pub struct Portal {
    /// Mount point; `None` means the host's default surface (the document body).
    pub container: Option<ElementHandle>,
    /// Nodes to mount.
    pub children: Vec<Node>,
}

/// A renderable node.
#[derive(Clone, Debug, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// A text run.
    Text(String),
    /// An element or fragment.
    Element(Element),
    /// A portal.
    Portal(Portal),
}

impl Node {
    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// True for [`Node::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<Portal> for Node {
    fn from(portal: Portal) -> Self {
        Self::Portal(portal)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Something that can describe its output as a [`Node`].
///
/// Components are built once and asked to render on every host update, so rendering
/// takes `&self`.
pub trait Render {
    /// Describe the current output.
    fn render(&self) -> Node;
}

impl Render for Node {
    fn render(&self) -> Node {
        self.clone()
    }
}

impl Render for Element {
    fn render(&self) -> Node {
        Node::Element(self.clone())
    }
}

impl Render for &'static str {
    fn render(&self) -> Node {
        Node::text(*self)
    }
}

impl Render for String {
    fn render(&self) -> Node {
        Node::text(self.clone())
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self) -> Node {
        (**self).render()
    }
}

/// Renders the items side by side in a fragment.
impl<T: Render> Render for Vec<T> {
    fn render(&self) -> Node {
        Element::fragment()
            .children(self.iter().map(Render::render))
            .into()
    }
}
