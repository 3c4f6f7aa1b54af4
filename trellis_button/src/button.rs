// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::rc::Rc;

use trellis_slot::node::{Node, Render};
use trellis_slot::props::{CLASS_NAME, Handler, PropBag, PropValue, class_names, merge_props};
use trellis_slot::refs::RefTarget;
use trellis_slot::slot::RenderAs;
use trellis_slot::types::{Event, Outcome};

use crate::variant::{ButtonSize, ButtonVariant};

/// Class token every button carries.
pub const BASE_CLASS: &str = "button";

/// A styled button.
///
/// Renders a `button` element, or merges onto a caller-supplied element with
/// [`Button::as_child`]. Its class name is the base token, the variant and size tokens, then
/// the caller's class name.
#[derive(Default)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    props: PropBag,
    children: Vec<Rc<dyn Render>>,
    as_child: Option<Rc<dyn Render>>,
    node_ref: Option<RefTarget>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("as_child", &self.as_child.is_some())
            .finish_non_exhaustive()
    }
}

impl Button {
    /// A default-variant, default-size button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Caller props, merged over the button's own.
    pub fn props(mut self, props: PropBag) -> Self {
        self.props = props;
        self
    }

    /// Set one caller prop.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Set a caller handler prop.
    pub fn on(self, key: impl Into<String>, f: impl Fn(&Event) -> Outcome + 'static) -> Self {
        self.prop(key, Handler::new(f))
    }

    /// Append a child.
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.children.push(Rc::new(child));
        self
    }

    /// Render as `child` instead of a `button`.
    pub fn as_child(mut self, child: impl Render + 'static) -> Self {
        self.as_child = Some(Rc::new(child));
        self
    }

    /// Ref receiving the rendered element.
    pub fn with_ref(mut self, node_ref: RefTarget) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// The class name the button renders with.
    pub fn class_name(&self) -> String {
        class_names([Some(self.own_class().as_str()), self.props.class_name()])
    }

    fn own_class(&self) -> String {
        class_names([
            Some(BASE_CLASS),
            Some(self.variant.class_token()),
            Some(self.size.class_token()),
        ])
    }
}

impl Render for Button {
    fn render(&self) -> Node {
        let own = PropBag::new().with(CLASS_NAME, self.own_class());
        let render_as = match &self.as_child {
            Some(child) => RenderAs::Child(child.render()),
            None => RenderAs::Element("button".into()),
        };
        render_as.render(
            merge_props(own, self.props.clone()),
            self.node_ref.clone(),
            self.children.iter().map(|c| c.render()).collect(),
        )
    }
}
