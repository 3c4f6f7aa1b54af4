// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The AlertDialog sub-parts.
//!
//! Every part is built once, kept by the component that renders it, and asked to
//! [`render`](Render::render) on each host update. Caller props are merged over the part's
//! own props with [`merge_props`](trellis_slot::props::merge_props); for the clickable parts
//! the part's own click behavior runs before the caller's `onClick`.

use std::rc::Rc;

use trellis_slot::node::{Node, Render};
use trellis_slot::props::{Handler, PropBag, PropValue};
use trellis_slot::slot::RenderAs;
use trellis_slot::types::{Event, Outcome};

/// Builder methods for a part's caller props, stored at the given field path.
macro_rules! caller_props {
    ($(.$field:ident)+) => {
        /// Caller props, merged over the part's own.
        pub fn props(mut self, props: ::trellis_slot::props::PropBag) -> Self {
            self$(.$field)+ = props;
            self
        }

        /// Set one caller prop.
        pub fn prop(
            mut self,
            key: impl Into<String>,
            value: impl Into<::trellis_slot::props::PropValue>,
        ) -> Self {
            self$(.$field)+.insert(key, value);
            self
        }

        /// Set a caller handler prop such as `onClick`.
        pub fn on(
            self,
            key: impl Into<String>,
            f: impl Fn(&::trellis_slot::types::Event) -> ::trellis_slot::types::Outcome + 'static,
        ) -> Self {
            self.prop(key, ::trellis_slot::props::Handler::new(f))
        }
    };
}

/// Builder method appending to a part's children, stored at the given field path.
macro_rules! child_list {
    ($(.$field:ident)+) => {
        /// Append a child.
        pub fn child(mut self, child: impl ::trellis_slot::node::Render + 'static) -> Self {
            self$(.$field)+.push(::std::rc::Rc::new(child));
            self
        }
    };
}

mod actions;
mod content;
mod overlay;
mod portal;
mod text;
mod trigger;

pub use actions::{Action, Cancel};
pub use content::Content;
pub use overlay::Overlay;
pub use portal::DialogPortal;
pub use text::{Description, Footer, Title};
pub use trigger::Trigger;

type Children = Vec<Rc<dyn Render>>;

fn render_children(children: &[Rc<dyn Render>]) -> Vec<Node> {
    children.iter().map(|c| c.render()).collect()
}

/// The part's default element, or the caller's element when rendering as a child.
fn render_as(tag: &'static str, as_child: Option<&Rc<dyn Render>>) -> RenderAs {
    match as_child {
        Some(child) => RenderAs::Child(child.render()),
        None => RenderAs::Element(tag.into()),
    }
}

/// Remove the caller's `onClick` so the part can wrap it.
fn take_click(props: &mut PropBag) -> Option<Handler> {
    match props.remove("onClick") {
        Some(PropValue::Handler(h)) => Some(h),
        _ => None,
    }
}

/// A click handler running `first`, then the caller's handler, reporting the caller's outcome.
fn chain_click(first: impl Fn(&Event) + 'static, caller: Option<Handler>) -> Handler {
    Handler::new(move |event| {
        first(event);
        caller.as_ref().map_or(Outcome::Continue, |h| h.call(event))
    })
}
