// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::rc::Rc;

use trellis_slot::node::{Node, Render};
use trellis_slot::props::{PropBag, merge_props};
use trellis_slot::refs::RefTarget;

use super::{Children, chain_click, render_as, render_children, take_click};
use crate::context::DialogContext;
use crate::error::DialogError;

/// Toggles the dialog.
///
/// Renders a `button` (or the element given to [`Trigger::as_child`]) wired to the content
/// through `aria-controls`, with `aria-expanded` mirroring the open state.
pub struct Trigger {
    ctx: DialogContext,
    props: PropBag,
    children: Children,
    as_child: Option<Rc<dyn Render>>,
    node_ref: Option<RefTarget>,
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("ctx", &self.ctx)
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("as_child", &self.as_child.is_some())
            .finish_non_exhaustive()
    }
}

impl Trigger {
    /// A trigger for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Trigger").map(|ctx| Self::from_context(&ctx))
    }

    /// A trigger for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            ctx: ctx.clone(),
            props: PropBag::new(),
            children: Vec::new(),
            as_child: None,
            node_ref: None,
        }
    }

    caller_props!(.props);
    child_list!(.children);

    /// Render as `child` instead of a `button`, merging the trigger's props onto it.
    pub fn as_child(mut self, child: impl Render + 'static) -> Self {
        self.as_child = Some(Rc::new(child));
        self
    }

    /// Ref receiving the rendered element.
    pub fn with_ref(mut self, node_ref: RefTarget) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

impl Render for Trigger {
    fn render(&self) -> Node {
        let ids = self.ctx.ids();
        let mut caller = self.props.clone();
        let caller_click = take_click(&mut caller);
        let ctx = self.ctx.clone();
        let toggle = chain_click(
            move |_| {
                let open = ctx.is_open();
                log::debug!("trigger clicked while {}", ctx.data_state());
                ctx.request_open_change(!open);
            },
            caller_click,
        );
        let own = PropBag::new()
            .with("type", "button")
            .with("aria-haspopup", "dialog")
            .with("aria-expanded", self.ctx.is_open())
            .with("aria-controls", ids.content())
            .with("id", ids.trigger())
            .with("onClick", toggle);
        render_as("button", self.as_child.as_ref()).render(
            merge_props(own, caller),
            self.node_ref.clone(),
            render_children(&self.children),
        )
    }
}
