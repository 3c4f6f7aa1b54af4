// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::rc::Rc;

use trellis_slot::node::{Node, Render};
use trellis_slot::props::{CLASS_NAME, Handler, PropBag, merge_props};
use trellis_slot::refs::RefTarget;

use super::{Children, chain_click, render_as, render_children, take_click};
use crate::context::DialogContext;
use crate::error::DialogError;
use crate::style;

/// Shared body of [`Action`] and [`Cancel`]: a button that closes the dialog.
struct CloseButton {
    ctx: DialogContext,
    name: &'static str,
    token: &'static str,
    props: PropBag,
    children: Children,
    as_child: Option<Rc<dyn Render>>,
    node_ref: Option<RefTarget>,
    outcome: Option<Rc<dyn Fn()>>,
}

impl fmt::Debug for CloseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.name)
            .field("ctx", &self.ctx)
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("as_child", &self.as_child.is_some())
            .field("outcome", &self.outcome.is_some())
            .finish_non_exhaustive()
    }
}

impl CloseButton {
    fn new(ctx: &DialogContext, name: &'static str, token: &'static str) -> Self {
        Self {
            ctx: ctx.clone(),
            name,
            token,
            props: PropBag::new(),
            children: Vec::new(),
            as_child: None,
            node_ref: None,
            outcome: None,
        }
    }

    /// Close, then the caller's `onClick`, then the outcome callback.
    fn render(&self) -> Node {
        let mut caller = self.props.clone();
        let caller_click = take_click(&mut caller);
        let ctx = self.ctx.clone();
        let name = self.name;
        let close = chain_click(
            move |_| {
                log::debug!("{name} clicked; closing dialog");
                ctx.request_open_change(false);
            },
            caller_click,
        );
        let outcome = self.outcome.clone();
        let on_click = Handler::new(move |event| {
            let result = close.call(event);
            if let Some(outcome) = &outcome {
                outcome();
            }
            result
        });
        let own = PropBag::new()
            .with("type", "button")
            .with(CLASS_NAME, self.token)
            .with("onClick", on_click);
        render_as("button", self.as_child.as_ref()).render(
            merge_props(own, caller),
            self.node_ref.clone(),
            render_children(&self.children),
        )
    }
}

/// Closes the dialog and confirms.
///
/// Clicking closes the dialog, runs the caller's `onClick`, then the
/// [`on_confirm`](Action::on_confirm) callback.
#[derive(Debug)]
pub struct Action {
    inner: CloseButton,
}

impl Action {
    /// An action for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Action").map(|ctx| Self::from_context(&ctx))
    }

    /// An action for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            inner: CloseButton::new(ctx, "Action", style::ACTION),
        }
    }

    caller_props!(.inner.props);
    child_list!(.inner.children);

    /// Run `f` after the dialog closed and the caller's `onClick` ran.
    pub fn on_confirm(mut self, f: impl Fn() + 'static) -> Self {
        self.inner.outcome = Some(Rc::new(f));
        self
    }

    /// Render as `child` instead of a `button`.
    pub fn as_child(mut self, child: impl Render + 'static) -> Self {
        self.inner.as_child = Some(Rc::new(child));
        self
    }

    /// Ref receiving the rendered element.
    pub fn with_ref(mut self, node_ref: RefTarget) -> Self {
        self.inner.node_ref = Some(node_ref);
        self
    }
}

impl Render for Action {
    fn render(&self) -> Node {
        self.inner.render()
    }
}

/// Closes the dialog and declines.
///
/// Clicking closes the dialog, runs the caller's `onClick`, then the
/// [`on_dismiss`](Cancel::on_dismiss) callback.
#[derive(Debug)]
pub struct Cancel {
    inner: CloseButton,
}

impl Cancel {
    /// A cancel button for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Cancel").map(|ctx| Self::from_context(&ctx))
    }

    /// A cancel button for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            inner: CloseButton::new(ctx, "Cancel", style::CANCEL),
        }
    }

    caller_props!(.inner.props);
    child_list!(.inner.children);

    /// Run `f` after the dialog closed and the caller's `onClick` ran.
    pub fn on_dismiss(mut self, f: impl Fn() + 'static) -> Self {
        self.inner.outcome = Some(Rc::new(f));
        self
    }

    /// Render as `child` instead of a `button`.
    pub fn as_child(mut self, child: impl Render + 'static) -> Self {
        self.inner.as_child = Some(Rc::new(child));
        self
    }

    /// Ref receiving the rendered element.
    pub fn with_ref(mut self, node_ref: RefTarget) -> Self {
        self.inner.node_ref = Some(node_ref);
        self
    }
}

impl Render for Cancel {
    fn render(&self) -> Node {
        self.inner.render()
    }
}
