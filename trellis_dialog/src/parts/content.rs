// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::rc::{Rc, Weak};

use trellis_host::document::WeakDocument;
use trellis_host::{KeyListener, ScrollLock};
use trellis_slot::node::{Element, Node, Portal, Render};
use trellis_slot::props::{CLASS_NAME, PropBag, merge_props};
use trellis_slot::refs::{RefCleanup, RefTarget, compose_refs};
use trellis_slot::types::{ElementHandle, Key, Outcome};

use super::{Children, Overlay, render_children};
use crate::context::DialogContext;
use crate::error::DialogError;
use crate::store::{DialogStore, TransitionHook};
use crate::style;

/// The dialog body.
///
/// Renders nothing while closed. While open it portals an [`Overlay`] and an
/// `alertdialog` element labelled by the dialog's title and description.
///
/// While that element is mounted and the dialog is open, Escape closes the dialog and body
/// scrolling is locked. Both are released when the dialog closes or the element unmounts.
pub struct Content {
    ctx: DialogContext,
    props: PropBag,
    children: Children,
    dismissable: bool,
    container: Option<ElementHandle>,
    node_ref: Option<RefTarget>,
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("ctx", &self.ctx)
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("dismissable", &self.dismissable)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

impl Content {
    /// Content for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Content").map(|ctx| Self::from_context(&ctx))
    }

    /// Content for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            ctx: ctx.clone(),
            props: PropBag::new(),
            children: Vec::new(),
            dismissable: false,
            container: None,
            node_ref: None,
        }
    }

    caller_props!(.props);
    child_list!(.children);

    /// Let clicks on the overlay close the dialog.
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    /// Portal into `container` instead of the body.
    pub fn container(mut self, container: ElementHandle) -> Self {
        self.container = Some(container);
        self
    }

    /// Ref receiving the `alertdialog` element.
    pub fn with_ref(mut self, node_ref: RefTarget) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

impl Render for Content {
    fn render(&self) -> Node {
        if !self.ctx.is_open() {
            return Node::Empty;
        }
        let ids = self.ctx.ids();
        let own = PropBag::new()
            .with("role", "alertdialog")
            .with("aria-modal", "true")
            .with("aria-labelledby", ids.title())
            .with("aria-describedby", ids.description())
            .with("id", ids.content())
            .with("data-state", self.ctx.data_state())
            .with(CLASS_NAME, style::CONTENT);
        let node_ref = compose_refs([
            Some(mount_effects(&self.ctx)),
            self.node_ref.clone(),
        ]);
        let body = Element::new("div")
            .with_props(merge_props(own, self.props.clone()))
            .children(render_children(&self.children))
            .with_ref(Some(node_ref));
        let overlay = Overlay::from_context(&self.ctx).closeable(self.dismissable);
        Portal {
            container: self.container,
            children: vec![overlay.render(), body.into()],
        }
        .into()
    }
}

/// Ref that registers [`DismissEffects`] while the element is mounted.
///
/// The returned cleanup unregisters the hook, exiting it if it is still entered.
fn mount_effects(ctx: &DialogContext) -> RefTarget {
    let store = Rc::downgrade(ctx.store());
    let doc = ctx.weak_document();
    RefTarget::callback(move |handle| {
        if handle.is_none() {
            return None;
        }
        let live = store.upgrade()?;
        let id = live.register_hook(DismissEffects {
            store: store.clone(),
            doc: doc.clone(),
            active: None,
        });
        let store = store.clone();
        Some(Box::new(move || {
            if let Some(store) = store.upgrade() {
                store.unregister_hook(id);
            }
        }) as RefCleanup)
    })
}

/// Escape handling and the scroll lock, held while the dialog is open.
struct DismissEffects {
    store: Weak<DialogStore>,
    doc: WeakDocument,
    active: Option<(KeyListener, ScrollLock)>,
}

impl TransitionHook for DismissEffects {
    fn enter(&mut self) {
        let Some(doc) = self.doc.upgrade() else {
            log::debug!("document gone; dialog effects not installed");
            return;
        };
        let store = self.store.clone();
        let listener = doc.add_key_listener(move |event| {
            if event.key() == Some(&Key::Escape)
                && let Some(store) = store.upgrade()
            {
                log::debug!("escape pressed; closing dialog {}", store.ids().content());
                store.request_open_change(false);
            }
            Outcome::Continue
        });
        self.active = Some((listener, doc.lock_scroll()));
    }

    fn exit(&mut self) {
        self.active = None;
    }
}
