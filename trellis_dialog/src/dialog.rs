// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use trellis_host::document::Document;

use crate::context::DialogContext;
use crate::parts::{
    Action, Cancel, Content, Description, DialogPortal, Footer, Overlay, Title, Trigger,
};
use crate::store::{DialogOptions, DialogStore, IdentitySet, ObserverId};

/// A compound alert dialog.
///
/// Owns the open state and ids; its sub-parts are created from it (`dialog.trigger()`,
/// `dialog.content()`, ...) or looked up ambiently inside [`AlertDialog::provide`].
/// Clones share the same dialog.
#[derive(Clone, Debug)]
pub struct AlertDialog {
    ctx: DialogContext,
}

impl AlertDialog {
    /// A dialog rendering into `doc`.
    pub fn new(doc: &Document, options: DialogOptions) -> Self {
        let store = Rc::new(DialogStore::new(options));
        log::debug!(
            "dialog {} created ({})",
            store.ids().content(),
            if store.is_controlled() { "controlled" } else { "uncontrolled" }
        );
        Self {
            ctx: DialogContext::new(store, doc.downgrade()),
        }
    }

    /// The handle sub-parts use to reach this dialog.
    pub fn context(&self) -> &DialogContext {
        &self.ctx
    }

    /// Current open state.
    pub fn is_open(&self) -> bool {
        self.ctx.is_open()
    }

    /// True while the caller owns the open state.
    pub fn is_controlled(&self) -> bool {
        self.ctx.store().is_controlled()
    }

    /// The dialog's element ids.
    pub fn ids(&self) -> &IdentitySet {
        self.ctx.ids()
    }

    /// Ask for the dialog to open or close, then refresh the document.
    pub fn request_open_change(&self, next: bool) {
        self.ctx.request_open_change(next);
        self.refresh();
    }

    /// Feed the caller-owned open state (`None` returns control to the dialog), then refresh
    /// the document.
    pub fn set_open(&self, open: Option<bool>) {
        self.ctx.store().set_controlled(open);
        self.refresh();
    }

    /// Observe effective open-state transitions.
    pub fn subscribe(&self, f: impl Fn(bool) + 'static) -> ObserverId {
        self.ctx.store().subscribe(f)
    }

    /// Stop observing.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.ctx.store().unsubscribe(id);
    }

    /// Run `f` with this dialog as the ambient one, so `Trigger::new()` and friends find it.
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        self.ctx.provide(f)
    }

    /// A trigger for this dialog.
    pub fn trigger(&self) -> Trigger {
        Trigger::from_context(&self.ctx)
    }

    /// A portal into the document body.
    pub fn portal(&self) -> DialogPortal {
        DialogPortal::new()
    }

    /// A standalone overlay for this dialog.
    pub fn overlay(&self) -> Overlay {
        Overlay::from_context(&self.ctx)
    }

    /// The content for this dialog.
    pub fn content(&self) -> Content {
        Content::from_context(&self.ctx)
    }

    /// The title for this dialog.
    pub fn title(&self) -> Title {
        Title::from_context(&self.ctx)
    }

    /// The description for this dialog.
    pub fn description(&self) -> Description {
        Description::from_context(&self.ctx)
    }

    /// A footer.
    pub fn footer(&self) -> Footer {
        Footer::new()
    }

    /// The confirming action for this dialog.
    pub fn action(&self) -> Action {
        Action::from_context(&self.ctx)
    }

    /// The cancel button for this dialog.
    pub fn cancel(&self) -> Cancel {
        Cancel::from_context(&self.ctx)
    }

    fn refresh(&self) {
        if let Some(doc) = self.ctx.document() {
            doc.update();
        }
    }
}
