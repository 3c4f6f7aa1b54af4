// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handle sub-parts use to reach their dialog.
//!
//! Parts can be handed a [`DialogContext`] explicitly (`from_context`), or look one up
//! ambiently (`new`) inside an [`AlertDialog::provide`](crate::AlertDialog::provide) scope.
//! Ambient lookups outside any scope fail with [`DialogError::MissingContext`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use trellis_host::document::{Document, WeakDocument};

use crate::error::DialogError;
use crate::store::{DialogStore, IdentitySet};

thread_local! {
    static PROVIDERS: RefCell<Vec<DialogContext>> = const { RefCell::new(Vec::new()) };
}

/// Shared access to a dialog's store and the document it renders into.
#[derive(Clone)]
pub struct DialogContext {
    store: Rc<DialogStore>,
    doc: WeakDocument,
}

impl fmt::Debug for DialogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogContext")
            .field("store", &self.store)
            .field("doc", &self.doc)
            .finish()
    }
}

impl DialogContext {
    pub(crate) fn new(store: Rc<DialogStore>, doc: WeakDocument) -> Self {
        Self { store, doc }
    }

    /// The innermost provided context.
    ///
    /// `part` names the caller in the error.
    pub fn current(part: &'static str) -> Result<Self, DialogError> {
        PROVIDERS
            .with(|p| p.borrow().last().cloned())
            .ok_or(DialogError::MissingContext { part })
    }

    /// The dialog's store.
    pub fn store(&self) -> &Rc<DialogStore> {
        &self.store
    }

    /// The document, if it is still alive.
    pub fn document(&self) -> Option<Document> {
        self.doc.upgrade()
    }

    pub(crate) fn weak_document(&self) -> WeakDocument {
        self.doc.clone()
    }

    /// Current open state.
    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    /// The dialog's element ids.
    pub fn ids(&self) -> &IdentitySet {
        self.store.ids()
    }

    /// Ask for the dialog to open or close.
    pub fn request_open_change(&self, next: bool) {
        self.store.request_open_change(next);
    }

    /// `data-state` value for the current open state.
    pub fn data_state(&self) -> &'static str {
        crate::store::state_name(self.is_open())
    }

    /// Run `f` with this context as the innermost ambient one.
    pub(crate) fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        PROVIDERS.with(|p| p.borrow_mut().push(self.clone()));
        let _scope = ProvideScope;
        f()
    }
}

/// Pops the provider stack, also on unwind.
struct ProvideScope;

impl Drop for ProvideScope {
    fn drop(&mut self) {
        PROVIDERS.with(|p| {
            p.borrow_mut().pop();
        });
    }
}
