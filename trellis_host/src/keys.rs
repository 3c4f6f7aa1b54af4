// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level key listener registrations.

use std::fmt;
use std::rc::Weak;

use crate::document::Inner;

/// Keeps a key listener registered while alive.
///
/// Obtained from [`Document::add_key_listener`](crate::document::Document::add_key_listener).
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct KeyListener {
    id: u64,
    doc: Weak<Inner>,
}

impl fmt::Debug for KeyListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListener")
            .field("id", &self.id)
            .field("document_alive", &(self.doc.strong_count() > 0))
            .finish()
    }
}

impl KeyListener {
    pub(crate) fn new(id: u64, doc: Weak<Inner>) -> Self {
        Self { id, doc }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(inner) = self.doc.upgrade() {
            inner.key_listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            log::trace!("key listener {} removed", self.id);
        }
    }
}
