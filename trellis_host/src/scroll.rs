// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Counted body scroll lock.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::document::{Document, Inner};

#[derive(Debug, Default)]
pub(crate) struct ScrollState {
    pub(crate) holders: usize,
    /// Body `overflow` captured by the first holder.
    saved: Option<String>,
}

/// Keeps body scrolling locked while alive.
///
/// Obtained from [`Document::lock_scroll`]. The last guard to drop restores the body's
/// `overflow` to what it was before the first lock, or removes it if it was unset.
#[must_use = "scrolling unlocks as soon as the guard is dropped"]
pub struct ScrollLock {
    doc: Weak<Inner>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("document_alive", &(self.doc.strong_count() > 0))
            .finish()
    }
}

impl ScrollLock {
    pub(crate) fn acquire(doc: &Document) -> Self {
        let first = {
            let mut state = doc.inner().scroll.borrow_mut();
            state.holders += 1;
            state.holders == 1
        };
        if first {
            let saved = doc.body_overflow();
            log::debug!("locking body scroll (saved overflow: {saved:?})");
            doc.inner().scroll.borrow_mut().saved = saved;
            doc.set_body_style("overflow", "hidden");
        }
        Self {
            doc: Rc::downgrade(doc.inner()),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let Some(inner) = self.doc.upgrade() else {
            return;
        };
        let restore = {
            let mut state = inner.scroll.borrow_mut();
            state.holders = state.holders.saturating_sub(1);
            (state.holders == 0).then(|| state.saved.take())
        };
        if let Some(saved) = restore {
            log::debug!("unlocking body scroll (restoring {saved:?})");
            let doc = Document::from_inner(inner);
            match saved {
                Some(overflow) => doc.set_body_style("overflow", overflow),
                None => doc.remove_body_style("overflow"),
            }
        }
    }
}
