// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ref targets and ref composition.
//!
//! ## Overview
//!
//! A ref is how a component learns which host element it was rendered into.
//! Two shapes are supported uniformly by [`RefTarget`]:
//!
//! - a callback, invoked with `Some(handle)` on mount and `None` on teardown, which may
//!   return a [`RefCleanup`];
//! - a shared [`ElementRef`] cell that is simply overwritten.
//!
//! [`compose_refs`] fans a single acquire/release pair out to any number of targets.
//!
//! ## Cleanup semantics
//!
//! Cleanups returned by callback targets are stored per target and run, in target order,
//! at the start of the next invocation of the composite. On release (`None`), a target whose
//! cleanup just ran is not also called with `None`.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_slot::refs::{ElementRef, RefTarget, compose_refs};
//! use trellis_slot::types::ElementHandle;
//!
//! let cell = ElementRef::new();
//! let cleanups = Rc::new(Cell::new(0));
//! let counter = cleanups.clone();
//! let callback = RefTarget::callback(move |_node| {
//!     let counter = counter.clone();
//!     Some(Box::new(move || counter.set(counter.get() + 1)))
//! });
//!
//! let composed = compose_refs([Some(cell.clone().into()), None, Some(callback)]);
//! composed.apply(Some(ElementHandle::new(0, 1)));
//! assert_eq!(cell.get(), Some(ElementHandle::new(0, 1)));
//! composed.apply(None);
//! assert_eq!(cell.get(), None);
//! assert_eq!(cleanups.get(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::types::ElementHandle;

/// Teardown returned by a callback ref.
pub type RefCleanup = Box<dyn FnOnce()>;

type RefCallback = dyn Fn(Option<ElementHandle>) -> Option<RefCleanup>;

/// A shared, mutable cell holding the current element (or `None`).
///
/// Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct ElementRef(Rc<Cell<Option<ElementHandle>>>);

impl ElementRef {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current element, if mounted.
    pub fn get(&self) -> Option<ElementHandle> {
        self.0.get()
    }

    /// Overwrite the current element.
    pub fn set(&self, value: Option<ElementHandle>) {
        self.0.set(value);
    }

    /// True when both values share the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Something that wants to know which host element it was rendered into.
#[derive(Clone)]
pub enum RefTarget {
    /// Invoked with the element on mount and `None` on teardown.
    Callback(Rc<RefCallback>),
    /// Overwritten with the element on mount and `None` on teardown.
    Cell(ElementRef),
}

impl fmt::Debug for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("RefTarget::Callback(..)"),
            Self::Cell(cell) => f.debug_tuple("RefTarget::Cell").field(&cell.get()).finish(),
        }
    }
}

impl From<ElementRef> for RefTarget {
    fn from(cell: ElementRef) -> Self {
        Self::Cell(cell)
    }
}

impl RefTarget {
    /// Wrap a callback ref.
    pub fn callback(f: impl Fn(Option<ElementHandle>) -> Option<RefCleanup> + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Deliver `value` to this target.
    ///
    /// Cells are overwritten and never produce a cleanup.
    pub fn apply(&self, value: Option<ElementHandle>) -> Option<RefCleanup> {
        match self {
            Self::Callback(f) => f(value),
            Self::Cell(cell) => {
                cell.set(value);
                None
            }
        }
    }
}

/// Combine `refs` into a single callback ref.
///
/// Absent entries are skipped. The composite applies each value to the remaining targets in
/// order and tracks the cleanups they return (see the [module docs](self)).
/// The composite itself never returns a cleanup, so hosts always release it with `None`.
pub fn compose_refs(refs: impl IntoIterator<Item = Option<RefTarget>>) -> RefTarget {
    let targets: Vec<RefTarget> = refs.into_iter().flatten().collect();
    let pending: RefCell<Vec<Option<RefCleanup>>> = RefCell::new(Vec::new());

    RefTarget::callback(move |value| {
        // Take the previous cleanups out before running any user code.
        let previous = pending.take();
        let mut cleaned = vec![false; targets.len()];
        for (i, cleanup) in previous.into_iter().enumerate() {
            if let Some(cleanup) = cleanup {
                cleanup();
                cleaned[i] = true;
            }
        }

        let mut next = Vec::with_capacity(targets.len());
        for (target, cleaned) in targets.iter().zip(cleaned) {
            if value.is_none() && cleaned {
                next.push(None);
                continue;
            }
            next.push(target.apply(value));
        }
        *pending.borrow_mut() = next;
        None
    })
}
