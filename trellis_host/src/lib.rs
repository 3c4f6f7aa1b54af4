// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Host: a minimal headless document for mounting and driving Trellis components.
//!
//! ## Overview
//!
//! - [`document`]: the [`Document`](document::Document), its roots, portals, queries, and
//!   event entry points.
//! - [`router`]: capture → target → bubble routing over any parent relation.
//! - [`ScrollLock`] and [`KeyListener`]: RAII registrations on a document.
//!
//! Nodes live in a generational arena, so a handle kept across an unmount never aliases a
//! newer element.
//!
//! ## Minimal usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trellis_host::document::Document;
//! use trellis_slot::node::Element;
//! use trellis_slot::types::Outcome;
//!
//! let doc = Document::new();
//! let clicks = Rc::new(Cell::new(0));
//! let c = clicks.clone();
//! doc.mount(
//!     doc.body(),
//!     Element::new("button")
//!         .on("onClick", move |_| {
//!             c.set(c.get() + 1);
//!             Outcome::Continue
//!         })
//!         .child("Save")
//!         .into(),
//! );
//!
//! let save = doc.find_by_text("Save").unwrap();
//! doc.click(save);
//! assert_eq!(clicks.get(), 1);
//! ```

pub mod document;
mod keys;
pub mod router;
mod scroll;
mod tree;

pub use keys::KeyListener;
pub use scroll::ScrollLock;
