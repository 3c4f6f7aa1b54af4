// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Slot: headless "render as child" composition.
//!
//! ## Overview
//!
//! This crate holds the pieces every Trellis component is built from:
//!
//! - [`types`]: element handles, events, propagation phases, and handler outcomes.
//! - [`props`]: ordered prop bags and [`merge_props`](props::merge_props), the per-key merge policy.
//! - [`refs`]: ref targets and [`compose_refs`](refs::compose_refs).
//! - [`node`]: the [`Node`](node::Node) description components render to, and the
//!   [`Render`](node::Render) trait.
//! - [`slot`]: [`Slot`](slot::Slot), which renders its child with its own props and ref merged in,
//!   and [`RenderAs`](slot::RenderAs), the "own element or caller's element" choice.
//!
//! It does not mount anything. Hand the resulting [`Node`](node::Node) trees to a host such as
//! `trellis_host`.
//!
//! ## Minimal usage
//!
//! ```
//! use trellis_slot::node::Element;
//! use trellis_slot::props::PropBag;
//! use trellis_slot::slot::RenderAs;
//! use trellis_slot::types::Outcome;
//!
//! let props = PropBag::new()
//!     .with("className", "button")
//!     .on("onClick", |_| Outcome::Continue);
//!
//! // A component asked to render as the caller's anchor.
//! let out = RenderAs::Child(Element::new("a").prop("href", "/docs").into())
//!     .render(props, None, Vec::new());
//! assert_eq!(out.as_element().and_then(|el| el.tag()), Some("a"));
//! ```

pub mod node;
pub mod props;
pub mod refs;
pub mod slot;
pub mod types;
