// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Dialog: a headless, compound alert dialog.
//!
//! ## Overview
//!
//! An [`AlertDialog`] owns one [`DialogStore`](store::DialogStore): the open flag (controlled
//! or uncontrolled), the element ids linking its parts, and the transition hooks that run
//! while it is open. Its sub-parts live in [`parts`]:
//!
//! - [`Trigger`](parts::Trigger) toggles the dialog.
//! - [`Content`](parts::Content) renders only while open, through a portal, next to an
//!   [`Overlay`](parts::Overlay). While mounted and open it closes on Escape and locks body
//!   scrolling.
//! - [`Title`](parts::Title) and [`Description`](parts::Description) label the content.
//! - [`Footer`](parts::Footer) lays out [`Action`](parts::Action) and
//!   [`Cancel`](parts::Cancel), which close the dialog before running caller callbacks.
//!
//! Parts are created from the dialog (`dialog.trigger()`) or, inside
//! [`AlertDialog::provide`], ambiently (`Trigger::new()?`). Ambient lookups outside a dialog
//! fail with [`DialogError::MissingContext`].
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use trellis_dialog::{AlertDialog, DialogOptions};
//! use trellis_host::document::Document;
//! use trellis_slot::node::Render;
//!
//! let doc = Document::new();
//! let dialog = AlertDialog::new(&doc, DialogOptions::default());
//! let footer = dialog
//!     .footer()
//!     .child(dialog.cancel().child("Keep"))
//!     .child(dialog.action().child("Delete it"));
//! let content = dialog
//!     .content()
//!     .child(dialog.title().child("Delete this file?"))
//!     .child(footer);
//! let parts = vec![
//!     Rc::new(dialog.trigger().child("Delete")) as Rc<dyn Render>,
//!     Rc::new(content) as Rc<dyn Render>,
//! ];
//! doc.create_root(doc.body(), parts);
//!
//! doc.click(doc.find_by_text("Delete").unwrap());
//! let content = doc.find_by_attribute("role", "alertdialog").unwrap();
//! assert_eq!(
//!     doc.attribute_str(content, "aria-labelledby").as_deref(),
//!     Some(dialog.ids().title()),
//! );
//!
//! doc.click(doc.find_by_text("Keep").unwrap());
//! assert!(doc.find_by_attribute("role", "alertdialog").is_none());
//! ```

mod context;
mod dialog;
mod error;
pub mod parts;
pub mod store;
pub mod style;

pub use context::DialogContext;
pub use dialog::AlertDialog;
pub use error::DialogError;
pub use store::{DialogOptions, IdentitySet};
