// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Button: a headless button with variant and size class tokens.
//!
//! ```
//! use trellis_button::{Button, ButtonSize, ButtonVariant};
//! use trellis_slot::node::{Element, Render};
//!
//! let variant: ButtonVariant = "ghost".parse().unwrap();
//! let link = Button::new()
//!     .variant(variant)
//!     .size(ButtonSize::Sm)
//!     .as_child(Element::new("a").prop("href", "/settings").child("Settings"))
//!     .render();
//!
//! let el = link.as_element().unwrap();
//! assert_eq!(el.tag(), Some("a"));
//! assert_eq!(el.props.class_name(), Some("button button-ghost button-size-sm"));
//! ```

mod button;
mod variant;

pub use button::{BASE_CLASS, Button};
pub use variant::{ButtonSize, ButtonVariant, ParseVariantError};
