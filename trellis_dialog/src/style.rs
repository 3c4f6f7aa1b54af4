// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class tokens applied by the dialog parts.
//!
//! Tokens are opaque: a stylesheet keyed on them decides how each part looks.

/// Backdrop behind the content.
pub const OVERLAY: &str = "alert-dialog-overlay";
/// The dialog body.
pub const CONTENT: &str = "alert-dialog-content";
/// Heading.
pub const TITLE: &str = "alert-dialog-title";
/// Supporting text.
pub const DESCRIPTION: &str = "alert-dialog-description";
/// Button row.
pub const FOOTER: &str = "alert-dialog-footer";
/// Confirming button.
pub const ACTION: &str = "alert-dialog-action";
/// Dismissing button.
pub const CANCEL: &str = "alert-dialog-cancel";
