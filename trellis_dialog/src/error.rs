// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog errors.

use thiserror::Error;

/// Errors raised while assembling a dialog.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    /// A sub-part looked for its dialog outside of any `AlertDialog::provide` scope.
    #[error("{part} must be used within an AlertDialog; no dialog context is being provided")]
    MissingContext {
        /// Name of the sub-part that asked.
        part: &'static str,
    },
}
