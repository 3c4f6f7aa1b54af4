// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button variants and sizes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An unknown variant or size name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseVariantError {
    /// Not one of the [`ButtonVariant`] names.
    #[error("unknown button variant `{0}`")]
    Variant(String),
    /// Not one of the [`ButtonSize`] names.
    #[error("unknown button size `{0}`")]
    Size(String),
}

/// Visual emphasis of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled, neutral.
    #[default]
    Default,
    /// Border only.
    Outline,
    /// No background or border.
    Ghost,
    /// Dangerous or irreversible actions.
    Destructive,
    /// Lower emphasis fill.
    Secondary,
    /// Looks like a link.
    Link,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Outline,
        Self::Ghost,
        Self::Destructive,
        Self::Secondary,
        Self::Link,
    ];

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
            Self::Secondary => "secondary",
            Self::Link => "link",
        }
    }

    /// Class token, for example `button-outline`.
    pub fn class_token(self) -> &'static str {
        match self {
            Self::Default => "button-default",
            Self::Outline => "button-outline",
            Self::Ghost => "button-ghost",
            Self::Destructive => "button-destructive",
            Self::Secondary => "button-secondary",
            Self::Link => "button-link",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ParseVariantError::Variant(s.to_owned()))
    }
}

/// Dimensions of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Regular.
    #[default]
    Default,
    /// Small.
    Sm,
    /// Large.
    Lg,
    /// Square, for a lone icon.
    Icon,
    /// Small square.
    IconSm,
    /// Large square.
    IconLg,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconSm,
        Self::IconLg,
    ];

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
            Self::IconSm => "icon-sm",
            Self::IconLg => "icon-lg",
        }
    }

    /// Class token, for example `button-size-icon-sm`.
    pub fn class_token(self) -> &'static str {
        match self {
            Self::Default => "button-size-default",
            Self::Sm => "button-size-sm",
            Self::Lg => "button-size-lg",
            Self::Icon => "button-size-icon",
            Self::IconSm => "button-size-icon-sm",
            Self::IconLg => "button-size-icon-lg",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonSize {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ParseVariantError::Size(s.to_owned()))
    }
}
