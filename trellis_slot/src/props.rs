// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop bags and the merge policy used by [`Slot`](crate::slot::Slot).
//!
//! ## Overview
//!
//! A [`PropBag`] is an insertion-ordered map from prop name to [`PropValue`].
//! Three keys are special:
//!
//! - handler props (`on` followed by an ASCII uppercase letter, see [`is_handler_key`]);
//! - [`STYLE`], holding a [`Style`] map;
//! - [`CLASS_NAME`], holding a space-separated token string.
//!
//! ## Merge policy
//!
//! [`merge_props`] layers an override bag on top of a base bag:
//!
//! - handlers present in both are composed: override first, then base; the override's
//!   [`Outcome`] is returned;
//! - styles are shallow-merged with override keys winning;
//! - class names are concatenated base-then-override, skipping empty segments;
//! - every other key present in the override replaces the base value.
//!
//! ```
//! use trellis_slot::props::{PropBag, Style, merge_props};
//!
//! let base = PropBag::new()
//!     .with("className", "button")
//!     .with("style", Style::new().with("color", "red").with("margin", "0"))
//!     .with("type", "button");
//! let child = PropBag::new()
//!     .with("className", "primary")
//!     .with("style", Style::new().with("color", "blue"))
//!     .with("type", "submit");
//!
//! let merged = merge_props(base, child);
//! assert_eq!(merged.class_name(), Some("button primary"));
//! assert_eq!(merged.style().and_then(|s| s.get("color")), Some("blue"));
//! assert_eq!(merged.style().and_then(|s| s.get("margin")), Some("0"));
//! assert_eq!(merged.get("type").and_then(|v| v.as_str()), Some("submit"));
//! ```

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::types::{Event, Outcome};

/// Key of the style prop.
pub const STYLE: &str = "style";
/// Key of the class name prop.
pub const CLASS_NAME: &str = "className";

/// True if `key` names an event handler prop (`on` followed by an ASCII uppercase letter).
pub fn is_handler_key(key: &str) -> bool {
    key.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// A shared event handler.
///
/// Clones share the same callback; equality is identity.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&Event) -> Outcome>);

impl Handler {
    /// Wrap a callback.
    pub fn new(f: impl Fn(&Event) -> Outcome + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &Event) -> Outcome {
        (self.0)(event)
    }

    /// True when both handlers share the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Compose two handlers: `first` runs, then `second`; `first`'s outcome is returned.
pub fn compose_handlers(first: Handler, second: Handler) -> Handler {
    Handler::new(move |event| {
        let outcome = first.call(event);
        let _ = second.call(event);
        outcome
    })
}

/// Inline style: CSS property name to value, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style(IndexMap<String, String>);

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::insert`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property, returning the previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(property.into(), value.into())
    }

    /// Remove a property, preserving the order of the rest.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.shift_remove(property)
    }

    /// Value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow merge: `self`'s properties, with `other`'s applied on top.
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in &other.0 {
            out.0.insert(k.clone(), v.clone());
        }
        out
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{k}: {v};")?;
            first = false;
        }
        Ok(())
    }
}

/// Join class name segments with single spaces, skipping absent and empty ones.
///
/// Segments are kept verbatim; whitespace inside or around a segment is not normalized.
pub fn class_names<'a>(segments: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut out = String::new();
    for segment in segments.into_iter().flatten() {
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(segment);
    }
    out
}

/// A single prop value.
#[derive(Clone, Debug)]
pub enum PropValue {
    /// Boolean attribute or flag.
    Bool(bool),
    /// Numeric attribute.
    Number(f64),
    /// String attribute (also used for [`CLASS_NAME`]).
    Str(String),
    /// Inline style (used for [`STYLE`]).
    Style(Style),
    /// Event handler.
    Handler(Handler),
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Style(a), Self::Style(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PropValue {
    /// String contents, for [`PropValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean contents, for [`PropValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Style contents, for [`PropValue::Style`].
    pub fn as_style(&self) -> Option<&Style> {
        match self {
            Self::Style(s) => Some(s),
            _ => None,
        }
    }

    /// Handler contents, for [`PropValue::Handler`].
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// Serialized attribute form. Handlers have none.
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::Style(s) => Some(s.to_string()),
            Self::Handler(_) => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Style> for PropValue {
    fn from(v: Style) -> Self {
        Self::Style(v)
    }
}

impl From<Handler> for PropValue {
    fn from(v: Handler) -> Self {
        Self::Handler(v)
    }
}

/// Insertion-ordered prop map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropBag(IndexMap<String, PropValue>);

impl PropBag {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PropBag::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder that installs a handler under `key`.
    pub fn on(self, key: impl Into<String>, f: impl Fn(&Event) -> Outcome + 'static) -> Self {
        self.with(key, Handler::new(f))
    }

    /// Set a prop, returning the previous value. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a prop, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.shift_remove(key)
    }

    /// Value of a prop.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate props in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Prop names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The [`CLASS_NAME`] prop, when it is a string.
    pub fn class_name(&self) -> Option<&str> {
        self.get(CLASS_NAME).and_then(PropValue::as_str)
    }

    /// The [`STYLE`] prop, when it is a style map.
    pub fn style(&self) -> Option<&Style> {
        self.get(STYLE).and_then(PropValue::as_style)
    }

    /// The handler stored under `key`, if any.
    pub fn handler(&self, key: &str) -> Option<&Handler> {
        self.get(key).and_then(PropValue::as_handler)
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

impl IntoIterator for PropBag {
    type Item = (String, PropValue);
    type IntoIter = indexmap::map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Merge `overrides` on top of `base` (see the [module docs](self) for the per-key policy).
///
/// Base keys keep their position; keys only present in `overrides` follow in their own order.
/// When the two values under a special key have different kinds, the override wins.
pub fn merge_props(base: PropBag, overrides: PropBag) -> PropBag {
    let mut merged = base;
    for (key, value) in overrides {
        let combined = match (merged.0.get(&key), value) {
            (Some(PropValue::Handler(base)), PropValue::Handler(over)) if is_handler_key(&key) => {
                PropValue::Handler(compose_handlers(over, base.clone()))
            }
            (Some(PropValue::Style(base)), PropValue::Style(over)) if key == STYLE => {
                PropValue::Style(base.merged(&over))
            }
            (Some(PropValue::Str(base)), PropValue::Str(over)) if key == CLASS_NAME => {
                PropValue::Str(class_names([Some(base.as_str()), Some(over.as_str())]))
            }
            (_, value) => value,
        };
        merged.0.insert(key, combined);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementHandle;
    use std::cell::RefCell;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, out: Outcome) -> Handler {
        let log = log.clone();
        Handler::new(move |_| {
            log.borrow_mut().push(name);
            out
        })
    }

    #[test]
    fn handler_key_pattern() {
        assert!(is_handler_key("onClick"));
        assert!(is_handler_key("onKeyDown"));
        assert!(!is_handler_key("one"));
        assert!(!is_handler_key("on"));
        assert!(!is_handler_key("online"));
        assert!(!is_handler_key("className"));
    }

    #[test]
    fn handlers_in_both_compose_override_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let base = PropBag::new().with("onClick", recorder(&log, "base", Outcome::StopAndConsume));
        let over = PropBag::new().with("onClick", recorder(&log, "override", Outcome::Stop));
        let merged = merge_props(base, over);
        let out = merged
            .handler("onClick")
            .unwrap()
            .call(&Event::click(ElementHandle::new(0, 1)));
        assert_eq!(out, Outcome::Stop);
        assert_eq!(*log.borrow(), vec!["override", "base"]);
    }

    #[test]
    fn handler_in_one_bag_is_used_unchanged() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let only_base = recorder(&log, "base", Outcome::Continue);
        let merged = merge_props(PropBag::new().with("onClick", only_base.clone()), PropBag::new());
        assert!(merged.handler("onClick").unwrap().ptr_eq(&only_base));

        let only_over = recorder(&log, "override", Outcome::Continue);
        let merged = merge_props(PropBag::new(), PropBag::new().with("onClick", only_over.clone()));
        assert!(merged.handler("onClick").unwrap().ptr_eq(&only_over));
    }

    #[test]
    fn non_handler_on_keys_are_plain_overrides() {
        let merged = merge_props(
            PropBag::new().with("one", "a"),
            PropBag::new().with("one", "b"),
        );
        assert_eq!(merged.get("one").and_then(PropValue::as_str), Some("b"));
    }

    #[test]
    fn class_names_skip_empty_segments() {
        let merged = merge_props(
            PropBag::new().with(CLASS_NAME, ""),
            PropBag::new().with(CLASS_NAME, "child"),
        );
        assert_eq!(merged.class_name(), Some("child"));
        assert_eq!(class_names([Some("a"), None, Some(""), Some("b")]), "a b");
    }

    #[test]
    fn class_name_segments_are_not_trimmed() {
        let merged = merge_props(
            PropBag::new().with(CLASS_NAME, "a "),
            PropBag::new().with(CLASS_NAME, "b"),
        );
        assert_eq!(merged.class_name(), Some("a  b"));
        assert_eq!(class_names([Some(" x"), Some("y ")]), " x y ");
    }

    #[test]
    fn absent_override_keys_fall_through() {
        let base = PropBag::new().with("id", "x").with("disabled", true);
        let merged = merge_props(base.clone(), PropBag::new().with("title", "t"));
        assert_eq!(merged.get("id"), base.get("id"));
        assert_eq!(merged.get("disabled"), Some(&PropValue::Bool(true)));
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["id", "disabled", "title"]);
    }

    #[test]
    fn mismatched_special_kinds_take_override() {
        let merged = merge_props(
            PropBag::new().with(STYLE, "color: red"),
            PropBag::new().with(STYLE, Style::new().with("color", "blue")),
        );
        assert_eq!(merged.style().and_then(|s| s.get("color")), Some("blue"));
    }

    #[test]
    fn attribute_serialization() {
        assert_eq!(PropValue::from(true).to_attribute().as_deref(), Some("true"));
        assert_eq!(PropValue::from(2).to_attribute().as_deref(), Some("2"));
        let style = Style::new().with("overflow", "hidden").with("color", "red");
        assert_eq!(
            PropValue::from(style).to_attribute().as_deref(),
            Some("overflow: hidden; color: red;")
        );
        assert!(PropValue::from(Handler::new(|_| Outcome::Continue)).to_attribute().is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn token() -> impl Strategy<Value = String> {
            "[a-z]{0,6}"
        }

        fn style_map() -> impl Strategy<Value = Vec<(String, String)>> {
            proptest::collection::vec(("[a-c]{1,2}", "[a-z]{1,4}"), 0..6)
        }

        proptest! {
            #[test]
            fn class_name_is_trimmed_concatenation(base in token(), over in token()) {
                let merged = merge_props(
                    PropBag::new().with(CLASS_NAME, base.clone()),
                    PropBag::new().with(CLASS_NAME, over.clone()),
                );
                let expected = format!("{base} {over}").trim().to_owned();
                prop_assert_eq!(merged.class_name(), Some(expected.as_str()));
            }

            #[test]
            fn style_keeps_every_key_and_override_wins(base in style_map(), over in style_map()) {
                let base_style: Style = base.iter().fold(Style::new(), |s, (k, v)| s.with(k.clone(), v.clone()));
                let over_style: Style = over.iter().fold(Style::new(), |s, (k, v)| s.with(k.clone(), v.clone()));
                let merged = merge_props(
                    PropBag::new().with(STYLE, base_style.clone()),
                    PropBag::new().with(STYLE, over_style.clone()),
                );
                let style = merged.style().unwrap();
                for (k, v) in base_style.iter() {
                    let expected = over_style.get(k).unwrap_or(v);
                    prop_assert_eq!(style.get(k), Some(expected));
                }
                for (k, v) in over_style.iter() {
                    prop_assert_eq!(style.get(k), Some(v));
                }
                let mut keys: Vec<&str> = base_style.iter().chain(over_style.iter()).map(|(k, _)| k).collect();
                keys.sort_unstable();
                keys.dedup();
                prop_assert_eq!(style.len(), keys.len());
            }

            #[test]
            fn composed_handlers_run_once_each_in_order(
                over_out in prop_oneof![Just(Outcome::Continue), Just(Outcome::Stop), Just(Outcome::StopAndConsume)],
                base_out in prop_oneof![Just(Outcome::Continue), Just(Outcome::Stop), Just(Outcome::StopAndConsume)],
            ) {
                let log = Rc::new(RefCell::new(Vec::new()));
                let merged = merge_props(
                    PropBag::new().with("onClick", recorder(&log, "base", base_out)),
                    PropBag::new().with("onClick", recorder(&log, "override", over_out)),
                );
                let out = merged.handler("onClick").unwrap().call(&Event::click(ElementHandle::new(0, 1)));
                prop_assert_eq!(out, over_out);
                prop_assert_eq!(log.borrow().clone(), vec!["override", "base"]);
            }
        }
    }
}
