// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::rc::Rc;

use trellis_slot::node::{Element, Node, Render};
use trellis_slot::props::{CLASS_NAME, PropBag, merge_props};

use super::{Children, render_children};
use crate::context::DialogContext;
use crate::error::DialogError;
use crate::style;

/// An element with the part's class token under the caller's props.
///
/// A forced `id` is applied after the merge so the ARIA wiring cannot be broken by callers.
fn labelled(
    tag: &'static str,
    token: &str,
    id: Option<&str>,
    props: &PropBag,
    children: &[Rc<dyn Render>],
) -> Node {
    let mut merged = merge_props(PropBag::new().with(CLASS_NAME, token), props.clone());
    if let Some(id) = id {
        merged.insert("id", id);
    }
    Element::new(tag)
        .with_props(merged)
        .children(render_children(children))
        .into()
}

/// The dialog's heading, referenced by the content's `aria-labelledby`.
pub struct Title {
    ctx: DialogContext,
    props: PropBag,
    children: Children,
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Title")
            .field("id", &self.ctx.ids().title())
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

impl Title {
    /// A title for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Title").map(|ctx| Self::from_context(&ctx))
    }

    /// A title for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            ctx: ctx.clone(),
            props: PropBag::new(),
            children: Vec::new(),
        }
    }

    caller_props!(.props);
    child_list!(.children);
}

impl Render for Title {
    fn render(&self) -> Node {
        labelled("h2", style::TITLE, Some(self.ctx.ids().title()), &self.props, &self.children)
    }
}

/// Supporting text, referenced by the content's `aria-describedby`.
pub struct Description {
    ctx: DialogContext,
    props: PropBag,
    children: Children,
}

impl fmt::Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Description")
            .field("id", &self.ctx.ids().description())
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

impl Description {
    /// A description for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Description").map(|ctx| Self::from_context(&ctx))
    }

    /// A description for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            ctx: ctx.clone(),
            props: PropBag::new(),
            children: Vec::new(),
        }
    }

    caller_props!(.props);
    child_list!(.children);
}

impl Render for Description {
    fn render(&self) -> Node {
        labelled(
            "p",
            style::DESCRIPTION,
            Some(self.ctx.ids().description()),
            &self.props,
            &self.children,
        )
    }
}

/// Layout row for the dialog's buttons. Holds no state.
#[derive(Default)]
pub struct Footer {
    props: PropBag,
    children: Children,
}

impl fmt::Debug for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Footer")
            .field("props", &self.props)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Footer {
    /// An empty footer.
    pub fn new() -> Self {
        Self::default()
    }

    caller_props!(.props);
    child_list!(.children);
}

impl Render for Footer {
    fn render(&self) -> Node {
        labelled("div", style::FOOTER, None, &self.props, &self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_host::document::Document;
    use trellis_slot::props::PropValue;

    use crate::{AlertDialog, DialogOptions};

    #[test]
    fn title_and_description_carry_dialog_ids() {
        let doc = Document::new();
        let dialog = AlertDialog::new(&doc, DialogOptions::default());
        let title = dialog.title().prop("id", "custom").child("Delete file?").render();
        let title = title.as_element().unwrap();
        assert_eq!(title.tag(), Some("h2"));
        assert_eq!(title.props.get("id").and_then(PropValue::as_str), Some(dialog.ids().title()));
        assert_eq!(title.props.class_name(), Some(style::TITLE));

        let description = dialog.description().prop(CLASS_NAME, "muted").render();
        let description = description.as_element().unwrap();
        assert_eq!(description.tag(), Some("p"));
        assert_eq!(
            description.props.get("id").and_then(PropValue::as_str),
            Some(dialog.ids().description())
        );
        assert_eq!(description.props.class_name(), Some("alert-dialog-description muted"));
    }

    #[test]
    fn footer_is_a_plain_div() {
        let out = Footer::new().prop(CLASS_NAME, "end").child("x").render();
        let el = out.as_element().unwrap();
        assert_eq!(el.tag(), Some("div"));
        assert_eq!(el.props.class_name(), Some("alert-dialog-footer end"));
        assert!(!el.props.contains_key("id"));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn ambient_lookup_needs_a_dialog() {
        assert_eq!(
            Title::new().unwrap_err(),
            DialogError::MissingContext { part: "Title" }
        );
        let doc = Document::new();
        let dialog = AlertDialog::new(&doc, DialogOptions::default());
        assert!(dialog.provide(Description::new).is_ok());
    }
}
