// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_slot::node::{Element, Node, Render};
use trellis_slot::props::{CLASS_NAME, PropBag, merge_props};

use super::{chain_click, take_click};
use crate::context::DialogContext;
use crate::error::DialogError;
use crate::style;

/// Backdrop behind the content.
///
/// When closeable, a click aimed at the overlay itself closes the dialog; clicks bubbling up
/// from descendants do not. The caller's `onClick` runs either way.
#[derive(Debug)]
pub struct Overlay {
    ctx: DialogContext,
    props: PropBag,
    closeable: bool,
}

impl Overlay {
    /// An overlay for the innermost provided dialog.
    pub fn new() -> Result<Self, DialogError> {
        DialogContext::current("Overlay").map(|ctx| Self::from_context(&ctx))
    }

    /// An overlay for the dialog behind `ctx`.
    pub fn from_context(ctx: &DialogContext) -> Self {
        Self {
            ctx: ctx.clone(),
            props: PropBag::new(),
            closeable: false,
        }
    }

    caller_props!(.props);

    /// Close the dialog on clicks aimed at the overlay.
    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }
}

impl Render for Overlay {
    fn render(&self) -> Node {
        let mut caller = self.props.clone();
        let caller_click = take_click(&mut caller);
        let ctx = self.ctx.clone();
        let closeable = self.closeable;
        let on_click = chain_click(
            move |event| {
                if closeable && event.is_self_target() {
                    log::debug!("overlay clicked; closing");
                    ctx.request_open_change(false);
                }
            },
            caller_click,
        );
        let mut props = merge_props(PropBag::new().with(CLASS_NAME, style::OVERLAY), caller);
        props.insert("onClick", on_click);
        props.insert("aria-hidden", "true");
        props.insert("data-state", self.ctx.data_state());
        Element::new("div").with_props(props).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_host::document::Document;
    use trellis_slot::props::PropValue;

    use crate::{AlertDialog, DialogOptions};

    #[test]
    fn forces_aria_hidden_and_merges_class() {
        let doc = Document::new();
        let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
        let out = dialog
            .overlay()
            .prop("aria-hidden", "false")
            .prop(CLASS_NAME, "dim")
            .render();
        let props = &out.as_element().unwrap().props;
        assert_eq!(props.get("aria-hidden").and_then(PropValue::as_str), Some("true"));
        assert_eq!(props.get("data-state").and_then(PropValue::as_str), Some("open"));
        assert_eq!(props.class_name(), Some("alert-dialog-overlay dim"));
    }

    #[test]
    fn self_click_closes_only_when_closeable() {
        let doc = Document::new();
        let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
        let root = doc.create_root(doc.body(), dialog.overlay());
        doc.click(doc.find_by_tag("div").unwrap());
        assert!(dialog.is_open());
        doc.remove_root(root);

        doc.create_root(doc.body(), dialog.overlay().closeable(true));
        doc.click(doc.find_by_tag("div").unwrap());
        assert!(!dialog.is_open());
    }
}
