// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full dialog flows driven through a document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trellis_button::{Button, ButtonVariant};
use trellis_dialog::parts::{Content, Trigger};
use trellis_dialog::{AlertDialog, DialogError, DialogOptions};
use trellis_host::document::{Document, DocumentConfig};
use trellis_slot::node::{Element, Node, Render};
use trellis_slot::refs::ElementRef;
use trellis_slot::types::{Key, Modifiers};

fn document(overflow: &str) -> Document {
    Document::with_config(DocumentConfig {
        ready: true,
        body_overflow: Some(overflow.to_owned()),
    })
}

fn part(r: impl Render + 'static) -> Rc<dyn Render> {
    Rc::new(r)
}

/// Trigger plus content holding title, description, and a footer with both buttons.
fn screen(dialog: &AlertDialog, dismissable: bool) -> Vec<Rc<dyn Render>> {
    let footer = dialog
        .footer()
        .child(dialog.cancel().child("Cancel"))
        .child(dialog.action().child("Continue"));
    let content = dialog
        .content()
        .dismissable(dismissable)
        .child(dialog.title().child("Are you sure?"))
        .child(dialog.description().child("This cannot be undone."))
        .child(footer);
    vec![part(dialog.trigger().child("Open")), part(content)]
}

fn esc(doc: &Document) {
    doc.key_down(Key::Escape, Modifiers::empty());
}

#[test]
fn trigger_then_action_round_trip() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::default());
    doc.create_root(doc.body(), screen(&dialog, false));
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());

    doc.click(doc.find_by_text("Open").unwrap());

    let content = doc.find_by_attribute("role", "alertdialog").unwrap();
    let title = doc.find_by_tag("h2").unwrap();
    let description = doc.find_by_tag("p").unwrap();
    assert_eq!(doc.attribute_str(content, "aria-modal").as_deref(), Some("true"));
    assert_eq!(
        doc.attribute_str(content, "aria-labelledby"),
        doc.attribute_str(title, "id")
    );
    assert_eq!(
        doc.attribute_str(content, "aria-describedby"),
        doc.attribute_str(description, "id")
    );
    assert_eq!(doc.parent(content), Some(doc.body()));
    let trigger = doc.find_by_text("Open").unwrap();
    assert_eq!(doc.attribute_str(trigger, "aria-expanded").as_deref(), Some("true"));
    assert_eq!(
        doc.attribute_str(trigger, "aria-controls"),
        doc.attribute_str(content, "id")
    );
    assert_eq!(doc.body_overflow().as_deref(), Some("hidden"));
    assert_eq!(doc.key_listener_count(), 1);

    doc.click(doc.find_by_text("Continue").unwrap());

    assert!(doc.find_by_attribute("role", "alertdialog").is_none());
    assert!(doc.find_by_tag("h2").is_none());
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
    assert_eq!(doc.key_listener_count(), 0);
    let trigger = doc.find_by_text("Open").unwrap();
    assert_eq!(doc.attribute_str(trigger, "aria-expanded").as_deref(), Some("false"));
}

#[test]
fn escape_closes_exactly_once() {
    let doc = document("scroll");
    let requests = Rc::new(RefCell::new(Vec::new()));
    let r = requests.clone();
    let dialog = AlertDialog::new(
        &doc,
        DialogOptions::default().on_open_change(move |open| r.borrow_mut().push(open)),
    );
    doc.create_root(doc.body(), screen(&dialog, false));
    doc.click(doc.find_by_text("Open").unwrap());
    esc(&doc);
    esc(&doc);
    assert!(!dialog.is_open());
    assert_eq!(*requests.borrow(), vec![true, false]);
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());
    assert_eq!(doc.body_overflow().as_deref(), Some("scroll"));
}

#[test]
fn escape_after_unmount_does_nothing() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
    let root = doc.create_root(doc.body(), screen(&dialog, false));
    assert!(doc.find_by_attribute("role", "alertdialog").is_some());
    assert_eq!(doc.body_overflow().as_deref(), Some("hidden"));

    doc.remove_root(root);

    assert_eq!(doc.key_listener_count(), 0);
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
    assert_eq!(doc.node_count(), 1);
    esc(&doc);
    assert!(dialog.is_open());
}

#[test]
fn overlay_closes_only_on_its_own_clicks() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
    doc.create_root(doc.body(), screen(&dialog, true));

    doc.click(doc.find_by_text("Are you sure?").unwrap());
    assert!(dialog.is_open());

    let overlay = doc.find_by_attribute("aria-hidden", "true").unwrap();
    doc.click(overlay);
    assert!(!dialog.is_open());
    assert!(doc.find_by_attribute("aria-hidden", "true").is_none());
}

#[test]
fn overlay_ignores_clicks_when_not_dismissable() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
    doc.create_root(doc.body(), screen(&dialog, false));
    doc.click(doc.find_by_attribute("aria-hidden", "true").unwrap());
    assert!(dialog.is_open());
}

#[test]
fn controlled_dialog_follows_the_caller() {
    let doc = document("auto");
    let requests = Rc::new(RefCell::new(Vec::new()));
    let r = requests.clone();
    let dialog = AlertDialog::new(
        &doc,
        DialogOptions::controlled(false).on_open_change(move |open| r.borrow_mut().push(open)),
    );
    doc.create_root(doc.body(), screen(&dialog, false));

    doc.click(doc.find_by_text("Open").unwrap());
    assert_eq!(*requests.borrow(), vec![true]);
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());

    dialog.set_open(Some(true));
    assert!(doc.find_by_attribute("role", "alertdialog").is_some());
    assert_eq!(doc.body_overflow().as_deref(), Some("hidden"));

    doc.click(doc.find_by_text("Cancel").unwrap());
    assert_eq!(*requests.borrow(), vec![true, false]);
    assert!(doc.find_by_attribute("role", "alertdialog").is_some());

    dialog.set_open(Some(false));
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
}

#[test]
fn stacked_dialogs_restore_overflow_after_the_last_close() {
    let doc = document("auto");
    let first = AlertDialog::new(&doc, DialogOptions::default());
    let second = AlertDialog::new(&doc, DialogOptions::default());
    doc.create_root(doc.body(), first.content().child("first"));
    doc.create_root(doc.body(), second.content().child("second"));

    first.request_open_change(true);
    second.request_open_change(true);
    assert_eq!(doc.scroll_lock_count(), 2);

    first.request_open_change(false);
    assert_eq!(doc.body_overflow().as_deref(), Some("hidden"));
    second.request_open_change(false);
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
}

#[test]
fn trigger_merges_onto_a_button() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::default());
    let outer = ElementRef::new();
    let inner = ElementRef::new();
    let trigger = dialog
        .trigger()
        .with_ref(outer.clone().into())
        .as_child(
            Button::new()
                .variant(ButtonVariant::Outline)
                .with_ref(inner.clone().into())
                .child("Delete"),
        );
    doc.create_root(doc.body(), trigger);

    let button = doc.find_by_text("Delete").unwrap();
    assert_eq!(doc.tag(button).as_deref(), Some("button"));
    assert_eq!(
        doc.attribute_str(button, "className").as_deref(),
        Some("button button-outline button-size-default")
    );
    assert_eq!(outer.get(), Some(button));
    assert_eq!(inner.get(), Some(button));

    doc.click(button);
    assert!(dialog.is_open());
}

#[test]
fn ambient_parts_need_a_provider() {
    assert_eq!(
        Trigger::new().unwrap_err(),
        DialogError::MissingContext { part: "Trigger" }
    );
    assert!(
        Content::new()
            .unwrap_err()
            .to_string()
            .contains("within an AlertDialog")
    );

    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::default());
    let parts = dialog.provide(|| -> Result<Vec<Rc<dyn Render>>, DialogError> {
        Ok(vec![part(Trigger::new()?.child("Open")), part(Content::new()?)])
    });
    doc.create_root(doc.body(), parts.unwrap());
    doc.click(doc.find_by_text("Open").unwrap());
    let content = doc.find_by_attribute("role", "alertdialog").unwrap();
    assert_eq!(
        doc.attribute_str(content, "id").as_deref(),
        Some(dialog.ids().content())
    );
}

#[test]
fn content_portals_into_a_custom_container() {
    let doc = document("auto");
    let layer = doc.mount(doc.body(), Element::new("div").prop("id", "layer").into())[0];
    let dialog = AlertDialog::new(&doc, DialogOptions::uncontrolled(true));
    doc.create_root(doc.body(), dialog.content().container(layer).child("Hi"));
    let content = doc.find_by_attribute("role", "alertdialog").unwrap();
    assert_eq!(doc.parent(content), Some(layer));
    assert_eq!(doc.children(layer).len(), 2);
}

/// A screen that builds every part on each render and can hide its content.
struct LiveScreen {
    dialog: AlertDialog,
    show_content: Rc<Cell<bool>>,
}

impl Render for LiveScreen {
    fn render(&self) -> Node {
        let d = &self.dialog;
        let mut parts: Vec<Rc<dyn Render>> = vec![part(d.trigger().child("Open"))];
        if self.show_content.get() {
            let footer = d
                .footer()
                .child(d.cancel().child("Cancel"))
                .child(d.action().child("Continue"));
            parts.push(part(
                d.content()
                    .child(d.title().child("Are you sure?"))
                    .child(footer),
            ));
        }
        parts.render()
    }
}

fn live_screen(doc: &Document) -> (AlertDialog, Rc<Cell<bool>>) {
    let dialog = AlertDialog::new(doc, DialogOptions::default());
    let show_content = Rc::new(Cell::new(true));
    doc.create_root(
        doc.body(),
        LiveScreen {
            dialog: dialog.clone(),
            show_content: show_content.clone(),
        },
    );
    (dialog, show_content)
}

#[test]
fn content_built_during_render_locks_and_listens() {
    let doc = document("auto");
    let (dialog, _) = live_screen(&doc);

    doc.click(doc.find_by_text("Open").unwrap());
    assert!(doc.find_by_attribute("role", "alertdialog").is_some());
    assert_eq!(doc.body_overflow().as_deref(), Some("hidden"));
    assert_eq!(doc.key_listener_count(), 1);

    esc(&doc);
    assert!(!dialog.is_open());
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
    assert_eq!(doc.key_listener_count(), 0);

    doc.click(doc.find_by_text("Open").unwrap());
    doc.click(doc.find_by_text("Continue").unwrap());
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
    assert_eq!(doc.key_listener_count(), 0);
    assert_eq!(doc.scroll_lock_count(), 0);
}

#[test]
fn hiding_open_content_releases_its_effects() {
    let doc = document("scroll");
    let (dialog, show_content) = live_screen(&doc);
    dialog.request_open_change(true);
    assert_eq!(doc.scroll_lock_count(), 1);

    show_content.set(false);
    doc.update();
    assert!(dialog.is_open());
    assert!(doc.find_by_attribute("role", "alertdialog").is_none());
    assert_eq!(doc.scroll_lock_count(), 0);
    assert_eq!(doc.key_listener_count(), 0);
    assert_eq!(doc.body_overflow().as_deref(), Some("scroll"));
    esc(&doc);
    assert!(dialog.is_open());

    show_content.set(true);
    doc.update();
    assert_eq!(doc.scroll_lock_count(), 1);
    assert_eq!(doc.key_listener_count(), 1);
    esc(&doc);
    assert!(!dialog.is_open());
    assert_eq!(doc.body_overflow().as_deref(), Some("scroll"));
}

#[test]
fn content_that_is_never_mounted_holds_nothing() {
    let doc = document("auto");
    let dialog = AlertDialog::new(&doc, DialogOptions::default());
    let _content = dialog.content().child("unused");
    dialog.request_open_change(true);
    assert_eq!(doc.key_listener_count(), 0);
    assert_eq!(doc.scroll_lock_count(), 0);
    assert_eq!(doc.body_overflow().as_deref(), Some("auto"));
    esc(&doc);
    assert!(dialog.is_open());
}
