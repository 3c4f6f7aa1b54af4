// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alert dialog basics.
//!
//! Builds a delete-confirmation dialog, opens it through its trigger, dismisses it with
//! Escape, opens it again and confirms. Prints the document state after each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p trellis_demos --example alert_dialog_basics`

use std::rc::Rc;

use trellis_button::{Button, ButtonVariant};
use trellis_dialog::{AlertDialog, DialogOptions};
use trellis_host::document::{Document, DocumentConfig};
use trellis_slot::node::Render;
use trellis_slot::types::{Key, Modifiers};

fn report(doc: &Document, dialog: &AlertDialog, step: &str) {
    let content = doc.find_by_attribute("role", "alertdialog");
    println!("== {step} ==");
    println!("  open={}  content mounted={}", dialog.is_open(), content.is_some());
    println!(
        "  body overflow={:?}  key listeners={}  nodes={}",
        doc.body_overflow(),
        doc.key_listener_count(),
        doc.node_count()
    );
    if let Some(content) = content {
        println!(
            "  aria-labelledby={:?}  aria-describedby={:?}",
            doc.attribute_str(content, "aria-labelledby"),
            doc.attribute_str(content, "aria-describedby"),
        );
    }
}

fn main() {
    env_logger::init();

    let doc = Document::with_config(DocumentConfig {
        ready: true,
        body_overflow: Some("auto".into()),
    });
    let dialog = AlertDialog::new(
        &doc,
        DialogOptions::default().on_open_change(|open| log::info!("open change requested: {open}")),
    );

    let footer = dialog
        .footer()
        .child(dialog.cancel().child("Keep file"))
        .child(
            dialog
                .action()
                .on_confirm(|| println!("  -> file deleted"))
                .child("Delete"),
        );
    let content = dialog
        .content()
        .dismissable(true)
        .child(dialog.title().child("Delete report.pdf?"))
        .child(dialog.description().child("The file will be gone for good."))
        .child(footer);
    let trigger = dialog
        .trigger()
        .as_child(Button::new().variant(ButtonVariant::Destructive).child("Delete file"));

    let screen: Vec<Rc<dyn Render>> = vec![Rc::new(trigger), Rc::new(content)];
    doc.create_root(doc.body(), screen);
    report(&doc, &dialog, "initial");

    let Some(trigger) = doc.find_by_text("Delete file") else {
        return;
    };
    doc.click(trigger);
    report(&doc, &dialog, "after trigger");

    doc.key_down(Key::Escape, Modifiers::empty());
    report(&doc, &dialog, "after Escape");

    if let Some(trigger) = doc.find_by_text("Delete file") {
        doc.click(trigger);
    }
    if let Some(action) = doc.find_by_text("Delete") {
        doc.click(action);
    }
    report(&doc, &dialog, "after action");
}
