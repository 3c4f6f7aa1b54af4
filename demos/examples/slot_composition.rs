// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot composition.
//!
//! Merges a slot's props and ref onto a caller-supplied anchor, then mounts it and clicks
//! it to show both click handlers running (child first) and both refs receiving the element.
//!
//! Run:
//! - `cargo run -p trellis_demos --example slot_composition`

use trellis_host::document::Document;
use trellis_slot::node::Element;
use trellis_slot::props::{PropBag, Style};
use trellis_slot::refs::{ElementRef, RefCleanup, RefTarget};
use trellis_slot::slot::Slot;
use trellis_slot::types::Outcome;

fn main() {
    env_logger::init();

    let slot_ref = ElementRef::new();
    let logging_ref = RefTarget::callback(|handle| {
        println!("  child ref attached to {handle:?}");
        Some(Box::new(|| println!("  child ref cleaned up")) as RefCleanup)
    });

    let slot_props = PropBag::new()
        .with("className", "menu-item")
        .with("style", Style::new().with("color", "gray").with("padding", "4px"))
        .on("onClick", |_| {
            println!("  slot onClick");
            Outcome::Continue
        });
    let child = Element::new("a")
        .prop("href", "/settings")
        .class_name("active")
        .style(Style::new().with("color", "black"))
        .on("onClick", |_| {
            println!("  child onClick");
            Outcome::Continue
        })
        .with_ref(Some(logging_ref))
        .child("Settings");

    let node = Slot::new()
        .props(slot_props)
        .with_ref(Some(slot_ref.clone().into()))
        .render(child);

    if let Some(el) = node.as_element() {
        println!("== Merged element ==");
        for (key, value) in el.props.iter() {
            println!("  {key} = {}", value.to_attribute().unwrap_or_else(|| "<handler>".into()));
        }
    }

    println!("== Mount ==");
    let doc = Document::new();
    let mounted = doc.mount(doc.body(), node);
    println!("  slot ref = {:?}", slot_ref.get());

    println!("== Click ==");
    if let Some(&anchor) = mounted.first() {
        doc.click(anchor);
        println!("== Unmount ==");
        doc.unmount(anchor);
    }
    println!("  slot ref = {:?}", slot_ref.get());
}
