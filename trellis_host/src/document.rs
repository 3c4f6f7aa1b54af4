// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document: element tree, roots, portals, and event entry points.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use trellis_slot::node::{ElementKind, Node, Render};
use trellis_slot::props::{Handler, PropBag, PropValue, STYLE, Style};
use trellis_slot::refs::RefTarget;
use trellis_slot::types::{ElementHandle, Event, EventKind, Key, Modifiers, Outcome, Phase};

use crate::keys::KeyListener;
use crate::router::{dispatch_sequence, propagation_path, run_dispatch};
use crate::scroll::{ScrollLock, ScrollState};
use crate::tree::{Content, Tree};

/// Re-render passes allowed per [`Document::update`] when rendering keeps requesting more.
const MAX_UPDATE_PASSES: usize = 8;

/// Startup configuration for a [`Document`].
#[derive(Clone, Debug)]
pub struct DocumentConfig {
    /// Whether the rendering surface is ready. Portals render nothing until it is.
    pub ready: bool,
    /// Initial `overflow` of the body's inline style, if any.
    pub body_overflow: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            ready: true,
            body_overflow: None,
        }
    }
}

/// Identifier of a registered root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RootId(u64);

struct RootEntry {
    id: RootId,
    container: ElementHandle,
    component: Rc<dyn Render>,
    mounted: Vec<ElementHandle>,
}

pub(crate) struct Inner {
    pub(crate) tree: RefCell<Tree>,
    pub(crate) body: ElementHandle,
    ready: Cell<bool>,
    pub(crate) key_listeners: RefCell<Vec<(u64, Handler)>>,
    next_listener: Cell<u64>,
    pub(crate) scroll: RefCell<ScrollState>,
    roots: RefCell<Vec<RootEntry>>,
    next_root: Cell<u64>,
    updating: Cell<bool>,
    pending: Cell<bool>,
}

/// A headless document.
///
/// Owns the element tree (rooted at a `body` element), the document-level key listeners, and
/// the body scroll lock. Clones share the same document.
///
/// ## Update model
///
/// Components are registered as roots with [`Document::create_root`]. After every dispatched
/// event, and whenever [`Document::update`] is called, each root is unmounted and rendered
/// again from scratch. There is no diffing.
#[derive(Clone)]
pub struct Document {
    inner: Rc<Inner>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("tree", &*self.inner.tree.borrow())
            .field("ready", &self.inner.ready.get())
            .field("roots", &self.inner.roots.borrow().len())
            .field("key_listeners", &self.inner.key_listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-owning reference to a [`Document`].
#[derive(Clone)]
pub struct WeakDocument(Weak<Inner>);

impl fmt::Debug for WeakDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakDocument")
            .field(&(self.0.strong_count() > 0))
            .finish()
    }
}

impl WeakDocument {
    /// The document, if it is still alive.
    pub fn upgrade(&self) -> Option<Document> {
        self.0.upgrade().map(|inner| Document { inner })
    }
}

impl Document {
    /// A ready document with an empty body.
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// A document built from `config`.
    pub fn with_config(config: DocumentConfig) -> Self {
        let mut tree = Tree::new();
        let mut props = PropBag::new();
        if let Some(overflow) = config.body_overflow {
            props.insert(STYLE, Style::new().with("overflow", overflow));
        }
        let body = tree.insert(
            None,
            Content::Element {
                tag: "body".into(),
                props,
            },
        );
        Self {
            inner: Rc::new(Inner {
                tree: RefCell::new(tree),
                body,
                ready: Cell::new(config.ready),
                key_listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                scroll: RefCell::new(ScrollState::default()),
                roots: RefCell::new(Vec::new()),
                next_root: Cell::new(0),
                updating: Cell::new(false),
                pending: Cell::new(false),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Rc<Inner>) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &Rc<Inner> {
        &self.inner
    }

    /// A non-owning reference to this document.
    pub fn downgrade(&self) -> WeakDocument {
        WeakDocument(Rc::downgrade(&self.inner))
    }

    /// True when both values refer to the same document.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The body element.
    pub fn body(&self) -> ElementHandle {
        self.inner.body
    }

    /// Whether the rendering surface is ready for portals.
    pub fn is_ready(&self) -> bool {
        self.inner.ready.get()
    }

    /// Mark the rendering surface ready (or not). Takes effect on the next update.
    pub fn set_ready(&self, ready: bool) {
        self.inner.ready.set(ready);
    }

    // --- body style ---

    /// The body's inline style.
    pub fn body_style(&self) -> Style {
        self.inner
            .tree
            .borrow()
            .prop(self.inner.body, STYLE)
            .and_then(PropValue::as_style)
            .cloned()
            .unwrap_or_default()
    }

    /// The body's inline `overflow`, if set.
    pub fn body_overflow(&self) -> Option<String> {
        self.body_style().get("overflow").map(str::to_owned)
    }

    /// Set one property of the body's inline style.
    pub fn set_body_style(&self, property: &str, value: impl Into<String>) {
        let mut style = self.body_style();
        style.insert(property, value);
        self.write_body_style(style);
    }

    /// Remove one property of the body's inline style.
    pub fn remove_body_style(&self, property: &str) {
        let mut style = self.body_style();
        style.remove(property);
        self.write_body_style(style);
    }

    fn write_body_style(&self, style: Style) {
        let mut tree = self.inner.tree.borrow_mut();
        if let Some(props) = tree.get_mut(self.inner.body).and_then(|n| n.props_mut()) {
            if style.is_empty() {
                props.remove(STYLE);
            } else {
                props.insert(STYLE, style);
            }
        }
    }

    /// Lock body scrolling until the returned guard is dropped.
    ///
    /// Locks are counted: the first one saves the body's `overflow` and sets it to `hidden`,
    /// the last release restores the saved value.
    pub fn lock_scroll(&self) -> ScrollLock {
        ScrollLock::acquire(self)
    }

    /// Number of live scroll locks.
    pub fn scroll_lock_count(&self) -> usize {
        self.inner.scroll.borrow().holders
    }

    // --- key listeners ---

    /// Register a document-level key listener, removed when the guard is dropped.
    pub fn add_key_listener(&self, f: impl Fn(&Event) -> Outcome + 'static) -> KeyListener {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .key_listeners
            .borrow_mut()
            .push((id, Handler::new(f)));
        log::trace!("key listener {id} added");
        KeyListener::new(id, Rc::downgrade(&self.inner))
    }

    /// Number of registered key listeners.
    pub fn key_listener_count(&self) -> usize {
        self.inner.key_listeners.borrow().len()
    }

    // --- roots and mounting ---

    /// Register `component` as a root under `container` and render it immediately.
    pub fn create_root(&self, container: ElementHandle, component: impl Render + 'static) -> RootId {
        let id = RootId(self.inner.next_root.get());
        self.inner.next_root.set(id.0 + 1);
        self.inner.roots.borrow_mut().push(RootEntry {
            id,
            container,
            component: Rc::new(component),
            mounted: Vec::new(),
        });
        self.render_root(id);
        id
    }

    /// Unmount and forget a root.
    pub fn remove_root(&self, id: RootId) {
        let removed = {
            let mut roots = self.inner.roots.borrow_mut();
            let pos = roots.iter().position(|r| r.id == id);
            pos.map(|p| roots.remove(p))
        };
        if let Some(root) = removed {
            for h in root.mounted {
                self.unmount(h);
            }
        }
    }

    /// Re-render every root.
    ///
    /// Calls made while an update is already running, or while an event is being delivered,
    /// are folded into another pass.
    pub fn update(&self) {
        if self.inner.updating.replace(true) {
            self.inner.pending.set(true);
            return;
        }
        let mut passes = 0;
        loop {
            self.inner.pending.set(false);
            let ids: Vec<RootId> = self.inner.roots.borrow().iter().map(|r| r.id).collect();
            for id in ids {
                self.render_root(id);
            }
            passes += 1;
            if !self.inner.pending.get() {
                break;
            }
            if passes >= MAX_UPDATE_PASSES {
                log::warn!("update still pending after {passes} passes; giving up");
                break;
            }
        }
        self.inner.updating.set(false);
    }

    fn render_root(&self, id: RootId) {
        let found = {
            let mut roots = self.inner.roots.borrow_mut();
            roots.iter_mut().find(|r| r.id == id).map(|r| {
                (
                    r.container,
                    r.component.clone(),
                    std::mem::take(&mut r.mounted),
                )
            })
        };
        let Some((container, component, previous)) = found else {
            return;
        };
        for h in previous {
            self.unmount(h);
        }
        let node = component.render();
        let mounted = self.mount(container, node);
        let mut roots = self.inner.roots.borrow_mut();
        match roots.iter_mut().find(|r| r.id == id) {
            Some(root) => root.mounted = mounted,
            None => {
                drop(roots);
                for h in mounted {
                    self.unmount(h);
                }
            }
        }
    }

    /// Mount `node` as the last children of `parent`, returning the top-level handles.
    ///
    /// Portals mounted at the top level contribute their children's handles; portals nested
    /// inside an element are removed together with that element.
    pub fn mount(&self, parent: ElementHandle, node: Node) -> Vec<ElementHandle> {
        let mut top = Vec::new();
        let mut attach = Vec::new();
        {
            let mut tree = self.inner.tree.borrow_mut();
            if !tree.is_alive(parent) {
                log::debug!("mount into dead parent {parent:?} ignored");
                return top;
            }
            self.mount_into(&mut tree, parent, None, node, &mut top, &mut attach);
        }
        // Refs run user code, so they are applied with the tree released.
        for (handle, target) in attach {
            log::trace!("attaching ref to {handle:?}");
            if let Some(cleanup) = target.apply(Some(handle)) {
                let orphan = self.inner.tree.borrow_mut().set_ref_cleanup(handle, cleanup);
                if let Some(cleanup) = orphan {
                    cleanup();
                }
            }
        }
        top
    }

    fn mount_into(
        &self,
        tree: &mut Tree,
        parent: ElementHandle,
        owner: Option<ElementHandle>,
        node: Node,
        out: &mut Vec<ElementHandle>,
        attach: &mut Vec<(ElementHandle, RefTarget)>,
    ) {
        match node {
            Node::Empty => {}
            Node::Text(text) => out.push(tree.insert(Some(parent), Content::Text(text))),
            Node::Element(el) => match el.kind {
                ElementKind::Fragment => {
                    for child in el.children {
                        self.mount_into(tree, parent, owner, child, out, attach);
                    }
                }
                ElementKind::Host(tag) => {
                    let handle = tree.insert(
                        Some(parent),
                        Content::Element {
                            tag,
                            props: el.props,
                        },
                    );
                    let mut nested = Vec::new();
                    for child in el.children {
                        self.mount_into(tree, handle, Some(handle), child, &mut nested, attach);
                    }
                    if let Some(target) = el.node_ref {
                        tree.set_ref(handle, target.clone());
                        attach.push((handle, target));
                    }
                    log::trace!("mounted element {handle:?}");
                    out.push(handle);
                }
            },
            Node::Portal(portal) => {
                if !self.is_ready() {
                    log::debug!("rendering surface not ready; portal skipped");
                    return;
                }
                let container = portal
                    .container
                    .filter(|c| tree.is_alive(*c))
                    .unwrap_or(self.inner.body);
                let mut portaled = Vec::new();
                for child in portal.children {
                    self.mount_into(tree, container, owner, child, &mut portaled, attach);
                }
                match owner.and_then(|o| tree.get_mut(o)) {
                    Some(owner) => owner.portals.extend(portaled),
                    None => out.extend(portaled),
                }
            }
        }
    }

    /// Remove `handle` and its subtree, releasing refs children first.
    pub fn unmount(&self, handle: ElementHandle) {
        if handle == self.inner.body {
            return;
        }
        let detached = self.inner.tree.borrow_mut().remove(handle);
        log::trace!("unmounted {handle:?} ({} nodes)", detached.len());
        for d in detached {
            match (d.cleanup, d.node_ref) {
                (Some(cleanup), _) => cleanup(),
                (None, Some(target)) => {
                    let _ = target.apply(None);
                }
                (None, None) => {}
            }
        }
    }

    // --- events ---

    /// Click `target`, then update. Returns true if a handler consumed the click.
    ///
    /// Clicks on dead or `disabled` elements do nothing.
    pub fn click(&self, target: ElementHandle) -> bool {
        self.dispatch(target, EventKind::Click, Modifiers::empty())
    }

    /// Route an event to `target` through capture, target, and bubble, then update.
    pub fn dispatch(&self, target: ElementHandle, kind: EventKind, modifiers: Modifiers) -> bool {
        let seq = {
            let tree = self.inner.tree.borrow();
            if !tree.is_alive(target) {
                log::debug!("{kind:?} on dead element {target:?} ignored");
                return false;
            }
            if tree.is_disabled(target) {
                log::debug!("{kind:?} on disabled element {target:?} ignored");
                return false;
            }
            let path = propagation_path(target, &*tree);
            dispatch_sequence(&path, |phase, node| {
                let key = match phase {
                    Phase::Capture => kind.capture_key(),
                    Phase::Target | Phase::Bubble => kind.handler_key(),
                };
                tree.handler(*node, key)
            })
        };
        self.batched(|| {
            run_dispatch(&seq, |d| match &d.meta {
                Some(handler) => handler.call(&Event {
                    kind: kind.clone(),
                    phase: d.phase,
                    target: Some(target),
                    current_target: Some(d.node),
                    modifiers,
                }),
                None => Outcome::Continue,
            })
        })
    }

    /// Deliver a key press to the document-level listeners in registration order, then update.
    ///
    /// A listener returning [`Outcome::Stop`] or [`Outcome::StopAndConsume`] ends delivery;
    /// only the latter reports the event consumed.
    pub fn key_down(&self, key: Key, modifiers: Modifiers) -> bool {
        let listeners: Vec<Handler> = self
            .inner
            .key_listeners
            .borrow()
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        let event = Event::key_down(key, modifiers);
        self.batched(|| {
            for listener in listeners {
                match listener.call(&event) {
                    Outcome::Continue => {}
                    Outcome::Stop => return false,
                    Outcome::StopAndConsume => return true,
                }
            }
            false
        })
    }

    /// Run event delivery with updates deferred, then update once.
    fn batched<R>(&self, deliver: impl FnOnce() -> R) -> R {
        let outer = self.inner.updating.replace(true);
        let out = deliver();
        self.inner.updating.set(outer);
        self.update();
        out
    }

    // --- queries ---

    /// True if `handle` refers to a mounted node.
    pub fn is_alive(&self, handle: ElementHandle) -> bool {
        self.inner.tree.borrow().is_alive(handle)
    }

    /// Number of mounted nodes, body and text nodes included.
    pub fn node_count(&self) -> usize {
        self.inner.tree.borrow().len()
    }

    /// Tag of an element node.
    pub fn tag(&self, handle: ElementHandle) -> Option<String> {
        match self.inner.tree.borrow().get(handle).map(|n| &n.content) {
            Some(Content::Element { tag, .. }) => Some(tag.to_string()),
            _ => None,
        }
    }

    /// A prop of an element node.
    pub fn attribute(&self, handle: ElementHandle, name: &str) -> Option<PropValue> {
        self.inner.tree.borrow().prop(handle, name).cloned()
    }

    /// A prop of an element node in attribute form (see [`PropValue::to_attribute`]).
    pub fn attribute_str(&self, handle: ElementHandle, name: &str) -> Option<String> {
        self.attribute(handle, name).and_then(|v| v.to_attribute())
    }

    /// Parent of a node.
    pub fn parent(&self, handle: ElementHandle) -> Option<ElementHandle> {
        self.inner.tree.borrow().get(handle).and_then(|n| n.parent)
    }

    /// Children of a node.
    pub fn children(&self, handle: ElementHandle) -> Vec<ElementHandle> {
        self.inner
            .tree
            .borrow()
            .get(handle)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// All text below `handle`, in document order.
    pub fn text_content(&self, handle: ElementHandle) -> String {
        self.inner.tree.borrow().text_content(handle)
    }

    /// First element, in document order, whose prop `name` serializes to `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<ElementHandle> {
        self.find_all_by_attribute(name, value).into_iter().next()
    }

    /// Every element, in document order, whose prop `name` serializes to `value`.
    pub fn find_all_by_attribute(&self, name: &str, value: &str) -> Vec<ElementHandle> {
        let tree = self.inner.tree.borrow();
        tree.descendants(self.inner.body)
            .into_iter()
            .filter(|h| {
                tree.prop(*h, name)
                    .and_then(PropValue::to_attribute)
                    .is_some_and(|v| v == value)
            })
            .collect()
    }

    /// First element, in document order, with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<ElementHandle> {
        let tree = self.inner.tree.borrow();
        tree.descendants(self.inner.body).into_iter().find(|h| {
            matches!(tree.get(*h).map(|n| &n.content), Some(Content::Element { tag: t, .. }) if t == tag)
        })
    }

    /// First element, in document order, whose direct text children read `text`.
    pub fn find_by_text(&self, text: &str) -> Option<ElementHandle> {
        let tree = self.inner.tree.borrow();
        tree.descendants(self.inner.body)
            .into_iter()
            .find(|h| tree.own_text(*h) == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_slot::node::{Element, Portal};
    use trellis_slot::refs::{ElementRef, RefCleanup};

    fn button(label: &'static str) -> Element {
        Element::new("button").child(label)
    }

    #[test]
    fn mount_and_query() {
        let doc = Document::new();
        let top = doc.mount(
            doc.body(),
            Element::new("div")
                .prop("id", "app")
                .child(button("Open").prop("aria-expanded", false))
                .into(),
        );
        assert_eq!(top.len(), 1);
        let app = doc.find_by_attribute("id", "app").unwrap();
        assert_eq!(app, top[0]);
        let open = doc.find_by_text("Open").unwrap();
        assert_eq!(doc.tag(open).as_deref(), Some("button"));
        assert_eq!(doc.attribute_str(open, "aria-expanded").as_deref(), Some("false"));
        assert_eq!(doc.parent(open), Some(app));
        assert_eq!(doc.text_content(app), "Open");
    }

    #[test]
    fn fragments_mount_children_in_place() {
        let doc = Document::new();
        let top = doc.mount(
            doc.body(),
            Element::fragment().child(button("a")).child(button("b")).into(),
        );
        assert_eq!(top.len(), 2);
        assert_eq!(doc.children(doc.body()), top);
    }

    #[test]
    fn refs_attach_on_mount_and_release_on_unmount() {
        let doc = Document::new();
        let cell = ElementRef::new();
        let top = doc.mount(doc.body(), button("x").with_ref(Some(cell.clone().into())).into());
        assert_eq!(cell.get(), Some(top[0]));
        doc.unmount(top[0]);
        assert_eq!(cell.get(), None);
        assert!(!doc.is_alive(top[0]));
    }

    #[test]
    fn ref_cleanup_replaces_null_call() {
        let doc = Document::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let target = {
            let calls = calls.clone();
            RefTarget::callback(move |v| {
                calls.borrow_mut().push(format!("ref {:?}", v.is_some()));
                let calls = calls.clone();
                Some(Box::new(move || calls.borrow_mut().push("cleanup".to_owned())) as RefCleanup)
            })
        };
        let top = doc.mount(doc.body(), button("x").with_ref(Some(target)).into());
        doc.unmount(top[0]);
        assert_eq!(*calls.borrow(), vec!["ref true".to_owned(), "cleanup".to_owned()]);
    }

    #[test]
    fn click_bubbles_with_target_and_current_target() {
        let doc = Document::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = |name: &'static str| {
            let seen = seen.clone();
            move |e: &Event| {
                seen.borrow_mut().push((name, e.phase, e.is_self_target()));
                Outcome::Continue
            }
        };
        doc.mount(
            doc.body(),
            Element::new("div")
                .on("onClickCapture", record("outer-capture"))
                .on("onClick", record("outer"))
                .child(button("inner").on("onClick", record("inner")))
                .into(),
        );
        let inner = doc.find_by_text("inner").unwrap();
        assert!(!doc.click(inner));
        assert_eq!(
            *seen.borrow(),
            vec![
                ("outer-capture", Phase::Capture, false),
                ("inner", Phase::Target, true),
                ("outer", Phase::Bubble, false),
            ]
        );
    }

    #[test]
    fn stop_and_consume_prevents_bubbling() {
        let doc = Document::new();
        let outer_runs = Rc::new(Cell::new(0));
        let runs = outer_runs.clone();
        doc.mount(
            doc.body(),
            Element::new("div")
                .on("onClick", move |_| {
                    runs.set(runs.get() + 1);
                    Outcome::Continue
                })
                .child(button("inner").on("onClick", |_| Outcome::StopAndConsume))
                .into(),
        );
        assert!(doc.click(doc.find_by_text("inner").unwrap()));
        assert_eq!(outer_runs.get(), 0);
    }

    #[test]
    fn disabled_clicks_are_ignored() {
        let doc = Document::new();
        let runs = Rc::new(Cell::new(0));
        let r = runs.clone();
        doc.mount(
            doc.body(),
            button("off")
                .prop("disabled", true)
                .on("onClick", move |_| {
                    r.set(r.get() + 1);
                    Outcome::Continue
                })
                .into(),
        );
        assert!(!doc.click(doc.find_by_text("off").unwrap()));
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn roots_rerender_after_events() {
        struct Counter(Rc<Cell<u32>>);
        impl Render for Counter {
            fn render(&self) -> Node {
                let count = self.0.clone();
                Element::new("button")
                    .prop("data-count", i32::try_from(self.0.get()).unwrap_or(i32::MAX))
                    .on("onClick", move |_| {
                        count.set(count.get() + 1);
                        Outcome::Continue
                    })
                    .child("inc")
                    .into()
            }
        }

        let doc = Document::new();
        let count = Rc::new(Cell::new(0));
        doc.create_root(doc.body(), Counter(count.clone()));
        let nodes = doc.node_count();
        doc.click(doc.find_by_text("inc").unwrap());
        doc.click(doc.find_by_text("inc").unwrap());
        assert_eq!(count.get(), 2);
        let btn = doc.find_by_text("inc").unwrap();
        assert_eq!(doc.attribute_str(btn, "data-count").as_deref(), Some("2"));
        assert_eq!(doc.node_count(), nodes);
    }

    #[test]
    fn portals_mount_under_body_and_unmount_with_root() {
        struct Modal;
        impl Render for Modal {
            fn render(&self) -> Node {
                Element::new("div")
                    .prop("id", "app")
                    .child(Portal {
                        container: None,
                        children: vec![Element::new("section").prop("id", "modal").into()],
                    })
                    .into()
            }
        }

        let doc = Document::new();
        let root = doc.create_root(doc.body(), Modal);
        let modal = doc.find_by_attribute("id", "modal").unwrap();
        assert_eq!(doc.parent(modal), Some(doc.body()));
        doc.remove_root(root);
        assert!(!doc.is_alive(modal));
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn portals_wait_for_ready_surface() {
        let doc = Document::with_config(DocumentConfig {
            ready: false,
            body_overflow: None,
        });
        let portal = || -> Node {
            Portal {
                container: None,
                children: vec![Element::new("section").into()],
            }
            .into()
        };
        assert!(doc.mount(doc.body(), portal()).is_empty());
        doc.set_ready(true);
        assert_eq!(doc.mount(doc.body(), portal()).len(), 1);
    }

    #[test]
    fn key_listeners_run_in_order_and_detach_on_drop() {
        let doc = Document::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let seen = seen.clone();
            doc.add_key_listener(move |e| {
                seen.borrow_mut().push(("a", e.key().cloned()));
                Outcome::Continue
            })
        };
        let b = {
            let seen = seen.clone();
            doc.add_key_listener(move |e| {
                seen.borrow_mut().push(("b", e.key().cloned()));
                Outcome::Continue
            })
        };
        assert_eq!(doc.key_listener_count(), 2);
        doc.key_down(Key::Escape, Modifiers::empty());
        drop(a);
        doc.key_down(Key::Enter, Modifiers::SHIFT);
        drop(b);
        assert_eq!(doc.key_listener_count(), 0);
        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", Some(Key::Escape)),
                ("b", Some(Key::Escape)),
                ("b", Some(Key::Enter)),
            ]
        );
    }

    #[test]
    fn body_style_round_trip() {
        let doc = Document::with_config(DocumentConfig {
            ready: true,
            body_overflow: Some("scroll".into()),
        });
        assert_eq!(doc.body_overflow().as_deref(), Some("scroll"));
        doc.set_body_style("color", "red");
        doc.remove_body_style("overflow");
        assert_eq!(doc.body_overflow(), None);
        assert_eq!(doc.body_style().get("color"), Some("red"));
    }
}
