// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open state, identifiers, and transition hooks for one dialog.
//!
//! ## Controlled and uncontrolled
//!
//! A store is *controlled* while the caller supplies an explicit open value
//! ([`DialogStore::set_controlled`]). It then reports that value verbatim and turns every
//! [`request_open_change`](DialogStore::request_open_change) into a call to the
//! `on_open_change` callback, leaving it to the caller to feed the new value back.
//!
//! Otherwise the store is *uncontrolled*: requests update its own flag and the callback, if
//! any, is only notified.
//!
//! ## Transition hooks
//!
//! [`TransitionHook`]s registered with the store are entered on every effective
//! `Closed → Open` transition and exited on `Open → Closed`. Observers registered with
//! [`DialogStore::subscribe`] hear about every effective transition after the hooks ran.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Callback told about requested open-state changes.
pub type OpenChangeCallback = Rc<dyn Fn(bool)>;

/// Construction options for a dialog.
#[derive(Clone, Default)]
pub struct DialogOptions {
    /// Initial open state when uncontrolled.
    pub default_open: bool,
    /// Caller-owned open state. `Some` makes the dialog controlled.
    pub open: Option<bool>,
    /// Called with the requested value on every effective open-change request.
    pub on_open_change: Option<OpenChangeCallback>,
}

impl fmt::Debug for DialogOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogOptions")
            .field("default_open", &self.default_open)
            .field("open", &self.open)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

impl DialogOptions {
    /// Uncontrolled, starting open or closed.
    pub fn uncontrolled(default_open: bool) -> Self {
        Self {
            default_open,
            ..Self::default()
        }
    }

    /// Controlled, starting at `open`.
    pub fn controlled(open: bool) -> Self {
        Self {
            open: Some(open),
            ..Self::default()
        }
    }

    /// Set the open-change callback.
    pub fn on_open_change(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_open_change = Some(Rc::new(f));
        self
    }
}

static NEXT_DIALOG: AtomicU32 = AtomicU32::new(1);

/// The stable element ids shared by a dialog's parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentitySet {
    trigger: String,
    content: String,
    title: String,
    description: String,
}

impl IdentitySet {
    /// A fresh set of ids, unique within the process.
    pub fn generate() -> Self {
        let n = NEXT_DIALOG.fetch_add(1, Ordering::Relaxed);
        Self {
            trigger: format!("dialog-{n}-trigger"),
            content: format!("dialog-{n}-content"),
            title: format!("dialog-{n}-title"),
            description: format!("dialog-{n}-description"),
        }
    }

    /// Id of the trigger element.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Id of the content element.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Id of the title element.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Id of the description element.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Work bound to the dialog being open.
///
/// `enter` runs when the dialog opens (or at registration if already open), `exit` when it
/// closes or the hook is unregistered while entered. The store never enters or exits twice
/// in a row.
pub trait TransitionHook {
    /// The dialog is now open.
    fn enter(&mut self);
    /// The dialog is no longer open.
    fn exit(&mut self);
}

/// Registration handle for a [`TransitionHook`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HookId(u64);

/// Registration handle for an observer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u64);

struct HookSlot {
    hook: Box<dyn TransitionHook>,
    entered: bool,
}

impl HookSlot {
    fn settle(&mut self, open: bool) {
        if open && !self.entered {
            self.entered = true;
            self.hook.enter();
        } else if !open && self.entered {
            self.entered = false;
            self.hook.exit();
        }
    }
}

/// Per-dialog state.
pub struct DialogStore {
    internal: Cell<bool>,
    controlled: Cell<Option<bool>>,
    on_open_change: Option<OpenChangeCallback>,
    ids: IdentitySet,
    /// Open value the hooks and observers were last settled to.
    settled: Cell<bool>,
    next_id: Cell<u64>,
    hooks: RefCell<Vec<(HookId, Rc<RefCell<HookSlot>>)>>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn Fn(bool)>)>>,
}

impl fmt::Debug for DialogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogStore")
            .field("open", &self.is_open())
            .field("controlled", &self.controlled.get())
            .field("ids", &self.ids)
            .field("hooks", &self.hooks.borrow().len())
            .field("observers", &self.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl DialogStore {
    /// A store configured from `options`, with freshly generated ids.
    pub fn new(options: DialogOptions) -> Self {
        let open = options.open.unwrap_or(options.default_open);
        Self {
            internal: Cell::new(options.default_open),
            controlled: Cell::new(options.open),
            on_open_change: options.on_open_change,
            ids: IdentitySet::generate(),
            settled: Cell::new(open),
            next_id: Cell::new(0),
            hooks: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Current open state: the controlled value if any, else the internal flag.
    pub fn is_open(&self) -> bool {
        self.controlled.get().unwrap_or(self.internal.get())
    }

    /// True while the caller owns the open state.
    pub fn is_controlled(&self) -> bool {
        self.controlled.get().is_some()
    }

    /// The dialog's element ids.
    pub fn ids(&self) -> &IdentitySet {
        &self.ids
    }

    /// Ask for the dialog to open or close.
    ///
    /// Requests for the current value do nothing.
    pub fn request_open_change(&self, next: bool) {
        if next == self.is_open() {
            log::trace!("dialog {} already {}", self.ids.content, state_name(next));
            return;
        }
        log::debug!("dialog {} requested {}", self.ids.content, state_name(next));
        self.internal.set(next);
        if self.is_controlled() {
            match &self.on_open_change {
                Some(cb) => cb(next),
                None => log::debug!("controlled dialog has no on_open_change; request dropped"),
            }
            return;
        }
        self.settle();
        if let Some(cb) = &self.on_open_change {
            cb(next);
        }
    }

    /// Feed the caller-owned open state, or `None` to hand control back to the store.
    pub fn set_controlled(&self, open: Option<bool>) {
        self.controlled.set(open);
        self.settle();
    }

    /// Register a hook. It is entered right away if the dialog is open.
    pub fn register_hook(&self, hook: impl TransitionHook + 'static) -> HookId {
        let id = HookId(self.next_id());
        let slot = Rc::new(RefCell::new(HookSlot {
            hook: Box::new(hook),
            entered: false,
        }));
        self.hooks.borrow_mut().push((id, slot.clone()));
        slot.borrow_mut().settle(self.settled.get());
        id
    }

    /// Unregister a hook, exiting it first if it is entered.
    pub fn unregister_hook(&self, id: HookId) {
        let removed = {
            let mut hooks = self.hooks.borrow_mut();
            let pos = hooks.iter().position(|(h, _)| *h == id);
            pos.map(|p| hooks.remove(p).1)
        };
        if let Some(slot) = removed {
            slot.borrow_mut().settle(false);
        }
    }

    /// Number of registered hooks.
    pub fn hook_count(&self) -> usize {
        self.hooks.borrow().len()
    }

    /// Observe effective open-state transitions.
    pub fn subscribe(&self, f: impl Fn(bool) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id());
        self.observers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Stop observing.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(o, _)| *o != id);
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Bring hooks and observers in line with the current open state.
    fn settle(&self) {
        let open = self.is_open();
        if self.settled.replace(open) == open {
            return;
        }
        let hooks: Vec<_> = self.hooks.borrow().iter().map(|(_, s)| s.clone()).collect();
        for slot in hooks {
            slot.borrow_mut().settle(open);
        }
        let observers: Vec<_> = self.observers.borrow().iter().map(|(_, f)| f.clone()).collect();
        for f in observers {
            f(open);
        }
    }
}

pub(crate) fn state_name(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}
