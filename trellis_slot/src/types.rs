// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by every Trellis crate: element handles, events, phases, and outcomes.
//!
//! ## Overview
//!
//! These types describe the contract between headless components and the host that renders them.
//! They are produced by the host (handles, events) and consumed by handler props
//! (see [`Handler`](crate::props::Handler)).

/// Opaque reference to a rendered host element.
///
/// This is a small, copyable handle made of a slot index and a generation counter.
/// Hosts allocate them when an element is mounted; a handle whose slot was freed and
/// reused never aliases the new element because the generation must match.
///
/// Ref targets (see [`RefTarget`](crate::refs::RefTarget)) receive `Some(handle)` on mount
/// and `None` on teardown.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementHandle(u32, u32);

impl ElementHandle {
    /// Create a handle from a host slot index and generation.
    ///
    /// Only hosts should need this.
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Slot index inside the host's element storage.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of the slot at the time the element was created.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Phases of event propagation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Root-to-target traversal.
    Capture,
    /// Target element.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Every handler prop returns one of these. When two handlers are composed by
/// [`merge_props`](crate::props::merge_props), the override handler's outcome is the one reported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Outcome {
    /// Continue within the current phase.
    #[default]
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop and mark consumed; remaining phases are skipped.
    StopAndConsume,
}

bitflags::bitflags! {
    /// Modifier keys held while an event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Super key.
        const META    = 0b0000_1000;
    }
}

/// Logical key carried by keyboard events.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// The Enter key.
    Enter,
    /// The Tab key.
    Tab,
    /// The space bar.
    Space,
    /// Any other key producing a character.
    Character(char),
}

/// What happened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventKind {
    /// Primary pointer activation.
    Click,
    /// A key was pressed.
    KeyDown(Key),
}

impl EventKind {
    /// Name of the bubble-phase handler prop for this kind (for example `onClick`).
    pub fn handler_key(&self) -> &'static str {
        match self {
            Self::Click => "onClick",
            Self::KeyDown(_) => "onKeyDown",
        }
    }

    /// Name of the capture-phase handler prop for this kind (for example `onClickCapture`).
    pub fn capture_key(&self) -> &'static str {
        match self {
            Self::Click => "onClickCapture",
            Self::KeyDown(_) => "onKeyDownCapture",
        }
    }
}

/// An event delivered to handler props and document listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Propagation phase this delivery belongs to.
    pub phase: Phase,
    /// Element the event was dispatched to, if any.
    ///
    /// Document-level key events have no target.
    pub target: Option<ElementHandle>,
    /// Element whose handler is currently running.
    pub current_target: Option<ElementHandle>,
    /// Modifier keys held at dispatch time.
    pub modifiers: Modifiers,
}

impl Event {
    /// A click aimed at `target`, before any delivery.
    pub fn click(target: ElementHandle) -> Self {
        Self {
            kind: EventKind::Click,
            phase: Phase::Target,
            target: Some(target),
            current_target: Some(target),
            modifiers: Modifiers::empty(),
        }
    }

    /// A document-level key press.
    pub fn key_down(key: Key, modifiers: Modifiers) -> Self {
        Self {
            kind: EventKind::KeyDown(key),
            phase: Phase::Target,
            target: None,
            current_target: None,
            modifiers,
        }
    }

    /// Returns the pressed key for keyboard events.
    pub fn key(&self) -> Option<&Key> {
        match &self.kind {
            EventKind::KeyDown(key) => Some(key),
            EventKind::Click => None,
        }
    }

    /// True when the element running the handler is the element the event was aimed at.
    ///
    /// Clicks that bubble up from a descendant return false.
    pub fn is_self_target(&self) -> bool {
        self.target.is_some() && self.target == self.current_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_accessors_round_trip() {
        let h = ElementHandle::new(4, 2);
        assert_eq!(h.slot(), 4);
        assert_eq!(h.generation(), 2);
        assert_ne!(h, ElementHandle::new(4, 3));
    }

    #[test]
    fn self_target_requires_matching_current_target() {
        let target = ElementHandle::new(1, 1);
        let mut ev = Event::click(target);
        assert!(ev.is_self_target());
        ev.current_target = Some(ElementHandle::new(0, 1));
        assert!(!ev.is_self_target());
        let key = Event::key_down(Key::Escape, Modifiers::empty());
        assert!(!key.is_self_target());
    }

    #[test]
    fn handler_keys_follow_naming() {
        assert_eq!(EventKind::Click.handler_key(), "onClick");
        assert_eq!(EventKind::Click.capture_key(), "onClickCapture");
        assert_eq!(EventKind::KeyDown(Key::Enter).handler_key(), "onKeyDown");
    }
}
