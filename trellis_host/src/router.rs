// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event routing: capture → target → bubble.
//!
//! ## Overview
//!
//! Given a target element, [`propagation_path`] reconstructs its root→target path through a
//! [`ParentLookup`], [`dispatch_sequence`] turns that path into an ordered list of
//! [`Dispatch`] steps, and [`run_dispatch`] walks the steps while honoring each handler's
//! [`Outcome`].
//!
//! ## Sequence shape
//!
//! - Capture: root → target, target included.
//! - Target: the target, once.
//! - Bubble: target's parent → root.
//!
//! ## Outcomes
//!
//! - [`Outcome::Continue`]: keep going.
//! - [`Outcome::Stop`]: skip the remaining steps of the current phase.
//! - [`Outcome::StopAndConsume`]: abort every remaining phase and report the event consumed.
//!
//! ```
//! use trellis_host::router::{ParentLookup, dispatch_sequence, propagation_path, run_dispatch};
//! use trellis_slot::types::{Outcome, Phase};
//!
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let path = propagation_path(3, &Parents);
//! assert_eq!(path, vec![1, 2, 3]);
//! let seq = dispatch_sequence(&path, |_, _| ());
//! let mut seen = Vec::new();
//! let consumed = run_dispatch(&seq, |d| {
//!     seen.push((d.phase, d.node));
//!     if d.phase == Phase::Target { Outcome::StopAndConsume } else { Outcome::Continue }
//! });
//! assert!(consumed);
//! assert_eq!(seen.last(), Some(&(Phase::Target, 3)));
//! ```

use trellis_slot::types::{Outcome, Phase};

/// Look up the parent of a node to reconstruct a root→target path.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A single dispatch step.
#[derive(Clone, Debug)]
pub struct Dispatch<K, M = ()> {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Node associated with this step.
    pub node: K,
    /// Payload attached when the sequence was built (for example the handler to run).
    pub meta: M,
}

/// Reconstruct the root→target path for `target`.
///
/// Callers ensure the ancestry is acyclic.
pub fn propagation_path<K: Copy>(target: K, parents: &impl ParentLookup<K>) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = target;
    loop {
        out.push(cur);
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => break,
        }
    }
    out.reverse();
    out
}

/// Build the capture → target → bubble sequence for a root→target `path`.
///
/// `meta` is called once per step to attach a payload.
pub fn dispatch_sequence<K: Copy, M>(
    path: &[K],
    mut meta: impl FnMut(Phase, &K) -> M,
) -> Vec<Dispatch<K, M>> {
    let Some((&target, ancestors)) = path.split_last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(path.len() * 2);
    for n in path {
        out.push(Dispatch {
            phase: Phase::Capture,
            meta: meta(Phase::Capture, n),
            node: *n,
        });
    }
    out.push(Dispatch {
        phase: Phase::Target,
        meta: meta(Phase::Target, &target),
        node: target,
    });
    for n in ancestors.iter().rev() {
        out.push(Dispatch {
            phase: Phase::Bubble,
            meta: meta(Phase::Bubble, n),
            node: *n,
        });
    }
    out
}

/// Walk `seq`, calling `deliver` for each step and honoring the returned [`Outcome`].
///
/// Returns true if a step consumed the event.
pub fn run_dispatch<K, M>(
    seq: &[Dispatch<K, M>],
    mut deliver: impl FnMut(&Dispatch<K, M>) -> Outcome,
) -> bool {
    let mut i = 0;
    while i < seq.len() {
        let phase = seq[i].phase;
        match deliver(&seq[i]) {
            Outcome::Continue => {}
            Outcome::Stop => {
                // Skip remaining entries in this phase.
                while i + 1 < seq.len() && seq[i + 1].phase == phase {
                    i += 1;
                }
            }
            Outcome::StopAndConsume => return true,
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }
    }

    fn phases(seq: &[Dispatch<u32>]) -> Vec<(Phase, u32)> {
        seq.iter().map(|d| (d.phase, d.node)).collect()
    }

    #[test]
    fn path_is_reconstructed_root_first() {
        assert_eq!(propagation_path(3, &Parents), vec![1, 2, 3]);
        assert_eq!(propagation_path(9, &Parents), vec![9]);
    }

    #[test]
    fn sequence_shape() {
        let seq = dispatch_sequence(&[1, 2, 3], |_, _| ());
        assert_eq!(
            phases(&seq),
            vec![
                (Phase::Capture, 1),
                (Phase::Capture, 2),
                (Phase::Capture, 3),
                (Phase::Target, 3),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
            ]
        );
    }

    #[test]
    fn singleton_path_has_no_bubble() {
        let seq = dispatch_sequence(&[7], |_, _| ());
        assert_eq!(phases(&seq), vec![(Phase::Capture, 7), (Phase::Target, 7)]);
        assert!(dispatch_sequence::<u32, ()>(&[], |_, _| ()).is_empty());
    }

    #[test]
    fn meta_is_attached_per_step() {
        let seq = dispatch_sequence(&[1, 2], |phase, n| (phase == Phase::Target).then_some(*n * 10));
        let metas: Vec<Option<u32>> = seq.iter().map(|d| d.meta).collect();
        assert_eq!(metas, vec![None, None, Some(20), None]);
    }

    #[test]
    fn stop_skips_rest_of_phase_only() {
        let seq = dispatch_sequence(&[1, 2, 3], |_, _| ());
        let mut seen = Vec::new();
        let consumed = run_dispatch(&seq, |d| {
            seen.push((d.phase, d.node));
            if d.phase == Phase::Capture && d.node == 1 {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert!(!consumed);
        assert_eq!(
            seen,
            vec![
                (Phase::Capture, 1),
                (Phase::Target, 3),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
            ]
        );
    }

    #[test]
    fn stop_and_consume_aborts_everything() {
        let seq = dispatch_sequence(&[1, 2, 3], |_, _| ());
        let mut seen = Vec::new();
        let consumed = run_dispatch(&seq, |d| {
            seen.push((d.phase, d.node));
            if d.phase == Phase::Target {
                Outcome::StopAndConsume
            } else {
                Outcome::Continue
            }
        });
        assert!(consumed);
        assert_eq!(seen.len(), 4);
    }
}
