// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router basics.
//!
//! Reconstructs a root→target path through a parent relation and prints the
//! capture → target → bubble dispatch sequence, first in full and then with a
//! capture handler that stops its phase.
//!
//! Run:
//! - `cargo run -p trellis_demos --example event_routing`

use trellis_host::router::{ParentLookup, dispatch_sequence, propagation_path, run_dispatch};
use trellis_slot::types::{Outcome, Phase};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(u32);

struct Parents;
impl ParentLookup<Node> for Parents {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        match node.0 {
            3 => Some(Node(2)),
            2 => Some(Node(1)),
            _ => None,
        }
    }
}

fn main() {
    let path = propagation_path(Node(3), &Parents);
    let seq = dispatch_sequence(&path, |phase, node| format!("{phase:?}@{}", node.0));

    println!("== Dispatch (capture → target → bubble) ==");
    for d in &seq {
        println!("  {:?}  node={:?}  meta={}", d.phase, d.node, d.meta);
    }

    println!("== Capture at the root stops its phase ==");
    let consumed = run_dispatch(&seq, |d| {
        println!("  deliver {}", d.meta);
        if d.phase == Phase::Capture && d.node == Node(1) {
            Outcome::Stop
        } else {
            Outcome::Continue
        }
    });
    println!("  consumed={consumed}");
}
