// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use trellis_slot::node::{Node, Portal, Render};
use trellis_slot::types::ElementHandle;

use super::{Children, render_children};

/// Mounts its children under another container, the document body by default.
///
/// The host skips portals until its rendering surface is ready.
#[derive(Default)]
pub struct DialogPortal {
    container: Option<ElementHandle>,
    children: Children,
}

impl fmt::Debug for DialogPortal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogPortal")
            .field("container", &self.container)
            .field("children", &self.children.len())
            .finish()
    }
}

impl DialogPortal {
    /// A portal into the document body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount under `container` instead of the body.
    pub fn container(mut self, container: ElementHandle) -> Self {
        self.container = Some(container);
        self
    }

    child_list!(.children);
}

impl Render for DialogPortal {
    fn render(&self) -> Node {
        Portal {
            container: self.container,
            children: render_children(&self.children),
        }
        .into()
    }
}
