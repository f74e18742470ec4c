// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Direction, PathNode};

/// Half-edge to a child node in the tree.
///
/// Borrows the target node.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdgeRef<'a> {
    /// Branch choice from the (implicit) source to the target node.
    pub direction: Direction,

    /// The target node.
    pub node: &'a PathNode,
}
