// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Direction, HalfEdgeRef, Symbol};

/// Binary tree node.
///
/// Each child is exclusively owned by its parent. Dropping the owning
/// link releases the whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    pub(crate) symbol: Symbol,
    pub(crate) left: Option<Box<PathNode>>,
    pub(crate) right: Option<Box<PathNode>>,
}

impl PathNode {
    /// Construct a node with no children
    #[must_use]
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[must_use]
    pub fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> Option<&mut Self> {
        self.child_link_mut(direction).as_deref_mut()
    }

    /// The owning link to the child in the given direction.
    pub(crate) fn child_link_mut(&mut self, direction: Direction) -> &mut Option<Box<Self>> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Returns an iterator over the direct children of this node
    ///
    /// The left child is visited before the right child.
    pub fn children(&self) -> impl Iterator<Item = HalfEdgeRef<'_>> + '_ {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter_map(move |direction| {
                self.child(direction)
                    .map(|node| HalfEdgeRef { direction, node })
            })
    }

    /// A node without children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Pre-order traversal of the subtree rooted at this node.
    ///
    /// Starts with this node, then visits the left subtree before
    /// the right subtree.
    #[must_use]
    pub fn depth_first(&self) -> DepthFirstNodesIter<'_> {
        DepthFirstNodesIter { stack: vec![self] }
    }

    /// All leaf nodes of the subtree in pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = &Self> + '_ {
        self.depth_first().filter(|node| node.is_leaf())
    }

    /// Number of nodes below this node (recursively).
    #[must_use]
    pub fn count_descendants(&self) -> usize {
        self.depth_first().count() - 1
    }
}

/// Pre-order iterator over the nodes of a subtree.
///
/// Uses an explicit stack instead of recursion.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstNodesIter<'a> {
    stack: Vec<&'a PathNode>,
}

impl<'a> Iterator for DepthFirstNodesIter<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push the right child first to visit the left subtree first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node)
    }
}
