// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Branch choice when descending from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    #[display(fmt = "L")]
    Left,
    #[display(fmt = "R")]
    Right,
}

impl Direction {
    pub const LEFT_SYMBOL: char = 'L';

    pub const RIGHT_SYMBOL: char = 'R';

    /// Map an encoding symbol onto a direction.
    ///
    /// Returns `None` for any symbol outside of the two-symbol alphabet.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::LEFT_SYMBOL => Some(Self::Left),
            Self::RIGHT_SYMBOL => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => Self::LEFT_SYMBOL,
            Self::Right => Self::RIGHT_SYMBOL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid encoding symbol {symbol:?} at position {position}")]
pub struct InvalidPathError {
    pub symbol: char,
    pub position: usize,
}

/// Route from the root to a node, read as a sequence of branch choices.
///
/// Only contains the symbols `L` and `R`. The empty path addresses
/// the root node.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodingPath(String);

impl EncodingPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Check if the path equals the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of branch choices, i.e. the depth of the addressed node.
    #[must_use]
    pub fn len(&self) -> usize {
        // All symbols are ASCII
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over all directions from the root down to the addressed node.
    pub fn directions(
        &self,
    ) -> impl DoubleEndedIterator<Item = Direction> + ExactSizeIterator + '_ {
        self.0.bytes().map(|symbol| {
            if symbol == Direction::LEFT_SYMBOL as u8 {
                Direction::Left
            } else {
                debug_assert_eq!(symbol, Direction::RIGHT_SYMBOL as u8);
                Direction::Right
            }
        })
    }

    /// Split the path into the directions leading to the parent node
    /// and the last direction leading from the parent to the child.
    ///
    /// The last direction is `None` for the root path.
    #[must_use]
    pub fn parent_child_directions(
        &self,
    ) -> (impl Iterator<Item = Direction> + '_, Option<Direction>) {
        let child_direction = self.directions().next_back();
        let parent_len = self.len().saturating_sub(1);
        (self.directions().take(parent_len), child_direction)
    }

    /// The path of the parent node.
    ///
    /// Returns `None` for the root path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_owned()))
    }

    pub fn push(&mut self, direction: Direction) {
        self.0.push(direction.symbol());
    }

    /// Check if this path passes through the node addressed by `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl fmt::Display for EncodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EncodingPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EncodingPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, symbol)) = s
            .chars()
            .enumerate()
            .find(|(_, symbol)| Direction::from_symbol(*symbol).is_none())
        {
            return Err(InvalidPathError { symbol, position });
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<&str> for EncodingPath {
    type Error = InvalidPathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromIterator<Direction> for EncodingPath {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().map(Direction::symbol).collect())
    }
}
