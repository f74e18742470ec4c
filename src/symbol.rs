// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::EncodingPath;

/// Value stored in every node of an [`EncodingTree`](crate::EncodingTree).
///
/// Either an assigned character together with its full encoding or an
/// unassigned, intermediate marker that only records the partial path
/// traversed so far.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    character: Option<char>,
    encoding: EncodingPath,
}

impl Symbol {
    /// An assigned character.
    ///
    /// The encoding must not be the root path.
    #[must_use]
    pub fn assigned(character: char, encoding: EncodingPath) -> Self {
        debug_assert!(!encoding.is_root());
        Self {
            character: Some(character),
            encoding,
        }
    }

    /// An intermediate marker without a character.
    #[must_use]
    pub const fn intermediate(encoding: EncodingPath) -> Self {
        Self {
            character: None,
            encoding,
        }
    }

    #[must_use]
    pub const fn character(&self) -> Option<char> {
        self.character
    }

    #[must_use]
    pub const fn encoding(&self) -> &EncodingPath {
        &self.encoding
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.character.is_some()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            character,
            encoding,
        } = self;
        match character {
            Some(character) => write!(f, "{character} -> {encoding}"),
            None if encoding.is_root() => f.write_str("\"\""),
            None => write!(f, "{encoding}"),
        }
    }
}
