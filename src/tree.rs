// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{DepthFirstNodesIter, Direction, EncodingPath, PathNode, Symbol};

/// Number of L/R symbols per Braille cell.
pub const BRAILLE_CODE_LENGTH: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(code_length) => code_length,
    None => unreachable!(),
};

#[derive(Debug, Error)]
pub enum InsertCharacterError {
    /// The root node never carries a character.
    #[error("cannot assign character {character:?} to the root path")]
    RootPath { character: char },
}

/// Return type when removing a character from the tree.
#[derive(Debug, Clone)]
pub struct RemovedCharacter {
    /// The detached node that carried the character.
    pub node: PathNode,

    /// Number of ancestor nodes that have been pruned after
    /// becoming childless.
    pub pruned_node_count: usize,
}

impl RemovedCharacter {
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        self.node.symbol()
    }
}

/// Binary tree that maps characters onto encoding paths and vice versa.
///
/// Not synchronized. Concurrent mutation must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct EncodingTree {
    root_node: Option<Box<PathNode>>,
    code_length: NonZeroUsize,
}

impl Default for EncodingTree {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingTree {
    /// Create an empty tree for 6-symbol Braille cells.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_code_length(BRAILLE_CODE_LENGTH)
    }

    /// Create an empty tree with a custom number of symbols per character.
    ///
    /// The code length determines the chunk size when decoding streams.
    #[must_use]
    pub const fn with_code_length(code_length: NonZeroUsize) -> Self {
        Self {
            root_node: None,
            code_length,
        }
    }

    #[must_use]
    pub const fn code_length(&self) -> NonZeroUsize {
        self.code_length
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root_node.is_none()
    }

    #[must_use]
    pub fn root_node(&self) -> Option<&PathNode> {
        self.root_node.as_deref()
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> DepthFirstNodesIter<'_> {
        self.root_node
            .as_deref()
            .map(PathNode::depth_first)
            .unwrap_or_default()
    }

    /// Total number of nodes in the tree, including intermediate nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// All assigned symbols in pre-order.
    pub fn characters(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.nodes()
            .map(PathNode::symbol)
            .filter(|symbol| symbol.is_assigned())
    }

    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters().count()
    }

    /// Assign a character to the node at the end of the encoding path.
    ///
    /// All missing nodes along the path are created as intermediate nodes
    /// that record the partial path. The symbol of the terminal node is
    /// overwritten unconditionally.
    ///
    /// If the character is already assigned to a different path then
    /// its old node is turned into an intermediate node. The old node
    /// is neither removed nor pruned.
    ///
    /// Returns the assigned symbol that has been replaced, if any.
    pub fn insert_character(
        &mut self,
        character: char,
        encoding: EncodingPath,
    ) -> Result<Option<Symbol>, InsertCharacterError> {
        if encoding.is_root() {
            return Err(InsertCharacterError::RootPath { character });
        }
        if encoding.len() != self.code_length.get() {
            log::warn!(
                "Encoding {encoding} of character {character:?} does not match the code length {code_length}",
                code_length = self.code_length,
            );
        }
        self.demote_character(character, &encoding);
        let mut next_node = self.root_node.get_or_insert_with(|| {
            log::debug!("Creating root node");
            Box::new(PathNode::new(Symbol::intermediate(EncodingPath::root())))
        });
        let mut partial_encoding = EncodingPath::root();
        for direction in encoding.directions() {
            partial_encoding.push(direction);
            next_node = next_node.child_link_mut(direction).get_or_insert_with(|| {
                log::debug!("Creating intermediate node {partial_encoding}");
                Box::new(PathNode::new(Symbol::intermediate(partial_encoding.clone())))
            });
        }
        debug_assert_eq!(partial_encoding, encoding);
        let new_symbol = Symbol::assigned(character, encoding);
        log::debug!("Assigning {new_symbol}");
        let old_symbol = std::mem::replace(&mut next_node.symbol, new_symbol);
        Ok(old_symbol.is_assigned().then_some(old_symbol))
    }

    /// Turn the node of a character into an intermediate node unless it
    /// is located at `new_encoding`.
    fn demote_character(&mut self, character: char, new_encoding: &EncodingPath) {
        let Some(old_encoding) = self
            .find_encoding(character)
            .filter(|old_encoding| *old_encoding != new_encoding)
            .cloned()
        else {
            return;
        };
        let Some(old_node) = self.find_node_mut(&old_encoding) else {
            return;
        };
        log::debug!("Relocating character {character:?} from {old_encoding} to {new_encoding}");
        old_node.symbol = Symbol::intermediate(old_encoding);
    }

    /// Find the node at the end of the given path.
    ///
    /// The root path resolves to the root node. Returns `None` if the tree
    /// is empty or if a child is missing along the path.
    #[must_use]
    pub fn find_node(&self, path: &EncodingPath) -> Option<&PathNode> {
        let mut last_visited_node = self.root_node.as_deref()?;
        for direction in path.directions() {
            last_visited_node = last_visited_node.child(direction)?;
        }
        Some(last_visited_node)
    }

    /// Find the node at the end of a textual path.
    ///
    /// Paths with symbols other than `L` and `R` never match.
    #[must_use]
    pub fn lookup_node(&self, path: &str) -> Option<&PathNode> {
        let Ok(path) = path.parse::<EncodingPath>() else {
            log::debug!("Invalid path {path:?}");
            return None;
        };
        self.find_node(&path)
    }

    fn find_node_mut(&mut self, path: &EncodingPath) -> Option<&mut PathNode> {
        let mut last_visited_node = self.root_node.as_deref_mut()?;
        for direction in path.directions() {
            last_visited_node = last_visited_node.child_mut(direction)?;
        }
        Some(last_visited_node)
    }

    /// Find the encoding of a character.
    ///
    /// Searches all nodes in pre-order and returns the encoding of the
    /// first match.
    #[must_use]
    pub fn find_encoding(&self, character: char) -> Option<&EncodingPath> {
        self.nodes()
            .map(PathNode::symbol)
            .find(|symbol| symbol.character() == Some(character))
            .map(Symbol::encoding)
    }

    /// Collect all assigned symbols below the node addressed by `prefix`.
    ///
    /// Only leaf nodes are considered. They are returned in pre-order,
    /// left before right. Returns an empty result if no node exists at
    /// the given prefix.
    #[must_use]
    pub fn encodings_starting_with(&self, prefix: &EncodingPath) -> Vec<&Symbol> {
        let Some(subtree_root_node) = self.find_node(prefix) else {
            return Vec::new();
        };
        subtree_root_node
            .leaves()
            .map(PathNode::symbol)
            .filter(|symbol| symbol.is_assigned())
            .inspect(|symbol| debug_assert!(symbol.encoding().starts_with(prefix)))
            .collect()
    }

    /// Translate a concatenated stream of encodings into text.
    ///
    /// The stream is split into chunks of [`Self::code_length()`] symbols,
    /// the last chunk might be shorter. Chunks that don't resolve to an
    /// assigned node are skipped.
    #[must_use]
    pub fn decode(&self, stream: &str) -> String {
        let symbols = stream.chars().collect::<Vec<_>>();
        symbols
            .chunks(self.code_length.get())
            .filter_map(|chunk| {
                let character = chunk
                    .iter()
                    .copied()
                    .map(Direction::from_symbol)
                    .collect::<Option<EncodingPath>>()
                    .and_then(|path| self.find_node(&path))
                    .and_then(|node| node.symbol().character());
                if character.is_none() {
                    log::debug!(
                        "Skipping unknown chunk {chunk:?}",
                        chunk = chunk.iter().collect::<String>()
                    );
                }
                character
            })
            .collect()
    }

    /// Translate text into a concatenated stream of encodings.
    ///
    /// Characters without an encoding are skipped.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        let mut stream = String::with_capacity(text.len() * self.code_length.get());
        for character in text.chars() {
            let Some(encoding) = self.find_encoding(character) else {
                log::debug!("Skipping unknown character {character:?}");
                continue;
            };
            stream.push_str(encoding.as_str());
        }
        stream
    }

    /// Remove a character from the tree.
    ///
    /// Detaches the node of the character from its parent and then prunes
    /// all ancestors along the same path that have become childless,
    /// bottom-up. Pruning stops at the first ancestor that still has a
    /// child or carries a character. The root node is never removed.
    ///
    /// Returns `None` if the character is unknown.
    pub fn remove_character(&mut self, character: char) -> Option<RemovedCharacter> {
        let encoding = self.find_encoding(character)?;
        let directions = encoding.directions().collect::<Vec<_>>();
        let root_node = self.root_node.as_deref_mut()?;
        let removed = detach_descendant(root_node, &directions)?;
        log::debug!(
            "Removed {symbol} and pruned {pruned_node_count} node(s)",
            symbol = removed.symbol(),
            pruned_node_count = removed.pruned_node_count,
        );
        Some(removed)
    }
}

const fn is_prunable(node: &PathNode) -> bool {
    node.is_leaf() && !node.symbol.is_assigned()
}

/// Detach the node at the end of `path` from the subtree rooted at `parent_node`.
///
/// The recursion records the chain of ancestors. Each ancestor is pruned
/// on the way back up if it has become childless.
fn detach_descendant(parent_node: &mut PathNode, path: &[Direction]) -> Option<RemovedCharacter> {
    let (&direction, remaining_path) = path.split_first()?;
    if remaining_path.is_empty() {
        let node = parent_node.child_link_mut(direction).take()?;
        log::debug!("Detached node {symbol}", symbol = node.symbol);
        return Some(RemovedCharacter {
            node: *node,
            pruned_node_count: 0,
        });
    }
    let child_node = parent_node.child_mut(direction)?;
    let mut removed = detach_descendant(child_node, remaining_path)?;
    if is_prunable(child_node) {
        log::debug!("Pruning childless node {symbol}", symbol = child_node.symbol);
        *parent_node.child_link_mut(direction) = None;
        removed.pruned_node_count += 1;
    }
    Some(removed)
}

impl Extend<(char, EncodingPath)> for EncodingTree {
    fn extend<I: IntoIterator<Item = (char, EncodingPath)>>(&mut self, iter: I) {
        for (character, encoding) in iter {
            if let Err(err) = self.insert_character(character, encoding) {
                log::warn!("Skipping encoding: {err}");
            }
        }
    }
}

impl FromIterator<(char, EncodingPath)> for EncodingTree {
    fn from_iter<I: IntoIterator<Item = (char, EncodingPath)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
