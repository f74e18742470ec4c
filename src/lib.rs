// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

//! Bidirectional codec between characters and Braille dot patterns.
//!
//! Every character is addressed by a path of `L`/`R` branch choices
//! through a binary tree.

mod edge;
pub use self::edge::HalfEdgeRef;

mod node;
pub use self::node::{DepthFirstNodesIter, PathNode};

mod path;
pub use self::path::{Direction, EncodingPath, InvalidPathError};

mod symbol;
pub use self::symbol::Symbol;

mod tree;
pub use self::tree::{EncodingTree, InsertCharacterError, RemovedCharacter, BRAILLE_CODE_LENGTH};

pub mod loader;
pub use self::loader::{
    load_encoding_tree, load_encoding_tree_from_path, read_encoded_stream, read_encodings,
    LoadEncodingsError,
};
