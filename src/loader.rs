// SPDX-FileCopyrightText: The braille-pathtree authors
// SPDX-License-Identifier: MPL-2.0

//! Reading encodings and encoded streams from text files.
//!
//! An encodings file starts with the number of entries on the first line.
//! Each of the following lines contains a character, whitespace, and the
//! encoding of the character:
//!
//! ```text
//! 2
//! a LLLLLL
//! b LLLLLR
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

use crate::{EncodingPath, EncodingTree, InvalidPathError};

#[derive(Debug, Error)]
pub enum LoadEncodingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("missing number of entries")]
    MissingCount,
    #[error("invalid number of entries in line {line}")]
    InvalidCount { line: usize },
    #[error("missing character in line {line}")]
    MissingCharacter { line: usize },
    #[error("missing encoding in line {line}")]
    MissingEncoding { line: usize },
    #[error("invalid encoding in line {line}")]
    InvalidEncoding {
        line: usize,
        #[source]
        source: InvalidPathError,
    },
    #[error("empty encoding in line {line}")]
    RootEncoding { line: usize },
    #[error("expected {expected} entries, found {actual}")]
    TooFewEntries { expected: usize, actual: usize },
}

/// Parse a single entry line.
///
/// `line` is the 1-based line number for error reporting.
fn parse_entry(line: usize, text: &str) -> Result<(char, EncodingPath), LoadEncodingsError> {
    let mut chars = text.chars();
    let character = chars
        .next()
        .ok_or(LoadEncodingsError::MissingCharacter { line })?;
    let encoding = chars
        .as_str()
        .split_whitespace()
        .next()
        .ok_or(LoadEncodingsError::MissingEncoding { line })?;
    let encoding = encoding
        .parse::<EncodingPath>()
        .map_err(|source| LoadEncodingsError::InvalidEncoding { line, source })?;
    if encoding.is_root() {
        return Err(LoadEncodingsError::RootEncoding { line });
    }
    Ok((character, encoding))
}

/// Read all (character, encoding) pairs in file order.
///
/// Lines following the announced number of entries are ignored.
pub fn read_encodings(
    reader: impl BufRead,
) -> Result<Vec<(char, EncodingPath)>, LoadEncodingsError> {
    let mut lines = reader.lines();
    let count_line = lines.next().ok_or(LoadEncodingsError::MissingCount)??;
    let count = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| LoadEncodingsError::InvalidCount { line: 1 })?;
    let mut entries = Vec::new();
    for (index, text) in lines.take(count).enumerate() {
        // The count occupies the first line
        let line = index + 2;
        let entry = parse_entry(line, &text?)?;
        log::debug!("Read entry {entry:?} from line {line}");
        entries.push(entry);
    }
    if entries.len() < count {
        return Err(LoadEncodingsError::TooFewEntries {
            expected: count,
            actual: entries.len(),
        });
    }
    Ok(entries)
}

/// Build a tree from an encodings file.
pub fn load_encoding_tree(reader: impl BufRead) -> Result<EncodingTree, LoadEncodingsError> {
    let mut tree = EncodingTree::new();
    tree.extend(read_encodings(reader)?);
    log::info!(
        "Loaded {character_count} character(s)",
        character_count = tree.character_count()
    );
    Ok(tree)
}

pub fn load_encoding_tree_from_path(
    path: impl AsRef<Path>,
) -> Result<EncodingTree, LoadEncodingsError> {
    let path = path.as_ref();
    log::debug!("Loading encodings from {path}", path = path.display());
    let file = File::open(path)?;
    load_encoding_tree(BufReader::new(file))
}

/// Read the first whitespace-delimited token of a Braille stream file.
///
/// Returns an empty string if the input contains no token.
pub fn read_encoded_stream(mut reader: impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text
        .split_whitespace()
        .next()
        .map(ToOwned::to_owned)
        .unwrap_or_default())
}
