//! Move scripts loaded from TOML files.
//!
//! A script names an optional starting layout and a list of moves to replay:
//!
//! ```toml
//! name = "back-rank mate"
//! layout = "6k1/5ppp/8/8/8/8/8/R5K1 w"
//! moves = ["a1a8"]
//! ```

use chess_core::{Move, MoveParseError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a move script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Failed to read the script file from disk.
    #[error("failed to read script: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not a valid script.
    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
    /// One of the listed moves is not in coordinate notation.
    #[error("move {index} ({text:?}) is malformed: {source}")]
    Move {
        index: usize,
        text: String,
        source: MoveParseError,
    },
}

/// A named list of moves, optionally starting from a custom layout.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    /// Layout notation for the starting position. Defaults to the standard
    /// layout.
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub moves: Vec<String>,
}

impl Script {
    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses every listed move, failing on the first malformed one.
    pub fn parsed_moves(&self) -> Result<Vec<Move>, ScriptError> {
        parse_moves(&self.moves)
    }
}

/// Parses coordinate-notation moves, reporting the 1-based index of the first
/// malformed entry.
pub fn parse_moves<S: AsRef<str>>(moves: &[S]) -> Result<Vec<Move>, ScriptError> {
    moves
        .iter()
        .enumerate()
        .map(|(i, text)| {
            text.as_ref().parse().map_err(|source| ScriptError::Move {
                index: i + 1,
                text: text.as_ref().to_string(),
                source,
            })
        })
        .collect()
}
