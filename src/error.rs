// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generator run. Every variant is fatal: the
/// pipeline is a deterministic offline transform with no recovery, retry, or
/// partial-output mode.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read symbol definition {}: {source}", path.display())]
    DefinitionRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse symbol definition: {0}")]
    DefinitionParse(#[source] serde_json::Error),

    #[error("definition key `{key}` is neither a known section nor an uppercase-leading category name")]
    BadCategoryKey { key: String },

    #[error("category `{category}` must be an array of token name strings")]
    BadCategoryValue { category: String },

    #[error("token `{token}` in category `{category}` has no predefined text")]
    MissingPredefined { category: String, token: String },

    #[error("table holds {actual} slots but the runtime expects {expected}; regenerate against the runtime's array size")]
    CapacityMismatch { expected: u32, actual: u32 },

    #[error("constant name `{name}` derived twice; the generated table would not compile")]
    NameCollision { name: String },

    #[error("offset {offset} does not clear the character id range (max codepoint {max})")]
    InvalidOffset { offset: u32, max: u32 },

    #[error("no display name for character `{ch}`")]
    UnnamedCharacter { ch: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
