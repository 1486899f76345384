// src/symbols/def.rs
// Loads the symbol definition file: a JSON object carrying the operator
// rows, preserved token names, predefined display texts, and any number of
// uppercase-keyed typed categories.

use std::{fs, path::Path};

use hashbrown::HashMap;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::GenError;

/// One operator row, written `[ordinal, text, name-or-null]` in the file.
/// Rows sharing the same text are aliases; only the first occurrence can
/// claim a slot, and only if it carries a constant name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(u32, String, Option<String>)")]
pub struct OperatorToken {
    pub ordinal: u32,
    pub text: String,
    pub name: Option<String>,
}

impl From<(u32, String, Option<String>)> for OperatorToken {
    fn from((ordinal, text, name): (u32, String, Option<String>)) -> Self {
        Self {
            ordinal,
            text,
            name,
        }
    }
}

/// A named token category; the key in the file begins with an uppercase
/// letter. Category order and token order both follow the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedCategory {
    pub name: String,
    pub tokens: Vec<String>,
}

/// Parsed definition. Field order inside the vectors is source order, which
/// the allocator depends on for dedup tie-breaking and id stability.
#[derive(Debug, Clone)]
pub struct Definition {
    /// The runtime's static array length; the allocator must land on exactly
    /// this many slots.
    pub expected_len: u32,
    pub operators: Vec<OperatorToken>,
    pub preserved: Vec<String>,
    pub predefined: HashMap<String, String>,
    pub anonymous: Vec<String>,
    pub categories: Vec<TypedCategory>,
}

// Raw file shape. Typed categories arrive as leftover top-level keys; the
// IndexMap keeps them in document order.
#[derive(Deserialize)]
struct DefinitionFile {
    static_symbols_size: u32,
    operators: Vec<OperatorToken>,
    preserved: Vec<String>,
    predefined: HashMap<String, String>,
    #[serde(default)]
    anonymous: Vec<String>,
    #[serde(flatten)]
    rest: IndexMap<String, serde_json::Value>,
}

fn is_category_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a definition from JSON text.
pub fn parse_definition(text: &str) -> Result<Definition, GenError> {
    let raw: DefinitionFile = serde_json::from_str(text).map_err(GenError::DefinitionParse)?;

    let mut categories = Vec::with_capacity(raw.rest.len());
    for (key, value) in raw.rest {
        if !is_category_key(&key) {
            return Err(GenError::BadCategoryKey { key });
        }
        let Some(items) = value.as_array() else {
            return Err(GenError::BadCategoryValue { category: key });
        };
        let mut tokens = Vec::with_capacity(items.len());
        for item in items {
            let Some(token) = item.as_str() else {
                return Err(GenError::BadCategoryValue { category: key });
            };
            tokens.push(token.to_string());
        }
        categories.push(TypedCategory { name: key, tokens });
    }

    log::debug!(
        "definition: {} operator rows, {} preserved, {} predefined, {} categories",
        raw.operators.len(),
        raw.preserved.len(),
        raw.predefined.len(),
        categories.len()
    );

    Ok(Definition {
        expected_len: raw.static_symbols_size,
        operators: raw.operators,
        preserved: raw.preserved,
        predefined: raw.predefined,
        anonymous: raw.anonymous,
        categories,
    })
}

/// Read and parse the definition file at `path`.
pub fn load_definition(path: impl AsRef<Path>) -> Result<Definition, GenError> {
    let path = path.as_ref();
    log::debug!("loading symbol definition from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| GenError::DefinitionRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_definition(&text)
}
