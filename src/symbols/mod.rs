// src/symbols/mod.rs
pub mod alloc;
pub mod def;
pub mod emit;
pub mod names;

// Re-exports to keep the external API small.
pub use alloc::{SYMBOL_ID_OFFSET, allocate};
pub use def::{Definition, OperatorToken, TypedCategory, load_definition, parse_definition};
pub use emit::{render_table, write_table};

use std::path::Path;

use crate::error::GenError;

/// One declaration in the generated table: constant name, display text, id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub text: String,
    pub id: u32,
}

/// Prelude symbol declared without a static id; the runtime interns it at
/// startup instead of giving it a slot in the static array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anonymous {
    pub name: String,
    pub text: String,
}

/// One position in the sequential id space. A slot is consumed whether or
/// not a declaration is emitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: u32,
    pub decl: SlotDecl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotDecl {
    Symbol { name: String, text: String },
    /// Consumed but left empty: `token` had no predefined text.
    Reserved { token: String },
}

/// Final product of the allocator, consumed as-is by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAllocation {
    pub anonymous: Vec<Anonymous>,
    /// Character symbols; id = the character's own codepoint.
    pub characters: Vec<SymbolEntry>,
    /// Sequential slots, dense from the offset upward.
    pub slots: Vec<Slot>,
    pub last_operator_id: u32,
    pub total_slots: u32,
}

/// Whole pipeline for one generator run: load, allocate, emit.
///
/// Nothing is written unless allocation succeeded, so a capacity mismatch or
/// malformed definition leaves no artifact behind.
pub fn generate(def_path: &Path, out_path: &Path) -> Result<SymbolAllocation, GenError> {
    let def = load_definition(def_path)?;
    let alloc = allocate(&def, SYMBOL_ID_OFFSET, def.expected_len)?;
    write_table(out_path, &alloc)?;
    Ok(alloc)
}
