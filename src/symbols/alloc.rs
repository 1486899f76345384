// src/symbols/alloc.rs
// Pure id assignment. Two disjoint id spaces share one numeric namespace:
// characters take their own codepoint, everything else takes the next slot
// of a dense run starting at the offset. The phases and their order are
// load-bearing; reordering them changes every id downstream.

use hashbrown::HashSet;

use super::{Anonymous, Slot, SlotDecl, SymbolAllocation, SymbolEntry, def::Definition, names};
use crate::error::GenError;

/// First id of the sequential range. Sits above every character codepoint so
/// the two id spaces never collide.
pub const SYMBOL_ID_OFFSET: u32 = 128;

fn claim(taken: &mut HashSet<String>, name: &str) -> Result<(), GenError> {
    if !taken.insert(name.to_string()) {
        return Err(GenError::NameCollision {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Constant name for a preserved token: strip one leading underscore, then
/// uppercase the remainder.
fn preserved_constant_name(token: &str) -> String {
    token.strip_prefix('_').unwrap_or(token).to_uppercase()
}

/// Compute the full id assignment for `def`.
///
/// `expected_len` is the runtime's static array length, threaded through
/// explicitly so the capacity cross-check is verifiable in isolation.
pub fn allocate(
    def: &Definition,
    offset: u32,
    expected_len: u32,
) -> Result<SymbolAllocation, GenError> {
    if offset <= names::MAX_CHAR_ID {
        return Err(GenError::InvalidOffset {
            offset,
            max: names::MAX_CHAR_ID,
        });
    }

    // Collision guard over the sequential phases, where constant names are
    // derived or author-chosen per definition row. The character table and
    // the anonymous prelude are curated in one place and stay out of it.
    let mut taken = HashSet::new();

    // Prelude symbols: declared without a static id.
    let mut anonymous = Vec::with_capacity(def.anonymous.len());
    for text in &def.anonymous {
        anonymous.push(Anonymous {
            name: text.to_uppercase(),
            text: text.clone(),
        });
    }

    // Character phase: id = codepoint, not sequential.
    let mut characters = Vec::new();
    for c in names::symbol_chars() {
        let name = names::display_name(c).ok_or(GenError::UnnamedCharacter { ch: c })?;
        characters.push(SymbolEntry {
            name: name.to_string(),
            text: c.to_string(),
            id: c as u32,
        });
    }

    let mut slots = Vec::new();
    let mut index = offset;

    // Operator phase: first occurrence of each distinct text wins, in source
    // order. A surviving row without a name is dropped and consumes no slot.
    let mut seen_ops: HashSet<&str> = HashSet::new();
    for op in &def.operators {
        if !seen_ops.insert(op.text.as_str()) {
            continue; // alias of an earlier row
        }
        let Some(name) = &op.name else {
            continue;
        };
        claim(&mut taken, name)?;
        slots.push(Slot {
            id: index,
            decl: SlotDecl::Symbol {
                name: name.clone(),
                text: op.text.clone(),
            },
        });
        index += 1;
    }
    let last_operator_id = index - 1;

    // Preserved phase: a token without predefined text emits nothing, but
    // the slot is still consumed and stays empty in the final table.
    for token in &def.preserved {
        match def.predefined.get(token) {
            Some(text) => {
                let name = preserved_constant_name(token);
                let text = if token == "NULL" {
                    String::new()
                } else {
                    text.clone()
                };
                claim(&mut taken, &name)?;
                slots.push(Slot {
                    id: index,
                    decl: SlotDecl::Symbol { name, text },
                });
            }
            None => {
                slots.push(Slot {
                    id: index,
                    decl: SlotDecl::Reserved {
                        token: token.clone(),
                    },
                });
            }
        }
        index += 1;
    }

    // Typed phase: categories in document order, tokens in given order.
    // Predefined text is mandatory here.
    for category in &def.categories {
        for token in &category.tokens {
            let text = def
                .predefined
                .get(token)
                .ok_or_else(|| GenError::MissingPredefined {
                    category: category.name.clone(),
                    token: token.clone(),
                })?;
            let name = token.to_uppercase();
            claim(&mut taken, &name)?;
            slots.push(Slot {
                id: index,
                decl: SlotDecl::Symbol {
                    name,
                    text: text.clone(),
                },
            });
            index += 1;
        }
    }

    let total_slots = index;
    if total_slots != expected_len {
        return Err(GenError::CapacityMismatch {
            expected: expected_len,
            actual: total_slots,
        });
    }

    let reserved = slots
        .iter()
        .filter(|s| matches!(s.decl, SlotDecl::Reserved { .. }))
        .count();
    log::debug!(
        "allocated {} character ids and {} sequential slots ({} reserved), last op id {}",
        characters.len(),
        slots.len(),
        reserved,
        last_operator_id
    );

    Ok(SymbolAllocation {
        anonymous,
        characters,
        slots,
        last_operator_id,
        total_slots,
    })
}
