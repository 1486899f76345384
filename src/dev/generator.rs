// src/dev/generator.rs
// Random-but-valid symbol definitions for fuzz_alloc and tests. Shapes
// mirror real definitions: alias rows, nameless rows, preserved tokens with
// partial predefined coverage, a few typed categories. The expected slot
// count is tallied while generating, independently of the allocator.

use hashbrown::HashMap;
use rand::{Rng, rngs::StdRng};
use serde_json::json;

use crate::symbols::{
    SlotDecl, SymbolAllocation,
    def::{Definition, OperatorToken, TypedCategory},
};

pub fn gen_valid_definition(rng: &mut StdRng, offset: u32) -> Definition {
    let mut predefined: HashMap<String, String> = HashMap::new();
    let mut expected = offset;

    let n_ops = rng.random_range(0..24);
    let mut operators = Vec::new();
    let mut texts: Vec<String> = Vec::new();
    for i in 0..n_ops {
        let ordinal = i as u32;
        // some rows alias an earlier text; they never claim a slot
        if !texts.is_empty() && rng.random_bool(0.2) {
            let text = texts[rng.random_range(0..texts.len())].clone();
            let name = rng.random_bool(0.5).then(|| format!("ALIAS_{i}"));
            operators.push(OperatorToken {
                ordinal,
                text,
                name,
            });
            continue;
        }
        let text = format!("<op{i}>");
        texts.push(text.clone());
        let name = rng.random_bool(0.75).then(|| format!("OP_{i}"));
        if name.is_some() {
            expected += 1;
        }
        operators.push(OperatorToken {
            ordinal,
            text,
            name,
        });
    }

    let n_pres = rng.random_range(0..12);
    let mut preserved = Vec::new();
    for i in 0..n_pres {
        let token = if rng.random_bool(0.3) {
            format!("_kw_{i}")
        } else {
            format!("kw_{i}")
        };
        if rng.random_bool(0.65) {
            predefined.insert(token.clone(), format!("kw{i}"));
        }
        preserved.push(token);
        expected += 1;
    }
    if rng.random_bool(0.3) {
        preserved.push("NULL".to_string());
        predefined.insert("NULL".to_string(), "NULL".to_string());
        expected += 1;
    }

    let n_cats = rng.random_range(0..4);
    let mut categories = Vec::new();
    for c in 0..n_cats {
        let n_tokens = rng.random_range(0..8);
        let mut tokens = Vec::new();
        for t in 0..n_tokens {
            let token = format!("ty{c}_{t}");
            predefined.insert(token.clone(), format!("ty{c}.{t}"));
            tokens.push(token);
            expected += 1;
        }
        categories.push(TypedCategory {
            name: format!("Cat{c}"),
            tokens,
        });
    }

    let anonymous: Vec<String> = (0..rng.random_range(0..4))
        .map(|i| format!("anon_{i}"))
        .collect();

    Definition {
        expected_len: expected,
        operators,
        preserved,
        predefined,
        anonymous,
        categories,
    }
}

/// Serialize a definition back into the on-disk JSON shape, for loader
/// round-trips and failure dumps.
pub fn definition_json(def: &Definition) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    root.insert("static_symbols_size".to_string(), json!(def.expected_len));
    root.insert(
        "operators".to_string(),
        json!(
            def.operators
                .iter()
                .map(|op| json!([op.ordinal, op.text, op.name]))
                .collect::<Vec<_>>()
        ),
    );
    root.insert("preserved".to_string(), json!(def.preserved));
    let mut pre = serde_json::Map::new();
    for (k, v) in &def.predefined {
        pre.insert(k.clone(), json!(v));
    }
    root.insert("predefined".to_string(), pre.into());
    root.insert("anonymous".to_string(), json!(def.anonymous));
    for cat in &def.categories {
        root.insert(cat.name.clone(), json!(cat.tokens));
    }
    serde_json::Value::Object(root)
}

/// Structural checks every allocation must pass: unique ids, character
/// identity, range separation, dense sequential run from the offset.
pub fn check_allocation(alloc: &SymbolAllocation, offset: u32) -> Result<(), String> {
    let mut ids = hashbrown::HashSet::new();
    for c in &alloc.characters {
        let cp = c.text.chars().next().map(|ch| ch as u32);
        if cp != Some(c.id) {
            return Err(format!("character {} id {} is not its codepoint", c.name, c.id));
        }
        if c.id >= offset {
            return Err(format!("character id {} reaches into the sequential range", c.id));
        }
        if !ids.insert(c.id) {
            return Err(format!("duplicate id {}", c.id));
        }
    }
    for (i, slot) in alloc.slots.iter().enumerate() {
        let want = offset + i as u32;
        if slot.id != want {
            return Err(format!("slot {i} has id {}, want {want}", slot.id));
        }
        if !ids.insert(slot.id) {
            return Err(format!("duplicate id {}", slot.id));
        }
        if let SlotDecl::Symbol { name, .. } = &slot.decl {
            if name.is_empty() {
                return Err(format!("slot {i} has an empty constant name"));
            }
        }
    }
    if alloc.total_slots != offset + alloc.slots.len() as u32 {
        return Err(format!(
            "total_slots {} disagrees with {} slots from offset {offset}",
            alloc.total_slots,
            alloc.slots.len()
        ));
    }
    Ok(())
}
