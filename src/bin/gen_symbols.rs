// src/bin/gen_symbols.rs
// Build the static symbol table from a definition file and write it as Rust
// source for the runtime to include.
// Usage:
//   cargo run --bin gen_symbols                 # defs/id.json -> tables/static_symbols.rs
//   cargo run --bin gen_symbols -- defs/id.json /path/out.rs

use std::{env, fs, path::Path};

use otus::symbols::{SlotDecl, generate};

fn main() {
    let def_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "defs/id.json".to_string());
    let out = env::args()
        .nth(2)
        .unwrap_or_else(|| "tables/static_symbols.rs".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("error: failed to create {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    println!("[gen_symbols] loading {def_path}…");
    let alloc = match generate(Path::new(&def_path), out_path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let reserved = alloc
        .slots
        .iter()
        .filter(|s| matches!(s.decl, SlotDecl::Reserved { .. }))
        .count();
    println!(
        "[gen_symbols] {} character ids, {} sequential slots ({} reserved), last op id = {}",
        alloc.characters.len(),
        alloc.slots.len(),
        reserved,
        alloc.last_operator_id
    );
    println!(
        "[gen_symbols] wrote {} ({} slots)",
        out_path.display(),
        alloc.total_slots
    );
    println!("         tip: commit this file; the runtime includes it for its static symbol array.");
}
