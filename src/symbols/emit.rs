// src/symbols/emit.rs
// Renders a SymbolAllocation as Rust source and streams it to disk. All
// semantic invariants are established by the allocator before we get here;
// this stage only formats and writes.

use std::{
    fmt::Write as _,
    fs,
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use super::{SlotDecl, SymbolAllocation};
use crate::error::GenError;

/// Render the generated table. Deterministic: the same allocation always
/// produces the same text, so reruns of the generator are byte-identical.
pub fn render_table(alloc: &SymbolAllocation) -> String {
    let mut out = String::new();
    out.push_str("// GENERATED by gen_symbols — do not edit by hand.\n");
    out.push_str(
        "// Regenerate with `cargo run --bin gen_symbols -- <definition.json> <this file>`.\n",
    );
    out.push_str("// Included by the runtime's symbol module, which defines `StaticSymbol`.\n\n");

    for a in &alloc.anonymous {
        let _ = writeln!(
            out,
            "pub const {}: StaticSymbol = StaticSymbol::unregistered({:?});",
            a.name, a.text
        );
    }
    if !alloc.anonymous.is_empty() {
        out.push('\n');
    }

    for c in &alloc.characters {
        let _ = writeln!(
            out,
            "pub const {}: StaticSymbol = StaticSymbol::with_id({:?}, {});",
            c.name, c.text, c.id
        );
    }
    out.push('\n');

    for slot in &alloc.slots {
        match &slot.decl {
            SlotDecl::Symbol { name, text } => {
                let _ = writeln!(
                    out,
                    "pub const {}: StaticSymbol = StaticSymbol::with_id({:?}, {});",
                    name, text, slot.id
                );
            }
            SlotDecl::Reserved { token } => {
                let _ = writeln!(
                    out,
                    "// slot {} reserved: preserved token `{}` has no predefined text",
                    slot.id, token
                );
            }
        }
    }
    out.push('\n');

    let _ = writeln!(out, "pub const LAST_OP_ID: u32 = {};", alloc.last_operator_id);
    let _ = writeln!(
        out,
        "pub const STATIC_SYMBOLS_SIZE: usize = {};",
        alloc.total_slots
    );
    out
}

/// Write the rendered table to `path`.
pub fn write_table(path: &Path, alloc: &SymbolAllocation) -> Result<(), GenError> {
    let started = Instant::now();
    let rendered = render_table(alloc);
    let f = fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    w.write_all(rendered.as_bytes())?;
    w.flush()?;
    log::debug!(
        "wrote {} in {} ms",
        path.display(),
        started.elapsed().as_millis()
    );
    Ok(())
}
