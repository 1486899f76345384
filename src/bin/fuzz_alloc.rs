// src/bin/fuzz_alloc.rs
// Generate random-but-valid definitions and check allocator invariants on
// each.
// Knobs:
//   FUZZ_ITERS=N   iterations (default 200)
//   FUZZ_SEED=N    base RNG seed (default 0xA110C)
//   FUZZ_SAVE=1    dump the failing definition JSON under target/

use std::fs;

use anyhow::{Context, Result, bail};
use rand::{SeedableRng, rngs::StdRng};

use otus::{
    dev::generator::{check_allocation, definition_json, gen_valid_definition},
    symbols::{SYMBOL_ID_OFFSET, allocate, def::Definition},
};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn save_case(iter: u64, def: &Definition) -> Result<()> {
    if std::env::var("FUZZ_SAVE").as_deref() != Ok("1") {
        return Ok(());
    }
    let path = format!("target/fuzz_alloc_case_{iter}.json");
    let text = serde_json::to_string_pretty(&definition_json(def))?;
    fs::write(&path, text).with_context(|| format!("failed to save {path}"))?;
    eprintln!("[fuzz_alloc] saved failing definition to {path}");
    Ok(())
}

fn main() -> Result<()> {
    let iters = env_u64("FUZZ_ITERS", 200);
    let seed = env_u64("FUZZ_SEED", 0xA110C);

    for i in 0..iters {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
        let def = gen_valid_definition(&mut rng, SYMBOL_ID_OFFSET);

        let alloc = match allocate(&def, SYMBOL_ID_OFFSET, def.expected_len) {
            Ok(a) => a,
            Err(e) => {
                save_case(i, &def)?;
                bail!("iter {i} (seed {seed}): allocate failed: {e}");
            }
        };
        if let Err(msg) = check_allocation(&alloc, SYMBOL_ID_OFFSET) {
            save_case(i, &def)?;
            bail!("iter {i} (seed {seed}): {msg}");
        }
    }

    println!("[fuzz_alloc] {iters} definitions OK");
    Ok(())
}
