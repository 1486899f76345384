//! End-to-end generator runs: rendered shape, reproducibility, the
//! no-output-on-failure guarantee, and the checked-in definition.

use std::fs;

use otus::{
    GenError,
    symbols::{SYMBOL_ID_OFFSET, SlotDecl, allocate, generate, load_definition, render_table},
};

const SMALL: &str = r#"{
    "static_symbols_size": 132,
    "operators": [[0, "<=>", "CMP"]],
    "preserved": ["if", "then"],
    "predefined": {"if": "if", "probe": "probe"},
    "anonymous": ["class"],
    "Misc": ["probe"]
}"#;

#[test]
fn generates_the_expected_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let def_path = dir.path().join("id.json");
    let out_path = dir.path().join("static_symbols.rs");
    fs::write(&def_path, SMALL).unwrap();

    generate(&def_path, &out_path).unwrap();
    let text = fs::read_to_string(&out_path).unwrap();

    assert!(text.contains("pub const CLASS: StaticSymbol = StaticSymbol::unregistered(\"class\");"));
    assert!(text.contains("pub const BANG: StaticSymbol = StaticSymbol::with_id(\"!\", 33);"));
    assert!(text.contains("pub const DOUBLE_QUOTE: StaticSymbol = StaticSymbol::with_id(\"\\\"\", 34);"));
    assert!(text.contains("pub const BACK_SLASH: StaticSymbol = StaticSymbol::with_id(\"\\\\\", 92);"));
    assert!(text.contains("pub const CMP: StaticSymbol = StaticSymbol::with_id(\"<=>\", 128);"));
    assert!(text.contains("pub const IF: StaticSymbol = StaticSymbol::with_id(\"if\", 129);"));
    assert!(text.contains("// slot 130 reserved: preserved token `then` has no predefined text"));
    assert!(text.contains("pub const PROBE: StaticSymbol = StaticSymbol::with_id(\"probe\", 131);"));
    assert!(text.contains("pub const LAST_OP_ID: u32 = 128;"));
    assert!(text.contains("pub const STATIC_SYMBOLS_SIZE: usize = 132;"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let def_path = dir.path().join("id.json");
    fs::write(&def_path, SMALL).unwrap();

    let first = dir.path().join("first.rs");
    let second = dir.path().join("second.rs");
    generate(&def_path, &first).unwrap();
    generate(&def_path, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn capacity_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let def_path = dir.path().join("id.json");
    let out_path = dir.path().join("static_symbols.rs");
    fs::write(&def_path, SMALL.replace("132", "999")).unwrap();

    let err = generate(&def_path, &out_path).unwrap_err();
    assert!(matches!(err, GenError::CapacityMismatch { expected: 999, actual: 132 }));
    assert!(!out_path.exists(), "failed runs must not leave an artifact");
}

#[test]
fn bad_definition_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let def_path = dir.path().join("id.json");
    let out_path = dir.path().join("static_symbols.rs");
    fs::write(&def_path, "{ nope").unwrap();

    assert!(generate(&def_path, &out_path).is_err());
    assert!(!out_path.exists());
}

#[test]
fn checked_in_definition_stays_consistent() {
    let def = load_definition("defs/id.json").unwrap();
    let alloc = allocate(&def, SYMBOL_ID_OFFSET, def.expected_len).unwrap();

    assert_eq!(alloc.characters.len(), 31);
    assert_eq!(alloc.total_slots, 171);
    assert_eq!(alloc.last_operator_id, 146);

    // NULL sits right after the three __*__ keywords and renders empty
    let null_slot = alloc
        .slots
        .iter()
        .find(|s| matches!(&s.decl, SlotDecl::Symbol { name, .. } if name == "NULL"))
        .expect("NULL slot");
    assert_eq!(null_slot.id, 150);
    assert!(matches!(&null_slot.decl, SlotDecl::Symbol { text, .. } if text.is_empty()));

    // unmapped preserved tokens reserve ids 151..=153
    let reserved: Vec<u32> = alloc
        .slots
        .iter()
        .filter(|s| matches!(s.decl, SlotDecl::Reserved { .. }))
        .map(|s| s.id)
        .collect();
    assert_eq!(reserved, [151, 152, 153]);

    let rendered = render_table(&alloc);
    assert!(rendered.contains("pub const STATIC_SYMBOLS_SIZE: usize = 171;"));
    assert!(rendered.contains("pub const LAST_OP_ID: u32 = 146;"));
}
