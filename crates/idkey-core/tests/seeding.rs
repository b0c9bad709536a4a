//! Siembra determinista de tipos incorporados.

use idkey_core::{builtin, constants::BUILTIN_TYPE_NAMES, IdentityContext, Record, Value};

#[test]
fn seeded_contexts_agree_on_builtins() {
    let a = IdentityContext::builder().seed_builtins(true).build();
    // actividad previa en otro contexto no altera la secuencia
    let b = IdentityContext::builder().seed_builtins(true).build();
    for name in BUILTIN_TYPE_NAMES {
        let obj = Value::from(builtin(name).expect("builtin"));
        assert_eq!(a.normalize(&obj), b.normalize(&obj), "{name}");
    }
    assert_eq!(a.normalize(&Value::from(builtin("Object").unwrap())).as_str(), "function:9");
    assert!(a.is_seeded());
}

#[test]
fn seeded_context_continues_counting_after_builtins() {
    let ctx = IdentityContext::builder().seed_builtins(true).build();
    let obj = Value::object(Record::new());
    let expected = format!("1:object:{}", BUILTIN_TYPE_NAMES.len() + 1);
    assert_eq!(ctx.identify(&[obj]).as_str(), expected);
}

#[test]
fn unseeded_context_assigns_builtins_on_first_sight() {
    let ctx = IdentityContext::new();
    let obj = Value::object(Record::new());
    ctx.identify(&[obj]);
    let array = Value::from(builtin("Array").unwrap());
    assert_eq!(ctx.normalize(&array).as_str(), "function:2");
    assert!(!ctx.is_seeded());
}

#[test]
fn seeded_tables_report_live_entries() {
    let ctx = IdentityContext::builder().seed_builtins(true).build();
    assert_eq!(ctx.table().len(), BUILTIN_TYPE_NAMES.len());
    assert_eq!(ctx.table().prune(), 0);
}
