//! Pruebas de la fachada sobre el contexto compartido del proceso.
//!
//! Todas las pruebas de este binario comparten el mismo contexto, por eso no
//! se comparan contadores absolutos de objetos.

use std::sync::Arc;

use idkey::{
    identify, identify_sorted, identify_with, register_identity_helper, unregister_identity_helper, BigInt,
    IdentifyOptions, Predicate, Record, Symbol, Value, CUSTOM_IDENTITY_KEY,
};

#[test]
fn primitives_through_the_facade() {
    assert_eq!(identify(&[Value::from(1)]).as_str(), "1:number:+1");
    assert_eq!(identify(&[Value::from(-1)]).as_str(), "1:number:-1");
    assert_eq!(identify(&[Value::from(BigInt::from(0))]).as_str(), "1:bigint:+0");
    assert_eq!(identify(&[]).as_str(), "0");
    assert_ne!(identify(&[Value::from(0.0)]), identify(&[Value::from(-0.0)]));
}

#[test]
fn macros_accept_mixed_arguments() {
    let obj = Record::new().into_ref();
    let a = idkey::identify!(1, "x", true, &obj);
    let b = idkey::identify!(1, "x", true, &obj);
    assert_eq!(a, b);
    assert_eq!(a.arity(), 4);
    assert_eq!(idkey::identify!().as_str(), "0");
    assert_eq!(idkey::identify_sorted!("b", "a"), idkey::identify_sorted!("a", "b"));
    assert_eq!(idkey::identify_sorted!("b", "a"), identify_sorted(&[Value::from("a"), Value::from("b")]));
}

#[test]
fn objects_are_identified_by_reference() {
    let a = Value::object(Record::new());
    let b = Value::object(Record::new());
    assert_eq!(identify(&[a.clone()]), identify(&[a.clone()]));
    assert_ne!(identify(&[a]), identify(&[b]));
}

#[test]
fn custom_identity_via_well_known_symbol() {
    let a = Record::new().into_ref();
    let b = Record::new();
    let target = a.clone();
    b.set_symbol_hook(&CUSTOM_IDENTITY_KEY, Arc::new(move || Value::from(&target)));
    let b = Value::object(b);
    assert_eq!(identify(&[Value::from(&a)]), identify(&[b.clone()]));

    let off = IdentifyOptions::without_custom_identity();
    assert_ne!(identify_with(&[Value::from(&a)], &off), identify_with(&[b], &off));
}

#[derive(Debug)]
struct Marker;

impl idkey::Object for Marker {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[test]
fn global_helpers_register_and_unregister() {
    let is_marker: Predicate = Arc::new(|v: &Value| v.as_object().is_some_and(|o| o.is::<Marker>()));
    register_identity_helper(Arc::clone(&is_marker), Arc::new(|_: &Value| Value::from(Symbol::for_key("marker"))));

    let m1 = Value::object(Marker);
    let m2 = Value::object(Marker);
    assert_eq!(identify(&[m1.clone()]), identify(&[m2.clone()]));
    assert_eq!(identify(&[m1.clone()]).as_str(), "1:symbol:Symbol(marker)");

    assert!(unregister_identity_helper(&is_marker));
    assert!(!unregister_identity_helper(&is_marker));
    assert_ne!(identify(&[m1]), identify(&[m2]));
}

#[test]
fn keys_have_compact_digests() {
    let key = identify(&[Value::from("digest me")]);
    assert_eq!(key.digest().len(), 64);
    assert_eq!(key.digest(), identify(&[Value::from("digest me")]).digest());
    assert_ne!(key.digest(), identify(&[Value::from("digest you")]).digest());
}

#[test]
fn composite_keys_serialize_as_strings() {
    let key = identify(&[Value::from(2)]);
    assert_eq!(serde_json::to_string(&key).unwrap(), "\"1:number:+2\"");
}
