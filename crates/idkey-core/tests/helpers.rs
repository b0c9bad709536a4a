//! Registro de helpers de identidad.

use std::any::Any;
use std::sync::Arc;

use idkey_core::{IdentityContext, Object, ObjectRef, Predicate, Record, Value};

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

impl Object for Point {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn point(x: i32, y: i32) -> Value {
    Value::object(Point { x, y })
}

fn point_coords(v: &Value) -> Option<(i32, i32)> {
    v.as_object().and_then(ObjectRef::downcast_ref::<Point>).map(|p| (p.x, p.y))
}

#[test]
fn helper_makes_structurally_equal_objects_collide() {
    let ctx = IdentityContext::new();
    assert_ne!(ctx.identify(&[point(1, 2)]), ctx.identify(&[point(1, 2)]));

    let is_point: Predicate = Arc::new(|v: &Value| point_coords(v).is_some());
    ctx.register_identity_helper(Arc::clone(&is_point),
                                 Arc::new(|v: &Value| {
                                     let (x, y) = point_coords(v).unwrap_or_default();
                                     Value::from(format!("{x},{y}"))
                                 }));

    assert_eq!(ctx.identify(&[point(1, 2)]), ctx.identify(&[point(1, 2)]));
    assert_ne!(ctx.identify(&[point(1, 2)]), ctx.identify(&[point(2, 1)]));
    assert_eq!(ctx.identify(&[point(1, 2)]).as_str(), "1:string:1,2");

    assert!(ctx.unregister_identity_helper(&is_point));
    assert_ne!(ctx.identify(&[point(1, 2)]), ctx.identify(&[point(1, 2)]));
}

#[test]
fn helpers_do_not_apply_to_primitives() {
    let ctx = IdentityContext::new();
    ctx.add_identity_helper(|_| true, |_| Value::from("hijacked"));
    assert_eq!(ctx.identify(&[Value::from("x")]).as_str(), "1:string:x");
    assert_eq!(ctx.identify(&[Value::object(Record::new())]).as_str(), "1:string:hijacked");
}

#[test]
fn helpers_take_precedence_over_custom_identity() {
    let ctx = IdentityContext::new();
    let r = Record::new();
    r.set_identity_hook(|| Value::from("from-hook"));
    let v = Value::object(r);
    assert_eq!(ctx.identify(&[v.clone()]).as_str(), "1:string:from-hook");
    ctx.add_identity_helper(|v| v.as_object().is_some(), |_| Value::from("from-helper"));
    assert_eq!(ctx.identify(&[v]).as_str(), "1:string:from-helper");
}

#[test]
fn generator_output_is_normalized_recursively() {
    let ctx = IdentityContext::new();
    let canonical = Record::new().into_ref();
    let target = canonical.clone();
    ctx.add_identity_helper(|v| v.as_object().is_some_and(|o| o.is::<Point>()), move |_| Value::from(&target));
    let t = ctx.normalize(&point(0, 0));
    assert_eq!(t, ctx.normalize(&Value::from(&canonical)));
    assert_eq!(t.category(), "object");
}

#[test]
fn unregistering_unknown_predicate_is_a_noop() {
    let ctx = IdentityContext::new();
    let p: Predicate = Arc::new(|_: &Value| true);
    assert!(!ctx.unregister_identity_helper(&p));
    assert!(ctx.registry().is_empty());
}

#[test]
fn helpers_are_per_context() {
    let a = IdentityContext::new();
    let b = IdentityContext::new();
    a.add_identity_helper(|_| true, |_| Value::from("a"));
    let v = Value::object(Record::new());
    assert_eq!(a.identify(&[v.clone()]).as_str(), "1:string:a");
    assert_eq!(b.identify(&[v]).as_str(), "1:object:1");
}
