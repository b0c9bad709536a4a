//! Modelo de valores de entrada.
//!
//! | Categoría | Variante |
//! |-----------|----------|
//! | nullish   | `Undefined`, `Null` |
//! | boolean   | `Bool` |
//! | number    | `Number(f64)` (incluye `-0`, `NaN`, `±Infinity`) |
//! | bigint    | `BigInt` (precisión arbitraria) |
//! | string    | `String` |
//! | symbol    | `Symbol` |
//! | primitivo envuelto | `Boxed` |
//! | objeto    | `Object` |

use num_bigint::BigInt;

use super::{Object, ObjectKind, ObjectRef, Record, Symbol};

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Boxed(Boxed),
    Object(ObjectRef),
}

/// Primitivo envuelto en un objeto (Number/String/Boolean). Se normaliza
/// igual que el primitivo que contiene.
#[derive(Debug, Clone, PartialEq)]
pub enum Boxed {
    Number(f64),
    String(String),
    Bool(bool),
}

impl Boxed {
    pub fn value_of(&self) -> Value {
        match self {
            Boxed::Number(n) => Value::Number(*n),
            Boxed::String(s) => Value::String(s.clone()),
            Boxed::Bool(b) => Value::Bool(*b),
        }
    }
}

impl Value {
    pub fn object<T: Object>(object: T) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    /// Nombre de tipo tal como lo reporta `typeof` (`null` es `object`).
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Boxed(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(o) => o.kind().type_name(),
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Object(o) if o.kind() == ObjectKind::Function)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Value::Symbol(v)
    }
}

impl From<Boxed> for Value {
    fn from(v: Boxed) -> Self {
        Value::Boxed(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl From<&ObjectRef> for Value {
    fn from(v: &ObjectRef) -> Self {
        Value::Object(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Documentos JSON: escalares como primitivos; objetos y arrays como
/// `Record` nuevos (cada conversión crea referencias distintas).
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) if i.unsigned_abs() > (1u64 << 53) => Value::BigInt(BigInt::from(i)),
                (None, Some(u)) if u > (1u64 << 53) => Value::BigInt(BigInt::from(u)),
                _ => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                let fields = items.into_iter().enumerate().map(|(i, item)| (i.to_string(), Value::from(item)));
                Value::object(Record::from_fields(fields))
            }
            serde_json::Value::Object(map) => {
                Value::object(Record::from_fields(map.into_iter().map(|(k, item)| (k, Value::from(item)))))
            }
        }
    }
}
