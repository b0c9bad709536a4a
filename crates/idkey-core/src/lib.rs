//! idkey-core: claves de identidad deterministas para tuplas de valores
//! heterogéneos.
//!
//! Dos llamadas con argumentos iguales (por valor para primitivos, por
//! referencia para objetos) producen la misma clave; argumentos distintos
//! producen claves distintas. Pensado como clave de caché / memoización.
//!
//! ```
//! use idkey_core::{IdentityContext, Value};
//!
//! let ctx = IdentityContext::new();
//! assert_eq!(ctx.identify(&[Value::from(1)]).as_str(), "1:number:+1");
//! assert_eq!(ctx.identify(&[]).as_str(), "0");
//! ```
pub mod constants;
pub mod context;
pub mod errors;
pub mod hashing;
pub mod identity;
pub mod model;
pub mod options;

pub use context::{IdentityContext, IdentityContextBuilder};
pub use errors::IdentityError;
pub use identity::{builtin, compose, Generator, HelperRegistry, Predicate, ReferenceTable, CUSTOM_IDENTITY_KEY};
pub use model::{Boxed, CompositeKey, Object, ObjectKind, ObjectRef, Record, Symbol, Token, Value, WeakObjectRef};
pub use options::{parse_flag, IdentifyOptions};

// Re-export para construir valores `Value::BigInt` sin depender directamente
// de num-bigint.
pub use num_bigint::BigInt;
