//! Modelos neutrales (Value, Symbol, ObjectRef, Token, ...)

pub mod object;
pub mod record;
pub mod symbol;
pub mod token;
pub mod value;

pub use object::{Object, ObjectKind, ObjectRef, WeakObjectRef};
pub use record::{Record, SymbolHook};
pub use symbol::Symbol;
pub use token::{CompositeKey, Token};
pub use value::{Boxed, Value};
