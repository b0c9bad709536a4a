//! Núcleo de identidad: normalizador, tabla de referencias, registro de
//! helpers, protocolo de identidad personalizada y claves compuestas.

pub mod builtins;
pub mod key;
pub(crate) mod normalize;
pub mod protocol;
pub mod registry;
pub mod table;

pub use builtins::{builtin, builtins, BuiltinType};
pub use key::compose;
pub use protocol::CUSTOM_IDENTITY_KEY;
pub use registry::{Generator, HelperRegistry, Predicate};
pub use table::ReferenceTable;
