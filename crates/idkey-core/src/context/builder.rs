//! Builder para `IdentityContext`.
//!
//! ```ignore
//! let ctx = IdentityContext::builder()
//!     .custom_identity(false)
//!     .seed_builtins(true)
//!     .build();
//! ```

use super::core::{ContextState, IdentityContext};
use crate::identity::builtins;
use crate::identity::registry::HelperRegistry;
use crate::identity::table::ReferenceTable;
use crate::options::IdentifyOptions;

#[derive(Debug, Clone, Default)]
pub struct IdentityContextBuilder {
    options: IdentifyOptions,
    seed_builtins: bool,
}

impl IdentityContextBuilder {
    /// Opciones por defecto de las llamadas sin opciones explícitas.
    #[inline]
    pub fn options(mut self, options: IdentifyOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn custom_identity(mut self, enabled: bool) -> Self {
        self.options.custom_identity = enabled;
        self
    }

    /// Siembra la tabla con los tipos incorporados antes de cualquier otro
    /// objeto.
    #[inline]
    pub fn seed_builtins(mut self, enabled: bool) -> Self {
        self.seed_builtins = enabled;
        self
    }

    pub fn build(self) -> IdentityContext {
        let table = ReferenceTable::new();
        if self.seed_builtins {
            builtins::seed(&table);
        }
        IdentityContext::from_state(ContextState { table,
                                                   registry: HelperRegistry::new(),
                                                   options: self.options,
                                                   seeded: self.seed_builtins })
    }
}
