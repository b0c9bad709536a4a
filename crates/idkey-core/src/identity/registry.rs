//! Registro de helpers de identidad.
//!
//! Lista ordenada de pares (predicado, generador). El primer predicado que
//! acepta un valor decide qué valor representativo se normaliza en su lugar.
//! `resolve` itera una instantánea inmutable: los callbacks pueden registrar o
//! quitar helpers sin bloquearse.

use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::model::Value;

pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;
pub type Generator = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

#[derive(Clone)]
struct IdentityHelper {
    predicate: Predicate,
    generator: Generator,
}

#[derive(Default)]
pub struct HelperRegistry {
    helpers: RwLock<Arc<Vec<IdentityHelper>>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un helper al final; no comprueba duplicados.
    pub fn register(&self, predicate: Predicate, generator: Generator) {
        let mut guard = self.helpers.write();
        Arc::make_mut(&mut guard).push(IdentityHelper { predicate, generator });
        debug!("identity helper registered ({} total)", guard.len());
    }

    /// Quita el primer helper cuyo predicado es exactamente `predicate`
    /// (mismo `Arc`). Devuelve `false` si no había ninguno.
    pub fn unregister(&self, predicate: &Predicate) -> bool {
        let mut guard = self.helpers.write();
        let Some(index) = guard.iter().position(|h| Arc::ptr_eq(&h.predicate, predicate)) else {
            return false;
        };
        Arc::make_mut(&mut guard).remove(index);
        debug!("identity helper removed ({} left)", guard.len());
        true
    }

    /// Generador del primer helper cuyo predicado acepta `value`.
    pub fn resolve(&self, value: &Value) -> Option<Generator> {
        let snapshot = Arc::clone(&self.helpers.read());
        snapshot.iter().find(|h| (h.predicate)(value)).map(|h| Arc::clone(&h.generator))
    }

    pub fn len(&self) -> usize {
        self.helpers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.read().is_empty()
    }
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry").field("helpers", &self.len()).finish()
    }
}
