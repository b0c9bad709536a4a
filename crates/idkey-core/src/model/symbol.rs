//! Símbolos: átomos con descripción, opcionalmente registrados en un
//! registro global (`Symbol::for_key`).
//!
//! Dos símbolos son iguales sólo si son la misma instancia. `for_key` devuelve
//! siempre la misma instancia para la misma clave dentro del proceso.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

static GLOBAL_SYMBOLS: Lazy<DashMap<String, Symbol>> = Lazy::new(DashMap::new);

#[derive(Debug)]
struct SymbolInner {
    description: Option<String>,
    global: bool,
}

#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

impl Symbol {
    /// Crea un símbolo único (no registrado) con descripción.
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(SymbolInner { description: Some(description.into()), global: false }))
    }

    /// Crea un símbolo único sin descripción.
    pub fn anonymous() -> Self {
        Self(Arc::new(SymbolInner { description: None, global: false }))
    }

    /// Devuelve el símbolo global asociado a `key`, creándolo la primera vez.
    pub fn for_key(key: &str) -> Self {
        if let Some(existing) = GLOBAL_SYMBOLS.get(key) {
            return existing.value().clone();
        }
        GLOBAL_SYMBOLS.entry(key.to_string())
                      .or_insert_with(|| Self(Arc::new(SymbolInner { description: Some(key.to_string()), global: true })))
                      .value()
                      .clone()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// `true` si el símbolo proviene del registro global.
    pub fn is_global(&self) -> bool {
        self.0.global
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}
