//! `Record`: objeto dinámico con campos por nombre y ranuras por símbolo.
//!
//! Es la forma de construir objetos ad hoc (o "funciones") sin declarar un
//! tipo Rust. Las ranuras indexadas por símbolo guardan funciones sin
//! argumentos; la ranura de [`CUSTOM_IDENTITY_KEY`](crate::CUSTOM_IDENTITY_KEY)
//! implementa el protocolo de identidad personalizada y puede cambiarse en
//! cualquier momento.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{Object, ObjectKind, ObjectRef, Symbol, Value};
use crate::identity::protocol::CUSTOM_IDENTITY_KEY;

/// Función sin argumentos almacenada en una ranura de símbolo.
pub type SymbolHook = Arc<dyn Fn() -> Value + Send + Sync>;

pub struct Record {
    kind: ObjectKind,
    label: Option<String>,
    fields: RwLock<IndexMap<String, Value>>,
    hooks: RwLock<HashMap<Symbol, SymbolHook>>,
}

impl Record {
    /// Objeto vacío (`typeof` = `object`).
    pub fn new() -> Self {
        Self::with_kind(ObjectKind::Object, None)
    }

    /// Objeto con `typeof` = `function`. La etiqueta es sólo informativa.
    pub fn function(label: impl Into<String>) -> Self {
        Self::with_kind(ObjectKind::Function, Some(label.into()))
    }

    fn with_kind(kind: ObjectKind, label: Option<String>) -> Self {
        Self { kind, label, fields: RwLock::new(IndexMap::new()), hooks: RwLock::new(HashMap::new()) }
    }

    pub fn from_fields<I, K>(fields: I) -> Self
        where I: IntoIterator<Item = (K, Value)>,
              K: Into<String>
    {
        let record = Self::new();
        {
            let mut guard = record.fields.write();
            for (k, v) in fields {
                guard.insert(k.into(), v);
            }
        }
        record
    }

    /// Atajo: envuelve el record en una referencia compartida.
    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.write().insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.fields.read().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.fields.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    pub fn set_symbol_hook(&self, key: &Symbol, hook: SymbolHook) {
        self.hooks.write().insert(key.clone(), hook);
    }

    pub fn remove_symbol_hook(&self, key: &Symbol) -> Option<SymbolHook> {
        self.hooks.write().remove(key)
    }

    pub fn symbol_hook(&self, key: &Symbol) -> Option<SymbolHook> {
        self.hooks.read().get(key).cloned()
    }

    /// Instala el hook de identidad personalizada.
    pub fn set_identity_hook<F>(&self, hook: F)
        where F: Fn() -> Value + Send + Sync + 'static
    {
        self.set_symbol_hook(&CUSTOM_IDENTITY_KEY, Arc::new(hook));
    }

    pub fn clear_identity_hook(&self) {
        self.remove_symbol_hook(&CUSTOM_IDENTITY_KEY);
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for Record {
    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn custom_identity(&self) -> Option<Value> {
        // el lock se suelta antes de invocar el hook
        let hook = self.symbol_hook(&CUSTOM_IDENTITY_KEY)?;
        Some(hook())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
         .field("kind", &self.kind)
         .field("label", &self.label)
         .field("fields", &self.keys())
         .finish()
    }
}
