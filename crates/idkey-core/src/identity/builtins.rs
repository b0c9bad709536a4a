//! Tipos incorporados sembrados de forma determinista.
//!
//! Cada tipo es un singleton del proceso (`typeof` = `function`). Sembrar un
//! contexto los registra en un orden fijo, así que dos contextos sembrados
//! que no comparten nada más asignan exactamente los mismos tokens a estos
//! objetos.

use std::any::Any;

use log::debug;
use once_cell::sync::Lazy;

use super::table::ReferenceTable;
use crate::constants::BUILTIN_TYPE_NAMES;
use crate::model::{Object, ObjectKind, ObjectRef};

/// Marcador de un tipo incorporado.
#[derive(Debug)]
pub struct BuiltinType {
    name: &'static str,
}

impl BuiltinType {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Object for BuiltinType {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Function
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

static BUILTINS: Lazy<Vec<ObjectRef>> =
    Lazy::new(|| BUILTIN_TYPE_NAMES.iter().map(|&name| ObjectRef::new(BuiltinType { name })).collect());

/// Referencia al tipo incorporado `name`, si existe.
pub fn builtin(name: &str) -> Option<ObjectRef> {
    BUILTINS.iter()
            .find(|o| o.downcast_ref::<BuiltinType>().is_some_and(|b| b.name == name))
            .cloned()
}

/// Todos los tipos incorporados, en orden de siembra.
pub fn builtins() -> &'static [ObjectRef] {
    &BUILTINS
}

pub(crate) fn seed(table: &ReferenceTable) {
    for object in BUILTINS.iter() {
        table.assign_or_get(object);
    }
    debug!("reference table seeded with {} builtin types", BUILTINS.len());
}
