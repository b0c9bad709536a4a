//! Protocolo de identidad personalizada.
//!
//! Un objeto puede exponer, bajo el símbolo global [`CUSTOM_IDENTITY_KEY`],
//! una función sin argumentos que devuelve el valor a normalizar en su lugar.
//! El conjunto de visitados evita ciclos: un objeto ya visitado en la llamada
//! actual no vuelve a consultar su hook y cae en la tabla de referencias.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::constants::CUSTOM_IDENTITY_DESCRIPTION;
use crate::model::{ObjectRef, Symbol, Value};

/// Símbolo global bajo el cual los objetos exponen su identidad
/// personalizada.
pub static CUSTOM_IDENTITY_KEY: Lazy<Symbol> = Lazy::new(|| Symbol::for_key(CUSTOM_IDENTITY_DESCRIPTION));

/// Objetos (por dirección) resueltos vía protocolo durante una llamada.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet(HashSet<usize>);

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contains(&self, object: &ObjectRef) -> bool {
        self.0.contains(&object.addr())
    }

    pub(crate) fn insert(&mut self, object: &ObjectRef) -> bool {
        self.0.insert(object.addr())
    }
}

/// Valor sustituto de `object`, o `None` si no expone el protocolo o ya fue
/// visitado. Marca el objeto como visitado cuando el hook responde.
pub(crate) fn substitute(object: &ObjectRef, visited: &mut VisitedSet) -> Option<Value> {
    if visited.contains(object) {
        return None;
    }
    let replacement = object.custom_identity()?;
    visited.insert(object);
    Some(replacement)
}
