//! Valores tipo objeto: referencias compartidas comparadas por identidad.
//!
//! Cualquier tipo `Send + Sync + 'static` puede participar implementando
//! [`Object`]. La identidad de un [`ObjectRef`] es la dirección de su
//! asignación `Arc`, no su contenido.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use super::Value;

/// Resultado de `typeof` para valores tipo objeto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Object,
    Function,
}

impl ObjectKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ObjectKind::Object => "object",
            ObjectKind::Function => "function",
        }
    }
}

/// Contrato de un valor tipo objeto.
pub trait Object: Any + Send + Sync {
    /// Categoría reportada en el token (`object` por defecto).
    fn kind(&self) -> ObjectKind {
        ObjectKind::Object
    }

    /// Protocolo de identidad personalizada: si devuelve `Some`, ese valor
    /// se normaliza en lugar de este objeto.
    fn custom_identity(&self) -> Option<Value> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Referencia fuerte a un objeto.
#[derive(Clone)]
pub struct ObjectRef(Arc<dyn Object>);

impl ObjectRef {
    pub fn new<T: Object>(object: T) -> Self {
        Self(Arc::new(object))
    }

    pub fn from_arc(object: Arc<dyn Object>) -> Self {
        Self(object)
    }

    /// Dirección de la asignación; clave de identidad.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        self.addr() == other.addr()
    }

    pub fn kind(&self) -> ObjectKind {
        self.0.kind()
    }

    pub fn custom_identity(&self) -> Option<Value> {
        self.0.custom_identity()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Object>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    pub fn downgrade(&self) -> WeakObjectRef {
        WeakObjectRef(Arc::downgrade(&self.0))
    }

    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}@{:#x})", self.kind().type_name(), self.addr())
    }
}

/// Referencia débil: no mantiene vivo al objeto.
#[derive(Clone)]
pub struct WeakObjectRef(Weak<dyn Object>);

impl WeakObjectRef {
    pub fn upgrade(&self) -> Option<ObjectRef> {
        self.0.upgrade().map(ObjectRef)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl fmt::Debug for WeakObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakObjectRef(alive={})", self.is_alive())
    }
}
