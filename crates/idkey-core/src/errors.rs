//! Errores del núcleo de identidad.
//!
//! La normalización en sí no falla: estos errores sólo aparecen al interpretar
//! opciones o al instalar el contexto compartido.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum IdentityError {
    #[error("invalid value for option {key}: {value:?}")] InvalidOption { key: String, value: String },
    #[error("shared identity context already initialised")] SharedAlreadyInitialised,
}
