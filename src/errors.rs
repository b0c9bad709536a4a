use idkey_core::IdentityError;
use thiserror::Error;

/// Errores de configuración de la fachada.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Variable de entorno inválida {key}: {reason}")]
    Env { key: String, reason: String },
    #[error("Error de configuración: {0}")]
    Identity(#[from] IdentityError),
}
