//! Opciones por llamada de la normalización.

use serde::{Deserialize, Serialize};

use crate::errors::IdentityError;

/// Configuración aplicada a una llamada de `identify` y a todas sus
/// normalizaciones anidadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifyOptions {
    /// Si es `false`, el protocolo de identidad personalizada se ignora por
    /// completo y los objetos caen directamente en la tabla de referencias.
    pub custom_identity: bool,
}

impl IdentifyOptions {
    pub const fn new() -> Self {
        Self { custom_identity: true }
    }

    pub const fn without_custom_identity() -> Self {
        Self { custom_identity: false }
    }
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpreta un flag booleano textual (`1/0`, `true/false`, `yes/no`,
/// `on/off`, sin distinguir mayúsculas).
pub fn parse_flag(key: &str, raw: &str) -> Result<bool, IdentityError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(IdentityError::InvalidOption { key: key.to_string(), value: raw.to_string() }),
    }
}
