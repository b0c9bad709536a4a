//! Tokens (`"<categoría>:<payload>"`) y claves compuestas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SEPARATOR;
use crate::hashing::hash_str;

/// Representación canónica de la identidad de un valor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(category: &str, payload: impl fmt::Display) -> Self {
        Token(format!("{category}{SEPARATOR}{payload}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Categoría (texto anterior al primer separador).
    pub fn category(&self) -> &str {
        self.0.split_once(SEPARATOR).map_or(self.0.as_str(), |(category, _)| category)
    }

    pub fn payload(&self) -> &str {
        self.0.split_once(SEPARATOR).map_or("", |(_, payload)| payload)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Clave compuesta: `count:token_0:...:token_{n-1}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub(crate) fn from_string(raw: String) -> Self {
        CompositeKey(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Número de argumentos codificado al inicio de la clave.
    pub fn arity(&self) -> usize {
        self.0.split(SEPARATOR).next().and_then(|n| n.parse().ok()).unwrap_or(0)
    }

    /// Digest blake3 (hex, 64 caracteres) de la clave, para usos que
    /// requieren longitud fija.
    pub fn digest(&self) -> String {
        hash_str(&self.0)
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompositeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CompositeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CompositeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<CompositeKey> for String {
    fn from(key: CompositeKey) -> Self {
        key.0
    }
}
