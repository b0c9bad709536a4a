//! Configuración del contexto compartido.
//! Carga variables de entorno (.env una sola vez) y construye el
//! `IdentityContext` correspondiente.
//!
//! | Variable | Por defecto | Efecto |
//! |----------|-------------|--------|
//! | `IDKEY_CUSTOM_IDENTITY` | `true` | habilita el protocolo de identidad personalizada |
//! | `IDKEY_SEED_BUILTINS` | `false` | siembra la tabla con los tipos incorporados |
use std::env;

use dotenvy::dotenv;
use idkey_core::{parse_flag, IdentifyOptions, IdentityContext};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const ENV_CUSTOM_IDENTITY: &str = "IDKEY_CUSTOM_IDENTITY";
pub const ENV_SEED_BUILTINS: &str = "IDKEY_SEED_BUILTINS";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración del contexto compartido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Valor por defecto de `IdentifyOptions::custom_identity`.
    pub custom_identity: bool,
    /// Sembrar la tabla de referencias con los tipos incorporados.
    pub seed_builtins: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { custom_identity: true, seed_builtins: false }
    }
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| match env::var(key) {
            Ok(v) => Ok(Some(v)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env { key: key.to_string(), reason: e.to_string() }),
        })
    }

    /// Construye la configuración consultando `lookup` por cada variable;
    /// las ausentes toman el valor por defecto.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
        where F: FnMut(&str) -> Result<Option<String>, ConfigError>
    {
        let defaults = Self::default();
        let custom_identity = match lookup(ENV_CUSTOM_IDENTITY)? {
            Some(raw) => parse_flag(ENV_CUSTOM_IDENTITY, &raw)?,
            None => defaults.custom_identity,
        };
        let seed_builtins = match lookup(ENV_SEED_BUILTINS)? {
            Some(raw) => parse_flag(ENV_SEED_BUILTINS, &raw)?,
            None => defaults.seed_builtins,
        };
        let cfg = Self { custom_identity, seed_builtins };
        debug!("idkey config: {cfg:?}");
        Ok(cfg)
    }

    pub fn options(&self) -> IdentifyOptions {
        IdentifyOptions { custom_identity: self.custom_identity }
    }

    pub fn build_context(&self) -> IdentityContext {
        IdentityContext::builder().options(self.options()).seed_builtins(self.seed_builtins).build()
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
