//! idkey
//!
//! Fachada de `idkey-core` sobre el contexto compartido del proceso:
//! - `identify` / `identify_sorted` generan claves compuestas;
//! - `register_identity_helper` / `unregister_identity_helper` administran
//!   helpers globales;
//! - `CUSTOM_IDENTITY_KEY` es el símbolo del protocolo de identidad
//!   personalizada;
//! - `config` lee la configuración del contexto compartido desde el entorno.
//!
//! ```
//! use idkey::{identify, Value};
//!
//! assert_eq!(identify(&[Value::from(1)]).as_str(), "1:number:+1");
//! assert_eq!(idkey::identify!(-1).as_str(), "1:number:-1");
//! assert_eq!(idkey::identify!().as_str(), "0");
//! ```

pub mod config;
pub mod errors;
mod macros;

use log::warn;

pub use idkey_core::{
    BigInt, Boxed, CompositeKey, Generator, IdentifyOptions, IdentityContext, Object, ObjectKind, ObjectRef, Predicate,
    Record, Symbol, Token, Value, CUSTOM_IDENTITY_KEY,
};

pub use config::IdentityConfig;
pub use errors::ConfigError;

/// Contexto compartido. Si nadie llamó a [`init`], se construye en el primer
/// uso con la configuración del entorno (o la de por defecto si es inválida).
///
/// Es el mismo contexto que `IdentityContext::shared()`; la configuración del
/// entorno sólo se aplica si esta función (o [`init`]) llega primero.
pub fn context() -> &'static IdentityContext {
    IdentityContext::shared_or_init(|| match IdentityConfig::from_env() {
        Ok(cfg) => cfg.build_context(),
        Err(e) => {
            warn!("idkey: ignoring invalid configuration ({e}); using defaults");
            IdentityConfig::default().build_context()
        }
    })
}

/// Inicializa el contexto compartido desde el entorno. Falla si el entorno
/// es inválido o si el contexto ya estaba inicializado.
pub fn init() -> Result<&'static IdentityContext, ConfigError> {
    init_with(IdentityConfig::from_env()?)
}

pub fn init_with(config: IdentityConfig) -> Result<&'static IdentityContext, ConfigError> {
    Ok(IdentityContext::install_shared(config.build_context())?)
}

/// Clave compuesta de `args` en orden de llamada.
pub fn identify(args: &[Value]) -> CompositeKey {
    context().identify(args)
}

/// Clave compuesta de `args` con los tokens ordenados.
pub fn identify_sorted(args: &[Value]) -> CompositeKey {
    context().identify_sorted(args)
}

pub fn identify_with(args: &[Value], options: &IdentifyOptions) -> CompositeKey {
    context().identify_with(args, options)
}

pub fn identify_sorted_with(args: &[Value], options: &IdentifyOptions) -> CompositeKey {
    context().identify_sorted_with(args, options)
}

pub fn register_identity_helper(predicate: Predicate, generator: Generator) {
    context().register_identity_helper(predicate, generator);
}

pub fn unregister_identity_helper(predicate: &Predicate) -> bool {
    context().unregister_identity_helper(predicate)
}
