//! `IdentityContext`: estado explícito (contador, tabla, registro, opciones).
//!
//! Cada contexto es independiente; los tokens de objetos sólo son estables
//! dentro del contexto que los asignó. Clonar un contexto comparte su estado.
//! `IdentityContext::shared()` es la ranura global del proceso.

use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use super::builder::IdentityContextBuilder;
use crate::errors::IdentityError;
use crate::identity::key::compose;
use crate::identity::normalize::Normalizer;
use crate::identity::registry::{Generator, HelperRegistry, Predicate};
use crate::identity::table::ReferenceTable;
use crate::model::{CompositeKey, Token, Value};
use crate::options::IdentifyOptions;

static SHARED: OnceCell<IdentityContext> = OnceCell::new();

#[derive(Debug)]
pub(crate) struct ContextState {
    pub(crate) table: ReferenceTable,
    pub(crate) registry: HelperRegistry,
    pub(crate) options: IdentifyOptions,
    pub(crate) seeded: bool,
}

#[derive(Debug, Clone)]
pub struct IdentityContext {
    state: Arc<ContextState>,
}

impl IdentityContext {
    /// Contexto aislado con opciones por defecto y sin siembra.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> IdentityContextBuilder {
        IdentityContextBuilder::default()
    }

    pub(crate) fn from_state(state: ContextState) -> Self {
        Self { state: Arc::new(state) }
    }

    /// Contexto compartido del proceso; se crea con `IdentityContext::new`
    /// en el primer uso si nadie lo instaló antes.
    ///
    /// La ranura se fija una sola vez: si esta llamada es la primera, el
    /// contexto queda con opciones por defecto y la configuración que un
    /// llamador aplique después (p. ej. `idkey::context()` desde el entorno)
    /// se ignora. Quien necesite configurarlo debe usar
    /// [`shared_or_init`](Self::shared_or_init) o
    /// [`install_shared`](Self::install_shared) antes de cualquier uso.
    pub fn shared() -> &'static IdentityContext {
        SHARED.get_or_init(IdentityContext::new)
    }

    /// Igual que [`shared`](Self::shared), pero construye el contexto con
    /// `init` si todavía no existe.
    pub fn shared_or_init<F>(init: F) -> &'static IdentityContext
        where F: FnOnce() -> IdentityContext
    {
        SHARED.get_or_init(init)
    }

    /// Instala `ctx` como contexto compartido. Falla si ya se inicializó.
    pub fn install_shared(ctx: IdentityContext) -> Result<&'static IdentityContext, IdentityError> {
        SHARED.set(ctx).map_err(|_| IdentityError::SharedAlreadyInitialised)?;
        debug!("shared identity context installed");
        Ok(Self::shared())
    }

    /// `true` si ambos handles apuntan al mismo estado.
    pub fn same_state(&self, other: &IdentityContext) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    pub fn options(&self) -> &IdentifyOptions {
        &self.state.options
    }

    pub fn is_seeded(&self) -> bool {
        self.state.seeded
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.state.table
    }

    pub fn registry(&self) -> &HelperRegistry {
        &self.state.registry
    }

    fn normalizer<'a>(&'a self, options: &'a IdentifyOptions) -> Normalizer<'a> {
        Normalizer { table: &self.state.table, registry: &self.state.registry, options }
    }

    /// Token de un único valor con las opciones del contexto.
    pub fn normalize(&self, value: &Value) -> Token {
        self.normalize_with(value, &self.state.options)
    }

    pub fn normalize_with(&self, value: &Value, options: &IdentifyOptions) -> Token {
        self.normalizer(options).token(value)
    }

    /// Clave compuesta en orden de llamada.
    pub fn identify(&self, args: &[Value]) -> CompositeKey {
        self.build(args, false, &self.state.options)
    }

    /// Clave compuesta con los tokens ordenados.
    pub fn identify_sorted(&self, args: &[Value]) -> CompositeKey {
        self.build(args, true, &self.state.options)
    }

    pub fn identify_with(&self, args: &[Value], options: &IdentifyOptions) -> CompositeKey {
        self.build(args, false, options)
    }

    pub fn identify_sorted_with(&self, args: &[Value], options: &IdentifyOptions) -> CompositeKey {
        self.build(args, true, options)
    }

    fn build(&self, args: &[Value], sorted: bool, options: &IdentifyOptions) -> CompositeKey {
        let normalizer = self.normalizer(options);
        compose(args.iter().map(|arg| normalizer.token(arg)).collect(), sorted)
    }

    /// Registra un helper de identidad. Conservar `predicate` permite
    /// quitarlo después con [`unregister_identity_helper`](Self::unregister_identity_helper).
    pub fn register_identity_helper(&self, predicate: Predicate, generator: Generator) {
        self.state.registry.register(predicate, generator);
    }

    /// Versión genérica: envuelve los closures y devuelve el predicado
    /// registrado.
    pub fn add_identity_helper<P, G>(&self, predicate: P, generator: G) -> Predicate
        where P: Fn(&Value) -> bool + Send + Sync + 'static,
              G: Fn(&Value) -> Value + Send + Sync + 'static
    {
        let predicate: Predicate = Arc::new(predicate);
        self.register_identity_helper(Arc::clone(&predicate), Arc::new(generator));
        predicate
    }

    pub fn unregister_identity_helper(&self, predicate: &Predicate) -> bool {
        self.state.registry.unregister(predicate)
    }
}

impl Default for IdentityContext {
    fn default() -> Self {
        Self::new()
    }
}
