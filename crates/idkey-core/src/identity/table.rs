//! Tabla de identidad por referencia.
//!
//! Asocia cada objeto (por dirección de asignación) con el token que recibió
//! la primera vez que se vio. Sólo guarda referencias débiles. Mientras una
//! entrada exista, su `Weak` mantiene reservada la asignación, de modo que
//! ninguna otra referencia viva puede ocupar la misma dirección: una entrada
//! encontrada para un objeto vivo siempre es la suya.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::trace;

use crate::constants::PRUNE_INTERVAL;
use crate::model::{ObjectRef, Token, WeakObjectRef};

#[derive(Debug)]
struct TableEntry {
    target: WeakObjectRef,
    token: Token,
}

#[derive(Debug, Default)]
pub struct ReferenceTable {
    entries: DashMap<usize, TableEntry>,
    counter: AtomicU64,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve el token existente o asigna `<typeof>:<n>` con el siguiente
    /// valor del contador. Reclamar el contador e insertar ocurre bajo el
    /// lock del shard de la entrada; bajo ese lock no se llama código del
    /// objeto (`kind()` se resuelve antes).
    pub fn assign_or_get(&self, object: &ObjectRef) -> Token {
        let type_name = object.kind().type_name();
        let (id, token) = match self.entries.entry(object.addr()) {
            Entry::Occupied(e) => return e.get().token.clone(),
            Entry::Vacant(e) => {
                let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
                let token = Token::new(type_name, id);
                e.insert(TableEntry { target: object.downgrade(), token: token.clone() });
                (id, token)
            }
        };
        trace!("reference table: assigned {token} to {object:?}");
        if id % PRUNE_INTERVAL == 0 {
            self.prune();
        }
        token
    }

    /// Token ya asignado, sin asignar uno nuevo.
    pub fn lookup(&self, object: &ObjectRef) -> Option<Token> {
        self.entries.get(&object.addr()).map(|e| e.token.clone())
    }

    /// Elimina entradas cuyo objeto ya fue liberado; devuelve cuántas.
    pub fn prune(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.target.is_alive());
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            trace!("reference table: pruned {removed} dead entries");
        }
        removed
    }

    /// Número de entradas cuyo objeto sigue vivo.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.target.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Último valor emitido por el contador (0 si nunca se asignó).
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Arc;

    use super::*;
    use crate::model::{Object, ObjectKind, Record};

    #[test]
    fn same_reference_same_token() {
        let table = ReferenceTable::new();
        let a = Record::new().into_ref();
        let first = table.assign_or_get(&a);
        assert_eq!(first.as_str(), "object:1");
        assert_eq!(table.assign_or_get(&a.clone()), first);
        assert_eq!(table.counter(), 1);
    }

    #[test]
    fn distinct_references_distinct_tokens() {
        let table = ReferenceTable::new();
        let a = Record::new().into_ref();
        let f = Record::function("f").into_ref();
        assert_eq!(table.assign_or_get(&a).as_str(), "object:1");
        assert_eq!(table.assign_or_get(&f).as_str(), "function:2");
    }

    #[test]
    fn lookup_does_not_assign() {
        let table = ReferenceTable::new();
        let a = Record::new().into_ref();
        assert!(table.lookup(&a).is_none());
        let t = table.assign_or_get(&a);
        assert_eq!(table.lookup(&a), Some(t));
        assert_eq!(table.counter(), 1);
    }

    #[test]
    fn dropped_objects_are_not_kept_alive() {
        let table = ReferenceTable::new();
        let a = Record::new().into_ref();
        let weak = a.downgrade();
        table.assign_or_get(&a);
        assert_eq!(table.len(), 1);
        drop(a);
        assert!(!weak.is_alive());
        assert_eq!(table.len(), 0);
        assert_eq!(table.prune(), 1);
        assert!(table.is_empty());
    }

    /// `kind()` que vuelve a entrar en la misma tabla (recorre todos los shards).
    struct Reentrant {
        table: Arc<ReferenceTable>,
    }

    impl Object for Reentrant {
        fn kind(&self) -> ObjectKind {
            self.table.prune();
            ObjectKind::Function
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn kind_may_reenter_the_table() {
        let table = Arc::new(ReferenceTable::new());
        let object = ObjectRef::new(Reentrant { table: Arc::clone(&table) });
        let token = table.assign_or_get(&object);
        assert_eq!(token.as_str(), "function:1");
        assert_eq!(table.assign_or_get(&object), token);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn counter_keeps_growing_after_prune() {
        let table = ReferenceTable::new();
        let a = Record::new().into_ref();
        table.assign_or_get(&a);
        drop(a);
        table.prune();
        let b = Record::new().into_ref();
        assert_eq!(table.assign_or_get(&b).as_str(), "object:2");
    }
}
