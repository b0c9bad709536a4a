//! Constantes del núcleo de identidad.
//!
//! Los valores de este módulo forman parte del texto de los tokens o de la
//! secuencia de contadores asignada a objetos conocidos; cambiarlos altera las
//! claves generadas.

/// Descripción del símbolo global bajo el cual un objeto expone su
/// identidad personalizada.
pub const CUSTOM_IDENTITY_DESCRIPTION: &str = "@@idkeyUniqueID";

/// Separador entre categoría y payload dentro de un token, y entre los
/// fragmentos de una clave compuesta.
pub const SEPARATOR: char = ':';

/// Cada cuántas asignaciones nuevas la tabla de referencias purga entradas
/// cuyo objeto ya fue liberado.
pub const PRUNE_INTERVAL: u64 = 4096;

/// Tipos incorporados sembrados en la tabla (orden lexicográfico fijo).
///
/// El orden determina el contador de cada uno: un contexto sembrado siempre
/// asigna `function:1` a `Array`, `function:2` a `BigInt`, etc.
pub const BUILTIN_TYPE_NAMES: [&str; 16] = [
    "Array", "BigInt", "Boolean", "Date", "Error", "Function", "Map", "Number", "Object", "Promise", "RegExp", "Set",
    "String", "Symbol", "WeakMap", "WeakSet",
];
