//! Módulo de hashing para claves compuestas.

pub mod hash;

pub use hash::hash_str;
