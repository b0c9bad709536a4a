//! Contexto de identidad y su builder.

pub mod builder;
pub mod core;

pub use builder::IdentityContextBuilder;
pub use self::core::IdentityContext;
