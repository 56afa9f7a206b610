//! Cross-cutting helpers (logging must be declared first for macro export)

#[macro_use]
pub mod log;
pub mod random;
