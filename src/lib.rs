// src/lib.rs
// ============================================================================
// ELBONIAN-CONVERT - Conversor Arabic ⇄ Elbonian
// ============================================================================

pub mod symbols;
pub mod error;
pub mod validate;
pub mod converter;

// Re-exports principales
pub use converter::{Converter, ConversionReport};
pub use error::{ConvertError, Malformed};
pub use symbols::{Symbol, SymbolClass, SYMBOLS, MAX_VALUE, MIN_VALUE};
pub use validate::{diagnose, NumberForm, ValidationReport};
