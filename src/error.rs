// src/error.rs
// ============================================================================
// ERRORES - Los dos únicos fallos posibles, ambos en construcción
// ============================================================================

use thiserror::Error;

use crate::symbols::{Symbol, MAX_VALUE, MIN_VALUE};

/// Regla concreta que rechazó la entrada
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Cadena vacía (o solo espacios)
    Empty,
    /// Un "0" solitario
    Zero,
    /// Caracteres que no son ni dígitos ni símbolos, o mezcla de ambos
    InvalidCharacters,
    /// El símbolo en `position` vale menos que el siguiente
    OutOfOrder { position: usize },
    /// Un símbolo supera su límite de repeticiones
    TooManyRepeats { symbol: Symbol, count: usize, limit: usize },
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::Zero => write!(f, "zero has no representation"),
            Self::InvalidCharacters => write!(f, "not a decimal or Elbonian numeral"),
            Self::OutOfOrder { position } => {
                write!(f, "symbol at position {} is smaller than its successor", position)
            }
            Self::TooManyRepeats { symbol, count, limit } => {
                write!(f, "'{}' appears {} times (limit {})", symbol, count, limit)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("malformed number '{input}': {reason}")]
    MalformedNumber { input: String, reason: Malformed },

    #[error("value '{input}' is out of bounds ({}..={})", MIN_VALUE, MAX_VALUE)]
    ValueOutOfBounds { input: String },
}

impl ConvertError {
    pub fn malformed(input: impl Into<String>, reason: Malformed) -> Self {
        Self::MalformedNumber { input: input.into(), reason }
    }

    pub fn out_of_bounds(input: impl Into<String>) -> Self {
        Self::ValueOutOfBounds { input: input.into() }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedNumber { .. })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::ValueOutOfBounds { .. })
    }
}
