// src/validate.rs
// ============================================================================
// VALIDATOR - Clasificación y reglas de buena formación
// ============================================================================
//
// Reglas para la forma simbólica:
//   1. Orden no creciente: valor(actual) >= valor(siguiente)
//   2. Repeticiones: M, C, X, I hasta 3 veces; D, e, L, m, V, w una vez
//
// No hay notación sustractiva con dos símbolos ("IV" es inválido):
// los valores 4, 40 y 400 tienen símbolo propio (w, m, e).
//
// ============================================================================

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Malformed;
use crate::symbols::{self, Symbol, SYMBOLS, MAX_VALUE, MIN_VALUE};

/// Forma en la que llegó el número
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberForm {
    /// Dígitos base 10 ("arabic")
    Decimal,
    /// Símbolos elbonianos
    Symbolic,
}

impl NumberForm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decimal => "arabic",
            Self::Symbolic => "elbonian",
        }
    }
}

impl std::fmt::Display for NumberForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn symbolic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let class: String = SYMBOLS.iter().map(|s| s.glyph()).collect();
        Regex::new(&format!("^[{}]+$", class)).expect("symbol class is a valid regex")
    })
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[0-9]+$").expect("digit class is a valid regex"))
}

/// Clasifica una cadena ya recortada por su juego de caracteres.
///
/// Un signo ("-1", "+5") no es un dígito: la cadena no se clasifica.
pub fn classify(s: &str) -> Option<NumberForm> {
    if symbolic_re().is_match(s) {
        Some(NumberForm::Symbolic)
    } else if decimal_re().is_match(s) {
        Some(NumberForm::Decimal)
    } else {
        None
    }
}

/// Primer par adyacente que rompe el orden no creciente
pub fn check_order(s: &str) -> Result<(), Malformed> {
    match order_violations(s).first() {
        Some(&position) => Err(Malformed::OutOfOrder { position }),
        None => Ok(()),
    }
}

/// Primer símbolo (en orden de tabla) que supera su límite
pub fn check_repeats(s: &str) -> Result<(), Malformed> {
    match repeat_violations(s).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

pub fn is_non_increasing(s: &str) -> bool {
    order_violations(s).is_empty()
}

pub fn within_repeat_limits(s: &str) -> bool {
    repeat_violations(s).is_empty()
}

fn order_violations(s: &str) -> Vec<usize> {
    let values: Vec<u32> = s.chars().map(|c| symbols::value_of(c).unwrap_or(0)).collect();

    values
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < pair[1])
        .map(|(i, _)| i)
        .collect()
}

fn tally(s: &str) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for sym in s.chars().filter_map(Symbol::from_glyph) {
        counts[sym.index()] += 1;
    }
    counts
}

fn repeat_violations(s: &str) -> Vec<Malformed> {
    let counts = tally(s);

    SYMBOLS
        .iter()
        .filter_map(|&symbol| {
            let count = counts[symbol.index()];
            let limit = symbol.class().max_repeats();
            (count > limit).then_some(Malformed::TooManyRepeats { symbol, count, limit })
        })
        .collect()
}

/// Valida una cadena simbólica completa (orden y repeticiones)
pub fn check_symbolic(s: &str) -> Result<(), Malformed> {
    check_order(s)?;
    check_repeats(s)
}

// ============================================================================
// DIAGNÓSTICO COMPLETO
// ============================================================================

/// Resultado de validación
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    pub form: Option<NumberForm>,
    pub value: Option<u32>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Ejecuta todas las reglas sin parar en el primer fallo.
///
/// Misma clasificación que `Converter::new`, pero acumula cada error y
/// añade avisos para entradas válidas que no son canónicas.
pub fn diagnose(input: &str) -> ValidationReport {
    let trimmed = input.trim();
    let mut result = ValidationReport {
        input: trimmed.to_string(),
        valid: true,
        form: None,
        value: None,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    // 1. Vacío / cero
    if trimmed.is_empty() {
        result.valid = false;
        result.errors.push(Malformed::Empty.to_string());
        return result;
    }
    if trimmed == "0" {
        result.valid = false;
        result.errors.push(Malformed::Zero.to_string());
        return result;
    }

    // 2. Clasificación
    result.form = classify(trimmed);

    match result.form {
        None => {
            result.valid = false;
            result.errors.push(Malformed::InvalidCharacters.to_string());
            if trimmed.chars().any(char::is_whitespace) {
                result.warnings.push("internal whitespace is not allowed".to_string());
            }
        }

        Some(NumberForm::Decimal) => match trimmed.parse::<u32>() {
            Ok(n) if (MIN_VALUE..=MAX_VALUE).contains(&n) => {
                result.value = Some(n);
                if trimmed.starts_with('0') {
                    result.warnings.push(format!("leading zeros (canonical: {})", n));
                }
            }
            _ => {
                result.valid = false;
                result.errors.push(format!(
                    "value {} is out of bounds ({}..={})",
                    trimmed, MIN_VALUE, MAX_VALUE
                ));
            }
        },

        Some(NumberForm::Symbolic) => {
            for position in order_violations(trimmed) {
                result.errors.push(Malformed::OutOfOrder { position }.to_string());
            }
            for violation in repeat_violations(trimmed) {
                result.errors.push(violation.to_string());
            }

            if !result.errors.is_empty() {
                result.valid = false;
                return result;
            }

            let value = symbols::sum_glyphs(trimmed);
            result.value = Some(value);

            if value > MAX_VALUE {
                result.warnings.push(format!(
                    "decodes to {} which exceeds {}",
                    value, MAX_VALUE
                ));
            }
            let canonical = symbols::decompose(value);
            if canonical != trimmed {
                result.warnings.push(format!("not canonical (canonical: {})", canonical));
            }
        }
    }

    result
}
