// src/converter.rs
// ============================================================================
// CONVERTER - Arabic ⇄ Elbonian
// ============================================================================
//
// Se construye una vez desde una cadena, se valida en construcción y
// después es inmutable. Las conversiones no pueden fallar.
//
// ============================================================================

use std::str::FromStr;

use serde::Serialize;

use crate::error::{ConvertError, Malformed};
use crate::symbols::{self, MAX_VALUE, MIN_VALUE};
use crate::validate::{self, NumberForm};

/// Número validado en cualquiera de las dos notaciones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    /// Entrada recortada, tal cual llegó
    number: String,
    form: NumberForm,
    /// Valor ya parseado si `form` es decimal
    decimal: Option<u32>,
}

impl Converter {
    /// Valida `input` y lo guarda.
    ///
    /// Se admiten espacios al principio y al final, nunca dentro
    /// (" 99 " sí, "9 9" no).
    ///
    /// # Errors
    ///
    /// - `MalformedNumber`: vacío, "0", caracteres inválidos o mezclados,
    ///   símbolos fuera de orden o repetidos de más.
    /// - `ValueOutOfBounds`: número decimal fuera de 1..=3999.
    pub fn new(input: &str) -> Result<Self, ConvertError> {
        let number = input.trim();

        if number.is_empty() {
            return Err(reject(number, Malformed::Empty));
        }
        if number == "0" {
            return Err(reject(number, Malformed::Zero));
        }

        match validate::classify(number) {
            Some(NumberForm::Symbolic) => {
                validate::check_symbolic(number).map_err(|reason| reject(number, reason))?;
                log::debug!("'{}' accepted as elbonian", number);
                Ok(Self {
                    number: number.to_string(),
                    form: NumberForm::Symbolic,
                    decimal: None,
                })
            }

            Some(NumberForm::Decimal) => {
                // Solo dígitos: si no cabe en u32 es que está fuera de rango
                let value = number
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (MIN_VALUE..=MAX_VALUE).contains(n))
                    .ok_or_else(|| {
                        log::debug!("'{}' rejected: out of bounds", number);
                        ConvertError::out_of_bounds(number)
                    })?;
                log::debug!("'{}' accepted as arabic ({})", number, value);
                Ok(Self {
                    number: number.to_string(),
                    form: NumberForm::Decimal,
                    decimal: Some(value),
                })
            }

            None => Err(reject(number, Malformed::InvalidCharacters)),
        }
    }

    /// Valor decimal. Para la forma simbólica es la suma de los símbolos.
    pub fn to_decimal(&self) -> u32 {
        match self.decimal {
            Some(value) => value,
            None => symbols::sum_glyphs(&self.number),
        }
    }

    /// Representación elbonian.
    ///
    /// Si la entrada ya era simbólica se devuelve tal cual, sin
    /// canonicalizar ("DeC" sigue siendo "DeC", no "M").
    pub fn to_symbol_form(&self) -> String {
        match self.decimal {
            Some(value) => symbols::decompose(value),
            None => self.number.clone(),
        }
    }

    pub fn form(&self) -> NumberForm {
        self.form
    }

    /// Entrada recortada
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Resumen de la conversión (para salida JSON)
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            input: self.number.clone(),
            form: self.form,
            arabic: self.to_decimal(),
            elbonian: self.to_symbol_form(),
        }
    }
}

fn reject(number: &str, reason: Malformed) -> ConvertError {
    log::debug!("'{}' rejected: {}", number, reason);
    ConvertError::malformed(number, reason)
}

impl FromStr for Converter {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Converter {
    type Error = ConvertError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::fmt::Display for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Resultado serializable de una conversión
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub form: NumberForm,
    pub arabic: u32,
    pub elbonian: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(input: &str) -> bool {
        matches!(Converter::new(input), Err(ConvertError::MalformedNumber { .. }))
    }

    fn out_of_bounds(input: &str) -> bool {
        matches!(Converter::new(input), Err(ConvertError::ValueOutOfBounds { .. }))
    }

    #[test]
    fn test_sample_conversions() {
        assert_eq!(Converter::new("1").unwrap().to_symbol_form(), "I");
        assert_eq!(Converter::new("I").unwrap().to_decimal(), 1);
        assert_eq!(Converter::new("945").unwrap().to_symbol_form(), "DemV");
        assert_eq!(Converter::new("930").unwrap().to_symbol_form(), "DeXXX");
        assert_eq!(Converter::new("3000").unwrap().to_symbol_form(), "MMM");
        assert_eq!(Converter::new("1600").unwrap().to_symbol_form(), "MDC");
    }

    #[test]
    fn test_identity_accessors() {
        let c = Converter::new("945").unwrap();
        assert_eq!(c.to_decimal(), 945);
        assert_eq!(c.form(), NumberForm::Decimal);

        let c = Converter::new("DemV").unwrap();
        assert_eq!(c.to_symbol_form(), "DemV");
        assert_eq!(c.to_decimal(), 945);
        assert_eq!(c.form(), NumberForm::Symbolic);
    }

    #[test]
    fn test_roundtrip_full_range() {
        for n in MIN_VALUE..=MAX_VALUE {
            let elbonian = Converter::new(&n.to_string()).unwrap().to_symbol_form();
            let back = Converter::new(&elbonian)
                .unwrap_or_else(|e| panic!("{} -> {} rejected: {}", n, elbonian, e));
            assert_eq!(back.to_decimal(), n, "{} -> {}", n, elbonian);
            assert_eq!(back.to_symbol_form(), elbonian);
        }
    }

    #[test]
    fn test_bounds() {
        assert!(Converter::new("3999").is_ok());
        assert!(out_of_bounds("4000"));
        assert!(out_of_bounds("4001"));
        assert!(out_of_bounds("9000"));
        assert!(out_of_bounds("00"));
        assert!(out_of_bounds("99999999999999999999"));
        assert!(malformed("0"));
        assert!(malformed("-1"));
        assert!(malformed(""));
        assert!(malformed("   "));
    }

    #[test]
    fn test_repetition_limits() {
        assert!(Converter::new("MMM").is_ok());
        assert!(malformed("MMMM"));
        assert!(malformed("XXXX"));
        assert!(malformed("CCCC"));
        assert!(malformed("IIII"));
        assert!(malformed("CCCCXXX"));
        assert!(malformed("VV"));
        assert!(malformed("LL"));
        assert!(malformed("mm"));
        assert!(malformed("LLm"));
        assert!(malformed("DDVwI"));
    }

    #[test]
    fn test_ordering() {
        assert!(malformed("IV"));
        assert!(malformed("XM"));
        assert!(malformed("wV"));
        assert!(Converter::new("Vw").is_ok());
    }

    #[test]
    fn test_whitespace() {
        let padded = Converter::new(" 99 ").unwrap();
        let plain = Converter::new("99").unwrap();
        assert_eq!(padded, plain);
        assert_eq!(padded.as_str(), "99");
        assert!(malformed("9 9"));
        assert!(malformed("M M"));
        assert_eq!(Converter::new("\tMDC\n").unwrap().to_decimal(), 1600);
    }

    #[test]
    fn test_mixed_rejected() {
        assert!(malformed("M1"));
        assert!(malformed("12a"));
        assert!(malformed("mdc"));
        assert!(malformed("+5"));
    }

    #[test]
    fn test_symbolic_echo_not_canonical() {
        let c = Converter::new("DeC").unwrap();
        assert_eq!(c.to_decimal(), 1000);
        assert_eq!(c.to_symbol_form(), "DeC");
    }

    #[test]
    fn test_symbolic_above_bound_accepted() {
        let c = Converter::new("MMMDeCCCLmXXXVwIII").unwrap();
        assert_eq!(c.to_decimal(), 4332);
    }

    #[test]
    fn test_leading_zeros() {
        let c = Converter::new("007").unwrap();
        assert_eq!(c.to_decimal(), 7);
        assert_eq!(c.to_symbol_form(), "VII");
        assert_eq!(c.to_string(), "007");
    }

    #[test]
    fn test_error_reason() {
        match Converter::new("VV") {
            Err(ConvertError::MalformedNumber { input, reason }) => {
                assert_eq!(input, "VV");
                assert!(matches!(reason, Malformed::TooManyRepeats { count: 2, limit: 1, .. }));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_traits() {
        let c: Converter = "MDC".parse().unwrap();
        assert_eq!(c.to_decimal(), 1600);
        let c = Converter::try_from("1600").unwrap();
        assert_eq!(c.to_string(), "1600");
        assert!("MMMM".parse::<Converter>().is_err());
    }

    #[test]
    fn test_report() {
        let report = Converter::new(" 945 ").unwrap().report();
        assert_eq!(report.input, "945");
        assert_eq!(report.arabic, 945);
        assert_eq!(report.elbonian, "DemV");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["form"], "decimal");
        assert_eq!(json["arabic"], 945);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
