// src/symbols.rs
// ============================================================================
// SYMBOL TABLE - Los diez símbolos elbonianos y sus valores
// ============================================================================
//
// Orden descendente por valor. Una sola tabla sirve para:
//   - la descomposición greedy (decimal → elbonian)
//   - el chequeo de orden no creciente
//   - los límites de repetición
//
//   M=1000  D=500  e=400  C=100  L=50  m=40  X=10  V=5  w=4  I=1
//
// ============================================================================

/// Clase del símbolo: determina cuántas veces puede repetirse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// 1, 10, 100, 1000 - hasta 3 repeticiones
    Unit,
    /// 4, 5, 40, 50, 400, 500 - una sola vez
    Special,
}

impl SymbolClass {
    pub fn max_repeats(&self) -> usize {
        match self {
            Self::Unit => 3,
            Self::Special => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Special => "special",
        }
    }
}

/// Símbolo elbonian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    M,
    D,
    E,      // 'e' minúscula
    C,
    L,
    SmallM, // 'm' minúscula
    X,
    V,
    W,      // 'w' minúscula
    I,
}

/// Tabla completa, orden descendente por valor
pub const SYMBOLS: [Symbol; 10] = [
    Symbol::M,
    Symbol::D,
    Symbol::E,
    Symbol::C,
    Symbol::L,
    Symbol::SmallM,
    Symbol::X,
    Symbol::V,
    Symbol::W,
    Symbol::I,
];

/// Valor máximo representable en forma decimal
pub const MAX_VALUE: u32 = 3999;

/// Valor mínimo representable
pub const MIN_VALUE: u32 = 1;

impl Symbol {
    pub fn value(&self) -> u32 {
        match self {
            Self::M => 1000,
            Self::D => 500,
            Self::E => 400,
            Self::C => 100,
            Self::L => 50,
            Self::SmallM => 40,
            Self::X => 10,
            Self::V => 5,
            Self::W => 4,
            Self::I => 1,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::M => 'M',
            Self::D => 'D',
            Self::E => 'e',
            Self::C => 'C',
            Self::L => 'L',
            Self::SmallM => 'm',
            Self::X => 'X',
            Self::V => 'V',
            Self::W => 'w',
            Self::I => 'I',
        }
    }

    pub fn class(&self) -> SymbolClass {
        match self {
            Self::M | Self::C | Self::X | Self::I => SymbolClass::Unit,
            _ => SymbolClass::Special,
        }
    }

    /// Posición en `SYMBOLS` (0 = mayor valor)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Glifo → símbolo. Case-sensitive: 'm' es 40, 'M' es 1000.
    pub fn from_glyph(c: char) -> Option<Self> {
        SYMBOLS.iter().copied().find(|s| s.glyph() == c)
    }

    /// Valor → símbolo. Solo los diez valores de la tabla tienen símbolo.
    pub fn from_value(value: u32) -> Option<Self> {
        SYMBOLS.iter().copied().find(|s| s.value() == value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Valor de un glifo, `None` si no es un símbolo elbonian
pub fn value_of(c: char) -> Option<u32> {
    Symbol::from_glyph(c).map(|s| s.value())
}

/// Glifo de un valor, `None` si el valor no está en la tabla
pub fn glyph_for(value: u32) -> Option<char> {
    Symbol::from_value(value).map(|s| s.glyph())
}

/// Descomposición greedy de mayor a menor.
///
/// Para cada símbolo de la tabla añade tantas copias como quepan en el
/// resto y reduce el resto. Termina siempre en 0 porque 'I' vale 1.
pub fn decompose(mut value: u32) -> String {
    let mut out = String::new();

    for sym in SYMBOLS.iter() {
        let count = value / sym.value();
        if count == 0 {
            continue;
        }
        log::trace!("decompose: {} x{} (resto {})", sym, count, value % sym.value());
        out.extend(std::iter::repeat(sym.glyph()).take(count as usize));
        value %= sym.value();
    }

    out
}

/// Suma de los valores de cada glifo. Los glifos desconocidos no suman.
pub fn sum_glyphs(s: &str) -> u32 {
    s.chars().filter_map(value_of).sum()
}
