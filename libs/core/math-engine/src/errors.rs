// [libs/core/math-engine/src/errors.rs]
// =================================================================
// APARATO: MATH ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS ARITMÉTICOS Y COMBINATORIOS
// =================================================================

use thiserror::Error;

/// Catálogo de fallos del estrato aritmético y combinatorio.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MathError {
    /// Un buffer de bytes no tiene la longitud esperada para representar un U256.
    #[error("longitud inválida: se esperaban {expected} bytes, se recibieron {got}")]
    InvalidLength {
        /// Longitud requerida en bytes.
        expected: usize,
        /// Longitud efectivamente recibida.
        got: usize,
    },

    /// Desbordamiento al sumar o incrementar un valor U256.
    #[error("desbordamiento aritmético U256")]
    Overflow,

    /// `m` excede el número de posiciones disponibles `n` en una combinación `C(n, m)`.
    #[error("combinación inválida: m={m} excede n={n}")]
    InvalidCombination {
        /// Tamaño del subconjunto solicitado.
        m: u32,
        /// Tamaño del universo de posiciones.
        n: u32,
    },

    /// Un rango [primero, último] fue solicitado fuera de `[0, C(n, m))`.
    #[error("rango de rango combinatorio fuera de límites: {rank} >= {bound}")]
    RankOutOfBounds {
        /// El rango solicitado.
        rank: String,
        /// La cota superior exclusiva (C(n, m)).
        bound: String,
    },

    /// Una cadena hexadecimal no pudo decodificarse.
    #[error("decodificación hexadecimal fallida: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
