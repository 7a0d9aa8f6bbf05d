// [libs/core/math-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CORE MATH HUB
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: U256 BIG-ENDIAN, COMBINATORIA DE PRECISIÓN ARBITRARIA
 *                  Y EL TIPO DE SEMILLA DE 256 BITS
 *
 * Este estrato no conoce ningún primitivo criptográfico concreto ni la
 * estrategia de búsqueda; expone únicamente el vocabulario numérico que
 * comparten `rbcv-domain-search` y `rbcv-domain-crypto`.
 * =================================================================
 */

/// Operaciones U256 Big-Endian (suma, resta, comparación, codificación hex).
pub mod arithmetic;
/// Catálogo de fallos aritméticos y combinatorios del sistema.
pub mod errors;
/// Semilla inmutable de 256 bits: XOR, popcount, posiciones de bit.
pub mod bitstring;
/// Binomiales `C(n,m)` y biyección rango-colex <-> máscara (GMP, `rug`).
pub mod combinatorics;

/// Única autoridad de importación recomendada para los estratos superiores
/// (`rbcv-domain-search`, `rbcv-domain-crypto`).
pub mod prelude {
    pub use crate::arithmetic::{
        add_u256_be, add_u64_to_u256_be, compare_u256_be, convert_u128_to_u256_be,
        fast_hex_encode, subtract_u256_be, U256_BYTE_SIZE,
    };
    pub use crate::bitstring::BitString256;
    pub use crate::combinatorics::{
        binomial, colex_rank_from_positions, mask_from_colex_rank, positions_from_colex_rank,
    };
    pub use crate::errors::MathError;
}
