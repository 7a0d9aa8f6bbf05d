// [libs/core/math-engine/src/combinatorics.rs]
/*!
 * =================================================================
 * APARATO: COMBINATORICS (ARBITRARY-PRECISION)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: BINOMIALES C(n,m) Y BIYECCIÓN RANGO-COLEX <-> MÁSCARA
 *
 * C(256, 128) excede 2^75 dígitos decimales, muy por encima de u128; todo
 * este módulo opera sobre `rug::Integer` (GMP), la misma biblioteca que usa
 * la implementación original en C a través de `mpz_t`.
 * =================================================================
 */

use crate::bitstring::BitString256;
use crate::errors::MathError;
use rug::Integer;

/// Calcula el binomial `C(n, m)` como entero de precisión arbitraria.
///
/// Retorna `0` si `m > n`; `1` si `m == 0`.
#[must_use]
pub fn binomial(n: u32, m: u32) -> Integer {
    if m > n {
        return Integer::from(0);
    }
    Integer::from(n).binomial(m)
}

/// Convierte el índice colex `rank` (0-based) en la máscara de 256 bits con
/// exactamente `m` bits activos, todos en `[0, n)`.
///
/// # Errors
/// `MathError::InvalidCombination` si `m > n` o `n > 256`;
/// `MathError::RankOutOfBounds` si `rank >= C(n, m)`.
pub fn mask_from_colex_rank(n: u32, m: u32, rank: &Integer) -> Result<BitString256, MathError> {
    let positions = positions_from_colex_rank(n, m, rank)?;
    let mut mask = BitString256::ZERO;
    for position in positions {
        mask.set_bit(position);
    }
    Ok(mask)
}

/// Igual que [`mask_from_colex_rank`] pero retorna las posiciones de bit
/// activas en orden ascendente `p_0 < p_1 < ... < p_{m-1}`, sin ensamblar
/// la máscara — es la representación que usa `PermIterator` internamente.
///
/// # Errors
/// Ver [`mask_from_colex_rank`].
pub fn positions_from_colex_rank(n: u32, m: u32, rank: &Integer) -> Result<Vec<u32>, MathError> {
    if n > 256 {
        return Err(MathError::InvalidCombination { m, n });
    }
    if m > n {
        return Err(MathError::InvalidCombination { m, n });
    }
    let total = binomial(n, m);
    if rank >= &total {
        return Err(MathError::RankOutOfBounds {
            rank: rank.to_string(),
            bound: total.to_string(),
        });
    }
    if m == 0 {
        return Ok(Vec::new());
    }

    let mut remaining = rank.clone();
    let mut positions = Vec::with_capacity(m as usize);
    let mut upper_bound = n - 1;

    for k in (1..=m).rev() {
        let chosen = largest_c_with_binomial_at_most(k, upper_bound, &remaining);
        remaining -= binomial(chosen, k);
        positions.push(chosen);
        upper_bound = chosen.saturating_sub(1);
    }

    positions.reverse();
    Ok(positions)
}

/// Biyección inversa de [`positions_from_colex_rank`]: dado el conjunto
/// ascendente de posiciones de una combinación de tamaño `m`, recupera su
/// índice colex. `rank(p) = sum_{j=0}^{m-1} C(p_j, j+1)`.
#[must_use]
pub fn colex_rank_from_positions(positions: &[u32]) -> Integer {
    let mut rank = Integer::from(0);
    for (j, &position) in positions.iter().enumerate() {
        rank += binomial(position, (j + 1) as u32);
    }
    rank
}

/// Busca el mayor `c` en `[k-1, upper_bound]` tal que `C(c, k) <= remaining`.
///
/// `k >= 1` siempre tiene al menos la solución trivial `c = k - 1` (donde
/// `C(k-1, k) == 0`), así que la búsqueda siempre converge.
fn largest_c_with_binomial_at_most(k: u32, upper_bound: u32, remaining: &Integer) -> u32 {
    let mut candidate = upper_bound;
    loop {
        if binomial(candidate, k) <= *remaining {
            return candidate;
        }
        if candidate == 0 {
            return 0;
        }
        candidate -= 1;
    }
}
