// [libs/domain/search/src/rank_partitioner.rs]
/*!
 * =================================================================
 * APARATO: RANK PARTITIONER
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: REPARTO DISJUNTO Y BALANCEADO DE [0, C(n,m)) ENTRE W RANKS
 *
 * `base = floor(T / W)`, `rem = T mod W`. Los primeros `rem` ranks reciben
 * `base + 1` elementos; el resto recibe `base`. Si `W > T`, los ranks
 * `r >= T` reciben un rango vacío (`first > last`) y `SearchDriver` los
 * trata como inertes sin instanciar validador ni worker.
 * =================================================================
 */

use crate::errors::SearchError;
use rbcv_core_math::combinatorics::binomial;
use rug::Integer;

/// Rango colex `[first_index, last_index]` asignado a un rank. Un rango
/// vacío (`first_index > last_index`) indica un worker inerte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRange {
    /// Primer índice colex (inclusive) asignado a este rank.
    pub first_index: Integer,
    /// Último índice colex (inclusive) asignado a este rank.
    pub last_index: Integer,
}

impl PartitionRange {
    /// `true` si el rango no contiene ningún índice (rank inerte).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_index > self.last_index
    }
}

/// Calcula el sub-rango colex de `[0, C(n,m))` asignado al rank `r`.
///
/// # Errors
/// `SearchError::InvalidArgument` si `count == 0` o `rank >= count`.
pub fn partition(rank: u32, count: u32, m: u32, n: u32) -> Result<PartitionRange, SearchError> {
    if count == 0 {
        return Err(SearchError::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }
    if rank >= count {
        return Err(SearchError::InvalidArgument(format!(
            "rank {rank} must be less than worker count {count}"
        )));
    }

    let total = binomial(n, m);
    let count_big = Integer::from(count);
    let base = Integer::from(&total / &count_big);
    let rem = Integer::from(&total % &count_big);
    let rank_big = Integer::from(rank);

    if rank_big < rem {
        let base_plus_one = Integer::from(&base + 1);
        let first_index = Integer::from(&rank_big * &base_plus_one);
        let last_index = Integer::from(&first_index + &base);
        Ok(PartitionRange {
            first_index,
            last_index,
        })
    } else {
        let base_plus_one = Integer::from(&base + 1);
        let head_span = Integer::from(&rem * &base_plus_one);
        let tail_offset = Integer::from(&rank_big - &rem);
        let first_index = Integer::from(&head_span + Integer::from(&tail_offset * &base));
        // last = first + base - 1; when base == 0 this yields an empty,
        // inert range (first_index > last_index), exactly spec's W > T case.
        let mut last_index = Integer::from(&first_index + &base);
        last_index -= 1;
        Ok(PartitionRange {
            first_index,
            last_index,
        })
    }
}
