// [libs/domain/search/src/perm_iterator.rs]
/*!
 * =================================================================
 * APARATO: PERM ITERATOR (COLEX MISMATCH-MASK ENUMERATOR)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: ENUMERACIÓN LAZY DE MÁSCARAS DE POPCOUNT m EN ORDEN COLEX
 *
 * Mantiene la tupla de posiciones de bit activo (p_0 < p_1 < ... < p_{m-1})
 * en memoria y avanza mediante la regla de sucesor colex: se localiza el
 * menor `j` tal que `p_{j+1} - p_j > 1` (con `p_m = n` como centinela), se
 * incrementa `p_j` y se reinician `p_0..p_{j-1}` a `0..j-1`. El estado
 * inicial se deriva del sistema numérico combinatorio en `rbcv-core-math`.
 *
 * Grounded en la forma de `CombinatoricIterator` (iterador lazy por rango
 * con estado U256 mantenido incrementalmente), generalizada de un contador
 * lineal a una combinatoria de subconjuntos de tamaño fijo.
 * =================================================================
 */

use crate::errors::SearchError;
use rbcv_core_math::bitstring::BitString256;
use rbcv_core_math::combinatorics::{binomial, positions_from_colex_rank};
use rug::Integer;

/// Un paso de la enumeración: la máscara completa, más el delta de bits que
/// cambiaron de valor desde el paso anterior (vacío en el primer paso, donde
/// el worker debe calcular el XOR completo contra la semilla de referencia).
#[derive(Debug, Clone)]
pub struct PermStep {
    /// Máscara de popcount `m` correspondiente al índice colex actual.
    pub mask: BitString256,
    /// Posiciones de bit que se desactivaron respecto al paso anterior.
    pub cleared: Vec<u32>,
    /// Posiciones de bit que se activaron respecto al paso anterior.
    pub set: Vec<u32>,
}

/// Enumerador lazy de máscaras de mismatch de popcount `m` sobre `[0, n)`,
/// restringido al rango colex `[first_index, last_index]` inclusive.
pub struct PermIterator {
    n: u32,
    m: u32,
    positions: Vec<u32>,
    current_index: Integer,
    last_index: Integer,
    exhausted: bool,
    emitted_first: bool,
}

impl PermIterator {
    /// Construye el iterador posicionado en `first_index`.
    ///
    /// # Errors
    /// `SearchError::InvalidArgument` si `m > n`, `first_index > last_index`,
    /// o `last_index >= C(n, m)`.
    pub fn create(
        n: u32,
        m: u32,
        first_index: &Integer,
        last_index: &Integer,
    ) -> Result<Self, SearchError> {
        if m > n {
            return Err(SearchError::InvalidArgument(format!(
                "mismatches {m} exceeds subseed length {n}"
            )));
        }
        if first_index > last_index {
            return Err(SearchError::InvalidArgument(format!(
                "first_index {first_index} exceeds last_index {last_index}"
            )));
        }
        let total = binomial(n, m);
        if last_index >= &total {
            return Err(SearchError::InvalidArgument(format!(
                "last_index {last_index} is out of bounds for C({n},{m}) = {total}"
            )));
        }

        let positions = positions_from_colex_rank(n, m, first_index)?;

        Ok(Self {
            n,
            m,
            positions,
            current_index: first_index.clone(),
            last_index: last_index.clone(),
            exhausted: false,
            emitted_first: false,
        })
    }

    /// La máscara correspondiente al índice colex actual.
    #[must_use]
    pub fn current_mask(&self) -> BitString256 {
        let mut mask = BitString256::ZERO;
        for &position in &self.positions {
            mask.set_bit(position);
        }
        mask
    }

    /// `true` una vez que el índice `last_index` ya fue emitido y se intentó
    /// avanzar de nuevo.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.exhausted
    }

    /// Tamaño del universo de posiciones (n de la configuración).
    #[must_use]
    pub fn subseed_length(&self) -> u32 {
        self.n
    }

    /// Popcount fijo de toda máscara emitida por este iterador.
    #[must_use]
    pub fn mismatches(&self) -> u32 {
        self.m
    }

    /// Índice colex del paso actual (solo válido antes de `ended()`).
    #[must_use]
    pub fn current_index(&self) -> &Integer {
        &self.current_index
    }

    fn advance_positions(&mut self) -> (Vec<u32>, Vec<u32>) {
        if self.m == 0 {
            return (Vec::new(), Vec::new());
        }

        let m = self.m as usize;
        let mut j = 0usize;
        loop {
            let next_p = if j + 1 < m { self.positions[j + 1] } else { self.n };
            if next_p - self.positions[j] > 1 {
                break;
            }
            j += 1;
        }

        let old_window: Vec<u32> = self.positions[0..=j].to_vec();
        self.positions[j] += 1;
        for (i, slot) in self.positions[0..j].iter_mut().enumerate() {
            *slot = i as u32;
        }
        let new_window: Vec<u32> = self.positions[0..=j].to_vec();

        let cleared: Vec<u32> = old_window
            .iter()
            .copied()
            .filter(|p| !new_window.contains(p))
            .collect();
        let set: Vec<u32> = new_window
            .iter()
            .copied()
            .filter(|p| !old_window.contains(p))
            .collect();
        (cleared, set)
    }
}

impl Iterator for PermIterator {
    type Item = PermStep;

    fn next(&mut self) -> Option<PermStep> {
        if self.exhausted {
            return None;
        }

        if !self.emitted_first {
            self.emitted_first = true;
            let set = self.positions.clone();
            if self.current_index == self.last_index {
                self.exhausted = true;
            }
            return Some(PermStep {
                mask: self.current_mask(),
                cleared: Vec::new(),
                set,
            });
        }

        let (cleared, set) = self.advance_positions();
        self.current_index += 1;
        if self.current_index >= self.last_index {
            self.exhausted = true;
        }

        Some(PermStep {
            mask: self.current_mask(),
            cleared,
            set,
        })
    }
}
