// [libs/domain/crypto/src/none.rs]
/*!
 * =================================================================
 * APARATO: NONE VALIDATOR
 * CLASIFICACIÓN: DOMAIN ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: COMPARACIÓN DIRECTA DE LA SEMILLA CANDIDATA
 *
 * El modo `none` no invoca ningún primitivo: el "artefacto" es la propia
 * semilla candidata. Sirve para medir el costo puro de la enumeración
 * combinatoria (`--random`/`--benchmark`) sin el overhead de un cifrado,
 * curva o digesto.
 * =================================================================
 */

use subtle::ConstantTimeEq;

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::errors::SearchError;
use rbcv_domain_search::validator::{ValidatorFactory, ValidatorIface};

/// Validador que compara la semilla candidata directamente contra un objetivo.
pub struct NoneValidator {
    target: BitString256,
    last: BitString256,
}

impl ValidatorIface for NoneValidator {
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError> {
        self.last = *candidate;
        Ok(())
    }

    fn matches(&self) -> bool {
        self.last.as_bytes().ct_eq(self.target.as_bytes()).into()
    }
}

/// Fábrica de [`NoneValidator`]: retiene únicamente la semilla cliente objetivo.
pub struct NoneValidatorFactory {
    target: BitString256,
}

impl NoneValidatorFactory {
    /// Construye la fábrica a partir de la semilla cliente objetivo.
    #[must_use]
    pub fn new(target: BitString256) -> Self {
        Self { target }
    }
}

impl ValidatorFactory for NoneValidatorFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(NoneValidator {
            target: self.target,
            last: BitString256::ZERO,
        }))
    }
}
