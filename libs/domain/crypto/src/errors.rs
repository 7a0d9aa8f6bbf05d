// [libs/domain/crypto/src/errors.rs]
// =================================================================
// APARATO: CRYPTO ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DE LOS ADAPTADORES CRIPTOGRÁFICOS
// =================================================================

use thiserror::Error;

/// Catálogo de fallos al construir o invocar un adaptador de `ValidatorIface`.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Entrada auxiliar inválida para el primitivo elegido (longitud de IV,
    /// UUID, salt o artefacto objetivo incorrecta).
    #[error("argumento criptográfico inválido: {0}")]
    InvalidArgument(String),

    /// El primitivo subyacente rechazó la semilla candidata o el artefacto
    /// objetivo (clave fuera de rango, punto EC inválido, etc.).
    #[error("fallo del primitivo criptográfico: {0}")]
    PrimitiveFailure(String),
}

impl From<CryptoError> for rbcv_domain_search::errors::SearchError {
    fn from(error: CryptoError) -> Self {
        rbcv_domain_search::errors::SearchError::Validator(error.to_string())
    }
}
