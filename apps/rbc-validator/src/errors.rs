// [apps/rbc-validator/src/errors.rs]
// =================================================================
// APARATO: CLI ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DE ARGUMENTOS Y ORQUESTACIÓN
// =================================================================

use thiserror::Error;

/// Catálogo de fallos de la CLI. Toda variante mapea a código de salida 2
/// (Failure) vía [`crate::ExitStatus`].
#[derive(Error, Debug)]
pub enum CliError {
    /// Argumento fuera de dominio o entrada posicional malformada: mismo
    /// catálogo que `ArgumentError` en spec.md §7.
    #[error("{0}")]
    Argument(String),

    /// Fallo propagado por `rbcv-domain-crypto` al construir un adaptador.
    #[error(transparent)]
    Crypto(#[from] rbcv_domain_crypto::CryptoError),

    /// Fallo propagado por `rbcv-domain-search` (partición, pool de hilos,
    /// validador en ejecución).
    #[error(transparent)]
    Search(#[from] rbcv_domain_search::errors::SearchError),

    /// Hex malformado en una entrada posicional.
    #[error("{field} had non-hexadecimal characters or odd length: {source}")]
    HexDecode {
        /// Nombre del campo posicional que falló a decodificar.
        field: &'static str,
        /// Error subyacente del decodificador hex.
        #[source]
        source: hex::FromHexError,
    },
}
