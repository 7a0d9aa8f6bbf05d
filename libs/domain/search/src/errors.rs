// [libs/domain/search/src/errors.rs]
// =================================================================
// APARATO: SEARCH ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL ITERADOR, PARTICIONADOR Y DRIVER
// =================================================================

use thiserror::Error;

/// Catálogo de fallos del estrato de búsqueda combinatoria.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Argumento fuera de dominio: `m > n`, rango vacío, `W == 0`, etc.
    #[error("argumento inválido: {0}")]
    InvalidArgument(String),

    /// Fallo propagado por `rbcv-core-math`.
    #[error("fallo aritmético/combinatorio: {0}")]
    Math(#[from] rbcv_core_math::errors::MathError),

    /// Fallo del validador criptográfico conectado, capturado como texto en
    /// el borde de la interfaz (`rbcv-domain-search` no depende de
    /// `rbcv-domain-crypto`; la dependencia va en sentido inverso).
    #[error("fallo del validador criptográfico: {0}")]
    Validator(String),

    /// Invariante interno violado (matemática de partición fuera de rango).
    /// Indica un defecto del propio motor, no una entrada del usuario.
    #[error("error interno: {0}")]
    Internal(String),
}
