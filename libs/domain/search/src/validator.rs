// [libs/domain/search/src/validator.rs]
/*!
 * =================================================================
 * APARATO: VALIDATOR IFACE (CAPABILITY)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATO POLIMÓRFICO PARA TRANSFORMAR Y COMPARAR CANDIDATOS
 *
 * Este estrato no conoce ningún primitivo criptográfico concreto: las
 * implementaciones de AES, ChaCha20, secp256r1 y las familias de digestos
 * viven en `rbcv-domain-crypto`, que depende de este crate e implementa
 * estos traits. La dependencia fluye crypto -> search, nunca al revés.
 * =================================================================
 */

use crate::errors::SearchError;
use rbcv_core_math::bitstring::BitString256;

/// Estado mutable de un único worker frente a un único primitivo
/// criptográfico: buffers preasignados, contexto de cifrado, artefacto
/// objetivo. No es compartible entre hilos; cada worker construye la suya
/// a través de [`ValidatorFactory::create`].
pub trait ValidatorIface: Send {
    /// Deriva el artefacto que produciría `candidate` bajo el primitivo
    /// configurado (cifrado de un plaintext fijo, multiplicación escalar
    /// EC, o digesto) y lo retiene internamente para la comparación.
    ///
    /// # Errors
    /// `SearchError::Validator` si el primitivo subyacente falla (fallo de
    /// inicialización de cifrado, curva inválida, etc.) — terminal para la
    /// búsqueda en curso.
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError>;

    /// Compara el artefacto derivado en la última llamada a [`Self::derive`]
    /// contra el artefacto objetivo almacenado, con igualdad en tiempo
    /// constante sobre la longitud completa del artefacto.
    fn matches(&self) -> bool;
}

/// Fábrica de instancias de [`ValidatorIface`], una por worker. Encapsula
/// el artefacto objetivo y cualquier entrada auxiliar (IV, UUID, descriptor
/// de curva, algoritmo de digesto, longitud, salt) fijados en la invocación.
pub trait ValidatorFactory: Send + Sync {
    /// Construye una instancia de validador lista para un worker exclusivo.
    ///
    /// # Errors
    /// `SearchError::Validator` si la configuración auxiliar es inválida
    /// para el primitivo (longitud de IV incorrecta, curva no soportada).
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError>;
}
