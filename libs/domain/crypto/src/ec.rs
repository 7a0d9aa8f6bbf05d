// [libs/domain/crypto/src/ec.rs]
/*!
 * =================================================================
 * APARATO: EC VALIDATOR (SECP256R1 SCALAR MULTIPLICATION)
 * CLASIFICACIÓN: DOMAIN ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: DERIVAR Q = k*G Y COMPARAR CONTRA UNA CLAVE PÚBLICA SEC1
 *
 * La semilla candidata de 256 bits se trata como el escalar privado k sobre
 * secp256r1 (NIST P-256, vía `p256`). El artefacto objetivo es la clave
 * pública cliente en codificación SEC1, comprimida (33 bytes) o no (65
 * bytes); la forma de comparación se fija a la del artefacto objetivo en
 * tiempo de construcción, nunca recalculada por worker.
 * =================================================================
 */

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use subtle::ConstantTimeEq;

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::errors::SearchError;
use rbcv_domain_search::validator::{ValidatorFactory, ValidatorIface};

use crate::errors::CryptoError;

/// Multiplica el generador de secp256r1 por `candidate_bytes` (tratado
/// como escalar privado) y devuelve la codificación SEC1 del punto
/// resultante. Función libre compartida por [`EcValidator`] y por la CLI
/// (autogeneración de la clave pública objetivo bajo `--random`/
/// `--benchmark`).
///
/// # Errors
/// `CryptoError::PrimitiveFailure` si `candidate_bytes` no es un escalar
/// válido para secp256r1 (cero o mayor que el orden de la curva).
pub fn derive_public_key(candidate_bytes: &[u8; 32], compressed: bool) -> Result<Vec<u8>, CryptoError> {
    let secret = SecretKey::from_slice(candidate_bytes).map_err(|_| {
        CryptoError::PrimitiveFailure("candidate scalar is out of range for secp256r1".to_string())
    })?;
    let encoded = secret.public_key().to_encoded_point(compressed);
    Ok(encoded.as_bytes().to_vec())
}

/// Validador EC: multiplica el generador de secp256r1 por la semilla
/// candidata y compara la codificación SEC1 resultante contra el objetivo.
pub struct EcValidator {
    target: Vec<u8>,
    compressed: bool,
    last: Vec<u8>,
}

impl ValidatorIface for EcValidator {
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError> {
        let scalar_bytes = candidate.to_be_bytes();
        self.last = derive_public_key(&scalar_bytes, self.compressed)
            .map_err(|err| SearchError::Validator(err.to_string()))?;
        Ok(())
    }

    fn matches(&self) -> bool {
        self.last.ct_eq(&self.target).into()
    }
}

/// Fábrica de [`EcValidator`]: retiene la clave pública cliente objetivo.
pub struct EcValidatorFactory {
    target: Vec<u8>,
    compressed: bool,
}

impl EcValidatorFactory {
    /// Construye la fábrica a partir de los bytes SEC1 de la clave pública
    /// cliente. La forma (comprimida de 33 bytes o no comprimida de 65) se
    /// infiere de la longitud del objetivo.
    ///
    /// # Errors
    /// `CryptoError::InvalidArgument` si `target` no mide 33 ni 65 bytes.
    pub fn new(target: Vec<u8>) -> Result<Self, CryptoError> {
        let compressed = match target.len() {
            33 => true,
            65 => false,
            other => {
                return Err(CryptoError::InvalidArgument(format!(
                    "CLIENT_PUB_KEY must be 33 (compressed) or 65 (uncompressed) bytes, got {other}"
                )))
            }
        };
        Ok(Self { target, compressed })
    }
}

impl ValidatorFactory for EcValidatorFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(EcValidator {
            target: self.target.clone(),
            compressed: self.compressed,
            last: Vec::new(),
        }))
    }
}
