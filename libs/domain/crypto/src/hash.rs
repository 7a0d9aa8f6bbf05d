// [libs/domain/crypto/src/hash.rs]
/*!
 * =================================================================
 * APARATO: DIGEST/XOF VALIDATOR
 * CLASIFICACIÓN: DOMAIN ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: DIGERIR (SALT || SEMILLA CANDIDATA) Y COMPARAR
 *
 * Cubre las familias de resumen requeridas por el modo de salt/UUID:
 * MD5, SHA-1, SHA-2 (224/256/384/512), SHA-3 (224/256/384/512), las
 * funciones de esponja extensible SHAKE128/SHAKE256, y KangarooTwelve.
 * La longitud de salida de las funciones XOF (SHAKE*, K12) se fija a la
 * longitud del artefacto objetivo, ya que estas no tienen una longitud
 * de salida fija.
 * =================================================================
 */

use md5::{Digest as Md5Digest, Md5};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
use subtle::ConstantTimeEq;
use tiny_keccak::{Hasher, KangarooTwelve};

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::errors::SearchError;
use rbcv_domain_search::validator::{ValidatorFactory, ValidatorIface};

use crate::errors::CryptoError;

/// Familia de digesto o función de esponja extensible soportada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKind {
    /// MD5, salida de 16 bytes.
    Md5,
    /// SHA-1, salida de 20 bytes.
    Sha1,
    /// SHA-2/224, salida de 28 bytes.
    Sha2_224,
    /// SHA-2/256, salida de 32 bytes.
    Sha2_256,
    /// SHA-2/384, salida de 48 bytes.
    Sha2_384,
    /// SHA-2/512, salida de 64 bytes.
    Sha2_512,
    /// SHA-3/224, salida de 28 bytes.
    Sha3_224,
    /// SHA-3/256, salida de 32 bytes.
    Sha3_256,
    /// SHA-3/384, salida de 48 bytes.
    Sha3_384,
    /// SHA-3/512, salida de 64 bytes.
    Sha3_512,
    /// SHAKE128, función de esponja extensible (XOF).
    Shake128,
    /// SHAKE256, función de esponja extensible (XOF).
    Shake256,
    /// KangarooTwelve, función de esponja extensible (XOF).
    KangarooTwelve,
}

impl DigestKind {
    /// `true` si la salida de este digesto tiene longitud fija (y por tanto
    /// el artefacto objetivo debe coincidir exactamente con ella).
    #[must_use]
    pub fn fixed_output_len(self) -> Option<usize> {
        match self {
            DigestKind::Md5 => Some(16),
            DigestKind::Sha1 => Some(20),
            DigestKind::Sha2_224 | DigestKind::Sha3_224 => Some(28),
            DigestKind::Sha2_256 | DigestKind::Sha3_256 => Some(32),
            DigestKind::Sha2_384 | DigestKind::Sha3_384 => Some(48),
            DigestKind::Sha2_512 | DigestKind::Sha3_512 => Some(64),
            DigestKind::Shake128 | DigestKind::Shake256 | DigestKind::KangarooTwelve => None,
        }
    }
}

/// Validador de digesto: concatena `salt || candidato` (la semilla
/// candidata en bruto si no hay salt), digiere bajo el algoritmo elegido y
/// compara contra el artefacto cliente objetivo.
pub struct DigestValidator {
    kind: DigestKind,
    salt: Vec<u8>,
    target: Vec<u8>,
    last: Vec<u8>,
}

/// Digiere `salt || candidate_bytes` bajo el algoritmo `kind`, truncando o
/// extendiendo la salida a `out_len` bytes para las funciones de esponja
/// extensible (SHAKE128/256, KangarooTwelve); ignorado por los digestos de
/// longitud fija. Función libre compartida por [`DigestValidator`] y por la
/// CLI (autogeneración del artefacto objetivo bajo `--random`/
/// `--benchmark`).
pub fn digest_with(kind: DigestKind, salt: &[u8], candidate_bytes: &[u8; 32], out_len: usize) -> Vec<u8> {
    let mut input = salt.to_vec();
    input.extend_from_slice(candidate_bytes);

    match kind {
            DigestKind::Md5 => {
                let mut hasher = Md5::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha2_224 => {
                let mut hasher = Sha224::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha2_256 => {
                let mut hasher = Sha256::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha2_384 => {
                let mut hasher = Sha384::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha2_512 => {
                let mut hasher = Sha512::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha3_224 => {
                let mut hasher = Sha3_224::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha3_256 => {
                let mut hasher = Sha3_256::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha3_384 => {
                let mut hasher = Sha3_384::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Sha3_512 => {
                let mut hasher = Sha3_512::new();
                hasher.update(&input);
                hasher.finalize().to_vec()
            }
            DigestKind::Shake128 => {
                let mut hasher = Shake128::default();
                hasher.update(&input);
                let mut reader = hasher.finalize_xof();
                let mut out = vec![0u8; out_len];
                reader.read(&mut out);
                out
            }
            DigestKind::Shake256 => {
                let mut hasher = Shake256::default();
                hasher.update(&input);
                let mut reader = hasher.finalize_xof();
                let mut out = vec![0u8; out_len];
                reader.read(&mut out);
                out
            }
            DigestKind::KangarooTwelve => {
                let mut hasher = KangarooTwelve::new(b"".as_slice());
                hasher.update(&input);
                let mut out = vec![0u8; out_len];
                hasher.finalize(&mut out);
                out
            }
    }
}

impl ValidatorIface for DigestValidator {
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError> {
        let candidate_bytes = candidate.to_be_bytes();
        let out_len = self.target.len();
        self.last = digest_with(self.kind, &self.salt, &candidate_bytes, out_len);
        Ok(())
    }

    fn matches(&self) -> bool {
        self.last.ct_eq(&self.target).into()
    }
}

/// Fábrica de [`DigestValidator`]: retiene el salt (posiblemente vacío) y el
/// artefacto cliente objetivo, compartidos por todos los workers de una
/// corrida.
pub struct DigestValidatorFactory {
    kind: DigestKind,
    salt: Vec<u8>,
    target: Vec<u8>,
}

impl DigestValidatorFactory {
    /// Construye la fábrica validando la longitud del artefacto objetivo
    /// contra los digestos de longitud fija. Las funciones XOF (SHAKE*,
    /// K12) aceptan cualquier longitud de objetivo no vacía.
    ///
    /// # Errors
    /// `CryptoError::InvalidArgument` si el objetivo está vacío, o si no
    /// coincide con la longitud fija esperada del digesto elegido.
    pub fn new(kind: DigestKind, salt: Vec<u8>, target: Vec<u8>) -> Result<Self, CryptoError> {
        if target.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "CLIENT_ARTIFACT must not be empty".to_string(),
            ));
        }
        if let Some(expected) = kind.fixed_output_len() {
            if target.len() != expected {
                return Err(CryptoError::InvalidArgument(format!(
                    "{kind:?} output must be {expected} bytes, got {}",
                    target.len()
                )));
            }
        }
        Ok(Self { kind, salt, target })
    }
}

impl ValidatorFactory for DigestValidatorFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(DigestValidator {
            kind: self.kind,
            salt: self.salt.clone(),
            target: self.target.clone(),
            last: Vec::new(),
        }))
    }
}
