// [libs/domain/crypto/src/cipher.rs]
/*!
 * =================================================================
 * APARATO: CIPHER VALIDATOR (AES-256-ECB / CHACHA20)
 * CLASIFICACIÓN: DOMAIN ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: CIFRAR UN PLAINTEXT FIJO BAJO LA SEMILLA CANDIDATA
 *
 * La semilla candidata de 256 bits se usa directamente como llave. El
 * plaintext es el UUID de 16 bytes suministrado por la CLI (la entrada
 * canónica de `rbc_validator`, ver SPEC_FULL.md §6). AES-256-ECB no
 * requiere IV; ChaCha20 requiere un nonce de 12 bytes (convención
 * RustCrypto). La comparación final usa `subtle::ConstantTimeEq` sobre el
 * artefacto completo.
 * =================================================================
 */

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncryptMut, KeyInit as BlockKeyInit};
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;
use ecb::Encryptor as EcbEncryptor;
use subtle::ConstantTimeEq;

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::errors::SearchError;
use rbcv_domain_search::validator::{ValidatorFactory, ValidatorIface};

use crate::errors::CryptoError;

/// Primitivo de cifrado soportado por este adaptador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    /// AES-256 en modo ECB, un solo bloque de 16 bytes, sin IV.
    Aes256Ecb,
    /// ChaCha20, flujo de 16 bytes bajo un nonce de 12 bytes.
    ChaCha20,
}

impl CipherKind {
    /// Longitud de IV/nonce requerida por este cifrado, en bytes. `0` si no
    /// aplica (AES-256-ECB).
    #[must_use]
    pub fn iv_len(self) -> usize {
        match self {
            CipherKind::Aes256Ecb => 0,
            CipherKind::ChaCha20 => 12,
        }
    }
}

/// Cifra `plaintext` bajo `key` con el primitivo `kind`, usando `iv` como
/// nonce/IV cuando el primitivo lo requiere. Función libre compartida por
/// [`CipherValidator`] (comparación contra un objetivo) y por la CLI
/// (autogeneración del artefacto objetivo bajo `--random`/`--benchmark`).
///
/// # Errors
/// `CryptoError::InvalidArgument` si `iv` no mide lo que el primitivo
/// elegido requiere.
pub fn encrypt_with(
    kind: CipherKind,
    key: &[u8; 32],
    plaintext: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    match kind {
        CipherKind::Aes256Ecb => {
            let mut cipher = EcbEncryptor::<aes::Aes256>::new(key.into());
            let mut buffer = plaintext.to_vec();
            // El plaintext de este tool es siempre un bloque de 16 bytes
            // (el UUID canónico), así que no hace falta relleno.
            cipher.encrypt_block_mut(GenericArray::from_mut_slice(&mut buffer));
            Ok(buffer)
        }
        CipherKind::ChaCha20 => {
            let nonce: [u8; 12] = iv.to_vec().try_into().map_err(|_| {
                CryptoError::InvalidArgument("ChaCha20 nonce must be 12 bytes".to_string())
            })?;
            let mut cipher = ChaCha20::new(key.into(), &nonce.into());
            let mut buffer = plaintext.to_vec();
            cipher.apply_keystream(&mut buffer);
            Ok(buffer)
        }
    }
}

/// Validador de cifrado: cifra el plaintext fijo bajo la semilla candidata
/// y compara contra el artefacto cliente objetivo.
pub struct CipherValidator {
    kind: CipherKind,
    plaintext: Vec<u8>,
    iv: Vec<u8>,
    target: Vec<u8>,
    last: Vec<u8>,
}

impl CipherValidator {
    fn encrypt(&self, key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
        encrypt_with(self.kind, key, &self.plaintext, &self.iv)
    }
}

impl ValidatorIface for CipherValidator {
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError> {
        let key = candidate.to_be_bytes();
        self.last = self
            .encrypt(&key)
            .map_err(|err| SearchError::Validator(err.to_string()))?;
        Ok(())
    }

    fn matches(&self) -> bool {
        self.last.ct_eq(&self.target).into()
    }
}

/// Fábrica de [`CipherValidator`]: retiene el plaintext, el IV/nonce (si
/// aplica) y el artefacto cliente objetivo, compartidos por todos los
/// workers de una corrida.
pub struct CipherValidatorFactory {
    kind: CipherKind,
    plaintext: Vec<u8>,
    iv: Vec<u8>,
    target: Vec<u8>,
}

impl CipherValidatorFactory {
    /// Construye la fábrica validando la longitud del IV/nonce y del
    /// artefacto objetivo contra el cifrado elegido.
    ///
    /// # Errors
    /// `CryptoError::InvalidArgument` si el plaintext no mide 16 bytes, el
    /// IV no coincide con [`CipherKind::iv_len`], o el artefacto objetivo no
    /// mide exactamente 16 bytes (un solo bloque / una ráfaga de flujo).
    pub fn new(
        kind: CipherKind,
        plaintext: Vec<u8>,
        iv: Vec<u8>,
        target: Vec<u8>,
    ) -> Result<Self, CryptoError> {
        if plaintext.len() != 16 {
            return Err(CryptoError::InvalidArgument(format!(
                "plaintext must be 16 bytes, got {}",
                plaintext.len()
            )));
        }
        if iv.len() != kind.iv_len() {
            return Err(CryptoError::InvalidArgument(format!(
                "IV must be {} bytes for this cipher, got {}",
                kind.iv_len(),
                iv.len()
            )));
        }
        if target.len() != 16 {
            return Err(CryptoError::InvalidArgument(format!(
                "CLIENT_CIPHER must be 16 bytes, got {}",
                target.len()
            )));
        }
        Ok(Self {
            kind,
            plaintext,
            iv,
            target,
        })
    }
}

impl ValidatorFactory for CipherValidatorFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(CipherValidator {
            kind: self.kind,
            plaintext: self.plaintext.clone(),
            iv: self.iv.clone(),
            target: self.target.clone(),
            last: Vec::new(),
        }))
    }
}
