// [libs/domain/crypto/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: RBCV DOMAIN CRYPTO
 * CLASIFICACIÓN: DOMAIN ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: IMPLEMENTACIONES CONCRETAS DE ValidatorIface
 *
 * Este crate es el único punto del workspace que importa primitivos
 * criptográficos concretos. `rbcv-domain-search` conoce únicamente los
 * traits `ValidatorIface`/`ValidatorFactory`; este crate los implementa
 * para cada modo del menú de §6: `none` (comparación directa), cifrado
 * (AES-256-ECB, ChaCha20), curva elíptica (secp256r1) y digesto/XOF
 * (MD5, SHA-1, SHA-2, SHA-3, SHAKE128/256, KangarooTwelve).
 * =================================================================
 */

/// Adaptador de cifrado (AES-256-ECB, ChaCha20).
pub mod cipher;
/// Adaptador de curva elíptica (secp256r1).
pub mod ec;
/// Catálogo de fallos de los adaptadores criptográficos.
pub mod errors;
/// Adaptador de digesto y función de esponja extensible.
pub mod hash;
/// Adaptador de comparación directa (modo `none`).
pub mod none;

pub use cipher::{encrypt_with, CipherKind, CipherValidatorFactory};
pub use ec::{derive_public_key, EcValidatorFactory};
pub use errors::CryptoError;
pub use hash::{digest_with, DigestKind, DigestValidatorFactory};
pub use none::NoneValidatorFactory;

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::validator::ValidatorFactory;

/// El menú completo de primitivos criptográficos seleccionables vía
/// `--mode`, unificado para que la CLI no tenga que conocer los tipos
/// concretos de cada fábrica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    /// Comparación directa de la semilla candidata (`--mode none`).
    None,
    /// AES-256-ECB.
    Aes256Ecb,
    /// ChaCha20.
    ChaCha20,
    /// Multiplicación escalar sobre secp256r1.
    Ecc,
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-2/224.
    Sha224,
    /// SHA-2/256.
    Sha256,
    /// SHA-2/384.
    Sha384,
    /// SHA-2/512.
    Sha512,
    /// SHA-3/224.
    Sha3_224,
    /// SHA-3/256.
    Sha3_256,
    /// SHA-3/384.
    Sha3_384,
    /// SHA-3/512.
    Sha3_512,
    /// SHAKE128 (XOF).
    Shake128,
    /// SHAKE256 (XOF).
    Shake256,
    /// KangarooTwelve (XOF).
    Kang12,
}

impl Algo {
    /// Analiza el literal de `--mode` tal como aparece en §6 de la
    /// especificación (`none`, `aes`, `chacha20`, `ecc`, `md5`, `sha1`,
    /// `sha224`, `sha256`, `sha384`, `sha512`, `sha3-224`, `sha3-256`,
    /// `sha3-384`, `sha3-512`, `shake128`, `shake256`, `kang12`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw {
            "none" => Algo::None,
            "aes" => Algo::Aes256Ecb,
            "chacha20" => Algo::ChaCha20,
            "ecc" => Algo::Ecc,
            "md5" => Algo::Md5,
            "sha1" => Algo::Sha1,
            "sha224" => Algo::Sha224,
            "sha256" => Algo::Sha256,
            "sha384" => Algo::Sha384,
            "sha512" => Algo::Sha512,
            "sha3-224" => Algo::Sha3_224,
            "sha3-256" => Algo::Sha3_256,
            "sha3-384" => Algo::Sha3_384,
            "sha3-512" => Algo::Sha3_512,
            "shake128" => Algo::Shake128,
            "shake256" => Algo::Shake256,
            "kang12" => Algo::Kang12,
            _ => return None,
        })
    }

    /// `true` si este modo requiere una UUID/plaintext fijo de 16 bytes
    /// en lugar de un salt de longitud libre (los modos de cifrado).
    #[must_use]
    pub fn is_cipher(self) -> bool {
        matches!(self, Algo::Aes256Ecb | Algo::ChaCha20)
    }

    /// `true` si este modo es la multiplicación escalar EC.
    #[must_use]
    pub fn is_ecc(self) -> bool {
        matches!(self, Algo::Ecc)
    }
}

/// Entradas auxiliares posicionales tal como las produce la CLI tras
/// analizar `[HOST_SEED_HEX [CLIENT_ARTIFACT_HEX [UUID|SALT [IV]]]]` para
/// un modo dado. `rbcv-domain-crypto` no conoce `clap`; recibe bytes ya
/// decodificados.
pub struct AlgoInputs {
    /// Artefacto cliente objetivo ya decodificado de hex (cifra, clave
    /// pública SEC1, o digesto).
    pub target: Vec<u8>,
    /// El UUID de 16 bytes (modos de cifrado) o el salt de longitud libre
    /// (modos de digesto); vacío si el modo no lo usa.
    pub uuid_or_salt: Vec<u8>,
    /// El IV/nonce posicional; vacío para los modos que no lo requieren.
    pub iv: Vec<u8>,
}

/// Construye la [`ValidatorFactory`] apropiada para `algo` a partir de las
/// entradas auxiliares ya decodificadas de hex/UUID por la CLI.
///
/// # Errors
/// `CryptoError::InvalidArgument` si alguna entrada auxiliar tiene una
/// longitud incompatible con el primitivo elegido (ver cada adaptador).
pub fn build_validator_factory(
    algo: Algo,
    inputs: AlgoInputs,
) -> Result<Box<dyn ValidatorFactory>, CryptoError> {
    let AlgoInputs {
        target,
        uuid_or_salt,
        iv,
    } = inputs;

    if algo == Algo::None {
        let target_bitstring = BitString256::from_be_bytes(target.try_into().map_err(|_| {
            CryptoError::InvalidArgument("CLIENT_SEED must be exactly 32 bytes".to_string())
        })?);
        return Ok(Box::new(NoneValidatorFactory::new(target_bitstring)));
    }

    if algo.is_cipher() {
        let kind = match algo {
            Algo::Aes256Ecb => CipherKind::Aes256Ecb,
            Algo::ChaCha20 => CipherKind::ChaCha20,
            _ => unreachable!(),
        };
        return Ok(Box::new(CipherValidatorFactory::new(
            kind,
            uuid_or_salt,
            iv,
            target,
        )?));
    }

    if algo.is_ecc() {
        return Ok(Box::new(EcValidatorFactory::new(target)?));
    }

    let kind = match algo {
        Algo::Md5 => DigestKind::Md5,
        Algo::Sha1 => DigestKind::Sha1,
        Algo::Sha224 => DigestKind::Sha2_224,
        Algo::Sha256 => DigestKind::Sha2_256,
        Algo::Sha384 => DigestKind::Sha2_384,
        Algo::Sha512 => DigestKind::Sha2_512,
        Algo::Sha3_224 => DigestKind::Sha3_224,
        Algo::Sha3_256 => DigestKind::Sha3_256,
        Algo::Sha3_384 => DigestKind::Sha3_384,
        Algo::Sha3_512 => DigestKind::Sha3_512,
        Algo::Shake128 => DigestKind::Shake128,
        Algo::Shake256 => DigestKind::Shake256,
        Algo::Kang12 => DigestKind::KangarooTwelve,
        Algo::None | Algo::Aes256Ecb | Algo::ChaCha20 | Algo::Ecc => unreachable!(),
    };
    Ok(Box::new(DigestValidatorFactory::new(
        kind,
        uuid_or_salt,
        target,
    )?))
}

/// Calcula el artefacto que produciría `candidate` bajo `algo` y las
/// entradas auxiliares dadas, en la dirección hacia adelante (no a través
/// de un [`ValidatorFactory`]). Usado exclusivamente por la CLI para
/// autogenerar el artefacto cliente objetivo bajo `--random`/
/// `--benchmark`, donde el candidato plantado es conocido de antemano.
///
/// # Errors
/// `CryptoError::InvalidArgument`/`CryptoError::PrimitiveFailure` bajo las
/// mismas condiciones que el adaptador correspondiente.
pub fn compute_artifact(
    algo: Algo,
    candidate: BitString256,
    aux: &AlgoInputs,
) -> Result<Vec<u8>, CryptoError> {
    let candidate_bytes = candidate.to_be_bytes();

    if algo == Algo::None {
        return Ok(candidate_bytes.to_vec());
    }

    if algo.is_cipher() {
        let kind = match algo {
            Algo::Aes256Ecb => CipherKind::Aes256Ecb,
            Algo::ChaCha20 => CipherKind::ChaCha20,
            _ => unreachable!(),
        };
        return encrypt_with(kind, &candidate_bytes, &aux.uuid_or_salt, &aux.iv);
    }

    if algo.is_ecc() {
        let compressed = aux.target.len() != 65;
        return derive_public_key(&candidate_bytes, compressed);
    }

    let kind = match algo {
        Algo::Md5 => DigestKind::Md5,
        Algo::Sha1 => DigestKind::Sha1,
        Algo::Sha224 => DigestKind::Sha2_224,
        Algo::Sha256 => DigestKind::Sha2_256,
        Algo::Sha384 => DigestKind::Sha2_384,
        Algo::Sha512 => DigestKind::Sha2_512,
        Algo::Sha3_224 => DigestKind::Sha3_224,
        Algo::Sha3_256 => DigestKind::Sha3_256,
        Algo::Sha3_384 => DigestKind::Sha3_384,
        Algo::Sha3_512 => DigestKind::Sha3_512,
        Algo::Shake128 => DigestKind::Shake128,
        Algo::Shake256 => DigestKind::Shake256,
        Algo::Kang12 => DigestKind::KangarooTwelve,
        Algo::None | Algo::Aes256Ecb | Algo::ChaCha20 | Algo::Ecc => unreachable!(),
    };
    let out_len = kind.fixed_output_len().unwrap_or_else(|| aux.target.len().max(32));
    Ok(digest_with(kind, &aux.uuid_or_salt, &candidate_bytes, out_len))
}
