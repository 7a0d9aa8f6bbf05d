// [libs/core/math-engine/src/arithmetic.rs]
/*!
 * =================================================================
 * APARATO: CORE ARITHMETIC KERNEL
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: OPERACIONES U256 BIG-ENDIAN CON ACARREO/PRÉSTAMO
 *
 * Todas las operaciones tratan el buffer de 32 bytes como un entero
 * sin signo Big-Endian: byte 0 es el más significativo. Se evita
 * ensamblador específico de arquitectura; el acarreo/préstamo se
 * propaga byte a byte, que es suficientemente rápido para un tipo
 * que nunca participa en el hot-path de validación criptográfica.
 * =================================================================
 */

use crate::errors::MathError;
use std::cmp::Ordering;

/// Longitud canónica de una semilla de 256 bits en bytes.
pub const U256_BYTE_SIZE: usize = 32;

/// Suma un valor de 64 bits a un buffer Big-Endian de 32 bytes in-place.
///
/// # Errors
/// Retorna `MathError::Overflow` si la suma desborda el rango de 256 bits.
pub fn add_u64_to_u256_be(buffer: &mut [u8; 32], value_to_add: u64) -> Result<(), MathError> {
    let mut carry = value_to_add as u128;
    for chunk_index in (0..4).rev() {
        let start = chunk_index * 8;
        let limb = u64::from_be_bytes(buffer[start..start + 8].try_into().unwrap()) as u128;
        let partial_sum = limb + carry;
        buffer[start..start + 8].copy_from_slice(&(partial_sum as u64).to_be_bytes());
        carry = partial_sum >> 64;
    }
    if carry > 0 {
        return Err(MathError::Overflow);
    }
    Ok(())
}

/// Convierte un valor de 128 bits en un buffer Big-Endian de 256 bits,
/// colocando los 16 bytes de magnitud en la mitad baja del buffer.
#[must_use]
pub fn convert_u128_to_u256_be(value_to_convert: u128) -> [u8; 32] {
    let mut result_buffer = [0u8; 32];
    result_buffer[16..32].copy_from_slice(&value_to_convert.to_be_bytes());
    result_buffer
}

/// Compara dos valores U256 Big-Endian lexicográficamente (equivalente a
/// comparación numérica, dado el orden Big-Endian).
#[inline]
#[must_use]
pub fn compare_u256_be(alpha: &[u8; 32], beta: &[u8; 32]) -> Ordering {
    alpha.cmp(beta)
}

/// Codificación hexadecimal de un buffer arbitrario.
#[must_use]
pub fn fast_hex_encode(bytes_to_encode: &[u8]) -> String {
    hex::encode(bytes_to_encode)
}

/// Adición U256 + U256 -> U256, sin reducción modular.
///
/// # Errors
/// Retorna `MathError::Overflow` si el resultado no cabe en 256 bits.
pub fn add_u256_be(alpha: &[u8; 32], beta: &[u8; 32]) -> Result<[u8; 32], MathError> {
    let mut result = [0u8; 32];
    let mut carry = 0u16;
    for byte_index in (0..32).rev() {
        let partial_sum = alpha[byte_index] as u16 + beta[byte_index] as u16 + carry;
        result[byte_index] = (partial_sum & 0xFF) as u8;
        carry = partial_sum >> 8;
    }
    if carry > 0 {
        return Err(MathError::Overflow);
    }
    Ok(result)
}

/// Sustracción U256 - U256, detectando préstamo (underflow).
///
/// # Errors
/// Retorna `MathError::Overflow` si `minuend < subtrahend`.
pub fn subtract_u256_be(minuend: &[u8; 32], subtrahend: &[u8; 32]) -> Result<[u8; 32], MathError> {
    let mut result = [0u8; 32];
    let mut borrow = 0i16;
    for byte_index in (0..32).rev() {
        let difference =
            minuend[byte_index] as i16 - subtrahend[byte_index] as i16 - borrow;
        if difference < 0 {
            result[byte_index] = (difference + 256) as u8;
            borrow = 1;
        } else {
            result[byte_index] = difference as u8;
            borrow = 0;
        }
    }
    if borrow > 0 {
        return Err(MathError::Overflow);
    }
    Ok(result)
}
