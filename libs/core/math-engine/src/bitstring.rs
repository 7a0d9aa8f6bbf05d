// [libs/core/math-engine/src/bitstring.rs]
/*!
 * =================================================================
 * APARATO: BITSTRING256 CORE TYPE
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: SEMILLA DE 256 BITS, XOR, POPCOUNT Y POSICIONES DE BIT
 *
 * Convención de bits: el buffer se interpreta Big-Endian (byte 0 es el más
 * significativo). El bit de índice 0 es el bit menos significativo de
 * byte[31]; el bit de índice 255 es el más significativo de byte[0]. Esta
 * convención se mantiene consistente entre el iterador combinatorio y los
 * adaptadores criptográficos (ninguno reordena bytes al alimentar una llave).
 * =================================================================
 */

use crate::arithmetic::U256_BYTE_SIZE;
use crate::errors::MathError;
use std::fmt;

/// Valor inmutable de 256 bits con operaciones a nivel de bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitString256([u8; U256_BYTE_SIZE]);

impl BitString256 {
    /// El valor cero (ningún bit activo).
    pub const ZERO: Self = Self([0u8; U256_BYTE_SIZE]);

    /// Construye una instancia a partir de un buffer Big-Endian de 32 bytes.
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; U256_BYTE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decodifica una cadena hexadecimal (64 caracteres) en un `BitString256`.
    ///
    /// # Errors
    /// Retorna `MathError::InvalidLength` si la cadena decodificada no mide
    /// exactamente 32 bytes, o `MathError::HexDecode` si no es hexadecimal válida.
    pub fn from_hex(hex_str: &str) -> Result<Self, MathError> {
        let decoded = hex::decode(hex_str.trim())?;
        if decoded.len() != U256_BYTE_SIZE {
            return Err(MathError::InvalidLength {
                expected: U256_BYTE_SIZE,
                got: decoded.len(),
            });
        }
        let mut buffer = [0u8; U256_BYTE_SIZE];
        buffer.copy_from_slice(&decoded);
        Ok(Self(buffer))
    }

    /// Expone el buffer Big-Endian subyacente.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; U256_BYTE_SIZE] {
        self.0
    }

    /// Referencia de solo lectura al buffer Big-Endian.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; U256_BYTE_SIZE] {
        &self.0
    }

    /// Codifica el valor en hexadecimal en minúsculas.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// XOR bit a bit entre dos semillas de 256 bits.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut result = [0u8; U256_BYTE_SIZE];
        for i in 0..U256_BYTE_SIZE {
            result[i] = self.0[i] ^ other.0[i];
        }
        Self(result)
    }

    /// Ubica el byte y el desplazamiento de bit correspondientes a `position`
    /// bajo la convención bit-0-en-byte-31.
    #[inline]
    fn locate(position: u32) -> (usize, u8) {
        debug_assert!(position < 256);
        let byte_index = 31 - (position / 8) as usize;
        let bit_shift = (position % 8) as u8;
        (byte_index, bit_shift)
    }

    /// Activa el bit en `position` (0..256), dejando el resto intacto.
    pub fn set_bit(&mut self, position: u32) {
        let (byte_index, bit_shift) = Self::locate(position);
        self.0[byte_index] |= 1u8 << bit_shift;
    }

    /// Alterna (XOR) el bit en `position`.
    pub fn toggle_bit(&mut self, position: u32) {
        let (byte_index, bit_shift) = Self::locate(position);
        self.0[byte_index] ^= 1u8 << bit_shift;
    }

    /// Consulta si el bit en `position` está activo.
    #[must_use]
    pub fn get_bit(&self, position: u32) -> bool {
        let (byte_index, bit_shift) = Self::locate(position);
        (self.0[byte_index] >> bit_shift) & 1 == 1
    }

    /// Cuenta de bits activos (popcount / peso de Hamming).
    #[must_use]
    pub fn popcount(&self) -> u32 {
        self.0.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Distancia de Hamming entre dos semillas (popcount del XOR).
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        self.xor(other).popcount()
    }

    /// Posiciones de los bits activos en orden ascendente (0..256).
    #[must_use]
    pub fn set_bit_positions(&self) -> Vec<u32> {
        let mut positions = Vec::with_capacity(self.popcount() as usize);
        for position in 0..256u32 {
            if self.get_bit(position) {
                positions.push(position);
            }
        }
        positions
    }
}

impl fmt::Debug for BitString256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitString256").field(&self.to_hex()).finish()
    }
}

impl Default for BitString256 {
    fn default() -> Self {
        Self::ZERO
    }
}
