// [tests/mirror/libs/core/math_engine/bitstring_integrity.test.rs]
// Certificación de integridad del tipo BitString256: XOR, popcount y la
// convención big-endian (bit 0 == LSB de byte[31]).

use rbcv_core_math::bitstring::BitString256;

#[test]
fn host_xor_mask_recovers_candidate_and_back() {
    let host = BitString256::from_hex(
        "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210",
    )
    .unwrap();

    let mut mask = BitString256::ZERO;
    for position in [0u32, 1, 64, 255] {
        mask.set_bit(position);
    }

    let candidate = host.xor(&mask);
    assert_eq!(candidate.hamming_distance(&host), 4);
    assert_eq!(candidate.xor(&mask), host);
}

#[test]
fn zero_mask_leaves_host_untouched() {
    let host =
        BitString256::from_hex("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
            .unwrap();
    assert_eq!(host.xor(&BitString256::ZERO), host);
}

#[test]
fn popcount_tracks_hamming_weight_of_corruption() {
    let mut mask = BitString256::ZERO;
    assert_eq!(mask.popcount(), 0);
    mask.set_bit(3);
    mask.set_bit(200);
    assert_eq!(mask.popcount(), 2);
}

#[test]
fn set_bit_positions_is_strictly_ascending() {
    let mut mask = BitString256::ZERO;
    for position in [250u32, 10, 130, 0] {
        mask.set_bit(position);
    }
    let positions = mask.set_bit_positions();
    assert_eq!(positions, vec![0, 10, 130, 250]);
}

#[test]
fn hex_round_trip_preserves_bytes() {
    let hex = "a".repeat(64);
    let parsed = BitString256::from_hex(&hex).unwrap();
    assert_eq!(parsed.to_hex(), hex);
}
