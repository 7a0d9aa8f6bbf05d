// [tests/mirror/libs/core/math_engine/combinatorics_integrity.test.rs]
// Certificación del sistema numérico combinatorio: binomiales de precisión
// arbitraria y la biyección rango-colex <-> posiciones de bit.

use rbcv_core_math::combinatorics::{
    binomial, colex_rank_from_positions, mask_from_colex_rank, positions_from_colex_rank,
};
use rug::Integer;

#[test]
fn binomial_256_128_exceeds_u128() {
    let value = binomial(256, 128);
    // C(256,128) ~= 5.78 * 10^75, far beyond u128::MAX (~3.4 * 10^38).
    assert!(value > Integer::from(u128::MAX));
}

#[test]
fn binomial_eight_choose_three_is_fifty_six() {
    assert_eq!(binomial(8, 3), Integer::from(56));
}

#[test]
fn every_rank_in_c_8_3_round_trips_through_a_mask() {
    let n = 8;
    let m = 3;
    let total = binomial(n, m);
    let mut rank = Integer::from(0);
    while rank < total {
        let mask = mask_from_colex_rank(n, m, &rank).unwrap();
        assert_eq!(mask.popcount(), m);
        let positions = mask.set_bit_positions();
        assert_eq!(colex_rank_from_positions(&positions), rank);
        rank += 1;
    }
}

#[test]
fn rank_zero_sets_the_lowest_m_bits() {
    let mask = mask_from_colex_rank(256, 5, &Integer::from(0)).unwrap();
    assert_eq!(mask.set_bit_positions(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn last_rank_sets_the_highest_m_bits() {
    let n = 16;
    let m = 4;
    let last = Integer::from(&binomial(n, m) - 1);
    let mask = mask_from_colex_rank(n, m, &last).unwrap();
    assert_eq!(mask.set_bit_positions(), vec![12, 13, 14, 15]);
}

#[test]
fn zero_mismatches_yields_a_single_all_zero_mask() {
    let mask = mask_from_colex_rank(256, 0, &Integer::from(0)).unwrap();
    assert_eq!(mask.popcount(), 0);
    assert_eq!(binomial(256, 0), Integer::from(1));
}

#[test]
fn rank_at_or_beyond_the_bound_is_rejected() {
    let total = binomial(8, 3);
    assert!(positions_from_colex_rank(8, 3, &total).is_err());
}

#[test]
fn subset_larger_than_universe_is_rejected() {
    assert!(positions_from_colex_rank(4, 5, &Integer::from(0)).is_err());
}
