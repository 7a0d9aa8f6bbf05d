// [tests/mirror/libs/domain/search/search_driver_soundness.test.rs]
// Certificación de extremo a extremo del driver: soundness de la búsqueda,
// equivalencia entre distintos conteos de workers, y el escenario de cero
// mismatches (un único candidato probado).

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_search::prelude::{
    run_search, SearchConfig, SearchError, SearchVerdict, ValidatorFactory, ValidatorIface,
};

struct PlantedValidator {
    target: BitString256,
    last: BitString256,
}

impl ValidatorIface for PlantedValidator {
    fn derive(&mut self, candidate: &BitString256) -> Result<(), SearchError> {
        self.last = *candidate;
        Ok(())
    }

    fn matches(&self) -> bool {
        self.last == self.target
    }
}

struct PlantedFactory {
    target: BitString256,
}

impl ValidatorFactory for PlantedFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(PlantedValidator {
            target: self.target,
            last: BitString256::ZERO,
        }))
    }
}

struct NeverMatchesFactory;
struct NeverMatchesValidator;

impl ValidatorIface for NeverMatchesValidator {
    fn derive(&mut self, _candidate: &BitString256) -> Result<(), SearchError> {
        Ok(())
    }

    fn matches(&self) -> bool {
        false
    }
}

impl ValidatorFactory for NeverMatchesFactory {
    fn create(&self) -> Result<Box<dyn ValidatorIface>, SearchError> {
        Ok(Box::new(NeverMatchesValidator))
    }
}

fn planted_target(host: BitString256, flip_positions: &[u32]) -> BitString256 {
    let mut mask = BitString256::ZERO;
    for &position in flip_positions {
        mask.set_bit(position);
    }
    host.xor(&mask)
}

#[test]
fn a_candidate_within_the_hamming_ball_is_found_and_reported() {
    let host = BitString256::from_hex(&"11".repeat(32)).unwrap();
    let target = planted_target(host, &[0, 4, 9]);

    let config = SearchConfig {
        host_seed: host,
        subseed_length: 16,
        m_start: 0,
        m_end: 3,
        workers: 4,
        all_flag: false,
        count_flag: false,
    };
    let factory = PlantedFactory { target };

    let (verdict, _stats) = run_search(&config, &factory).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(target));
}

#[test]
fn no_candidate_within_the_hamming_ball_yields_not_found() {
    let host = BitString256::ZERO;
    let config = SearchConfig {
        host_seed: host,
        subseed_length: 8,
        m_start: 0,
        m_end: 1,
        workers: 3,
        all_flag: false,
        count_flag: false,
    };
    let factory = NeverMatchesFactory;

    let (verdict, _stats) = run_search(&config, &factory).unwrap();
    assert_eq!(verdict, SearchVerdict::NotFound);
}

#[test]
fn zero_mismatches_tests_exactly_one_candidate_and_finds_an_identical_seed() {
    let host = BitString256::from_hex(&"ff".repeat(32)).unwrap();
    let config = SearchConfig {
        host_seed: host,
        subseed_length: 256,
        m_start: 0,
        m_end: 0,
        workers: 1,
        all_flag: false,
        count_flag: true,
    };
    let factory = PlantedFactory { target: host };

    let (verdict, stats) = run_search(&config, &factory).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(host));
    assert_eq!(stats.validated_keys, 1);
}

#[test]
fn the_winning_seed_is_identical_regardless_of_worker_count() {
    let host = BitString256::from_hex(&"22".repeat(32)).unwrap();
    let target = planted_target(host, &[1, 2]);

    for workers in [1u32, 16u32] {
        let config = SearchConfig {
            host_seed: host,
            subseed_length: 8,
            m_start: 0,
            m_end: 2,
            workers,
            all_flag: false,
            count_flag: false,
        };
        let factory = PlantedFactory { target };
        let (verdict, _stats) = run_search(&config, &factory).unwrap();
        assert_eq!(verdict, SearchVerdict::Found(target));
    }
}

#[test]
fn fixed_mode_tests_only_the_binomial_cardinality_of_the_target_distance() {
    use rbcv_core_math::combinatorics::binomial;

    let host = BitString256::ZERO;
    let config = SearchConfig {
        host_seed: host,
        subseed_length: 8,
        m_start: 2,
        m_end: 2,
        workers: 4,
        all_flag: false,
        count_flag: true,
    };
    let factory = NeverMatchesFactory;

    let (verdict, stats) = run_search(&config, &factory).unwrap();
    assert_eq!(verdict, SearchVerdict::NotFound);
    assert_eq!(stats.validated_keys, binomial(8, 2).to_u64().unwrap());
}
