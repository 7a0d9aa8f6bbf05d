// [tests/mirror/apps/rbc_validator/scenarios_integrity.test.rs]
// Certificación de los seis escenarios de semilla de la especificación,
// ensamblados a través de la misma canalización que expone main.rs:
// params::validate -> build_validator_factory -> run_search.

use clap::Parser;

use rbc_validator_lib::cli::Cli;
use rbc_validator_lib::params::validate;
use rbcv_core_math::bitstring::BitString256;
use rbcv_core_math::combinatorics::binomial;
use rbcv_domain_crypto::build_validator_factory;
use rbcv_domain_search::driver::{run_search, SearchConfig, SearchVerdict};

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["rbc_validator"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

fn flip_bits(host: BitString256, positions: &[u32]) -> BitString256 {
    let mut candidate = host;
    for &position in positions {
        candidate.toggle_bit(position);
    }
    candidate
}

#[test]
fn scenario_one_aes_plant_and_find() {
    use aes::cipher::generic_array::GenericArray;
    use aes::cipher::{BlockEncryptMut, KeyInit as BlockKeyInit};
    use ecb::Encryptor as EcbEncryptor;

    let host = BitString256::from_hex(&"00".repeat(32)).unwrap();
    let candidate = flip_bits(host, &[1, 5, 200]);
    let candidate_bytes = candidate.to_be_bytes();

    let plaintext = (0u8..16).collect::<Vec<u8>>();
    let mut cipher = EcbEncryptor::<aes::Aes256>::new((&candidate_bytes).into());
    let mut cipher_hex_bytes = plaintext.clone();
    cipher.encrypt_block_mut(GenericArray::from_mut_slice(&mut cipher_hex_bytes));

    let uuid = uuid::Uuid::from_bytes(plaintext.clone().try_into().unwrap());

    let cli = parse(&[
        "--mode",
        "aes",
        "--mismatches",
        "3",
        &host.to_hex(),
        &hex::encode(&cipher_hex_bytes),
        &uuid.hyphenated().to_string(),
    ]);
    let params = validate(&cli).unwrap();
    let factory = build_validator_factory(params.algo, params.aux_inputs.unwrap()).unwrap();

    let config = SearchConfig {
        host_seed: params.host_seed.unwrap(),
        subseed_length: params.subseed_length,
        m_start: params.m_start,
        m_end: params.m_end,
        workers: 4,
        all_flag: false,
        count_flag: false,
    };
    let (verdict, _stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(candidate));
}

#[test]
fn scenario_two_zero_mismatches_finds_the_host_seed_itself() {
    let host = BitString256::from_hex(&"ab".repeat(32)).unwrap();
    let cli = parse(&[
        "--mode",
        "none",
        "--fixed",
        "--mismatches",
        "0",
        &host.to_hex(),
        &host.to_hex(),
    ]);
    let params = validate(&cli).unwrap();
    let factory = build_validator_factory(params.algo, params.aux_inputs.unwrap()).unwrap();

    let config = SearchConfig {
        host_seed: params.host_seed.unwrap(),
        subseed_length: params.subseed_length,
        m_start: params.m_start,
        m_end: params.m_end,
        workers: 2,
        all_flag: false,
        count_flag: true,
    };
    let (verdict, stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(host));
    assert_eq!(stats.validated_keys, 1);
}

#[test]
fn scenario_three_not_found_when_target_matches_nothing_in_range() {
    let host = BitString256::from_hex(&"00".repeat(32)).unwrap();
    let unreachable_target = BitString256::from_hex(&"ff".repeat(32)).unwrap();

    let cli = parse(&[
        "--mode",
        "none",
        "--subkey",
        "8",
        "--fixed",
        "--mismatches",
        "2",
        &host.to_hex(),
        &unreachable_target.to_hex(),
    ]);
    let params = validate(&cli).unwrap();
    let factory = build_validator_factory(params.algo, params.aux_inputs.unwrap()).unwrap();

    let config = SearchConfig {
        host_seed: params.host_seed.unwrap(),
        subseed_length: params.subseed_length,
        m_start: params.m_start,
        m_end: params.m_end,
        workers: 3,
        all_flag: false,
        count_flag: false,
    };
    let (verdict, _stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::NotFound);
}

#[test]
fn scenario_four_fixed_tests_exactly_one_binomial_while_sweep_tests_the_partial_sum() {
    let host = BitString256::from_hex(&"00".repeat(32)).unwrap();
    let mask_positions = [0u32, 1];
    let candidate = flip_bits(host, &mask_positions);

    let fixed_cli = parse(&[
        "--mode",
        "none",
        "--subkey",
        "8",
        "--fixed",
        "--mismatches",
        "2",
        &host.to_hex(),
        &candidate.to_hex(),
    ]);
    let fixed_params = validate(&fixed_cli).unwrap();
    let fixed_factory =
        build_validator_factory(fixed_params.algo, fixed_params.aux_inputs.unwrap()).unwrap();
    let fixed_config = SearchConfig {
        host_seed: fixed_params.host_seed.unwrap(),
        subseed_length: fixed_params.subseed_length,
        m_start: fixed_params.m_start,
        m_end: fixed_params.m_end,
        workers: 1,
        all_flag: false,
        count_flag: true,
    };
    let (_verdict, fixed_stats) = run_search(&fixed_config, fixed_factory.as_ref()).unwrap();
    assert_eq!(fixed_stats.validated_keys, binomial(8, 2).to_u64().unwrap());

    let sweep_cli = parse(&[
        "--mode",
        "none",
        "--subkey",
        "8",
        "--mismatches",
        "2",
        &host.to_hex(),
        &candidate.to_hex(),
    ]);
    let sweep_params = validate(&sweep_cli).unwrap();
    let sweep_factory =
        build_validator_factory(sweep_params.algo, sweep_params.aux_inputs.unwrap()).unwrap();
    let sweep_config = SearchConfig {
        host_seed: sweep_params.host_seed.unwrap(),
        subseed_length: sweep_params.subseed_length,
        m_start: sweep_params.m_start,
        m_end: sweep_params.m_end,
        workers: 1,
        all_flag: false,
        count_flag: true,
    };
    let (_verdict, sweep_stats) = run_search(&sweep_config, sweep_factory.as_ref()).unwrap();
    let expected_sweep: u64 = (0..=2).map(|m| binomial(8, m).to_u64().unwrap()).sum();
    assert_eq!(sweep_stats.validated_keys, expected_sweep);
    assert!(sweep_stats.validated_keys > fixed_stats.validated_keys);
}

#[test]
fn scenario_five_worker_count_does_not_change_the_verdict() {
    let host = BitString256::from_hex(&"00".repeat(32)).unwrap();
    let candidate = flip_bits(host, &[2, 3]);

    for workers in [1u32, 16u32] {
        let cli = parse(&[
            "--mode",
            "none",
            "--subkey",
            "8",
            "--mismatches",
            "2",
            &host.to_hex(),
            &candidate.to_hex(),
        ]);
        let params = validate(&cli).unwrap();
        let factory = build_validator_factory(params.algo, params.aux_inputs.unwrap()).unwrap();
        let config = SearchConfig {
            host_seed: params.host_seed.unwrap(),
            subseed_length: params.subseed_length,
            m_start: params.m_start,
            m_end: params.m_end,
            workers,
            all_flag: false,
            count_flag: false,
        };
        let (verdict, _stats) = run_search(&config, factory.as_ref()).unwrap();
        assert_eq!(verdict, SearchVerdict::Found(candidate));
    }
}

#[test]
fn scenario_six_partition_balance_matches_the_worked_example() {
    use rbcv_domain_search::prelude::partition;
    use rug::Integer;

    let n = 8;
    let m = 3;
    let w = 5;
    let sizes: Vec<u32> = (0..w)
        .map(|r| {
            let range = partition(r, w, m, n).unwrap();
            (Integer::from(&range.last_index - &range.first_index) + 1)
                .to_u32()
                .unwrap()
        })
        .collect();
    assert_eq!(sizes, vec![12, 11, 11, 11, 11]);
}
