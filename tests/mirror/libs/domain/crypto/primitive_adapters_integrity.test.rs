// [tests/mirror/libs/domain/crypto/primitive_adapters_integrity.test.rs]
// Certificación de extremo a extremo: cada adaptador de rbcv-domain-crypto
// conectado al driver real de rbcv-domain-search, sobre una siembra de bits
// volteados (el escenario "AES plant-and-find" de la especificación,
// generalizado a los demás modos del menú).

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncryptMut, KeyInit as BlockKeyInit};
use ecb::Encryptor as EcbEncryptor;
use sha2::{Digest, Sha256};

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_crypto::{build_validator_factory, Algo, AlgoInputs};
use rbcv_domain_search::driver::{run_search, SearchConfig, SearchVerdict};

fn flip_bits(host: BitString256, positions: &[u32]) -> BitString256 {
    let mut candidate = host;
    for &position in positions {
        candidate.toggle_bit(position);
    }
    candidate
}

#[test]
fn aes_plant_and_find_matches_the_specification_scenario() {
    let host = BitString256::from_hex(&"a5".repeat(32)).unwrap();
    let client = flip_bits(host, &[3, 130, 255]);

    let plaintext = (0u8..16).collect::<Vec<u8>>();
    let key = client.to_be_bytes();
    let mut cipher = EcbEncryptor::<aes::Aes256>::new((&key).into());
    let mut target = plaintext.clone();
    cipher.encrypt_block_mut(GenericArray::from_mut_slice(&mut target));

    let factory = build_validator_factory(
        Algo::Aes256Ecb,
        AlgoInputs {
            target,
            uuid_or_salt: plaintext,
            iv: Vec::new(),
        },
    )
    .unwrap();

    let config = SearchConfig {
        host_seed: host,
        subseed_length: 256,
        m_start: 0,
        m_end: 3,
        workers: 4,
        all_flag: false,
        count_flag: false,
    };

    let (verdict, _stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(client));
}

#[test]
fn zero_mismatches_finds_the_host_seed_itself_under_sha256() {
    let host = BitString256::from_hex(&"11".repeat(32)).unwrap();

    let mut hasher = Sha256::new();
    hasher.update(host.to_be_bytes());
    let target = hasher.finalize().to_vec();

    let factory = build_validator_factory(
        Algo::Sha256,
        AlgoInputs {
            target,
            uuid_or_salt: Vec::new(),
            iv: Vec::new(),
        },
    )
    .unwrap();

    let config = SearchConfig {
        host_seed: host,
        subseed_length: 256,
        m_start: 0,
        m_end: 0,
        workers: 2,
        all_flag: false,
        count_flag: true,
    };

    let (verdict, stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::Found(host));
    assert_eq!(stats.validated_keys, 1);
}

#[test]
fn not_found_when_the_target_matches_nothing_in_range() {
    let host = BitString256::from_hex(&"00".repeat(32)).unwrap();
    let factory = build_validator_factory(
        Algo::None,
        AlgoInputs {
            target: vec![0xFFu8; 32],
            uuid_or_salt: Vec::new(),
            iv: Vec::new(),
        },
    )
    .unwrap();

    let config = SearchConfig {
        host_seed: host,
        subseed_length: 256,
        m_start: 0,
        m_end: 1,
        workers: 4,
        all_flag: false,
        count_flag: false,
    };

    let (verdict, _stats) = run_search(&config, factory.as_ref()).unwrap();
    assert_eq!(verdict, SearchVerdict::NotFound);
}
