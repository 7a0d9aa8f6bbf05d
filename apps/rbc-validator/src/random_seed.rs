// [apps/rbc-validator/src/random_seed.rs]
/*!
 * =================================================================
 * APARATO: RANDOM / BENCHMARK SEED GENERATION
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: AUTOGENERAR HOST/CLIENT SEED Y EL ARTEFACTO OBJETIVO
 *
 * Generaliza `getRandomCorruptedSeed` del C original: planta un candidato a
 * distancia de Hamming exacta `mismatches` del host autogenerado, deriva su
 * artefacto con el mismo adaptador que usaría el worker, y lo entrega como
 * si hubiera llegado por línea de comandos. Bajo `--benchmark` el candidato
 * se planta en el punto medio de la partición de un worker elegido al azar
 * (no en el punto medio global del barrido), para medir un tiempo de
 * hallazgo representativo en vez de uno optimista.
 * =================================================================
 */

use rand::seq::SliceRandom;
use rand::Rng;
use rbcv_core_math::bitstring::BitString256;
use rbcv_core_math::combinatorics::binomial;
use rbcv_domain_crypto::{compute_artifact, Algo, AlgoInputs};

use crate::errors::CliError;

/// Resultado de una autogeneración: la semilla host, la semilla cliente
/// plantada, y las entradas auxiliares (con el artefacto ya derivado) que
/// alimentan el validador tal como si vinieran de la línea de comandos.
pub struct GeneratedScenario {
    /// Semilla de referencia confiable H, recién generada.
    pub host_seed: BitString256,
    /// Semilla cliente plantada a distancia `mismatches` de `host_seed`.
    pub client_seed: BitString256,
    /// Entradas auxiliares con el artefacto objetivo ya calculado.
    pub aux_inputs: AlgoInputs,
}

/// Genera un escenario de autoprueba: host aleatorio, candidato plantado a
/// distancia `mismatches` dentro de los primeros `subseed_length` bits, y
/// su artefacto derivado bajo `algo`.
///
/// Cuando `benchmark` es `true`, el candidato se planta en el punto medio
/// de la partición colex de un worker elegido uniformemente al azar entre
/// los `workers` que `rank_partitioner::partition` repartiría, en vez de
/// en una posición uniformemente aleatoria sobre todo `[0, C(n,m))` —
/// replica el `getRandomCorruptedSeed(..., core_count)` del C original
/// (`examples/original_source/src/rbc_validator.c:493-498`), que también
/// recibe el conteo de workers. Plantar en el punto medio global (en vez
/// de mid-partición) sesgaría el benchmark hacia el mejor caso cuando
/// `C(n,m)` es divisible por `workers`, ya que el rango medio cae
/// exactamente en el primer índice de un worker.
///
/// # Errors
/// `CliError::Crypto` si la derivación del artefacto falla (p.ej. un
/// candidato fuera de rango para `secp256r1`); `CliError::Argument` si
/// `mismatches`/`subseed_length` no admiten un rango colex válido.
pub fn generate(
    algo: Algo,
    subseed_length: u32,
    mismatches: u32,
    workers: u32,
    benchmark: bool,
) -> Result<GeneratedScenario, CliError> {
    let mut rng = rand::thread_rng();
    let mut host_bytes = [0u8; 32];
    rng.fill(&mut host_bytes);
    let host_seed = BitString256::from_be_bytes(host_bytes);

    let positions: Vec<u32> = if benchmark {
        let total = binomial(subseed_length, mismatches);
        let workers_big = rug::Integer::from(workers);
        let effective_workers: u32 = if total < workers_big {
            total.to_u32().unwrap()
        } else {
            workers
        };
        let rank = rng.gen_range(0..effective_workers);
        let range = rbcv_domain_search::prelude::partition(
            rank,
            workers,
            mismatches,
            subseed_length,
        )
        .map_err(|err| CliError::Argument(err.to_string()))?;
        let span = rug::Integer::from(&range.last_index - &range.first_index);
        let target_rank = rug::Integer::from(&range.first_index + rug::Integer::from(&span / 2));
        rbcv_core_math::combinatorics::positions_from_colex_rank(subseed_length, mismatches, &target_rank)
            .map_err(|err| CliError::Argument(err.to_string()))?
    } else {
        let mut all_positions: Vec<u32> = (0..subseed_length).collect();
        all_positions.shuffle(&mut rng);
        all_positions.truncate(mismatches as usize);
        all_positions.sort_unstable();
        all_positions
    };

    let mut mask = BitString256::ZERO;
    for &position in &positions {
        mask.set_bit(position);
    }
    let client_seed = host_seed.xor(&mask);

    let uuid_or_salt = if algo.is_cipher() {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        bytes.to_vec()
    } else if algo == Algo::None || algo.is_ecc() {
        Vec::new()
    } else {
        let mut salt = vec![0u8; 16];
        rng.fill(salt.as_mut_slice());
        salt
    };
    let iv = if matches!(algo, Algo::ChaCha20) {
        let mut nonce = [0u8; 12];
        rng.fill(&mut nonce);
        nonce.to_vec()
    } else {
        Vec::new()
    };

    let mut aux_inputs = AlgoInputs {
        target: Vec::new(),
        uuid_or_salt,
        iv,
    };
    let target = compute_artifact(algo, client_seed, &aux_inputs)?;
    aux_inputs.target = target;

    Ok(GeneratedScenario {
        host_seed,
        client_seed,
        aux_inputs,
    })
}
