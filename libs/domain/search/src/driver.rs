// [libs/domain/search/src/driver.rs]
/*!
 * =================================================================
 * APARATO: SEARCH DRIVER
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: BARRIDO EXTERNO SOBRE m, DESPACHO DE WORKERS, AGREGACIÓN
 *
 * Para cada valor de m en [m_start, m_end] se reinicia `found_flag`, se
 * reparte [0, C(n,m)) entre los W workers vía `rank_partitioner::partition`,
 * y se espera la barrera de todos antes de decidir si continuar el barrido
 * o reportar. Workers con partición vacía (W > C(n,m)) se omiten sin
 * instanciar validador.
 * =================================================================
 */

use std::sync::atomic::{AtomicI8, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rayon::ThreadPoolBuilder;
use tracing::{info, instrument, warn};

use crate::errors::SearchError;
use crate::rank_partitioner::partition;
use crate::validator::ValidatorFactory;
use crate::worker::{run_worker, FoundFlag, WorkerInputs, WorkerOutcome};
use rbcv_core_math::bitstring::BitString256;

/// Veredicto agregado de una corrida completa del driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchVerdict {
    /// Se halló una semilla candidata coincidente.
    Found(BitString256),
    /// Se agotó el barrido completo sin hallazgo.
    NotFound,
    /// Un worker sufrió un fallo terminal del validador.
    Failure,
}

/// Estadísticas acumuladas de una corrida, reportadas cuando `count_flag`
/// está activo.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Total de candidatos efectivamente validados a través de todos los m.
    pub validated_keys: u64,
    /// Duración total del barrido, de inicio a fin.
    pub elapsed: Duration,
}

/// Parámetros inmutables de una invocación completa del driver.
pub struct SearchConfig {
    /// Semilla de referencia confiable H.
    pub host_seed: BitString256,
    /// Longitud del subseed sujeto a corrupción (n).
    pub subseed_length: u32,
    /// Primer valor de m en el barrido (inclusive).
    pub m_start: u32,
    /// Último valor de m en el barrido (inclusive).
    pub m_end: u32,
    /// Número de workers a repartir por cada valor de m.
    pub workers: u32,
    /// Si es `true`, no se detiene en el primer hallazgo.
    pub all_flag: bool,
    /// Si es `true`, se acumulan y reportan los candidatos validados.
    pub count_flag: bool,
}

/// Orquesta el barrido completo de m, despachando W workers por cada valor
/// sobre un pool de hilos dedicado, y agrega el veredicto final.
///
/// # Errors
/// Propaga `SearchError::InvalidArgument` si la configuración de threads o
/// partición es inválida, o `SearchError::Internal` si el pool de hilos no
/// pudo construirse.
#[instrument(skip(config, validator_factory), fields(m_start = config.m_start, m_end = config.m_end, workers = config.workers))]
pub fn run_search(
    config: &SearchConfig,
    validator_factory: &dyn ValidatorFactory,
) -> Result<(SearchVerdict, SearchStats), SearchError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.workers as usize)
        .build()
        .map_err(|err| SearchError::Internal(format!("failed to build thread pool: {err}")))?;

    let start = Instant::now();
    let validated_keys = AtomicU64::new(0);
    let mut verdict = SearchVerdict::NotFound;

    'outer: for m in config.m_start..=config.m_end {
        info!(m, "checking a hamming distance of {m}");
        let found_flag = AtomicI8::new(FoundFlag::NotFound as i8);

        let outcomes: Vec<Result<WorkerOutcome, SearchError>> = pool.install(|| {
            use rayon::prelude::*;
            (0..config.workers)
                .into_par_iter()
                .map(|rank| {
                    let range = partition(rank, config.workers, m, config.subseed_length)?;
                    if range.is_empty() {
                        return Ok(WorkerOutcome::NotFound);
                    }

                    let mut validator = validator_factory.create()?;
                    let inputs = WorkerInputs {
                        host_seed: config.host_seed,
                        subseed_length: config.subseed_length,
                        mismatches: m,
                        first_index: &range.first_index,
                        last_index: &range.last_index,
                        all_flag: config.all_flag,
                    };
                    let counter = if config.count_flag {
                        Some(&validated_keys)
                    } else {
                        None
                    };
                    run_worker(&inputs, validator.as_mut(), &found_flag, counter)
                })
                .collect()
        });

        let mut found_candidate = None;
        for outcome in outcomes {
            match outcome {
                Ok(WorkerOutcome::Found(candidate)) => {
                    if found_candidate.is_none() {
                        found_candidate = Some(candidate);
                    }
                }
                Ok(WorkerOutcome::NotFound) => {}
                Ok(WorkerOutcome::Error) | Err(_) => {
                    warn!(m, "a worker reported a terminal validator failure");
                    verdict = SearchVerdict::Failure;
                    break 'outer;
                }
            }
        }

        if let Some(candidate) = found_candidate {
            verdict = SearchVerdict::Found(candidate);
            if !config.all_flag {
                break 'outer;
            }
        }
    }

    let stats = SearchStats {
        validated_keys: validated_keys.load(Ordering::Relaxed),
        elapsed: start.elapsed(),
    };
    Ok((verdict, stats))
}
