// [libs/domain/search/src/worker.rs]
/*!
 * =================================================================
 * APARATO: SEARCH WORKER
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: RECORRIDO DE UNA PARTICIÓN COLEX CONTRA UN VALIDADOR
 *
 * Un worker posee en exclusiva su `PermIterator` y su instancia de
 * `ValidatorIface`; coordina con sus pares únicamente a través del flag
 * atómico compartido `found_flag`. La latencia máxima de cancelación tras
 * el éxito de un par es de una llamada al validador más un paso del iterador.
 * =================================================================
 */

use std::sync::atomic::{AtomicI8, AtomicU64, Ordering};

use crate::errors::SearchError;
use crate::perm_iterator::PermIterator;
use crate::validator::ValidatorIface;
use rbcv_core_math::bitstring::BitString256;
use rug::Integer;
use tracing::trace;

/// Estados del flag compartido `found_flag`. `NotFound` es el valor inicial
/// de cada barrido por `m`; cualquier worker puede transicionar a `Found` o
/// a `Error`, nunca de vuelta.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundFlag {
    /// Ningún worker ha encontrado ni fallado todavía.
    NotFound = 0,
    /// Un worker encontró una semilla que coincide con el artefacto objetivo.
    Found = 1,
    /// Un worker sufrió un fallo terminal del validador.
    Error = -1,
}

impl FoundFlag {
    fn from_raw(raw: i8) -> Self {
        match raw {
            1 => FoundFlag::Found,
            -1 => FoundFlag::Error,
            _ => FoundFlag::NotFound,
        }
    }
}

/// Resultado de un worker al agotar su partición o al observar cancelación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// La semilla candidata que coincidió con el artefacto objetivo.
    Found(BitString256),
    /// La partición se agotó sin hallazgo, o se canceló por un par exitoso.
    NotFound,
    /// El validador falló de forma terminal.
    Error,
}

/// Entradas inmutables compartidas por todos los workers de un barrido.
pub struct WorkerInputs<'a> {
    /// Semilla de referencia confiable H.
    pub host_seed: BitString256,
    /// Longitud del subseed sujeto a corrupción (n).
    pub subseed_length: u32,
    /// Popcount fijo de esta pasada (m).
    pub mismatches: u32,
    /// Primer índice colex (inclusive) de la partición de este worker.
    pub first_index: &'a Integer,
    /// Último índice colex (inclusive) de la partición de este worker.
    pub last_index: &'a Integer,
    /// `true` si el barrido no debe detenerse en el primer hallazgo.
    pub all_flag: bool,
}

/// Ejecuta el recorrido de un worker sobre su partición.
///
/// # Errors
/// `SearchError` si la partición es inválida (propagado desde
/// [`PermIterator::create`]) o si el validador falla de forma terminal; en
/// este último caso también se escribe `found_flag = Error`.
pub fn run_worker(
    inputs: &WorkerInputs<'_>,
    validator: &mut dyn ValidatorIface,
    found_flag: &AtomicI8,
    validated_keys: Option<&AtomicU64>,
) -> Result<WorkerOutcome, SearchError> {
    let iterator = PermIterator::create(
        inputs.subseed_length,
        inputs.mismatches,
        inputs.first_index,
        inputs.last_index,
    )?;

    let mut candidate = inputs.host_seed;
    let mut local_count: u64 = 0;

    for step in iterator {
        let flag = FoundFlag::from_raw(found_flag.load(Ordering::Relaxed));
        if !inputs.all_flag && flag != FoundFlag::NotFound {
            break;
        }

        for position in &step.cleared {
            candidate.toggle_bit(*position);
        }
        for position in &step.set {
            candidate.toggle_bit(*position);
        }

        if let Err(err) = validator.derive(&candidate) {
            found_flag.store(FoundFlag::Error as i8, Ordering::Relaxed);
            if let Some(counter) = validated_keys {
                counter.fetch_add(local_count, Ordering::Relaxed);
            }
            return Err(err);
        }
        local_count += 1;

        if validator.matches() {
            if !inputs.all_flag {
                found_flag.store(FoundFlag::Found as i8, Ordering::Relaxed);
            }
            trace!(candidate = %candidate.to_hex(), "candidate matched the target artifact");
            if let Some(counter) = validated_keys {
                counter.fetch_add(local_count, Ordering::Relaxed);
            }
            return Ok(WorkerOutcome::Found(candidate));
        }
    }

    if let Some(counter) = validated_keys {
        counter.fetch_add(local_count, Ordering::Relaxed);
    }
    Ok(WorkerOutcome::NotFound)
}
