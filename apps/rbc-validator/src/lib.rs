// [apps/rbc-validator/src/lib.rs]
/*!
 * =================================================================
 * APARATO: RBC VALIDATOR ORCHESTRATION
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: ENSAMBLAR CLI -> BÚSQUEDA -> CONTRATO DE SALIDA
 *
 * `main.rs` solo invoca a [`run`] y traduce su [`ExitStatus`] al código de
 * salida del proceso. El contrato de stdout/stderr de §6/§7 se escribe
 * directamente aquí vía `println!`/`eprintln!`, no a través de `tracing`
 * (que va a stderr por separado bajo `--verbose`, ver `rbcv-shared-heimdall`).
 * =================================================================
 */

pub mod cli;
pub mod errors;
pub mod params;
pub mod random_seed;

use std::io::Write;

use clap::Parser;
use tracing::info;

use cli::Cli;
use errors::CliError;
use rbcv_domain_crypto::build_validator_factory;
use rbcv_domain_search::driver::{run_search, SearchConfig, SearchVerdict};

/// Código de salida del proceso, tal como lo exige §6/§7 de la
/// especificación: `Found = 0`, `NotFound = 1`, `Failure = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Se halló una semilla candidata coincidente.
    Found = 0,
    /// Se agotó el barrido completo sin hallazgo.
    NotFound = 1,
    /// Un argumento era inválido, o un worker sufrió un fallo terminal.
    Failure = 2,
}

/// Corre la CLI completa: analiza argumentos, valida, arma la
/// configuración de búsqueda (auto-generándola bajo `--random`/
/// `--benchmark` cuando corresponda), despacha [`run_search`], y escribe
/// el contrato de stdout/stderr. Retorna el [`ExitStatus`] que `main.rs`
/// traduce al código de salida del proceso.
pub fn run() -> ExitStatus {
    rbcv_shared_heimdall::init_tracing("rbc_validator");

    let cli = Cli::parse();
    match run_with(&cli) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitStatus::Failure
        }
    }
}

fn run_with(cli: &Cli) -> Result<ExitStatus, CliError> {
    let validated = params::validate(cli)?;

    let (host_seed, aux_inputs) = if validated.random || validated.benchmark {
        let mismatches = if validated.m_start == validated.m_end {
            validated.m_start
        } else {
            validated.m_end
        };
        let scenario = random_seed::generate(
            validated.algo,
            validated.subseed_length,
            mismatches,
            validated.workers,
            validated.benchmark,
        )?;
        if validated.verbose {
            eprintln!(
                "INFO: generated host seed {} and client seed {} at Hamming distance {}",
                scenario.host_seed.to_hex(),
                scenario.client_seed.to_hex(),
                mismatches
            );
        }
        (scenario.host_seed, scenario.aux_inputs)
    } else {
        (
            validated.host_seed.expect("validated by params::validate"),
            validated
                .aux_inputs
                .expect("validated by params::validate"),
        )
    };

    if validated.verbose {
        eprintln!(
            "INFO: mode={} subkey={} sweep=[{}, {}] workers={}",
            validated.mode_label,
            validated.subseed_length,
            validated.m_start,
            validated.m_end,
            validated.workers
        );
    }

    let factory = build_validator_factory(validated.algo, aux_inputs)?;

    let config = SearchConfig {
        host_seed,
        subseed_length: validated.subseed_length,
        m_start: validated.m_start,
        m_end: validated.m_end,
        workers: validated.workers,
        all_flag: validated.all_flag,
        count_flag: validated.count_flag,
    };

    let (verdict, stats) = run_search(&config, factory.as_ref())?;

    if validated.verbose {
        info!(
            elapsed_secs = stats.elapsed.as_secs_f64(),
            validated_keys = stats.validated_keys,
            "search finished"
        );
    }
    if validated.count_flag {
        eprintln!(
            "INFO: validated {} candidate(s) in {:.3}s",
            stats.validated_keys,
            stats.elapsed.as_secs_f64()
        );
    }

    match verdict {
        SearchVerdict::Found(candidate) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let _ = writeln!(handle, "{}", candidate.to_hex());
            Ok(ExitStatus::Found)
        }
        SearchVerdict::NotFound => Ok(ExitStatus::NotFound),
        SearchVerdict::Failure => Ok(ExitStatus::Failure),
    }
}
