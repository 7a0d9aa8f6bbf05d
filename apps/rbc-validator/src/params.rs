// [apps/rbc-validator/src/params.rs]
/*!
 * =================================================================
 * APARATO: ARGUMENT VALIDATION & PARAMETER ASSEMBLY
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: VALIDAR LA CLI Y ENSAMBLAR LA CONFIGURACIÓN DE BÚSQUEDA
 *
 * Generaliza `validateArgs`/`parse_params` del C original: longitud de
 * `--subkey`/`--mismatches`, interpretación posicional por modo
 * (`none`/cifrado/`ecc`/hash), y decodificación hex de cada campo.
 * =================================================================
 */

use rbcv_core_math::bitstring::BitString256;
use rbcv_domain_crypto::{Algo, AlgoInputs};

use crate::cli::Cli;
use crate::errors::CliError;

/// Longitud de la forma canónica hiphenada de un UUID (36 caracteres, sin
/// NUL) — resuelve la inconsistencia `UUID_STR_LEN` del C original (ver
/// spec.md §9).
const UUID_STR_LEN: usize = 36;

/// Parámetros completamente validados de una invocación de la CLI, listos
/// para construir un [`rbcv_domain_search::driver::SearchConfig`] y una
/// fábrica de validador.
pub struct ValidatedParams {
    /// Primitivo criptográfico elegido.
    pub algo: Algo,
    /// Etiqueta legible del modo, para los banners `--verbose`.
    pub mode_label: String,
    /// Semilla de referencia confiable H. Ausente bajo `--random`/
    /// `--benchmark`, que la autogeneran.
    pub host_seed: Option<BitString256>,
    /// Longitud del subseed sujeto a corrupción, en bits.
    pub subseed_length: u32,
    /// Primer valor de m en el barrido (inclusive).
    pub m_start: u32,
    /// Último valor de m en el barrido (inclusive).
    pub m_end: u32,
    /// Entradas auxiliares ya decodificadas para el modo elegido. Ausente
    /// bajo `--random`/`--benchmark`, que las autogeneran tras plantar el
    /// candidato.
    pub aux_inputs: Option<AlgoInputs>,
    /// Si se autogeneran host/client seeds (`--random`).
    pub random: bool,
    /// Si se autogeneran host/client seeds con el candidato plantado en el
    /// rango medio (`--benchmark`).
    pub benchmark: bool,
    /// Número de workers.
    pub workers: u32,
    /// Si no se detiene en el primer hallazgo.
    pub all_flag: bool,
    /// Si se acumulan y reportan los candidatos validados.
    pub count_flag: bool,
    /// Si se emiten líneas INFO de progreso en stderr.
    pub verbose: bool,
}

fn decode_hex(field: &'static str, raw: &str) -> Result<Vec<u8>, CliError> {
    hex::decode(raw).map_err(|source| CliError::HexDecode { field, source })
}

/// Valida y ensambla los parámetros de una invocación, replicando
/// `validateArgs`/`parse_params`/`checkUsage` del C original sobre el
/// menú de modos de `rbcv-domain-crypto`.
///
/// # Errors
/// `CliError::Argument` ante cualquier violación de dominio (modo
/// desconocido, longitudes incompatibles, conteo posicional incorrecto);
/// `CliError::HexDecode` ante una entrada posicional no hexadecimal.
pub fn validate(cli: &Cli) -> Result<ValidatedParams, CliError> {
    let algo = Algo::parse(&cli.mode)
        .ok_or_else(|| CliError::Argument(format!("unsupported --mode '{}'", cli.mode)))?;

    if cli.subkey > 256 {
        return Err(CliError::Argument(
            "--subkey cannot exceed the seed size of 256 bits.".to_string(),
        ));
    }
    if cli.subkey < 1 {
        return Err(CliError::Argument("--subkey must be at least 1.".to_string()));
    }

    if cli.mismatches > 256 {
        return Err(CliError::Argument(
            "--mismatches cannot exceed the seed size of 256 bits.".to_string(),
        ));
    }

    if cli.mismatches < 0 {
        if cli.random {
            return Err(CliError::Argument(
                "--mismatches must be set and non-negative when using --random.".to_string(),
            ));
        }
        if cli.benchmark {
            return Err(CliError::Argument(
                "--mismatches must be set and non-negative when using --benchmark.".to_string(),
            ));
        }
        if cli.fixed {
            return Err(CliError::Argument(
                "--mismatches must be set and non-negative when using --fixed.".to_string(),
            ));
        }
    } else if cli.mismatches as u32 > cli.subkey {
        return Err(CliError::Argument(
            "--mismatches cannot be set larger than --subkey.".to_string(),
        ));
    }

    let m_end_default = cli.subkey;
    let (m_start, m_end) = if cli.fixed {
        let m = cli.mismatches as u32;
        (m, m)
    } else if cli.mismatches >= 0 {
        (0, cli.mismatches as u32)
    } else {
        (0, m_end_default)
    };

    let workers = cli.threads.unwrap_or_else(|| num_cpus::get() as u32).max(1);

    if cli.random || cli.benchmark {
        if !cli.inputs.is_empty() {
            return Err(CliError::Argument(
                "positional inputs are not accepted alongside --random/--benchmark.".to_string(),
            ));
        }
        return Ok(ValidatedParams {
            algo,
            mode_label: cli.mode.clone(),
            host_seed: None,
            subseed_length: cli.subkey,
            m_start,
            m_end,
            aux_inputs: None,
            random: cli.random,
            benchmark: cli.benchmark,
            workers,
            all_flag: cli.all,
            count_flag: cli.count,
            verbose: cli.verbose,
        });
    }

    if cli.inputs.is_empty() {
        return Err(CliError::Argument(
            "HOST_SEED_HEX is required unless --random or --benchmark is set.".to_string(),
        ));
    }

    let host_seed_hex = &cli.inputs[0];
    if host_seed_hex.len() != 64 {
        return Err(CliError::Argument("HOST_SEED must be 32 byte(s) long.".to_string()));
    }
    let host_seed_bytes: [u8; 32] = decode_hex("HOST_SEED", host_seed_hex)?
        .try_into()
        .map_err(|_| CliError::Argument("HOST_SEED must be 32 byte(s) long.".to_string()))?;
    let host_seed = BitString256::from_be_bytes(host_seed_bytes);

    let aux_inputs = parse_positional_aux(algo, &cli.inputs)?;

    Ok(ValidatedParams {
        algo,
        mode_label: cli.mode.clone(),
        host_seed: Some(host_seed),
        subseed_length: cli.subkey,
        m_start,
        m_end,
        aux_inputs: Some(aux_inputs),
        random: false,
        benchmark: false,
        workers,
        all_flag: cli.all,
        count_flag: cli.count,
        verbose: cli.verbose,
    })
}

fn parse_positional_aux(algo: Algo, inputs: &[String]) -> Result<AlgoInputs, CliError> {
    if algo == Algo::None {
        if inputs.len() != 2 {
            return Err(CliError::Argument(
                "mode 'none' requires HOST_SEED_HEX and CLIENT_SEED_HEX.".to_string(),
            ));
        }
        let target = decode_hex("CLIENT_SEED", &inputs[1])?;
        return Ok(AlgoInputs {
            target,
            uuid_or_salt: Vec::new(),
            iv: Vec::new(),
        });
    }

    if algo.is_cipher() {
        if inputs.len() < 3 || inputs.len() > 4 {
            return Err(CliError::Argument(
                "cipher modes require HOST_SEED_HEX, CLIENT_CIPHER_HEX, UUID[, IV].".to_string(),
            ));
        }
        let target = decode_hex("CLIENT_CIPHER", &inputs[1])?;

        let uuid_raw = &inputs[2];
        if uuid_raw.len() != UUID_STR_LEN {
            return Err(CliError::Argument(format!(
                "UUID not {UUID_STR_LEN} characters long."
            )));
        }
        let uuid = uuid::Uuid::parse_str(uuid_raw)
            .map_err(|_| CliError::Argument("UUID not in canonical form.".to_string()))?;
        let uuid_or_salt = uuid.as_bytes().to_vec();

        let iv = if inputs.len() == 4 {
            decode_hex("IV", &inputs[3])?
        } else {
            Vec::new()
        };

        return Ok(AlgoInputs {
            target,
            uuid_or_salt,
            iv,
        });
    }

    if algo.is_ecc() {
        if inputs.len() != 2 {
            return Err(CliError::Argument(
                "mode 'ecc' requires HOST_SEED_HEX and CLIENT_PUB_KEY_HEX.".to_string(),
            ));
        }
        let target = decode_hex("CLIENT_PUB_KEY", &inputs[1])?;
        return Ok(AlgoInputs {
            target,
            uuid_or_salt: Vec::new(),
            iv: Vec::new(),
        });
    }

    // Hash/XOF modes.
    if inputs.len() < 2 || inputs.len() > 3 {
        return Err(CliError::Argument(
            "hash modes require HOST_SEED_HEX, CLIENT_DIGEST_HEX[, SALT_HEX].".to_string(),
        ));
    }
    let target = decode_hex("CLIENT_DIGEST", &inputs[1])?;
    let uuid_or_salt = if inputs.len() == 3 {
        decode_hex("SALT", &inputs[2])?
    } else {
        Vec::new()
    };
    Ok(AlgoInputs {
        target,
        uuid_or_salt,
        iv: Vec::new(),
    })
}
