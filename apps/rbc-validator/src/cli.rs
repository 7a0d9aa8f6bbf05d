// [apps/rbc-validator/src/cli.rs]
/*!
 * =================================================================
 * APARATO: CLI DIRECTIVES
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: ANÁLISIS DE ARGUMENTOS DE LÍNEA DE COMANDOS
 *
 * Superficie exacta de §6 de la especificación. El análisis de los
 * argumentos posicionales (`HOST_SEED_HEX`, `CLIENT_ARTIFACT_HEX`,
 * `UUID|SALT`, `IV`) se hace en `params.rs`, ya que su interpretación
 * depende del modo elegido.
 * =================================================================
 */

use clap::Parser;

/// Directivas de línea de comandos para `rbc_validator`.
#[derive(Parser, Debug)]
#[command(
    name = "rbc_validator",
    version,
    about = "Rank-based combinatorial search for a Hamming-corrupted 256-bit seed."
)]
pub struct Cli {
    /// Primitivo criptográfico a validar: uno de
    /// `none|aes|chacha20|ecc|md5|sha1|sha224|sha256|sha384|sha512|
    /// sha3-224|sha3-256|sha3-384|sha3-512|shake128|shake256|kang12`.
    #[arg(long)]
    pub mode: String,

    /// Distancia de Hamming máxima a explorar. `-1` (por defecto) significa
    /// "igual a `--subkey`".
    #[arg(long, allow_hyphen_values = true, default_value_t = -1)]
    pub mismatches: i64,

    /// Longitud del subseed sujeto a corrupción, en bits. Por defecto, los
    /// 256 bits completos de la semilla.
    #[arg(long, default_value_t = 256)]
    pub subkey: u32,

    /// Si está presente, solo se prueba `m = mismatches` en vez de barrer
    /// `m = 0..=mismatches`.
    #[arg(long)]
    pub fixed: bool,

    /// Si está presente, el barrido no se detiene en el primer hallazgo.
    #[arg(long)]
    pub all: bool,

    /// Si está presente, se acumulan y reportan los candidatos validados.
    #[arg(long)]
    pub count: bool,

    /// Si está presente, emite líneas INFO de progreso en stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Autogenera una semilla de referencia y un candidato cliente a
    /// distancia `mismatches`, y corre la búsqueda sobre ellos.
    #[arg(long, conflicts_with = "benchmark")]
    pub random: bool,

    /// Como `--random`, pero planta el candidato en el rango medio de cada
    /// nivel de mismatch para medir un rendimiento representativo.
    #[arg(long, conflicts_with = "random")]
    pub benchmark: bool,

    /// Número de workers a repartir por cada valor de m. Por defecto, el
    /// número de CPUs lógicas.
    #[arg(long)]
    pub threads: Option<u32>,

    /// `[HOST_SEED_HEX [CLIENT_ARTIFACT_HEX [UUID|SALT [IV]]]]`, cuya
    /// interpretación exacta depende de `--mode` (ver §6).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}
