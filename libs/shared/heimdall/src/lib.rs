// [libs/shared/heimdall/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HEIMDALL NEURAL OBSERVER
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: GESTIÓN DE TELEMETRÍA, TRAZADO Y CAPTURA DE PÁNICOS
 *
 * Instala un único suscriptor `tracing` global y un panic hook para la
 * CLI `rbc_validator` y los crates de dominio que instrumentan spans
 * internos (`rbcv-domain-search`, `rbcv-domain-crypto`). El contrato
 * stdout/stderr de la CLI (hex de la semilla encontrada, banners de
 * progreso por `m`) se escribe directamente con `println!`/`eprintln!`
 * y no pasa por este suscriptor.
 * =================================================================
 */

use std::panic;

use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Inicializa el suscriptor de trazas y el hook de pánicos.
///
/// El filtro por defecto emite `debug` en builds de desarrollo e `info`
/// en release para el dominio de `service_name`, y silencia crates de
/// infraestructura ruidosos. Puede sobreescribirse con `RUST_LOG`.
///
/// # Panics
/// Entra en pánico si otro suscriptor global ya fue inicializado en el
/// proceso (comportamiento estándar de `tracing_subscriber::util::SubscriberInitExt::init`).
pub fn init_tracing(service_name: &str) {
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "{service_name}={level}",
            level = if cfg!(debug_assertions) { "debug" } else { "info" }
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(environmental_filter)
        .with(fmt::layer().compact().with_target(false))
        .init();

    let service_name_owned = service_name.to_string();
    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        error!(
            target: "panic_monitor",
            service = %service_name_owned,
            location = %location,
            "worker thread panicked: {}",
            payload
        );
    }));
}
