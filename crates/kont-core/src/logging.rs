//! Structured logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so dependent crates can log through `kont_core::trace!` and
//! friends. With `tracing-json` it also offers a one-call JSON subscriber
//! for binaries and test harnesses. Without either feature the module is
//! empty and logging compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Falls back to the `warn` level when `RUST_LOG` is unset or invalid.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}
