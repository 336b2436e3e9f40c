//! Opt-in `tracing` setup for hosts embedding `dash-plot`.
//!
//! Render-thread events carry the thread name, so the subscriber installed
//! here prints it. Hosts with their own subscriber never need this module.

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "dash_plot=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_DIRECTIVES));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Same as [`init_default_tracing`] with explicit filter directives, e.g.
/// `"dash_plot::api=debug"`. Unparseable directives install nothing.
#[must_use]
pub fn init_tracing_with_directives(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .compact()
        .try_init()
        .is_ok()
}
