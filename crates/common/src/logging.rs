use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the tracing subscriber for binaries and tests.
///
/// Honors `RUST_LOG`; otherwise warns globally with info for our own
/// crates. Safe to call more than once — later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,anytext_session=info,anytext_extract_dispatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
