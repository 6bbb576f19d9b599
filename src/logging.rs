use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging to stderr.
///
/// Progress output belongs to stdout and stays plain text; the tracing
/// layer only carries diagnostics, filtered by `RUST_LOG` (default
/// `warn`).
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
