use tracing_subscriber::EnvFilter;

/// Install the global JSON log subscriber on stderr.
///
/// `RUST_LOG` takes precedence. Otherwise only errors are emitted when
/// `quiet` is set, and `info` and above when it is not.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new("info")
        }
    });

    // A subscriber may already be installed (tests, embedding callers).
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
