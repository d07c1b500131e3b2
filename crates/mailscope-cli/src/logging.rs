use tracing_subscriber::EnvFilter;

/// Setup logging of lookup events on standard error.
///
/// `RUST_LOG` overrides the level chosen by `--verbose`, e.g.
///   RUST_LOG=mailscope_recon=debug
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init()
        .ok();
}
