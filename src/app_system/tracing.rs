/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Output goes
/// to stderr so the shell's stdout only carries rendered views.
///
/// ```bash
/// RUST_LOG=debug storefront shop                 # everything
/// RUST_LOG=storefront::clients=debug storefront  # per-module
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
