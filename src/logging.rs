use tracing_subscriber::{fmt, EnvFilter};

/// Installs the fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .try_init();
}
