use tracing::{Subscriber, subscriber::set_global_default};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub const LOG_FILTER_VAR: &str = "BENCH_LOG";

/// Compose the stderr subscriber used by the gate binary.
///
/// Stdout carries the human verdict lines, so log records never go there.
pub fn get_subscriber(default_filter: impl AsRef<str>) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter.as_ref()));
    let formatting_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    Registry::default().with(env_filter).with(formatting_layer)
}

/// Register a subscriber as global default. Returns false when one is already installed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> bool {
    set_global_default(subscriber).is_ok()
}
