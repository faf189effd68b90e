use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "rhyme_finder=debug,warn"
    } else {
        "rhyme_finder=info,warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. Logs go to stderr so stdout stays free
/// for results.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json().flatten_event(true)).init(),
    }
}
