use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `--debug` forces debug output for this crate. Otherwise `MYSH_LOG`, then
/// `RUST_LOG`, pick the filter, and only warnings are shown by default.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mysh=debug")
    } else {
        EnvFilter::try_from_env("MYSH_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("mysh=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
