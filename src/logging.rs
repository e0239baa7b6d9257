use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging for binaries and examples embedding the crate.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("catalog_tree=info".parse().unwrap()),
        )
        .with(console_layer)
        .init();
}
