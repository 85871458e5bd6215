//! Nova bookmark store inspector
//!
//! Run with: cargo run --bin nova -- pins list

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use nova_theme::cli::{run, Cli};

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

// The inspector has no browser build
#[cfg(target_arch = "wasm32")]
fn main() {}
