//! Operator tool: build and run the OC Mirror web application container.
//!
//! Run with: cargo run --bin oc-mirror-deploy -- --help

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use clap::Parser;
    use oc_mirror_web::cli::{deploy::execute, engine::which_lookup, Cli, ProcessRunner};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // --help exits 0 from inside parse()
    let cli = Cli::parse();

    match execute(&cli, ProcessRunner, which_lookup).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::ExitCode::from(1)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
