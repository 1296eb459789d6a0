// Casework test runner
// Usage: cargo run --bin test_runner -- [--cases DIR] [--exe PATH] [--dry-run]

fn main() {
    // Structured logging on stderr; stdout carries the run's progress.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    casework::cli::run();
}
