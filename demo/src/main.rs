use std::process::ExitCode;

use dummy_demo::Config;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = Config::from_env();
    let mut out = std::io::stdout().lock();
    match dummy_demo::run(&config, &mut out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
