use std::process::ExitCode;

use atomas_estimate::{
    analysis::{AnalysisOptions, run_analysis},
    atoms::ATOM_SEQUENCE,
};

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_tracing();

    match run_analysis(&ATOM_SEQUENCE, &AnalysisOptions::default()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
