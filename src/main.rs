use clap::Parser;
use log::*;
use std::process::ExitCode;
use weighted_adjlist::arguments::Args;

fn main() -> ExitCode {
    // initialize env_logger if not in silent release mode
    #[cfg(not(all(not(debug_assertions), feature = "silent-release")))]
    {
        env_logger::init();
        debug!("envlogger init");
    }
    let args = Args::parse();
    info!("Loading {}", args.graph_file.display());

    match weighted_adjlist::run(&args) {
        Ok(outcome) if outcome.is_complete() => ExitCode::SUCCESS,
        Ok(outcome) => {
            if let Some(e) = outcome.error() {
                eprintln!("Graph incomplete: {}", e);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("adjlist received error: {}", e);
            ExitCode::FAILURE
        }
    }
}
