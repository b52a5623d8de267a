use chrono::Local;
use log::{debug, info};
use std::fs::OpenOptions;

pub mod arguments;
pub mod builder;
pub mod error;
pub mod graph;
pub mod parser;
pub mod report;

pub use builder::{build, build_from_reader, build_with, BuildOutcome, BuildStatus};
pub use error::{BuildError, FormatViolation};
pub use graph::{Graph, Vertex, VertexId, Weight};
pub use parser::{MalformedTokenPolicy, ParserConfig, DEFAULT_DELIMITER};
pub use report::{print, render, write_report, Report};

/// Loads the graph named in `args` and emits its report.
///
/// The report is written even when the build was aborted, so the partial
/// graph is visible. Only I/O errors while writing the report are returned.
pub fn run(args: &arguments::Args) -> Result<BuildOutcome, std::io::Error> {
    debug!("Arguments: {:?}", args);
    let outcome = build_with(&args.graph_file, &args.parser_config());

    if args.quiet {
        return Ok(outcome);
    }

    match &args.path_output {
        None => print(&outcome.graph),
        Some(path_output) => {
            let date_time = Local::now().format("%Y%m%d%H%M%S").to_string();
            // Create dir if it doesnt already exist.
            if !std::path::Path::new(path_output).exists() {
                std::fs::create_dir_all(path_output)?;
            }
            let output_filename = format!("{}/{}.txt", path_output, date_time);
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&output_filename)?;
            write_report(&outcome.graph, file)?;
            info!("Report written to {}", output_filename);
        }
    }
    Ok(outcome)
}
