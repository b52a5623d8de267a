use log::{debug, error, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::BuildError;
use crate::graph::Graph;
use crate::parser::{parse_line, ParserConfig};

/// Whether a build read its whole input.
#[derive(Debug)]
pub enum BuildStatus {
    Complete,
    /// The build stopped early; the graph holds what was read before.
    Aborted(BuildError),
}

/// Result of a build: always a graph, plus how far the build got.
#[derive(Debug)]
pub struct BuildOutcome {
    pub graph: Graph,
    pub status: BuildStatus,
}

impl BuildOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self.status, BuildStatus::Complete)
    }

    pub fn error(&self) -> Option<&BuildError> {
        match &self.status {
            BuildStatus::Complete => None,
            BuildStatus::Aborted(e) => Some(e),
        }
    }

    /// Drops the status and keeps the graph, complete or not.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// `Err` carries the partial graph alongside the error.
    pub fn into_result(self) -> Result<Graph, (Graph, BuildError)> {
        match self.status {
            BuildStatus::Complete => Ok(self.graph),
            BuildStatus::Aborted(e) => Err((self.graph, e)),
        }
    }
}

/// Reads the adjacency list in `path`, splitting ids from weights with
/// `delimiter`.
///
/// Line `i` (0-based) becomes slot `i`. The label at the start of each line
/// is ignored. If the file cannot be opened the graph is empty; if a line is
/// malformed the graph holds every line up to and including that one.
pub fn build<P: AsRef<Path>>(path: P, delimiter: char) -> BuildOutcome {
    build_with(path, &ParserConfig::new(delimiter))
}

pub fn build_with<P: AsRef<Path>>(path: P, config: &ParserConfig) -> BuildOutcome {
    let path = path.as_ref();
    debug!("Loading graph from {}", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            let e = BuildError::Open {
                path: path.to_path_buf(),
                source,
            };
            error!("{e}");
            return BuildOutcome {
                graph: Graph::new(),
                status: BuildStatus::Aborted(e),
            };
        }
    };
    // The reader, and with it the file, is dropped on every return below.
    build_from_reader(BufReader::new(file), config)
}

/// Same as [`build_with`] for an already opened source.
pub fn build_from_reader<R: BufRead>(reader: R, config: &ParserConfig) -> BuildOutcome {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                let e = BuildError::Read {
                    line: line_number,
                    source,
                };
                error!("{e}");
                return BuildOutcome {
                    graph,
                    status: BuildStatus::Aborted(e),
                };
            }
        };

        let slot = graph.push_slot();
        if let Err(violation) = parse_line(&line, config, slot) {
            let e = BuildError::Format {
                line: line_number,
                violation,
            };
            error!("{e}");
            return BuildOutcome {
                graph,
                status: BuildStatus::Aborted(e),
            };
        }
    }

    info!(
        "Loaded graph with {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );
    BuildOutcome {
        graph,
        status: BuildStatus::Complete,
    }
}
