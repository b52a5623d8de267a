use clap::Parser;
use std::fmt::Display;
use std::path::PathBuf;

use crate::parser::{is_valid_delimiter, MalformedTokenPolicy, ParserConfig, DEFAULT_DELIMITER};

#[derive(Parser, Debug)]
#[command(version, about = "Loads a weighted adjacency list and prints it", long_about = None)]
pub struct Args {
    /// File to load. Each line is `<label> <id><delim><weight> ...`; the label is ignored
    /// and the line number decides the vertex index.
    pub graph_file: PathBuf,
    /// Character between a neighbor id and its weight.
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER, value_parser = parse_delimiter)]
    pub delimiter: char,
    /// What to do when a number is expected but something else is found.
    #[arg(short, long, value_enum, default_value_t = MalformedTokenPolicy::Reject)]
    pub malformed: MalformedTokenPolicy,
    /// Write the report to a timestamped file in this directory instead of stdout.
    #[arg(long = "path")]
    pub path_output: Option<String>,
    /// Only load the graph, skip the report.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.delimiter).with_policy(self.malformed)
    }
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("expected a single character, got {s:?}")),
    };
    if !is_valid_delimiter(c) {
        return Err(format!("{c:?} cannot be told apart from the numbers it separates"));
    }
    Ok(c)
}

impl Display for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph file:             {}", self.graph_file.display())?;
        writeln!(f, "Delimiter:              {:?}", self.delimiter)?;
        writeln!(f, "Malformed tokens:       {}", self.malformed)?;
        match &self.path_output {
            Some(path) => writeln!(f, "Output path:            {}", path)?,
            None => writeln!(f, "Output path:            stdout")?,
        }
        writeln!(f, "Quiet:                  {}", self.quiet)?;
        Ok(())
    }
}

/// Implemented so that tests are easier to write.
impl Default for Args {
    fn default() -> Self {
        Args {
            graph_file: PathBuf::new(),
            delimiter: DEFAULT_DELIMITER,
            malformed: MalformedTokenPolicy::Reject,
            path_output: None,
            quiet: false,
        }
    }
}
