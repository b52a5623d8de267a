use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::graph::Graph;

/// Displays a graph as a text listing, one block per slot.
///
/// ```text
/// Print Adjacency List
///
/// Vertex ID
/// Edges[NeighborID,Weight]
///
/// V:0
/// [2,5][3,9]
///
/// ```
pub struct Report<'a>(pub &'a Graph);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Print Adjacency List\n\n")?;
        write!(f, "Vertex ID\nEdges[NeighborID,Weight]\n\n")?;
        for (index, neighbors) in self.0.iter().enumerate() {
            writeln!(f, "V:{index}")?;
            for neighbor in neighbors {
                write!(f, "[{},{}]", neighbor.id, neighbor.weight)?;
            }
            write!(f, "\n\n")?;
        }
        Ok(())
    }
}

pub fn render(graph: &Graph) -> String {
    Report(graph).to_string()
}

pub fn write_report<W: Write>(graph: &Graph, mut out: W) -> io::Result<()> {
    write!(out, "{}", Report(graph))?;
    out.flush()
}

/// Writes the report to stdout.
pub fn print(graph: &Graph) {
    print!("{}", Report(graph));
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Print Adjacency List\n\nVertex ID\nEdges[NeighborID,Weight]\n\n";

    #[test]
    fn empty_graph_is_header_only() {
        assert_eq!(render(&Graph::new()), HEADER);
    }

    #[test]
    fn one_block_per_slot() {
        let graph = Graph::from(vec![vec![(2, 5), (3, 9)], vec![(1, 5)]]);
        let expected = format!("{HEADER}V:0\n[2,5][3,9]\n\nV:1\n[1,5]\n\n");
        assert_eq!(render(&graph), expected);
    }

    #[test]
    fn empty_slot_and_negative_values() {
        let graph = Graph::from(vec![vec![], vec![(-1, -7)]]);
        let expected = format!("{HEADER}V:0\n\n\nV:1\n[-1,-7]\n\n");
        assert_eq!(render(&graph), expected);
    }

    #[test]
    fn write_report_matches_render() {
        let graph = Graph::from(vec![vec![(4, 2)], vec![], vec![(0, 1), (1, 1)]]);
        let mut out = Vec::new();
        write_report(&graph, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&graph));
    }
}
