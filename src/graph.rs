use std::ops::Index;

/// Identifier stored for a neighbor, as read from the input file.
pub type VertexId = i32;
/// Edge weight stored for a neighbor.
pub type Weight = i32;

/// A neighbor record: the id read from the file and the weight of the edge
/// leading to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub id: VertexId,
    pub weight: Weight,
}

impl Vertex {
    /// Id of a vertex that has not been read yet.
    pub const UNSET_ID: VertexId = -1;

    pub fn new(id: VertexId, weight: Weight) -> Self {
        Vertex { id, weight }
    }
}

/// `id = -1`, `weight = 0`.
impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            id: Vertex::UNSET_ID,
            weight: 0,
        }
    }
}

impl From<(VertexId, Weight)> for Vertex {
    fn from((id, weight): (VertexId, Weight)) -> Self {
        Vertex::new(id, weight)
    }
}

/// Adjacency list of a weighted, directed graph.
///
/// # Vertex identity
/// A vertex *is* its slot index: the `i`-th line of the input becomes slot
/// `i`, whatever label that line starts with. The label is read and thrown
/// away by the parser, so two lines both labelled `7` still produce two
/// distinct vertices, and a file whose labels are `10, 20, 30` produces
/// slots `0, 1, 2`.
///
/// The neighbor ids inside a slot are stored exactly as they appear in the
/// file. Nothing checks that they refer to an existing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    slots: Vec<Vec<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { slots: Vec::new() }
    }

    /// Number of slots, i.e. lines consumed.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Neighbors of the vertex in slot `index`, in file order.
    pub fn slot(&self, index: usize) -> Option<&[Vertex]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// Slots in order; the position in the iteration is the vertex index.
    pub fn iter(&self) -> impl Iterator<Item = &[Vertex]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Total number of neighbor records over all slots.
    pub fn edge_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn into_slots(self) -> Vec<Vec<Vertex>> {
        self.slots
    }

    /// Appends an empty slot and returns it for the parser to fill.
    pub(crate) fn push_slot(&mut self) -> &mut Vec<Vertex> {
        self.slots.push(Vec::new());
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }
}

impl Index<usize> for Graph {
    type Output = [Vertex];

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl From<Vec<Vec<Vertex>>> for Graph {
    fn from(slots: Vec<Vec<Vertex>>) -> Self {
        Graph { slots }
    }
}

/// Builds a graph from `(id, weight)` pairs, mostly for comparisons in tests.
impl From<Vec<Vec<(VertexId, Weight)>>> for Graph {
    fn from(slots: Vec<Vec<(VertexId, Weight)>>) -> Self {
        Graph {
            slots: slots
                .into_iter()
                .map(|slot| slot.into_iter().map(Vertex::from).collect())
                .collect(),
        }
    }
}
