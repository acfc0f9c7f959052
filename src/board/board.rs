use super::vertex::Vertex;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// The mountain: vertices joined by directed single-step moves.
///
/// Every move crosses exactly one altitude tier boundary, so walking the graph
/// never revisits a tier without changing direction. Exactly one vertex is
/// the start. The graph is validated once on construction and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    graph: DiGraph<Vertex, ()>,
    start: NodeIndex,
}

impl Board {
    pub fn new(vertices: Vec<Vertex>, moves: Vec<(usize, usize)>) -> anyhow::Result<Self> {
        anyhow::ensure!(!vertices.is_empty(), "board has no vertices");
        let mut graph = DiGraph::with_capacity(vertices.len(), moves.len());
        for vertex in vertices {
            anyhow::ensure!(vertex.limit > 0, "vertex {} admits no climbers", graph.node_count());
            graph.add_node(vertex);
        }
        for (a, b) in moves {
            anyhow::ensure!(
                a < graph.node_count() && b < graph.node_count(),
                "move {} -> {} leaves the board",
                a,
                b
            );
            let (a, b) = (NodeIndex::new(a), NodeIndex::new(b));
            anyhow::ensure!(
                graph[a].tier != graph[b].tier,
                "move {} -> {} stays on tier {}",
                a.index(),
                b.index(),
                graph[a].tier
            );
            anyhow::ensure!(
                graph.find_edge(a, b).is_none(),
                "move {} -> {} listed twice",
                a.index(),
                b.index()
            );
            graph.add_edge(a, b, ());
        }
        let starts = graph
            .node_indices()
            .filter(|i| graph[*i].start)
            .collect::<Vec<_>>();
        let start = match starts.as_slice() {
            [start] => *start,
            _ => anyhow::bail!("board needs one start vertex, found {}", starts.len()),
        };
        for i in graph.node_indices() {
            anyhow::ensure!(
                graph.neighbors_directed(i, Direction::Outgoing).next().is_some(),
                "vertex {} has no outgoing move",
                i.index()
            );
            anyhow::ensure!(
                i == start || graph.neighbors_directed(i, Direction::Incoming).next().is_some(),
                "vertex {} has no incoming move",
                i.index()
            );
        }
        Ok(Self { graph, start })
    }
    pub fn start(&self) -> NodeIndex {
        self.start
    }
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn vertex(&self, index: NodeIndex) -> &Vertex {
        &self.graph[index]
    }
    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }
    /// every single-step move as (from, to)
    pub fn moves(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }
    /// Crowding rule: a vertex's limit caps the number of climbers standing
    /// on its tier or any higher one.
    pub fn admits(&self, spots: &[NodeIndex]) -> bool {
        spots.iter().all(|spot| {
            let here = self.vertex(*spot);
            let above = spots
                .iter()
                .filter(|other| self.vertex(**other).tier >= here.tier)
                .count();
            above <= here.limit as usize
        })
    }
}

/// summary line
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.n() as f32;
        let acc = self
            .vertices()
            .map(|i| self.vertex(i).acclimatization as f32)
            .sum::<f32>();
        let ent = self
            .vertices()
            .map(|i| self.vertex(i).entry as f32)
            .sum::<f32>();
        write!(
            f,
            "{} spaces, {} moves, {:.2} avg acc, {:.2} avg ent",
            self.n(),
            self.graph.edge_count(),
            acc / n,
            ent / n
        )
    }
}
