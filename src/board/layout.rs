use super::board::Board;
use super::vertex::Vertex;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// File form of a board: a vertex list plus moves as index pairs.
///
/// ```json
/// { "vertices": [{ "reward": 1, "entry": 1, "tier": 0, "start": true }, ...],
///   "moves": [[0, 1], [1, 0], ...] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub vertices: Vec<Vertex>,
    pub moves: Vec<(usize, usize)>,
}

impl Layout {
    pub fn load(path: &Path) -> anyhow::Result<Board> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read board {}", path.display()))?;
        let layout = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse board {}", path.display()))?;
        Board::try_from(layout).with_context(|| format!("invalid board {}", path.display()))
    }
}

impl TryFrom<Layout> for Board {
    type Error = anyhow::Error;
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        Board::new(layout.vertices, layout.moves)
    }
}

impl From<&Board> for Layout {
    fn from(board: &Board) -> Self {
        Self {
            vertices: board.vertices().map(|i| *board.vertex(i)).collect(),
            moves: board.moves().map(|(a, b)| (a.index(), b.index())).collect(),
        }
    }
}
