use super::cost::PathCost;
use crate::board::Board;
use crate::cards::Frontier;
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use std::time::Instant;

/// Pareto-optimal walk costs between every ordered pair of vertices.
///
/// Reward, ascend cost, and descend cost do not trade against each other, so
/// each pair keeps a small frontier of mutually non-dominating [`PathCost`]s
/// instead of a single shortest distance. Walks no single turn could pay for
/// (outside the card [`Frontier`]) are dropped as soon as they appear.
///
/// Row `a` holds the frontiers of every walk starting at `a`; an empty
/// frontier means unreachable.
#[derive(Debug, Clone)]
pub struct PathIndex {
    rows: Vec<Vec<Vec<PathCost>>>,
}

impl PathIndex {
    pub fn new(board: &Board, frontier: &Frontier) -> Self {
        let start = Instant::now();
        let mut index = Self::direct(board);
        index.close(frontier);
        log::info!(
            "{:<32}{:<16}",
            "found all board paths",
            format!("{:.3}s", start.elapsed().as_secs_f32())
        );
        log::info!("{:<32}{:<16}", "widest path frontier", index.widest());
        index
    }
    /// single moves and standing still, before any closure
    pub fn direct(board: &Board) -> Self {
        let n = board.n();
        let mut rows = vec![vec![Vec::new(); n]; n];
        for (a, b) in board.moves() {
            rows[a.index()][b.index()] = vec![PathCost::step(board, a, b)];
        }
        for a in board.vertices() {
            rows[a.index()][a.index()] = vec![PathCost::stay(board.vertex(a).reward)];
        }
        Self { rows }
    }
    /// One Floyd-Warshall pass over every pivot. The pivot's own row settles
    /// first, then every other row relaxes in parallel against a snapshot of
    /// it, so the outcome does not depend on scheduling. Tiers are strictly
    /// ordered along every move, so one pass reaches the fixed point.
    pub fn close(&mut self, frontier: &Frontier) {
        for b in 0..self.rows.len() {
            let pivot = self.rows[b].clone();
            Self::relax(&mut self.rows[b], b, &pivot, frontier);
            let pivot = self.rows[b].clone();
            self.rows
                .par_iter_mut()
                .enumerate()
                .filter(|(a, _)| *a != b)
                .for_each(|(_, row)| Self::relax(row, b, &pivot, frontier));
        }
    }
    /// extend every walk a -> b in this row by every walk b -> c
    fn relax(row: &mut [Vec<PathCost>], b: usize, pivot: &[Vec<PathCost>], frontier: &Frontier) {
        let heads = row[b].clone();
        if heads.is_empty() {
            return;
        }
        for (c, tails) in pivot.iter().enumerate() {
            for head in heads.iter() {
                for tail in tails.iter() {
                    Self::insert(&mut row[c], head + tail, frontier);
                }
            }
        }
    }
    /// add a candidate to a frontier unless unaffordable or dominated,
    /// evicting whatever it dominates
    fn insert(costs: &mut Vec<PathCost>, cost: PathCost, frontier: &Frontier) {
        if !frontier.admits(cost.up, cost.down) {
            return;
        }
        if costs.iter().any(|known| known.dominates(&cost)) {
            return;
        }
        costs.retain(|known| !cost.dominates(known));
        costs.push(cost);
    }
    /// frontier of walks a -> b, None if b is unreachable
    pub fn costs(&self, a: NodeIndex, b: NodeIndex) -> Option<&[PathCost]> {
        self.rows
            .get(a.index())
            .and_then(|row| row.get(b.index()))
            .filter(|costs| !costs.is_empty())
            .map(|costs| costs.as_slice())
    }
    /// every reachable destination from a, in vertex order
    pub fn reachable(&self, a: NodeIndex) -> impl Iterator<Item = (NodeIndex, &[PathCost])> + '_ {
        self.rows[a.index()]
            .iter()
            .enumerate()
            .filter(|(_, costs)| !costs.is_empty())
            .map(|(b, costs)| (NodeIndex::new(b), costs.as_slice()))
    }
    /// largest frontier over all pairs
    pub fn widest(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|costs| costs.len())
            .max()
            .unwrap_or(0)
    }
}
