//! Search nodes and the A* frontier.
//!
//! # Layout
//!
//! Nodes live in a flat arena (`Vec<PathNode>`) and refer to their parent by
//! index, so a search allocates one vector and never reference-counts.  The
//! arena is dropped when the search returns.
//!
//! # Stale entries
//!
//! The frontier never removes or re-keys a heap entry.  Instead it keeps a
//! `column → best node` map; a relaxation that improves a column pushes a
//! fresh entry and repoints the map, and [`Frontier::pop`] discards any
//! popped entry whose node is no longer the one the map names.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tw_core::TilePos;

/// Index of a node inside one search's arena.
pub type NodeIdx = usize;

// ── PathNode ──────────────────────────────────────────────────────────────────

/// One candidate cell in a single search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathNode {
    pub position: TilePos,
    /// Step-cost total from the start.
    pub g_cost: f64,
    /// Heuristic distance to the goal.
    pub h_cost: f64,
    /// `g_cost + h_cost`.
    pub f_cost: f64,
    pub parent: Option<NodeIdx>,
    /// Walking-surface height in world units (tile surface or obstacle top,
    /// whichever is higher).
    pub resolved_height: f64,
}

impl PathNode {
    pub fn new(
        position: TilePos,
        g_cost: f64,
        h_cost: f64,
        parent: Option<NodeIdx>,
        resolved_height: f64,
    ) -> Self {
        Self {
            position,
            g_cost,
            h_cost,
            f_cost: g_cost + h_cost,
            parent,
            resolved_height,
        }
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

/// Heap entry.  Ordered so that `BinaryHeap::pop` yields the lowest `f`,
/// then the highest `g`, then the earliest-created node.
#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    f: f64,
    g: f64,
    node: NodeIdx,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.g.total_cmp(&other.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Node arena, open heap, best-node map and closed set for one search.
#[derive(Debug, Default)]
pub struct Frontier {
    nodes: Vec<PathNode>,
    heap: BinaryHeap<OpenEntry>,
    best: FxHashMap<(i32, i32), NodeIdx>,
    closed: FxHashSet<(i32, i32)>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the column has already been expanded.
    #[inline]
    pub fn is_closed(&self, position: TilePos) -> bool {
        self.closed.contains(&position.column())
    }

    /// `true` if a node with `f_cost` would improve on the best entry known
    /// for `position`'s column (or no entry exists yet).
    pub fn improves(&self, position: TilePos, f_cost: f64) -> bool {
        match self.best.get(&position.column()) {
            Some(&idx) => f_cost < self.nodes[idx].f_cost,
            None => true,
        }
    }

    /// Add `node` to the arena and the open heap, making it the best entry
    /// for its column.
    pub fn push(&mut self, node: PathNode) -> NodeIdx {
        let idx = self.nodes.len();
        self.heap.push(OpenEntry { f: node.f_cost, g: node.g_cost, node: idx });
        self.best.insert(node.position.column(), idx);
        self.nodes.push(node);
        idx
    }

    /// Pop the next live node and mark its column closed.
    pub fn pop(&mut self) -> Option<NodeIdx> {
        while let Some(entry) = self.heap.pop() {
            let column = self.nodes[entry.node].position.column();
            // Superseded by a cheaper entry for the same column.
            if self.best.get(&column) != Some(&entry.node) {
                continue;
            }
            if !self.closed.insert(column) {
                continue;
            }
            return Some(entry.node);
        }
        None
    }

    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &PathNode {
        &self.nodes[idx]
    }

    /// Number of expanded (closed) nodes.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    /// Number of nodes created so far, including superseded ones.
    pub fn created(&self) -> usize {
        self.nodes.len()
    }

    /// Positions from the start to `idx`, inclusive at both ends.
    pub fn trace_back(&self, idx: NodeIdx) -> Vec<TilePos> {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            path.push(node.position);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
