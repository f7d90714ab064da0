use crate::graph_builder::Arrangement;
use petgraph::graph::NodeIndex;
use std::cmp::Ordering;

/// Rotation system of an arrangement.
///
/// For every vertex, its neighbors ordered by the angle of the outgoing
/// direction, ascending (counter-clockwise from the negative x axis).
/// Neighbors in exactly the same direction are ordered nearest first, then by
/// index, so the order is total and identical across runs.
#[derive(Debug, Clone)]
pub struct AngularAdjacency {
    neighbors: Vec<Vec<NodeIndex>>,
    edge_count: usize,
}

impl AngularAdjacency {
    pub fn build(arrangement: &Arrangement) -> Self {
        let graph = arrangement.graph();

        let neighbors = graph
            .node_indices()
            .map(|vertex| {
                let origin = graph[vertex];
                let mut list: Vec<NodeIndex> = graph.neighbors(vertex).collect();
                list.sort_unstable();
                list.dedup();

                let mut keyed: Vec<(f64, f64, NodeIndex)> = list
                    .into_iter()
                    .map(|n| {
                        let target = graph[n];
                        let angle = (target.y - origin.y).atan2(target.x - origin.x);
                        (angle, origin.distance_squared(&target), n)
                    })
                    .collect();
                keyed.sort_by(compare_keyed);
                keyed.into_iter().map(|(_, _, n)| n).collect()
            })
            .collect();

        AngularAdjacency {
            neighbors,
            edge_count: arrangement.edge_count(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected edges; every edge is two half-edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn directed_edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    pub fn neighbors(&self, vertex: NodeIndex) -> &[NodeIndex] {
        self.neighbors
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Position of `neighbor` in the rotation around `vertex`.
    pub fn position(&self, vertex: NodeIndex, neighbor: NodeIndex) -> Option<usize> {
        self.neighbors(vertex).iter().position(|&n| n == neighbor)
    }

    /// Directed edges `(u, v)` in vertex order, each vertex's in rotation order.
    pub fn directed_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(u, list)| {
            let u = NodeIndex::new(u);
            list.iter().map(move |&v| (u, v))
        })
    }
}

fn compare_keyed(a: &(f64, f64, NodeIndex), b: &(f64, f64, NodeIndex)) -> Ordering {
    a.0.total_cmp(&b.0)
        .then(a.1.total_cmp(&b.1))
        .then(a.2.cmp(&b.2))
}
