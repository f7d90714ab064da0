use crate::intersect::segment_intersections;
use crate::{Point, PointKey, Segment};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use tracing::debug;

// Undirected: a wall fragment bounds the faces on both of its sides
pub type ArrangementGraph = UnGraph<Point, ()>;

/// Planar arrangement induced by a set of segments.
///
/// Vertices are deduplicated on the snap grid and indexed in first-sight
/// order; edges are unique, undirected and never self-loops.
#[derive(Debug, Clone)]
pub struct Arrangement {
    graph: ArrangementGraph,
}

impl Arrangement {
    pub fn graph(&self) -> &ArrangementGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn point(&self, vertex: NodeIndex) -> Point {
        self.graph[vertex]
    }

    /// Edges as `(source, target)` index pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .raw_edges()
            .iter()
            .map(|edge| (edge.source().index(), edge.target().index()))
    }
}

/// Split every segment at every point where another segment touches or
/// crosses it, then fold the fragments into a planar graph.
pub fn build_arrangement(segments: &[Segment], snap_eps: f64) -> Arrangement {
    let split_points = collect_split_points(segments, snap_eps);

    let mut graph = UnGraph::new_undirected();
    let mut point_to_node: HashMap<PointKey, NodeIndex> = HashMap::new();

    for mut points in split_points {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Merge split points that fall within tolerance of their predecessor
        let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
        for (_, point) in points {
            if cleaned
                .last()
                .map_or(true, |last| !point.coincides(last, snap_eps))
            {
                cleaned.push(point.snapped(snap_eps));
            }
        }

        for pair in cleaned.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            if start.coincides(&end, snap_eps) {
                continue;
            }

            let start_node = *point_to_node
                .entry(PointKey::new(&start, snap_eps))
                .or_insert_with(|| graph.add_node(start));
            let end_node = *point_to_node
                .entry(PointKey::new(&end, snap_eps))
                .or_insert_with(|| graph.add_node(end));

            if start_node == end_node || graph.find_edge(start_node, end_node).is_some() {
                continue;
            }
            graph.add_edge(start_node, end_node, ());
        }
    }

    Arrangement { graph }
}

/// Parametric split positions for every segment, endpoints included.
fn collect_split_points(segments: &[Segment], snap_eps: f64) -> Vec<Vec<(f64, Point)>> {
    let mut split_points: Vec<Vec<(f64, Point)>> = segments
        .iter()
        .map(|seg| vec![(0.0, seg.a), (1.0, seg.b)])
        .collect();

    let mut hit_count = 0usize;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            for hit in segment_intersections(&segments[i], &segments[j], snap_eps) {
                split_points[i].push((hit.t_a, hit.point));
                split_points[j].push((hit.t_b, hit.point));
                hit_count += 1;
            }
        }
    }

    debug!(
        "Found {} intersections among {} segments",
        hit_count,
        segments.len()
    );

    split_points
}
