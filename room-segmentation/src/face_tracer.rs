use crate::adjacency::AngularAdjacency;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use tracing::{debug, warn};

/// A face may take at most this many steps per undirected edge of the
/// arrangement before the trace is abandoned.
pub const FACE_STEP_FACTOR: usize = 4;

/// Closed boundary walk of the arrangement; the closing vertex is not
/// repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub vertices: Vec<NodeIndex>,
}

impl Face {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn distinct_vertex_count(&self) -> usize {
        self.vertices.iter().collect::<HashSet<_>>().len()
    }
}

/// Trace every face of the arrangement, the unbounded one included.
///
/// Each directed edge is consumed by exactly one face. Faces are reported in
/// the order their first directed edge appears in the rotation system.
pub fn trace_faces(adjacency: &AngularAdjacency) -> Vec<Face> {
    let max_steps = FACE_STEP_FACTOR * adjacency.edge_count().max(1);
    let mut visited: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
    let mut faces = Vec::new();

    for (u, v) in adjacency.directed_edges() {
        if visited.contains(&(u, v)) {
            continue;
        }

        let Some(face) = trace_face(adjacency, u, v, &mut visited, max_steps) else {
            continue;
        };

        if face.distinct_vertex_count() < 3 {
            debug!("Dropping degenerate face with {} vertices", face.len());
            continue;
        }
        faces.push(face);
    }

    faces
}

/// Walk the face to one side of the directed edge `start_u -> start_v`.
///
/// At every head vertex the walk turns onto the edge immediately clockwise
/// of the reversed incoming edge. Returns `None` when the walk cannot close.
fn trace_face(
    adjacency: &AngularAdjacency,
    start_u: NodeIndex,
    start_v: NodeIndex,
    visited: &mut HashSet<(NodeIndex, NodeIndex)>,
    max_steps: usize,
) -> Option<Face> {
    let mut cycle = Vec::new();
    let (mut u, mut v) = (start_u, start_v);

    loop {
        visited.insert((u, v));
        cycle.push(u);

        let neighbors = adjacency.neighbors(v);
        if neighbors.is_empty() {
            return None;
        }
        let k = adjacency.position(v, u)?;
        let next = neighbors[(k + neighbors.len() - 1) % neighbors.len()];

        if (v, next) == (start_u, start_v) {
            break;
        }
        if visited.contains(&(v, next)) {
            return None;
        }

        u = v;
        v = next;

        if cycle.len() > max_steps {
            warn!(
                "Face trace from {:?}->{:?} exceeded {} steps, abandoning it",
                start_u, start_v, max_steps
            );
            return None;
        }
    }

    Some(Face { vertices: cycle })
}
