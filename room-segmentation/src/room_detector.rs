use crate::face_tracer::Face;
use crate::graph_builder::Arrangement;
use crate::{Point, Room};
use geo::{Area, Coord, LineString, Polygon as GeoPolygon};
use tracing::debug;

/// Turn traced faces into rooms.
///
/// The face with the largest area is the unbounded exterior and is always
/// dropped (the first one wins a tie). Remaining faces below `min_area` are
/// slivers. Survivors are numbered `r1`, `r2`, ... in discovery order.
pub fn classify_faces(arrangement: &Arrangement, faces: &[Face], min_area: f64) -> Vec<Room> {
    let polygons: Vec<Vec<Point>> = faces
        .iter()
        .map(|face| face.vertices.iter().map(|&v| arrangement.point(v)).collect())
        .collect();
    let areas: Vec<f64> = polygons
        .iter()
        .map(|points| signed_polygon_area(points).abs())
        .collect();

    let Some(outer) = index_of_max(&areas) else {
        return Vec::new();
    };

    let mut rooms = Vec::new();
    let mut slivers = 0usize;

    for (idx, (points, &area)) in polygons.iter().zip(&areas).enumerate() {
        if idx == outer {
            continue;
        }
        if area < min_area {
            slivers += 1;
            continue;
        }

        rooms.push(Room {
            id: format!("r{}", rooms.len() + 1),
            vertices: dedupe_ring(points),
            area,
        });
    }

    debug!(
        "Exterior face area {:.3}, {} slivers below {}",
        areas[outer], slivers, min_area
    );

    rooms
}

/// Signed area of a polygon using the Shoelace formula.
///
/// Positive for counter-clockwise rings, negative for clockwise ones.
pub fn signed_polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let coords: Vec<Coord> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    let polygon = GeoPolygon::new(LineString::from(coords), vec![]);

    polygon.signed_area()
}

/// Remove consecutive duplicate points and a closing point equal to the first.
pub fn dedupe_ring(points: &[Point]) -> Vec<Point> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
    for &point in points {
        if cleaned.last() != Some(&point) {
            cleaned.push(point);
        }
    }
    if cleaned.len() > 1 && cleaned.first() == cleaned.last() {
        cleaned.pop();
    }
    cleaned
}

fn index_of_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, value) in values.iter().enumerate() {
        match best {
            Some(b) if values[b] >= *value => {}
            _ => best = Some(idx),
        }
    }
    best
}
