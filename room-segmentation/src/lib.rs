//! Room segmentation for floorplan wall geometry.
//!
//! Walls come in as loose segments (possibly crossing, touching or
//! overlapping). The pipeline snaps them, builds the planar arrangement they
//! induce, traces every face of that arrangement and keeps the bounded faces
//! as rooms.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

pub mod adjacency;
pub mod config;
pub mod error;
pub mod face_tracer;
pub mod graph_builder;
pub mod intersect;
pub mod normalizer;
pub mod plan;
pub mod room_detector;
pub mod wall;

pub use config::SegmentationConfig;
pub use error::{Result, SegmentationError};
pub use plan::PlanDraft;
pub use wall::WallRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// True when the two points are within `eps` of each other.
    pub fn coincides(&self, other: &Point, eps: f64) -> bool {
        self.distance_squared(other) <= eps * eps
    }

    /// Round both coordinates to the nearest multiple of `eps`, halves to even.
    pub fn snapped(&self, eps: f64) -> Point {
        Point {
            x: (self.x / eps).round_ties_even() * eps,
            y: (self.y / eps).round_ties_even() * eps,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Grid cell of a point on the `snap_eps` quantization grid.
///
/// Points mapping to the same key are the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl PointKey {
    pub fn new(point: &Point, eps: f64) -> Self {
        PointKey {
            x: OrderedFloat((point.x / eps).round_ties_even()),
            y: OrderedFloat((point.y / eps).round_ties_even()),
        }
    }
}

/// One wall (or wall fragment) after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

/// A bounded face of the wall arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub vertices: Vec<Point>,
    pub area: f64,
}

/// Compute the rooms enclosed by `walls`.
///
/// Malformed walls are skipped; an arrangement without a closed boundary
/// yields an empty list. Only an invalid `config` is an error.
pub fn segment_rooms(walls: &[WallRecord], config: &SegmentationConfig) -> Result<Vec<Room>> {
    config.validate()?;

    let span = info_span!("segment_rooms", walls = walls.len());
    let _guard = span.enter();

    let segments = normalizer::extract_segments(walls, config.snap_eps);
    debug!("{} of {} walls survived normalization", segments.len(), walls.len());

    let arrangement = graph_builder::build_arrangement(&segments, config.snap_eps);
    debug!(
        "Arrangement has {} vertices and {} edges",
        arrangement.vertex_count(),
        arrangement.edge_count()
    );

    let adjacency = adjacency::AngularAdjacency::build(&arrangement);
    let faces = face_tracer::trace_faces(&adjacency);
    debug!("Traced {} faces", faces.len());

    let rooms = room_detector::classify_faces(&arrangement, &faces, config.min_area);
    info!("Segmented {} rooms from {} walls", rooms.len(), walls.len());

    Ok(rooms)
}

/// Reusable segmentation entry point holding a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct RoomSegmenter {
    config: SegmentationConfig,
}

impl RoomSegmenter {
    pub fn new(config: SegmentationConfig) -> Result<Self> {
        config.validate()?;
        Ok(RoomSegmenter { config })
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    pub fn segment(&self, walls: &[WallRecord]) -> Result<Vec<Room>> {
        segment_rooms(walls, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapped_rounds_to_grid() {
        let p = Point::new(1.00049, -2.0006).snapped(1e-3);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y + 2.001).abs() < 1e-12);
    }

    #[test]
    fn test_snapped_rounds_halves_to_even() {
        let p = Point::new(0.25, 0.75).snapped(0.5);
        assert_eq!(p, Point::new(0.0, 1.0));

        let q = Point::new(-0.25, 1.25).snapped(0.5);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 1.0);
    }

    #[test]
    fn test_point_key_rounds_halves_to_even() {
        let eps = 0.5;
        assert_eq!(
            PointKey::new(&Point::new(0.25, 0.75), eps),
            PointKey::new(&Point::new(0.0, 1.0), eps)
        );
        assert_eq!(
            PointKey::new(&Point::new(1.25, 0.0), eps),
            PointKey::new(&Point::new(1.0, 0.0), eps)
        );
    }

    #[test]
    fn test_point_key_merges_nearby_points() {
        let a = PointKey::new(&Point::new(5.0001, 5.0), 1e-3);
        let b = PointKey::new(&Point::new(4.9999, 5.0004), 1e-3);
        let c = PointKey::new(&Point::new(5.002, 5.0), 1e-3);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_coincides_is_inclusive() {
        let a = Point::new(0.0, 0.0);
        assert!(a.coincides(&Point::new(0.5, 0.0), 0.5));
        assert!(!a.coincides(&Point::new(0.6, 0.0), 0.5));
    }

    #[test]
    fn test_segmenter_rejects_bad_config() {
        let config = SegmentationConfig {
            snap_eps: 0.0,
            ..SegmentationConfig::default()
        };
        assert!(RoomSegmenter::new(config).is_err());
    }

    #[test]
    fn test_segmenter_with_no_walls() {
        let rooms = RoomSegmenter::default().segment(&[]).unwrap();
        assert!(rooms.is_empty());
    }
}
