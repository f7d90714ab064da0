use tracing::debug;

use crate::{Segment, WallRecord};

/// Turn raw wall records into snapped, non-degenerate segments.
///
/// Walls with missing or non-numeric endpoints are skipped, as are walls
/// whose snapped endpoints overflow the grid or coincide. Input order is preserved.
pub fn extract_segments(walls: &[WallRecord], snap_eps: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(walls.len());
    let mut malformed = 0usize;
    let mut degenerate = 0usize;

    for wall in walls {
        let Some((a, b)) = wall.endpoints() else {
            malformed += 1;
            continue;
        };

        let a = a.snapped(snap_eps);
        let b = b.snapped(snap_eps);

        if !a.is_finite() || !b.is_finite() {
            malformed += 1;
            continue;
        }

        if a.coincides(&b, snap_eps) {
            degenerate += 1;
            continue;
        }

        segments.push(Segment { a, b });
    }

    if malformed > 0 || degenerate > 0 {
        debug!(
            "Skipped {} malformed and {} degenerate walls",
            malformed, degenerate
        );
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use serde_json::json;

    #[test]
    fn test_valid_walls_are_kept_in_order() {
        let walls = vec![
            WallRecord::from_coords(0.0, 0.0, 10.0, 0.0),
            WallRecord::from_coords(10.0, 0.0, 10.0, 8.0),
        ];

        let segments = extract_segments(&walls, 1e-3);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].b, Point::new(10.0, 0.0));
        assert_eq!(segments[1].b, Point::new(10.0, 8.0));
    }

    #[test]
    fn test_endpoints_are_snapped() {
        let walls = vec![WallRecord::from_coords(0.0004, 0.0, 9.9996, 0.0)];
        let segments = extract_segments(&walls, 1e-3);

        assert_eq!(segments.len(), 1);
        assert!(segments[0].a.x.abs() < 1e-12);
        assert!((segments[0].b.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_walls_are_dropped() {
        let walls = vec![
            WallRecord::from_coords(1.0, 1.0, 1.0, 1.0),
            WallRecord::from_coords(1.0, 1.0, 1.0004, 1.0),
            WallRecord::from_coords(0.0, 0.0, 0.0, 5.0),
        ];

        let segments = extract_segments(&walls, 1e-3);

        assert_eq!(segments.len(), 1);
        assert!((segments[0].length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_walls_overflowing_the_grid_are_skipped() {
        let walls = vec![
            WallRecord::from_coords(0.0, 0.0, 1e300, 0.0),
            WallRecord::from_coords(0.0, 0.0, 0.0, 5.0),
        ];

        let segments = extract_segments(&walls, 1e-10);

        assert_eq!(segments.len(), 1);
        assert!(segments.iter().all(|s| s.a.is_finite() && s.b.is_finite()));
    }

    #[test]
    fn test_malformed_walls_are_skipped_not_fatal() {
        let walls: Vec<WallRecord> = serde_json::from_value(json!([
            {"id": "w1", "a": {"x": 0, "y": 0}, "b": {"x": 10, "y": 0}},
            {"id": "w2", "a": {"x": "ten", "y": 0}, "b": {"x": 10, "y": 8}},
            {"id": "w3", "b": {"x": 0, "y": 8}},
            {"id": "w4", "a": {"x": 0, "y": 8}, "b": {"x": 0, "y": 0}}
        ]))
        .unwrap();

        let segments = extract_segments(&walls, 1e-3);

        assert_eq!(segments.len(), 2);
    }
}
