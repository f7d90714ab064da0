use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::Point;

/// A wall as handed over by the upstream planner.
///
/// Fields are kept as raw JSON so a single malformed wall can be skipped
/// instead of failing the whole batch. `id` is opaque and never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WallRecord {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default)]
    pub a: Value,
    #[serde(default)]
    pub b: Value,
}

impl WallRecord {
    pub fn new(id: impl Into<String>, a: Point, b: Point) -> Self {
        WallRecord {
            id: Value::String(id.into()),
            a: json!({ "x": a.x, "y": a.y }),
            b: json!({ "x": b.x, "y": b.y }),
        }
    }

    /// Wall from raw coordinates, without an id.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        WallRecord {
            id: Value::Null,
            a: json!({ "x": x1, "y": y1 }),
            b: json!({ "x": x2, "y": y2 }),
        }
    }

    /// Both endpoints, or `None` when either is missing or non-numeric.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((parse_endpoint(&self.a)?, parse_endpoint(&self.b)?))
    }
}

fn parse_endpoint(value: &Value) -> Option<Point> {
    let object = value.as_object()?;
    let x = parse_coordinate(object.get("x")?)?;
    let y = parse_coordinate(object.get("y")?)?;
    Some(Point { x, y })
}

/// Numbers and numeric strings are accepted; NaN and infinities are not.
fn parse_coordinate(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
