// Segment rooms from a JSON wall list
//
// Usage: segment-rooms [--snap-eps E] [--min-area A] [--drafts] [FILE]
//
// Reads `{"walls": [...], "snap_eps"?: f64, "min_area"?: f64}` or a bare
// array of walls from FILE (or stdin) and prints the rooms as JSON on stdout.
// Tolerances are resolved as: request body, then SNAP_EPS / MIN_AREA
// environment variables, then command-line flags.
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use room_segmentation::{PlanDraft, Room, RoomSegmenter, SegmentationConfig, WallRecord};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct DetectRoomsResponse {
    rooms: Vec<Room>,
    total_rooms: usize,
}

/// Segment rooms from a JSON wall list
#[derive(Parser, Debug)]
#[command(name = "segment-rooms", version, about, long_about = None)]
struct Args {
    /// Snap tolerance, overrides the request body
    #[arg(long, env = "SNAP_EPS")]
    snap_eps: Option<f64>,

    /// Minimum room area, overrides the request body
    #[arg(long, env = "MIN_AREA")]
    min_area: Option<f64>,

    /// Emit one plan draft per room instead of the room list
    #[arg(long)]
    drafts: bool,

    /// Request file (reads stdin when omitted)
    input: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut SegmentationConfig) {
        if let Some(snap_eps) = self.snap_eps {
            config.snap_eps = snap_eps;
        }
        if let Some(min_area) = self.min_area {
            config.min_area = min_area;
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read walls from stdin")?;
            buffer
        }
    };

    let request: Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let (walls, mut config) = parse_request(&request)?;
    args.apply(&mut config);

    info!(
        "Segmenting {} walls (snap_eps={}, min_area={})",
        walls.len(),
        config.snap_eps,
        config.min_area
    );

    let segmenter = RoomSegmenter::new(config).context("Invalid segmentation configuration")?;
    let rooms = segmenter.segment(&walls)?;

    let output = if args.drafts {
        serde_json::to_string_pretty(&PlanDraft::from_rooms(&walls, &rooms))?
    } else {
        serde_json::to_string_pretty(&DetectRoomsResponse {
            total_rooms: rooms.len(),
            rooms,
        })?
    };
    println!("{}", output);

    Ok(())
}

/// Accepts a bare wall array or a request object carrying `walls` and
/// optional tolerances. Entries that are not wall objects are skipped.
fn parse_request(request: &Value) -> Result<(Vec<WallRecord>, SegmentationConfig)> {
    let (raw_walls, config) = match request {
        Value::Array(walls) => (walls.as_slice(), SegmentationConfig::default()),
        Value::Object(object) => {
            let walls = object
                .get("walls")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("Request object has no \"walls\" array"))?;
            let config: SegmentationConfig = serde_json::from_value(request.clone())
                .context("Invalid snap_eps / min_area in request")?;
            (walls.as_slice(), config)
        }
        _ => bail!("Expected a wall array or a request object"),
    };

    let walls: Vec<WallRecord> = raw_walls
        .iter()
        .filter_map(|wall| serde_json::from_value(wall.clone()).ok())
        .collect();

    if walls.len() < raw_walls.len() {
        warn!(
            "Ignored {} entries that are not wall objects",
            raw_walls.len() - walls.len()
        );
    }

    Ok((walls, config))
}
