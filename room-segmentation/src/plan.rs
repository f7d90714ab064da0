use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Room, WallRecord};

/// Floorplan draft scoped to a single room, in the shape the downstream
/// furniture-layout and labeling stages consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub plan: Plan,
    #[serde(default)]
    pub view: Option<Value>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub walls: Vec<WallRecord>,
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub assets: Vec<Value>,
}

impl PlanDraft {
    /// One draft per room, each carrying every input wall.
    pub fn from_rooms(walls: &[WallRecord], rooms: &[Room]) -> Vec<PlanDraft> {
        rooms
            .iter()
            .map(|room| PlanDraft {
                plan: Plan {
                    walls: walls.to_vec(),
                    rooms: vec![room.clone()],
                    assets: Vec::new(),
                },
                view: None,
                prompt: String::new(),
                notes: String::new(),
            })
            .collect()
    }

    pub fn room(&self) -> Option<&Room> {
        self.plan.rooms.first()
    }
}
