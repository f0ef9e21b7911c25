use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Level {
    pub id: String,     // "{quiz_id}-{slug(name)}"
    pub name: String,
    pub color1: String, // gradient start
    pub color2: String, // gradient end
    pub order: u32,     // 1-based, dense within the quiz
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}
