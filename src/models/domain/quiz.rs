use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::{level::Level, question::Question};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,   // slug of the name
    pub name: String,
    #[serde(default)]
    pub levels: Vec<Level>,
    #[serde(default)]
    pub questions: BTreeMap<String, Vec<Question>>, // keyed by level id
}

impl Quiz {
    pub fn new(id: &str, name: &str) -> Self {
        Quiz {
            id: id.to_string(),
            name: name.to_string(),
            levels: Vec::new(),
            questions: BTreeMap::new(),
        }
    }

    pub fn level_position(&self, level_id: &str) -> Option<usize> {
        self.levels.iter().position(|level| level.id == level_id)
    }

    pub fn level(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == level_id)
    }

    pub fn has_level(&self, level_id: &str) -> bool {
        self.level_position(level_id).is_some()
    }

    /// Next order value for an appended level: one past the current maximum.
    pub fn next_order(&self) -> u32 {
        self.levels
            .iter()
            .map(|level| level.order)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Rewrites every level's order to its 1-based position.
    pub fn renumber_levels(&mut self) {
        for (index, level) in self.levels.iter_mut().enumerate() {
            level.order = index as u32 + 1;
        }
    }

    pub fn questions_for(&self, level_id: &str) -> &[Question] {
        self.questions
            .get(level_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn question_count(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }
}
