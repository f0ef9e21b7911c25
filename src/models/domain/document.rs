use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::Quiz;

/// The persisted root. Always written as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizDocument {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl QuizDocument {
    pub fn find(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == quiz_id)
    }

    pub fn find_mut(&mut self, quiz_id: &str) -> Option<&mut Quiz> {
        self.quizzes.iter_mut().find(|quiz| quiz.id == quiz_id)
    }
}
