use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::domain::{Level, Question, Quiz};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDto {
    pub id: String,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub order: u32,
    pub question_count: usize,
}

impl LevelDto {
    fn from_level(level: &Level, quiz: &Quiz) -> Self {
        LevelDto {
            id: level.id.clone(),
            name: level.name.clone(),
            color1: level.color1.clone(),
            color2: level.color2.clone(),
            order: level.order,
            question_count: quiz.questions_for(&level.id).len(),
        }
    }
}

/// Snapshot of a quiz as the editor renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDto {
    pub id: String,
    pub name: String,
    pub levels: Vec<LevelDto>,
    pub questions: BTreeMap<String, Vec<Question>>,
}

impl From<&Quiz> for QuizDto {
    fn from(quiz: &Quiz) -> Self {
        QuizDto {
            id: quiz.id.clone(),
            name: quiz.name.clone(),
            levels: quiz
                .levels
                .iter()
                .map(|level| LevelDto::from_level(level, quiz))
                .collect(),
            questions: quiz.questions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummaryDto {
    pub id: String,
    pub name: String,
    pub level_count: usize,
    pub question_count: usize,
}

impl From<&Quiz> for QuizSummaryDto {
    fn from(quiz: &Quiz) -> Self {
        QuizSummaryDto {
            id: quiz.id.clone(),
            name: quiz.name.clone(),
            level_count: quiz.levels.len(),
            question_count: quiz.question_count(),
        }
    }
}
