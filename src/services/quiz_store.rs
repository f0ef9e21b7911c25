use serde::Serialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Level, MoveDirection, Question, Quiz, QuizDocument},
        dto::request::{LevelRequest, QuestionRequest, SaveQuizRequest},
    },
    repositories::{key_value_repository::validate_key, KeyValueRepository},
    services::{
        report::render_report,
        session::{EditorSession, QuestionRef},
        slug,
    },
};

const NO_QUIZ: &str = "Please create a quiz first!";
const QUESTION_NOT_FOUND: &str = "Question not found!";
const LEVEL_NOT_FOUND: &str = "Level not found!";
const DUPLICATE_LEVEL: &str = "A level with this name already exists in this quiz!";

/// Gate for irreversible edits. Receives the prompt shown to the operator.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a confirmation-gated operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    Declined,
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Declined => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizSaved {
    Created,
    Loaded,
}

/// Raised when the stored document could not be parsed and an empty one was used instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadWarning {
    pub message: String,
    pub backup_key: Option<String>,
}

/// Owns the quiz document and writes it back in full after every change.
pub struct QuizStore {
    repository: Box<dyn KeyValueRepository>,
    storage_key: String,
    document: QuizDocument,
    load_warning: Option<LoadWarning>,
}

impl QuizStore {
    pub fn load(repository: Box<dyn KeyValueRepository>, storage_key: &str) -> AppResult<Self> {
        validate_key(storage_key)?;

        let mut store = Self {
            repository,
            storage_key: storage_key.to_string(),
            document: QuizDocument::default(),
            load_warning: None,
        };

        let stored = store.repository.get(storage_key)?;
        match stored {
            None => {
                log::info!("No stored quizzes under '{}', initialising", storage_key);
                store.persist()?;
            }
            Some(raw) => match serde_json::from_str::<QuizDocument>(&raw) {
                Ok(document) => {
                    log::info!("Loaded {} quizzes", document.quizzes.len());
                    store.document = document;
                }
                Err(err) => {
                    store.load_warning = Some(store.recover_from_corrupt(&raw, &err));
                }
            },
        }

        Ok(store)
    }

    fn recover_from_corrupt(&mut self, raw: &str, err: &serde_json::Error) -> LoadWarning {
        let backup_key = format!("{}.corrupt", self.storage_key);
        let backup_key = match self.repository.set(&backup_key, raw) {
            Ok(()) => Some(backup_key),
            Err(backup_err) => {
                log::error!("Could not back up unreadable quiz data: {}", backup_err);
                None
            }
        };

        let message = format!(
            "Stored quiz data could not be read ({}); starting with an empty document",
            err
        );
        log::warn!("{}", message);

        LoadWarning {
            message,
            backup_key,
        }
    }

    fn persist(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.document)?;
        self.repository.set(&self.storage_key, &raw)
    }

    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.load_warning.as_ref()
    }

    pub fn document(&self) -> &QuizDocument {
        &self.document
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.document.quizzes
    }

    pub fn quiz(&self, quiz_id: &str) -> Option<&Quiz> {
        self.document.find(quiz_id)
    }

    pub fn current_quiz(&self, session: &EditorSession) -> AppResult<&Quiz> {
        let quiz_id = session
            .current_quiz_id()
            .ok_or_else(|| AppError::validation(NO_QUIZ))?;
        self.document
            .find(quiz_id)
            .ok_or_else(|| AppError::not_found(format!("Quiz '{}' not found", quiz_id)))
    }

    fn current_quiz_mut(&mut self, session: &EditorSession) -> AppResult<&mut Quiz> {
        let quiz_id = session
            .current_quiz_id()
            .ok_or_else(|| AppError::validation(NO_QUIZ))?;
        self.document
            .find_mut(quiz_id)
            .ok_or_else(|| AppError::not_found(format!("Quiz '{}' not found", quiz_id)))
    }

    /// Opens a quiz for editing by id. `None` starts a new quiz.
    pub fn select_quiz<'a>(
        &'a self,
        session: &mut EditorSession,
        quiz_id: Option<&str>,
    ) -> AppResult<Option<&'a Quiz>> {
        let Some(quiz_id) = quiz_id else {
            session.clear();
            return Ok(None);
        };

        let quiz = self
            .document
            .find(quiz_id)
            .ok_or_else(|| AppError::not_found(format!("Quiz '{}' not found", quiz_id)))?;
        session.select_quiz(&quiz.id);
        Ok(Some(quiz))
    }

    /// Creates the quiz, or opens the existing one whose name slugs to the same id.
    pub fn save_quiz(
        &mut self,
        session: &mut EditorSession,
        request: SaveQuizRequest,
    ) -> AppResult<QuizSaved> {
        request.validate()?;

        let name = request.name.trim();
        let quiz_id = slug::quiz_id(name);

        let saved = if self.document.find(&quiz_id).is_some() {
            QuizSaved::Loaded
        } else {
            self.document.quizzes.push(Quiz::new(&quiz_id, name));
            QuizSaved::Created
        };
        session.select_quiz(&quiz_id);
        self.persist()?;

        log::info!("Quiz '{}' {:?}", quiz_id, saved);
        Ok(saved)
    }

    pub fn add_level(&mut self, session: &EditorSession, request: LevelRequest) -> AppResult<Level> {
        let quiz = self.current_quiz_mut(session)?;
        request.validate()?;

        let name = request.name.trim();
        let level_id = slug::level_id(&quiz.id, name);
        if quiz.has_level(&level_id) {
            return Err(AppError::validation(DUPLICATE_LEVEL));
        }

        let level = Level {
            id: level_id.clone(),
            name: name.to_string(),
            color1: request.color1,
            color2: request.color2,
            order: quiz.next_order(),
        };
        quiz.levels.push(level.clone());
        quiz.questions.entry(level_id).or_default();
        self.persist()?;

        log::info!("Added level '{}' at order {}", level.id, level.order);
        Ok(level)
    }

    /// Removes a level together with its questions and closes the gap in the ordering.
    pub fn delete_level(
        &mut self,
        session: &mut EditorSession,
        level_id: &str,
        confirm: &impl Confirm,
    ) -> AppResult<Outcome<Level>> {
        let quiz = self.current_quiz_mut(session)?;
        let position = quiz
            .level_position(level_id)
            .ok_or_else(|| AppError::not_found(LEVEL_NOT_FOUND))?;

        if !confirm.confirm(
            "Are you sure you want to delete this level? All questions in this level will also be deleted.",
        ) {
            return Ok(Outcome::Declined);
        }

        let level = quiz.levels.remove(position);
        quiz.questions.remove(level_id);
        quiz.renumber_levels();
        self.persist()?;

        if session.editing_level_id() == Some(level_id) {
            session.set_editing_level(None);
        }
        if session
            .editing_question()
            .is_some_and(|question| question.level_id == level_id)
        {
            session.set_editing_question(None);
        }

        log::info!("Deleted level '{}'", level_id);
        Ok(Outcome::Applied(level))
    }

    /// Swaps a level with its neighbour. Returns `false` at either end of the list.
    pub fn move_level(
        &mut self,
        session: &EditorSession,
        level_id: &str,
        direction: MoveDirection,
    ) -> AppResult<bool> {
        let quiz = self.current_quiz_mut(session)?;
        let index = quiz
            .level_position(level_id)
            .ok_or_else(|| AppError::not_found(LEVEL_NOT_FOUND))?;

        let neighbour = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < quiz.levels.len() => index + 1,
            _ => return Ok(false),
        };

        quiz.levels.swap(index, neighbour);
        quiz.levels[index].order = index as u32 + 1;
        quiz.levels[neighbour].order = neighbour as u32 + 1;
        self.persist()?;

        log::debug!("Moved level '{}' {:?}", level_id, direction);
        Ok(true)
    }

    /// Renames a level in place. Its questions follow it to the new id.
    pub fn rename_level(
        &mut self,
        session: &mut EditorSession,
        level_id: &str,
        request: LevelRequest,
    ) -> AppResult<Level> {
        let quiz = self.current_quiz_mut(session)?;
        let position = quiz
            .level_position(level_id)
            .ok_or_else(|| AppError::not_found(LEVEL_NOT_FOUND))?;
        request.validate()?;

        let name = request.name.trim();
        let new_id = slug::level_id(&quiz.id, name);
        if new_id != level_id && quiz.has_level(&new_id) {
            return Err(AppError::validation(DUPLICATE_LEVEL));
        }

        if new_id != level_id {
            let moved = quiz.questions.remove(level_id).unwrap_or_default();
            quiz.questions.entry(new_id.clone()).or_default().extend(moved);
        }

        let level = &mut quiz.levels[position];
        level.id = new_id.clone();
        level.name = name.to_string();
        level.color1 = request.color1;
        level.color2 = request.color2;
        let level = level.clone();
        self.persist()?;

        if let Some(question) = session.editing_question().cloned() {
            if question.level_id == level_id {
                session.set_editing_question(Some(QuestionRef {
                    level_id: new_id.clone(),
                    index: question.index,
                }));
            }
        }

        log::info!("Renamed level '{}' to '{}'", level_id, new_id);
        Ok(level)
    }

    /// Marks a level as being edited and returns its current values for the form.
    pub fn begin_level_edit(&self, session: &mut EditorSession, level_id: &str) -> AppResult<Level> {
        let level = self
            .current_quiz(session)?
            .level(level_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(LEVEL_NOT_FOUND))?;
        session.set_editing_level(Some(level.id.clone()));
        Ok(level)
    }

    pub fn save_edited_level(
        &mut self,
        session: &mut EditorSession,
        request: LevelRequest,
    ) -> AppResult<Level> {
        let level_id = session
            .editing_level_id()
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("No level to save!"))?;

        let level = self.rename_level(session, &level_id, request)?;
        session.set_editing_level(None);
        Ok(level)
    }

    /// Appends a question to a level and returns its index.
    pub fn add_question(
        &mut self,
        session: &EditorSession,
        level_id: &str,
        request: QuestionRequest,
    ) -> AppResult<usize> {
        let quiz = self.current_quiz_mut(session)?;
        if level_id.trim().is_empty() {
            return Err(AppError::validation("Please select a level first!"));
        }
        request.validate()?;
        if !quiz.has_level(level_id) {
            return Err(AppError::not_found(LEVEL_NOT_FOUND));
        }

        let questions = quiz.questions.entry(level_id.to_string()).or_default();
        questions.push(request.into_question());
        let index = questions.len() - 1;
        self.persist()?;

        log::info!("Added question {} to level '{}'", index, level_id);
        Ok(index)
    }

    pub fn question(&self, session: &EditorSession, level_id: &str, index: usize) -> AppResult<&Question> {
        self.current_quiz(session)?
            .questions
            .get(level_id)
            .and_then(|questions| questions.get(index))
            .ok_or_else(|| AppError::not_found(QUESTION_NOT_FOUND))
    }

    fn question_mut(
        &mut self,
        session: &EditorSession,
        level_id: &str,
        index: usize,
    ) -> AppResult<&mut Question> {
        self.current_quiz_mut(session)?
            .questions
            .get_mut(level_id)
            .and_then(|questions| questions.get_mut(index))
            .ok_or_else(|| AppError::not_found(QUESTION_NOT_FOUND))
    }

    /// Replaces the question at `index` in place.
    pub fn edit_question(
        &mut self,
        session: &EditorSession,
        level_id: &str,
        index: usize,
        request: QuestionRequest,
    ) -> AppResult<Question> {
        let question = self.question_mut(session, level_id, index)?;
        request.validate()?;

        *question = request.into_question();
        let question = question.clone();
        self.persist()?;

        log::info!("Updated question {} in level '{}'", index, level_id);
        Ok(question)
    }

    /// Marks a question as being edited and returns a copy for the form.
    pub fn begin_question_edit(
        &self,
        session: &mut EditorSession,
        level_id: &str,
        index: usize,
    ) -> AppResult<Question> {
        let question = self.question(session, level_id, index)?.clone();
        session.set_editing_question(Some(QuestionRef {
            level_id: level_id.to_string(),
            index,
        }));
        Ok(question)
    }

    pub fn save_edited_question(
        &mut self,
        session: &mut EditorSession,
        request: QuestionRequest,
    ) -> AppResult<Question> {
        let target = session
            .editing_question()
            .cloned()
            .ok_or_else(|| AppError::validation("No question to save!"))?;

        let question = self.edit_question(session, &target.level_id, target.index, request)?;
        session.set_editing_question(None);
        Ok(question)
    }

    /// Removes the question at `index`; later questions move up by one.
    pub fn delete_question(
        &mut self,
        session: &mut EditorSession,
        level_id: &str,
        index: usize,
        confirm: &impl Confirm,
    ) -> AppResult<Outcome<Question>> {
        self.question(session, level_id, index)?;

        if !confirm.confirm("Are you sure you want to delete this question?") {
            return Ok(Outcome::Declined);
        }

        let question = self
            .current_quiz_mut(session)?
            .questions
            .get_mut(level_id)
            .map(|questions| questions.remove(index))
            .ok_or_else(|| AppError::not_found(QUESTION_NOT_FOUND))?;
        self.persist()?;

        // Any open editor at or after the removed slot now points at the wrong question.
        if session
            .editing_question()
            .is_some_and(|open| open.level_id == level_id && open.index >= index)
        {
            session.set_editing_question(None);
        }

        log::info!("Deleted question {} from level '{}'", index, level_id);
        Ok(Outcome::Applied(question))
    }

    /// Drops every question of the current quiz. Levels are kept.
    pub fn reset_questions(
        &mut self,
        session: &mut EditorSession,
        confirm: &impl Confirm,
    ) -> AppResult<Outcome<usize>> {
        let quiz = self.current_quiz_mut(session)?;

        if !confirm.confirm(
            "Are you sure you want to reset all questions in this quiz? This cannot be undone.",
        ) {
            return Ok(Outcome::Declined);
        }

        let removed = quiz.question_count();
        quiz.questions.clear();
        self.persist()?;
        session.set_editing_question(None);

        log::info!("Reset {} questions", removed);
        Ok(Outcome::Applied(removed))
    }

    pub fn questions_report(&self, session: &EditorSession) -> AppResult<String> {
        Ok(render_report(self.current_quiz(session)?))
    }
}
