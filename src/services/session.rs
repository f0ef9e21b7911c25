/// Per-operator editing context.
///
/// Holds which quiz the operator is working on and which level or question an
/// open editor form refers to. Every store operation receives it explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorSession {
    current_quiz_id: Option<String>,
    editing_level_id: Option<String>,
    editing_question: Option<QuestionRef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRef {
    pub level_id: String,
    pub index: usize,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_quiz(quiz_id: impl Into<String>) -> Self {
        Self {
            current_quiz_id: Some(quiz_id.into()),
            ..Self::default()
        }
    }

    pub fn current_quiz_id(&self) -> Option<&str> {
        self.current_quiz_id.as_deref()
    }

    pub fn editing_level_id(&self) -> Option<&str> {
        self.editing_level_id.as_deref()
    }

    pub fn editing_question(&self) -> Option<&QuestionRef> {
        self.editing_question.as_ref()
    }

    /// Switching quizzes drops any open editor state.
    pub(crate) fn select_quiz(&mut self, quiz_id: &str) {
        if self.current_quiz_id.as_deref() != Some(quiz_id) {
            self.editing_level_id = None;
            self.editing_question = None;
        }
        self.current_quiz_id = Some(quiz_id.to_string());
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_editing_level(&mut self, level_id: Option<String>) {
        self.editing_level_id = level_id;
    }

    pub(crate) fn set_editing_question(&mut self, question: Option<QuestionRef>) {
        self.editing_question = question;
    }
}
