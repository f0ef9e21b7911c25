use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{MediaDescriptor, MediaKind, MoveDirection, Question, OPTION_COUNT};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn all_options_filled(options: &[String; OPTION_COUNT]) -> Result<(), ValidationError> {
    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(ValidationError::new("blank_option"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveQuizRequest {
    #[validate(custom(function = "not_blank", message = "Please enter a quiz name!"))]
    pub name: String,
}

/// Name and gradient colours of a level, for both creating and editing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LevelRequest {
    #[validate(custom(function = "not_blank", message = "Please enter a level name!"))]
    pub name: String,
    pub color1: String,
    pub color2: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveLevelRequest {
    pub direction: MoveDirection,
}

/// Media as entered in the editor: a URL (typed or a data URL from an upload)
/// and the kind chosen by the operator, if any.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaInput {
    #[serde(rename = "type", default)]
    pub kind: Option<MediaKind>,
    #[serde(default)]
    pub url: String,
}

impl MediaInput {
    /// An empty URL means "no media". A missing kind is inferred from the URL.
    pub fn into_descriptor(self) -> Option<MediaDescriptor> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let kind = self.kind.unwrap_or_else(|| MediaKind::infer_from_url(url));
        Some(MediaDescriptor::new(kind, url))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    #[validate(custom(
        function = "not_blank",
        message = "Please fill in all question and answer fields!"
    ))]
    pub question: String,

    #[validate(custom(
        function = "all_options_filled",
        message = "Please fill in all question and answer fields!"
    ))]
    pub options: [String; OPTION_COUNT],

    #[serde(default)]
    #[validate(range(max = 3, message = "The correct answer must be one of the four options!"))]
    pub correct: usize,

    #[serde(default)]
    pub display_media: Option<MediaInput>,

    #[serde(default)]
    pub after_media: Option<MediaInput>,
}

impl QuestionRequest {
    /// Request with option one as the correct answer and no media.
    pub fn new(question: &str, options: [&str; OPTION_COUNT]) -> Self {
        Self {
            question: question.to_string(),
            options: options.map(str::to_string),
            correct: 0,
            display_media: None,
            after_media: None,
        }
    }

    pub fn with_correct(mut self, correct: usize) -> Self {
        self.correct = correct;
        self
    }

    pub fn with_display_media(mut self, url: &str) -> Self {
        self.display_media = Some(MediaInput {
            kind: None,
            url: url.to_string(),
        });
        self
    }

    pub fn with_after_media(mut self, url: &str) -> Self {
        self.after_media = Some(MediaInput {
            kind: None,
            url: url.to_string(),
        });
        self
    }

    pub fn into_question(self) -> Question {
        Question {
            question: self.question,
            options: self.options,
            correct: self.correct,
            display_media: self.display_media.and_then(MediaInput::into_descriptor),
            after_media: self.after_media.and_then(MediaInput::into_descriptor),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminQuery {
    #[serde(rename = "quizId")]
    pub quiz_id: Option<String>,
}
