use serde::Serialize;

use crate::{models::dto::quiz_dto::QuizDto, services::LoadWarning};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

pub type QuizResponse = ApiResponse<QuizDto>;

/// Result of the selection interface: `None` means "create a new quiz".
/// Carries the startup warning when the stored document had to be replaced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSelectionResponse {
    pub quiz: Option<QuizDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_warning: Option<LoadWarning>,
}
