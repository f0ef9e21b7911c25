use actix_web::{web, HttpResponse};

use crate::{
    errors::AppResult,
    models::dto::{quiz_dto::QuizDto, response::QuizResponse},
    services::{EditorSession, QuizStore},
};

pub mod level_handler;
pub mod media_handler;
pub mod question_handler;
pub mod quiz_handler;

pub use level_handler::{add_level, delete_level, edit_level, move_level};
pub use media_handler::upload_media;
pub use question_handler::{add_question, delete_question, edit_question, preview_question};
pub use quiz_handler::{
    get_quiz, health_check, list_quizzes, questions_report, reset_questions, save_quiz,
    select_quiz,
};

pub(crate) const NO_CHANGES: &str = "No changes made";

/// Registers every admin route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_quizzes)
        .service(select_quiz)
        .service(save_quiz)
        .service(get_quiz)
        .service(reset_questions)
        .service(questions_report)
        .service(add_level)
        .service(edit_level)
        .service(delete_level)
        .service(move_level)
        .service(add_question)
        .service(edit_question)
        .service(delete_question)
        .service(preview_question)
        .service(upload_media);
}

/// Responds with the session's current quiz as the editor should now render it.
pub(crate) fn quiz_snapshot(
    store: &QuizStore,
    session: &EditorSession,
    message: impl Into<String>,
) -> AppResult<HttpResponse> {
    let quiz = QuizDto::from(store.current_quiz(session)?);
    Ok(HttpResponse::Ok().json(QuizResponse::new(quiz, message)))
}
