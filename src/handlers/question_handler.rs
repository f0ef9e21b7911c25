use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::{quiz_snapshot, NO_CHANGES},
    models::dto::request::{ConfirmParams, QuestionRequest},
    services::{EditorSession, Outcome},
};

#[post("/api/quizzes/{quiz_id}/levels/{level_id}/questions")]
pub async fn add_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id) = path.into_inner();
    let mut store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id);

    store.add_question(&session, &level_id, request.into_inner())?;
    let mut response = quiz_snapshot(&store, &session, "Question added to level!")?;
    *response.status_mut() = actix_web::http::StatusCode::CREATED;
    Ok(response)
}

#[actix_web::put("/api/quizzes/{quiz_id}/levels/{level_id}/questions/{index}")]
pub async fn edit_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String, usize)>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id, index) = path.into_inner();
    let mut store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id);

    store.edit_question(&session, &level_id, index, request.into_inner())?;
    quiz_snapshot(&store, &session, "Question updated successfully!")
}

#[actix_web::delete("/api/quizzes/{quiz_id}/levels/{level_id}/questions/{index}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String, usize)>,
    params: web::Query<ConfirmParams>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id, index) = path.into_inner();
    let mut store = state.lock_store()?;
    let mut session = EditorSession::for_quiz(quiz_id);

    let message = match store.delete_question(&mut session, &level_id, index, &params.confirm)? {
        Outcome::Applied(_) => "Question deleted successfully!",
        Outcome::Declined => NO_CHANGES,
    };
    quiz_snapshot(&store, &session, message)
}

/// The question as a player would see it, options shuffled.
#[get("/api/quizzes/{quiz_id}/levels/{level_id}/questions/{index}/preview")]
pub async fn preview_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String, usize)>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id, index) = path.into_inner();
    let store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id);

    let view = store
        .question(&session, &level_id, index)?
        .shuffled(&mut rand::thread_rng());
    Ok(HttpResponse::Ok().json(view))
}
