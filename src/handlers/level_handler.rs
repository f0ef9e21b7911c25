use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::{quiz_snapshot, NO_CHANGES},
    models::dto::request::{ConfirmParams, LevelRequest, MoveLevelRequest},
    services::{EditorSession, Outcome},
};

#[post("/api/quizzes/{quiz_id}/levels")]
pub async fn add_level(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<LevelRequest>,
) -> Result<HttpResponse, AppError> {
    let mut store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id.into_inner());

    let level = store.add_level(&session, request.into_inner())?;
    let mut response = quiz_snapshot(
        &store,
        &session,
        format!("Level \"{}\" created successfully!", level.name),
    )?;
    *response.status_mut() = actix_web::http::StatusCode::CREATED;
    Ok(response)
}

#[actix_web::put("/api/quizzes/{quiz_id}/levels/{level_id}")]
pub async fn edit_level(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<LevelRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id) = path.into_inner();
    let mut store = state.lock_store()?;
    let mut session = EditorSession::for_quiz(quiz_id);

    let level = store.rename_level(&mut session, &level_id, request.into_inner())?;
    quiz_snapshot(
        &store,
        &session,
        format!("Level \"{}\" updated successfully!", level.name),
    )
}

#[actix_web::delete("/api/quizzes/{quiz_id}/levels/{level_id}")]
pub async fn delete_level(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    params: web::Query<ConfirmParams>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id) = path.into_inner();
    let mut store = state.lock_store()?;
    let mut session = EditorSession::for_quiz(quiz_id);

    let message = match store.delete_level(&mut session, &level_id, &params.confirm)? {
        Outcome::Applied(_) => "Level deleted successfully!",
        Outcome::Declined => NO_CHANGES,
    };
    quiz_snapshot(&store, &session, message)
}

#[post("/api/quizzes/{quiz_id}/levels/{level_id}/move")]
pub async fn move_level(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<MoveLevelRequest>,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, level_id) = path.into_inner();
    let mut store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id);

    let moved = store.move_level(&session, &level_id, request.direction)?;
    let message = if moved { "Level moved" } else { NO_CHANGES };
    quiz_snapshot(&store, &session, message)
}
