use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::{quiz_snapshot, NO_CHANGES},
    models::dto::{
        quiz_dto::{QuizDto, QuizSummaryDto},
        request::{AdminQuery, ConfirmParams, SaveQuizRequest},
        response::{AdminSelectionResponse, QuizResponse},
    },
    services::{EditorSession, Outcome, QuizSaved},
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "quiz-admin"
    }))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let quizzes: Vec<QuizSummaryDto> = store.quizzes().iter().map(QuizSummaryDto::from).collect();
    Ok(HttpResponse::Ok().json(quizzes))
}

/// Opens the quiz named by `?quizId=`; without it the editor starts a new quiz.
#[get("/api/admin")]
pub async fn select_quiz(
    state: web::Data<AppState>,
    query: web::Query<AdminQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let mut session = EditorSession::new();
    let quiz = store
        .select_quiz(&mut session, query.quiz_id.as_deref())?
        .map(QuizDto::from);
    Ok(HttpResponse::Ok().json(AdminSelectionResponse {
        quiz,
        load_warning: store.load_warning().cloned(),
    }))
}

#[post("/api/quizzes")]
pub async fn save_quiz(
    state: web::Data<AppState>,
    request: web::Json<SaveQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let name = request.name.trim().to_string();

    let mut store = state.lock_store()?;
    let mut session = EditorSession::new();
    let saved = store.save_quiz(&mut session, request)?;

    let quiz = QuizDto::from(store.current_quiz(&session)?);
    let response = match saved {
        QuizSaved::Created => HttpResponse::Created().json(QuizResponse::new(
            quiz,
            format!("Quiz \"{}\" created successfully!", name),
        )),
        QuizSaved::Loaded => HttpResponse::Ok().json(QuizResponse::new(
            quiz,
            format!("Quiz \"{}\" loaded successfully!", name),
        )),
    };
    Ok(response)
}

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id.into_inner());
    let quiz = QuizDto::from(store.current_quiz(&session)?);
    Ok(HttpResponse::Ok().json(quiz))
}

#[actix_web::delete("/api/quizzes/{quiz_id}/questions")]
pub async fn reset_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    params: web::Query<ConfirmParams>,
) -> Result<HttpResponse, AppError> {
    let mut store = state.lock_store()?;
    let mut session = EditorSession::for_quiz(quiz_id.into_inner());

    let message = match store.reset_questions(&mut session, &params.confirm)? {
        Outcome::Applied(_) => "All questions have been reset!",
        Outcome::Declined => NO_CHANGES,
    };
    quiz_snapshot(&store, &session, message)
}

#[get("/api/quizzes/{quiz_id}/report")]
pub async fn questions_report(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = state.lock_store()?;
    let session = EditorSession::for_quiz(quiz_id.into_inner());
    let report = store.questions_report(&session)?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(report))
}
