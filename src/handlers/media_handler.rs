use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse};

use crate::{app_state::AppState, errors::AppError, services::media::descriptor_from_upload};

/// Accepts a raw image or video body and returns it as a `data:` URL descriptor.
#[post("/api/media")]
pub async fn upload_media(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::validation("Missing Content-Type for uploaded media"))?;

    let media = descriptor_from_upload(mime, &body, state.config.max_upload_bytes)?;
    Ok(HttpResponse::Ok().json(media))
}
