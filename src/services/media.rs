use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{MediaDescriptor, MediaKind},
};

/// Embeds an uploaded image or video as a self-contained `data:` URL.
pub fn descriptor_from_upload(
    mime: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> AppResult<MediaDescriptor> {
    let kind = MediaKind::from_mime(mime).ok_or_else(|| {
        AppError::validation(format!("Unsupported media type '{}'; upload an image or a video", mime))
    })?;

    if bytes.is_empty() {
        return Err(AppError::validation("The uploaded file is empty!"));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::validation(format!(
            "The uploaded file is too large ({} bytes, limit {})",
            bytes.len(),
            max_bytes
        )));
    }

    let url = format!("data:{};base64,{}", mime.trim(), STANDARD.encode(bytes));
    log::debug!("Encoded {} upload of {} bytes", mime, bytes.len());
    Ok(MediaDescriptor::new(kind, url))
}
