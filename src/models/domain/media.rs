use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static VIDEO_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg)$").expect("VIDEO_EXTENSION is a valid regex pattern")
});
static DATA_URL_MIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^data:([^;,]+)[;,]").expect("DATA_URL_MIME is a valid regex pattern")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// `data:` URLs take the kind of their MIME type. Otherwise video for `.mp4`,
    /// `.webm` and `.ogg` URLs, image for everything else.
    pub fn infer_from_url(url: &str) -> Self {
        let url = url.trim();
        if let Some(kind) = DATA_URL_MIME
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|mime| Self::from_mime(mime.as_str()))
        {
            return kind;
        }
        if VIDEO_EXTENSION.is_match(url) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Media shown with a question, either before answering or after.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaDescriptor {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl MediaDescriptor {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    /// Builds a descriptor from a typed URL, inferring the kind from its extension.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let kind = MediaKind::infer_from_url(&url);
        Self { kind, url }
    }
}
