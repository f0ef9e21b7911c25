use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN is a valid regex pattern"));

/// Lowercases a trimmed name and turns each whitespace run into a single hyphen.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

pub fn quiz_id(name: &str) -> String {
    slugify(name)
}

pub fn level_id(quiz_id: &str, level_name: &str) -> String {
    format!("{}-{}", quiz_id, slugify(level_name))
}
