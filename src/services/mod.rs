pub mod media;
pub mod quiz_store;
pub mod report;
pub mod session;
pub mod slug;

pub use quiz_store::{Confirm, LoadWarning, Outcome, QuizSaved, QuizStore};
pub use session::EditorSession;
