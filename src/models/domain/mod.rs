pub mod document;
pub mod level;
pub mod media;
pub mod question;
pub mod quiz;
pub use document::QuizDocument;
pub use level::{Level, MoveDirection};
pub use media::{MediaDescriptor, MediaKind};
pub use question::{Question, ShuffledQuestion, OPTION_COUNT};
pub use quiz::Quiz;
