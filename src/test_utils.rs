#[cfg(test)]
pub mod fixtures {
    use crate::{
        models::dto::request::{LevelRequest, QuestionRequest, SaveQuizRequest},
        repositories::InMemoryKeyValueRepository,
        services::{EditorSession, QuizStore},
    };

    pub fn quiz_request(name: &str) -> SaveQuizRequest {
        SaveQuizRequest {
            name: name.to_string(),
        }
    }

    /// Level request with a white-to-black gradient
    pub fn level_request(name: &str) -> LevelRequest {
        LevelRequest {
            name: name.to_string(),
            color1: "#fff".to_string(),
            color2: "#000".to_string(),
        }
    }

    /// Four-option question whose first option is correct
    pub fn animal_question() -> QuestionRequest {
        QuestionRequest::new("Which animal says meow?", ["Cat", "Dog", "Fish", "Bird"])
    }

    /// In-memory store with one quiz already created and selected
    pub fn store_with_quiz(name: &str) -> (QuizStore, EditorSession) {
        let repository = InMemoryKeyValueRepository::new();
        let mut store = QuizStore::load(Box::new(repository), "mediaQuiz_Quizzes")
            .expect("in-memory store should load");
        let mut session = EditorSession::new();
        store
            .save_quiz(&mut session, quiz_request(name))
            .expect("quiz should be created");
        (store, session)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_store_with_quiz() {
        let (store, session) = store_with_quiz("Animal Trivia");
        assert_eq!(session.current_quiz_id(), Some("animal-trivia"));
        assert_eq!(store.quizzes().len(), 1);
    }

    #[test]
    fn test_fixtures_level_request() {
        let request = level_request("Easy");
        assert_eq!(request.color1, "#fff");
        assert_eq!(request.color2, "#000");
    }

    #[test]
    fn test_fixtures_animal_question() {
        let request = animal_question();
        assert_eq!(request.options[0], "Cat");
        assert_eq!(request.correct, 0);
    }
}
