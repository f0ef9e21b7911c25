use quiz_admin::{
    errors::AppError,
    models::{
        domain::{MoveDirection, QuizDocument},
        dto::request::{LevelRequest, QuestionRequest, SaveQuizRequest},
    },
    repositories::{FileKeyValueRepository, InMemoryKeyValueRepository, KeyValueRepository},
    services::{EditorSession, Outcome, QuizStore},
};

const KEY: &str = "mediaQuiz_Quizzes";

fn level(name: &str) -> LevelRequest {
    LevelRequest {
        name: name.to_string(),
        color1: "#fff".to_string(),
        color2: "#000".to_string(),
    }
}

fn question(text: &str) -> QuestionRequest {
    QuestionRequest::new(text, ["Cat", "Dog", "Fish", "Bird"])
}

fn store_with_levels(names: &[&str]) -> (QuizStore, EditorSession, InMemoryKeyValueRepository) {
    let repository = InMemoryKeyValueRepository::new();
    let mut store = QuizStore::load(Box::new(repository.clone()), KEY).unwrap();
    let mut session = EditorSession::new();
    store
        .save_quiz(
            &mut session,
            SaveQuizRequest {
                name: "Quiz".to_string(),
            },
        )
        .unwrap();
    for name in names {
        store.add_level(&session, level(name)).unwrap();
    }
    (store, session, repository)
}

fn level_ids(store: &QuizStore, session: &EditorSession) -> Vec<String> {
    store
        .current_quiz(session)
        .unwrap()
        .levels
        .iter()
        .map(|l| l.id.clone())
        .collect()
}

fn orders(store: &QuizStore, session: &EditorSession) -> Vec<u32> {
    store
        .current_quiz(session)
        .unwrap()
        .levels
        .iter()
        .map(|l| l.order)
        .collect()
}

fn persisted(repository: &InMemoryKeyValueRepository) -> QuizDocument {
    serde_json::from_str(&repository.get(KEY).unwrap().unwrap()).unwrap()
}

fn assert_repository_contract(repository: &mut dyn KeyValueRepository) {
    assert_eq!(repository.get("contract").unwrap(), None);

    repository.set("contract", "first").unwrap();
    assert_eq!(repository.get("contract").unwrap().as_deref(), Some("first"));

    repository.set("contract", "second").unwrap();
    assert_eq!(repository.get("contract").unwrap().as_deref(), Some("second"));

    assert!(matches!(
        repository.set("../contract", "x"),
        Err(AppError::ValidationError(_))
    ));
}

#[test]
fn in_memory_repository_meets_contract() {
    assert_repository_contract(&mut InMemoryKeyValueRepository::new());
}

#[test]
fn file_repository_meets_contract() {
    let dir = tempfile::tempdir().unwrap();
    assert_repository_contract(&mut FileKeyValueRepository::new(dir.path()));
}

#[test]
fn store_survives_restart_on_file_repository() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = EditorSession::new();
    {
        let mut store =
            QuizStore::load(Box::new(FileKeyValueRepository::new(dir.path())), KEY).unwrap();
        store
            .save_quiz(
                &mut session,
                SaveQuizRequest {
                    name: "Animal Trivia".to_string(),
                },
            )
            .unwrap();
        store.add_level(&session, level("Easy")).unwrap();
        store
            .add_question(&session, "animal-trivia-easy", question("Meow?"))
            .unwrap();
    }

    let store = QuizStore::load(Box::new(FileKeyValueRepository::new(dir.path())), KEY).unwrap();
    let quiz = store.quiz("animal-trivia").unwrap();
    assert_eq!(quiz.questions_for("animal-trivia-easy").len(), 1);
}

#[test]
fn distinct_levels_get_dense_orders() {
    let (store, session, repository) = store_with_levels(&["One", "Two", "Three", "Four", "Five"]);

    assert_eq!(orders(&store, &session), vec![1, 2, 3, 4, 5]);
    let stored: Vec<u32> = persisted(&repository).quizzes[0]
        .levels
        .iter()
        .map(|l| l.order)
        .collect();
    assert_eq!(stored, vec![1, 2, 3, 4, 5]);
}

#[test]
fn deleting_a_level_leaves_no_orphaned_questions() {
    let (mut store, mut session, repository) = store_with_levels(&["A", "B", "C"]);
    store.add_question(&session, "quiz-b", question("Q")).unwrap();

    store.delete_level(&mut session, "quiz-b", &true).unwrap();

    let quiz = store.current_quiz(&session).unwrap();
    assert!(!quiz.has_level("quiz-b"));
    assert!(!quiz.questions.contains_key("quiz-b"));
    assert_eq!(orders(&store, &session), vec![1, 2]);
    assert!(!persisted(&repository).quizzes[0].questions.contains_key("quiz-b"));
}

#[test]
fn reorder_at_boundaries_is_a_noop() {
    let (mut store, session, _) = store_with_levels(&["A", "B", "C"]);
    let before = store.document().clone();

    assert!(!store.move_level(&session, "quiz-a", MoveDirection::Up).unwrap());
    assert!(!store.move_level(&session, "quiz-c", MoveDirection::Down).unwrap());

    assert_eq!(store.document(), &before);
}

#[test]
fn up_then_down_restores_order() {
    let (mut store, session, _) = store_with_levels(&["A", "B", "C"]);
    let before = store.document().clone();

    assert!(store.move_level(&session, "quiz-b", MoveDirection::Up).unwrap());
    assert_eq!(level_ids(&store, &session), vec!["quiz-b", "quiz-a", "quiz-c"]);
    assert_eq!(orders(&store, &session), vec![1, 2, 3]);

    assert!(store.move_level(&session, "quiz-b", MoveDirection::Down).unwrap());
    assert_eq!(store.document(), &before);
}

#[test]
fn adding_questions_appends_exactly_one() {
    let (mut store, session, _) = store_with_levels(&["A"]);

    store.add_question(&session, "quiz-a", question("First")).unwrap();
    assert_eq!(store.current_quiz(&session).unwrap().questions_for("quiz-a").len(), 1);

    for blank in 0..4 {
        let mut options = ["Cat", "Dog", "Fish", "Bird"];
        options[blank] = "";
        let err = store
            .add_question(&session, "quiz-a", QuestionRequest::new("Q", options))
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
    assert_eq!(store.current_quiz(&session).unwrap().questions_for("quiz-a").len(), 1);
}

#[test]
fn editing_changes_only_the_target_question() {
    let (mut store, session, _) = store_with_levels(&["A"]);
    for text in ["Q0", "Q1", "Q2"] {
        store.add_question(&session, "quiz-a", question(text)).unwrap();
    }
    let before = store.current_quiz(&session).unwrap().questions_for("quiz-a").to_vec();

    store
        .edit_question(&session, "quiz-a", 1, question("Edited").with_correct(3))
        .unwrap();

    let after = store.current_quiz(&session).unwrap().questions_for("quiz-a");
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].question, "Edited");
    assert_eq!(after[1].correct_answer(), "Bird");
}

#[test]
fn deleting_shifts_later_questions_left() {
    let (mut store, mut session, _) = store_with_levels(&["A"]);
    for text in ["Q0", "Q1", "Q2", "Q3"] {
        store.add_question(&session, "quiz-a", question(text)).unwrap();
    }

    let removed = store
        .delete_question(&mut session, "quiz-a", 1, &true)
        .unwrap()
        .applied()
        .unwrap();

    let texts: Vec<&str> = store
        .current_quiz(&session)
        .unwrap()
        .questions_for("quiz-a")
        .iter()
        .map(|q| q.question.as_str())
        .collect();
    assert_eq!(removed.question, "Q1");
    assert_eq!(texts, vec!["Q0", "Q2", "Q3"]);

    let err = store
        .delete_question(&mut session, "quiz-a", 3, &true)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn animal_trivia_scenario() {
    let repository = InMemoryKeyValueRepository::new();
    let mut store = QuizStore::load(Box::new(repository.clone()), KEY).unwrap();
    let mut session = EditorSession::new();

    store
        .save_quiz(
            &mut session,
            SaveQuizRequest {
                name: "Animal Trivia".to_string(),
            },
        )
        .unwrap();
    assert_eq!(session.current_quiz_id(), Some("animal-trivia"));

    let easy = store.add_level(&session, level("Easy")).unwrap();
    assert_eq!(easy.id, "animal-trivia-easy");
    assert_eq!(easy.order, 1);

    let hard = store.add_level(&session, level("Hard")).unwrap();
    assert_eq!(hard.order, 2);

    store
        .add_question(&session, "animal-trivia-easy", question("Which animal says meow?"))
        .unwrap();
    let questions = store.current_quiz(&session).unwrap().questions_for("animal-trivia-easy");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct, 0);

    let outcome = store
        .delete_level(&mut session, "animal-trivia-easy", &true)
        .unwrap();
    assert!(matches!(outcome, Outcome::Applied(_)));

    let document = persisted(&repository);
    let quiz = &document.quizzes[0];
    assert_eq!(quiz.levels.len(), 1);
    assert_eq!(quiz.levels[0].id, "animal-trivia-hard");
    assert_eq!(quiz.levels[0].order, 1);
    assert!(!quiz.questions.contains_key("animal-trivia-easy"));
}

#[test]
fn corrupt_document_falls_back_to_empty_with_warning() {
    let repository = InMemoryKeyValueRepository::with_entry(KEY, "<html>not json</html>");
    let mut store = QuizStore::load(Box::new(repository.clone()), KEY).unwrap();

    let warning = store.load_warning().unwrap().clone();
    assert!(warning.message.contains("could not be read"));
    assert_eq!(
        repository.get(&warning.backup_key.unwrap()).unwrap().as_deref(),
        Some("<html>not json</html>")
    );

    let mut session = EditorSession::new();
    store
        .save_quiz(
            &mut session,
            SaveQuizRequest {
                name: "Fresh".to_string(),
            },
        )
        .unwrap();
    assert_eq!(persisted(&repository).quizzes.len(), 1);
}
