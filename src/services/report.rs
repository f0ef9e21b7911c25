use std::fmt::Write;

use crate::models::domain::{Question, Quiz};

/// Plain-text listing of a quiz's questions, grouped by level in level order.
///
/// Question lists stored under a key that matches no level are listed last,
/// labelled with the raw key.
pub fn render_report(quiz: &Quiz) -> String {
    let mut report = format!("Questions in \"{}\":\n\n", quiz.name);

    for level in &quiz.levels {
        write_section(&mut report, &level.name, quiz.questions_for(&level.id));
    }

    for (key, questions) in &quiz.questions {
        if !quiz.has_level(key) {
            write_section(&mut report, key, questions);
        }
    }

    report
}

fn write_section(report: &mut String, label: &str, questions: &[Question]) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        report,
        "--- {} ({} questions) ---",
        label.to_uppercase(),
        questions.len()
    );

    if questions.is_empty() {
        report.push_str("No questions yet\n\n");
        return;
    }

    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(report, "{}. {}", i + 1, question.question);
        let _ = writeln!(report, "   Correct Answer: {}\n", question.correct_answer());
    }
    report.push('\n');
}
