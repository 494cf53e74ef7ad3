//! End-to-end quiz flows through the public facade.

use crossterm::event::{KeyCode, KeyEvent};

use math_quest::core::{Feedback, QuizState};
use math_quest::input::{map_key, AnswerField, KeyIntent};
use math_quest::types::{Difficulty, QuizAction, Screen, Topic};

/// Feed a key the same way the binary does.
fn press(quiz: &mut QuizState, answer: &mut AnswerField, code: KeyCode) {
    match map_key(quiz.screen(), KeyEvent::from(code)) {
        Some(KeyIntent::Action(action)) => {
            quiz.apply_action(action);
        }
        Some(KeyIntent::Type(ch)) => {
            answer.push(ch);
        }
        Some(KeyIntent::Erase) => {
            answer.pop();
        }
        Some(KeyIntent::Submit) if quiz.snapshot().accepting_answers() => {
            let text = answer.take();
            quiz.submit_answer(text.as_str());
        }
        Some(KeyIntent::Submit) | None => {}
    }
}

fn type_number(quiz: &mut QuizState, answer: &mut AnswerField, value: i32) {
    for ch in value.to_string().chars() {
        press(quiz, answer, KeyCode::Char(ch));
    }
}

#[test]
fn test_addition_easy_session_end_to_end() {
    let mut quiz = QuizState::new(2024);
    quiz.apply_action(QuizAction::SelectTopic(Topic::Addition));
    quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Easy));
    assert!(quiz.apply_action(QuizAction::Start));
    assert_eq!(quiz.screen(), Screen::Active);
    assert_eq!(quiz.seconds_remaining(), 30);

    // Correct answer.
    let first = *quiz.current_problem().unwrap();
    assert_eq!(first.question(), format!("{} + {}", first.lhs, first.rhs));
    let judgement = quiz.submit_answer(&first.answer.to_string()).unwrap();
    assert!(judgement.correct);
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.attempted(), 1);
    assert_eq!(quiz.feedback(), Some(Feedback::Correct));
    assert!(quiz.current_problem().is_some());

    // Incorrect answer.
    let second = *quiz.current_problem().unwrap();
    quiz.submit_answer(&(second.answer + 100).to_string());
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.attempted(), 2);
    assert_eq!(
        quiz.feedback(),
        Some(Feedback::Incorrect {
            expected: second.answer
        })
    );
    assert!(quiz
        .feedback()
        .unwrap()
        .to_string()
        .contains(&second.answer.to_string()));

    // Let the timer run out.
    for _ in 0..30 {
        quiz.tick(1000);
    }
    assert_eq!(quiz.screen(), Screen::Results);

    let summary = quiz.summary();
    assert_eq!(summary.score, 1);
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.accuracy_percent, 50);
}

#[test]
fn test_countdown_stops_at_zero_without_interaction() {
    let mut quiz = QuizState::new(1);
    quiz.apply_action(QuizAction::Start);
    assert_eq!(quiz.seconds_remaining(), 30);

    for remaining in (0..30).rev() {
        quiz.tick(1000);
        assert_eq!(quiz.seconds_remaining(), remaining);
    }
    assert!(quiz.is_finished());

    for _ in 0..10 {
        quiz.tick(1000);
    }
    assert_eq!(quiz.seconds_remaining(), 0);
    assert!(quiz.is_finished());
    assert_eq!(quiz.summary().accuracy_percent, 0);
}

#[test]
fn test_countdown_follows_frame_sized_ticks() {
    let mut quiz = QuizState::new(1);
    quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Medium));
    quiz.apply_action(QuizAction::Start);

    // 16ms frames for just over 60 seconds.
    let mut frames = 0u32;
    while quiz.is_running() {
        quiz.tick(16);
        frames += 1;
        assert!(frames < 10_000, "countdown never finished");
    }
    assert_eq!(frames, 3750);
}

#[test]
fn test_every_submission_counts_once() {
    let mut quiz = QuizState::new(77);
    quiz.apply_action(QuizAction::SelectTopic(Topic::Division));
    quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Hard));
    quiz.apply_action(QuizAction::Start);

    let mut expected_score = 0;
    for i in 0..40 {
        let problem = *quiz.current_problem().unwrap();
        let before = quiz.tally();
        let correct = i % 3 != 0;
        let input = if correct {
            problem.answer.to_string()
        } else {
            "not a number".to_string()
        };
        let judgement = quiz.submit_answer(&input).unwrap();
        assert_eq!(judgement.correct, correct);

        let after = quiz.tally();
        assert_eq!(after.attempted, before.attempted + 1);
        if correct {
            expected_score += 1;
        }
        assert_eq!(after.score, expected_score);
        assert_eq!(after.correct, expected_score);
        assert!(after.attempted >= after.correct);
    }
}

#[test]
fn test_keyboard_session() {
    let mut quiz = QuizState::new(5);
    let mut answer = AnswerField::new();

    // Setup: pick multiplication and medium with keys.
    press(&mut quiz, &mut answer, KeyCode::Down);
    press(&mut quiz, &mut answer, KeyCode::Down);
    press(&mut quiz, &mut answer, KeyCode::Right);
    assert_eq!(quiz.topic(), Topic::Multiplication);
    assert_eq!(quiz.difficulty(), Difficulty::Medium);

    press(&mut quiz, &mut answer, KeyCode::Enter);
    assert_eq!(quiz.screen(), Screen::Active);
    assert_eq!(quiz.seconds_remaining(), 60);

    // Type the answer with a typo, fix it and submit.
    let problem = *quiz.current_problem().unwrap();
    press(&mut quiz, &mut answer, KeyCode::Char('9'));
    press(&mut quiz, &mut answer, KeyCode::Backspace);
    type_number(&mut quiz, &mut answer, problem.answer);
    assert_eq!(answer.as_str(), problem.answer.to_string());
    press(&mut quiz, &mut answer, KeyCode::Enter);
    assert!(answer.is_empty());
    assert_eq!(quiz.score(), 1);

    // Submitting an empty field is a wrong answer, not an error.
    press(&mut quiz, &mut answer, KeyCode::Enter);
    assert_eq!(quiz.attempted(), 2);
    assert_eq!(quiz.score(), 1);

    quiz.tick(60_000);
    assert_eq!(quiz.screen(), Screen::Results);

    press(&mut quiz, &mut answer, KeyCode::Enter);
    assert_eq!(quiz.screen(), Screen::Setup);
    assert!(!quiz.is_running());
    assert_eq!(quiz.topic(), Topic::Multiplication);
}

#[test]
fn test_new_session_after_play_again_has_fresh_countdown() {
    let mut quiz = QuizState::new(9);
    quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Hard));
    quiz.apply_action(QuizAction::Start);
    quiz.tick(90_000);
    quiz.apply_action(QuizAction::PlayAgain);

    quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Easy));
    quiz.apply_action(QuizAction::Start);
    assert_eq!(quiz.seconds_remaining(), 30);
    quiz.tick(999);
    assert_eq!(quiz.seconds_remaining(), 30);
    quiz.tick(1);
    assert_eq!(quiz.seconds_remaining(), 29);
}
