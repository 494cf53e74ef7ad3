//! Core quiz logic module - pure, deterministic, and testable
//!
//! This module contains the quiz rules, session state machine, and timing logic.
//! It has **no dependencies** on terminal rendering or input handling, making it:
//!
//! - **Deterministic**: Same seed produces the same problem sequence
//! - **Testable**: Time is passed in explicitly, no clocks are read
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`problem`]: Random arithmetic problems with exact integer answers
//! - [`countdown`]: Whole-second session timer fed by elapsed milliseconds
//! - [`session`]: `QuizState`, the `Idle` / `Running` / `Finished` state machine
//! - [`summary`]: Tally, accuracy and results derived on demand
//! - [`snapshot`]: Copyable per-frame view of the state
//!
//! # Example
//!
//! ```
//! use math_quest_core::QuizState;
//! use math_quest_types::{Difficulty, QuizAction, Screen, Topic};
//!
//! let mut quiz = QuizState::new(12345);
//! quiz.apply_action(QuizAction::SelectTopic(Topic::Addition));
//! quiz.apply_action(QuizAction::SelectDifficulty(Difficulty::Easy));
//! quiz.apply_action(QuizAction::Start);
//!
//! let answer = quiz.current_problem().unwrap().answer;
//! let judgement = quiz.submit_answer(&answer.to_string()).unwrap();
//! assert!(judgement.correct);
//!
//! // Let the 30 second clock run out.
//! quiz.tick(30_000);
//! assert_eq!(quiz.screen(), Screen::Results);
//! assert_eq!(quiz.summary().accuracy_percent, 100);
//! ```
//!
//! # Timing
//!
//! The front end calls [`QuizState::tick`](session::QuizState::tick) every frame
//! with the elapsed milliseconds. The countdown keeps sub-second remainders, and
//! answer feedback expires after 2000ms on its own clock.

pub mod countdown;
pub mod problem;
pub mod session;
pub mod snapshot;
pub mod summary;

pub use math_quest_types as types;

// Re-export commonly used types for convenience
pub use countdown::Countdown;
pub use problem::{generate_problem, parse_answer, Problem, ProblemGenerator};
pub use session::{Feedback, Judgement, QuizState};
pub use snapshot::QuizSnapshot;
pub use summary::{accuracy_percent, AccuracyBand, Summary, Tally};
