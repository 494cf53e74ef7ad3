//! Session module - the quiz state machine
//!
//! `QuizState` owns the whole quiz: the topic/difficulty selection, the phase
//! (`Idle`, `Running`, `Finished`), the per-session tally and the transient
//! answer feedback. Every mutation happens through one of four entry points,
//! each running to completion:
//!
//! - [`QuizState::apply_action`] for selection, start and play-again
//! - [`QuizState::submit_answer`] for typed answers
//! - [`QuizState::tick`] for elapsed time
//! - [`QuizState::start`] / [`QuizState::play_again`] as direct shortcuts
//!
//! The countdown is part of the `Running` phase value. Leaving `Running` replaces
//! that value, so a finished or abandoned session can never be ticked again.

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;

use crate::countdown::Countdown;
use crate::problem::{Problem, ProblemGenerator};
use crate::snapshot::QuizSnapshot;
use crate::summary::{Summary, Tally};
use crate::types::{Difficulty, QuizAction, Screen, Topic, FEEDBACK_DISPLAY_MS};

/// Outcome shown after an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Incorrect { expected: i32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => f.write_str("Correct!"),
            Feedback::Incorrect { expected } => {
                write!(f, "Incorrect. The answer was {}", expected)
            }
        }
    }
}

/// Result of judging one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    pub correct: bool,
    pub expected: i32,
}

/// Live part of a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Round {
    problem: Problem,
    countdown: Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running(Round),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Banner {
    feedback: Feedback,
    remaining_ms: u32,
}

/// Complete quiz state
#[derive(Debug, Clone)]
pub struct QuizState<R = StdRng> {
    topic: Topic,
    difficulty: Difficulty,
    phase: Phase,
    tally: Tally,
    banner: Option<Banner>,
    generator: ProblemGenerator<R>,
    /// Monotonic session id (increments on every start).
    session_id: u32,
}

impl QuizState<StdRng> {
    /// Create a quiz whose problems come from a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_generator(ProblemGenerator::seeded(seed))
    }
}

impl<R: Rng> QuizState<R> {
    pub fn with_generator(generator: ProblemGenerator<R>) -> Self {
        Self {
            topic: Topic::Addition,
            difficulty: Difficulty::Easy,
            phase: Phase::Idle,
            tally: Tally::default(),
            banner: None,
            generator,
            session_id: 0,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn screen(&self) -> Screen {
        match self.phase {
            Phase::Idle => Screen::Setup,
            Phase::Running(_) => Screen::Active,
            Phase::Finished => Screen::Results,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        match &self.phase {
            Phase::Running(round) => Some(&round.problem),
            _ => None,
        }
    }

    /// Seconds left on the clock.
    ///
    /// Before a session this is the selected difficulty's full duration; after
    /// one it is zero.
    pub fn seconds_remaining(&self) -> u32 {
        match &self.phase {
            Phase::Idle => self.difficulty.duration_secs(),
            Phase::Running(round) => round.countdown.remaining_secs(),
            Phase::Finished => 0,
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn score(&self) -> u32 {
        self.tally.score
    }

    pub fn attempted(&self) -> u32 {
        self.tally.attempted
    }

    pub fn correct(&self) -> u32 {
        self.tally.correct
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.banner.map(|b| b.feedback)
    }

    /// Results derived from the current counters
    pub fn summary(&self) -> Summary {
        Summary::from(self.tally)
    }

    /// Apply a quiz action. Returns whether anything changed.
    ///
    /// Selection changes are only accepted on the setup screen so a running
    /// session keeps generating from the configuration it started with.
    pub fn apply_action(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::NextTopic => self.select_topic(self.topic.next()),
            QuizAction::PrevTopic => self.select_topic(self.topic.prev()),
            QuizAction::NextDifficulty => self.select_difficulty(self.difficulty.next()),
            QuizAction::PrevDifficulty => self.select_difficulty(self.difficulty.prev()),
            QuizAction::SelectTopic(topic) => self.select_topic(topic),
            QuizAction::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            QuizAction::Start => self.start(),
            QuizAction::PlayAgain => self.play_again(),
        }
    }

    fn select_topic(&mut self, topic: Topic) -> bool {
        if !matches!(self.phase, Phase::Idle) || self.topic == topic {
            return false;
        }
        self.topic = topic;
        log::debug!("topic selected: {}", topic.as_str());
        true
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if !matches!(self.phase, Phase::Idle) || self.difficulty == difficulty {
            return false;
        }
        self.difficulty = difficulty;
        log::debug!("difficulty selected: {}", difficulty.as_str());
        true
    }

    /// Begin a session: `Idle -> Running`.
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }

        self.tally = Tally::default();
        self.banner = None;
        self.session_id = self.session_id.wrapping_add(1);

        let secs = self.difficulty.duration_secs();
        let problem = self.generator.next_problem(self.topic, self.difficulty);
        self.phase = Phase::Running(Round {
            problem,
            countdown: Countdown::new(secs),
        });

        log::info!(
            "session {} started: topic={} difficulty={} duration={}s",
            self.session_id,
            self.topic.as_str(),
            self.difficulty.as_str(),
            secs
        );
        true
    }

    /// Judge `input` against the current problem and move to the next one.
    ///
    /// Returns `None` when there is no current problem (not running).
    pub fn submit_answer(&mut self, input: &str) -> Option<Judgement> {
        let (topic, difficulty) = (self.topic, self.difficulty);
        let Phase::Running(round) = &mut self.phase else {
            return None;
        };

        let expected = round.problem.answer;
        let correct = round.problem.is_correct(input);
        self.tally.record(correct);

        self.banner = Some(Banner {
            feedback: if correct {
                Feedback::Correct
            } else {
                Feedback::Incorrect { expected }
            },
            remaining_ms: FEEDBACK_DISPLAY_MS,
        });

        log::debug!(
            "session {} answer to {}: {:?} -> {}",
            self.session_id,
            round.problem,
            input,
            if correct { "correct" } else { "incorrect" }
        );

        round.problem = self.generator.next_problem(topic, difficulty);

        Some(Judgement { correct, expected })
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// The feedback banner expires on its own clock; the countdown only runs
    /// while the session is running and finishes it on reaching zero.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(banner) = &mut self.banner {
            banner.remaining_ms = banner.remaining_ms.saturating_sub(elapsed_ms);
            if banner.remaining_ms == 0 {
                self.banner = None;
            }
        }

        let expired = match &mut self.phase {
            Phase::Running(round) => {
                round.countdown.advance(elapsed_ms);
                round.countdown.is_expired()
            }
            _ => false,
        };

        if expired {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        log::info!(
            "session {} finished: score={} attempted={} accuracy={}%",
            self.session_id,
            self.tally.score,
            self.tally.attempted,
            self.summary().accuracy_percent
        );
    }

    /// Leave the results screen: `Finished -> Idle`.
    ///
    /// Does not start a new session.
    pub fn play_again(&mut self) -> bool {
        if !matches!(self.phase, Phase::Finished) {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    pub fn snapshot_into(&self, out: &mut QuizSnapshot) {
        out.screen = self.screen();
        out.topic = self.topic;
        out.difficulty = self.difficulty;
        out.problem = self.current_problem().copied();
        out.seconds_remaining = self.seconds_remaining();
        out.feedback = self.feedback();
        out.summary = self.summary();
        out.session_id = self.session_id;
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let mut s = QuizSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(topic: Topic, difficulty: Difficulty) -> QuizState {
        let mut q = QuizState::new(12345);
        q.apply_action(QuizAction::SelectTopic(topic));
        q.apply_action(QuizAction::SelectDifficulty(difficulty));
        assert!(q.start());
        q
    }

    fn wrong_answer(q: &QuizState) -> String {
        (q.current_problem().unwrap().answer + 1).to_string()
    }

    #[test]
    fn new_quiz_is_idle_without_problem() {
        let q = QuizState::new(1);
        assert_eq!(q.screen(), Screen::Setup);
        assert!(q.current_problem().is_none());
        assert_eq!(q.seconds_remaining(), 30);
        assert_eq!(q.tally(), Tally::default());
    }

    #[test]
    fn start_sets_duration_from_difficulty() {
        for (difficulty, secs) in [
            (Difficulty::Easy, 30),
            (Difficulty::Medium, 60),
            (Difficulty::Hard, 90),
        ] {
            let q = running(Topic::Addition, difficulty);
            assert_eq!(q.seconds_remaining(), secs);
            assert!(q.current_problem().is_some());
        }
    }

    #[test]
    fn start_uses_selected_topic() {
        let q = running(Topic::Division, Difficulty::Medium);
        let p = q.current_problem().unwrap();
        assert_eq!(p.topic, Topic::Division);
        assert!((10..=50).contains(&p.answer));
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        q.tick(5000);
        assert!(!q.start());
        assert_eq!(q.seconds_remaining(), 25);
        assert_eq!(q.session_id(), 1);
    }

    #[test]
    fn correct_answer_scores_and_replaces_problem() {
        let mut q = running(Topic::Multiplication, Difficulty::Hard);
        let answer = q.current_problem().unwrap().answer;

        let j = q.submit_answer(&answer.to_string()).unwrap();
        assert!(j.correct);
        assert_eq!(j.expected, answer);
        assert_eq!(q.score(), 1);
        assert_eq!(q.correct(), 1);
        assert_eq!(q.attempted(), 1);
        assert_eq!(q.feedback(), Some(Feedback::Correct));
        assert!(q.current_problem().is_some());
    }

    #[test]
    fn wrong_answer_counts_attempt_only() {
        let mut q = running(Topic::Subtraction, Difficulty::Easy);
        let expected = q.current_problem().unwrap().answer;
        let input = wrong_answer(&q);

        let j = q.submit_answer(&input).unwrap();
        assert!(!j.correct);
        assert_eq!(q.score(), 0);
        assert_eq!(q.correct(), 0);
        assert_eq!(q.attempted(), 1);
        assert_eq!(q.feedback(), Some(Feedback::Incorrect { expected }));
    }

    #[test]
    fn non_numeric_answer_is_incorrect_and_progresses() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        let j = q.submit_answer("abc").unwrap();
        assert!(!j.correct);
        let j = q.submit_answer("").unwrap();
        assert!(!j.correct);
        assert_eq!(q.attempted(), 2);
        assert_eq!(q.score(), 0);
        assert!(q.is_running());
    }

    #[test]
    fn submit_without_problem_is_noop() {
        let mut q = QuizState::new(1);
        assert_eq!(q.submit_answer("3"), None);
        assert_eq!(q.attempted(), 0);
        assert_eq!(q.feedback(), None);
    }

    #[test]
    fn feedback_clears_after_two_seconds() {
        let mut q = running(Topic::Addition, Difficulty::Medium);
        q.submit_answer("x");
        q.tick(1999);
        assert!(q.feedback().is_some());
        q.tick(1);
        assert!(q.feedback().is_none());
    }

    #[test]
    fn new_submission_restarts_feedback_timer() {
        let mut q = running(Topic::Addition, Difficulty::Medium);
        q.submit_answer("x");
        q.tick(1500);
        let answer = q.current_problem().unwrap().answer;
        q.submit_answer(&answer.to_string());
        q.tick(1500);
        assert_eq!(q.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn feedback_outlives_the_session_end() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        q.tick(29_000);
        q.submit_answer("x");
        q.tick(1000);
        assert!(q.is_finished());
        assert!(q.feedback().is_some());
        q.tick(1000);
        assert!(q.feedback().is_none());
    }

    #[test]
    fn countdown_finishes_session() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        for _ in 0..29 {
            q.tick(1000);
        }
        assert!(q.is_running());
        assert_eq!(q.seconds_remaining(), 1);
        q.tick(1000);
        assert!(q.is_finished());
        assert_eq!(q.seconds_remaining(), 0);
        assert!(q.current_problem().is_none());

        q.tick(1000);
        assert_eq!(q.seconds_remaining(), 0);
        assert_eq!(q.submit_answer("1"), None);
    }

    #[test]
    fn selection_is_locked_outside_setup() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        assert!(!q.apply_action(QuizAction::NextTopic));
        assert!(!q.apply_action(QuizAction::SelectDifficulty(Difficulty::Hard)));
        assert_eq!(q.topic(), Topic::Addition);
        assert_eq!(q.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn play_again_returns_to_setup_without_starting() {
        let mut q = running(Topic::Addition, Difficulty::Hard);
        assert!(!q.play_again());
        q.tick(90_000);
        assert!(q.apply_action(QuizAction::PlayAgain));
        assert_eq!(q.screen(), Screen::Setup);
        assert_eq!(q.seconds_remaining(), 90);
        assert!(!q.is_running());
    }

    #[test]
    fn restart_replaces_previous_session() {
        let mut q = running(Topic::Addition, Difficulty::Easy);
        let answer = q.current_problem().unwrap().answer;
        q.submit_answer(&answer.to_string());
        q.tick(30_000);
        q.play_again();
        q.start();
        assert_eq!(q.session_id(), 2);
        assert_eq!(q.tally(), Tally::default());
        assert_eq!(q.feedback(), None);
        assert_eq!(q.seconds_remaining(), 30);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut q = running(Topic::Division, Difficulty::Easy);
        q.submit_answer("nope");
        let snap = q.snapshot();
        assert_eq!(snap.screen, Screen::Active);
        assert_eq!(snap.topic, Topic::Division);
        assert_eq!(snap.problem, q.current_problem().copied());
        assert_eq!(snap.summary.attempted, 1);
        assert!(matches!(snap.feedback, Some(Feedback::Incorrect { .. })));
    }

    #[test]
    fn only_a_running_session_accepts_answers() {
        let mut q = QuizState::new(3);
        assert!(!q.snapshot().accepting_answers());

        q.start();
        assert!(q.snapshot().accepting_answers());

        q.tick(30_000);
        assert!(q.is_finished());
        assert!(!q.snapshot().accepting_answers());
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
        assert_eq!(
            Feedback::Incorrect { expected: -4 }.to_string(),
            "Incorrect. The answer was -4"
        );
    }
}
