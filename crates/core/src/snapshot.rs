use crate::problem::Problem;
use crate::session::Feedback;
use crate::summary::{Summary, Tally};
use crate::types::{Difficulty, Screen, Topic};

/// Everything a view needs to draw one frame.
///
/// `Copy` and allocation-free so the frame loop can refresh it every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizSnapshot {
    pub screen: Screen,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub problem: Option<Problem>,
    pub seconds_remaining: u32,
    pub feedback: Option<Feedback>,
    pub summary: Summary,
    pub session_id: u32,
}

impl QuizSnapshot {
    pub fn score(&self) -> u32 {
        self.summary.score
    }

    pub fn accepting_answers(&self) -> bool {
        self.screen == Screen::Active && self.problem.is_some()
    }
}

impl Default for QuizSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::Setup,
            topic: Topic::Addition,
            difficulty: Difficulty::Easy,
            problem: None,
            seconds_remaining: Difficulty::Easy.duration_secs(),
            feedback: None,
            summary: Summary::from(Tally::default()),
            session_id: 0,
        }
    }
}
