//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame loop interval (~60 FPS) |
//! | `COUNTDOWN_STEP_MS` | 1000 | One countdown decrement |
//! | `FEEDBACK_DISPLAY_MS` | 2000 | How long answer feedback stays visible |
//!
//! # Difficulty Table
//!
//! | Difficulty | Operands | Session |
//! |------------|----------|---------|
//! | Easy | 1..=10 | 30s |
//! | Medium | 10..=50 | 60s |
//! | Hard | 50..=100 | 90s |
//!
//! Division draws its divisor from `DIVISOR_MIN..=DIVISOR_MAX` regardless of difficulty.
//!
//! # Examples
//!
//! ```
//! use math_quest_types::{Difficulty, Topic};
//!
//! let topic = Topic::from_str("Division").unwrap();
//! assert_eq!(topic.symbol(), '÷');
//! assert_eq!(topic.next(), Topic::Addition);
//!
//! assert_eq!(Difficulty::Medium.duration_secs(), 60);
//! assert_eq!(Difficulty::Hard.operand_range(), 50..=100);
//! ```

use std::ops::RangeInclusive;

/// Frame loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One countdown step (1 second)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// How long a correct/incorrect banner stays on screen
pub const FEEDBACK_DISPLAY_MS: u32 = 2000;

/// Session length per difficulty, in seconds
pub const EASY_DURATION_SECS: u32 = 30;
pub const MEDIUM_DURATION_SECS: u32 = 60;
pub const HARD_DURATION_SECS: u32 = 90;

/// Smallest divisor drawn for division problems
pub const DIVISOR_MIN: i32 = 2;

/// Largest divisor drawn for division problems
pub const DIVISOR_MAX: i32 = 10;

/// Accuracy (percent) at or above which a result counts as high
pub const HIGH_ACCURACY_PERCENT: u32 = 80;

/// Accuracy (percent) at or above which a result counts as fair
pub const FAIR_ACCURACY_PERCENT: u32 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_table_defaults() {
        assert_eq!(Difficulty::Easy.duration_secs(), 30);
        assert_eq!(Difficulty::Medium.duration_secs(), 60);
        assert_eq!(Difficulty::Hard.duration_secs(), 90);

        assert_eq!(Difficulty::Easy.operand_range(), 1..=10);
        assert_eq!(Difficulty::Medium.operand_range(), 10..=50);
        assert_eq!(Difficulty::Hard.operand_range(), 50..=100);

        assert_eq!(DIVISOR_MIN..=DIVISOR_MAX, 2..=10);
        assert_eq!(FEEDBACK_DISPLAY_MS, 2000);
    }

    #[test]
    fn topic_cycle_wraps_both_ways() {
        let mut t = Topic::Addition;
        for _ in 0..Topic::ALL.len() {
            t = t.next();
        }
        assert_eq!(t, Topic::Addition);
        assert_eq!(Topic::Addition.prev(), Topic::Division);
    }

    #[test]
    fn difficulty_cycle_wraps_both_ways() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.prev(), Difficulty::Hard);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for t in Topic::ALL {
            assert_eq!(Topic::from_str(t.as_str()), Some(t));
        }
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Topic::from_str("modulo"), None);
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}

/// The four arithmetic operation families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Topic {
    /// All topics in display order
    pub const ALL: [Topic; 4] = [
        Topic::Addition,
        Topic::Subtraction,
        Topic::Multiplication,
        Topic::Division,
    ];

    /// Parse topic from string (case-insensitive)
    ///
    /// Accepts full names or the operator symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use math_quest_types::Topic;
    ///
    /// assert_eq!(Topic::from_str("addition"), Some(Topic::Addition));
    /// assert_eq!(Topic::from_str("MULTIPLICATION"), Some(Topic::Multiplication));
    /// assert_eq!(Topic::from_str("-"), Some(Topic::Subtraction));
    /// assert_eq!(Topic::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "addition" | "+" => Some(Topic::Addition),
            "subtraction" | "-" => Some(Topic::Subtraction),
            "multiplication" | "×" | "*" => Some(Topic::Multiplication),
            "division" | "÷" | "/" => Some(Topic::Division),
            _ => None,
        }
    }

    /// Lowercase name (used in configuration)
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Addition => "addition",
            Topic::Subtraction => "subtraction",
            Topic::Multiplication => "multiplication",
            Topic::Division => "division",
        }
    }

    /// Capitalized name for display
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Addition => "Addition",
            Topic::Subtraction => "Subtraction",
            Topic::Multiplication => "Multiplication",
            Topic::Division => "Division",
        }
    }

    /// Operator glyph used in questions
    pub fn symbol(&self) -> char {
        match self {
            Topic::Addition => '+',
            Topic::Subtraction => '-',
            Topic::Multiplication => '×',
            Topic::Division => '÷',
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Topic::Addition => Topic::Subtraction,
            Topic::Subtraction => Topic::Multiplication,
            Topic::Multiplication => Topic::Division,
            Topic::Division => Topic::Addition,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Topic::Addition => Topic::Division,
            Topic::Subtraction => Topic::Addition,
            Topic::Multiplication => Topic::Subtraction,
            Topic::Division => Topic::Multiplication,
        }
    }
}

/// Difficulty levels
///
/// Difficulty controls both operand magnitude and session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use math_quest_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("extreme"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Total session length in seconds
    pub fn duration_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => EASY_DURATION_SECS,
            Difficulty::Medium => MEDIUM_DURATION_SECS,
            Difficulty::Hard => HARD_DURATION_SECS,
        }
    }

    /// Inclusive range both operands are drawn from
    pub fn operand_range(&self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 1..=10,
            Difficulty::Medium => 10..=50,
            Difficulty::Hard => 50..=100,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Discrete quiz events that carry no payload text
///
/// Answer submission is not an action: it carries the typed text and goes through
/// `QuizState::submit_answer` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Select the following topic (setup screen only)
    NextTopic,
    /// Select the preceding topic (setup screen only)
    PrevTopic,
    /// Select the following difficulty (setup screen only)
    NextDifficulty,
    /// Select the preceding difficulty (setup screen only)
    PrevDifficulty,
    /// Select a topic directly
    SelectTopic(Topic),
    /// Select a difficulty directly
    SelectDifficulty(Difficulty),
    /// Begin a new session with the current selection
    Start,
    /// Leave the results screen and return to setup
    PlayAgain,
}

/// Which of the three views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Topic and difficulty selection
    Setup,
    /// Countdown running, accepting answers
    Active,
    /// Countdown reached zero
    Results,
}
