//! Problem module - random arithmetic problem generation
//!
//! Both operands are drawn independently and uniformly from the difficulty's
//! inclusive range. Division is built backwards from its quotient so every
//! problem has an exact integer answer.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Difficulty, Topic, DIVISOR_MAX, DIVISOR_MIN};

/// A single question/answer pair
///
/// `lhs` and `rhs` are the operands as displayed. For division `lhs` is the
/// dividend (`answer * rhs`) and `rhs` the divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Problem {
    pub topic: Topic,
    pub lhs: i32,
    pub rhs: i32,
    pub answer: i32,
}

impl Problem {
    /// Build a problem from two operands.
    ///
    /// For division `b` is taken as the divisor and `a` becomes the answer.
    /// Returns `None` when a value would overflow `i32` or the divisor is zero.
    pub fn from_operands(topic: Topic, a: i32, b: i32) -> Option<Self> {
        let fits = match topic {
            Topic::Addition => a.checked_add(b).is_some(),
            Topic::Subtraction => a.checked_sub(b).is_some(),
            Topic::Multiplication => a.checked_mul(b).is_some(),
            Topic::Division => b != 0 && a.checked_mul(b).is_some(),
        };
        fits.then(|| Self::compose(topic, a, b))
    }

    // Operands from the difficulty and divisor ranges never overflow.
    fn compose(topic: Topic, a: i32, b: i32) -> Self {
        let (lhs, answer) = match topic {
            Topic::Addition => (a, a + b),
            Topic::Subtraction => (a, a - b),
            Topic::Multiplication => (a, a * b),
            Topic::Division => (a * b, a),
        };
        Self {
            topic,
            lhs,
            rhs: b,
            answer,
        }
    }

    /// Question text, e.g. `"12 ÷ 4"`
    pub fn question(&self) -> String {
        self.to_string()
    }

    /// Judge typed input against the answer.
    ///
    /// Anything that does not parse as a number is simply wrong.
    pub fn is_correct(&self, input: &str) -> bool {
        parse_answer(input).is_some_and(|value| value == f64::from(self.answer))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.topic.symbol(), self.rhs)
    }
}

/// Parse a typed answer as a number.
///
/// Surrounding whitespace is ignored; trailing garbage is not.
pub fn parse_answer(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Draw one problem from `rng`.
pub fn generate_problem<R: Rng>(rng: &mut R, topic: Topic, difficulty: Difficulty) -> Problem {
    let a = rng.random_range(difficulty.operand_range());
    let b = match topic {
        Topic::Division => rng.random_range(DIVISOR_MIN..=DIVISOR_MAX),
        _ => rng.random_range(difficulty.operand_range()),
    };
    Problem::compose(topic, a, b)
}

/// Problem source owning its randomness
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
}

impl ProblemGenerator<StdRng> {
    /// Deterministic generator (same seed, same problems)
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_problem(&mut self, topic: Topic, difficulty: Difficulty) -> Problem {
        generate_problem(&mut self.rng, topic, difficulty)
    }
}
