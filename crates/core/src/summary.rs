//! Summary module - results derived from session counters.
//!
//! Nothing here is stored; the results screen recomputes it from the tally.

use crate::types::{FAIR_ACCURACY_PERCENT, HIGH_ACCURACY_PERCENT};

/// Per-session counters
///
/// `score` and `correct` move together today; they are kept apart because the
/// results screen reports them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tally {
    pub score: u32,
    pub attempted: u32,
    pub correct: u32,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        self.attempted += 1;
        if correct {
            self.score += 1;
            self.correct += 1;
        }
    }
}

/// Accuracy band used to color the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccuracyBand {
    High,
    Fair,
    Low,
}

impl AccuracyBand {
    /// Classify the exact ratio, not the rounded percentage shown next to it:
    /// 39 of 49 (79.6%) displays as 80% but stays `Fair`.
    pub fn from_ratio(correct: u32, attempted: u32) -> Self {
        let scaled = u64::from(correct) * 100;
        let attempted = u64::from(attempted);
        if attempted > 0 && scaled >= u64::from(HIGH_ACCURACY_PERCENT) * attempted {
            AccuracyBand::High
        } else if attempted > 0 && scaled >= u64::from(FAIR_ACCURACY_PERCENT) * attempted {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Low
        }
    }
}

/// Rounded accuracy percentage; 0 when nothing was attempted.
///
/// Halves round up, so 1 of 8 (12.5%) reports 13.
pub fn accuracy_percent(correct: u32, attempted: u32) -> u32 {
    if attempted == 0 {
        return 0;
    }
    let correct = u64::from(correct);
    let attempted = u64::from(attempted);
    ((correct * 200 + attempted) / (attempted * 2)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Summary {
    pub score: u32,
    pub attempted: u32,
    pub correct: u32,
    pub accuracy_percent: u32,
    pub band: AccuracyBand,
}

impl From<Tally> for Summary {
    fn from(tally: Tally) -> Self {
        Self {
            score: tally.score,
            attempted: tally.attempted,
            correct: tally.correct,
            accuracy_percent: accuracy_percent(tally.correct, tally.attempted),
            band: AccuracyBand::from_ratio(tally.correct, tally.attempted),
        }
    }
}
