//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into screen-specific [`KeyIntent`]s and provides the
//! bounded, allocation-free answer field used on the active screen.

pub mod answer;
pub mod map;

pub use math_quest_types as types;

pub use answer::{AnswerField, ANSWER_MAX_LEN};
pub use map::{map_key, should_quit, KeyIntent};
