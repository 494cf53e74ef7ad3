//! Terminal "quiz renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and instead draws into a plain framebuffer that is flushed to the
//! terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of a `QuizSnapshot`
//! - Only changed cells are written after the first frame

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use math_quest_core as core;
pub use math_quest_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{AnchorY, QuizView, Viewport, CARD_H, CARD_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
