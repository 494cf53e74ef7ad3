//! QuizView: maps a `core::QuizSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each of the three screens is drawn inside a
//! fixed-size card centered in the viewport. Numbers are written digit by digit
//! so a full redraw does not allocate.

use crate::core::{AccuracyBand, Feedback, Problem, QuizSnapshot};
use crate::fb::{digit_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, Screen, Topic};

/// Card width in terminal columns (border included).
pub const CARD_W: u16 = 46;

/// Card height in terminal rows (border included).
pub const CARD_H: u16 = 17;

const INCORRECT_PREFIX: &str = "Incorrect. The answer was ";
const ANSWER_PLACEHOLDER: &str = "Enter your answer";
const ANSWER_FIELD_W: u16 = 20;

const BG: Rgb = Rgb::new(0, 0, 0);
const CARD_BG: Rgb = Rgb::new(24, 20, 36);
const TEXT: Rgb = Rgb::new(225, 220, 240);
const PURPLE: Rgb = Rgb::new(168, 120, 230);
const TEAL: Rgb = Rgb::new(80, 200, 180);
const AMBER: Rgb = Rgb::new(240, 180, 60);
const ROSE: Rgb = Rgb::new(230, 90, 110);
const FIELD_BG: Rgb = Rgb::new(44, 38, 62);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Card-local drawing origin.
#[derive(Debug, Clone, Copy)]
struct Card {
    x: u16,
    y: u16,
}

impl Card {
    /// Left edge of the padded content area.
    fn left(&self) -> u16 {
        self.x + 3
    }

    /// One past the right edge of the padded content area.
    fn right(&self) -> u16 {
        self.x + CARD_W - 3
    }

    fn inner_x(&self) -> u16 {
        self.x + 1
    }

    fn inner_w(&self) -> u16 {
        CARD_W - 2
    }

    fn row(&self, r: u16) -> u16 {
        self.y + r
    }
}

/// Renders the setup, active and results screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizView {
    anchor_y: AnchorY,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl QuizView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `answer` is the text currently typed into the answer field; it is only
    /// shown on the active screen.
    pub fn render_into(
        &self,
        snap: &QuizSnapshot,
        answer: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(
            viewport.width,
            viewport.height,
            CellStyle::fg(TEXT, BG).cell(' '),
        );

        let card = Card {
            x: viewport.width.saturating_sub(CARD_W) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(CARD_H) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(card.x, card.y, CARD_W, CARD_H, text());
        fb.draw_box(card.x, card.y, CARD_W, CARD_H, CellStyle::fg(PURPLE, CARD_BG));
        fb.put_str_centered(
            card.inner_x(),
            card.inner_w(),
            card.row(1),
            "MATH QUEST",
            CellStyle::fg(PURPLE, CARD_BG).bold(),
        );

        match snap.screen {
            Screen::Setup => self.draw_setup(fb, card, snap),
            Screen::Active => self.draw_active(fb, card, snap, answer),
            Screen::Results => self.draw_results(fb, card, snap),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &QuizSnapshot, answer: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, answer, viewport, &mut fb);
        fb
    }

    fn draw_setup(&self, fb: &mut FrameBuffer, card: Card, snap: &QuizSnapshot) {
        fb.put_str(card.left(), card.row(3), "SELECT TOPIC", label());
        for (i, topic) in Topic::ALL.iter().enumerate() {
            let y = card.row(4 + i as u16);
            let selected = *topic == snap.topic;
            let style = if selected { selected_style() } else { text() };
            let x = fb.put_str(card.left(), y, if selected { "▸ " } else { "  " }, style);
            fb.put_char(x, y, topic.symbol(), style);
            fb.put_str(x + 2, y, topic.label(), style);
        }

        fb.put_str(card.left(), card.row(9), "SELECT DIFFICULTY", label());
        let y = card.row(10);
        let mut x = card.left();
        for difficulty in Difficulty::ALL {
            if difficulty == snap.difficulty {
                x = fb.put_str(x, y, "[", selected_style());
                x = fb.put_str(x, y, difficulty.label(), selected_style());
                x = fb.put_str(x, y, "]", selected_style());
            } else {
                x = fb.put_str(x + 1, y, difficulty.label(), text()) + 1;
            }
            x += 2;
        }

        let y = card.row(11);
        let x = fb.put_str(card.left(), y, "Session ", dim_text());
        let x = fb.put_u32(x, y, snap.seconds_remaining, dim_text());
        fb.put_char(x, y, 's', dim_text());

        fb.put_str_centered(
            card.inner_x(),
            card.inner_w(),
            card.row(13),
            "Press Enter to start",
            CellStyle::fg(TEAL, CARD_BG).bold(),
        );
        fb.put_str_centered(
            card.inner_x(),
            card.inner_w(),
            card.row(15),
            "↑↓ topic  ←→ difficulty  q quit",
            dim_text(),
        );
    }

    fn draw_active(&self, fb: &mut FrameBuffer, card: Card, snap: &QuizSnapshot, answer: &str) {
        let y = card.row(3);
        let x = fb.put_str(card.left(), y, "Score: ", label());
        fb.put_u32(x, y, snap.score(), text());

        let time_w = 6 + digit_width(snap.seconds_remaining as i32) + 1;
        let x = fb.put_str(card.right() - time_w, y, "Time: ", label());
        let time_style = if snap.seconds_remaining <= 5 {
            CellStyle::fg(ROSE, CARD_BG).bold()
        } else {
            text()
        };
        let x = fb.put_u32(x, y, snap.seconds_remaining, time_style);
        fb.put_char(x, y, 's', time_style);

        if let Some(problem) = snap.problem {
            self.draw_question(fb, card, card.row(6), &problem);
        }

        let field_x = card.inner_x() + (card.inner_w() - ANSWER_FIELD_W) / 2;
        let y = card.row(8);
        let field = CellStyle::fg(TEXT, FIELD_BG);
        fb.fill_rect(field_x, y, ANSWER_FIELD_W, 1, field);
        if answer.is_empty() {
            fb.put_str(field_x + 1, y, ANSWER_PLACEHOLDER, field.dim());
        } else {
            let x = fb.put_str(field_x + 1, y, answer, field.bold());
            fb.put_char(x, y, '▏', field);
        }

        fb.put_str_centered(
            card.inner_x(),
            card.inner_w(),
            card.row(10),
            "Enter to submit",
            dim_text(),
        );

        if let Some(feedback) = snap.feedback {
            self.draw_feedback(fb, card, card.row(12), feedback);
        }

        fb.put_str_centered(
            card.inner_x(),
            card.inner_w(),
            card.row(15),
            "Esc quit",
            dim_text(),
        );
    }

    fn draw_question(&self, fb: &mut FrameBuffer, card: Card, y: u16, problem: &Problem) {
        let style = CellStyle::fg(TEXT, CARD_BG).bold();
        let w = digit_width(problem.lhs) + 3 + digit_width(problem.rhs);
        let x = card.inner_x() + card.inner_w().saturating_sub(w) / 2;
        let x = fb.put_i32(x, y, problem.lhs, style);
        fb.put_char(x + 1, y, problem.topic.symbol(), CellStyle::fg(PURPLE, CARD_BG).bold());
        fb.put_i32(x + 3, y, problem.rhs, style);
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, card: Card, y: u16, feedback: Feedback) {
        match feedback {
            Feedback::Correct => fb.put_str_centered(
                card.inner_x(),
                card.inner_w(),
                y,
                "Correct!",
                CellStyle::fg(TEAL, CARD_BG).bold(),
            ),
            Feedback::Incorrect { expected } => {
                let style = CellStyle::fg(ROSE, CARD_BG).bold();
                let w = INCORRECT_PREFIX.len() as u16 + digit_width(expected);
                let x = card.inner_x() + card.inner_w().saturating_sub(w) / 2;
                let x = fb.put_str(x, y, INCORRECT_PREFIX, style);
                fb.put_i32(x, y, expected, style);
            }
        }
    }

    fn draw_results(&self, fb: &mut FrameBuffer, card: Card, snap: &QuizSnapshot) {
        let (cx, cw) = (card.inner_x(), card.inner_w());
        fb.put_str_centered(
            cx,
            cw,
            card.row(3),
            "GAME OVER!",
            CellStyle::fg(TEXT, CARD_BG).bold(),
        );
        fb.put_str_centered(
            cx,
            cw,
            card.row(4),
            "Great effort! Here's how you did:",
            dim_text(),
        );

        let summary = snap.summary;
        let right = card.right();

        fb.put_str(card.left(), card.row(6), "Final Score", label());
        fb.put_u32(
            right - digit_width(summary.score as i32),
            card.row(6),
            summary.score,
            CellStyle::fg(PURPLE, CARD_BG).bold(),
        );

        fb.put_str(card.left(), card.row(7), "Questions Attempted", label());
        fb.put_u32(
            right - digit_width(summary.attempted as i32),
            card.row(7),
            summary.attempted,
            CellStyle::fg(TEAL, CARD_BG).bold(),
        );

        let accuracy = CellStyle::fg(band_color(summary.band), CARD_BG).bold();
        let y = card.row(8);
        fb.put_str(card.left(), y, "Accuracy", label());
        let x = fb.put_u32(
            right - digit_width(summary.accuracy_percent as i32) - 1,
            y,
            summary.accuracy_percent,
            accuracy,
        );
        fb.put_char(x, y, '%', accuracy);

        // "Topic: <topic> | Difficulty: <difficulty>"
        let topic = snap.topic.label();
        let difficulty = snap.difficulty.label();
        let w = (7 + topic.len() + 15 + difficulty.len()) as u16;
        let y = card.row(10);
        let x = cx + cw.saturating_sub(w) / 2;
        let x = fb.put_str(x, y, "Topic: ", dim_text());
        let x = fb.put_str(x, y, topic, label());
        let x = fb.put_str(x, y, " | Difficulty: ", dim_text());
        fb.put_str(x, y, difficulty, label());

        fb.put_str_centered(
            cx,
            cw,
            card.row(13),
            "Press Enter to play again",
            CellStyle::fg(TEAL, CARD_BG).bold(),
        );
        fb.put_str_centered(cx, cw, card.row(15), "q quit", dim_text());
    }
}

fn band_color(band: AccuracyBand) -> Rgb {
    match band {
        AccuracyBand::High => TEAL,
        AccuracyBand::Fair => AMBER,
        AccuracyBand::Low => ROSE,
    }
}

fn text() -> CellStyle {
    CellStyle::fg(TEXT, CARD_BG)
}

fn dim_text() -> CellStyle {
    text().dim()
}

fn label() -> CellStyle {
    CellStyle::fg(PURPLE, CARD_BG).bold()
}

fn selected_style() -> CellStyle {
    CellStyle::fg(Rgb::new(255, 255, 255), PURPLE).bold()
}
