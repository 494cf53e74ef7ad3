//! Key mapping from terminal events to quiz intents.
//!
//! The same key means different things per screen: digits are answer text on the
//! active screen but pick a difficulty on setup.

use crate::types::{Difficulty, QuizAction, Screen, Topic};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// A payload-free quiz action
    Action(QuizAction),
    /// Append a character to the answer field
    Type(char),
    /// Delete the last answer character
    Erase,
    /// Submit the answer field
    Submit,
}

/// Map keyboard input to an intent for the given screen.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<KeyIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return None;
    }

    match screen {
        Screen::Setup => map_setup_key(key.code).map(KeyIntent::Action),
        Screen::Active => map_active_key(key.code),
        Screen::Results => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(KeyIntent::Action(QuizAction::PlayAgain))
            }
            _ => None,
        },
    }
}

fn map_setup_key(code: KeyCode) -> Option<QuizAction> {
    match code {
        // Topic list
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(QuizAction::PrevTopic),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(QuizAction::NextTopic),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(QuizAction::SelectTopic(Topic::Addition)),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(QuizAction::SelectTopic(Topic::Subtraction))
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(QuizAction::SelectTopic(Topic::Multiplication))
        }
        KeyCode::Char('d') | KeyCode::Char('D') => Some(QuizAction::SelectTopic(Topic::Division)),

        // Difficulty row
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(QuizAction::PrevDifficulty)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(QuizAction::NextDifficulty)
        }
        KeyCode::Char('1') => Some(QuizAction::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(QuizAction::SelectDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(QuizAction::SelectDifficulty(Difficulty::Hard)),

        KeyCode::Enter | KeyCode::Char(' ') => Some(QuizAction::Start),

        _ => None,
    }
}

fn map_active_key(code: KeyCode) -> Option<KeyIntent> {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => Some(KeyIntent::Type(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyIntent::Erase),
        KeyCode::Enter => Some(KeyIntent::Submit),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` is answer-safe because it is never valid answer text, but it only quits
/// outside the active screen to avoid losing a session to a typo.
pub fn should_quit(screen: Screen, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    screen != Screen::Active && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}
