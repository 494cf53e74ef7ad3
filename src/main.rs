//! Terminal arithmetic quiz runner (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer. The loop polls
//! input until the next frame tick, then feeds the measured elapsed time to the
//! quiz so the countdown follows the wall clock.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;

use math_quest::config::QuizConfig;
use math_quest::core::QuizState;
use math_quest::input::{map_key, should_quit, AnswerField, KeyIntent};
use math_quest::term::{FrameBuffer, QuizView, TerminalRenderer, Viewport};
use math_quest::types::{QuizAction, TICK_MS};

fn main() -> Result<()> {
    let config = QuizConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("quiz exited with error: {:#}", e);
    }
    result
}

fn init_logging(config: &QuizConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &QuizConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {}", seed);

    let mut quiz: QuizState<StdRng> = QuizState::new(seed);
    quiz.apply_action(QuizAction::SelectTopic(config.topic));
    quiz.apply_action(QuizAction::SelectDifficulty(config.difficulty));

    let view = QuizView::default();
    let mut answer = AnswerField::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let snap = quiz.snapshot();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, answer.as_str(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(snap.screen, key) {
                        log::info!("quit requested");
                        return Ok(());
                    }

                    match map_key(snap.screen, key) {
                        Some(KeyIntent::Action(action)) => {
                            quiz.apply_action(action);
                        }
                        Some(KeyIntent::Type(ch)) => {
                            answer.push(ch);
                        }
                        Some(KeyIntent::Erase) => {
                            answer.pop();
                        }
                        Some(KeyIntent::Submit) if snap.accepting_answers() => {
                            let text = answer.take();
                            quiz.submit_answer(text.as_str());
                        }
                        Some(KeyIntent::Submit) | None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. Whole elapsed milliseconds are consumed so no time is lost
        // between frames.
        let elapsed_ms = last_tick.elapsed().as_millis();
        if elapsed_ms >= TICK_MS as u128 {
            let elapsed_ms = elapsed_ms.min(u32::MAX as u128) as u32;
            last_tick += Duration::from_millis(elapsed_ms as u64);
            quiz.tick(elapsed_ms);
        }

        // The answer field belongs to one screen visit.
        if quiz.screen() != snap.screen {
            answer.clear();
        }
    }
}
