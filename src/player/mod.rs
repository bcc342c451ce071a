//! Player — the runtime event loop.
//!
//! Owns the `AnimationState`, feeds it terminal events and timer ticks, and
//! presents whatever the renderer makes of it. Exactly one event is handled
//! at a time; the tick timer is re-armed only after a tick has been fully
//! handled, so slow frames delay the animation instead of piling up.

pub mod config;
mod ticker;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self as ct_event, KeyEventKind};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::warn;

use crate::art::Art;
use crate::engine::{self, Action, AnimationState};
use crate::renderer::Renderer;
use crate::types::{Event, Screen};

pub use config::PlayerConfig;
pub use ticker::Ticker;

pub struct Player {
    art: Art,
    state: AnimationState,
    config: PlayerConfig,
}

impl Player {
    pub fn new(art: Art, config: PlayerConfig) -> Self {
        Self {
            art,
            state: AnimationState::new(),
            config,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Run the animation in the terminal until it leaves the screen or the
    /// user cancels.
    ///
    /// Sets up the terminal, enters the event loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("Failed to enter the alternate screen");
        }

        let result = self.run_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let (width, height) = terminal::size().context("Failed to read terminal size")?;
        if self.dispatch(stdout, Event::Resize { width, height })? == Action::Quit {
            return Ok(());
        }

        let mut ticker = Ticker::new(self.config.tick_interval, Instant::now());
        loop {
            let event = if ct_event::poll(ticker.timeout(Instant::now()))? {
                match translate(&self.config, ct_event::read()?) {
                    Some(event) => event,
                    None => continue,
                }
            } else {
                Event::Tick
            };

            if self.dispatch(stdout, event)? == Action::Quit {
                break;
            }
            ticker.handled(event, Instant::now());
        }

        Ok(())
    }

    /// Handle one event to completion, presenting a new frame if needed.
    fn dispatch(&mut self, stdout: &mut io::Stdout, event: Event) -> Result<Action> {
        let action = engine::handle_event(&mut self.state, &self.art, event);
        if action == Action::Redraw {
            let screen = Renderer::render(&self.state, &self.art);
            present(stdout, &screen, self.state.viewport().width, self.state.viewport().height)?;
        }
        Ok(action)
    }
}

/// Map a crossterm event onto the engine's vocabulary.
///
/// Returns `None` for anything the animation does not react to.
pub fn translate(config: &PlayerConfig, event: ct_event::Event) -> Option<Event> {
    match event {
        ct_event::Event::Key(key) if key.kind == KeyEventKind::Press => {
            config.is_cancel(&key).then_some(Event::Cancel)
        }
        ct_event::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

/// Cut a row down to `width` characters so the terminal never wraps it.
pub fn crop(row: &str, width: u16) -> &str {
    match row.char_indices().nth(usize::from(width)) {
        Some((end, _)) => &row[..end],
        None => row,
    }
}

// ---------------------------------------------------------------------------
// Terminal output
// ---------------------------------------------------------------------------

fn present(stdout: &mut io::Stdout, screen: &Screen, width: u16, height: u16) -> Result<()> {
    if screen.height() > usize::from(height) {
        warn!(rows = screen.height(), height, "screen taller than viewport, cropping");
    }

    queue!(stdout, terminal::BeginSynchronizedUpdate)?;
    for (y, row) in screen.rows.iter().take(usize::from(height)).enumerate() {
        queue!(
            stdout,
            cursor::MoveTo(0, y as u16),
            style::Print(crop(row, width)),
            terminal::Clear(terminal::ClearType::UntilNewLine),
        )?;
    }
    queue!(stdout, terminal::EndSynchronizedUpdate)?;
    stdout.flush()?;
    Ok(())
}
