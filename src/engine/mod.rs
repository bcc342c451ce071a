//! Engine — the animation state machine.
//!
//! Consumes `Event`s one at a time and mutates an `AnimationState`.
//! The engine never touches the terminal and never schedules anything; it
//! tells the caller what to do next through an `Action`.

mod state;

pub use state::{AnimationState, Phase};

use tracing::{debug, info, trace};

use crate::art::Art;
use crate::types::{Event, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed.
    Continue,
    /// Present a fresh frame.
    Redraw,
    /// Stop the loop; no further ticks.
    Quit,
}

/// Apply one event to the state.
pub fn handle_event(state: &mut AnimationState, art: &Art, event: Event) -> Action {
    if state.is_finished() {
        return Action::Quit;
    }

    match event {
        Event::Cancel => {
            info!(offset = state.offset(), "cancelled");
            state.finish();
            Action::Quit
        }
        Event::Resize { width, height } => {
            state.resize(Viewport::new(width, height));
            debug!(width, height, offset = state.offset(), "viewport resized");
            Action::Redraw
        }
        Event::Tick => handle_tick(state, art),
    }
}

fn handle_tick(state: &mut AnimationState, art: &Art) -> Action {
    match state.phase() {
        Phase::Unsized => Action::Continue,
        Phase::Running => {
            let width = i32::try_from(art.width()).unwrap_or(i32::MAX);
            if state.advance(width, art.sub_frame_count()) {
                trace!(offset = state.offset(), sub_frame = state.sub_frame(), "tick");
                Action::Redraw
            } else {
                info!(art = art.name(), "left the screen");
                Action::Quit
            }
        }
        Phase::Finished => Action::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::{ArtBlock, SubFrameSet};

    /// Five columns wide with six wheel phases.
    fn cart() -> Art {
        let wheels = (0..6)
            .map(|i| ArtBlock::new(&[format!("o{i}o").as_str()]))
            .collect();
        Art::new("cart", ArtBlock::new(&["ABCDE"]), Some(SubFrameSet::new(wheels)))
    }

    fn running(width: u16) -> AnimationState {
        let mut state = AnimationState::new();
        handle_event(&mut state, &cart(), Event::Resize { width, height: 10 });
        state
    }

    #[test]
    fn starts_unsized_at_zero() {
        let state = AnimationState::new();
        assert_eq!(state.phase(), Phase::Unsized);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.sub_frame(), 0);
    }

    #[test]
    fn first_resize_parks_art_off_the_right_edge() {
        let state = running(80);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.offset(), 80);
        assert_eq!(state.viewport(), Viewport::new(80, 10));
    }

    #[test]
    fn ticks_are_ignored_until_sized() {
        let mut state = AnimationState::new();
        assert_eq!(handle_event(&mut state, &cart(), Event::Tick), Action::Continue);
        assert_eq!(state, AnimationState::new());
    }

    #[test]
    fn tick_moves_left_and_turns_wheels() {
        let art = cart();
        let mut state = running(20);
        for t in 0..10 {
            let before = state.clone();
            assert_eq!(handle_event(&mut state, &art, Event::Tick), Action::Redraw);
            assert_eq!(state.offset(), before.offset() - 1, "tick {t}");
            assert_eq!(state.sub_frame(), (before.sub_frame() + 1) % 6, "tick {t}");
        }
    }

    #[test]
    fn sub_frame_wraps_after_a_full_cycle() {
        let art = cart();
        let mut state = running(100);
        for _ in 0..7 {
            handle_event(&mut state, &art, Event::Tick);
        }
        assert_eq!(state.sub_frame(), 1);
    }

    #[test]
    fn art_without_sub_frames_keeps_index_at_zero() {
        let art = Art::new("banner", ArtBlock::new(&["HI"]), None);
        let mut state = AnimationState::new();
        handle_event(&mut state, &art, Event::Resize { width: 10, height: 3 });
        handle_event(&mut state, &art, Event::Tick);
        assert_eq!(state.sub_frame(), 0);
        assert_eq!(state.offset(), 9);
    }

    #[test]
    fn finishes_only_once_past_minus_width() {
        let art = cart();
        let mut state = running(0);
        // 0 -> -5 stays running; -5 is still "on the edge".
        for _ in 0..5 {
            assert_eq!(handle_event(&mut state, &art, Event::Tick), Action::Redraw);
        }
        assert_eq!(state.offset(), -5);
        assert_eq!(state.phase(), Phase::Running);

        assert_eq!(handle_event(&mut state, &art, Event::Tick), Action::Quit);
        assert_eq!(state.offset(), -6);
        assert!(state.is_finished());
    }

    #[test]
    fn finished_state_ignores_everything() {
        let art = cart();
        let mut state = running(0);
        while handle_event(&mut state, &art, Event::Tick) != Action::Quit {}
        let done = state.clone();
        assert_eq!(handle_event(&mut state, &art, Event::Tick), Action::Quit);
        assert_eq!(
            handle_event(&mut state, &art, Event::Resize { width: 50, height: 50 }),
            Action::Quit
        );
        assert_eq!(state, done);
    }

    #[test]
    fn cancel_finishes_from_any_live_phase() {
        let art = cart();

        let mut fresh = AnimationState::new();
        assert_eq!(fresh.phase(), Phase::Unsized);
        assert_eq!(handle_event(&mut fresh, &art, Event::Cancel), Action::Quit);
        assert!(fresh.is_finished());
        assert_eq!(handle_event(&mut fresh, &art, Event::Tick), Action::Quit);

        let mut state = running(40);
        handle_event(&mut state, &art, Event::Tick);
        assert_eq!(handle_event(&mut state, &art, Event::Cancel), Action::Quit);
        assert!(state.is_finished());
        assert_eq!(handle_event(&mut state, &art, Event::Tick), Action::Quit);
        assert_eq!(state.offset(), 39);
    }

    #[test]
    fn resize_while_running_keeps_position() {
        let art = cart();
        let mut state = running(40);
        for _ in 0..3 {
            handle_event(&mut state, &art, Event::Tick);
        }
        let action = handle_event(&mut state, &art, Event::Resize { width: 120, height: 30 });
        assert_eq!(action, Action::Redraw);
        assert_eq!(state.offset(), 37);
        assert_eq!(state.sub_frame(), 3);
        assert_eq!(state.viewport(), Viewport::new(120, 30));
    }
}
