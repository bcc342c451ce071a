//! Shared boundary types for the locomotive animation.
//!
//! This module defines the two key data contracts:
//! - Terminal → Engine (in-memory): `Event`s fed to the state machine
//! - Renderer → Player (in-memory): a `Screen` of text rows to present

// ---------------------------------------------------------------------------
// Terminal → Engine boundary
// ---------------------------------------------------------------------------

/// Visible terminal area in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

/// Everything the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Tick,
    Resize { width: u16, height: u16 },
    Cancel,
}

// ---------------------------------------------------------------------------
// Renderer → Player boundary
// ---------------------------------------------------------------------------

/// A fully composed text buffer, one entry per terminal row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub rows: Vec<String>,
}

impl Screen {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when every row is blank.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.trim().is_empty())
    }
}
