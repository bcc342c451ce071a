use crate::types::Viewport;

/// Lifecycle of one run across the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No terminal size seen yet; the picture is parked at offset 0.
    #[default]
    Unsized,
    /// Scrolling left one column per tick.
    Running,
    /// Gone past the left edge or cancelled. Terminal.
    Finished,
}

/// Everything that changes while the animation plays.
///
/// `offset` only ever goes down once running: resizes update the viewport
/// but keep the picture where it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationState {
    offset: i32,
    sub_frame: usize,
    viewport: Viewport,
    phase: Phase,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column of the picture's left edge; negative once it has passed the
    /// left border of the screen.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn sub_frame(&self) -> usize {
        self.sub_frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub(super) fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.phase == Phase::Unsized {
            self.offset = i32::from(viewport.width);
            self.phase = Phase::Running;
        }
    }

    /// Moves one column left and turns the wheels. Returns false once the
    /// picture's right edge has left the screen.
    pub(super) fn advance(&mut self, art_width: i32, sub_frames: usize) -> bool {
        self.offset -= 1;
        if self.offset < -art_width {
            self.phase = Phase::Finished;
            return false;
        }
        if sub_frames > 0 {
            self.sub_frame = (self.sub_frame + 1) % sub_frames;
        }
        true
    }

    pub(super) fn finish(&mut self) {
        self.phase = Phase::Finished;
    }
}
