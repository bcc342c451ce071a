//! Art catalog — the compiled-in pictures.
//!
//! An `Art` is a static body plus an optional set of sub-frames (the wheels)
//! stacked underneath it. The catalog is read-only; the engine only ever
//! looks things up by sub-frame index.

mod d51;

pub use d51::d51;

/// One multi-line shape.
///
/// Lines may be shorter than the block's nominal width; consumers treat them
/// as if padded to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBlock {
    lines: Vec<String>,
    width: usize,
}

impl ArtBlock {
    pub fn new(lines: &[&str]) -> Self {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        ArtBlock { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Successive phases of one moving part. All members share one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubFrameSet {
    frames: Vec<ArtBlock>,
}

impl SubFrameSet {
    pub fn new(frames: Vec<ArtBlock>) -> Self {
        debug_assert!(
            frames.windows(2).all(|w| w[0].height() == w[1].height()),
            "sub-frames must share a line count"
        );
        SubFrameSet { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The phase active at `index`, wrapping around the set.
    pub fn frame(&self, index: usize) -> Option<&ArtBlock> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(index % self.frames.len())
    }

    fn height(&self) -> usize {
        self.frames.first().map_or(0, ArtBlock::height)
    }

    fn width(&self) -> usize {
        self.frames.iter().map(ArtBlock::width).max().unwrap_or(0)
    }
}

/// A complete picture: body on top, active sub-frame below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Art {
    name: &'static str,
    body: ArtBlock,
    sub_frames: Option<SubFrameSet>,
    width: usize,
}

impl Art {
    pub fn new(name: &'static str, body: ArtBlock, sub_frames: Option<SubFrameSet>) -> Self {
        let width = body
            .width()
            .max(sub_frames.as_ref().map_or(0, SubFrameSet::width));
        Art {
            name,
            body,
            sub_frames,
            width,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Nominal width `W` shared by every line of the picture.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows occupied by the body plus one sub-frame.
    pub fn height(&self) -> usize {
        self.body.height() + self.sub_frames.as_ref().map_or(0, SubFrameSet::height)
    }

    /// Number of sub-frame phases; zero when nothing cycles.
    pub fn sub_frame_count(&self) -> usize {
        self.sub_frames.as_ref().map_or(0, SubFrameSet::len)
    }

    /// Body lines followed by the lines of sub-frame `index`.
    pub fn lines(&self, index: usize) -> impl Iterator<Item = &str> {
        let sub = self
            .sub_frames
            .as_ref()
            .and_then(|set| set.frame(index))
            .map(ArtBlock::lines)
            .unwrap_or_default();
        self.body.lines().iter().chain(sub).map(String::as_str)
    }
}
