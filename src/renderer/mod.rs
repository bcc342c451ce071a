//! Renderer — turns the animation state into text.
//!
//! Takes an `AnimationState` and an `Art` and produces a `Screen`.
//!
//! The renderer is pure and stateless. Given the same input, it always
//! produces the same output. It knows nothing about time or terminals.

use crate::art::Art;
use crate::engine::AnimationState;
use crate::types::Screen;

pub struct Renderer;

impl Renderer {
    /// Render the picture at the state's offset, vertically centered in the
    /// state's viewport.
    pub fn render(state: &AnimationState, art: &Art) -> Screen {
        let offset = state.offset();
        let width = art.width();

        let block: Vec<String> = art
            .lines(state.sub_frame())
            .filter_map(|line| clip_line(line, offset, width))
            .collect();

        Screen {
            rows: center_vertically(block, usize::from(state.viewport().height)),
        }
    }
}

/// Place one line of a `width`-wide picture at a signed column.
///
/// A positive offset indents the line; a negative one cuts that many
/// characters off its left end. Returns `None` once the whole picture is
/// past the left edge (`offset <= -width`).
pub fn clip_line(line: &str, offset: i32, width: usize) -> Option<String> {
    if offset >= 0 {
        let indent = offset.unsigned_abs() as usize;
        let mut out = String::with_capacity(indent + line.len());
        out.extend(std::iter::repeat_n(' ', indent));
        out.push_str(line);
        return Some(out);
    }

    let cut = offset.unsigned_abs() as usize;
    if cut >= width {
        return None;
    }
    // A line shorter than `width` may be cut away entirely; that is an
    // empty row, not an error.
    Some(line.chars().skip(cut).collect())
}

/// Pad `rows` with blank rows above and below to fill `height`.
///
/// The top gets `(height - rows) / 2`, rounded down; any odd row goes below.
/// Blocks taller than `height` are returned untouched.
pub fn center_vertically(rows: Vec<String>, height: usize) -> Vec<String> {
    let Some(spare) = height.checked_sub(rows.len()) else {
        return rows;
    };
    let top = spare / 2;
    let bottom = spare - top;

    let mut out = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(String::new(), top));
    out.extend(rows);
    out.extend(std::iter::repeat_n(String::new(), bottom));
    out
}
