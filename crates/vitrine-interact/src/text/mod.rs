//! Text segmentation for match highlighting.

mod highlight;

pub use highlight::{Highlighter, MatchSegment, highlight};
