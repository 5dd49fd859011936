//! Bar pattern generation.
//!
//! A pattern is a pure function of its request, the bar size and a random
//! source. Every style writes only [`WHITE`] and [`ACCENT_RED`] pixels, fully
//! opaque; the text and shape styles paint white over a red background.

mod bars;
mod glyphs;
mod shapes;
mod words;

use std::fmt;
use std::str::FromStr;

use rand::distributions::WeightedIndex;
use rand::Rng;

use crate::color::{BarColor, ACCENT_RED, WHITE};
use crate::error::PatternError;
use crate::surface::PixelBuffer;

pub use glyphs::{text_width, FONT_SIZE};
pub use shapes::{shape_count, PIXELS_PER_SHAPE};
pub use words::{LINE_HEIGHT, VOCABULARY};

/// The nine randomizable bar algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternStyle {
    Striped,
    HorizontalRuns,
    BlockSegments,
    SparseNoiseWhite,
    SparseNoiseRed,
    RepeatingVertical,
    FullRandom,
    WordFill,
    Geometric,
}

impl PatternStyle {
    pub const ALL: [PatternStyle; 9] = [
        Self::Striped,
        Self::HorizontalRuns,
        Self::BlockSegments,
        Self::SparseNoiseWhite,
        Self::SparseNoiseRed,
        Self::RepeatingVertical,
        Self::FullRandom,
        Self::WordFill,
        Self::Geometric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Striped => "striped",
            Self::HorizontalRuns => "horizontal-runs",
            Self::BlockSegments => "block-segments",
            Self::SparseNoiseWhite => "sparse-noise-white",
            Self::SparseNoiseRed => "sparse-noise-red",
            Self::RepeatingVertical => "repeating-vertical",
            Self::FullRandom => "full-random",
            Self::WordFill => "word-fill",
            Self::Geometric => "geometric",
        }
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| PatternError::UnknownStyle(s.to_string()))
    }
}

/// What a single render asks the generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRequest {
    /// All-white bar, used for the first render after mount.
    SolidWhite,
    Style(PatternStyle),
}

impl fmt::Display for PatternRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SolidWhite => f.write_str("solid-white"),
            Self::Style(style) => fmt::Display::fmt(style, f),
        }
    }
}

/// Explicit weight per style. `SolidWhite` is deliberately absent.
pub const UNIFORM_WEIGHTS: [(PatternStyle, u32); 9] = [
    (PatternStyle::Striped, 1),
    (PatternStyle::HorizontalRuns, 1),
    (PatternStyle::BlockSegments, 1),
    (PatternStyle::SparseNoiseWhite, 1),
    (PatternStyle::SparseNoiseRed, 1),
    (PatternStyle::RepeatingVertical, 1),
    (PatternStyle::FullRandom, 1),
    (PatternStyle::WordFill, 1),
    (PatternStyle::Geometric, 1),
];

#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: Vec<(PatternStyle, u32)>,
    index: WeightedIndex<u32>,
}

impl StyleTable {
    pub fn new(entries: &[(PatternStyle, u32)]) -> Result<Self, PatternError> {
        let index = WeightedIndex::new(entries.iter().map(|(_, w)| *w))
            .map_err(|_| PatternError::EmptyStyleTable)?;
        Ok(Self {
            entries: entries.to_vec(),
            index,
        })
    }

    pub fn uniform() -> Self {
        let index = WeightedIndex::new(UNIFORM_WEIGHTS.iter().map(|(_, w)| *w))
            .unwrap_or_else(|_| unreachable!("uniform weights are positive"));
        Self {
            entries: UNIFORM_WEIGHTS.to_vec(),
            index,
        }
    }

    /// A table that always yields `style`.
    pub fn only(style: PatternStyle) -> Self {
        let index = WeightedIndex::new([1u32])
            .unwrap_or_else(|_| unreachable!("single positive weight"));
        Self {
            entries: vec![(style, 1)],
            index,
        }
    }

    pub fn entries(&self) -> &[(PatternStyle, u32)] {
        &self.entries
    }

    /// Probability of `style` being drawn.
    pub fn probability(&self, style: PatternStyle) -> f64 {
        let total: u64 = self.entries.iter().map(|(_, w)| *w as u64).sum();
        let weight: u64 = self
            .entries
            .iter()
            .filter(|(s, _)| *s == style)
            .map(|(_, w)| *w as u64)
            .sum();
        weight as f64 / total as f64
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> PatternStyle {
        self.entries[rng.sample(&self.index)].0
    }
}

/// Produces a `width x height` bar for `request`.
pub fn generate<R: Rng + ?Sized>(
    request: PatternRequest,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<PixelBuffer, PatternError> {
    let background = match request {
        PatternRequest::Style(PatternStyle::WordFill | PatternStyle::Geometric) => ACCENT_RED,
        _ => WHITE,
    };
    let mut buf = PixelBuffer::filled(width, height, background)?;

    match request {
        PatternRequest::SolidWhite => {}
        PatternRequest::Style(style) => match style {
            PatternStyle::Striped => bars::striped(&mut buf, rng),
            PatternStyle::HorizontalRuns => bars::horizontal_runs(&mut buf, rng),
            PatternStyle::BlockSegments => bars::block_segments(&mut buf, rng),
            PatternStyle::SparseNoiseWhite => bars::sparse_noise(&mut buf, BarColor::White, rng),
            PatternStyle::SparseNoiseRed => bars::sparse_noise(&mut buf, BarColor::Red, rng),
            PatternStyle::RepeatingVertical => bars::repeating_vertical(&mut buf, rng),
            PatternStyle::FullRandom => bars::full_random(&mut buf, rng),
            PatternStyle::WordFill => words::word_fill(&mut buf, rng),
            PatternStyle::Geometric => shapes::geometric(&mut buf, rng),
        },
    }

    log::debug!("generated {request} bar {width}x{height}");
    Ok(buf)
}
