//! The two-colour palette every bar pattern is drawn from.

use rand::Rng;

/// An RGBA8 pixel value.
pub type Rgba = [u8; 4];

/// Opaque white.
pub const WHITE: Rgba = [255, 255, 255, 255];

/// The brand accent red, #D6001C.
pub const ACCENT_RED: Rgba = [214, 0, 28, 255];

/// One of the two colours a bar pixel may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarColor {
    White,
    Red,
}

impl BarColor {
    pub fn rgba(self) -> Rgba {
        match self {
            Self::White => WHITE,
            Self::Red => ACCENT_RED,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::White,
        }
    }

    /// Fair coin between white and red.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Self::White
        } else {
            Self::Red
        }
    }

    /// Maps a raw pixel back to a palette colour, if it is one.
    pub fn from_rgba(px: Rgba) -> Option<Self> {
        match px {
            WHITE => Some(Self::White),
            ACCENT_RED => Some(Self::Red),
            _ => None,
        }
    }
}
