use rand::seq::SliceRandom;
use rand::Rng;

use super::glyphs::{draw_text, text_width, FONT_SIZE};
use crate::color::WHITE;
use crate::surface::PixelBuffer;

/// Distance between successive text lines.
pub const LINE_HEIGHT: u32 = 40;

/// Words the text bar draws from. Repeats are intentional and weight the draw.
pub const VOCABULARY: &[&str] = &[
    "sigma", "rizz", "sus", "yeet", "based", "cringe", "bruh", "skibidi", "gyatt", "cap",
    "no-cap", "twitter", "grindset", "ratio", "goat", "mog", "slay", "bet", "npc", "ratio",
    "vibe", "chad", "simp", "drip", "mid", "apple", "banana", "car", "dog", "elephant",
    "forest", "guitar", "house", "island", "jungle", "kite", "lemon", "mountain", "notebook",
    "ocean", "penguin", "quartz", "river", "sun", "tree", "umbrella", "violin", "water",
    "yummy", "yarn", "zebra", "ant", "ball", "cloud", "desk", "egg", "fire", "garden", "hat",
    "ice", "jacket", "key", "lamp", "moon", "nest", "orange", "pencil", "queen", "rose", "star",
    "table", "umbrella", "vase", "window", "dance", "yogurt", "zipper", "anchor", "brush",
    "circle", "door", "engine", "flute", "globe", "hill", "igloo", "jar", "kite", "leaf", "map",
    "needle", "oar", "plate", "quill", "rope", "spoon", "train", "urn", "vulture", "wheel",
    "x-ray", "yacht", "zeppelin",
];

/// White words tiled over the (already red) buffer, line by line. The last
/// word on a line may run past the right edge.
pub(super) fn word_fill<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let Some(word) = VOCABULARY.choose(rng) else {
                return;
            };
            draw_text(buf, word, x as i64, (y + FONT_SIZE) as i64, WHITE);
            x += text_width(word);
        }
        y += LINE_HEIGHT;
    }
}
