//! Two-colour pixel algorithms. Each one overwrites every pixel of `buf`.

use rand::Rng;

use crate::color::BarColor;
use crate::surface::PixelBuffer;

fn column_sequence<R: Rng + ?Sized>(height: u32, rng: &mut R) -> Vec<BarColor> {
    (0..height).map(|_| BarColor::random(rng)).collect()
}

fn paint_columns(buf: &mut PixelBuffer, x0: u32, x1: u32, column: &[BarColor]) {
    for (y, color) in column.iter().enumerate() {
        buf.fill_rect(x0 as i64, y as i64, x1 as i64, y as i64 + 1, color.rgba());
    }
}

/// Vertical segments 5..35px wide, each repeating one random column.
pub(super) fn striped<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    let mut x = 0;
    while x < width {
        let seg = rng.gen_range(5..35u32);
        let column = column_sequence(height, rng);
        let end = (x + seg).min(width);
        paint_columns(buf, x, end, &column);
        x += seg;
    }
}

/// Per row, runs of 3..11px in a random colour.
pub(super) fn horizontal_runs<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    for y in 0..height {
        let mut x = 0;
        while x < width {
            let run = rng.gen_range(3..11u32);
            let color = BarColor::random(rng);
            buf.fill_rect(x as i64, y as i64, (x + run) as i64, y as i64 + 1, color.rgba());
            x += run;
        }
    }
}

/// Bands 3..9px tall, split into blocks 5..21px wide.
pub(super) fn block_segments<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    let mut y = 0;
    while y < height {
        let band = rng.gen_range(3..9u32).min(height - y);
        let mut x = 0;
        while x < width {
            let block = rng.gen_range(5..21u32).min(width - x);
            let color = BarColor::random(rng);
            buf.fill_rect(
                x as i64,
                y as i64,
                (x + block) as i64,
                (y + band) as i64,
                color.rgba(),
            );
            x += block;
        }
        y += band;
    }
}

/// `base` with probability 0.9, otherwise its opposite.
pub(super) fn sparse_noise<R: Rng + ?Sized>(buf: &mut PixelBuffer, base: BarColor, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    for y in 0..height {
        for x in 0..width {
            let color = if rng.gen_bool(0.9) { base } else { base.opposite() };
            buf.put(x as i64, y as i64, color.rgba());
        }
    }
}

pub(super) fn repeating_vertical<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let column = column_sequence(buf.height(), rng);
    let width = buf.width();
    paint_columns(buf, 0, width, &column);
}

pub(super) fn full_random<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    let (width, height) = (buf.width(), buf.height());
    for y in 0..height {
        for x in 0..width {
            buf.put(x as i64, y as i64, BarColor::random(rng).rgba());
        }
    }
}
