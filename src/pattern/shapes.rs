//! White primitives scattered over a red bar.
//!
//! A pixel is covered when its centre lies inside the shape. There is no
//! anti-aliasing, so edges stay strictly two-colour.

use rand::Rng;

use crate::color::WHITE;
use crate::surface::PixelBuffer;

/// One shape per this many pixels of bar area.
pub const PIXELS_PER_SHAPE: u32 = 100;

const LINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Square { x: f32, y: f32, size: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Triangle([(f32, f32); 3]),
    Line { from: (f32, f32), to: (f32, f32) },
}

impl Shape {
    fn random<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let kind = rng.gen_range(0..4u8);
        let x = rng.gen_range(0.0..width as f32);
        let y = rng.gen_range(0.0..height as f32);
        let size = rng.gen_range(5.0..25.0f32);
        match kind {
            0 => Self::Square { x, y, size },
            1 => Self::Circle {
                cx: x,
                cy: y,
                r: size / 2.0,
            },
            2 => Self::Triangle([(x, y), (x + size, y), (x + size / 2.0, y - size)]),
            _ => {
                let dy = if rng.gen_bool(0.5) { size } else { -size };
                Self::Line {
                    from: (x, y),
                    to: (x + size, y + dy),
                }
            }
        }
    }

    /// Conservative pixel bounds `(x0, y0, x1, y1)`, end-exclusive.
    fn bounds(&self) -> (i64, i64, i64, i64) {
        let (min_x, min_y, max_x, max_y) = match *self {
            Self::Square { x, y, size } => (x, y, x + size, y + size),
            Self::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
            Self::Triangle(pts) => pts.iter().fold(
                (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
                |(a, b, c, d), &(px, py)| (a.min(px), b.min(py), c.max(px), d.max(py)),
            ),
            Self::Line { from, to } => {
                let h = LINE_WIDTH / 2.0;
                (
                    from.0.min(to.0) - h,
                    from.1.min(to.1) - h,
                    from.0.max(to.0) + h,
                    from.1.max(to.1) + h,
                )
            }
        };
        (
            min_x.floor() as i64,
            min_y.floor() as i64,
            max_x.ceil() as i64 + 1,
            max_y.ceil() as i64 + 1,
        )
    }

    fn covers(&self, px: f32, py: f32) -> bool {
        match *self {
            Self::Square { x, y, size } => px >= x && px < x + size && py >= y && py < y + size,
            Self::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
            Self::Triangle([a, b, c]) => {
                let d1 = edge(a, b, (px, py));
                let d2 = edge(b, c, (px, py));
                let d3 = edge(c, a, (px, py));
                let neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(neg && pos)
            }
            Self::Line { from, to } => segment_distance(from, to, (px, py)) <= LINE_WIDTH / 2.0,
        }
    }

    fn draw(&self, buf: &mut PixelBuffer) {
        let (x0, y0, x1, y1) = self.bounds();
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(buf.width() as i64);
        let y1 = y1.min(buf.height() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                if self.covers(x as f32 + 0.5, y as f32 + 0.5) {
                    buf.put(x, y, WHITE);
                }
            }
        }
    }
}

fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

fn segment_distance(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    let (vx, vy) = (b.0 - a.0, b.1 - a.1);
    let len2 = vx * vx + vy * vy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * vx + (p.1 - a.1) * vy) / len2).clamp(0.0, 1.0)
    };
    let (qx, qy) = (a.0 + t * vx - p.0, a.1 + t * vy - p.1);
    (qx * qx + qy * qy).sqrt()
}

/// Number of shapes scattered over a `width` x `height` bar: one per
/// [`PIXELS_PER_SHAPE`] pixels, rounded down.
pub fn shape_count(width: u32, height: u32) -> u64 {
    (width as u64 * height as u64) / PIXELS_PER_SHAPE as u64
}

fn scatter<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Vec<Shape> {
    (0..shape_count(width, height))
        .map(|_| Shape::random(width, height, rng))
        .collect()
}

pub(super) fn geometric<R: Rng + ?Sized>(buf: &mut PixelBuffer, rng: &mut R) {
    for shape in scatter(buf.width(), buf.height(), rng) {
        shape.draw(buf);
    }
}
