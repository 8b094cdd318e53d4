//! One-shot confetti burst drawn over the finish screen.
//!
//! Particles live in unit coordinates (0..1 on both axes) so the burst
//! scales with the terminal. Once every particle has fallen past the
//! bottom edge the burst is done; it never recycles.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const GLYPHS: &[char] = &['*', '+', '\u{2022}', '~', 'o', '\u{25aa}'];
const COLORS: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightRed,
    Color::LightBlue,
];
const GRAVITY: f32 = 0.0003;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
}

/// A falling confetti burst.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Launch `count` particles from above the top edge.
    pub fn burst<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-0.6..0.0),
                vx: rng.random_range(-0.004..0.004),
                vy: rng.random_range(0.004..0.02),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();
        Self { particles }
    }

    /// Advance one frame and drop particles that left the screen.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles.retain(|p| p.y < 1.0);
    }

    /// Particles still falling.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether every particle has fallen off screen.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let col = area.x + (p.x * f32::from(area.width)) as u16;
            let row = area.y + (p.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_falls_and_finishes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut confetti = Confetti::burst(100, &mut rng);
        assert_eq!(confetti.len(), 100);
        assert!(!confetti.is_empty());

        for _ in 0..1000 {
            confetti.step();
        }
        assert!(confetti.is_empty());
    }

    #[test]
    fn renders_inside_area() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::burst(200, &mut rng);
        for _ in 0..40 {
            confetti.step();
        }
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Widget::render(&confetti, area, &mut buf);

        let drawn = buf
            .content
            .iter()
            .filter(|c| GLYPHS.iter().any(|g| c.symbol() == g.to_string()))
            .count();
        assert!(drawn > 0);
    }
}
