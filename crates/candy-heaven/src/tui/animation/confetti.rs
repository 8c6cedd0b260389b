//! Confetti renderer - turns a burst batch into terminal cells

use std::time::Duration;

use candy_core::burst::{Batch, Particle};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::{fade, Theme};

/// Pixels per terminal column
const PX_PER_COL: f64 = 8.0;
/// Pixels per terminal row (cells are roughly twice as tall as wide)
const PX_PER_ROW: f64 = 16.0;

/// Draw the current batch, flying out from `origin` (absolute cell coords)
pub fn render_confetti(
    buf: &mut Buffer,
    area: Rect,
    origin: (u16, u16),
    batch: &Batch,
    theme: &Theme,
) {
    if batch.is_empty() {
        return;
    }

    let cells = confetti_cells(
        batch.particles(),
        batch.elapsed(),
        area,
        origin,
        theme.bg_rgb(),
    );
    for (x, y, ch, color) in cells {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Screen cells for `particles` at `elapsed` since the trigger
///
/// Only cells inside `area` are returned.
pub fn confetti_cells(
    particles: &[Particle],
    elapsed: Duration,
    area: Rect,
    origin: (u16, u16),
    bg: (u8, u8, u8),
) -> Vec<(u16, u16, char, Color)> {
    let mut result = Vec::with_capacity(particles.len());

    for particle in particles {
        if particle.is_landed(elapsed) {
            continue;
        }
        let frame = particle.frame(elapsed);

        let x = origin.0 as f64 + (frame.x / PX_PER_COL).round();
        let y = origin.1 as f64 + (frame.y / PX_PER_ROW).round();
        if x < area.left() as f64
            || y < area.top() as f64
            || x >= area.right() as f64
            || y >= area.bottom() as f64
        {
            continue;
        }

        let ch = glyph(frame.rotation, frame.scale);
        let color = fade(particle.color, bg, frame.opacity);
        result.push((x as u16, y as u16, ch, color));
    }

    result
}

/// Pick a line glyph for a rotation in degrees; shrunken confetti gets the light set
fn glyph(rotation: f64, scale: f64) -> char {
    const HEAVY: [char; 4] = ['\u{2501}', '\u{2572}', '\u{2503}', '\u{2571}']; // ━ ╲ ┃ ╱
    const LIGHT: [char; 4] = ['\u{2500}', '\u{2572}', '\u{2502}', '\u{2571}']; // ─ ╲ │ ╱

    let bucket = ((rotation.rem_euclid(180.0) + 22.5) / 45.0) as usize % 4;
    if scale >= 0.95 {
        HEAVY[bucket]
    } else {
        LIGHT[bucket]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_core::burst::{ScriptedRandom, CONFETTI_PALETTE};

    const BG: (u8, u8, u8) = (0, 0, 0);

    fn particle(offset_x: f64, offset_y: f64, delay: f64) -> Particle {
        let mut p = Particle::spawn(&mut ScriptedRandom::constant(0.0));
        p.offset_x = offset_x;
        p.offset_y = offset_y;
        p.delay = delay;
        p
    }

    #[test]
    fn test_particles_start_at_origin() {
        let area = Rect::new(0, 0, 80, 24);
        let p = particle(120.0, -280.0, 0.0);
        let cells = confetti_cells(&[p], Duration::ZERO, area, (40, 20), BG);
        assert_eq!(cells.len(), 1);
        let (x, y, ch, color) = cells[0];
        assert_eq!((x, y), (40, 20));
        assert_eq!(ch, '\u{2501}');
        let c = CONFETTI_PALETTE[0];
        assert_eq!(color, Color::Rgb(c.red, c.green, c.blue));
    }

    #[test]
    fn test_particles_fly_out_and_fade() {
        let area = Rect::new(0, 0, 80, 24);
        let p = particle(120.0, -160.0, 0.0);

        let mid_flight = Duration::from_millis(500);
        let cells = confetti_cells(&[p.clone()], mid_flight, area, (40, 20), BG);
        let (x, y, _, _) = cells[0];
        assert_eq!(x, 53);
        assert_eq!(y, 12);

        // Fully faded once landed
        let cells = confetti_cells(&[p], Duration::from_millis(1150), area, (40, 20), BG);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_landed_particles_are_skipped() {
        let area = Rect::new(0, 0, 80, 24);
        let p = particle(40.0, -80.0, 0.3);

        // Delay plus flight time is 1.4 s
        let still_flying = Duration::from_millis(1350);
        assert!(!p.is_landed(still_flying));
        let cells = confetti_cells(&[p.clone()], still_flying, area, (40, 20), BG);
        assert_eq!(cells.len(), 1);

        let landed = Duration::from_millis(1400);
        assert!(p.is_landed(landed));
        assert!(confetti_cells(&[p], landed, area, (40, 20), BG).is_empty());
    }

    #[test]
    fn test_delayed_particle_waits_at_origin() {
        let area = Rect::new(0, 0, 80, 24);
        let p = particle(-120.0, -60.0, 0.3);
        let cells = confetti_cells(&[p], Duration::from_millis(200), area, (40, 20), BG);
        assert_eq!((cells[0].0, cells[0].1), (40, 20));
    }

    #[test]
    fn test_offscreen_particles_are_skipped() {
        let area = Rect::new(0, 0, 10, 5);
        let p = particle(120.0, -280.0, 0.0);
        let cells = confetti_cells(&[p], Duration::from_millis(600), area, (5, 4), BG);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_glyph_buckets() {
        assert_eq!(glyph(0.0, 1.0), '━');
        assert_eq!(glyph(45.0, 1.0), '╲');
        assert_eq!(glyph(90.0, 1.0), '┃');
        assert_eq!(glyph(135.0, 1.0), '╱');
        assert_eq!(glyph(180.0, 1.0), '━');
        assert_eq!(glyph(540.0, 0.9), '─');
    }

    #[test]
    fn test_render_writes_cells() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        render_confetti(&mut buf, area, (10, 8), &Batch::empty(), &Theme::candy());
        assert_eq!(buf[(10, 8)].symbol(), " ");
    }
}
