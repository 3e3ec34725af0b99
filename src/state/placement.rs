use crate::model::{Position, Size};
use rand::Rng;

/// Distance kept between the evasive control and every viewport edge.
pub const DEFAULT_PADDING: f64 = 50.0;

/// Picks a fresh spot for the evasive control.
///
/// Each axis is drawn uniformly from `[padding, viewport - size - padding]`. When the
/// viewport is too small for that range to exist, the axis collapses to `padding`.
/// No history is kept, so repeats are possible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasivePlacer {
    padding: f64,
}

impl Default for EvasivePlacer {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl EvasivePlacer {
    pub fn place<R: Rng + ?Sized>(&self, viewport: Size, control: Size, rng: &mut R) -> Position {
        let left = self.axis(viewport.width, control.width, rng.r#gen::<f64>());
        let top = self.axis(viewport.height, control.height, rng.r#gen::<f64>());
        Position { top, left }
    }

    fn axis(&self, viewport: f64, size: f64, roll: f64) -> f64 {
        let viewport = finite_or_zero(viewport);
        let size = finite_or_zero(size).max(0.0);
        let span = viewport - size - 2.0 * self.padding;
        if span <= 0.0 {
            return self.padding;
        }
        let roll = finite_or_zero(roll).clamp(0.0, 1.0);
        (self.padding + roll * span).max(self.padding)
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn stays_inside_padded_viewport() {
        let placer = EvasivePlacer::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let sizes = [(1280.0, 720.0), (390.0, 844.0), (1920.0, 1080.0), (260.0, 200.0)];
        let control = Size::new(120.0, 48.0);
        for (w, h) in sizes {
            let viewport = Size::new(w, h);
            for _ in 0..500 {
                let p = placer.place(viewport, control, &mut rng);
                assert!(p.left >= DEFAULT_PADDING, "left {} < padding", p.left);
                assert!(p.top >= DEFAULT_PADDING, "top {} < padding", p.top);
                assert!(p.left <= w - control.width - DEFAULT_PADDING, "left {} overflows {w}", p.left);
                assert!(p.top <= h - control.height - DEFAULT_PADDING, "top {} overflows {h}", p.top);
            }
        }
    }

    #[test]
    fn degenerate_viewport_clamps_to_padding() {
        let placer = EvasivePlacer::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let p = placer.place(Size::new(100.0, 60.0), Size::new(120.0, 48.0), &mut rng);
        assert_eq!(p, Position { top: DEFAULT_PADDING, left: DEFAULT_PADDING });
        let p = placer.place(Size::new(0.0, 0.0), Size::new(0.0, 0.0), &mut rng);
        assert_eq!(p, Position { top: DEFAULT_PADDING, left: DEFAULT_PADDING });
    }

    #[test]
    fn non_finite_measurements_never_produce_nan() {
        let placer = EvasivePlacer::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let p = placer.place(Size::new(f64::NAN, f64::INFINITY), Size::new(f64::NAN, -5.0), &mut rng);
        assert!(p.left.is_finite() && p.top.is_finite());
        assert!(p.left >= DEFAULT_PADDING && p.top >= DEFAULT_PADDING);
    }

    #[test]
    fn axes_vary_independently() {
        let placer = EvasivePlacer::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let viewport = Size::new(1000.0, 800.0);
        let control = Size::new(100.0, 40.0);
        let points: Vec<Position> = (0..64).map(|_| placer.place(viewport, control, &mut rng)).collect();
        let distinct_left = points.iter().filter(|p| (p.left - points[0].left).abs() > 1.0).count();
        let distinct_top = points.iter().filter(|p| (p.top - points[0].top).abs() > 1.0).count();
        assert!(distinct_left > 0 && distinct_top > 0);
    }
}
