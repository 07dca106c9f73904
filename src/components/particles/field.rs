//! Drifting dot field with pointer magnetism.
//!
//! Dots drift with a small constant velocity, fade in once clear of the
//! surface edges, and are displaced toward the shared pointer target in
//! proportion to their per-dot magnetism. A dot that drifts fully off the
//! surface is replaced in the same frame, so the field size never changes
//! between repopulations.

use super::geom::{remap, Point};
use super::rng::Rng32;
use super::surface::SurfaceSize;

/// Per-frame opacity step while fading in.
const ALPHA_STEP: f64 = 0.02;
/// Distance from the nearest edge (logical px) over which dots fade.
const EDGE_FADE_RANGE: f64 = 20.0;

pub struct Dot {
    pub x: f64,
    pub y: f64,
    /// Cumulative magnetism displacement, applied on top of the position.
    pub translate_x: f64,
    pub translate_y: f64,
    pub size: f64,
    pub alpha: f64,
    pub target_alpha: f64,
    pub dx: f64,
    pub dy: f64,
    pub magnetism: f64,
}

impl Dot {
    /// A fresh dot at a uniformly random position with zero displacement
    /// and zero opacity.
    pub fn spawn(size: SurfaceSize, rng: &mut Rng32) -> Self {
        Dot {
            x: (rng.next_f64() * size.w).floor(),
            y: (rng.next_f64() * size.h).floor(),
            translate_x: 0.0,
            translate_y: 0.0,
            size: rng.next_f64() * 1.8 + 0.6,
            alpha: 0.0,
            target_alpha: rng.range(0.25, 0.85),
            dx: rng.range(-0.1, 0.1),
            dy: rng.range(-0.1, 0.1),
            magnetism: rng.range(0.1, 4.1),
        }
    }

    /// Signed distance from the dot's displaced boundary to the nearest
    /// surface edge.
    fn closest_edge(&self, size: SurfaceSize) -> f64 {
        let left = self.x + self.translate_x - self.size;
        let right = size.w - self.x - self.translate_x - self.size;
        let top = self.y + self.translate_y - self.size;
        let bottom = size.h - self.y - self.translate_y - self.size;
        left.min(right).min(top).min(bottom)
    }

    /// Out-of-bounds test on the raw position (displacement ignored), with
    /// the dot's own radius as margin.
    fn out_of_bounds(&self, size: SurfaceSize) -> bool {
        self.x < -self.size
            || self.x > size.w + self.size
            || self.y < -self.size
            || self.y > size.h + self.size
    }
}

pub struct DotField {
    dots: Vec<Dot>,
}

impl DotField {
    pub fn new() -> Self {
        DotField { dots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn clear(&mut self) {
        self.dots.clear();
    }

    /// Spawn `count` dots. Called at initialization and after every resize,
    /// always on an empty field.
    pub fn populate(&mut self, count: usize, size: SurfaceSize, rng: &mut Rng32) {
        self.dots.reserve(count);
        for _ in 0..count {
            self.dots.push(Dot::spawn(size, rng));
        }
    }

    /// Advance every dot by one frame: edge fade, drift, pointer easing,
    /// and off-surface replacement.
    pub fn advance(
        &mut self,
        size: SurfaceSize,
        pointer: Point,
        staticity: f64,
        ease: f64,
        rng: &mut Rng32,
    ) {
        for dot in &mut self.dots {
            let fade = remap(dot.closest_edge(size), 0.0, EDGE_FADE_RANGE, 0.0, 1.0);
            if fade > 1.0 {
                dot.alpha = (dot.alpha + ALPHA_STEP).min(dot.target_alpha);
            } else {
                dot.alpha = dot.target_alpha * fade;
            }

            dot.x += dot.dx;
            dot.y += dot.dy;
            dot.translate_x += (pointer.x / (staticity / dot.magnetism) - dot.translate_x) / ease;
            dot.translate_y += (pointer.y / (staticity / dot.magnetism) - dot.translate_y) / ease;

            if dot.out_of_bounds(size) {
                *dot = Dot::spawn(size, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sz() -> SurfaceSize {
        SurfaceSize::new(400.0, 200.0)
    }

    fn centered_dot() -> Dot {
        Dot {
            x: 200.0,
            y: 100.0,
            translate_x: 0.0,
            translate_y: 0.0,
            size: 1.0,
            alpha: 0.0,
            target_alpha: 0.6,
            dx: 0.0,
            dy: 0.0,
            magnetism: 2.0,
        }
    }

    #[test]
    fn test_populate_exact_count() {
        let mut rng = Rng32::new(7);
        for n in [0usize, 1, 30, 100] {
            let mut field = DotField::new();
            field.populate(n, sz(), &mut rng);
            assert_eq!(field.len(), n);
        }
    }

    #[test]
    fn test_count_invariant_under_advance() {
        let mut rng = Rng32::new(11);
        let mut field = DotField::new();
        field.populate(50, sz(), &mut rng);
        for _ in 0..500 {
            field.advance(sz(), Point::new(80.0, -40.0), 50.0, 50.0, &mut rng);
            assert_eq!(field.len(), 50);
        }
    }

    #[test]
    fn test_out_of_bounds_dot_is_replaced() {
        let mut rng = Rng32::new(5);
        let mut field = DotField::new();
        let mut dot = centered_dot();
        dot.x = -10.0;
        field.dots.push(dot);

        field.advance(sz(), Point::ZERO, 50.0, 50.0, &mut rng);

        assert_eq!(field.len(), 1);
        let replacement = &field.dots[0];
        // fresh spawn, not a reset of the old dot
        assert!(replacement.x >= 0.0 && replacement.x < sz().w);
        assert!(replacement.y >= 0.0 && replacement.y < sz().h);
        assert_eq!(replacement.alpha, 0.0);
        assert_eq!(replacement.translate_x, 0.0);
        assert_eq!(replacement.translate_y, 0.0);
    }

    #[test]
    fn test_alpha_stays_within_target() {
        let mut rng = Rng32::new(23);
        let mut field = DotField::new();
        field.populate(40, sz(), &mut rng);
        for _ in 0..300 {
            field.advance(sz(), Point::new(50.0, 20.0), 50.0, 50.0, &mut rng);
            for dot in field.dots() {
                assert!(dot.alpha >= 0.0);
                assert!(dot.alpha <= dot.target_alpha + 1e-12);
            }
        }
    }

    #[test]
    fn test_fade_in_is_linear_until_capped() {
        let mut rng = Rng32::new(1);
        let mut field = DotField::new();
        field.dots.push(centered_dot());

        for k in 1..=40 {
            field.advance(sz(), Point::ZERO, 50.0, 50.0, &mut rng);
            let expected = (0.02 * k as f64).min(0.6);
            assert!((field.dots[0].alpha - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_edge_fade_scales_target_alpha() {
        let mut rng = Rng32::new(1);
        let mut field = DotField::new();
        // closest edge at 10px: remap(10, 0, 20, 0, 1) = 0.5
        let mut dot = centered_dot();
        dot.x = 10.0;
        dot.size = 0.0;
        field.dots.push(dot);

        field.advance(sz(), Point::ZERO, 50.0, 50.0, &mut rng);
        assert!((field.dots[0].alpha - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_magnetism_displacement_step() {
        let mut rng = Rng32::new(1);
        let mut field = DotField::new();
        field.dots.push(centered_dot());

        field.advance(sz(), Point::new(100.0, 0.0), 50.0, 50.0, &mut rng);

        // (100 / (50 / 2) - 0) / 50 = 0.08
        assert!((field.dots[0].translate_x - 0.08).abs() < 1e-12);
        assert_eq!(field.dots[0].translate_y, 0.0);
    }

    #[test]
    fn test_clear_then_repopulate() {
        let mut rng = Rng32::new(9);
        let mut field = DotField::new();
        field.populate(30, sz(), &mut rng);
        field.clear();
        assert!(field.is_empty());
        field.populate(100, sz(), &mut rng);
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn test_spawned_dot_attribute_ranges() {
        let mut rng = Rng32::new(77);
        for _ in 0..500 {
            let dot = Dot::spawn(sz(), &mut rng);
            assert!(dot.size >= 0.6 && dot.size < 2.4);
            assert!(dot.target_alpha >= 0.25 && dot.target_alpha < 0.85);
            assert!(dot.dx >= -0.1 && dot.dx < 0.1);
            assert!(dot.dy >= -0.1 && dot.dy < 0.1);
            assert!(dot.magnetism >= 0.1 && dot.magnetism < 4.1);
            assert_eq!(dot.alpha, 0.0);
        }
    }
}
