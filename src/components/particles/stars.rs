//! Shooting-star streaks along quadratic Bezier arcs.
//!
//! Stars spawn on a fixed cadence, enter from a random edge with a margin
//! beyond the surface so they visibly fly in and out, and live for a fixed
//! duration. The path is frozen at spawn; everything drawn afterwards is a
//! pure function of elapsed time.

use super::geom::Point;
use super::rng::Rng32;
use super::surface::SurfaceSize;

/// Time between spawns, ms.
pub const SPAWN_INTERVAL_MS: f64 = 3000.0;
/// Streak lifetime, ms.
pub const STAR_DURATION_MS: f64 = 3000.0;

/// Edge a star enters the surface from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

pub struct ShootingStar {
    pub start: Point,
    pub ctrl: Point,
    pub end: Point,
    /// Tail length in logical units.
    pub length: f64,
    pub created_at: f64,
    pub duration_ms: f64,
    pub alpha: f64,
}

impl ShootingStar {
    pub fn spawn(size: SurfaceSize, now: f64, rng: &mut Rng32) -> Self {
        let edge = match (rng.next_f64() * 4.0) as u32 {
            0 => Edge::Left,
            1 => Edge::Right,
            2 => Edge::Top,
            _ => Edge::Bottom,
        };
        Self::spawn_from_edge(edge, size, now, rng)
    }

    pub fn spawn_from_edge(edge: Edge, size: SurfaceSize, now: f64, rng: &mut Rng32) -> Self {
        let margin = size.max_side() * 0.12 + 60.0;

        let (start, end) = match edge {
            Edge::Left => (
                Point::new(-margin, rng.next_f64() * size.h),
                Point::new(size.w + margin, rng.next_f64() * size.h),
            ),
            Edge::Right => (
                Point::new(size.w + margin, rng.next_f64() * size.h),
                Point::new(-margin, rng.next_f64() * size.h),
            ),
            Edge::Top => (
                Point::new(rng.next_f64() * size.w, -margin),
                Point::new(rng.next_f64() * size.w, size.h + margin),
            ),
            Edge::Bottom => (
                Point::new(rng.next_f64() * size.w, size.h + margin),
                Point::new(rng.next_f64() * size.w, -margin),
            ),
        };

        // bow the chord sideways for a gentle arc
        let chord = end - start;
        let mid = (start + end) * 0.5;
        let perp = Point::new(-chord.y, chord.x).normalized_or(Point::new(1.0, 0.0));
        let bend = (0.03 + rng.next_f64() * 0.04) * size.diagonal();
        let side = if rng.next_f64() < 0.5 { -1.0 } else { 1.0 };

        ShootingStar {
            start,
            ctrl: mid + perp * (bend * side),
            end,
            length: rng.range(120.0, 260.0),
            created_at: now,
            duration_ms: STAR_DURATION_MS,
            alpha: rng.range(0.55, 0.90),
        }
    }

    /// Lifetime progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.created_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Quadratic Bezier position at `t`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        self.start * (u * u) + self.ctrl * (2.0 * u * t) + self.end * (t * t)
    }

    /// Unit tangent at `t`. Degenerate derivatives fall back to the
    /// normalized chord, then to the unit x-axis.
    pub fn tangent_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let derivative = (self.ctrl - self.start) * (2.0 * u) + (self.end - self.ctrl) * (2.0 * t);
        let chord = (self.end - self.start).normalized_or(Point::new(1.0, 0.0));
        derivative.normalized_or(chord)
    }

    /// Tail endpoint trailing the head against the direction of travel.
    pub fn tail_point(&self, t: f64) -> Point {
        self.point_at(t) - self.tangent_at(t) * self.length
    }

    pub fn expired(&self, now: f64) -> bool {
        now - self.created_at > self.duration_ms
    }
}

/// The emitter: live stars plus the single next-spawn timestamp.
pub struct StarField {
    stars: Vec<ShootingStar>,
    next_spawn_at: f64,
}

impl StarField {
    pub fn new(now: f64) -> Self {
        StarField {
            stars: Vec::new(),
            next_spawn_at: now + SPAWN_INTERVAL_MS,
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn next_spawn_at(&self) -> f64 {
        self.next_spawn_at
    }

    /// Spawn when due, then retire stars past their lifetime.
    pub fn advance(&mut self, size: SurfaceSize, now: f64, rng: &mut Rng32) {
        if now >= self.next_spawn_at {
            self.stars.push(ShootingStar::spawn(size, now, rng));
            self.next_spawn_at = now + SPAWN_INTERVAL_MS;
        }
        self.stars.retain(|star| !star.expired(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sz() -> SurfaceSize {
        SurfaceSize::new(400.0, 200.0)
    }

    fn star(rng: &mut Rng32) -> ShootingStar {
        ShootingStar::spawn(sz(), 10_000.0, rng)
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut rng = Rng32::new(4);
        let s = star(&mut rng);
        assert_eq!(s.progress(s.created_at - 500.0), 0.0);
        assert_eq!(s.progress(s.created_at + 1500.0), 0.5);
        assert_eq!(s.progress(s.created_at + 60_000.0), 1.0);
    }

    #[test]
    fn test_path_endpoints_match_stored_points() {
        let mut rng = Rng32::new(8);
        for _ in 0..20 {
            let s = star(&mut rng);
            assert_eq!(s.point_at(0.0), s.start);
            assert_eq!(s.point_at(1.0), s.end);
        }
    }

    #[test]
    fn test_lifetime_window() {
        let mut rng = Rng32::new(2);
        let s = star(&mut rng);
        assert!(!s.expired(s.created_at));
        assert!(!s.expired(s.created_at + 1500.0));
        assert!(!s.expired(s.created_at + STAR_DURATION_MS));
        assert!(s.expired(s.created_at + STAR_DURATION_MS + 1.0));
    }

    #[test]
    fn test_left_edge_spawn_geometry() {
        let mut rng = Rng32::new(6);
        let margin = 400.0 * 0.12 + 60.0;
        for _ in 0..20 {
            let s = ShootingStar::spawn_from_edge(Edge::Left, sz(), 0.0, &mut rng);
            assert_eq!(s.start.x, -margin);
            assert_eq!(s.end.x, 400.0 + margin);
            assert!(s.start.y >= 0.0 && s.start.y < 200.0);
            assert!(s.end.y >= 0.0 && s.end.y < 200.0);
        }
    }

    #[test]
    fn test_emitter_spawns_on_schedule() {
        let mut rng = Rng32::new(12);
        let t0 = 1_000.0;
        let mut emitter = StarField::new(t0);

        emitter.advance(sz(), t0, &mut rng);
        assert!(emitter.is_empty());

        emitter.advance(sz(), t0 + SPAWN_INTERVAL_MS, &mut rng);
        assert_eq!(emitter.len(), 1);
        assert_eq!(emitter.next_spawn_at(), t0 + 2.0 * SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_next_spawn_strictly_increases() {
        let mut rng = Rng32::new(13);
        let mut emitter = StarField::new(0.0);
        let mut last = emitter.next_spawn_at();
        let mut now = 0.0;
        for _ in 0..10 {
            now += SPAWN_INTERVAL_MS;
            emitter.advance(sz(), now, &mut rng);
            assert!(emitter.next_spawn_at() > last);
            last = emitter.next_spawn_at();
        }
    }

    #[test]
    fn test_emitter_retires_expired_stars() {
        let mut rng = Rng32::new(14);
        let t0 = 0.0;
        let mut emitter = StarField::new(t0);

        let spawn_time = t0 + SPAWN_INTERVAL_MS;
        emitter.advance(sz(), spawn_time, &mut rng);
        assert_eq!(emitter.len(), 1);

        // still live at the end of its duration (next spawn lands in the
        // same call, so expect the newcomer too)
        emitter.advance(sz(), spawn_time + STAR_DURATION_MS, &mut rng);
        assert_eq!(emitter.len(), 2);

        // first star gone just past its lifetime
        emitter.advance(sz(), spawn_time + STAR_DURATION_MS + 1.0, &mut rng);
        assert!(emitter
            .stars()
            .iter()
            .all(|s| s.created_at > spawn_time));
    }

    #[test]
    fn test_degenerate_tangent_falls_back_to_unit() {
        let s = ShootingStar {
            start: Point::new(50.0, 50.0),
            ctrl: Point::new(50.0, 50.0),
            end: Point::new(50.0, 50.0),
            length: 100.0,
            created_at: 0.0,
            duration_ms: STAR_DURATION_MS,
            alpha: 0.7,
        };
        let tangent = s.tangent_at(0.5);
        assert_eq!(tangent, Point::new(1.0, 0.0));
        let tail = s.tail_point(0.5);
        assert!(tail.x.is_finite() && tail.y.is_finite());
    }

    #[test]
    fn test_zero_duration_progress_is_complete() {
        let s = ShootingStar {
            start: Point::new(0.0, 0.0),
            ctrl: Point::new(1.0, 1.0),
            end: Point::new(2.0, 0.0),
            length: 10.0,
            created_at: 0.0,
            duration_ms: 0.0,
            alpha: 0.7,
        };
        assert_eq!(s.progress(123.0), 1.0);
    }

    #[test]
    fn test_tail_sits_one_length_behind_head() {
        let mut rng = Rng32::new(21);
        let s = star(&mut rng);
        let head = s.point_at(0.5);
        let tail = s.tail_point(0.5);
        assert!(((head - tail).length() - s.length).abs() < 1e-9);
    }
}
