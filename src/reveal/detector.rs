//! One-shot viewport visibility detection.

use std::cell::Cell;
use std::rc::Rc;

use egui::Rect;

/// Fraction of `target`'s area inside `viewport`, or `None` if they are
/// disjoint.
///
/// Edges that merely touch count as intersecting (ratio 0.0). A target with
/// no area reports 1.0 whenever it touches or lies inside the viewport.
pub fn intersection_ratio(target: Rect, viewport: Rect) -> Option<f32> {
    let x0 = target.min.x.max(viewport.min.x);
    let x1 = target.max.x.min(viewport.max.x);
    let y0 = target.min.y.max(viewport.min.y);
    let y1 = target.max.y.min(viewport.max.y);
    if x1 < x0 || y1 < y0 {
        return None;
    }
    let area = target.width().max(0.0) * target.height().max(0.0);
    if area <= 0.0 {
        return Some(1.0);
    }
    Some(((x1 - x0) * (y1 - y0) / area).clamp(0.0, 1.0))
}

/// Counts live observations. Shared by every detector a registry creates.
#[derive(Debug, Clone, Default)]
pub struct ObserverPool {
    live: Rc<Cell<usize>>,
}

impl ObserverPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// A running observation. Released exactly once, when dropped.
#[derive(Debug)]
pub struct Observation {
    live: Rc<Cell<usize>>,
}

impl Observation {
    fn acquire(pool: &ObserverPool) -> Self {
        pool.live.set(pool.live.get() + 1);
        Self {
            live: Rc::clone(&pool.live),
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Latches `true` the first time the target is at least `threshold` visible.
///
/// Observation starts at construction and stops for good on the first
/// positive result, or when the detector is dropped.
#[derive(Debug)]
pub struct VisibilityDetector {
    threshold: f32,
    observation: Option<Observation>,
    visible: bool,
}

impl VisibilityDetector {
    /// `threshold` is clamped to `[0, 1]`.
    pub fn new(pool: &ObserverPool, threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observation: Some(Observation::acquire(pool)),
            visible: false,
        }
    }

    /// Check the target against the viewport. After the first `true` this
    /// returns `true` without looking at the geometry.
    pub fn observe(&mut self, target: Rect, viewport: Rect) -> bool {
        if self.observation.is_none() {
            return self.visible;
        }
        let hit = intersection_ratio(target, viewport).is_some_and(|r| r >= self.threshold);
        if hit {
            self.visible = true;
            self.observation = None;
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    fn rect(y: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, y), vec2(800.0, h))
    }

    #[test]
    fn ratio_full_partial_none() {
        assert_eq!(intersection_ratio(rect(100.0, 100.0), viewport()), Some(1.0));
        let half = intersection_ratio(rect(550.0, 100.0), viewport()).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(intersection_ratio(rect(700.0, 100.0), viewport()), None);
    }

    #[test]
    fn ratio_touching_edge_is_zero() {
        assert_eq!(intersection_ratio(rect(600.0, 100.0), viewport()), Some(0.0));
    }

    #[test]
    fn zero_height_region_counts_as_visible() {
        assert_eq!(intersection_ratio(rect(300.0, 0.0), viewport()), Some(1.0));
        assert_eq!(intersection_ratio(rect(900.0, 0.0), viewport()), None);
    }

    #[test]
    fn threshold_gate() {
        let pool = ObserverPool::new();
        let mut d = VisibilityDetector::new(&pool, 0.1);
        // 5% visible
        assert!(!d.observe(rect(595.0, 100.0), viewport()));
        assert!(d.observation.is_some());
        // 20% visible
        assert!(d.observe(rect(580.0, 100.0), viewport()));
        assert!(d.observation.is_none());
    }

    #[test]
    fn zero_threshold_fires_on_any_contact() {
        let pool = ObserverPool::new();
        let mut d = VisibilityDetector::new(&pool, 0.0);
        assert!(d.observe(rect(600.0, 100.0), viewport()));
    }

    #[test]
    fn zero_height_with_threshold_fires() {
        let pool = ObserverPool::new();
        let mut d = VisibilityDetector::new(&pool, 0.1);
        assert!(d.observe(rect(10.0, 0.0), viewport()));
    }

    #[test]
    fn latched_after_first_hit() {
        let pool = ObserverPool::new();
        let mut d = VisibilityDetector::new(&pool, 0.1);
        assert!(d.observe(rect(0.0, 100.0), viewport()));
        assert!(d.observe(rect(5000.0, 100.0), viewport()));
        assert!(d.visible);
    }

    #[test]
    fn observation_released_on_reveal() {
        let pool = ObserverPool::new();
        let mut d = VisibilityDetector::new(&pool, 0.1);
        assert_eq!(pool.live(), 1);
        d.observe(rect(0.0, 100.0), viewport());
        assert_eq!(pool.live(), 0);
        drop(d);
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn observation_released_on_early_teardown() {
        let pool = ObserverPool::new();
        {
            let mut d = VisibilityDetector::new(&pool, 0.1);
            d.observe(rect(5000.0, 100.0), viewport());
            assert_eq!(pool.live(), 1);
        }
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn threshold_clamped() {
        let pool = ObserverPool::new();
        assert_eq!(VisibilityDetector::new(&pool, 3.0).threshold, 1.0);
        assert_eq!(VisibilityDetector::new(&pool, -1.0).threshold, 0.0);
    }
}
