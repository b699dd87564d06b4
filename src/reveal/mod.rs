//! Scroll-triggered reveal animation.
//!
//! A region starts suppressed (transparent, pushed down by `REVEAL_OFFSET`)
//! and eases into place the first time enough of it is on screen. The
//! transition is one-shot per region instance: scrolling away never
//! re-suppresses it.
//!
//! - `VisibilityDetector`: latches the first "on screen" signal and holds an
//!   `Observation` until then.
//! - `Reveal`: detector + delay + the time the reveal started.
//! - `RevealRegistry`: keyed per-frame store; regions that stop being drawn
//!   are torn down and their observations released.

mod detector;

pub use detector::{intersection_ratio, Observation, ObserverPool, VisibilityDetector};

use std::collections::HashMap;

use egui::{Id, Rect};

/// Length of the reveal transition, in seconds.
pub const REVEAL_DURATION: f64 = 1.0;

/// Vertical offset of a suppressed region, in points.
pub const REVEAL_OFFSET: f32 = 48.0;

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Visual state of a region at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl RevealStyle {
    pub const SUPPRESSED: Self = Self {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Reveal state of one region instance.
#[derive(Debug)]
pub struct Reveal {
    detector: VisibilityDetector,
    delay: f64,
    revealed_at: Option<f64>,
}

impl Reveal {
    /// `delay` is in seconds; negative values are treated as zero.
    pub fn new(detector: VisibilityDetector, delay: f64) -> Self {
        Self {
            detector,
            delay: delay.max(0.0),
            revealed_at: None,
        }
    }

    pub fn has_been_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Feed a raw visibility signal observed at time `now`.
    ///
    /// Only the first `true` has any effect.
    pub fn update(&mut self, visible: bool, now: f64) {
        if visible && !self.has_been_revealed() {
            self.revealed_at = Some(now);
        }
    }

    /// Run the detector against the region's current bounds, then latch.
    pub fn observe(&mut self, target: Rect, viewport: Rect, now: f64) -> bool {
        let visible = self.detector.observe(target, viewport);
        self.update(visible, now);
        visible
    }

    /// Eased transition progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        ease_out_cubic(self.linear_progress(now)) as f32
    }

    pub fn style(&self, now: f64) -> RevealStyle {
        let p = self.progress(now);
        RevealStyle {
            opacity: p,
            offset_y: REVEAL_OFFSET * (1.0 - p),
        }
    }

    /// True between the reveal and the end of its transition.
    pub fn is_animating(&self, now: f64) -> bool {
        self.revealed_at.is_some() && self.linear_progress(now) < 1.0
    }

    fn set_delay(&mut self, delay: f64) {
        if self.revealed_at.is_none() {
            self.delay = delay.max(0.0);
        }
    }

    fn linear_progress(&self, now: f64) -> f64 {
        match self.revealed_at {
            None => 0.0,
            Some(start) => ((now - start - self.delay) / REVEAL_DURATION).clamp(0.0, 1.0),
        }
    }
}

struct Slot {
    reveal: Reveal,
    last_frame: u64,
}

/// Reveal states keyed by region id, with mount/teardown tracked per frame.
pub struct RevealRegistry {
    regions: HashMap<Id, Slot>,
    pool: ObserverPool,
    threshold: f32,
    frame: u64,
}

impl RevealRegistry {
    pub fn new(threshold: f32) -> Self {
        Self {
            regions: HashMap::new(),
            pool: ObserverPool::new(),
            threshold,
            frame: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// The region `id`, mounting it if it was not drawn last frame.
    pub fn region(&mut self, id: Id, delay: f64) -> &mut Reveal {
        let frame = self.frame;
        let pool = &self.pool;
        let threshold = self.threshold;
        let slot = self.regions.entry(id).or_insert_with(|| Slot {
            reveal: Reveal::new(VisibilityDetector::new(pool, threshold), delay),
            last_frame: frame,
        });
        slot.last_frame = frame;
        slot.reveal.set_delay(delay);
        &mut slot.reveal
    }

    /// Tear down regions that were not drawn during this frame.
    pub fn end_frame(&mut self) {
        let frame = self.frame;
        let before = self.regions.len();
        self.regions.retain(|_, slot| slot.last_frame == frame);
        let removed = before - self.regions.len();
        if removed > 0 {
            log::debug!(
                "reveal: tore down {removed} region(s), {} still observing",
                self.active_observations()
            );
        }
    }

    /// Whether any mounted region is mid-transition.
    pub fn any_animating(&self, now: f64) -> bool {
        self.regions.values().any(|s| s.reveal.is_animating(now))
    }

    /// Observations currently held by mounted, not-yet-revealed regions.
    pub fn active_observations(&self) -> usize {
        self.pool.live()
    }
}
