//! Eased scrolling driven by wheel input, one step per animation frame.

pub const DEFAULT_LERP: f64 = 0.1;

const FRAME_MS: f64 = 1000.0 / 60.0;
const SNAP_DISTANCE: f64 = 0.5;
const LINE_HEIGHT: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Horizontal strips accept both wheel directions, whichever is larger.
    pub fn wheel_delta(self, dx: f64, dy: f64) -> f64 {
        match self {
            Axis::Vertical => dy,
            Axis::Horizontal => {
                if dx.abs() > dy.abs() {
                    dx
                } else {
                    dy
                }
            }
        }
    }
}

/// Converts a `WheelEvent` delta to pixels according to its `deltaMode`.
pub fn wheel_pixels(delta: f64, delta_mode: u32, page: f64) -> f64 {
    match delta_mode {
        1 => delta * LINE_HEIGHT,
        2 => delta * page,
        _ => delta,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inertia {
    current: f64,
    target: f64,
    limit: f64,
    lerp: f64,
    animating: bool,
}

impl Default for Inertia {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

impl Inertia {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp: lerp.clamp(0.0, 1.0),
            animating: false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Adds wheel input. While idle the controller first adopts the real
    /// scroll position, so scrollbars and keyboard scrolling are respected.
    pub fn push(&mut self, delta: f64, position: f64, limit: f64) {
        if !self.animating {
            self.current = position;
            self.target = position;
        }
        self.limit = limit.max(0.0);
        self.target = (self.target + delta).clamp(0.0, self.limit);
        self.animating = (self.target - self.current).abs() >= SNAP_DISTANCE;
        if !self.animating {
            self.current = self.target;
        }
    }

    /// Advances by `elapsed_ms`, returning the position to scroll to, or
    /// `None` when idle.
    pub fn step(&mut self, elapsed_ms: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        let frames = (elapsed_ms / FRAME_MS).max(0.0);
        let factor = 1.0 - (1.0 - self.lerp).powf(frames);
        self.current += (self.target - self.current) * factor;
        if (self.target - self.current).abs() < SNAP_DISTANCE {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }

    /// Drops pending motion, keeping the current position.
    pub fn stop(&mut self) {
        self.target = self.current;
        self.animating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_controller_does_nothing() {
        let mut inertia = Inertia::default();
        assert_eq!(inertia.step(FRAME_MS), None);
        assert!(!inertia.is_animating());
    }

    #[test]
    fn test_converges_to_target() {
        let mut inertia = Inertia::default();
        inertia.push(300.0, 0.0, 1000.0);
        assert!(inertia.is_animating());

        let first = inertia.step(FRAME_MS).unwrap();
        assert!((first - 30.0).abs() < 1e-9);

        let mut last = first;
        for _ in 0..200 {
            match inertia.step(FRAME_MS) {
                Some(pos) => {
                    assert!(pos >= last);
                    last = pos;
                }
                None => break,
            }
        }
        assert_eq!(last, 300.0);
        assert!(!inertia.is_animating());
    }

    #[test]
    fn test_frame_rate_compensation() {
        let mut fast = Inertia::default();
        fast.push(500.0, 0.0, 1000.0);
        fast.step(FRAME_MS);
        let fast_pos = fast.step(FRAME_MS).unwrap();

        let mut slow = Inertia::default();
        slow.push(500.0, 0.0, 1000.0);
        let slow_pos = slow.step(FRAME_MS * 2.0).unwrap();

        assert!((fast_pos - slow_pos).abs() < 1e-6);
    }

    #[test]
    fn test_target_clamped_to_limits() {
        let mut inertia = Inertia::default();
        inertia.push(5000.0, 100.0, 800.0);
        assert_eq!(inertia.target(), 800.0);
        inertia.push(-9000.0, 0.0, 800.0);
        assert_eq!(inertia.target(), 0.0);

        // nothing to scroll
        let mut flat = Inertia::default();
        flat.push(120.0, 0.0, -20.0);
        assert!(!flat.is_animating());
        assert_eq!(flat.step(FRAME_MS), None);
    }

    #[test]
    fn test_adopts_external_position_when_idle() {
        let mut inertia = Inertia::default();
        inertia.push(100.0, 400.0, 1000.0);
        assert_eq!(inertia.target(), 500.0);

        // while animating, further input accumulates on the target
        inertia.push(100.0, 0.0, 1000.0);
        assert_eq!(inertia.target(), 600.0);

        inertia.stop();
        assert!(!inertia.is_animating());
        assert_eq!(inertia.step(FRAME_MS), None);
    }

    #[test]
    fn test_wheel_delta_and_units() {
        assert_eq!(Axis::Vertical.wheel_delta(50.0, 10.0), 10.0);
        assert_eq!(Axis::Horizontal.wheel_delta(50.0, 10.0), 50.0);
        assert_eq!(Axis::Horizontal.wheel_delta(2.0, -40.0), -40.0);

        assert_eq!(wheel_pixels(3.0, 0, 900.0), 3.0);
        assert_eq!(wheel_pixels(3.0, 1, 900.0), 48.0);
        assert_eq!(wheel_pixels(1.0, 2, 900.0), 900.0);
    }
}
