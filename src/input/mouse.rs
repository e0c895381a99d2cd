// Mouse state tracker
//
// Keeps the pointer inside the engine's allowed region and reports position
// plus left/right button state. A move outside the region is not stored: the
// host pointer is warped back and the resulting motion event is reported
// instead.

/// Bounds the pointer may move in; 0 on any side means "no limit" there
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseRegion {
    pub min_x: u16,
    pub max_x: u16,
    pub min_y: u16,
    pub max_y: u16,
}

impl MouseRegion {
    /// Region without any limits
    pub const UNBOUNDED: MouseRegion = MouseRegion {
        min_x: 0,
        max_x: 0,
        min_y: 0,
        max_y: 0,
    };

    pub fn new(min_x: u16, max_x: u16, min_y: u16, max_y: u16) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Clamp a position into the region, each side independently
    pub fn clamp(&self, x: u16, y: u16) -> (u16, u16) {
        (
            clamp_axis(x, self.min_x, self.max_x),
            clamp_axis(y, self.min_y, self.max_y),
        )
    }
}

fn clamp_axis(mut value: u16, min: u16, max: u16) -> u16 {
    if min != 0 && value < min {
        value = min;
    }
    if max != 0 && value > max {
        value = max;
    }
    value
}

/// Snapshot forwarded to the engine's mouse handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseReport {
    pub x: u16,
    pub y: u16,
    pub left: bool,
    pub right: bool,
}

/// Which button changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Result of feeding a motion event to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Position accepted and stored; forward the report
    Report(MouseReport),
    /// Position was outside the region; warp the host pointer here
    Warp { x: u16, y: u16 },
}

/// Mouse position, buttons and bounding region
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    region: MouseRegion,
    state: MouseReport,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an absolute pointer move
    pub fn on_move(&mut self, x: u16, y: u16) -> MoveOutcome {
        let (cx, cy) = self.region.clamp(x, y);

        if (cx, cy) != (x, y) {
            return MoveOutcome::Warp { x: cx, y: cy };
        }

        self.state.x = x;
        self.state.y = y;
        MoveOutcome::Report(self.state)
    }

    /// Handle a button press or release
    pub fn on_button(&mut self, button: MouseButton, down: bool) -> MouseReport {
        match button {
            MouseButton::Left => self.state.left = down,
            MouseButton::Right => self.state.right = down,
        }
        self.state
    }

    /// Replace the bounding region; the stored position is left as is
    pub fn set_region(&mut self, region: MouseRegion) {
        self.region = region;
    }

    pub fn region(&self) -> MouseRegion {
        self.region
    }

    /// Current stored state
    pub fn state(&self) -> MouseReport {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_region_passes_through() {
        let mut tracker = MouseTracker::new();
        for &(x, y) in &[(0, 0), (5, 50), (319, 199), (u16::MAX, u16::MAX)] {
            assert_eq!(
                tracker.on_move(x, y),
                MoveOutcome::Report(MouseReport {
                    x,
                    y,
                    left: false,
                    right: false
                })
            );
        }
    }

    #[test]
    fn test_clamped_move_requests_warp_without_storing() {
        let mut tracker = MouseTracker::new();
        tracker.on_move(20, 20);
        tracker.set_region(MouseRegion::new(10, 100, 0, 0));

        assert_eq!(tracker.on_move(5, 50), MoveOutcome::Warp { x: 10, y: 50 });
        assert_eq!((tracker.state().x, tracker.state().y), (20, 20));

        assert_eq!(
            tracker.on_move(10, 50),
            MoveOutcome::Report(MouseReport {
                x: 10,
                y: 50,
                left: false,
                right: false
            })
        );
    }

    #[test]
    fn test_each_side_limited_independently() {
        let region = MouseRegion::new(0, 100, 50, 0);
        assert_eq!(region.clamp(0, 0), (0, 50));
        assert_eq!(region.clamp(200, 1000), (100, 1000));
        assert_eq!(region.clamp(60, 60), (60, 60));
    }

    #[test]
    fn test_inverted_region_settles_on_max() {
        let region = MouseRegion::new(100, 10, 0, 0);
        assert_eq!(region.clamp(50, 0), (10, 0));
        assert_eq!(region.clamp(10, 0), (10, 0));
    }

    #[test]
    fn test_buttons_update_report() {
        let mut tracker = MouseTracker::new();
        tracker.on_move(30, 40);

        let report = tracker.on_button(MouseButton::Left, true);
        assert_eq!(
            report,
            MouseReport {
                x: 30,
                y: 40,
                left: true,
                right: false
            }
        );

        let report = tracker.on_button(MouseButton::Right, true);
        assert!(report.left && report.right);

        let report = tracker.on_button(MouseButton::Left, false);
        assert!(!report.left && report.right);
    }

    #[test]
    fn test_buttons_survive_moves() {
        let mut tracker = MouseTracker::new();
        tracker.on_button(MouseButton::Right, true);
        match tracker.on_move(1, 2) {
            MoveOutcome::Report(report) => assert!(report.right),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_set_region_does_not_move_stored_position() {
        let mut tracker = MouseTracker::new();
        tracker.on_move(300, 190);
        tracker.set_region(MouseRegion::new(0, 100, 0, 100));
        assert_eq!((tracker.state().x, tracker.state().y), (300, 190));
        assert_eq!(tracker.region(), MouseRegion::new(0, 100, 0, 100));
    }
}
