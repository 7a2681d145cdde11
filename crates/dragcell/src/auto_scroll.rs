//! Edge auto-scroll while the overlay sits near a scrollable boundary.

use dragcell_core::geometry::Rect;
use dragcell_core::math::Vec2;

/// Distance scrolled per frame tick.
pub const AUTO_SCROLL_STEP: f32 = 4.0;

/// Scroll state of the host's scrollable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Current scroll position in content coordinates.
    pub offset: Vec2,
    /// Size of the visible area.
    pub size: Vec2,
    /// Total extent of the content.
    pub content_size: Vec2,
}

impl Viewport {
    pub fn new(offset: Vec2, size: Vec2, content_size: Vec2) -> Self {
        Self {
            offset,
            size,
            content_size,
        }
    }

    /// Visible area in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.size.x, self.size.y)
    }

    /// Maximum scroll offset for each axis.
    pub fn max_offset(&self) -> Vec2 {
        (self.content_size - self.size).max(Vec2::ZERO)
    }

    /// Clamp an offset to the scrollable range.
    pub fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        offset.clamp(Vec2::ZERO, self.max_offset())
    }
}

/// Direction the content scrolls toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Unit vector of the direction in content coordinates (y grows downward).
    pub fn unit(&self) -> Vec2 {
        match self {
            ScrollDirection::Up => Vec2::NEG_Y,
            ScrollDirection::Down => Vec2::Y,
            ScrollDirection::Left => Vec2::NEG_X,
            ScrollDirection::Right => Vec2::X,
        }
    }
}

/// Pick the direction to scroll for an overlay with unscaled `bounds`.
///
/// Edges are checked down, up, right, left and the first match wins, so
/// vertical scrolling takes precedence in a corner. An edge matches when the
/// overlay's center is within half its extent of the viewport edge and there
/// is still content beyond that edge.
pub fn scroll_direction(bounds: Rect, viewport: &Viewport) -> Option<ScrollDirection> {
    let center = bounds.center();
    let half = bounds.size() * 0.5;
    let visible_end = viewport.offset + viewport.size;

    if visible_end.y - center.y < half.y && visible_end.y < viewport.content_size.y {
        return Some(ScrollDirection::Down);
    }
    if center.y - viewport.offset.y < half.y && viewport.offset.y > 0.0 {
        return Some(ScrollDirection::Up);
    }
    if visible_end.x - center.x < half.x && visible_end.x < viewport.content_size.x {
        return Some(ScrollDirection::Right);
    }
    if center.x - viewport.offset.x < half.x && viewport.offset.x > 0.0 {
        return Some(ScrollDirection::Left);
    }
    None
}

/// One applied auto-scroll step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub direction: ScrollDirection,
    /// New scroll offset to hand to the host.
    pub offset: Vec2,
    /// Distance actually scrolled; the overlay and pointer move by the same amount.
    pub delta: Vec2,
}

/// Whether the edge scroller is ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeScrollState {
    #[default]
    Idle,
    Scrolling,
}

/// Frame-driven edge scroll loop owned by a drag session.
///
/// Armed when a drag begins and stopped on every path that ends it. It never
/// stops itself: a tick with no matching edge is simply a no-op.
#[derive(Debug, Clone)]
pub struct EdgeScroller {
    state: EdgeScrollState,
    step: f32,
}

impl Default for EdgeScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeScroller {
    pub fn new() -> Self {
        Self {
            state: EdgeScrollState::Idle,
            step: AUTO_SCROLL_STEP,
        }
    }

    pub fn state(&self) -> EdgeScrollState {
        self.state
    }

    pub fn is_scrolling(&self) -> bool {
        self.state == EdgeScrollState::Scrolling
    }

    /// Arm the loop. Re-arming replaces the previous loop rather than adding one.
    pub fn start(&mut self) {
        self.state = EdgeScrollState::Scrolling;
    }

    /// Stop the loop. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.state = EdgeScrollState::Idle;
    }

    /// Run one frame of the loop.
    ///
    /// Returns the step to apply, or `None` if the loop is idle, no edge
    /// matches, or the content cannot scroll any further that way.
    pub fn tick(&self, overlay_bounds: Rect, viewport: &Viewport) -> Option<ScrollStep> {
        if !self.is_scrolling() {
            return None;
        }
        let direction = scroll_direction(overlay_bounds, viewport)?;
        let offset = viewport.clamp_offset(viewport.offset + direction.unit() * self.step);
        let delta = offset - viewport.offset;
        if delta.dot(direction.unit()) <= 0.0 {
            return None;
        }
        Some(ScrollStep {
            direction,
            offset,
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(offset: Vec2) -> Viewport {
        Viewport::new(offset, Vec2::new(300.0, 300.0), Vec2::new(1000.0, 1000.0))
    }

    fn overlay_at(center: Vec2) -> Rect {
        Rect::from_center(center, Vec2::new(50.0, 50.0))
    }

    #[test]
    fn test_corner_prefers_down() {
        let direction = scroll_direction(overlay_at(Vec2::new(290.0, 290.0)), &viewport(Vec2::ZERO));
        assert_eq!(direction, Some(ScrollDirection::Down));
    }

    #[test]
    fn test_right_when_bottom_exhausted() {
        let viewport = Viewport::new(
            Vec2::new(0.0, 700.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(1000.0, 1000.0),
        );
        let direction = scroll_direction(overlay_at(Vec2::new(290.0, 990.0)), &viewport);
        assert_eq!(direction, Some(ScrollDirection::Right));
    }

    #[test]
    fn test_up_and_left_need_offset() {
        let top_left = overlay_at(Vec2::new(10.0, 10.0));
        assert_eq!(scroll_direction(top_left, &viewport(Vec2::ZERO)), None);

        let scrolled = viewport(Vec2::new(100.0, 100.0));
        assert_eq!(
            scroll_direction(overlay_at(Vec2::new(200.0, 110.0)), &scrolled),
            Some(ScrollDirection::Up)
        );
        assert_eq!(
            scroll_direction(overlay_at(Vec2::new(110.0, 250.0)), &scrolled),
            Some(ScrollDirection::Left)
        );
    }

    #[test]
    fn test_center_of_viewport_does_not_scroll() {
        assert_eq!(
            scroll_direction(overlay_at(Vec2::new(150.0, 150.0)), &viewport(Vec2::ZERO)),
            None
        );
    }

    #[test]
    fn test_tick_steps_and_clamps() {
        let mut scroller = EdgeScroller::new();
        let bounds = overlay_at(Vec2::new(150.0, 290.0));
        assert_eq!(scroller.tick(bounds, &viewport(Vec2::ZERO)), None);

        scroller.start();
        let step = scroller.tick(bounds, &viewport(Vec2::ZERO)).unwrap();
        assert_eq!(step.direction, ScrollDirection::Down);
        assert_eq!(step.offset, Vec2::new(0.0, 4.0));
        assert_eq!(step.delta, Vec2::new(0.0, 4.0));

        let near_end = Viewport::new(
            Vec2::new(0.0, 698.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(1000.0, 1000.0),
        );
        let step = scroller
            .tick(overlay_at(Vec2::new(150.0, 990.0)), &near_end)
            .unwrap();
        assert_eq!(step.offset, Vec2::new(0.0, 700.0));
        assert_eq!(step.delta, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scroller = EdgeScroller::new();
        scroller.start();
        scroller.stop();
        scroller.stop();
        assert_eq!(scroller.state(), EdgeScrollState::Idle);
    }
}
