use crate::easing::EasingFunction;

/// How long the long-press recognizer stays disabled after a press that did
/// not start a drag (empty space or a rejected item), in seconds.
pub const REJECTED_PRESS_COOLDOWN: f32 = 0.25;

/// Configuration for the drag controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DragConfig {
    /// Hold time before a press turns into a drag, in seconds (default: 0.5).
    pub long_press_duration: f32,
    /// How far the pointer may wander before the long press fails (default: 10.0).
    pub allowable_movement: f32,
    /// Whether dragging is enabled at all (default: true).
    pub drag_enabled: bool,
    /// Overlay scale while dragging (default: 1.2).
    pub overlay_scale: f32,
    /// Overlay opacity while dragging (default: 1.0).
    pub overlay_alpha: f32,
    /// Duration of the lift animation, in seconds (default: 0.25).
    pub lift_duration: f32,
    /// Duration of the pointer-follow animation, in seconds (default: 0.25).
    pub follow_duration: f32,
    /// Duration of the settle animation after release, in seconds (default: 0.25).
    pub release_duration: f32,
    /// Easing for all overlay transitions (default: ease-in-out).
    pub easing: EasingFunction,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            long_press_duration: 0.5,
            allowable_movement: 10.0,
            drag_enabled: true,
            overlay_scale: 1.2,
            overlay_alpha: 1.0,
            lift_duration: 0.25,
            follow_duration: 0.25,
            release_duration: 0.25,
            easing: EasingFunction::EaseInOut,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the long-press hold time.
    pub fn long_press_duration(mut self, seconds: f32) -> Self {
        self.long_press_duration = seconds;
        self
    }

    /// Set the movement tolerance during the long press.
    pub fn allowable_movement(mut self, distance: f32) -> Self {
        self.allowable_movement = distance;
        self
    }

    /// Enable or disable dragging.
    pub fn drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    /// Set the overlay scale while dragging.
    pub fn overlay_scale(mut self, scale: f32) -> Self {
        self.overlay_scale = scale;
        self
    }

    /// Set the overlay opacity while dragging.
    pub fn overlay_alpha(mut self, alpha: f32) -> Self {
        self.overlay_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set lift, follow and release durations at once.
    pub fn animation_duration(mut self, seconds: f32) -> Self {
        self.lift_duration = seconds;
        self.follow_duration = seconds;
        self.release_duration = seconds;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.long_press_duration, 0.5);
        assert!(config.drag_enabled);
        assert_eq!(config.overlay_scale, 1.2);
        assert_eq!(config.overlay_alpha, 1.0);
    }

    #[test]
    fn test_builder() {
        let config = DragConfig::new()
            .long_press_duration(0.2)
            .overlay_alpha(1.5)
            .animation_duration(0.0);
        assert_eq!(config.long_press_duration, 0.2);
        assert_eq!(config.overlay_alpha, 1.0);
        assert_eq!(config.release_duration, 0.0);
    }
}
