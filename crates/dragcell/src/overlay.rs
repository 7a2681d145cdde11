//! The floating proxy that follows the pointer during a drag.
//!
//! The overlay owns the host's opaque visual (a snapshot of the dragged item)
//! together with the transform the host should draw it with. Transitions are
//! driven by [`Overlay::update`] from the controller's frame tick; starting a
//! new transition replaces the running one, continuing from the current values.

use dragcell_core::geometry::Rect;
use dragcell_core::math::Vec2;

use crate::easing::EasingFunction;

/// Which transition is animating the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Lifting out of the source cell toward the pointer.
    Lift,
    /// Following the pointer.
    Follow,
    /// Settling back into the item's final cell.
    Release,
}

/// Target values for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPose {
    pub center: Vec2,
    pub scale: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone)]
struct OverlayTransition {
    kind: TransitionKind,
    from: OverlayPose,
    to: OverlayPose,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl OverlayTransition {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }

    fn sample(&self) -> OverlayPose {
        let t = self.easing.apply(self.progress());
        OverlayPose {
            center: self.from.center.lerp(self.to.center, t),
            scale: self.from.scale + (self.to.scale - self.from.scale) * t,
            alpha: self.from.alpha + (self.to.alpha - self.from.alpha) * t,
        }
    }
}

/// Visual proxy of the dragged item.
#[derive(Debug)]
pub struct Overlay<V> {
    visual: V,
    size: Vec2,
    pose: OverlayPose,
    transition: Option<OverlayTransition>,
}

impl<V> Overlay<V> {
    /// Place `visual` exactly over `frame`, unscaled and opaque.
    pub fn new(visual: V, frame: Rect) -> Self {
        Self {
            visual,
            size: frame.size(),
            pose: OverlayPose {
                center: frame.center(),
                scale: 1.0,
                alpha: 1.0,
            },
            transition: None,
        }
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn into_visual(self) -> V {
        self.visual
    }

    pub fn center(&self) -> Vec2 {
        self.pose.center
    }

    /// Unscaled size, as captured from the source cell.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.pose.scale
    }

    pub fn alpha(&self) -> f32 {
        self.pose.alpha
    }

    pub fn pose(&self) -> OverlayPose {
        self.pose
    }

    /// Unscaled bounds around the current center.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pose.center, self.size)
    }

    /// On-screen rectangle including the current scale.
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.pose.center, self.size * self.pose.scale)
    }

    /// Center the overlay is heading to: the running transition's target, or
    /// the current center when at rest.
    pub fn target_center(&self) -> Vec2 {
        self.transition.as_ref().map_or(self.pose.center, |t| t.to.center)
    }

    /// Unscaled bounds around [`target_center`](Self::target_center).
    pub fn target_bounds(&self) -> Rect {
        Rect::from_center(self.target_center(), self.size)
    }

    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.transition.as_ref().map(|t| t.kind)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Start a transition toward `to`, replacing any running one.
    pub fn animate(
        &mut self,
        kind: TransitionKind,
        to: OverlayPose,
        duration: f32,
        easing: EasingFunction,
    ) {
        self.transition = Some(OverlayTransition {
            kind,
            from: self.pose,
            to,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    /// Animate only the center, keeping the current (or targeted) scale and alpha.
    pub fn animate_center(
        &mut self,
        kind: TransitionKind,
        center: Vec2,
        duration: f32,
        easing: EasingFunction,
    ) {
        let mut to = self.transition.as_ref().map_or(self.pose, |t| t.to);
        to.center = center;
        self.animate(kind, to, duration, easing);
    }

    /// Shift the overlay and any running transition by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.pose.center += delta;
        if let Some(transition) = &mut self.transition {
            transition.from.center += delta;
            transition.to.center += delta;
        }
    }

    /// Advance the running transition.
    ///
    /// Returns the kind of the transition that finished during this update.
    pub fn update(&mut self, dt: f32) -> Option<TransitionKind> {
        let transition = self.transition.as_mut()?;
        transition.elapsed += dt;
        self.pose = transition.sample();
        if transition.is_done() {
            let kind = transition.kind;
            self.transition = None;
            Some(kind)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> Overlay<&'static str> {
        Overlay::new("snapshot", Rect::new(0.0, 0.0, 100.0, 50.0))
    }

    #[test]
    fn test_starts_over_source_frame() {
        let overlay = overlay();
        assert_eq!(overlay.center(), Vec2::new(50.0, 25.0));
        assert_eq!(overlay.frame(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_transition_reaches_target() {
        let mut overlay = overlay();
        overlay.animate(
            TransitionKind::Lift,
            OverlayPose {
                center: Vec2::new(150.0, 25.0),
                scale: 1.2,
                alpha: 0.8,
            },
            0.25,
            EasingFunction::Linear,
        );

        assert_eq!(overlay.update(0.125), None);
        assert!((overlay.center().x - 100.0).abs() < 1e-3);

        assert_eq!(overlay.update(0.2), Some(TransitionKind::Lift));
        assert_eq!(overlay.center(), Vec2::new(150.0, 25.0));
        assert!((overlay.scale() - 1.2).abs() < 1e-6);
        assert!((overlay.frame().width - 120.0).abs() < 1e-3);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn test_last_writer_wins() {
        let mut overlay = overlay();
        overlay.animate(
            TransitionKind::Lift,
            OverlayPose {
                center: Vec2::new(150.0, 25.0),
                scale: 1.2,
                alpha: 1.0,
            },
            0.25,
            EasingFunction::Linear,
        );
        overlay.animate_center(
            TransitionKind::Follow,
            Vec2::new(50.0, 300.0),
            0.25,
            EasingFunction::Linear,
        );

        assert_eq!(overlay.transition_kind(), Some(TransitionKind::Follow));
        overlay.update(1.0);
        assert_eq!(overlay.center(), Vec2::new(50.0, 300.0));
        // Follow keeps the lift's target scale.
        assert!((overlay.scale() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_translate_moves_transition() {
        let mut overlay = overlay();
        overlay.animate_center(
            TransitionKind::Follow,
            Vec2::new(50.0, 100.0),
            0.25,
            EasingFunction::Linear,
        );
        overlay.translate(Vec2::new(0.0, 4.0));
        assert_eq!(overlay.center(), Vec2::new(50.0, 29.0));
        overlay.update(0.25);
        assert_eq!(overlay.center(), Vec2::new(50.0, 104.0));
    }

    #[test]
    fn test_target_center_leads_pose() {
        let mut overlay = overlay();
        assert_eq!(overlay.target_center(), overlay.center());

        overlay.animate_center(
            TransitionKind::Follow,
            Vec2::new(250.0, 25.0),
            0.25,
            EasingFunction::Linear,
        );
        assert_eq!(overlay.center(), Vec2::new(50.0, 25.0));
        assert_eq!(overlay.target_center(), Vec2::new(250.0, 25.0));
        assert_eq!(overlay.target_bounds(), Rect::new(200.0, 0.0, 100.0, 50.0));

        overlay.translate(Vec2::new(4.0, 0.0));
        assert_eq!(overlay.target_center(), Vec2::new(254.0, 25.0));
    }

    #[test]
    fn test_zero_duration_completes_on_next_update() {
        let mut overlay = overlay();
        overlay.animate_center(
            TransitionKind::Release,
            Vec2::new(10.0, 10.0),
            0.0,
            EasingFunction::EaseInOut,
        );
        assert_eq!(overlay.update(0.0), Some(TransitionKind::Release));
        assert_eq!(overlay.center(), Vec2::new(10.0, 10.0));
    }
}
