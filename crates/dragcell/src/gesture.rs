//! Long-press recognition from raw pointer events.
//!
//! The recognizer turns `Down`/`Move`/`Up`/`Cancel` pointer events plus frame
//! time into the four gesture phases the drag state machine consumes. Hosts
//! that already have a gesture system can skip it and feed [`GestureEvent`]s
//! straight into [`DragController::handle_gesture`](crate::DragController::handle_gesture).

use dragcell_core::math::Vec2;

/// Phase of a raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Vec2) -> Self {
        Self { phase, position }
    }

    pub fn down(position: Vec2) -> Self {
        Self::new(PointerPhase::Down, position)
    }

    pub fn moved(position: Vec2) -> Self {
        Self::new(PointerPhase::Move, position)
    }

    pub fn up(position: Vec2) -> Self {
        Self::new(PointerPhase::Up, position)
    }

    pub fn cancel(position: Vec2) -> Self {
        Self::new(PointerPhase::Cancel, position)
    }
}

/// A recognized long-press gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The press was held long enough.
    Began(Vec2),
    /// The pointer moved while the gesture is recognized.
    Changed(Vec2),
    /// The pointer was released.
    Ended(Vec2),
    /// The gesture was cancelled by the system.
    Cancelled(Vec2),
}

impl GestureEvent {
    pub fn position(&self) -> Vec2 {
        match *self {
            GestureEvent::Began(p)
            | GestureEvent::Changed(p)
            | GestureEvent::Ended(p)
            | GestureEvent::Cancelled(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RecognizerState {
    Idle,
    /// Pointer is down, waiting for the hold duration.
    Possible { origin: Vec2, position: Vec2, held: f32 },
    /// Pointer moved too far before recognition; ignored until the next `Down`.
    Failed,
    Recognized { position: Vec2 },
}

/// Long-press gesture recognizer.
#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    min_duration: f32,
    allowable_movement: f32,
    state: RecognizerState,
    cooldown: f32,
}

impl LongPressRecognizer {
    pub fn new(min_duration: f32, allowable_movement: f32) -> Self {
        Self {
            min_duration,
            allowable_movement,
            state: RecognizerState::Idle,
            cooldown: 0.0,
        }
    }

    pub fn set_min_duration(&mut self, seconds: f32) {
        self.min_duration = seconds;
    }

    pub fn is_enabled(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self.state, RecognizerState::Recognized { .. })
    }

    pub fn is_tracking(&self) -> bool {
        matches!(
            self.state,
            RecognizerState::Possible { .. } | RecognizerState::Recognized { .. }
        )
    }

    /// Drop any tracked press and ignore input for `seconds`.
    pub fn disable_for(&mut self, seconds: f32) {
        self.state = RecognizerState::Idle;
        self.cooldown = self.cooldown.max(seconds);
    }

    /// Forget any tracked press.
    pub fn reset(&mut self) {
        self.state = RecognizerState::Idle;
    }

    /// Feed a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        if !self.is_enabled() {
            return None;
        }

        let position = event.position;
        match (self.state, event.phase) {
            (_, PointerPhase::Down) => {
                // A fresh press while recognized is a second touch; the
                // recognized gesture keeps tracking.
                if !self.is_recognized() {
                    self.state = RecognizerState::Possible {
                        origin: position,
                        position,
                        held: 0.0,
                    };
                }
                None
            }
            (RecognizerState::Possible { origin, held, .. }, PointerPhase::Move) => {
                if origin.distance(position) > self.allowable_movement {
                    self.state = RecognizerState::Failed;
                } else {
                    self.state = RecognizerState::Possible {
                        origin,
                        position,
                        held,
                    };
                }
                None
            }
            (
                RecognizerState::Possible { .. } | RecognizerState::Failed,
                PointerPhase::Up | PointerPhase::Cancel,
            ) => {
                self.state = RecognizerState::Idle;
                None
            }
            (RecognizerState::Recognized { .. }, PointerPhase::Move) => {
                self.state = RecognizerState::Recognized { position };
                Some(GestureEvent::Changed(position))
            }
            (RecognizerState::Recognized { .. }, PointerPhase::Up) => {
                self.state = RecognizerState::Idle;
                Some(GestureEvent::Ended(position))
            }
            (RecognizerState::Recognized { .. }, PointerPhase::Cancel) => {
                self.state = RecognizerState::Idle;
                Some(GestureEvent::Cancelled(position))
            }
            (RecognizerState::Idle | RecognizerState::Failed, _) => None,
        }
    }

    /// Advance time. Emits [`GestureEvent::Began`] once the hold duration is reached.
    pub fn update(&mut self, dt: f32) -> Option<GestureEvent> {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
            return None;
        }

        if let RecognizerState::Possible {
            origin,
            position,
            held,
        } = self.state
        {
            let held = held + dt;
            if held >= self.min_duration {
                self.state = RecognizerState::Recognized { position };
                return Some(GestureEvent::Began(position));
            }
            self.state = RecognizerState::Possible {
                origin,
                position,
                held,
            };
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> LongPressRecognizer {
        LongPressRecognizer::new(0.5, 10.0)
    }

    #[test]
    fn test_hold_recognizes() {
        let mut lp = recognizer();
        let p = Vec2::new(20.0, 20.0);
        assert_eq!(lp.handle_pointer(PointerEvent::down(p)), None);
        assert_eq!(lp.update(0.3), None);
        assert_eq!(lp.update(0.3), Some(GestureEvent::Began(p)));
        assert!(lp.is_recognized());

        let q = Vec2::new(80.0, 20.0);
        assert_eq!(lp.handle_pointer(PointerEvent::moved(q)), Some(GestureEvent::Changed(q)));
        assert_eq!(lp.handle_pointer(PointerEvent::up(q)), Some(GestureEvent::Ended(q)));
        assert!(!lp.is_tracking());
    }

    #[test]
    fn test_small_jitter_keeps_press() {
        let mut lp = recognizer();
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        lp.handle_pointer(PointerEvent::moved(Vec2::new(3.0, 4.0)));
        assert_eq!(lp.update(0.5), Some(GestureEvent::Began(Vec2::new(3.0, 4.0))));
    }

    #[test]
    fn test_moving_too_far_fails() {
        let mut lp = recognizer();
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        lp.handle_pointer(PointerEvent::moved(Vec2::new(30.0, 0.0)));
        assert_eq!(lp.update(1.0), None);
        assert_eq!(lp.handle_pointer(PointerEvent::up(Vec2::ZERO)), None);
    }

    #[test]
    fn test_release_before_threshold() {
        let mut lp = recognizer();
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        lp.update(0.2);
        assert_eq!(lp.handle_pointer(PointerEvent::up(Vec2::ZERO)), None);
        assert_eq!(lp.update(1.0), None);
    }

    #[test]
    fn test_cancel_after_recognition() {
        let mut lp = recognizer();
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        lp.update(0.5);
        assert_eq!(
            lp.handle_pointer(PointerEvent::cancel(Vec2::ONE)),
            Some(GestureEvent::Cancelled(Vec2::ONE))
        );
    }

    #[test]
    fn test_cooldown_ignores_input() {
        let mut lp = recognizer();
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        lp.disable_for(0.25);
        assert!(!lp.is_enabled());
        assert_eq!(lp.update(1.0), None);
        assert!(lp.is_enabled());

        // The press tracked before the cooldown was dropped.
        assert_eq!(lp.update(1.0), None);
        lp.handle_pointer(PointerEvent::down(Vec2::ZERO));
        assert_eq!(lp.update(0.5), Some(GestureEvent::Began(Vec2::ZERO)));
    }
}
