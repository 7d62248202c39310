use super::{
    ease::Ease,
    props::{Prop, TargetId},
    stage::Stage,
};
use crate::error::MotionResult;

/// Smoothly drives one property toward a goal that can change at any time.
///
/// There is only ever one interpolation in flight: a new target restarts it from the current
/// value instead of queueing another one behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuickTo {
    prop: Prop,
    duration: f64,
    ease: Ease,
    from: f64,
    to: f64,
    current: f64,
    elapsed: f64,
}

/// Creates a smoothed setter for `prop` with the given duration and easing, resting at `initial`.
pub fn quick_to(prop: Prop, duration: f64, ease: Ease, initial: f64) -> QuickTo {
    QuickTo {
        prop,
        duration,
        ease,
        from: initial,
        to: initial,
        current: initial,
        elapsed: duration,
    }
}

impl QuickTo {
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Redirects the interpolation toward `target`, starting from wherever it is right now.
    pub fn set_target(&mut self, target: f64) {
        self.from = self.current;
        self.to = target;
        self.elapsed = 0.0;
        if self.duration <= 0.0 {
            self.current = target;
        }
    }

    /// Advances by `delta` time units and returns the new value.
    pub fn tick(&mut self, delta: f64) -> f64 {
        if !self.is_active() {
            return self.current;
        }
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration);
        let progress = self.ease.apply(self.elapsed / self.duration);
        self.current = if self.is_active() {
            self.from + (self.to - self.from) * progress
        } else {
            self.to
        };
        self.current
    }

    /// Writes the current value into `target` on the stage.
    pub fn apply(&self, stage: &mut impl Stage, target: TargetId) -> MotionResult<()> {
        let mut props = stage.props(target)?;
        props.set(self.prop, self.current);
        stage.apply(target, props)
    }

    /// Stops at the current value.
    pub fn kill(&mut self) {
        self.from = self.current;
        self.to = self.current;
        self.elapsed = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::stage::MemoryStage;

    fn setter() -> QuickTo {
        quick_to(Prop::RotationX, 0.5, Ease::Power2Out, 0.0)
    }

    #[test]
    fn idle_until_targeted() {
        let mut rot = setter();
        assert!(!rot.is_active());
        assert_eq!(rot.tick(0.1), 0.0);
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut rot = setter();
        rot.set_target(10.0);
        assert!(rot.is_active());
        let mut last = 0.0;
        for _ in 0..6 {
            let value = rot.tick(0.1);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(rot.value(), 10.0);
        assert!(!rot.is_active());
    }

    #[test]
    fn retargeting_continues_from_current_value() {
        let mut rot = setter();
        rot.set_target(10.0);
        let midway = rot.tick(0.25);
        assert!(midway > 0.0 && midway < 10.0);

        rot.set_target(-10.0);
        // the jump doesn't happen instantly, it starts from where we were
        assert_eq!(rot.value(), midway);
        let next = rot.tick(0.01);
        assert!(next < midway);
        rot.tick(0.5);
        assert_eq!(rot.value(), -10.0);
    }

    #[test]
    fn rapid_updates_coalesce() {
        let mut rot = setter();
        for target in [1.0, 2.0, 3.0, 4.0, 5.0] {
            rot.set_target(target);
        }
        // only the last goal is in flight, a single duration finishes it
        rot.tick(0.5);
        assert_eq!(rot.value(), 5.0);
        assert!(!rot.is_active());
    }

    #[test]
    fn zero_duration_jumps() {
        let mut rot = quick_to(Prop::Y, 0.0, Ease::Linear, 3.0);
        rot.set_target(7.0);
        assert_eq!(rot.value(), 7.0);
        assert_eq!(rot.tick(0.0), 7.0);
    }

    #[test]
    fn applies_to_stage() {
        let mut stage = MemoryStage::new([TargetId::TiltSurface]);
        let mut rot = setter();
        rot.set_target(4.0);
        rot.tick(1.0);
        rot.apply(&mut stage, TargetId::TiltSurface).unwrap();
        assert_eq!(stage.get(TargetId::TiltSurface).unwrap().rotation_x, 4.0);
        assert!(rot.apply(&mut stage, TargetId::Divider).is_err());
    }

    #[test]
    fn kill_freezes_in_place() {
        let mut rot = setter();
        rot.set_target(10.0);
        let value = rot.tick(0.1);
        rot.kill();
        assert!(!rot.is_active());
        assert_eq!(rot.tick(1.0), value);
    }
}
