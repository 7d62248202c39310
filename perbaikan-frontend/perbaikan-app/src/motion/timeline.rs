use log::debug;

use super::{
    ease::Ease,
    props::{Prop, TargetId},
    stage::Stage,
};
use crate::error::MotionError;

/// Where a step is placed on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after everything added so far.
    End,
    /// Offset from the current end, `Relative(-0.35)` starts 0.35 before it.
    Relative(f64),
    /// Fixed time from the start of the timeline.
    At(f64),
}

/// Options for one `to` step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOptions {
    pub duration: f64,
    /// Falls back to the timeline's default ease.
    pub ease: Option<Ease>,
    /// Delay between consecutive targets of the same step.
    pub stagger: f64,
}

impl StepOptions {
    pub fn duration(duration: f64) -> Self {
        Self {
            duration,
            ease: None,
            stagger: 0.0,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Tween {
    target: TargetId,
    start: f64,
    duration: f64,
    ease: Ease,
    to: Vec<(Prop, f64)>,
    // recorded from the stage the first time the tween renders
    from: Option<Vec<(Prop, f64)>>,
    skipped: bool,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn progress(&self, time: f64) -> f64 {
        if self.duration <= 0.0 || time >= self.end() {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }

    fn render(&mut self, time: f64, stage: &mut impl Stage) -> Result<(), MotionError> {
        let mut props = stage.props(self.target)?;
        let eased = self.ease.apply(self.progress(time));
        let from = self.from.get_or_insert_with(|| {
            self.to
                .iter()
                .map(|(prop, _)| (*prop, props.get(*prop)))
                .collect()
        });
        for ((prop, start), (_, end)) in from.iter().zip(&self.to) {
            // land exactly on the end value, interpolation can be off by an ulp
            let value = if eased >= 1.0 {
                *end
            } else {
                start + (end - start) * eased
            };
            props.set(*prop, value);
        }
        stage.apply(self.target, props)
    }
}

/// A one-shot, forward-only sequence of tweens.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    default_ease: Ease,
    tweens: Vec<Tween>,
    end: f64,
    time: f64,
}

impl Timeline {
    pub fn new(default_ease: Ease) -> Self {
        Self {
            default_ease,
            tweens: Vec::new(),
            end: 0.0,
            time: 0.0,
        }
    }

    /// Schedules `targets` to animate toward `to`.
    pub fn to(
        mut self,
        targets: impl IntoIterator<Item = TargetId>,
        to: &[(Prop, f64)],
        options: StepOptions,
        position: Position,
    ) -> Self {
        let start = match position {
            Position::End => self.end,
            Position::Relative(offset) => (self.end + offset).max(0.0),
            Position::At(time) => time.max(0.0),
        };
        let ease = options.ease.unwrap_or(self.default_ease);
        for (index, target) in targets.into_iter().enumerate() {
            let tween = Tween {
                target,
                start: start + index as f64 * options.stagger,
                duration: options.duration.max(0.0),
                ease,
                to: to.to_vec(),
                from: None,
                skipped: false,
            };
            self.end = self.end.max(tween.end());
            self.tweens.push(tween);
        }
        self
    }

    /// Total length of the timeline.
    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.time >= self.end
    }

    /// When `target` starts animating, if it's on the timeline.
    pub fn start_of(&self, target: TargetId) -> Option<f64> {
        self.tweens
            .iter()
            .filter(|tween| tween.target == target)
            .map(|tween| tween.start)
            .reduce(f64::min)
    }

    pub fn targets(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.tweens.iter().map(|tween| tween.target)
    }

    /// Moves the playhead forward by `delta` and renders every tween that has started.
    pub fn advance(&mut self, delta: f64, stage: &mut impl Stage) {
        self.time = (self.time + delta.max(0.0)).min(self.end);
        let time = self.time;
        for tween in self
            .tweens
            .iter_mut()
            .filter(|tween| !tween.skipped && tween.start <= time)
        {
            if let Err(e) = tween.render(time, stage) {
                debug!("skipping tween for {:?}: {e}", tween.target);
                tween.skipped = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{props::Props, stage::MemoryStage};

    fn fade_in() -> [(Prop, f64); 1] {
        [(Prop::Opacity, 1.0)]
    }

    fn hidden_stage(targets: &[TargetId]) -> MemoryStage {
        let mut stage = MemoryStage::new(targets.iter().copied());
        for target in targets {
            stage
                .apply(*target, Props::default().with(&[(Prop::Opacity, 0.0)]))
                .unwrap();
        }
        stage
    }

    #[test]
    fn relative_positions_overlap_previous_step() {
        let timeline = Timeline::new(Ease::Linear)
            .to([TargetId::Digit(0)], &fade_in(), StepOptions::duration(0.6), Position::End)
            .to(
                [TargetId::Digit(1)],
                &fade_in(),
                StepOptions::duration(0.5),
                Position::Relative(-0.35),
            );
        assert_eq!(timeline.start_of(TargetId::Digit(0)), Some(0.0));
        assert!((timeline.start_of(TargetId::Digit(1)).unwrap() - 0.25).abs() < 1e-9);
        assert!((timeline.duration() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn stagger_spreads_targets() {
        let words = (0..3).map(TargetId::TitleWord);
        let timeline = Timeline::new(Ease::Linear).to(
            words,
            &fade_in(),
            StepOptions::duration(0.5).stagger(0.05),
            Position::At(0.5),
        );
        assert_eq!(timeline.start_of(TargetId::TitleWord(0)), Some(0.5));
        assert!((timeline.start_of(TargetId::TitleWord(2)).unwrap() - 0.6).abs() < 1e-9);
        assert!((timeline.duration() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn renders_from_recorded_values() {
        let mut stage = hidden_stage(&[TargetId::Description]);
        let mut timeline = Timeline::new(Ease::Linear).to(
            [TargetId::Description],
            &fade_in(),
            StepOptions::duration(1.0),
            Position::End,
        );
        timeline.advance(0.5, &mut stage);
        let opacity = stage.get(TargetId::Description).unwrap().opacity;
        assert!((opacity - 0.5).abs() < 1e-9);
        timeline.advance(10.0, &mut stage);
        assert!(timeline.is_complete());
        assert_eq!(stage.get(TargetId::Description).unwrap().opacity, 1.0);
    }

    #[test]
    fn later_steps_wait_for_their_start() {
        let mut stage = hidden_stage(&[TargetId::Digit(0), TargetId::Description]);
        let mut timeline = Timeline::new(Ease::Power3Out)
            .to([TargetId::Digit(0)], &fade_in(), StepOptions::duration(0.6), Position::End)
            .to(
                [TargetId::Description],
                &fade_in(),
                StepOptions::duration(0.5),
                Position::At(0.85),
            );
        timeline.advance(0.5, &mut stage);
        assert!(stage.get(TargetId::Digit(0)).unwrap().opacity > 0.0);
        assert_eq!(stage.get(TargetId::Description).unwrap().opacity, 0.0);
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut stage = hidden_stage(&[TargetId::Description]);
        let mut timeline = Timeline::new(Ease::Linear)
            .to([TargetId::BackLink], &fade_in(), StepOptions::duration(0.2), Position::End)
            .to(
                [TargetId::Description],
                &fade_in(),
                StepOptions::duration(0.2),
                Position::End,
            );
        timeline.advance(1.0, &mut stage);
        assert!(timeline.is_complete());
        assert_eq!(stage.get(TargetId::Description).unwrap().opacity, 1.0);
        assert!(stage.get(TargetId::BackLink).is_none());
    }

    #[test]
    fn empty_timeline_is_complete() {
        let mut stage = MemoryStage::default();
        let mut timeline = Timeline::new(Ease::Linear);
        timeline.advance(0.016, &mut stage);
        assert!(timeline.is_complete());
        assert_eq!(timeline.duration(), 0.0);
    }
}
