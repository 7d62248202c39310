use log::debug;

use crate::motion::{
    ContextStats, Ease, MotionContext, Position, Prop, StepOptions, Stage, TargetId, Timeline,
};

const DIGITS: [TargetId; 3] = [TargetId::Digit(0), TargetId::Digit(1), TargetId::Digit(2)];

const DIGIT_HIDDEN: [(Prop, f64); 3] = [(Prop::Opacity, 0.0), (Prop::Scale, 0.92), (Prop::Y, 32.0)];
const DIGIT_SHOWN: [(Prop, f64); 3] = [(Prop::Opacity, 1.0), (Prop::Scale, 1.0), (Prop::Y, 0.0)];

fn hidden(y: f64) -> [(Prop, f64); 2] {
    [(Prop::Opacity, 0.0), (Prop::Y, y)]
}

const SHOWN: [(Prop, f64); 2] = [(Prop::Opacity, 1.0), (Prop::Y, 0.0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    Idle,
    Playing,
    Settled,
}

/// Puts every element into its pre-entrance state.
pub fn apply_initial_state(
    ctx: &mut MotionContext,
    stage: &mut impl Stage,
    word_count: usize,
    show_back_link: bool,
) {
    ctx.set(stage, DIGITS, &DIGIT_HIDDEN);
    // the divider is anchored on its left edge in markup
    ctx.set(stage, [TargetId::Divider], &[(Prop::ScaleX, 0.0)]);
    ctx.set(stage, (0..word_count).map(TargetId::TitleWord), &hidden(16.0));
    ctx.set(stage, [TargetId::Description], &hidden(12.0));
    if show_back_link {
        ctx.set(stage, [TargetId::BackLink], &hidden(8.0));
    }
}

/// The entrance sequence: digits pop in one after another, the divider draws itself, then the
/// text rises into place.
pub fn entrance_timeline(word_count: usize, show_back_link: bool) -> Timeline {
    let timeline = Timeline::new(Ease::Power3Out)
        .to(
            [DIGITS[0]],
            &DIGIT_SHOWN,
            StepOptions::duration(0.6),
            Position::End,
        )
        .to(
            [DIGITS[1]],
            &DIGIT_SHOWN,
            StepOptions::duration(0.5),
            Position::Relative(-0.35),
        )
        .to(
            [DIGITS[2]],
            &DIGIT_SHOWN,
            StepOptions::duration(0.5),
            Position::Relative(-0.35),
        )
        .to(
            [TargetId::Divider],
            &[(Prop::ScaleX, 1.0)],
            StepOptions::duration(0.8).ease(Ease::Power2InOut),
            Position::Relative(-0.2),
        )
        .to(
            (0..word_count).map(TargetId::TitleWord),
            &SHOWN,
            StepOptions::duration(0.5)
                .stagger(0.05)
                .ease(Ease::Power2Out),
            Position::At(0.5),
        )
        .to(
            [TargetId::Description],
            &SHOWN,
            StepOptions::duration(0.5),
            Position::At(0.85),
        );
    if show_back_link {
        timeline.to(
            [TargetId::BackLink],
            &SHOWN,
            StepOptions::duration(0.45),
            Position::At(1.0),
        )
    } else {
        timeline
    }
}

/// Runs the entrance once per lifetime. Restarting tears the previous run down first.
#[derive(Debug)]
pub struct EntranceController {
    ctx: MotionContext,
    word_count: usize,
}

impl EntranceController {
    pub fn new(word_count: usize) -> Self {
        Self {
            ctx: MotionContext::new(),
            word_count,
        }
    }

    pub fn phase(&self) -> EntrancePhase {
        if !self.ctx.is_active() {
            EntrancePhase::Idle
        } else if self.ctx.is_settled() {
            EntrancePhase::Settled
        } else {
            EntrancePhase::Playing
        }
    }

    /// Hides everything synchronously, then queues the timeline.
    pub fn start(&mut self, stage: &mut impl Stage, show_back_link: bool) {
        self.stop(stage);
        debug!("starting entrance, back link shown: {show_back_link}");
        self.ctx.setup();
        apply_initial_state(&mut self.ctx, stage, self.word_count, show_back_link);
        let timeline = entrance_timeline(self.word_count, show_back_link);
        self.ctx.add(&*stage, timeline);
    }

    pub fn tick(&mut self, delta: f64, stage: &mut impl Stage) {
        if self.phase() == EntrancePhase::Playing {
            self.ctx.tick(delta, stage);
        }
    }

    /// Reverts everything the current run touched and goes back to idle.
    pub fn stop(&mut self, stage: &mut impl Stage) {
        self.ctx.teardown(stage);
    }

    pub fn stats(&self) -> ContextStats {
        self.ctx.stats()
    }
}
