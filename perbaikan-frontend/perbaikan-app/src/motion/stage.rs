use std::collections::BTreeMap;

use leptos::prelude::*;

use super::props::{Props, TargetId};
use crate::error::{MotionError, MotionResult};

/// Where animated values end up. A stage only knows the targets that are currently mounted.
pub trait Stage {
    fn props(&self, target: TargetId) -> MotionResult<Props>;
    fn apply(&mut self, target: TargetId, props: Props) -> MotionResult<()>;

    fn contains(&self, target: TargetId) -> bool {
        self.props(target).is_ok()
    }
}

/// Plain in-memory stage, used to drive the engine without a DOM.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStage {
    targets: BTreeMap<TargetId, Props>,
}

impl MemoryStage {
    pub fn new(targets: impl IntoIterator<Item = TargetId>) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|target| (target, Props::default()))
                .collect(),
        }
    }

    pub fn get(&self, target: TargetId) -> Option<&Props> {
        self.targets.get(&target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TargetId, &Props)> {
        self.targets.iter()
    }
}

impl Stage for MemoryStage {
    fn props(&self, target: TargetId) -> MotionResult<Props> {
        self.targets
            .get(&target)
            .copied()
            .ok_or(MotionError::MissingTarget(target))
    }

    fn apply(&mut self, target: TargetId, props: Props) -> MotionResult<()> {
        let slot = self
            .targets
            .get_mut(&target)
            .ok_or(MotionError::MissingTarget(target))?;
        *slot = props;
        Ok(())
    }
}

/// Stage backed by one signal per element; views read the signals to build their inline styles.
#[derive(Clone, Copy, Debug)]
pub struct SignalStage {
    digits: [RwSignal<Props>; 3],
    divider: RwSignal<Props>,
    title_words: Signal<Vec<RwSignal<Props>>>,
    description: RwSignal<Props>,
    back_link: RwSignal<Props>,
    back_link_shown: Signal<bool>,
    tilt_surface: RwSignal<Props>,
}

impl SignalStage {
    pub fn new(word_count: usize, back_link_shown: Signal<bool>) -> Self {
        let words: Vec<_> = (0..word_count)
            .map(|_| RwSignal::new(Props::default()))
            .collect();
        Self {
            digits: std::array::from_fn(|_| RwSignal::new(Props::default())),
            divider: RwSignal::new(Props::default()),
            title_words: Signal::stored(words),
            description: RwSignal::new(Props::default()),
            back_link: RwSignal::new(Props::default()),
            back_link_shown,
            tilt_surface: RwSignal::new(Props::default()),
        }
    }

    fn signal(&self, target: TargetId) -> Option<RwSignal<Props>> {
        match target {
            TargetId::Digit(index) => self.digits.get(index).copied(),
            TargetId::Divider => Some(self.divider),
            TargetId::TitleWord(index) => self
                .title_words
                .try_with_untracked(|words| words.get(index).copied())
                .flatten(),
            TargetId::Description => Some(self.description),
            TargetId::BackLink => self
                .back_link_shown
                .try_get_untracked()
                .unwrap_or(false)
                .then_some(self.back_link),
            TargetId::TiltSurface => Some(self.tilt_surface),
        }
    }

    /// Reactive inline style for `target`, empty when the target doesn't exist.
    pub fn style(&self, target: TargetId) -> Signal<String> {
        let signal = self.signal_for_view(target);
        Signal::derive(move || {
            signal
                .map(|signal| signal.get().to_style())
                .unwrap_or_default()
        })
    }

    /// Transform-only style, for elements whose opacity is never animated.
    pub fn transform(&self, target: TargetId) -> Signal<String> {
        let signal = self.signal_for_view(target);
        Signal::derive(move || {
            signal
                .map(|signal| format!("transform: {};", signal.get().transform()))
                .unwrap_or_default()
        })
    }

    // views bind their style before the link is shown, so its signal is always handed out
    fn signal_for_view(&self, target: TargetId) -> Option<RwSignal<Props>> {
        match target {
            TargetId::BackLink => Some(self.back_link),
            target => self.signal(target),
        }
    }
}

impl Stage for SignalStage {
    fn props(&self, target: TargetId) -> MotionResult<Props> {
        self.signal(target)
            .and_then(|signal| signal.try_get_untracked())
            .ok_or(MotionError::MissingTarget(target))
    }

    fn apply(&mut self, target: TargetId, props: Props) -> MotionResult<()> {
        // writes always land so a hidden link can still be reverted
        let signal = self
            .signal_for_view(target)
            .ok_or(MotionError::MissingTarget(target))?;
        // try_set hands the value back when the signal was already disposed
        match signal.try_set(props) {
            None => Ok(()),
            Some(_) => Err(MotionError::MissingTarget(target)),
        }
    }
}
