use std::collections::BTreeMap;

use log::{debug, trace};

use super::{
    props::{Prop, Props, TargetId},
    stage::Stage,
    timeline::Timeline,
};

/// Counters describing the lifetime of a [`MotionContext`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContextStats {
    pub setups: usize,
    pub teardowns: usize,
    pub active_timelines: usize,
}

/// Owns every animation started within one lifetime and can undo all of it at once.
///
/// `setup` opens the scope, `set` and `add` record the original props of every target they
/// touch, and `teardown` drops the timelines and restores those props.
#[derive(Debug, Default)]
pub struct MotionContext {
    snapshot: BTreeMap<TargetId, Props>,
    timelines: Vec<Timeline>,
    active: bool,
    setups: usize,
    teardowns: usize,
}

impl MotionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn setup(&mut self) {
        if self.active {
            debug!("motion context set up twice, ignoring");
            return;
        }
        self.active = true;
        self.setups += 1;
    }

    fn record(&mut self, target: TargetId, stage: &impl Stage) -> bool {
        if self.snapshot.contains_key(&target) {
            return true;
        }
        match stage.props(target) {
            Ok(props) => {
                self.snapshot.insert(target, props);
                true
            }
            Err(e) => {
                trace!("{e}");
                false
            }
        }
    }

    /// Applies `values` immediately. Targets that aren't mounted are skipped.
    pub fn set(
        &mut self,
        stage: &mut impl Stage,
        targets: impl IntoIterator<Item = TargetId>,
        values: &[(Prop, f64)],
    ) {
        if !self.active {
            return;
        }
        for target in targets {
            if !self.record(target, &*stage) {
                continue;
            }
            let result = stage
                .props(target)
                .and_then(|props| stage.apply(target, props.with(values)));
            if let Err(e) = result {
                debug!("skipping set: {e}");
            }
        }
    }

    /// Takes ownership of `timeline` and starts playing it on the next tick.
    pub fn add(&mut self, stage: &impl Stage, timeline: Timeline) {
        if !self.active {
            return;
        }
        let targets: Vec<_> = timeline.targets().collect();
        for target in targets {
            self.record(target, stage);
        }
        self.timelines.push(timeline);
    }

    /// Advances every owned timeline by `delta`.
    pub fn tick(&mut self, delta: f64, stage: &mut impl Stage) {
        for timeline in self.timelines.iter_mut().filter(|t| !t.is_complete()) {
            timeline.advance(delta, stage);
        }
    }

    /// True once every timeline has finished.
    pub fn is_settled(&self) -> bool {
        self.timelines.iter().all(Timeline::is_complete)
    }

    /// Drops every timeline and restores every touched target. Safe to call more than once.
    pub fn teardown(&mut self, stage: &mut impl Stage) {
        if !self.active {
            return;
        }
        self.timelines.clear();
        for (target, props) in std::mem::take(&mut self.snapshot) {
            // the element may already be gone, nothing to restore then
            if let Err(e) = stage.apply(target, props) {
                trace!("not reverting: {e}");
            }
        }
        self.active = false;
        self.teardowns += 1;
    }

    pub fn stats(&self) -> ContextStats {
        ContextStats {
            setups: self.setups,
            teardowns: self.teardowns,
            active_timelines: self.timelines.len(),
        }
    }
}
