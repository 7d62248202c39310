//! A small animation engine: easing curves, retargetable smoothing, one-shot timelines and a
//! context that owns them for the lifetime of a component.
//!
//! Nothing in here touches the DOM. Values are written to a [`Stage`], which the views read.

mod context;
mod ease;
mod props;
mod quick_to;
mod stage;
mod ticker;
mod timeline;

pub use context::{ContextStats, MotionContext};
pub use ease::Ease;
pub use props::{Prop, Props, TargetId};
pub use quick_to::{quick_to, QuickTo};
pub use stage::{MemoryStage, SignalStage, Stage};
pub use ticker::frame_delta;
pub use timeline::{Position, StepOptions, Timeline};
