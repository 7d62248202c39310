use log::debug;

use crate::error::{MotionError, MotionResult};
use crate::motion::{quick_to, Ease, Prop, QuickTo, Stage, TargetId};

/// Maximum tilt in degrees, reached with the pointer on a container edge.
pub const MAX_TILT: f64 = 10.0;
pub const TILT_DURATION: f64 = 0.5;
pub const TILT_EASE: Ease = Ease::Power2Out;

/// Bounding box of the container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position within the container, `[-1, 1]` on each axis while inside it.
///
/// Nothing is clamped: just outside the edge the offset runs a little past 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedOffset {
    pub x: f64,
    pub y: f64,
}

/// Rotation in degrees around the horizontal (`x`) and vertical (`y`) axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

pub fn normalized_offset(
    client_x: f64,
    client_y: f64,
    bounds: Bounds,
) -> MotionResult<NormalizedOffset> {
    if bounds.width == 0.0 || bounds.height == 0.0 {
        return Err(MotionError::ZeroArea {
            width: bounds.width,
            height: bounds.height,
        });
    }
    let fraction_x = (client_x - bounds.left) / bounds.width;
    let fraction_y = (client_y - bounds.top) / bounds.height;
    Ok(NormalizedOffset {
        x: (fraction_x - 0.5) * 2.0,
        y: (fraction_y - 0.5) * 2.0,
    })
}

/// Moving the pointer up tilts the top of the surface toward the viewer.
pub fn tilt_for(offset: NormalizedOffset) -> Rotation {
    Rotation {
        x: -offset.y * MAX_TILT,
        y: offset.x * MAX_TILT,
    }
}

/// Keeps the tilt surface rotated toward the pointer, smoothing every change.
#[derive(Clone, Debug)]
pub struct TiltController {
    rotation_x: QuickTo,
    rotation_y: QuickTo,
}

impl Default for TiltController {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltController {
    pub fn new() -> Self {
        Self {
            rotation_x: quick_to(Prop::RotationX, TILT_DURATION, TILT_EASE, 0.0),
            rotation_y: quick_to(Prop::RotationY, TILT_DURATION, TILT_EASE, 0.0),
        }
    }

    pub fn on_move(&mut self, client_x: f64, client_y: f64, bounds: Bounds) {
        match normalized_offset(client_x, client_y, bounds) {
            Ok(offset) => {
                let rotation = tilt_for(offset);
                self.rotation_x.set_target(rotation.x);
                self.rotation_y.set_target(rotation.y);
            }
            Err(e) => debug!("ignoring pointer move: {e}"),
        }
    }

    pub fn on_leave(&mut self) {
        self.rotation_x.set_target(0.0);
        self.rotation_y.set_target(0.0);
    }

    pub fn target(&self) -> Rotation {
        Rotation {
            x: self.rotation_x.target(),
            y: self.rotation_y.target(),
        }
    }

    pub fn current(&self) -> Rotation {
        Rotation {
            x: self.rotation_x.value(),
            y: self.rotation_y.value(),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.rotation_x.is_active() || self.rotation_y.is_active()
    }

    /// Advances both axes and writes the rotation to the tilt surface. Does nothing at rest.
    pub fn tick(&mut self, delta: f64, stage: &mut impl Stage) -> MotionResult<()> {
        if !self.is_moving() {
            return Ok(());
        }
        self.rotation_x.tick(delta);
        self.rotation_y.tick(delta);
        self.rotation_x.apply(stage, TargetId::TiltSurface)?;
        self.rotation_y.apply(stage, TargetId::TiltSurface)
    }

    /// Stops both axes where they are.
    pub fn kill(&mut self) {
        self.rotation_x.kill();
        self.rotation_y.kill();
    }
}
