use std::fmt::Write;

/// Every element on the page the motion engine can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetId {
    /// The glyphs of "404", left to right.
    Digit(usize),
    Divider,
    TitleWord(usize),
    Description,
    BackLink,
    TiltSurface,
}

/// A single animatable property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    /// Vertical offset in px.
    Y,
    Scale,
    ScaleX,
    /// Degrees around the horizontal axis.
    RotationX,
    /// Degrees around the vertical axis.
    RotationY,
}

/// Visual state of one element. `Props::default()` is the identity: fully visible, untransformed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Props {
    pub opacity: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Props {
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::Y => self.y,
            Prop::Scale => self.scale,
            Prop::ScaleX => self.scale_x,
            Prop::RotationX => self.rotation_x,
            Prop::RotationY => self.rotation_y,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::Y => self.y = value,
            Prop::Scale => self.scale = value,
            Prop::ScaleX => self.scale_x = value,
            Prop::RotationX => self.rotation_x = value,
            Prop::RotationY => self.rotation_y = value,
        }
    }

    /// Returns a copy with every `(prop, value)` pair applied.
    pub fn with(mut self, values: &[(Prop, f64)]) -> Self {
        for (prop, value) in values {
            self.set(*prop, *value);
        }
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Props::default()
    }

    /// The transform part of the inline style, `none` for the identity transform.
    pub fn transform(&self) -> String {
        let mut transform = String::new();
        // writing into a String can't fail
        if self.y != 0.0 {
            let _ = write!(transform, "translateY({}px) ", self.y);
        }
        if self.rotation_x != 0.0 {
            let _ = write!(transform, "rotateX({}deg) ", self.rotation_x);
        }
        if self.rotation_y != 0.0 {
            let _ = write!(transform, "rotateY({}deg) ", self.rotation_y);
        }
        if self.scale != 1.0 {
            let _ = write!(transform, "scale({}) ", self.scale);
        }
        if self.scale_x != 1.0 {
            let _ = write!(transform, "scaleX({}) ", self.scale_x);
        }
        let transform = transform.trim_end();
        if transform.is_empty() {
            "none".to_string()
        } else {
            transform.to_string()
        }
    }

    /// Inline CSS for the element.
    pub fn to_style(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_renders_untransformed() {
        let props = Props::default();
        assert!(props.is_identity());
        assert_eq!(props.to_style(), "opacity: 1; transform: none;");
    }

    #[test]
    fn style_contains_each_changed_prop() {
        let props = Props::default().with(&[
            (Prop::Opacity, 0.0),
            (Prop::Scale, 0.92),
            (Prop::Y, 32.0),
        ]);
        assert_eq!(
            props.to_style(),
            "opacity: 0; transform: translateY(32px) scale(0.92);"
        );

        let tilted = Props::default().with(&[(Prop::RotationX, 10.0), (Prop::RotationY, -4.5)]);
        assert_eq!(tilted.transform(), "rotateX(10deg) rotateY(-4.5deg)");
    }

    #[test]
    fn get_reads_back_set() {
        let mut props = Props::default();
        props.set(Prop::ScaleX, 0.0);
        assert_eq!(props.get(Prop::ScaleX), 0.0);
        assert_eq!(props.transform(), "scaleX(0)");
    }
}
