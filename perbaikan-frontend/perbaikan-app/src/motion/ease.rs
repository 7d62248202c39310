/// Easing curves, named after the power family most web animation tools use.
///
/// `Power2` is cubic and `Power3` is quartic, so `Power2Out` is `1 - (1 - t)^3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2Out,
    #[default]
    Power3Out,
    Power2InOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` to eased progress. Input outside the range is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
