use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("distance bands are inverted: short ends at {short_max} but deep starts at {deep_min}")]
    InvertedDistanceBands { short_max: f32, deep_min: f32 },

    #[error("break angle {0}\u{b0} is outside (0\u{b0}, 180\u{b0})")]
    BreakAngleOutOfRange(f32),

    #[error("{name} must be non-negative, got {value}")]
    NegativeTolerance { name: &'static str, value: f32 },
}
