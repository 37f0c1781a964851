use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

const CENTER_BAND: f32 = 50.0;
const SHORT_MAX: f32 = 80.0;
const DEEP_MIN: f32 = 150.0;
const BREAK_ANGLE: f32 = 30.0;
const INSIDE_TOLERANCE: f32 = 20.0;

/// Per-template field geometry plus the retunable classification knobs.
///
/// `center_x` and `line_of_scrimmage` belong to the diagram template and are
/// always supplied by the rendering layer; the rest default to the values the
/// rules were tuned against and only need touching when the diagram scale
/// changes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub center_x: f32,
    pub line_of_scrimmage: f32,
    pub center_band: f32,
    pub short_max: f32,
    pub deep_min: f32,
    pub break_angle: f32,
    pub inside_tolerance: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldSide {
    Left,
    Center,
    Right,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistanceBand {
    Short,
    Medium,
    Deep,
}

impl FieldConfig {
    pub fn new(center_x: f32, line_of_scrimmage: f32) -> Self {
        Self {
            center_x,
            line_of_scrimmage,
            center_band: CENTER_BAND,
            short_max: SHORT_MAX,
            deep_min: DEEP_MIN,
            break_angle: BREAK_ANGLE,
            inside_tolerance: INSIDE_TOLERANCE,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.short_max >= self.deep_min {
            return Err(Error::InvertedDistanceBands {
                short_max: self.short_max,
                deep_min: self.deep_min,
            });
        }

        if self.break_angle <= 0.0 || self.break_angle >= 180.0 {
            return Err(Error::BreakAngleOutOfRange(self.break_angle));
        }

        for (name, value) in [
            ("center_band", self.center_band),
            ("inside_tolerance", self.inside_tolerance),
            ("short_max", self.short_max),
        ] {
            if value < 0.0 {
                return Err(Error::NegativeTolerance { name, value });
            }
        }

        Ok(())
    }

    /// Which side of the field an x coordinate sits on, with a dead band of
    /// `center_band` units around the center.
    #[inline]
    pub fn side_of(&self, x: f32) -> FieldSide {
        if x < self.center_x - self.center_band {
            FieldSide::Left
        } else if x > self.center_x + self.center_band {
            FieldSide::Right
        } else {
            FieldSide::Center
        }
    }

    #[inline]
    pub fn band(&self, distance: f32) -> DistanceBand {
        if distance >= self.deep_min {
            DistanceBand::Deep
        } else if distance >= self.short_max {
            DistanceBand::Medium
        } else {
            DistanceBand::Short
        }
    }

    #[inline(always)]
    pub fn offset_from_center(&self, x: f32) -> f32 {
        x - self.center_x
    }
}
