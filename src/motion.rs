use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::field::FieldConfig;
use crate::point::Point;
use crate::rules::{first_match, Classification, Confidence, Rule};
use crate::PathClassifier;

// Sweep = horizontal ground covered from the pre-snap alignment;
// depth = vertical ground covered along the drawn path.
const JET_MIN_SWEEP: f32 = 100.0;
const JET_BACKFIELD_DEPTH: f32 = 20.0;
const ORBIT_MIN_POINTS: usize = 3;
const ORBIT_MIN_DEPTH: f32 = 30.0;
const ORBIT_MIN_SWEEP: f32 = 60.0;
const ACROSS_MIN_SWEEP: f32 = 80.0;
const ACROSS_MAX_DEPTH: f32 = 30.0;
const RETURN_MIN_SWEEP: f32 = 40.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionLabel {
    Jet,
    Orbit,
    Across,
    Return,
    Shift,
}

impl fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MotionLabel::Jet => "Jet",
            MotionLabel::Orbit => "Orbit",
            MotionLabel::Across => "Across",
            MotionLabel::Return => "Return",
            MotionLabel::Shift => "Shift",
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MotionDirection {
    TowardCenter,
    AwayFromCenter,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MotionSweep {
    pub endpoint: Point,
    pub direction: MotionDirection,
}

pub type MotionClassification = Classification<MotionLabel, MotionSweep>;

#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub sweep: f32,
    pub depth: f32,
    pub points: usize,
    pub direction: MotionDirection,
    /// Endpoint still behind the line of scrimmage by a full step.
    pub backfield: bool,
}

impl MotionContext {
    #[inline(always)]
    fn toward_center(&self) -> bool {
        self.direction == MotionDirection::TowardCenter
    }
}

static RULES: &[Rule<MotionContext, MotionLabel>] = &[
    Rule {
        applies: |c| c.sweep > JET_MIN_SWEEP && c.toward_center() && c.backfield,
        label: |_| MotionLabel::Jet,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| {
            c.points > ORBIT_MIN_POINTS && c.depth > ORBIT_MIN_DEPTH && c.sweep > ORBIT_MIN_SWEEP
        },
        label: |_| MotionLabel::Orbit,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.sweep > ACROSS_MIN_SWEEP && c.depth < ACROSS_MAX_DEPTH,
        label: |_| MotionLabel::Across,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| !c.toward_center() && c.sweep > RETURN_MIN_SWEEP,
        label: |_| MotionLabel::Return,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |_| true,
        label: |_| MotionLabel::Shift,
        confidence: Confidence::Low,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct MotionClassifier;

impl MotionClassifier {
    fn direction_of(field: &FieldConfig, start_x: f32, endpoint: &Point) -> MotionDirection {
        let start_offset = field.offset_from_center(start_x).abs();
        let end_offset = field.offset_from_center(endpoint.x).abs();

        if end_offset < start_offset {
            MotionDirection::TowardCenter
        } else {
            MotionDirection::AwayFromCenter
        }
    }
}

impl PathClassifier for MotionClassifier {
    type Label = MotionLabel;
    type Detail = MotionSweep;
    type Context = f32;

    /// `cx` is the player's pre-snap x coordinate, where the motion starts.
    fn classify(&self, field: &FieldConfig, path: &[Point], cx: &f32) -> MotionClassification {
        let start_x = *cx;

        if path.len() < 2 {
            let endpoint = path
                .first()
                .copied()
                .unwrap_or_else(|| Point::new(start_x, field.line_of_scrimmage));

            return Classification::new(
                MotionLabel::Shift,
                Confidence::Low,
                MotionSweep {
                    endpoint,
                    direction: Self::direction_of(field, start_x, &endpoint),
                },
            );
        }

        let endpoint = path[path.len() - 1];
        let direction = Self::direction_of(field, start_x, &endpoint);
        let ctx = MotionContext {
            sweep: (endpoint.x - start_x).abs(),
            depth: (endpoint.y - path[0].y).abs(),
            points: path.len(),
            direction,
            backfield: endpoint.y > field.line_of_scrimmage + JET_BACKFIELD_DEPTH,
        };

        let (label, confidence) =
            first_match(RULES, &ctx).unwrap_or((MotionLabel::Shift, Confidence::Low));

        log::debug!(
            "motion: {:?} ({:?}), sweep {:.0} {:?}",
            label,
            confidence,
            ctx.sweep,
            direction
        );

        Classification::new(label, confidence, MotionSweep { endpoint, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(path: &[Point], start_x: f32) -> MotionClassification {
        MotionClassifier.classify(&FieldConfig::new(400.0, 300.0), path, &start_x)
    }

    #[test]
    fn backfield_sweep_to_center_is_jet() {
        let path = [
            Point::new(150.0, 340.0),
            Point::new(200.0, 342.0),
            Point::new(260.0, 344.0),
            Point::new(320.0, 345.0),
        ];
        let got = classify(&path, 150.0);

        assert_eq!(got.label, MotionLabel::Jet);
        assert_eq!(got.confidence, Confidence::High);
        assert_eq!(got.detail.direction, MotionDirection::TowardCenter);
    }

    #[test]
    fn looping_path_is_orbit() {
        let path = [
            Point::new(300.0, 340.0),
            Point::new(330.0, 350.0),
            Point::new(360.0, 365.0),
            Point::new(380.0, 380.0),
        ];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, MotionLabel::Orbit);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn level_crossing_is_across() {
        let path = [
            Point::new(600.0, 340.0),
            Point::new(450.0, 330.0),
            Point::new(310.0, 315.0),
        ];
        let got = classify(&path, 600.0);

        assert_eq!(got.label, MotionLabel::Across);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn drift_to_the_sideline_is_return() {
        let path = [Point::new(300.0, 340.0), Point::new(250.0, 345.0)];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, MotionLabel::Return);
        assert_eq!(got.detail.direction, MotionDirection::AwayFromCenter);
    }

    #[test]
    fn small_adjustment_is_shift() {
        let path = [Point::new(300.0, 340.0), Point::new(310.0, 330.0)];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, MotionLabel::Shift);
        assert_eq!(got.confidence, Confidence::Low);
    }

    #[test]
    fn degenerate_path_is_shift_low() {
        let empty = classify(&[], 300.0);

        assert_eq!(empty.label, MotionLabel::Shift);
        assert_eq!(empty.confidence, Confidence::Low);
        assert_eq!(empty.detail.endpoint, Point::new(300.0, 300.0));
        assert_eq!(empty.detail.direction, MotionDirection::AwayFromCenter);

        let sole = classify(&[Point::new(200.0, 340.0)], 300.0);
        assert_eq!(sole.label, MotionLabel::Shift);
        assert_eq!(sole.detail.endpoint, Point::new(200.0, 340.0));
    }
}
