use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::field::FieldConfig;
use crate::point::Point;
use crate::rules::{first_match, Classification, Confidence, Rule};
use crate::PathClassifier;

// Lane widths outward from the center of the formation.
const A_GAP_WIDTH: f32 = 30.0;
const B_GAP_WIDTH: f32 = 70.0;
const C_GAP_WIDTH: f32 = 120.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapSide {
    Strong,
    Weak,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapLane {
    A,
    B,
    C,
    D,
}

/// One of the eight rush lanes: {Strong, Weak} x {A, B, C, D}.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapLabel {
    pub side: GapSide,
    pub lane: GapLane,
}

impl fmt::Display for GapLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            GapSide::Strong => "Strong",
            GapSide::Weak => "Weak",
        };
        let lane = match self.lane {
            GapLane::A => "A",
            GapLane::B => "B",
            GapLane::C => "C",
            GapLane::D => "D",
        };

        write!(f, "{side} {lane}-gap")
    }
}

pub type GapClassification = Classification<GapLabel, Point>;

#[derive(Debug, Clone, Copy)]
pub struct GapContext {
    /// Signed endpoint offset from field center; positive is the strong side.
    pub center_offset: f32,
}

impl GapContext {
    #[inline]
    fn side(&self) -> GapSide {
        if self.center_offset >= 0.0 {
            GapSide::Strong
        } else {
            GapSide::Weak
        }
    }

    #[inline(always)]
    fn width(&self) -> f32 {
        self.center_offset.abs()
    }
}

static RULES: &[Rule<GapContext, GapLabel>] = &[
    Rule {
        applies: |c| c.width() < A_GAP_WIDTH,
        label: |c| GapLabel {
            side: c.side(),
            lane: GapLane::A,
        },
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.width() < B_GAP_WIDTH,
        label: |c| GapLabel {
            side: c.side(),
            lane: GapLane::B,
        },
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.width() < C_GAP_WIDTH,
        label: |c| GapLabel {
            side: c.side(),
            lane: GapLane::C,
        },
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |_| true,
        label: |c| GapLabel {
            side: c.side(),
            lane: GapLane::D,
        },
        confidence: Confidence::Medium,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct GapClassifier;

impl PathClassifier for GapClassifier {
    type Label = GapLabel;
    type Detail = Point;
    type Context = ();

    fn classify(&self, field: &FieldConfig, path: &[Point], _cx: &()) -> GapClassification {
        if path.len() < 2 {
            let endpoint = path
                .first()
                .copied()
                .unwrap_or_else(|| Point::new(field.center_x, field.line_of_scrimmage));
            let cx = GapContext {
                center_offset: field.offset_from_center(endpoint.x),
            };

            return Classification::new(
                GapLabel {
                    side: cx.side(),
                    lane: GapLane::A,
                },
                Confidence::Low,
                endpoint,
            );
        }

        let endpoint = path[path.len() - 1];
        let cx = GapContext {
            center_offset: field.offset_from_center(endpoint.x),
        };

        let (label, confidence) = first_match(RULES, &cx).unwrap_or((
            GapLabel {
                side: cx.side(),
                lane: GapLane::D,
            },
            Confidence::Medium,
        ));

        log::debug!("gap: {} ({:?})", label, confidence);

        Classification::new(label, confidence, endpoint)
    }
}
