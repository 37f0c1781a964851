use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::characteristics::{Curvature, Direction, EndDirection, PathCharacteristics};
use crate::field::{DistanceBand, FieldConfig};
use crate::point::{Alignment, Point};
use crate::rules::{first_match, Classification, Confidence, Rule};
use crate::PathClassifier;

// Rule-level thresholds, in diagram units.
const GO_MAX_DRIFT: f32 = 40.0;
const SLANT_MIN_RISE: f32 = 20.0;
const CURL_VERTICAL_WINDOW: f32 = 20.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteLabel {
    #[serde(rename = "Go/Streak/9")]
    Go,
    Post,
    Corner,
    Seam,
    Out,
    #[serde(rename = "In/Dig")]
    Dig,
    Curl,
    Comeback,
    Slant,
    Hitch,
    Flat,
    Swing,
    Wheel,
    #[serde(rename = "Shallow Cross")]
    ShallowCross,
    #[serde(rename = "Deep Cross")]
    DeepCross,
    #[serde(rename = "Draw Route (Custom)")]
    Custom,
}

impl RouteLabel {
    pub const ALL: [RouteLabel; 16] = [
        RouteLabel::Go,
        RouteLabel::Post,
        RouteLabel::Corner,
        RouteLabel::Seam,
        RouteLabel::Out,
        RouteLabel::Dig,
        RouteLabel::Curl,
        RouteLabel::Comeback,
        RouteLabel::Slant,
        RouteLabel::Hitch,
        RouteLabel::Flat,
        RouteLabel::Swing,
        RouteLabel::Wheel,
        RouteLabel::ShallowCross,
        RouteLabel::DeepCross,
        RouteLabel::Custom,
    ];
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteLabel::Go => "Go/Streak/9",
            RouteLabel::Post => "Post",
            RouteLabel::Corner => "Corner",
            RouteLabel::Seam => "Seam",
            RouteLabel::Out => "Out",
            RouteLabel::Dig => "In/Dig",
            RouteLabel::Curl => "Curl",
            RouteLabel::Comeback => "Comeback",
            RouteLabel::Slant => "Slant",
            RouteLabel::Hitch => "Hitch",
            RouteLabel::Flat => "Flat",
            RouteLabel::Swing => "Swing",
            RouteLabel::Wheel => "Wheel",
            RouteLabel::ShallowCross => "Shallow Cross",
            RouteLabel::DeepCross => "Deep Cross",
            RouteLabel::Custom => "Draw Route (Custom)",
        };

        f.write_str(name)
    }
}

pub type RouteClassification = Classification<RouteLabel, PathCharacteristics>;

#[derive(Debug, Clone, Copy)]
pub struct RouteContext {
    pub characteristics: PathCharacteristics,
    pub band: DistanceBand,
}

impl RouteContext {
    #[inline(always)]
    fn short(&self) -> bool {
        self.band == DistanceBand::Short
    }

    #[inline(always)]
    fn medium(&self) -> bool {
        self.band == DistanceBand::Medium
    }

    #[inline(always)]
    fn deep(&self) -> bool {
        self.band == DistanceBand::Deep
    }

    #[inline(always)]
    fn breaks(&self) -> bool {
        self.characteristics.curvature == Curvature::Breaking
    }

    #[inline(always)]
    fn curved(&self) -> bool {
        self.characteristics.curvature == Curvature::Curved
    }

    #[inline(always)]
    fn upfield(&self) -> bool {
        self.characteristics.direction == Direction::Upfield
    }

    #[inline(always)]
    fn lateral(&self) -> bool {
        self.characteristics.direction == Direction::Lateral
    }

    #[inline(always)]
    fn ends(&self, end: EndDirection) -> bool {
        self.characteristics.end_direction == end
    }

    #[inline(always)]
    fn inside(&self) -> bool {
        self.characteristics.moving_inside
    }

    #[inline(always)]
    fn drift(&self) -> f32 {
        self.characteristics.net_horizontal.abs()
    }

    /// Back toward the ball: ends behind the start, or cuts hard while
    /// gaining almost nothing vertically.
    #[inline]
    fn hooks_back(&self) -> bool {
        self.ends(EndDirection::Back)
            || (self.breaks()
                && self.characteristics.net_vertical > -CURL_VERTICAL_WINDOW
                && self.characteristics.net_vertical < CURL_VERTICAL_WINDOW)
    }
}

// Priority order is part of the product contract; do not reorder. The
// Comeback/Curl pair is one vocabulary rule split over two rows, and the
// final row is the guaranteed fallback.
static RULES: &[Rule<RouteContext, RouteLabel>] = &[
    Rule {
        applies: |c| c.deep() && c.upfield() && !c.breaks() && c.drift() < GO_MAX_DRIFT,
        label: |_| RouteLabel::Go,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.deep() && c.breaks() && c.ends(EndDirection::Inside),
        label: |_| RouteLabel::Post,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.deep() && c.breaks() && c.ends(EndDirection::Outside),
        label: |_| RouteLabel::Corner,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| !c.short() && c.upfield() && !c.breaks(),
        label: |_| RouteLabel::Seam,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| {
            c.medium()
                && c.breaks()
                && c.ends(EndDirection::Outside)
                && c.characteristics.direction != Direction::Downfield
        },
        label: |_| RouteLabel::Out,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.medium() && c.breaks() && c.ends(EndDirection::Inside),
        label: |_| RouteLabel::Dig,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.hooks_back() && c.medium(),
        label: |_| RouteLabel::Comeback,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.hooks_back(),
        label: |_| RouteLabel::Curl,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| {
            !c.deep()
                && c.inside()
                && !c.breaks()
                && c.characteristics.net_vertical > SLANT_MIN_RISE
        },
        label: |_| RouteLabel::Slant,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.short() && c.upfield() && !c.breaks(),
        label: |_| RouteLabel::Hitch,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.short() && c.lateral(),
        label: |_| RouteLabel::Flat,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.short() && c.curved(),
        label: |_| RouteLabel::Swing,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.medium() && c.breaks() && c.ends(EndDirection::Vertical),
        label: |_| RouteLabel::Wheel,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.medium() && c.lateral() && c.inside(),
        label: |_| RouteLabel::ShallowCross,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.deep() && c.lateral(),
        label: |_| RouteLabel::DeepCross,
        confidence: Confidence::Low,
    },
    Rule {
        applies: |_| true,
        label: |_| RouteLabel::Custom,
        confidence: Confidence::Low,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteClassifier;

impl PathClassifier for RouteClassifier {
    type Label = RouteLabel;
    type Detail = PathCharacteristics;
    type Context = Alignment;

    fn classify(
        &self,
        field: &FieldConfig,
        path: &[Point],
        cx: &Alignment,
    ) -> RouteClassification {
        if path.len() < 2 {
            return Classification::new(
                RouteLabel::Custom,
                Confidence::Low,
                PathCharacteristics::neutral(),
            );
        }

        let characteristics = PathCharacteristics::extract(field, path, cx);
        let cx_rules = RouteContext {
            characteristics,
            band: field.band(characteristics.total_distance),
        };

        let (label, confidence) = first_match(RULES, &cx_rules)
            .unwrap_or((RouteLabel::Custom, Confidence::Low));

        log::debug!(
            "route: {:?} ({:?}), {:?} side, band {:?}",
            label,
            confidence,
            cx.side,
            cx_rules.band
        );

        Classification::new(label, confidence, characteristics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PlayerSide;

    fn field() -> FieldConfig {
        FieldConfig::new(400.0, 300.0)
    }

    fn classify(path: &[Point], x: f32) -> RouteClassification {
        RouteClassifier.classify(&field(), path, &Alignment::new(PlayerSide::Offense, x))
    }

    #[test]
    fn straight_deep_vertical_is_go() {
        let path = [Point::new(0.0, 0.0), Point::new(0.0, -200.0)];
        let got = classify(&path, 0.0);

        assert_eq!(got.label, RouteLabel::Go);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn deep_break_inside_is_post() {
        let path = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 140.0),
            Point::new(150.0, 140.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Post);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn deep_break_outside_is_corner() {
        let path = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 140.0),
            Point::new(50.0, 140.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Corner);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn medium_straight_vertical_is_seam() {
        let path = [Point::new(100.0, 300.0), Point::new(100.0, 180.0)];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Seam);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn medium_break_mirrors_by_field_side() {
        // left-side player breaking toward the middle: In/Dig
        let left_in = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 220.0),
            Point::new(140.0, 220.0),
        ];
        // right-side player breaking toward the middle: still In/Dig
        let right_in = [
            Point::new(600.0, 300.0),
            Point::new(600.0, 220.0),
            Point::new(560.0, 220.0),
        ];
        // left-side player breaking toward the sideline: Out
        let left_out = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 220.0),
            Point::new(60.0, 220.0),
        ];

        assert_eq!(classify(&left_in, 100.0).label, RouteLabel::Dig);
        assert_eq!(classify(&right_in, 600.0).label, RouteLabel::Dig);
        assert_eq!(classify(&left_out, 100.0).label, RouteLabel::Out);
        assert_eq!(classify(&left_out, 100.0).confidence, Confidence::High);
    }

    #[test]
    fn medium_hook_back_is_comeback() {
        let path = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 240.0),
            Point::new(100.0, 310.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Comeback);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn short_hook_back_is_curl() {
        let path = [
            Point::new(100.0, 300.0),
            Point::new(100.0, 270.0),
            Point::new(100.0, 305.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Curl);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn short_diagonal_inside_is_slant() {
        let path = [Point::new(100.0, 300.0), Point::new(140.0, 260.0)];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Slant);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn short_vertical_stem_is_hitch() {
        let path = [Point::new(100.0, 300.0), Point::new(100.0, 250.0)];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Hitch);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn short_horizontal_is_flat() {
        let path = [Point::new(0.0, 0.0), Point::new(70.0, 0.0)];
        let got = classify(&path, 0.0);

        assert_eq!(got.label, RouteLabel::Flat);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn out_then_up_is_wheel() {
        let path = [
            Point::new(100.0, 300.0),
            Point::new(160.0, 300.0),
            Point::new(160.0, 220.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Wheel);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn medium_drag_inside_is_shallow_cross() {
        let path = [Point::new(100.0, 300.0), Point::new(230.0, 285.0)];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::ShallowCross);
        assert_eq!(got.confidence, Confidence::Medium);
    }

    #[test]
    fn deep_drag_is_deep_cross() {
        let path = [Point::new(100.0, 300.0), Point::new(420.0, 200.0)];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::DeepCross);
        assert_eq!(got.confidence, Confidence::Low);
    }

    #[test]
    fn unmatched_shape_falls_back_to_custom() {
        // sharp cut into a long vertical finish: too much climb for the
        // curl window, deep band, vertical ending
        let path = [
            Point::new(100.0, 300.0),
            Point::new(160.0, 220.0),
            Point::new(160.0, 80.0),
        ];
        let got = classify(&path, 100.0);

        assert_eq!(got.label, RouteLabel::Custom);
        assert_eq!(got.confidence, Confidence::Low);
    }

    #[test]
    fn degenerate_path_defaults_to_custom_low() {
        for path in [&[][..], &[Point::new(10.0, 10.0)][..]] {
            let got = classify(path, 100.0);

            assert_eq!(got.label, RouteLabel::Custom);
            assert_eq!(got.confidence, Confidence::Low);
            assert_eq!(got.detail, PathCharacteristics::neutral());
        }
    }

    #[test]
    fn labels_serialize_to_vocabulary_strings() {
        let json = serde_json::to_string(&RouteLabel::Go).unwrap();
        assert_eq!(json, r#""Go/Streak/9""#);

        let json = serde_json::to_string(&RouteLabel::Custom).unwrap();
        assert_eq!(json, r#""Draw Route (Custom)""#);

        let back: RouteLabel = serde_json::from_str(r#""In/Dig""#).unwrap();
        assert_eq!(back, RouteLabel::Dig);
    }
}
