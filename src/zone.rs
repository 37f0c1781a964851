use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::field::FieldConfig;
use crate::point::Point;
use crate::rules::{first_match, Classification, Confidence, Rule};
use crate::PathClassifier;

// Drop depths (diagram units behind the defender's alignment).
const DEEP_DROP: f32 = 120.0;
const QUARTER_DROP: f32 = 60.0;
const HOOK_DROP: f32 = 20.0;

// Width cuts: deep-middle landing spots split thirds from halves, and a
// shallow defender this far outside is working the flat.
const DEEP_MIDDLE_HALF_WIDTH: f32 = 80.0;
const FLAT_MIN_WIDTH: f32 = 150.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneLabel {
    #[serde(rename = "Deep Third")]
    DeepThird,
    #[serde(rename = "Deep Half")]
    DeepHalf,
    Quarter,
    #[serde(rename = "Hook/Curl")]
    HookCurl,
    Flat,
    Man,
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZoneLabel::DeepThird => "Deep Third",
            ZoneLabel::DeepHalf => "Deep Half",
            ZoneLabel::Quarter => "Quarter",
            ZoneLabel::HookCurl => "Hook/Curl",
            ZoneLabel::Flat => "Flat",
            ZoneLabel::Man => "Man",
        })
    }
}

/// Endpoint rides along so the canvas can draw the zone radius around it.
pub type ZoneClassification = Classification<ZoneLabel, Point>;

#[derive(Debug, Clone, Copy)]
pub struct ZoneContext {
    pub drop: f32,
    pub center_offset: f32,
}

static RULES: &[Rule<ZoneContext, ZoneLabel>] = &[
    Rule {
        applies: |c| c.drop > DEEP_DROP && c.center_offset.abs() <= DEEP_MIDDLE_HALF_WIDTH,
        label: |_| ZoneLabel::DeepThird,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.drop > DEEP_DROP,
        label: |_| ZoneLabel::DeepHalf,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.drop > QUARTER_DROP,
        label: |_| ZoneLabel::Quarter,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.drop > HOOK_DROP,
        label: |_| ZoneLabel::HookCurl,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |c| c.center_offset.abs() > FLAT_MIN_WIDTH,
        label: |_| ZoneLabel::Flat,
        confidence: Confidence::High,
    },
    Rule {
        applies: |_| true,
        label: |_| ZoneLabel::Man,
        confidence: Confidence::Low,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneClassifier;

impl PathClassifier for ZoneClassifier {
    type Label = ZoneLabel;
    type Detail = Point;
    type Context = f32;

    /// `cx` is the defender's pre-snap y coordinate.
    fn classify(&self, field: &FieldConfig, path: &[Point], cx: &f32) -> ZoneClassification {
        let start_y = *cx;

        if path.len() < 2 {
            let endpoint = path
                .first()
                .copied()
                .unwrap_or_else(|| Point::new(field.center_x, start_y));

            return Classification::new(ZoneLabel::Man, Confidence::Low, endpoint);
        }

        let endpoint = path[path.len() - 1];
        let ctx = ZoneContext {
            drop: start_y - endpoint.y,
            center_offset: field.offset_from_center(endpoint.x),
        };

        let (label, confidence) =
            first_match(RULES, &ctx).unwrap_or((ZoneLabel::Man, Confidence::Low));

        log::debug!("zone: {:?} ({:?}), drop {:.0}", label, confidence, ctx.drop);

        Classification::new(label, confidence, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(path: &[Point], start_y: f32) -> ZoneClassification {
        ZoneClassifier.classify(&FieldConfig::new(400.0, 300.0), path, &start_y)
    }

    #[test]
    fn deep_middle_drop_is_deep_third() {
        let path = [Point::new(400.0, 0.0), Point::new(430.0, -150.0)];
        let got = classify(&path, 0.0);

        assert_eq!(got.label, ZoneLabel::DeepThird);
        assert_eq!(got.confidence, Confidence::High);
        assert_eq!(got.detail, Point::new(430.0, -150.0));
    }

    #[test]
    fn deep_wide_drop_is_deep_half() {
        let path = [Point::new(200.0, 300.0), Point::new(180.0, 160.0)];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, ZoneLabel::DeepHalf);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn drop_bands_split_quarter_and_hook() {
        let quarter = [Point::new(400.0, 300.0), Point::new(400.0, 210.0)];
        assert_eq!(classify(&quarter, 300.0).label, ZoneLabel::Quarter);

        let hook = [Point::new(400.0, 300.0), Point::new(420.0, 260.0)];
        assert_eq!(classify(&hook, 300.0).label, ZoneLabel::HookCurl);
    }

    #[test]
    fn deep_band_boundary_falls_to_quarter() {
        // drop of exactly 120 is not past the deep cut
        let path = [Point::new(400.0, 300.0), Point::new(400.0, 180.0)];

        assert_eq!(classify(&path, 300.0).label, ZoneLabel::Quarter);
    }

    #[test]
    fn shallow_wide_path_is_flat() {
        let path = [Point::new(400.0, 300.0), Point::new(600.0, 290.0)];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, ZoneLabel::Flat);
        assert_eq!(got.confidence, Confidence::High);
    }

    #[test]
    fn shallow_tight_path_is_man() {
        let path = [Point::new(400.0, 300.0), Point::new(430.0, 295.0)];
        let got = classify(&path, 300.0);

        assert_eq!(got.label, ZoneLabel::Man);
        assert_eq!(got.confidence, Confidence::Low);
    }

    #[test]
    fn degenerate_path_is_man_low_with_synthesized_endpoint() {
        let sole = classify(&[Point::new(250.0, 100.0)], 300.0);
        assert_eq!(sole.label, ZoneLabel::Man);
        assert_eq!(sole.confidence, Confidence::Low);
        assert_eq!(sole.detail, Point::new(250.0, 100.0));

        let empty = classify(&[], 300.0);
        assert_eq!(empty.detail, Point::new(400.0, 300.0));
    }
}
