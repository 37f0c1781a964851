use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::field::FieldConfig;
use crate::geometry;
use crate::point::Point;
use crate::rules::{first_match, Classification, Confidence, Rule};
use crate::PathClassifier;

// A pulling lineman clears real lateral ground; anything shorter than the
// run-block cap is a drive block on the man in front.
const PULL_MIN_DRIFT: f32 = 60.0;
const PULL_MIN_DISTANCE: f32 = 80.0;
const RUN_BLOCK_MAX_DISTANCE: f32 = 50.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockLabel {
    #[serde(rename = "Run Block")]
    Run,
    #[serde(rename = "Pass Block")]
    Pass,
    Pull,
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockLabel::Run => "Run Block",
            BlockLabel::Pass => "Pass Block",
            BlockLabel::Pull => "Pull",
        })
    }
}

pub type BlockClassification = Classification<BlockLabel>;

#[derive(Debug, Clone, Copy)]
pub struct BlockContext {
    pub net_horizontal: f32,
    pub total_distance: f32,
}

static RULES: &[Rule<BlockContext, BlockLabel>] = &[
    Rule {
        applies: |c| c.net_horizontal > PULL_MIN_DRIFT && c.total_distance > PULL_MIN_DISTANCE,
        label: |_| BlockLabel::Pull,
        confidence: Confidence::High,
    },
    Rule {
        applies: |c| c.total_distance < RUN_BLOCK_MAX_DISTANCE,
        label: |_| BlockLabel::Run,
        confidence: Confidence::Medium,
    },
    Rule {
        applies: |_| true,
        label: |_| BlockLabel::Pass,
        confidence: Confidence::Medium,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockClassifier;

impl PathClassifier for BlockClassifier {
    type Label = BlockLabel;
    type Detail = ();
    type Context = ();

    fn classify(&self, _field: &FieldConfig, path: &[Point], _cx: &()) -> BlockClassification {
        if path.len() < 2 {
            return Classification::new(BlockLabel::Pass, Confidence::Low, ());
        }

        let cx = BlockContext {
            net_horizontal: path[path.len() - 1].x - path[0].x,
            total_distance: geometry::path_distance(path.iter().map(Point::coords)),
        };

        let (label, confidence) =
            first_match(RULES, &cx).unwrap_or((BlockLabel::Pass, Confidence::Medium));

        log::debug!("block: {:?} ({:?})", label, confidence);

        Classification::new(label, confidence, ())
    }
}
