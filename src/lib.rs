pub mod block;
pub mod characteristics;
pub mod error;
pub mod field;
pub mod gap;
pub mod geometry;
pub mod motion;
pub mod point;
pub mod route;
pub mod suggest;
pub mod zone;

mod rules;

pub use block::{BlockClassification, BlockClassifier, BlockLabel};
pub use characteristics::PathCharacteristics;
pub use error::Error;
pub use field::{DistanceBand, FieldConfig, FieldSide};
pub use gap::{GapClassification, GapClassifier, GapLabel, GapLane, GapSide};
pub use motion::{MotionClassification, MotionClassifier, MotionDirection, MotionLabel};
pub use point::{Alignment, PlayerSide, Point};
pub use route::{RouteClassification, RouteClassifier, RouteLabel};
pub use rules::{Classification, Confidence};
pub use zone::{ZoneClassification, ZoneClassifier, ZoneLabel};

/// A stateless, deterministic classifier from one drawn path to one label of
/// a closed vocabulary. Implementations never fail: degenerate input maps to
/// the classifier's low-confidence default.
pub trait PathClassifier {
    type Label;
    type Detail;
    type Context;

    fn classify(
        &self,
        field: &FieldConfig,
        path: &[Point],
        cx: &Self::Context,
    ) -> Classification<Self::Label, Self::Detail>;
}

/// Entry point for the drawing surface: owns the validated field template
/// and exposes one call per assignment kind plus the override ranking.
pub struct PlaybookClassifier {
    field: FieldConfig,
}

impl PlaybookClassifier {
    pub fn new(field: FieldConfig) -> Result<Self, Error> {
        field.validate()?;

        Ok(Self { field })
    }

    #[inline]
    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    pub fn route(&self, path: &[Point], alignment: Alignment) -> RouteClassification {
        RouteClassifier.classify(&self.field, path, &alignment)
    }

    pub fn blocking(&self, path: &[Point]) -> BlockClassification {
        BlockClassifier.classify(&self.field, path, &())
    }

    pub fn zone(&self, path: &[Point], start_y: f32) -> ZoneClassification {
        ZoneClassifier.classify(&self.field, path, &start_y)
    }

    pub fn gap(&self, path: &[Point]) -> GapClassification {
        GapClassifier.classify(&self.field, path, &())
    }

    pub fn motion(&self, path: &[Point], start_x: f32) -> MotionClassification {
        MotionClassifier.classify(&self.field, path, &start_x)
    }

    pub fn route_options(&self, analysis: &RouteClassification) -> Vec<RouteLabel> {
        suggest::route_options(analysis)
    }
}
