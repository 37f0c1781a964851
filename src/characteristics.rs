use serde_derive::{Deserialize, Serialize};

use crate::field::{FieldConfig, FieldSide};
use crate::geometry;
use crate::point::{Alignment, Point};

// End-of-path headings inside this cone (absolute degrees) count as vertical.
const VERTICAL_END_MIN: f32 = 60.0;
const VERTICAL_END_MAX: f32 = 120.0;

// A path is lateral when it climbs less than half of what it drifts.
const LATERAL_SLOPE: f32 = 0.5;

// Breakless paths with more samples than this read as curved, not straight.
const CURVED_MIN_POINTS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Upfield,
    Downfield,
    Lateral,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Curvature {
    Straight,
    Breaking,
    Curved,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndDirection {
    Inside,
    Outside,
    Vertical,
    Back,
}

/// Aggregate geometry of one drawn path, relative to the player's pre-snap
/// alignment. `net_vertical` is positive toward the opponent's end zone
/// (up on screen), `net_horizontal` positive to the right.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PathCharacteristics {
    pub total_distance: f32,
    pub net_vertical: f32,
    pub net_horizontal: f32,
    pub direction: Direction,
    pub curvature: Curvature,
    pub end_direction: EndDirection,
    pub moving_inside: bool,
}

impl PathCharacteristics {
    /// Characteristics of a path too short to measure. Degenerate gestures
    /// classify to their low-confidence defaults; this record keeps the
    /// result deterministic.
    pub fn neutral() -> Self {
        Self {
            total_distance: 0.0,
            net_vertical: 0.0,
            net_horizontal: 0.0,
            direction: Direction::Lateral,
            curvature: Curvature::Straight,
            end_direction: EndDirection::Vertical,
            moving_inside: false,
        }
    }

    pub fn extract(field: &FieldConfig, path: &[Point], alignment: &Alignment) -> Self {
        if path.len() < 2 {
            return Self::neutral();
        }

        let first = path[0];
        let last = path[path.len() - 1];

        let net_vertical = first.y - last.y;
        let net_horizontal = last.x - first.x;
        let total_distance = geometry::path_distance(path.iter().map(Point::coords));

        let moving_inside = match field.side_of(alignment.x) {
            FieldSide::Left => net_horizontal > 0.0,
            FieldSide::Right => net_horizontal < 0.0,
            FieldSide::Center => net_horizontal.abs() < field.inside_tolerance,
        };

        let has_break = first_break(field, path).is_some();

        let end_direction = if net_vertical < 0.0 {
            EndDirection::Back
        } else {
            let heading = geometry::angle_of_segment(
                &path[path.len() - 2].coords(),
                &last.coords(),
            );
            let steepness = heading.abs();

            if steepness > VERTICAL_END_MIN && steepness < VERTICAL_END_MAX {
                EndDirection::Vertical
            } else if moving_inside {
                EndDirection::Inside
            } else {
                EndDirection::Outside
            }
        };

        let direction = if net_vertical.abs() <= LATERAL_SLOPE * net_horizontal.abs() {
            Direction::Lateral
        } else if net_vertical > 0.0 {
            Direction::Upfield
        } else {
            Direction::Downfield
        };

        let curvature = if has_break {
            Curvature::Breaking
        } else if path.len() > CURVED_MIN_POINTS {
            Curvature::Curved
        } else {
            Curvature::Straight
        };

        let characteristics = Self {
            total_distance,
            net_vertical,
            net_horizontal,
            direction,
            curvature,
            end_direction,
            moving_inside,
        };

        log::trace!("extracted {:?}", characteristics);

        characteristics
    }
}

/// Index of the first sharp cut: a heading change strictly inside
/// (`break_angle`, 360 - `break_angle`). Near-parallel continuation on
/// either side of the seam falls outside the window; a hard hook back
/// toward the ball (turn near 180) lands inside it.
pub fn first_break(field: &FieldConfig, path: &[Point]) -> Option<usize> {
    for (idx, w) in path.windows(3).enumerate() {
        let before = geometry::angle_of_segment(&w[0].coords(), &w[1].coords());
        let after = geometry::angle_of_segment(&w[1].coords(), &w[2].coords());
        let turn = geometry::turn_angle(before, after);

        if turn > field.break_angle && turn < 360.0 - field.break_angle {
            return Some(idx + 1);
        }
    }

    None
}
