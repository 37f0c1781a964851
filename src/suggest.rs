use crate::characteristics::{Curvature, Direction};
use crate::route::{RouteClassification, RouteLabel};

// Paths longer than this that head upfield get the deep-shot pool.
const DEEP_POOL_MIN_DISTANCE: f32 = 100.0;

static DEEP_POOL: &[RouteLabel] = &[
    RouteLabel::Go,
    RouteLabel::Post,
    RouteLabel::Corner,
    RouteLabel::Seam,
];

static BREAKING_POOL: &[RouteLabel] = &[
    RouteLabel::Out,
    RouteLabel::Dig,
    RouteLabel::Curl,
    RouteLabel::Comeback,
];

static QUICK_POOL: &[RouteLabel] = &[
    RouteLabel::Slant,
    RouteLabel::Hitch,
    RouteLabel::Flat,
    RouteLabel::Swing,
];

/// Ranked override options for the confirmation dialog: the suggested route
/// first, then the contextually closest pool, with the custom escape hatch
/// always last-or-present and no duplicates.
pub fn route_options(analysis: &RouteClassification) -> Vec<RouteLabel> {
    let c = &analysis.detail;

    let pool = if c.direction == Direction::Upfield && c.total_distance > DEEP_POOL_MIN_DISTANCE {
        DEEP_POOL
    } else if c.curvature == Curvature::Breaking {
        BREAKING_POOL
    } else {
        QUICK_POOL
    };

    let mut options = Vec::with_capacity(pool.len() + 2);
    options.push(analysis.label);

    for &route in pool {
        if !options.contains(&route) {
            options.push(route);
        }
    }

    if !options.contains(&RouteLabel::Custom) {
        options.push(RouteLabel::Custom);
    }

    options
}
