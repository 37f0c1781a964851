use serde_derive::{Deserialize, Serialize};

use nalgebra as na;

/// One sample of a drawn path, in diagram pixel space (y grows downward)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn coords(&self) -> na::Point2<f32> {
        na::Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f32 {
        na::distance(&self.coords(), &other.coords())
    }
}

impl From<na::Point2<f32>> for Point {
    #[inline]
    fn from(p: na::Point2<f32>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSide {
    Offense,
    Defense,
}

/// Pre-snap alignment of the player the path was drawn for.
///
/// Only `x` enters the classification arithmetic; `side` rides along as part
/// of the input contract and shows up in the decision logs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub side: PlayerSide,
    pub x: f32,
}

impl Alignment {
    #[inline]
    pub fn new(side: PlayerSide, x: f32) -> Self {
        Self { side, x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn wire_format_round_trip() {
        let p: Point = serde_json::from_str(r#"{"x":12.5,"y":-3.0}"#).unwrap();
        assert_eq!(p, Point::new(12.5, -3.0));

        let side: PlayerSide = serde_json::from_str(r#""offense""#).unwrap();
        assert_eq!(side, PlayerSide::Offense);
    }
}
