use nalgebra as na;
use num_traits::Float;

/// Sum of Euclidean segment lengths; zero for fewer than two points.
pub fn path_distance<F, I>(points: I) -> F
where
    F: na::RealField + Float,
    I: IntoIterator<Item = na::Point2<F>>,
{
    let mut iter = points.into_iter();
    let mut total = F::zero();

    let mut prev = match iter.next() {
        Some(p) => p,
        None => return total,
    };

    for p in iter {
        total += na::distance(&prev, &p);
        prev = p;
    }

    total
}

/// Signed heading of a segment in degrees, screen convention: y grows
/// downward, so 0 = right, 90 = up, -90 = down.
pub fn angle_of_segment<F>(a: &na::Point2<F>, b: &na::Point2<F>) -> F
where
    F: na::RealField + Float,
{
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    Float::to_degrees(Float::atan2(-dy, dx))
}

/// Heading change from `prev` to `next`, normalized into [0, 360).
pub fn turn_angle<F>(prev: F, next: F) -> F
where
    F: na::RealField + Float,
{
    let full = F::from(360.0).unwrap();
    let mut delta = (next - prev) % full;

    if delta < F::zero() {
        delta += full;
    }

    delta
}
