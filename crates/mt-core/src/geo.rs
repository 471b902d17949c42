//! Planar coordinates and the rectangular simulation area.
//!
//! All movement models run on the rectangle `[0, max_x] × [0, max_y]` with
//! `f64` coordinates.  Agents that step outside it are mirrored back once per
//! axis by [`Bounds::reflect`].

use crate::{ConfigResult, SimRng, validate};

/// A position in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Prefer this for threshold comparisons.
    #[inline]
    pub fn distance_2(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// Angle of the vector from `self` to `target`, in `(-π, π]`.
    #[inline]
    pub fn heading_to(self, target: Point) -> f64 {
        (target.y - self.y).atan2(target.x - self.x)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Which axes were mirrored by a call to [`Bounds::reflect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// The simulation area `[0, max_x] × [0, max_y]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Validated constructor: both dimensions must be finite and positive.
    pub fn new(max_x: f64, max_y: f64) -> ConfigResult<Self> {
        validate::positive("max_x", max_x)?;
        validate::positive("max_y", max_y)?;
        Ok(Self { max_x, max_y })
    }

    /// The larger of the two side lengths.
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.max_x.max(self.max_y)
    }

    /// Length of the diagonal; no two points in the area are farther apart.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.max_x.hypot(self.max_y)
    }

    /// Inclusive containment test.  Points on the boundary line are inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.max_x).contains(&p.x) && (0.0..=self.max_y).contains(&p.y)
    }

    /// A point drawn uniformly from the area.
    pub fn uniform_point(&self, rng: &mut SimRng) -> Point {
        Point {
            x: rng.uniform(0.0, self.max_x),
            y: rng.uniform(0.0, self.max_y),
        }
    }

    /// Mirror `p` back into the area, once per axis.
    ///
    /// `x < 0` becomes `-x` and `x > max_x` becomes `2·max_x - x` (likewise
    /// for `y`).  A coordinate exactly on the boundary is left untouched.  A
    /// displacement longer than the side length can leave the point outside
    /// after the single mirror; steps are assumed shorter than the area.
    #[inline]
    pub fn reflect(&self, p: &mut Point) -> Reflection {
        Reflection {
            x: mirror(&mut p.x, self.max_x),
            y: mirror(&mut p.y, self.max_y),
        }
    }
}

#[inline]
fn mirror(v: &mut f64, max: f64) -> bool {
    if *v < 0.0 {
        *v = -*v;
        true
    } else if *v > max {
        *v = 2.0 * max - *v;
        true
    } else {
        false
    }
}
