//! The [`Point`] coordinate type and the [`Bounds`] rectangle.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// An integer grid coordinate.
///
/// Coordinates are `i64` rather than `i32`: fast-forwarding a drifting
/// simulation over tens of billions of generations multiplies a small
/// per-period shift into offsets that overflow 32 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward.
    pub x: i64,
    /// Vertical coordinate, increasing downward.
    pub y: i64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the graph geodesic for a 4-connected grid without
    /// obstacles, which makes it an admissible heuristic for
    /// orthogonal-movement searches.
    pub fn manhattan(self, other: Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours in reading order:
    /// up, left, right, down.
    pub fn orthogonal(self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, k: i64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// A half-open rectangle of grid coordinates.
///
/// Covers `[min.x, min.x + width) × [min.y, min.y + height)`. A 1D
/// lattice is a `Bounds` of height 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Inclusive minimum corner.
    pub min: Point,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Bounds {
    /// Create bounds from the minimum corner and dimensions.
    pub const fn new(min: Point, width: u32, height: u32) -> Self {
        Bounds { min, width, height }
    }

    /// Bounds with `min` at the origin.
    pub const fn sized(width: u32, height: u32) -> Self {
        Bounds::new(Point::ORIGIN, width, height)
    }

    /// Exclusive maximum x (`min.x + width`).
    pub fn max_x(&self) -> i64 {
        self.min.x + self.width as i64
    }

    /// Exclusive maximum y (`min.y + height`).
    pub fn max_y(&self) -> i64 {
        self.min.y + self.height as i64
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` lies inside the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max_x() && p.y >= self.min.y && p.y < self.max_y()
    }

    /// The same rectangle translated by `delta`.
    pub fn translated(&self, delta: Point) -> Bounds {
        Bounds::new(self.min + delta, self.width, self.height)
    }

    /// The overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let min_x = self.min.x.max(other.min.x);
        let min_y = self.min.y.max(other.min.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if min_x < max_x && min_y < max_y {
            Some(Bounds::new(
                Point::new(min_x, min_y),
                (max_x - min_x) as u32,
                (max_y - min_y) as u32,
            ))
        } else {
            None
        }
    }

    /// The smallest rectangle containing both operands.
    pub fn union(&self, other: &Bounds) -> Bounds {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let min_x = self.min.x.min(other.min.x);
        let min_y = self.min.y.min(other.min.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Bounds::new(
            Point::new(min_x, min_y),
            (max_x - min_x) as u32,
            (max_y - min_y) as u32,
        )
    }

    /// The rectangle grown by `margin` cells on every side.
    pub fn expanded(&self, margin: u32) -> Bounds {
        Bounds::new(
            Point::new(self.min.x - margin as i64, self.min.y - margin as i64),
            self.width + 2 * margin,
            self.height + 2 * margin,
        )
    }

    /// Iterate over contained points in reading order
    /// (row by row, left to right).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let min = self.min;
        let width = self.width as i64;
        (0..self.height as i64)
            .flat_map(move |dy| (0..width).map(move |dx| Point::new(min.x + dx, min.y + dy)))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.min.x,
            self.max_x(),
            self.min.y,
            self.max_y()
        )
    }
}
