// point.rs - 2D point with the vector arithmetic used by wall geometry

use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Grid coordinates as a point (cell corner)
    #[inline]
    pub fn from_cell(w: usize, h: usize) -> Self {
        Self::new(w as f64, h as f64)
    }

    /// Unit vector at `angle` radians
    #[inline]
    pub fn polar(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Both coordinates rounded to the nearest integer
    #[inline]
    pub fn round(self) -> Self {
        // `+ 0.0` turns -0.0 into 0.0
        Self::new(self.x.round() + 0.0, self.y.round() + 0.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, factor: f64) -> Point {
        Point::new(self.x / factor, self.y / factor)
    }
}
