use std::ops::{Add, AddAssign, Mul, Sub};

/// Screen-space vector: x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Direction of `magnitude` at `degrees` measured clockwise from +x
    /// (screen convention, so 90° points down).
    pub fn from_polar_degrees(degrees: f64, magnitude: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector2D::new(cos * magnitude, sin * magnitude)
    }

    /// Unit vector along the rocket's nose for an angle measured from "up",
    /// positive counter-clockwise.
    pub fn nose_direction(angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Vector2D::new(-sin, -cos)
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}
