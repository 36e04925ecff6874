//! Integer 2D vector used both as a grid position and as a displacement

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::io::error::{MazeError, Result};
use crate::math::rounding::{checked_rounded_div, rounded_div};

/// A position on the grid, or a movement between two positions
///
/// Every operation returns a new value. Any pair of integers is valid; whether
/// a vector addresses a real cell is up to the grid it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2D {
    /// East-west component
    pub x: i32,
    /// North-south component
    pub y: i32,
}

impl Vector2D {
    /// The origin, and the null movement
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a vector from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Components as a tuple, `(y, x)` instead of `(x, y)` when `reverse` is set
    pub const fn coords(&self, reverse: bool) -> (i32, i32) {
        if reverse {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        }
    }

    /// Multiply both components by `factor`
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Divide both components by `divisor`, rounding half-way values up
    ///
    /// Each axis becomes `floor((v + floor(divisor / 2)) / divisor)`, so
    /// `(20, 80) / 15 == (1, 5)` and `(2, 4) / 4 == (1, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::DivisionByZero`] if `divisor` is zero, or
    /// [`MazeError::Overflow`] if a component of the quotient does not fit in
    /// `i32` (only possible for a divisor of `-1`)
    pub fn divide(self, divisor: i32) -> Result<Self> {
        const OPERATION: &str = "vector division";
        if divisor == 0 {
            return Err(MazeError::DivisionByZero {
                operation: OPERATION,
            });
        }

        let component = |value: i32| {
            checked_rounded_div(value, divisor).ok_or(MazeError::Overflow {
                operation: OPERATION,
            })
        };
        Ok(Self::new(component(self.x)?, component(self.y)?))
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vector2D {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        self.scale(factor)
    }
}

/// Operator form of [`Vector2D::divide`]
///
/// Panics on a zero divisor like the primitive integer `/`.
impl Div<i32> for Vector2D {
    type Output = Self;

    fn div(self, divisor: i32) -> Self {
        Self::new(rounded_div(self.x, divisor), rounded_div(self.y, divisor))
    }
}

impl From<(i32, i32)> for Vector2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for (i32, i32) {
    fn from(vector: Vector2D) -> Self {
        vector.coords(false)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.x, self.y)
    }
}
