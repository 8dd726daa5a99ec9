//! 2D vector type for points and directions on the plane.
//!
//! [`Vec2`] covers positions, offsets, and texture coordinates.
//! It converts to and from [`glam::Vec2`] for interop with glam-based code.
//!
//! # Usage
//!
//! ```rust
//! use vmath_core::Vec2;
//!
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let unit = v.normalized();
//! let heading = v.angle();
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parse::parse_fields;

/// A 2D vector for points and directions.
///
/// Components are plain `f32` fields; convert with [`Vec2::to_glam`] for
/// SIMD-accelerated batch work.
///
/// # Components
///
/// Access via `.x`, `.y` or index `[0]`, `[1]`.
/// For texture coordinates: x=U, y=V.
///
/// # Example
///
/// ```rust
/// use vmath_core::Vec2;
///
/// let p = Vec2::new(2.0, 3.0);
/// assert_eq!(p.x, 2.0);
/// assert_eq!(p[1], 3.0);
///
/// // Projection onto an axis
/// let along_x = p.dot(Vec2::X);
/// assert_eq!(along_x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component (horizontal axis, U for texture coordinates)
    pub x: f32,
    /// Y component (vertical axis, V for texture coordinates)
    pub y: f32,
}

/// A 2D position.
///
/// Alias of [`Vec2`] for code that distinguishes points from directions.
pub type Point2 = Vec2;

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// let v = Vec2::new(1.0, 2.0);
    /// ```
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// let half = Vec2::splat(0.5);
    /// assert_eq!(half, Vec2::new(0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Parses a vector from a delimited string.
    ///
    /// Accepts exactly two numeric fields separated by `delimiter`, with
    /// optional whitespace around each field. Returns an [`Error`] describing
    /// the first problem found; no partial vector is ever produced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// let v = Vec2::from_delimited("3.0, 4.0", ',').unwrap();
    /// assert_eq!(v, Vec2::new(3.0, 4.0));
    ///
    /// assert!(Vec2::from_delimited("3.0", ',').is_err());
    /// ```
    pub fn from_delimited(s: &str, delimiter: char) -> Result<Self> {
        let v = parse_fields(s, delimiter, 2)?;
        Ok(Self::new(v[0], v[1]))
    }

    /// Dot product with another vector.
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// let a = Vec2::new(1.0, 2.0);
    /// let b = Vec2::new(3.0, 4.0);
    /// assert_eq!(a.dot(b), 11.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product.
    ///
    /// Returns the z component of the 3D cross product of the two vectors
    /// extended with z = 0, equal to the signed area of the parallelogram
    /// they span. Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// Follows IEEE division: a zero-length input yields NaN components.
    /// Use [`Vec2::try_normalized`] when the input may be degenerate.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Normalizes the vector in place.
    ///
    /// Same semantics as [`Vec2::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the unit vector, or `None` if the length is zero or not
    /// finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// assert!(Vec2::new(3.0, 4.0).try_normalized().is_some());
    /// assert!(Vec2::ZERO.try_normalized().is_none());
    /// ```
    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Polar angle of the vector.
    ///
    /// Measured in radians from the positive X axis, counter-clockwise,
    /// in the range `[-pi, pi]`. The zero vector yields `0.0`.
    ///
    /// ```rust
    /// use vmath_core::Vec2;
    ///
    /// assert_eq!(Vec2::X.angle(), 0.0);
    /// ```
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if any component is infinite.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.x.is_infinite() || self.y.is_infinite()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// Formatting: components separated by a single space
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parses from a comma-separated pair, e.g. `"1.5,-2"`.
impl FromStr for Vec2 {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Self::from_delimited(s, ',')
    }
}

// Indexing
impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

// Vec2 + Vec2
impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// Vec2 - Vec2
impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Vec2 * Vec2 (component-wise)
impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

// Vec2 * f32
impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// f32 * Vec2
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.x, self * rhs.y)
    }
}

// Vec2 / Vec2 (component-wise)
impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

// Vec2 / f32
impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

// f32 / Vec2 (component-wise reciprocal)
impl Div<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self / rhs.x, self / rhs.y)
    }
}

// Compound assignment, vector and scalar right-hand sides
impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f32> for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        *self = Self::new(self.x + rhs, self.y + rhs);
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<f32> for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        *self = Self::new(self.x - rhs, self.y - rhs);
    }
}

impl MulAssign for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from(t: (f32, f32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl From<Vec2> for (f32, f32) {
    #[inline]
    fn from(v: Vec2) -> (f32, f32) {
        (v.x, v.y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> glam::Vec2 {
        v.to_glam()
    }
}
