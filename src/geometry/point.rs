use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D point (or vector) in scene units.
///
/// Equality is exact field equality. Multiplication is split into [`Point2::scale`] and
/// [`Point2::dot`]; `Mul<f64>` is the scaling form.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `(x, 0)`.
    pub const fn x_axis(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    /// `(0, y)`.
    pub const fn y_axis(y: f64) -> Self {
        Self { x: 0.0, y }
    }

    /// Point at distance `r` from the origin along `angle` radians.
    pub fn polar(r: f64, angle: f64) -> Self {
        Self::new(r * angle.cos(), r * angle.sin())
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn unit(self) -> Self {
        self / self.length()
    }

    /// Phase angle, `atan2(y, x)`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate counter-clockwise about the origin by `angle` radians.
    ///
    /// Reconstructed from polar form, so magnitude is preserved exactly up to `hypot`/`cos`
    /// rounding; the zero vector stays at the origin. A zero angle returns `self` unchanged.
    pub fn rotate(self, angle: f64) -> Self {
        if angle == 0.0 {
            return self;
        }
        Self::polar(self.length(), angle + self.angle())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Mul<Point2> for f64 {
    type Output = Point2;
    fn mul(self, p: Point2) -> Point2 {
        p.scale(self)
    }
}

impl Div<f64> for Point2 {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl From<kurbo::Point> for Point2 {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2> for kurbo::Point {
    fn from(p: Point2) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<kurbo::Vec2> for Point2 {
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for kurbo::Vec2 {
    fn from(p: Point2) -> Self {
        kurbo::Vec2::new(p.x, p.y)
    }
}

/// A 3D point, projected to [`Point2`] with [`Point3::to_2d`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, b: Self) -> Self {
        Self::new(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn unit(self) -> Self {
        self / self.length()
    }

    pub fn azimuth(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn elevation(self) -> f64 {
        self.z.atan2(self.x.hypot(self.y))
    }

    /// Apply a 4x4 homogeneous matrix (row major) to `(x, y, z, 1)`.
    pub fn matrix(self, m: &[[f64; 4]; 4]) -> Self {
        let p = [self.x, self.y, self.z, 1.0];
        let row = |r: &[f64; 4]| r.iter().zip(p).map(|(a, b)| a * b).sum::<f64>();
        Self::new(row(&m[0]), row(&m[1]), row(&m[2]))
    }

    /// Rotate by `az·ay·ax` (applied x first) and translate by `(dx, dy, dz)`.
    ///
    /// The matrix is built on every call; compose rotations by calling repeatedly.
    pub fn transform(self, ax: f64, ay: f64, az: f64, dx: f64, dy: f64, dz: f64) -> Self {
        let (sx, cx) = ax.sin_cos();
        let (sy, cy) = ay.sin_cos();
        let (sz, cz) = az.sin_cos();
        let m = [
            [cz * cy, cz * sy * sx - sz * cx, cz * sy * cx + sz * sx, dx],
            [sz * cy, sz * sy * sx + cz * cx, sz * sy * cx - cz * sx, dy],
            [-sy, cy * sx, cy * cx, dz],
            [0.0, 0.0, 0.0, 1.0],
        ];
        self.matrix(&m)
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        self.transform(angle, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        self.transform(0.0, angle, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn rotate_z(self, angle: f64) -> Self {
        self.transform(0.0, 0.0, angle, 0.0, 0.0, 0.0)
    }

    /// Project onto the `z = 0` plane.
    ///
    /// With a view distance `d` the projection is perspective, `(x, y)·d/(d − z)`; callers keep
    /// `z < d`. Without one, `z` is dropped.
    pub fn to_2d(self, d: Option<f64>) -> Point2 {
        let k = match d {
            Some(d) => d / (d - self.z),
            None => 1.0,
        };
        Point2::new(self.x, self.y).scale(k)
    }
}

impl Add for Point3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Div<f64> for Point3 {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
