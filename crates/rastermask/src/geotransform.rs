//! 6-parameter affine geotransform between pixel indices and world coordinates.
//!
//! Purpose
//! - Place a raster grid into a world coordinate frame with scaling and
//!   rotation (no perspective), and invert that placement to look up which
//!   pixel contains a given world coordinate.
//!
//! Model
//! - `world_x = x_origin + i*x_pixel_width + j*x_rotation`
//! - `world_y = y_origin + i*y_rotation  + j*y_pixel_height`
//!   with `(i, j)` the (possibly fractional) pixel offsets along x and y.
//! - The inverse solves the 2×2 system in closed form and rounds to integer
//!   indices; it is undefined when the linear part is singular.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix2, Vector2};

/// Linear parts with |det| at or below this are treated as singular.
pub const SINGULAR_EPS: f64 = 1e-12;

/// Errors surfaced by geotransform construction and mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// The linear part is (numerically) non-invertible.
    Singular,
    /// A pixel anchor token was not one of "ul", "ur", "lr", "ll", "c".
    UnknownAnchor { token: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Singular => {
                write!(f, "geotransform is singular (pixel axes are collinear)")
            }
            TransformError::UnknownAnchor { token } => {
                write!(
                    f,
                    "unknown pixel anchor '{}' (expected ul, ur, lr, ll or c)",
                    token
                )
            }
        }
    }
}

/// Sub-pixel reference point used when converting an index to a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelAnchor {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
    Center,
}

impl PixelAnchor {
    /// Fractional (di, dj) offset added to the pixel index before mapping.
    #[inline]
    pub fn shift(self) -> (f64, f64) {
        match self {
            PixelAnchor::UpperLeft => (0.0, 0.0),
            PixelAnchor::UpperRight => (1.0, 0.0),
            PixelAnchor::LowerRight => (1.0, 1.0),
            PixelAnchor::LowerLeft => (0.0, 1.0),
            PixelAnchor::Center => (0.5, 0.5),
        }
    }
}

impl FromStr for PixelAnchor {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ul" => Ok(PixelAnchor::UpperLeft),
            "ur" => Ok(PixelAnchor::UpperRight),
            "lr" => Ok(PixelAnchor::LowerRight),
            "ll" => Ok(PixelAnchor::LowerLeft),
            "c" => Ok(PixelAnchor::Center),
            other => Err(TransformError::UnknownAnchor {
                token: other.to_string(),
            }),
        }
    }
}

/// Unit of the rotation angle passed to [`GeoTransform::from_origin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// Compatibility switches for geotransform construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformCfg {
    /// Round the rotation angle to the nearest whole degree before converting
    /// to radians. Reproduces historic outputs; leave off for new callers.
    pub round_degrees: bool,
}

/// Affine map between pixel indices and world coordinates.
///
/// Immutable once constructed; plain `Copy` value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoTransform {
    pub x_origin: f64,
    pub x_pixel_width: f64,
    pub x_rotation: f64,
    pub y_origin: f64,
    pub y_rotation: f64,
    pub y_pixel_height: f64,
}

impl GeoTransform {
    pub fn new(
        x_origin: f64,
        x_pixel_width: f64,
        x_rotation: f64,
        y_origin: f64,
        y_rotation: f64,
        y_pixel_height: f64,
    ) -> Self {
        Self {
            x_origin,
            x_pixel_width,
            x_rotation,
            y_origin,
            y_rotation,
            y_pixel_height,
        }
    }

    /// Construct from an origin, a rotation angle, and per-axis pixel sizes.
    pub fn from_origin(
        origin: Vector2<f64>,
        rotation: f64,
        pixel_size: (f64, f64),
        unit: AngleUnit,
    ) -> Self {
        Self::from_origin_with(origin, rotation, pixel_size, unit, TransformCfg::default())
    }

    /// [`from_origin`](Self::from_origin) with explicit compatibility config.
    pub fn from_origin_with(
        origin: Vector2<f64>,
        rotation: f64,
        pixel_size: (f64, f64),
        unit: AngleUnit,
        cfg: TransformCfg,
    ) -> Self {
        let alpha = match unit {
            AngleUnit::Degrees => {
                let deg = if cfg.round_degrees {
                    rotation.round()
                } else {
                    rotation
                };
                deg.to_radians()
            }
            AngleUnit::Radians => rotation,
        };
        let (x_size, y_size) = pixel_size;
        let (sin_a, cos_a) = alpha.sin_cos();
        Self {
            x_origin: origin.x,
            x_pixel_width: cos_a * x_size,
            x_rotation: -sin_a * x_size,
            y_origin: origin.y,
            y_rotation: sin_a * y_size,
            y_pixel_height: cos_a * y_size,
        }
    }

    /// Linear part of the map as a 2×2 matrix acting on (i, j).
    #[inline]
    pub fn linear(&self) -> Matrix2<f64> {
        Matrix2::new(
            self.x_pixel_width,
            self.x_rotation,
            self.y_rotation,
            self.y_pixel_height,
        )
    }

    /// Denominator of the closed-form inverse map,
    /// `x_rotation*y_rotation - x_pixel_width*y_pixel_height`.
    ///
    /// Zero (within [`SINGULAR_EPS`]) means the map has no inverse. Note the
    /// sign: this is the negative of `linear().determinant()`.
    #[inline]
    pub fn det(&self) -> f64 {
        self.x_rotation * self.y_rotation - self.x_pixel_width * self.y_pixel_height
    }

    /// World coordinate of pixel `(i, j)` at the given anchor.
    pub fn pixel_to_world(&self, i: f64, j: f64, anchor: PixelAnchor) -> Vector2<f64> {
        let (di, dj) = anchor.shift();
        let (i, j) = (i + di, j + dj);
        Vector2::new(
            self.x_origin + i * self.x_pixel_width + j * self.x_rotation,
            self.y_origin + i * self.y_rotation + j * self.y_pixel_height,
        )
    }

    /// Pixel index `(i, j)` containing world coordinate `p`.
    ///
    /// Closed-form (Cramer) inverse of the affine map, rounded to the nearest
    /// integer index. Fails when the linear part is singular.
    pub fn world_to_pixel(&self, p: Vector2<f64>) -> Result<(i64, i64), TransformError> {
        let denom = self.det();
        if denom.abs() <= SINGULAR_EPS {
            return Err(TransformError::Singular);
        }
        let i = -(self.x_rotation * self.y_origin - self.x_origin * self.y_pixel_height
            + self.y_pixel_height * p.x
            - self.x_rotation * p.y)
            / denom;
        let j = -(-self.x_pixel_width * self.y_origin + self.x_origin * self.y_rotation
            - self.y_rotation * p.x
            + self.x_pixel_width * p.y)
            / denom;
        Ok((i.round() as i64, j.round() as i64))
    }
}
