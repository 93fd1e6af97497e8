use std::ops::{Add, Mul, Sub};

use pixelpunch_image::ImageSize;

use crate::error::GeometryError;

/// A 2D point with floating point coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The z component of the cross product of two vectors lying in the plane.
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
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

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Four corners, clockwise starting at the top-left one.
pub type Quad = [Point; 4];

/// An axis-aligned rectangle given by its upper-left and lower-right corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// left edge
    pub x1: f64,
    /// top edge
    pub y1: f64,
    /// right edge
    pub x2: f64,
    /// bottom edge
    pub y2: f64,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The rectangle covering an image of the given size anchored at the origin.
    pub fn from_size(size: ImageSize) -> Self {
        Self::new(0.0, 0.0, size.width as f64, size.height as f64)
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// The integer pixel size of the rectangle, truncating fractional extents.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width().max(0.0) as usize,
            height: self.height().max(0.0) as usize,
        }
    }

    /// The corners clockwise starting at the upper-left one.
    pub fn corners(&self) -> Quad {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    /// The upper-left corner.
    pub fn upper_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }
}

/// A quad together with its bounding box.
///
/// The corners are stored relative to the upper-left corner of the bounding box, which
/// is the coordinate frame of the image a transform renders into.
///
/// # Examples
///
/// ```
/// use pixelpunch_imgproc::geometry::{Point, TransformMapping};
///
/// let mapping = TransformMapping::from_points([
///     Point::new(10.0, 5.0),
///     Point::new(20.0, 6.0),
///     Point::new(21.0, 15.0),
///     Point::new(9.0, 14.0),
/// ]).unwrap();
///
/// assert_eq!(mapping.bounds().width(), 12.0);
/// assert_eq!(mapping.local_quad()[0], Point::new(1.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformMapping {
    bounds: Rect,
    local_quad: Quad,
}

impl TransformMapping {
    /// Create a mapping from four corners, clockwise starting at the top-left one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinitePoint`] if a corner is NaN or infinite.
    pub fn from_points(points: Quad) -> Result<Self, GeometryError> {
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinitePoint(p.x, p.y));
        }

        let mut bounds = Rect::new(points[0].x, points[0].y, points[0].x, points[0].y);
        for p in &points[1..] {
            bounds.x1 = bounds.x1.min(p.x);
            bounds.y1 = bounds.y1.min(p.y);
            bounds.x2 = bounds.x2.max(p.x);
            bounds.y2 = bounds.y2.max(p.y);
        }

        let top_left = bounds.upper_left();
        Ok(Self {
            bounds,
            local_quad: points.map(|p| p - top_left),
        })
    }

    /// Create a mapping whose quad is the rectangle itself.
    pub fn from_rect(rect: Rect) -> Self {
        let top_left = rect.upper_left();
        Self {
            bounds: rect,
            local_quad: rect.corners().map(|p| p - top_left),
        }
    }

    /// The axis-aligned bounding box of the quad.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The quad corners relative to the upper-left corner of the bounds.
    pub fn local_quad(&self) -> &Quad {
        &self.local_quad
    }
}
