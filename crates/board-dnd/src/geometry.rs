//! Geometry Primitives
//!
//! Viewport-space points and rectangles used for activation and collision.

/// A point in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean length when treated as a vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Same rectangle shifted by `delta`
    pub fn translate(&self, delta: Point) -> Rect {
        Rect::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }

    /// Area shared with `other`; zero when the rectangles only touch or are apart
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let width = self.right().min(other.right()) - self.left.max(other.left);
        let height = self.bottom().min(other.bottom()) - self.top.max(other.top);
        if width > 0.0 && height > 0.0 {
            width * height
        } else {
            0.0
        }
    }

    /// Intersection over union, in `[0, 1]`
    ///
    /// Using the ratio rather than the raw area lets a small card beat the
    /// large column that contains it once the dragged card mostly covers it.
    pub fn intersection_ratio(&self, other: &Rect) -> f64 {
        let shared = self.intersection_area(other);
        if shared <= 0.0 {
            return 0.0;
        }
        let union = self.area() + other.area() - shared;
        if union <= 0.0 {
            0.0
        } else {
            shared / union
        }
    }
}
