use std::fmt::{Display, Formatter};

/// A point in viewport coordinates (origin top-left, y growing downward).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of a sprite or of the viewport.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square size, the usual shape of the character images.
    pub const fn uniform(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned rectangle in viewport coordinates, edges included.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds the rectangle covered by a `size` box whose top-left corner sits at `origin`.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Strict overlap test: rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let point = Point::new(800.0, 50.0);
        assert_eq!(point.x, 800.0);
        assert_eq!(point.y, 50.0);
        assert_eq!(Point::from([800.0, 50.0]), point);
        assert_eq!(format!("{}", point), "(800, 50)");

        assert!(point.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_size() {
        let size = Size::uniform(120.0);
        assert_eq!(size.width, 120.0);
        assert_eq!(size.height, 120.0);
        assert_eq!(format!("{}", size), "120x120");

        assert!(size.is_finite());
        assert!(!Size::new(f64::NAN, 1.0).is_finite());
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(540.0, 40.0, 740.0, 140.0);
        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 100.0);
        assert_eq!(rect.center(), Point::new(640.0, 90.0));
    }

    #[test]
    fn test_rect_from_origin() {
        let rect = Rect::from_origin(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(rect, Rect::new(10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_rect_intersects() {
        let logo = Rect::new(100.0, 100.0, 200.0, 200.0);

        // Plain overlap, both ways.
        let overlapping = Rect::new(150.0, 150.0, 250.0, 250.0);
        assert!(logo.intersects(&overlapping));
        assert!(overlapping.intersects(&logo));

        // Containment counts as overlap.
        let inside = Rect::new(120.0, 120.0, 180.0, 180.0);
        assert!(logo.intersects(&inside));
        assert!(inside.intersects(&logo));

        // Disjoint rectangles do not.
        let apart = Rect::new(300.0, 300.0, 400.0, 400.0);
        assert!(!logo.intersects(&apart));

        // Touching edges do not occlude.
        let touching = Rect::new(200.0, 100.0, 300.0, 200.0);
        assert!(!logo.intersects(&touching));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_rect_roundtrip() {
            let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
            let json = serde_json::to_string(&rect).unwrap();
            let back: Rect = serde_json::from_str(&json).unwrap();
            assert_eq!(rect, back);
        }
    }
}
