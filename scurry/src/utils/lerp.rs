use crate::utils::{Point, Size};

/// Trait for linear interpolation between two values of the same type.
pub trait Lerp {
    /// Interpolates from `self` toward `end` by factor `t`.
    ///
    /// `t` is the (eased) progress of an animation; easing functions may
    /// briefly push it outside [0, 1], in which case the value overshoots
    /// accordingly.
    fn lerp(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for f64 {
    fn lerp(self, end: Self, t: f32) -> Self {
        self + (end - self) * f64::from(t)
    }
}

impl Lerp for Point {
    fn lerp(self, end: Self, t: f32) -> Self {
        Point::new(self.x.lerp(end.x, t), self.y.lerp(end.y, t))
    }
}

impl Lerp for Size {
    fn lerp(self, end: Self, t: f32) -> Self {
        Size::new(self.width.lerp(end.width, t), self.height.lerp(end.height, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_f64() {
        assert_eq!(0.0f64.lerp(100.0, 0.0), 0.0);
        assert_eq!(0.0f64.lerp(100.0, 0.5), 50.0);
        assert_eq!(0.0f64.lerp(100.0, 1.0), 100.0);

        // Descending spans interpolate the same way.
        assert_eq!(100.0f64.lerp(0.0, 0.25), 75.0);
    }

    #[test]
    fn test_lerp_overshoot() {
        // An easing overshoot (t > 1) goes past the end value.
        assert!(0.0f64.lerp(100.0, 1.1) > 100.0);
        // And a negative factor backs off before the start.
        assert!(0.0f64.lerp(100.0, -0.1) < 0.0);
    }

    #[test]
    fn test_lerp_point() {
        let from = Point::new(800.0, 50.0);
        let to = Point::new(-120.0, 50.0);
        assert_eq!(from.lerp(to, 0.5), Point::new(340.0, 50.0));
        assert_eq!(from.lerp(to, 0.0), from);
    }

    #[test]
    fn test_lerp_size() {
        let from = Size::uniform(120.0);
        let to = Size::uniform(60.0);
        assert_eq!(from.lerp(to, 0.5), Size::uniform(90.0));
    }
}
