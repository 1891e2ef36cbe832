use std::fmt::{Display, Formatter};

use crate::animations::Easing;
use crate::stage::SpriteState;
use crate::utils::{Lerp, Point, Size};

/// Default square size of the character images.
pub const DEFAULT_SPRITE_SIZE: f64 = 120.0;

/// The immutable description of one sprite's journey across the stage.
///
/// A `MotionSpec` pins the two endpoints of a run (position, size, opacity), its duration and its
/// easing. It is built from the stage geometry at spawn time, never mutated afterwards, and
/// discarded with its runner. It is also a pure value: [`MotionSpec::sample()`] turns any
/// progress into the matching visual state, which is what makes runners testable frame by frame.
///
/// # Example
/// ```
/// use scurry::animations::{Easing, MotionSpec};
/// use scurry::utils::Point;
///
/// let motion = MotionSpec::new(Point::new(800.0, 50.0), Point::new(-120.0, 50.0), 2500)
///     .set_easing(Easing::CubicOut);
/// assert_eq!(motion.get_duration(), 2500);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSpec {
    /// Top-left position at the start of the run.
    from: Point,
    /// Top-left position at the end of the run.
    to: Point,
    size_from: Size,
    size_to: Size,
    opacity_from: f32,
    opacity_to: f32,
    /// Stacking order, constant over the run.
    z: i32,
    /// Total duration of the run in milliseconds.
    duration: u64,
    /// The easing function applied over the run (default: `Easing::Linear`).
    easing: Easing,
}

impl MotionSpec {
    /// Creates a new `MotionSpec` between two points.<br/>
    /// _Sizes default to [`DEFAULT_SPRITE_SIZE`], opacity to fully visible, easing to linear._
    ///
    /// # Arguments
    /// * `from` - Position at progress 0.
    /// * `to` - Position at progress 1.
    /// * `duration` - Duration of the run in milliseconds.
    ///
    /// # Panics
    /// Panics if the duration is zero or an endpoint is not finite.
    pub fn new(from: Point, to: Point, duration: u64) -> Self {
        assert!(duration > 0, "Motion duration must be greater than zero.");
        assert!(
            from.is_finite() && to.is_finite(),
            "Motion endpoints must be finite."
        );

        Self {
            from,
            to,
            size_from: Size::uniform(DEFAULT_SPRITE_SIZE),
            size_to: Size::uniform(DEFAULT_SPRITE_SIZE),
            opacity_from: 1.0,
            opacity_to: 1.0,
            z: 0,
            duration,
            easing: Easing::default(),
        }
    }

    /// Computes the visual state of the journey at the given progress.
    ///
    /// Progress is clamped to [0, 1] then remapped by the easing function; position, size and
    /// opacity are linearly interpolated with the eased value. A finished run lands on the end
    /// values exactly: no interpolation drift survives progress 1.
    pub fn sample(&self, progress: f32) -> SpriteState {
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return SpriteState {
                position: self.to,
                size: self.size_to,
                opacity: self.opacity_to,
                z: self.z,
            };
        }

        let eased = self.easing.call(progress);
        SpriteState {
            position: self.from.lerp(self.to, eased),
            size: self.size_from.lerp(self.size_to, eased),
            opacity: self.opacity_from.lerp(self.opacity_to, eased),
            z: self.z,
        }
    }

    pub fn get_from(&self) -> Point {
        self.from
    }

    pub fn get_to(&self) -> Point {
        self.to
    }

    pub fn get_duration(&self) -> u64 {
        self.duration
    }

    pub fn get_easing(&self) -> Easing {
        self.easing
    }

    pub fn get_z(&self) -> i32 {
        self.z
    }

    /// Sets a new easing function for the run.
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the sprite size at both endpoints of the run.
    ///
    /// # Panics
    /// Panics if a size is not finite.
    pub fn set_sizes(mut self, from: Size, to: Size) -> Self {
        assert!(from.is_finite() && to.is_finite(), "Motion sizes must be finite.");
        self.size_from = from;
        self.size_to = to;
        self
    }

    /// Sets the opacity at both endpoints of the run.
    pub fn set_opacity(mut self, from: f32, to: f32) -> Self {
        self.opacity_from = from;
        self.opacity_to = to;
        self
    }

    /// Sets the stacking order of the sprite over the run.
    pub fn set_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

impl Display for MotionSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Motion {} -> {} over {}ms [easing={:?}]",
            self.from, self.to, self.duration, self.easing
        )
    }
}
