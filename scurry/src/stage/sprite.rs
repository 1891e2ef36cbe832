use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::{Point, Rect, Size};

static NEXT_SPRITE_ID: AtomicUsize = AtomicUsize::new(1);

fn next_sprite_id() -> usize {
    NEXT_SPRITE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A single decorative element, owned by exactly one runner.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct Sprite {
    /// Identifier handed to the stage so it can address the element across frames.
    #[cfg_attr(feature = "serde", serde(skip, default = "next_sprite_id"))]
    id: usize,
    /// Source of the image the host surface displays for this sprite.
    image: String,
}

impl Sprite {
    pub fn new<S: Into<String>>(image: S) -> Self {
        Self {
            id: next_sprite_id(),
            image: image.into(),
        }
    }

    pub fn get_id(&self) -> usize {
        self.id
    }

    pub fn get_image(&self) -> &str {
        &self.image
    }
}

impl Display for Sprite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sprite #{} [{}]", self.id, self.image)
    }
}

/// The visual state a stage applies to a sprite on one frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteState {
    /// Top-left corner of the element, in viewport coordinates.
    pub position: Point,
    pub size: Size,
    pub opacity: f32,
    /// Stacking order of the element within the display tree.
    pub z: i32,
}

impl SpriteState {
    /// Bounding box covered by the sprite on this frame.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }
}

impl Default for SpriteState {
    fn default() -> Self {
        Self {
            position: Point::default(),
            size: Size::default(),
            opacity: 1.0,
            z: 0,
        }
    }
}
