//! Defines the display surface seam between runners and the host page.

use std::fmt::Debug;

use crate::errors::Error;
use crate::utils::{Rect, Size};

mod anchor;
mod sprite;

pub use anchor::{TargetAnchor, DEFAULT_TARGET};
pub use sprite::{Sprite, SpriteState};

/// A host display surface onto which sprites are staged.
///
/// Implementations wrap whatever display tree the effect runs on: a browser document, a compositor
/// layer, a terminal, a test double. Runners only ever touch the surface through this trait, which
/// keeps them drivable with synthetic geometry in tests.
///
/// Geometry queries return rectangles in viewport coordinates, or `None` when no element matches.
pub trait Stage: Debug + Send + Sync {
    /// Current viewport dimensions.
    fn viewport(&self) -> Size;

    /// Creates the visual element for `sprite` with its initial state.
    ///
    /// A failed asset load is reported as an error; callers are expected to log it and keep
    /// animating the (visually empty) element.
    fn attach(&self, sprite: &Sprite, state: &SpriteState) -> Result<(), Error>;

    /// Applies one frame state to a previously attached sprite.
    fn render(&self, sprite: &Sprite, state: &SpriteState) -> Result<(), Error>;

    /// Removes the sprite's element from the display tree.
    fn detach(&self, sprite: &Sprite) -> Result<(), Error>;

    /// Bounding rectangle of the first element matching `selector`, if any.
    fn anchor_rect(&self, selector: &str) -> Option<Rect>;

    /// Bounding rectangle of the first element whose text content contains `text`, if any.
    fn content_rect(&self, text: &str) -> Option<Rect>;
}
