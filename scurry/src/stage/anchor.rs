use log::debug;

use crate::errors::StageError;
use crate::stage::Stage;
use crate::utils::{Point, Rect, Size};

/// Fallback target used whenever no anchor element can be located.
pub const DEFAULT_TARGET: Point = Point::new(0.0, 50.0);

/// Strategy resolving WHERE the characters run to.
///
/// The original incarnations of this effect shipped several disagreeing discovery heuristics
/// (selector guessing, text scanning, hard-coded offsets). The strategy is therefore an explicit
/// value chosen by the caller, never guessed by the runner. Resolution is deterministic and total:
/// a missing element falls back to [`DEFAULT_TARGET`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TargetAnchor {
    /// Run along the default coordinate.
    #[default]
    Default,
    /// Run toward a fixed viewport point.
    Fixed(Point),
    /// Center on the element matching a selector.
    Selector(String),
    /// Center on the element whose text content contains the given needle.
    Content(String),
}

impl TargetAnchor {
    /// Resolves the target point for a sprite of the given size.
    ///
    /// Anchor-relative strategies center the sprite on the matched element:
    /// `rect.top + rect.height / 2 - size.height / 2` vertically, and likewise horizontally.
    pub fn resolve(&self, stage: &dyn Stage, size: Size) -> Point {
        match self {
            TargetAnchor::Default => DEFAULT_TARGET,
            TargetAnchor::Fixed(point) => *point,
            TargetAnchor::Selector(selector) => match stage.anchor_rect(selector) {
                Some(rect) => Self::centered_on(&rect, size),
                None => {
                    debug!(
                        "{}: falling back to the default target",
                        StageError::AnchorNotFound {
                            selector: selector.clone(),
                        }
                    );
                    DEFAULT_TARGET
                }
            },
            TargetAnchor::Content(needle) => match stage.content_rect(needle) {
                Some(rect) => Self::centered_on(&rect, size),
                None => {
                    debug!(
                        "No content matches '{}': falling back to the default target",
                        needle
                    );
                    DEFAULT_TARGET
                }
            },
        }
    }

    /// Top-left corner placing a `size` box on the center of `rect`.
    fn centered_on(rect: &Rect, size: Size) -> Point {
        let center = rect.center();
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::mocks::stage::MockStage;
    use crate::utils::Rect;

    use super::*;

    #[test]
    fn test_default_target() {
        let stage = MockStage::default();
        let target = TargetAnchor::Default.resolve(&stage, Size::uniform(120.0));
        assert_eq!(target, DEFAULT_TARGET);
    }

    #[test]
    fn test_fixed_target() {
        let stage = MockStage::default();
        let target = TargetAnchor::Fixed(Point::new(12.0, 34.0)).resolve(&stage, Size::uniform(120.0));
        assert_eq!(target, Point::new(12.0, 34.0));
    }

    #[test]
    fn test_selector_target_centers_the_sprite() {
        let stage = MockStage::default().with_anchor(".site-logo", Rect::new(540.0, 40.0, 740.0, 140.0));

        // Element center is (640, 90): a 120x120 sprite lands 60 higher and lefter.
        let target =
            TargetAnchor::Selector(String::from(".site-logo")).resolve(&stage, Size::uniform(120.0));
        assert_eq!(target, Point::new(580.0, 30.0));
    }

    #[test]
    fn test_selector_target_falls_back_when_missing() {
        let stage = MockStage::default();
        let target =
            TargetAnchor::Selector(String::from(".site-logo")).resolve(&stage, Size::uniform(120.0));
        assert_eq!(target, DEFAULT_TARGET, "Missing anchors fall back deterministically.");
    }

    #[test]
    fn test_content_target() {
        let stage = MockStage::default().with_content("Welcome", Rect::new(0.0, 200.0, 400.0, 300.0));

        let target =
            TargetAnchor::Content(String::from("Welcome")).resolve(&stage, Size::uniform(100.0));
        assert_eq!(target, Point::new(150.0, 200.0));

        let missing =
            TargetAnchor::Content(String::from("Goodbye")).resolve(&stage, Size::uniform(100.0));
        assert_eq!(missing, DEFAULT_TARGET);
    }
}
