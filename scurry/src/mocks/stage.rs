use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::{AssetError, Error, StageError};
use crate::stage::{Sprite, SpriteState, Stage};
use crate::utils::{Rect, Size};

/// Mock [`Stage`] for testing purposes: records every lifecycle call so tests can assert on the
/// exact frames a runner produced, and serves configurable anchor/content geometry.
#[derive(Clone, Debug)]
pub struct MockStage {
    inner: Arc<RwLock<MockStageInner>>,
}

#[derive(Debug)]
struct MockStageInner {
    viewport: Size,
    anchors: HashMap<String, Rect>,
    content: HashMap<String, Rect>,
    fail_attach: bool,
    attached: Vec<usize>,
    detached: Vec<usize>,
    frames: HashMap<usize, Vec<SpriteState>>,
}

impl MockStage {
    pub fn new(viewport: Size) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockStageInner {
                viewport,
                anchors: HashMap::new(),
                content: HashMap::new(),
                fail_attach: false,
                attached: vec![],
                detached: vec![],
                frames: HashMap::new(),
            })),
        }
    }

    /// Registers an element rectangle for a selector query.
    pub fn with_anchor<S: Into<String>>(self, selector: S, rect: Rect) -> Self {
        self.inner.write().anchors.insert(selector.into(), rect);
        self
    }

    /// Registers an element rectangle for a text-content query.
    pub fn with_content<S: Into<String>>(self, text: S, rect: Rect) -> Self {
        self.inner.write().content.insert(text.into(), rect);
        self
    }

    /// Makes subsequent attaches fail as if the sprite's asset could not be loaded.
    pub fn set_fail_attach(&self, fail: bool) {
        self.inner.write().fail_attach = fail;
    }

    /// Indicates whether the sprite currently sits in the display tree.
    pub fn is_attached(&self, id: usize) -> bool {
        let inner = self.inner.read();
        inner.attached.contains(&id) && !inner.detached.contains(&id)
    }

    /// Number of times the sprite was attached.
    pub fn attach_count(&self, id: usize) -> usize {
        self.inner
            .read()
            .attached
            .iter()
            .filter(|&&attached| attached == id)
            .count()
    }

    /// Number of times the sprite was detached.
    pub fn detach_count(&self, id: usize) -> usize {
        self.inner
            .read()
            .detached
            .iter()
            .filter(|&&detached| detached == id)
            .count()
    }

    /// Every state applied to the sprite, attach state included, in order.
    pub fn frames_for(&self, id: usize) -> Vec<SpriteState> {
        self.inner.read().frames.get(&id).cloned().unwrap_or_default()
    }
}

impl Default for MockStage {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 720.0))
    }
}

impl Stage for MockStage {
    fn viewport(&self) -> Size {
        self.inner.read().viewport
    }

    fn attach(&self, sprite: &Sprite, state: &SpriteState) -> Result<(), Error> {
        let mut inner = self.inner.write();
        // The element always enters the tree; only its asset may fail to load.
        inner.attached.push(sprite.get_id());
        inner.frames.entry(sprite.get_id()).or_default().push(*state);

        match inner.fail_attach {
            true => Err(AssetError::LoadFailed {
                src: sprite.get_image().into(),
                info: String::from("mocked load failure"),
            }
            .into()),
            false => Ok(()),
        }
    }

    fn render(&self, sprite: &Sprite, state: &SpriteState) -> Result<(), Error> {
        let mut inner = self.inner.write();
        if !inner.attached.contains(&sprite.get_id()) {
            return Err(StageError::NotAttached {
                id: sprite.get_id(),
            }
            .into());
        }
        inner.frames.entry(sprite.get_id()).or_default().push(*state);
        Ok(())
    }

    fn detach(&self, sprite: &Sprite) -> Result<(), Error> {
        let mut inner = self.inner.write();
        if !inner.attached.contains(&sprite.get_id()) {
            return Err(StageError::NotAttached {
                id: sprite.get_id(),
            }
            .into());
        }
        inner.detached.push(sprite.get_id());
        Ok(())
    }

    fn anchor_rect(&self, selector: &str) -> Option<Rect> {
        self.inner.read().anchors.get(selector).copied()
    }

    fn content_rect(&self, text: &str) -> Option<Rect> {
        let inner = self.inner.read();
        inner
            .content
            .iter()
            .find(|(key, _)| key.contains(text))
            .map(|(_, rect)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::Point;

    use super::*;

    #[test]
    fn test_mock_stage_records_lifecycle() {
        let stage = MockStage::default();
        let sprite = Sprite::new("images/fox.png");
        let state = SpriteState {
            position: Point::new(1.0, 2.0),
            ..Default::default()
        };

        assert!(!stage.is_attached(sprite.get_id()));
        assert!(stage.render(&sprite, &state).is_err(), "Rendering requires an attach first.");

        stage.attach(&sprite, &state).unwrap();
        assert!(stage.is_attached(sprite.get_id()));

        stage.render(&sprite, &state).unwrap();
        assert_eq!(stage.frames_for(sprite.get_id()).len(), 2);

        stage.detach(&sprite).unwrap();
        assert!(!stage.is_attached(sprite.get_id()));
        assert_eq!(stage.detach_count(sprite.get_id()), 1);
    }

    #[test]
    fn test_mock_stage_failing_attach() {
        let stage = MockStage::default();
        stage.set_fail_attach(true);

        let sprite = Sprite::new("images/broken.png");
        let result = stage.attach(&sprite, &SpriteState::default());
        assert!(result.is_err());
        // The element exists anyway, it just has no image.
        assert!(stage.is_attached(sprite.get_id()));
    }

    #[test]
    fn test_mock_stage_geometry_queries() {
        let stage = MockStage::new(Size::new(800.0, 600.0))
            .with_anchor(".site-logo", Rect::new(0.0, 0.0, 100.0, 50.0))
            .with_content("Welcome home", Rect::new(10.0, 10.0, 20.0, 20.0));

        assert_eq!(stage.viewport(), Size::new(800.0, 600.0));
        assert!(stage.anchor_rect(".site-logo").is_some());
        assert!(stage.anchor_rect(".nope").is_none());
        assert!(stage.content_rect("Welcome").is_some(), "Content queries match substrings.");
        assert!(stage.content_rect("Goodbye").is_none());
    }
}
