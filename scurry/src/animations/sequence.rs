use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::animations::motion::DEFAULT_SPRITE_SIZE;
use crate::errors::StageError;
use crate::animations::{Completion, Easing, FrameClock, MotionSpec, Runner, TokioClock};
use crate::pause;
use crate::stage::{Sprite, Stage, TargetAnchor};
use crate::utils::{task, Point, Range, Size, TaskHandler};

/// Default delay before the first character spawns.
pub const DEFAULT_INITIAL_DELAY: u64 = 3000;
/// Default delay between two consecutive character spawns.
pub const DEFAULT_STAGGER_DELAY: u64 = 400;
/// Default duration of one run.
pub const DEFAULT_RUN_DURATION: u64 = 2500;

/// Which way the characters cross the stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Direction {
    /// Spawn past the right edge, run off the left edge (default).
    #[default]
    RightToLeft,
    /// Spawn past the left edge, run off the right edge.
    LeftToRight,
}

/// One entry of the cast: an image plus its per-character overrides.
///
/// Characters are the declarative side of a sequence: everything a run needs that is not derived
/// from the stage geometry lives either here or in the [`SequenceConfig`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    /// Source of the image displayed for this character.
    image: String,
    /// Vertical offset from the resolved target lane.
    lane: f64,
    /// Duration override for this character, sampled at spawn time.
    duration: Option<Range<u64>>,
    /// Easing override for this character.
    easing: Option<Easing>,
}

impl Character {
    pub fn new<S: Into<String>>(image: S) -> Self {
        Self {
            image: image.into(),
            lane: 0.0,
            duration: None,
            easing: None,
        }
    }

    pub fn get_image(&self) -> &str {
        &self.image
    }

    pub fn get_lane(&self) -> f64 {
        self.lane
    }

    pub fn get_duration(&self) -> Option<Range<u64>> {
        self.duration
    }

    pub fn get_easing(&self) -> Option<Easing> {
        self.easing
    }

    /// Offsets this character's run vertically from the resolved target.
    pub fn set_lane(mut self, lane: f64) -> Self {
        self.lane = lane;
        self
    }

    /// Overrides the sequence duration for this character. Accepts a fixed value or a
    /// `[min, max]` span sampled at spawn time.
    pub fn set_duration<R: Into<Range<u64>>>(mut self, duration: R) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Overrides the sequence easing for this character.
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// The recognized options of a sequence.
///
/// Field for field, these are the knobs the decorative effect exposes: spawn timing, sizing,
/// easing, travel direction, target discovery and the optional occluding element.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceConfig {
    /// Delay (ms) before the first spawn.
    pub initial_delay: u64,
    /// Delay (ms) added between consecutive spawns.
    pub stagger: u64,
    /// Run duration (ms), sampled per character when the span is not fixed.
    pub duration: Range<u64>,
    /// Sprite size at the start of a run.
    pub size: Size,
    /// Sprite size at the end of a run (defaults to `size`).
    pub end_size: Option<Size>,
    /// Easing applied to every run unless a character overrides it.
    pub easing: Easing,
    /// Which way the characters travel.
    pub direction: Direction,
    /// Where the characters run to.
    pub target: TargetAnchor,
    /// Selector of the element occluding sprites while overlapped, if any.
    pub occlusion: Option<String>,
    /// What happens to sprites when their run completes.
    pub completion: Completion,
    /// Frame rate of the runner loops.
    pub fps: u8,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            stagger: DEFAULT_STAGGER_DELAY,
            duration: Range::fixed(DEFAULT_RUN_DURATION),
            size: Size::uniform(DEFAULT_SPRITE_SIZE),
            end_size: None,
            easing: Easing::default(),
            direction: Direction::default(),
            target: TargetAnchor::default(),
            occlusion: None,
            completion: Completion::default(),
            fps: 60,
        }
    }
}

/// The sequencer: an explicit controller spawning one [`Runner`] per cast character with
/// staggered start delays.
///
/// A sequence resolves the target point and the obstacle region ONCE when started; after that,
/// every runner is on its own. There is no coordination between runners and no completion
/// tracking across them: stopping the controller simply cancels what is still pending or running.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
///
/// use scurry::animations::{Character, Sequence, SequenceConfig};
/// use scurry::stage::TargetAnchor;
/// # use scurry::errors::Error;
/// # use scurry::stage::{Sprite, SpriteState, Stage};
/// # use scurry::utils::{Point, Rect, Size};
/// # #[derive(Debug)]
/// # struct Console;
/// # impl Stage for Console {
/// #     fn viewport(&self) -> Size { Size::new(1280.0, 720.0) }
/// #     fn attach(&self, _: &Sprite, _: &SpriteState) -> Result<(), Error> { Ok(()) }
/// #     fn render(&self, _: &Sprite, _: &SpriteState) -> Result<(), Error> { Ok(()) }
/// #     fn detach(&self, _: &Sprite) -> Result<(), Error> { Ok(()) }
/// #     fn anchor_rect(&self, _: &str) -> Option<Rect> { None }
/// #     fn content_rect(&self, _: &str) -> Option<Rect> { None }
/// # }
///
/// #[scurry::runtime]
/// async fn main() {
///     let stage = Arc::new(Console);
///
///     let mut sequence = Sequence::new(stage)
///         .set_config(SequenceConfig {
///             target: TargetAnchor::Selector(String::from(".site-logo")),
///             ..Default::default()
///         })
///         .with_character(Character::new("images/fox.png").set_lane(-40.0))
///         .with_character(Character::new("images/hare.png"))
///         .with_character(Character::new("images/hedgehog.png").set_lane(40.0));
///
///     sequence.start();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Sequence {
    /// The cast, spawned in order.
    characters: Vec<Character>,
    config: SequenceConfig,
    stage: Arc<dyn Stage>,
    /// The clock handed to every runner.
    clock: Box<dyn FrameClock>,

    // ########################################
    // # Volatile utility data.
    /// Runners built by `start()`, kept so the controller can stop them.
    runners: Arc<RwLock<Vec<Runner>>>,
    /// Handlers of the pending stagger tasks.
    pending: Arc<RwLock<Vec<TaskHandler>>>,
}

impl Sequence {
    pub fn new(stage: Arc<dyn Stage>) -> Self {
        Self {
            characters: vec![],
            config: SequenceConfig::default(),
            stage,
            clock: Box::new(TokioClock::default()),
            runners: Arc::new(RwLock::new(vec![])),
            pending: Arc::new(RwLock::new(vec![])),
        }
    }

    /// Starts the sequence.
    ///
    /// The target point and the obstacle region are resolved once, then character i is scheduled
    /// to spawn after `initial_delay + stagger * i` milliseconds.
    pub fn start(&mut self) -> &mut Self {
        let viewport = self.stage.viewport();
        let target = self.config.target.resolve(self.stage.as_ref(), self.config.size);
        let obstacle = self.config.occlusion.as_deref().and_then(|selector| {
            let rect = self.stage.anchor_rect(selector);
            if rect.is_none() {
                debug!(
                    "{}: the sprites will stay visible",
                    StageError::AnchorNotFound {
                        selector: selector.into(),
                    }
                );
            }
            rect
        });

        for (index, character) in self.characters.clone().into_iter().enumerate() {
            let motion = self.motion_for(&character, target, viewport);
            let mut runner = Runner::new(
                self.stage.clone(),
                Sprite::new(character.get_image()),
                motion,
            )
            .set_fps(self.config.fps)
            .set_obstacle(obstacle)
            .set_completion(self.config.completion)
            .set_clock(self.clock.clone());

            let delay = self.config.initial_delay + self.config.stagger * index as u64;
            self.runners.write().push(runner.clone());
            let handler = task::run(async move {
                pause!(delay);
                runner.play();
                Ok(())
            })
            .unwrap();
            self.pending.write().push(handler);
        }

        self
    }

    /// Stops the sequence.
    ///
    /// Pending spawns are cancelled and running sprites leave the stage immediately.
    pub fn stop(&mut self) -> &mut Self {
        for handler in self.pending.write().drain(..) {
            handler.abort();
        }
        for runner in self.runners.write().iter_mut() {
            runner.stop();
        }
        self
    }

    /// Indicates if any spawn is still pending or any runner still playing.
    pub fn is_running(&self) -> bool {
        self.pending.read().iter().any(|handler| !handler.is_finished())
            || self.runners.read().iter().any(Runner::is_running)
    }

    /// Returns the runners built by the last `start()`.
    pub fn get_runners(&self) -> Vec<Runner> {
        self.runners.read().clone()
    }

    /// Returns the cast of the sequence.
    pub fn get_characters(&self) -> &Vec<Character> {
        &self.characters
    }

    pub fn get_config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn set_config(mut self, config: SequenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a new character to the cast.
    ///
    /// This character will spawn after all previously added ones.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Swaps the clock handed to every runner (used by tests to inject synthetic time).
    pub fn set_clock(mut self, clock: Box<dyn FrameClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the journey of one character from the stage geometry: off-screen edge to opposite
    /// off-screen edge, along the target lane.
    fn motion_for(&self, character: &Character, target: Point, viewport: Size) -> MotionSpec {
        let size = self.config.size;
        let end_size = self.config.end_size.unwrap_or(size);
        let y = target.y + character.get_lane();
        let (start_x, end_x) = match self.config.direction {
            Direction::RightToLeft => (viewport.width + size.width, -size.width),
            Direction::LeftToRight => (-size.width, viewport.width + size.width),
        };
        let duration = character
            .get_duration()
            .unwrap_or(self.config.duration)
            .pick();
        let easing = character.get_easing().unwrap_or(self.config.easing);

        MotionSpec::new(Point::new(start_x, y), Point::new(end_x, y), duration)
            .set_sizes(size, end_size)
            .set_easing(easing)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Sequence [characters={}, initial_delay={}ms, stagger={}ms]",
            self.characters.len(),
            self.config.initial_delay,
            self.config.stagger
        )?;
        for character in &self.characters {
            writeln!(
                f,
                "  Character [image={}, lane={}]",
                character.get_image(),
                character.get_lane()
            )?;
        }
        write!(f, "")
    }
}
