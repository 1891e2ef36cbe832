use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use crate::animations::{FrameClock, MotionSpec, TokioClock};
use crate::errors::Error;
use crate::stage::{Sprite, SpriteState, Stage};
use crate::utils::{task, EventHandler, EventManager, Rect, TaskHandler};

/// Lists all events a Runner can emit/listen.
pub enum RunnerEvent {
    /// Triggered when the run starts.
    OnStart,
    /// Triggered when the run completes (never on cancellation).
    OnComplete,
}

/// Convert events to string to facilitate usage with [`EventManager`].
impl From<RunnerEvent> for String {
    fn from(event: RunnerEvent) -> Self {
        let event = match event {
            RunnerEvent::OnStart => "start",
            RunnerEvent::OnComplete => "complete",
        };
        event.into()
    }
}

/// What happens to the sprite once its run reaches the end.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Completion {
    /// Remove the sprite from the stage (default).
    #[default]
    Detach,
    /// Leave the sprite attached, frozen on its final frame.
    Freeze,
}

/// Drives one sprite through one [`MotionSpec`], frame by frame, to completion.
///
/// - A runner owns exactly one sprite and runs independently of every other runner: the only
///   shared data it touches is the optional obstacle rectangle, and only to read it.
/// - Each frame, the elapsed time read from the [`FrameClock`] is turned into a progress in
///   [0, 1], eased, interpolated, and the resulting [`SpriteState`] is pushed to the stage.
/// - Progress never moves backward and completion fires exactly once; [`Runner::stop()`] cancels
///   the loop without completing it and detaches the sprite immediately.
/// - While the frame's bounding box overlaps the obstacle rectangle, the frame is rendered fully
///   transparent regardless of the interpolated opacity.
///
/// Stage failures are diagnostics, not errors: a sprite whose asset cannot load still runs its
/// journey, visually empty.
#[derive(Clone, Debug)]
pub struct Runner {
    /// The sprite this runner owns.
    sprite: Sprite,
    /// The journey to run.
    motion: MotionSpec,
    /// Frame rate driving the loop (default: 60).
    fps: u8,
    /// Region occluding the sprite while overlapped.
    obstacle: Option<Rect>,
    /// What to do with the sprite at the end of the run.
    completion: Completion,
    /// The display surface frames are pushed to.
    stage: Arc<dyn Stage>,
    /// The scheduling primitive the loop yields on.
    clock: Box<dyn FrameClock>,

    // ########################################
    // # Volatile utility data.
    /// Ratcheted progress of the run, in [0, 1].
    progress: Arc<RwLock<f32>>,
    /// Inner handler to the task running the frame loop.
    interval: Arc<RwLock<Option<TaskHandler>>>,
    /// The event manager for the runner.
    events: EventManager,
}

impl Runner {
    pub fn new(stage: Arc<dyn Stage>, sprite: Sprite, motion: MotionSpec) -> Self {
        Self {
            sprite,
            motion,
            fps: 60,
            obstacle: None,
            completion: Completion::default(),
            stage,
            clock: Box::new(TokioClock::default()),
            progress: Arc::new(RwLock::new(0.0)),
            interval: Arc::new(RwLock::new(None)),
            events: Default::default(),
        }
    }

    /// Starts the run.
    ///
    /// The sprite is attached at its start state, then advanced every frame until progress
    /// reaches 1. Calling `play()` on a runner that is already running is a no-op.
    pub fn play(&mut self) -> &mut Self {
        if self.is_running() {
            return self;
        }

        let events_clone = self.events.clone();
        let self_clone = self.clone();

        self.events.emit(RunnerEvent::OnStart, self.clone());
        let handler = task::run(async move {
            // The element enters the display tree on its exact start state.
            let first = self_clone.frame_at(0.0);
            if let Err(err) = self_clone.stage.attach(&self_clone.sprite, &first) {
                // Asset failures are not fatal: the empty element still runs.
                warn!("{} could not be staged: {}", self_clone.sprite, err);
            }

            let origin = self_clone.clock.now();
            loop {
                self_clone.clock.tick(self_clone.fps).await;
                let elapsed = self_clone.clock.now().saturating_sub(origin);
                let state = self_clone.advance(elapsed);
                if let Err(err) = self_clone.stage.render(&self_clone.sprite, &state) {
                    warn!("{} could not be rendered: {}", self_clone.sprite, err);
                }
                if self_clone.get_progress() >= 1.0 {
                    break;
                }
            }

            if self_clone.completion == Completion::Detach {
                if let Err(err) = self_clone.stage.detach(&self_clone.sprite) {
                    warn!("{} could not be detached: {}", self_clone.sprite, err);
                }
            }

            events_clone.emit(RunnerEvent::OnComplete, self_clone);
            Ok(())
        })
        .unwrap();
        *self.interval.write() = Some(handler);

        self
    }

    /// Cancels the run.
    ///
    /// The frame loop stops being rescheduled, the sprite leaves the stage immediately, and no
    /// completion event is emitted.
    pub fn stop(&mut self) -> &mut Self {
        if self.cancel_run() {
            if let Err(err) = self.stage.detach(&self.sprite) {
                warn!("{} could not be detached: {}", self.sprite, err);
            }
        }
        *self.progress.write() = 0.0;
        self
    }

    /// Indicates if the runner is currently playing.
    pub fn is_running(&self) -> bool {
        self.interval
            .read()
            .as_ref()
            .is_some_and(|handler| !handler.is_finished())
    }

    /// Gets the current progress of the run, in [0, 1].
    pub fn get_progress(&self) -> f32 {
        *self.progress.read()
    }

    /// Computes the visual state at the given progress, occlusion override included.
    pub fn frame_at(&self, progress: f32) -> SpriteState {
        let mut state = self.motion.sample(progress);
        if let Some(obstacle) = &self.obstacle {
            if state.bounds().intersects(obstacle) {
                state.opacity = 0.0;
            }
        }
        state
    }

    /// Computes the frame for the given elapsed time, ratcheting progress so it never moves
    /// backward even if the clock stalls or jitters.
    fn advance(&self, elapsed: u64) -> SpriteState {
        let raw = (elapsed as f32 / self.motion.get_duration() as f32).clamp(0.0, 1.0);
        let progress = {
            let mut lock = self.progress.write();
            *lock = lock.max(raw);
            *lock
        };
        self.frame_at(progress)
    }

    /// Inner helper: cancel the frame task and return a flag indicating if it was running.
    fn cancel_run(&mut self) -> bool {
        let was_running = match self.interval.read().as_ref() {
            None => false,
            Some(handler) => {
                let live = !handler.is_finished();
                handler.abort();
                live
            }
        };
        *self.interval.write() = None;
        was_running
    }

    /// Returns the sprite owned by this runner.
    pub fn get_sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Returns the motion this runner plays.
    pub fn get_motion(&self) -> &MotionSpec {
        &self.motion
    }

    pub fn get_fps(&self) -> u8 {
        self.fps
    }

    pub fn set_fps(mut self, fps: u8) -> Self {
        self.fps = fps;
        self
    }

    pub fn get_obstacle(&self) -> Option<Rect> {
        self.obstacle
    }

    /// Sets the region occluding the sprite while their bounding boxes overlap.
    pub fn set_obstacle(mut self, obstacle: Option<Rect>) -> Self {
        self.obstacle = obstacle;
        self
    }

    pub fn get_completion(&self) -> Completion {
        self.completion
    }

    pub fn set_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Swaps the scheduling primitive driving the frame loop.
    ///
    /// Used by tests (and sequences) to inject a synthetic clock.
    pub fn set_clock(mut self, clock: Box<dyn FrameClock>) -> Self {
        self.clock = clock;
        self
    }

    // ########################################
    // Event related functions

    /// Registers a callback to be executed on a given event.
    ///
    /// Available events for a runner are defined by the enum [`RunnerEvent`]:
    /// - **`OnStart` | `start`**: Triggered when the run starts.
    ///    _The callback must receive the following parameter: `|_: Runner| { ... }`_
    /// - **`OnComplete` | `complete`**: Triggered when the run completes.
    ///    _The callback must receive the following parameter: `|_: Runner| { ... }`_
    pub fn on<S, F, T, Fut>(&self, event: S, callback: F) -> EventHandler
    where
        S: Into<String>,
        T: 'static + Send + Sync + Clone,
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), Error>> + Send + 'static,
    {
        self.events.on(event, callback)
    }
}

impl Display for Runner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Runner [sprite={}, duration={}ms, fps={}]",
            self.sprite,
            self.motion.get_duration(),
            self.fps
        )
    }
}
