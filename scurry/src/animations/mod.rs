//! Defines the animation runner: interpolates sprite position, size and opacity between the
//! endpoints of a motion spec, frame by frame, until the run completes.

mod clock;
mod easing;
mod motion;
mod runner;
mod sequence;

pub use clock::{FrameClock, TokioClock};
pub use easing::Easing;
pub use motion::{MotionSpec, DEFAULT_SPRITE_SIZE};
pub use runner::{Completion, Runner, RunnerEvent};
pub use sequence::{
    Character, Direction, Sequence, SequenceConfig, DEFAULT_INITIAL_DELAY, DEFAULT_RUN_DURATION,
    DEFAULT_STAGGER_DELAY,
};
