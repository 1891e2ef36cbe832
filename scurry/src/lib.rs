#![doc(html_root_url = "https://docs.rs/scurry/0.1.0")]

//! <h1 align="center">SCURRY - Decorative sprite runs for any display surface</h1>
//! <div style="text-align:center;font-style:italic;">Scurry animates little character images across a page toward an anchor element - written in Rust.</div>
//! <br/>
//!
//! # Documentation
//!
//! This is the API documentation.<br/>
//! To see the code in action, visit the [demos](https://github.com/scurry-rs/scurry/tree/main/scurry/demos) directory.
//!
//! # Features
//!
//! **Scurry** is a Rust library that drives decorative "character run" animations: sprites spawn at
//! one edge of a viewport and run toward a target anchor, with position, size and opacity
//! interpolated every frame.
//!
//! - Describe one journey as an immutable [`MotionSpec`](animations::MotionSpec) (endpoints, sizes,
//!   opacity, duration, easing)
//! - Play it with a [`Runner`](animations::Runner): one sprite, one cooperative frame loop, one
//!   `complete` event
//! - Choreograph a cast of characters with a [`Sequence`](animations::Sequence): staggered spawns,
//!   per-character overrides, injectable target-discovery policy
//! - Plug any display tree behind the [`Stage`](stage::Stage) trait; drive tests with the mocked
//!   stage and a synthetic frame clock
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! scurry = "0.1.0"
//! ```
//!
//! - Implement [`Stage`](stage::Stage) for your display surface and start a run:
//! ```no_run
//! use std::sync::Arc;
//!
//! use scurry::animations::{Easing, MotionSpec, Runner, RunnerEvent};
//! use scurry::errors::Error;
//! use scurry::stage::{Sprite, SpriteState, Stage};
//! use scurry::utils::{Point, Rect, Size};
//!
//! /// Prints every frame instead of touching a real display tree.
//! #[derive(Debug)]
//! struct Console;
//!
//! impl Stage for Console {
//!     fn viewport(&self) -> Size {
//!         Size::new(1280.0, 720.0)
//!     }
//!     fn attach(&self, _: &Sprite, _: &SpriteState) -> Result<(), Error> {
//!         Ok(())
//!     }
//!     fn render(&self, sprite: &Sprite, state: &SpriteState) -> Result<(), Error> {
//!         println!("{} at {}", sprite, state.position);
//!         Ok(())
//!     }
//!     fn detach(&self, _: &Sprite) -> Result<(), Error> {
//!         Ok(())
//!     }
//!     fn anchor_rect(&self, _: &str) -> Option<Rect> {
//!         None
//!     }
//!     fn content_rect(&self, _: &str) -> Option<Rect> {
//!         None
//!     }
//! }
//!
//! #[scurry::runtime]
//! async fn main() {
//!     let stage = Arc::new(Console);
//!
//!     let motion = MotionSpec::new(Point::new(1400.0, 50.0), Point::new(-120.0, 50.0), 2500)
//!         .set_easing(Easing::QuadInOut);
//!     let mut runner = Runner::new(stage, Sprite::new("images/fox.png"), motion);
//!
//!     runner.on(RunnerEvent::OnComplete, |runner: Runner| async move {
//!         println!("{} is done", runner.get_sprite());
//!         Ok(())
//!     });
//!     runner.play();
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for the declarative entities
//!   (motions, sequences, geometry).
//! - **mocks** -- Provides mocked entities of all kinds (useful for tests mostly).

#[cfg(test)]
extern crate self as scurry;

pub mod animations;
pub mod errors;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod stage;
pub mod utils;

pub use scurry_macros::runtime;
