pub use tokio;
pub use tokio::time::sleep;

pub mod events;
pub mod geometry;
pub mod lerp;
pub mod range;
pub mod task;

pub use events::{EventHandler, EventManager};
pub use geometry::{Point, Rect, Size};
pub use lerp::Lerp;
pub use range::Range;
pub use task::TaskHandler;
