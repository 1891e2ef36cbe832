//! Defines mocked entities, for tests mostly.

pub mod clock;
pub mod stage;
