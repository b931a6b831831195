//! Per-tick systems run by the track.
//!
//! Systems are pure functions over the entity slice and its parallel angle
//! array. They do not own state; all state lives on the track.

pub mod hints;
pub mod movement;
pub mod snapshot;
