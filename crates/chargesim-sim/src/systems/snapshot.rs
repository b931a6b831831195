//! Snapshot system: reads the track and builds a complete TickSnapshot.
//!
//! Read-only. Runs once per tick, after every mutation of that tick.

use chargesim_core::enums::SimPhase;
use chargesim_core::events::SimEvent;
use chargesim_core::state::TickSnapshot;
use chargesim_core::types::SimTime;

use crate::track::Track;

/// Build the snapshot for the current track state. The track's own record
/// comes first, then every entity in track order.
pub fn build_snapshot(
    track: &Track,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    events: Vec<SimEvent>,
) -> TickSnapshot {
    TickSnapshot {
        time,
        phase,
        time_scale,
        entities: track.render(),
        events,
    }
}
