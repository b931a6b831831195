//! Simulation engine: the core of the run.
//!
//! `SimulationEngine` owns the track, processes operator commands at tick
//! boundaries, advances the track and produces `TickSnapshot`s. Completely
//! headless (no I/O), enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chargesim_core::commands::OperatorCommand;
use chargesim_core::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use chargesim_core::enums::SimPhase;
use chargesim_core::events::SimEvent;
use chargesim_core::state::TickSnapshot;
use chargesim_core::types::SimTime;

use crate::error::ScenarioResult;
use crate::scenario::Scenario;
use crate::systems;
use crate::track::Track;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for initial placement. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = base cadence).
    pub time_scale: f64,
    /// Events carried per snapshot; extras are dropped.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            max_events: 64,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }
}

/// The simulation engine. Owns the track and all run state.
pub struct SimulationEngine {
    track: Track,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    max_events: usize,
    command_queue: VecDeque<OperatorCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Build the scenario's track from the config seed and wrap it.
    pub fn new(config: SimConfig, scenario: &Scenario) -> ScenarioResult<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let track = world_setup::build_track(scenario, &mut rng)?;
        Ok(Self::from_track(config, track))
    }

    /// Wrap an already populated track.
    pub fn from_track(config: SimConfig, track: Track) -> Self {
        Self {
            track,
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale: config.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE),
            max_events: config.max_events,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// While paused, simulated time stands still but a snapshot is still
    /// produced.
    pub fn tick(&mut self) -> TickSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.track.tick(&mut self.events);
            self.time.advance();
        }

        let mut events = std::mem::take(&mut self.events);
        if events.len() > self.max_events {
            tracing::debug!(dropped = events.len() - self.max_events, "event overflow");
            events.truncate(self.max_events);
        }
        systems::snapshot::build_snapshot(&self.track, self.time, self.phase, self.time_scale, events)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Mutable access for setup between ticks.
    pub fn track_mut(&mut self) -> &mut Track {
        &mut self.track
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::Faster => {
                self.time_scale = (self.time_scale * 2.0).min(MAX_TIME_SCALE);
                tracing::info!(time_scale = self.time_scale, "faster");
            }
            OperatorCommand::Slower => {
                self.time_scale = (self.time_scale / 2.0).max(MIN_TIME_SCALE);
                tracing::info!(time_scale = self.time_scale, "slower");
            }
            OperatorCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            OperatorCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            // Console and loop concerns; nothing to do in the engine.
            OperatorCommand::Help | OperatorCommand::Quit => {}
        }
    }
}
