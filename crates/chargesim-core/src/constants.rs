//! Simulation constants and tuning parameters.

/// One full revolution in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;

// --- Charge ---

/// Full battery.
pub const CHARGE_MAX: f64 = 100.0;

/// Below this charge a vehicle is flat and claims no range.
pub const FLAT_THRESHOLD: f64 = 0.1;

/// Charge consumed per tick is `|velocity| / CONSUMPTION_DIVISOR`.
pub const CONSUMPTION_DIVISOR: f64 = 5.0;

/// Charge added per tick while at the head of a charger queue.
pub const CHARGE_RATE: f64 = 1.0;

// --- Speed ---

/// Speeds below this count as stopped for range purposes.
pub const STALL_SPEED: f64 = 0.1;

/// Eco mode never lets speed drop below this.
pub const ECO_FLOOR: f64 = 0.4;

/// Eco mode decays speeds above this.
pub const ECO_CEILING: f64 = 1.0;

/// Multiplicative decay applied by eco mode above the ceiling.
pub const ECO_DECAY: f64 = 0.9;

/// Multiplicative acceleration per tick while the nearest charger is in range.
pub const CRUISE_ACCEL: f64 = 1.01;

/// Initial speed is drawn from `[INITIAL_SPEED_MIN, INITIAL_SPEED_MAX)`.
pub const INITIAL_SPEED_MIN: f64 = 0.5;
pub const INITIAL_SPEED_MAX: f64 = 1.5;

// --- Chargers ---

/// Arc distance under which a diverting vehicle joins the charger queue.
pub const ARRIVAL_DISTANCE: f64 = 1.0;

/// Maximum vehicles held by one charger queue.
pub const CHARGER_QUEUE_CAPACITY: usize = 3;

/// Display color of every charger.
pub const CHARGER_COLOR: &str = "#00ff00";

// --- Engine ---

/// Time scale bounds for the operator faster/slower commands.
pub const MIN_TIME_SCALE: f64 = 0.125;
pub const MAX_TIME_SCALE: f64 = 8.0;

/// Base tick cadence at 1x speed, in milliseconds.
pub const BASE_TICK_MS: u64 = 250;
