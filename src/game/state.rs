//! Pure game-state model and per-tick update logic.
//!
//! Everything in this module is plain Rust with no browser dependency so it
//! can be exercised by native `cargo test` on the host. The wasm glue in the
//! parent module owns the animation-frame loop and feeds timestamps / input
//! into these functions.

// --- Playfield constants ------------------------------------------------------

/// Logical canvas size; all coordinates live in this fixed space.
pub const CANVAS_WIDTH: f64 = 300.0;
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Center of the stem the ant climbs.
pub const STEM_X: f64 = 150.0;

/// The two lane x positions the ant can occupy (also thorn tip positions).
pub const LANE_LEFT_X: f64 = 130.0;
pub const LANE_RIGHT_X: f64 = 170.0;

/// Thorns enter above the visible area and are retired past the bottom edge.
pub const THORN_SPAWN_Y: f64 = -20.0;
pub const THORN_REMOVE_Y: f64 = 500.0;

/// Minimum vertical distance the previous thorn must have travelled before
/// another may spawn.
pub const MIN_VERTICAL_GAP: f64 = 80.0;

/// Per-tick probability that an eligible spawn actually happens.
pub const SPAWN_CHANCE: f64 = 0.05;

/// First-order lag factor pulling the ant toward its target lane each tick.
pub const ANT_LERP_FACTOR: f64 = 0.2;

/// Thorn descent: (BASE + score / RAMP) px per DELTA_SCALE ms.
pub const THORN_BASE_SPEED: f64 = 8.0;
pub const THORN_SPEED_RAMP: u32 = 5;
pub const THORN_DELTA_SCALE: f64 = 50.0;

/// Distance at which a thorn touching the ant ends the run.
pub const COLLISION_RADIUS: f64 = 20.0;

/// Updates are throttled to at most once per this many milliseconds.
pub const MIN_TICK_MS: f64 = 16.0;

/// Where the ant sits at the start of a run.
pub const ANT_START_X: f64 = LANE_LEFT_X;
pub const ANT_START_Y: f64 = 400.0;

// --- Data model ---------------------------------------------------------------

/// 2D point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Which side of the stem a thorn grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Lane x coordinate of a thorn tip (and of the ant when in this lane).
    pub fn lane_x(self) -> f64 {
        match self {
            Side::Left => LANE_LEFT_X,
            Side::Right => LANE_RIGHT_X,
        }
    }
}

/// A single downward-moving hazard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thorn {
    pub x: f64,
    pub y: f64,
    pub side: Side,
}

/// The whole mutable game snapshot. Recreated wholesale on restart; the
/// desired lane (target x) is deliberately kept outside so input can adjust it
/// without touching the aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ant: Position,
    /// Insertion order == spawn order; the last element gates the next spawn.
    pub thorns: Vec<Thorn>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ant: Position {
                x: ANT_START_X,
                y: ANT_START_Y,
            },
            thorns: Vec::new(),
            score: 0,
            game_over: false,
            paused: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// --- Randomness ---------------------------------------------------------------

/// Source of uniform draws in [0, 1) for spawn rolls and the first side pick.
/// Injectable so tests can script exact spawn timing and side sequences.
pub trait SpawnRng {
    fn next_f64(&mut self) -> f64;
}

/// Seedable LCG (Numerical Recipes constants). Not crypto secure; plenty for
/// spawn jitter and it keeps the wasm binary free of an RNG dependency.
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    pub fn new(seed: u32) -> Self {
        // A zero seed would linger near zero for the first draws.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }
}

impl SpawnRng for LcgRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }
}

// --- Per-tick update ----------------------------------------------------------

/// Advance the state by one tick of `delta_ms` elapsed time.
///
/// No-op while paused or after game over; the caller applies the
/// [`MIN_TICK_MS`] throttle. Order within a tick: ant lag motion, spawn
/// attempt, thorn descent, bottom-edge removal + scoring.
pub fn update(state: &mut GameState, target_x: f64, delta_ms: f64, rng: &mut impl SpawnRng) {
    if state.paused || state.game_over {
        return;
    }

    // Exponential smoothing toward the target lane; never overshoots.
    state.ant.x += (target_x - state.ant.x) * ANT_LERP_FACTOR;

    // At most one spawn per tick, gated on vertical spacing from the previous
    // thorn and a probability roll. Sides alternate after the first spawn.
    let last = state.thorns.last();
    let gap_ok = last.map_or(true, |t| t.y > MIN_VERTICAL_GAP);
    if gap_ok && rng.next_f64() < SPAWN_CHANCE {
        let side = match last {
            Some(t) => t.side.opposite(),
            None => {
                if rng.next_f64() > 0.5 {
                    Side::Left
                } else {
                    Side::Right
                }
            }
        };
        state.thorns.push(Thorn {
            x: side.lane_x(),
            y: THORN_SPAWN_Y,
            side,
        });
    }

    // Descent speed ramps with the score held at the start of this tick.
    let speed = THORN_BASE_SPEED + f64::from(state.score / THORN_SPEED_RAMP);
    let step = speed * (delta_ms / THORN_DELTA_SCALE);
    for thorn in &mut state.thorns {
        thorn.y += step;
    }

    // Retire thorns past the bottom edge; each one scores a point. `retain`
    // keeps spawn order for the survivors.
    let before = state.thorns.len();
    state.thorns.retain(|t| t.y < THORN_REMOVE_Y);
    state.score += (before - state.thorns.len()) as u32;
}

/// Flag game over if any thorn is within [`COLLISION_RADIUS`] of the ant.
/// Runs against the freshly updated state each tick; skipped while paused.
/// The transition is one-way until [`restart`].
pub fn detect_collision(state: &mut GameState) {
    if state.paused || state.game_over {
        return;
    }
    let hit = state.thorns.iter().any(|t| {
        let dx = t.x - state.ant.x;
        let dy = t.y - state.ant.y;
        (dx * dx + dy * dy).sqrt() < COLLISION_RADIUS
    });
    if hit {
        state.game_over = true;
    }
}

/// Reset the aggregate to its initial values. The only exit from game over.
/// Returns the target x the caller must also reset to.
pub fn restart(state: &mut GameState) -> f64 {
    *state = GameState::new();
    ANT_START_X
}
