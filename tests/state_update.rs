// Native integration tests for the per-tick update logic: ant motion, thorn
// spawning, descent speed and scoring. These avoid wasm/browser APIs and drive
// the pure update functions with scripted RNG draws and controlled deltas.

use climbing_ant::game::state::{
    ANT_LERP_FACTOR, GameState, LANE_LEFT_X, LANE_RIGHT_X, MIN_VERTICAL_GAP, Side, SpawnRng,
    THORN_SPAWN_Y, Thorn, update,
};

/// Replays a fixed sequence of draws, then returns 1.0 (never passes a spawn
/// roll) once exhausted.
struct ScriptedRng {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl SpawnRng for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        let v = self.draws.get(self.next).copied().unwrap_or(1.0);
        self.next += 1;
        v
    }
}

fn thorn(x: f64, y: f64, side: Side) -> Thorn {
    Thorn { x, y, side }
}

#[test]
fn ant_lerps_one_fifth_of_the_way_per_tick() {
    let mut state = GameState::new();
    let mut rng = ScriptedRng::new(&[]);
    update(&mut state, LANE_RIGHT_X, 16.0, &mut rng);
    let expected = LANE_LEFT_X + (LANE_RIGHT_X - LANE_LEFT_X) * ANT_LERP_FACTOR;
    assert!((state.ant.x - expected).abs() < 1e-9, "x = {}", state.ant.x);
    assert!((state.ant.x - 138.0).abs() < 1e-9);
}

#[test]
fn ant_never_overshoots_target() {
    let mut state = GameState::new();
    let mut rng = ScriptedRng::new(&[]);
    let mut prev_dist = (LANE_RIGHT_X - state.ant.x).abs();
    for _ in 0..200 {
        update(&mut state, LANE_RIGHT_X, 16.0, &mut rng);
        let dist = (LANE_RIGHT_X - state.ant.x).abs();
        assert!(dist <= prev_dist, "distance to target increased");
        assert!(state.ant.x <= LANE_RIGHT_X, "overshot the target lane");
        prev_dist = dist;
    }
    assert!(prev_dist < 1e-6, "should converge onto the target");
}

#[test]
fn spawn_needs_a_passing_roll() {
    let mut state = GameState::new();
    // Roll of 0.5 fails the 0.05 chance; no thorn appears.
    let mut rng = ScriptedRng::new(&[0.5]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert!(state.thorns.is_empty());
}

#[test]
fn first_spawn_side_comes_from_rng() {
    // Passing roll, then side draw > 0.5 picks the left side.
    let mut state = GameState::new();
    let mut rng = ScriptedRng::new(&[0.0, 0.9]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns.len(), 1);
    assert_eq!(state.thorns[0].side, Side::Left);
    assert_eq!(state.thorns[0].x, LANE_LEFT_X);

    // Side draw <= 0.5 picks the right side.
    let mut state = GameState::new();
    let mut rng = ScriptedRng::new(&[0.0, 0.1]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns[0].side, Side::Right);
    assert_eq!(state.thorns[0].x, LANE_RIGHT_X);
}

#[test]
fn at_most_one_spawn_per_tick() {
    let mut state = GameState::new();
    let mut rng = ScriptedRng::new(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns.len(), 1);
}

#[test]
fn spawn_blocked_until_vertical_gap_clears() {
    // Previous thorn still within the gap: roll would pass, but no spawn.
    let mut state = GameState::new();
    state.thorns.push(thorn(LANE_LEFT_X, 40.0, Side::Left));
    let mut rng = ScriptedRng::new(&[0.0]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns.len(), 1);

    // Gap boundary is strict: exactly MIN_VERTICAL_GAP still blocks.
    let mut state = GameState::new();
    state
        .thorns
        .push(thorn(LANE_LEFT_X, MIN_VERTICAL_GAP, Side::Left));
    let mut rng = ScriptedRng::new(&[0.0]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns.len(), 1);

    // Just past the gap the spawn goes through, at the spawn line.
    let mut state = GameState::new();
    state
        .thorns
        .push(thorn(LANE_LEFT_X, MIN_VERTICAL_GAP + 1.0, Side::Left));
    let mut rng = ScriptedRng::new(&[0.0]);
    update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
    assert_eq!(state.thorns.len(), 2);
    let step = 8.0 * (16.0 / 50.0);
    assert!((state.thorns[1].y - (THORN_SPAWN_Y + step)).abs() < 1e-9);
}

#[test]
fn sides_alternate_after_the_first_spawn() {
    let mut state = GameState::new();
    state.thorns.push(thorn(LANE_LEFT_X, 100.0, Side::Left));
    let mut prev_side = Side::Left;
    for _ in 0..6 {
        let mut rng = ScriptedRng::new(&[0.0]);
        update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
        let last = *state.thorns.last().unwrap();
        assert_eq!(last.side, prev_side.opposite());
        assert_eq!(last.x, last.side.lane_x());
        prev_side = last.side;
        // Pull the newest thorn past the gap so the next iteration may spawn.
        state.thorns.last_mut().unwrap().y = 100.0;
    }
}

#[test]
fn thorn_descends_every_tick_and_ramps_with_score() {
    let mut state = GameState::new();
    state.thorns.push(thorn(LANE_LEFT_X, 0.0, Side::Left));
    let mut rng = ScriptedRng::new(&[]);
    let mut prev_y = 0.0;
    for _ in 0..10 {
        update(&mut state, LANE_LEFT_X, 16.0, &mut rng);
        let y = state.thorns[0].y;
        assert!(y > prev_y, "thorn must keep descending");
        prev_y = y;
    }

    // Base speed at score 0 over a 50ms delta is exactly 8px.
    let mut slow = GameState::new();
    slow.thorns.push(thorn(LANE_LEFT_X, 0.0, Side::Left));
    update(&mut slow, LANE_LEFT_X, 50.0, &mut ScriptedRng::new(&[]));
    assert!((slow.thorns[0].y - 8.0).abs() < 1e-9);

    // Five points buys one extra px per 50ms.
    let mut fast = GameState::new();
    fast.score = 5;
    fast.thorns.push(thorn(LANE_LEFT_X, 0.0, Side::Left));
    update(&mut fast, LANE_LEFT_X, 50.0, &mut ScriptedRng::new(&[]));
    assert!((fast.thorns[0].y - 9.0).abs() < 1e-9);

    // Four points does not.
    let mut same = GameState::new();
    same.score = 4;
    same.thorns.push(thorn(LANE_LEFT_X, 0.0, Side::Left));
    update(&mut same, LANE_LEFT_X, 50.0, &mut ScriptedRng::new(&[]));
    assert!((same.thorns[0].y - 8.0).abs() < 1e-9);
}

#[test]
fn thorn_crossing_bottom_is_removed_and_scored() {
    // y = 495 at score 0 with a 50ms delta lands on 503, past the 500 bound.
    let mut state = GameState::new();
    state.thorns.push(thorn(LANE_LEFT_X, 495.0, Side::Left));
    let mut rng = ScriptedRng::new(&[]);
    update(&mut state, LANE_LEFT_X, 50.0, &mut rng);
    assert!(state.thorns.is_empty());
    assert_eq!(state.score, 1);
}

#[test]
fn score_counts_exactly_the_removed_thorns_and_keeps_order() {
    let mut state = GameState::new();
    state.thorns.push(thorn(LANE_LEFT_X, 496.0, Side::Left));
    state.thorns.push(thorn(LANE_RIGHT_X, 100.0, Side::Right));
    state.thorns.push(thorn(LANE_LEFT_X, 300.0, Side::Left));
    let mut rng = ScriptedRng::new(&[]);
    update(&mut state, LANE_LEFT_X, 50.0, &mut rng);
    assert_eq!(state.score, 1);
    assert_eq!(state.thorns.len(), 2);
    // Survivors keep their spawn order.
    assert_eq!(state.thorns[0].side, Side::Right);
    assert_eq!(state.thorns[1].side, Side::Left);
}
