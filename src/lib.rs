//! Climbing Ant core crate.
//!
//! A small browser arcade game: an ant climbs a flower stem and dodges thorns
//! sliding down on alternating sides, scoring a point for every thorn passed.
//! `start_game()` wires the canvas, input and animation loop; the gameplay
//! rules themselves live in [`game::state`] as pure functions so they run
//! under native `cargo test` without a browser.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Unified entrypoint: sets up DOM + canvas and starts the animation loop.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_climb_mode()
}
