//! Browser glue: canvas + DOM setup, keyboard input, restart affordance and
//! the `requestAnimationFrame` loop. All gameplay rules live in [`state`]; this
//! module only feeds timestamps and input into them and paints the result.
//!
//! Frame ordering (fixed, per tick): state update, then collision check
//! against the freshly updated state, then render. The loop keeps firing after
//! game over or pause so the overlays stay on screen; only state mutation
//! halts.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

mod render;
pub mod state;

use self::state::{
    ANT_START_X, CANVAS_HEIGHT, CANVAS_WIDTH, GameState, LANE_LEFT_X, LANE_RIGHT_X, LcgRng,
    MIN_TICK_MS, detect_collision, restart, update,
};

/// Everything the animation loop owns: the game aggregate plus the bits the
/// spec keeps outside it (target lane, RNG, throttle bookkeeping, context).
struct ClimbState {
    ctx: CanvasRenderingContext2d,
    game: GameState,
    target_x: f64,
    rng: LcgRng,
    last_update_ms: f64,
}

thread_local! {
    static CLIMB_STATE: std::cell::RefCell<Option<ClimbState>> = std::cell::RefCell::new(None);
}

#[wasm_bindgen]
pub fn start_climb_mode() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Create / reuse the playfield canvas.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("ca-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("ca-canvas");
        c.set_width(CANVAS_WIDTH as u32);
        c.set_height(CANVAS_HEIGHT as u32);
        c.set_attribute(
            "style",
            "display:block; margin:16px auto 0; border:2px solid #2d5a27; border-radius:8px; background:#f5f9f5; box-shadow:0 4px 8px rgba(0,0,0,0.1);",
        )
        .ok();
        doc.body().unwrap().append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?.unwrap().dyn_into()?;

    // Title above the canvas.
    if doc.get_element_by_id("ca-title").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("ca-title");
            div.set_text_content(Some("Climbing Ant"));
            div.set_attribute("style", "text-align:center; margin-top:12px; color:#2d5a27; font-family:'Segoe UI', Arial, sans-serif; font-size:24px; font-weight:bold;").ok();
            body.insert_before(&div, Some(canvas.as_ref()))?;
        }
    }
    // Score readout below the canvas.
    if doc.get_element_by_id("ca-score").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("ca-score");
            div.set_text_content(Some("Score: 0"));
            div.set_attribute("style", "text-align:center; margin-top:10px; color:#2d5a27; font-family:'Segoe UI', Arial, sans-serif; font-size:18px; font-weight:bold;").ok();
            body.append_child(&div)?;
        }
    }
    // Game-over banner, hidden until the run ends; clicking it restarts.
    if doc.get_element_by_id("ca-gameover").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("ca-gameover");
            div.set_text_content(Some("Game Over! Click to restart"));
            div.set_attribute("style", "display:none; cursor:pointer; color:#8b0000; margin:10px auto 0; padding:10px; background:#ffe6e6; border-radius:4px; width:fit-content; font-family:'Segoe UI', Arial, sans-serif; font-weight:bold;").ok();
            body.append_child(&div)?;

            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                CLIMB_STATE.with(|cell| {
                    if let Some(st) = cell.borrow_mut().as_mut() {
                        // Only an ended run can be restarted.
                        if st.game.game_over {
                            st.target_x = restart(&mut st.game);
                            st.last_update_ms = performance_now();
                        }
                    }
                });
            }) as Box<dyn FnMut(_)>);
            if let Some(el) = doc.get_element_by_id("ca-gameover") {
                el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            }
            closure.forget();
        }
    }

    // Keyboard: arrows pick the lane, space toggles pause.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            CLIMB_STATE.with(|cell| {
                if let Some(st) = cell.borrow_mut().as_mut() {
                    if evt.code() == "Space" {
                        // Unconditional toggle; has no further effect once the
                        // run is over since updates are already halted.
                        st.game.paused = !st.game.paused;
                        return;
                    }
                    if st.game.paused || st.game.game_over {
                        return;
                    }
                    match evt.key().as_str() {
                        "ArrowLeft" => st.target_x = LANE_LEFT_X,
                        "ArrowRight" => st.target_x = LANE_RIGHT_X,
                        _ => {}
                    }
                }
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let now = performance_now();
    let climb = ClimbState {
        ctx,
        game: GameState::new(),
        target_x: ANT_START_X,
        rng: LcgRng::new(now as u32),
        last_update_ms: now,
    };
    CLIMB_STATE.with(|cell| cell.replace(Some(climb)));

    start_climb_loop();
    Ok(())
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_climb_loop() {
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        CLIMB_STATE.with(|cell| {
            if let Some(st) = cell.borrow_mut().as_mut() {
                climb_tick(st, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One animation frame: throttled update + collision, then render + overlays.
fn climb_tick(st: &mut ClimbState, now: f64) {
    let delta = now - st.last_update_ms;
    if delta >= MIN_TICK_MS {
        update(&mut st.game, st.target_x, delta, &mut st.rng);
        detect_collision(&mut st.game);
        // Advance the throttle clock even while paused so unpausing does not
        // replay the whole pause as one giant delta.
        st.last_update_ms = now;
    }

    render::render(&st.ctx, &st.game, now);

    // Non-visual outputs: score text and the restart affordance.
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("ca-score") {
            el.set_text_content(Some(&format!("Score: {}", st.game.score)));
        }
        if let Some(el) = doc.get_element_by_id("ca-gameover") {
            let display = if st.game.game_over {
                "display:block;"
            } else {
                "display:none;"
            };
            el.set_attribute("style", &format!("{display} cursor:pointer; color:#8b0000; margin:10px auto 0; padding:10px; background:#ffe6e6; border-radius:4px; width:fit-content; font-family:'Segoe UI', Arial, sans-serif; font-weight:bold;")).ok();
        }
    }
}

/// Current score, for host pages that want it outside the DOM overlay.
#[wasm_bindgen]
pub fn current_score() -> u32 {
    CLIMB_STATE.with(|cell| cell.borrow().as_ref().map(|st| st.game.score).unwrap_or(0))
}

/// Whether the current run has ended.
#[wasm_bindgen]
pub fn is_game_over() -> bool {
    CLIMB_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|st| st.game.game_over)
            .unwrap_or(false)
    })
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
