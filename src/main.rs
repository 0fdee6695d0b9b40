//! Gear Diver entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use gear_diver::audio::AudioManager;
    use gear_diver::renderer::{CanvasSurface, draw_frame};
    use gear_diver::sim::{GameState, InputEvent, InputState, Key, frame_delta, tick};
    use gear_diver::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
        audio: AudioManager,
        last_time: Option<f64>,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let dt = frame_delta(self.last_time, time);
            self.last_time = Some(time);

            tick(&mut self.state, &mut self.input, dt);
            draw_frame(&self.state, &mut self.surface);
            self.audio.play_all(self.state.drain_sounds());
        }
    }

    /// Tuning overrides from an inline `<script id="tuning" type="application/json">`
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gear Diver starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = load_tuning(&document);
        canvas.set_width(tuning.playfield_width as u32);
        canvas.set_height(tuning.playfield_height as u32);

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning, seed),
            input: InputState::new(),
            surface,
            audio: AudioManager::new(),
            last_time: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Gear Diver running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.press(Key::Up),
                    "ArrowDown" => g.input.press(Key::Down),
                    " " => g.input.push(InputEvent::Fire),
                    "d" => g.input.push(InputEvent::ToggleDebug),
                    "m" => {
                        g.audio.toggle_mute();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.release(Key::Up),
                    "ArrowDown" => g.input.release(Key::Down),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gear Diver (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x6ea5_d1e5);
    autopilot::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: steer toward the nearest enemy and fire on a cadence
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use gear_diver::audio::AudioManager;
    use gear_diver::consts::FRAME_MS;
    use gear_diver::sim::{GameState, InputEvent, InputState, Key, tick};
    use gear_diver::tuning::Tuning;

    /// Frames between shots
    const FIRE_EVERY: u64 = 12;

    pub fn run(seed: u64) {
        let tuning = Tuning::default();
        let mut state = GameState::new(tuning, seed);
        let mut input = InputState::new();
        let audio = AudioManager::new();

        log::info!("Autopilot run with seed: {}", seed);

        while !state.is_game_over() {
            steer(&state, &mut input);
            if state.frame % FIRE_EVERY == 0 {
                input.push(InputEvent::Fire);
            }
            tick(&mut state, &mut input, FRAME_MS);
            audio.play_all(state.drain_sounds());
        }

        log::info!(
            "{:?} after {} frames: score {}, ammo {}",
            state.outcome(),
            state.frame,
            state.score,
            state.ammo()
        );
    }

    /// Line up the launcher with the nearest enemy still in front of the player
    fn steer(state: &GameState, input: &mut InputState) {
        input.release(Key::Up);
        input.release(Key::Down);

        let player = state.player.bounds();
        let Some(target) = state
            .enemies
            .iter()
            .filter(|e| e.pos.x > player.right())
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        else {
            return;
        };

        let aim = player.y + player.height * 0.3;
        let dy = target.center().y - aim;
        if dy < -4.0 {
            input.press(Key::Up);
        } else if dy > 4.0 {
            input.press(Key::Down);
        }
    }
}
