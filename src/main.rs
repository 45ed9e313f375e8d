//! Flappy Block entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_block::platform::CanvasSurface;
    use flappy_block::{Game, GameConfig};

    /// Game plus the browser-side state needed to drive it
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: Option<f64>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Block starting...");

        let config = match GameConfig::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid configuration: {e}");
                return;
            }
        };

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(&canvas, config.width, config.height);

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid configuration: {e}");
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            last_time: None,
        }));

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Flappy Block running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Any key flaps; A also toggles the autopilot
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if event.repeat() {
                    return;
                }
                if matches!(event.key().as_str(), "a" | "A") {
                    let enabled = !a.game.autopilot();
                    a.game.set_autopilot(enabled);
                }
                a.game.flap();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Primary button click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    app.borrow_mut().game.flap();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let elapsed_ms = a.last_time.map(|last| (time - last).max(0.0)).unwrap_or(0.0);
            a.last_time = Some(time);

            let App { game, surface, .. } = &mut *a;
            game.advance(Duration::from_secs_f64(elapsed_ms / 1000.0));
            game.render(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Instant, SystemTime, UNIX_EPOCH};

    use flappy_block::platform::HeadlessSurface;
    use flappy_block::{Game, GameConfig};

    env_logger::init();
    log::info!("Flappy Block (native) starting...");

    let config = match GameConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Headless mode has no input device - autopilot is flying");
    game.set_autopilot(true);

    let mut surface = HeadlessSurface::default();
    let frame_time = game.config().tick_interval();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        game.advance(frame_start - last);
        last = frame_start;
        game.render(&mut surface);

        let spent = frame_start.elapsed();
        if spent < frame_time {
            std::thread::sleep(frame_time - spent);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
