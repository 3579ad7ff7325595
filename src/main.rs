//! Skill Collector entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use skill_collector::platform::web::{KeyboardBinding, SharedGame, schedule_frames};
    use skill_collector::render::CanvasSurface;
    use skill_collector::sim::SessionPhase;
    use skill_collector::{FrameLoop, Hud, Settings, Tuning};

    /// Host page state around the frame loop
    struct App {
        game: SharedGame<CanvasSurface>,
        /// Movement key listeners, alive only while a session is playing
        keys: RefCell<Option<KeyboardBinding>>,
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Toggle only the `hidden` class; layout classes stay put
    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    }

    fn set_text(selector: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.query_selector(selector).ok().flatten()) {
            el.set_text_content(Some(text));
        }
    }

    /// Balance overrides embedded in the page as `<script id="tuning" type="application/json">`
    fn load_tuning() -> Tuning {
        document()
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content())
            .map(|json| Tuning::from_json_or_default(&json))
            .unwrap_or_default()
    }

    /// Update HUD elements and overlays in DOM
    fn update_hud(hud: Hud, show_fps: bool) {
        set_visible("hud-score", hud.shows_score());
        set_text("#hud-score .hud-value", &hud.score.to_string());

        if show_fps {
            set_visible("hud-fps", true);
            set_text("#hud-fps .hud-value", &hud.fps.to_string());
        } else {
            set_visible("hud-fps", false);
        }

        set_visible("start-overlay", hud.shows_start_overlay());
        set_visible("game-over", hud.shows_game_over());
        if hud.shows_game_over() {
            set_text("#final-score", &hud.score.to_string());
        }
    }

    fn refresh_hud(app: &App) {
        let (hud, show_fps) = {
            let game = app.game.borrow();
            (game.hud(), game.settings().show_fps)
        };
        update_hud(hud, show_fps);
    }

    fn start_session(app: &Rc<App>) {
        let seed = js_sys::Date::now() as u64;
        let token = app.game.borrow_mut().start(Some(seed));

        // Old binding drops here, its listeners go with it
        *app.keys.borrow_mut() = KeyboardBinding::attach(&app.game);

        refresh_hud(app);

        let on_frame = {
            let app = app.clone();
            Rc::new(move |hud: Hud| {
                let show_fps = app.game.borrow().settings().show_fps;
                update_hud(hud, show_fps);
                if hud.phase != SessionPhase::Playing {
                    app.keys.borrow_mut().take();
                }
            })
        };
        schedule_frames(app.game.clone(), token, on_frame);
    }

    fn stop_session(app: &Rc<App>) {
        if app.game.borrow_mut().stop() {
            app.keys.borrow_mut().take();
            refresh_hud(app);
        }
    }

    fn on_click(id: &str, app: &Rc<App>, handler: fn(&Rc<App>)) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("No #{} button on page", id);
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            handler(&app);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Escape ends the run; G/L/F/M flip a preference and persist it.
    /// Lives for the whole page, unlike the movement binding.
    fn setup_hotkeys(app: &Rc<App>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            if key == "Escape" {
                stop_session(&app);
                return;
            }
            let mut settings = app.game.borrow().settings().clone();
            if settings.toggle_for_key(&key) {
                settings.save();
                log::info!("Settings changed: {:?}", settings);
                app.game.borrow_mut().set_settings(settings);
                refresh_hud(&app);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Keep the canvas matched to its container
    fn setup_resize(app: &Rc<App>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut game = app.game.borrow_mut();
            game.surface().fit_to_parent();
            game.sync_surface_size();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Skill Collector starting...");

        let surface = match CanvasSurface::from_element_id("canvas") {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        let size = surface.fit_to_parent();
        log::info!("Canvas {}x{}", size.x, size.y);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = match FrameLoop::new(surface, seed, load_tuning(), settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let app = Rc::new(App {
            game: Rc::new(RefCell::new(game)),
            keys: RefCell::new(None),
        });

        on_click("start-btn", &app, start_session);
        on_click("play-again-btn", &app, start_session);
        setup_hotkeys(&app);
        setup_resize(&app);

        refresh_hud(&app);
        set_visible("loading", false);

        log::info!("Skill Collector ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Skill Collector (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => skill_collector::Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                skill_collector::Tuning::default()
            }
        },
        None => skill_collector::Tuning::default(),
    };
    let seed = std::env::var("SKILL_COLLECTOR_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    match headless::run(seed, tuning, 3600) {
        Ok(hud) => println!(
            "Demo finished: score {} ({} on screen, {} particles)",
            hud.score, hud.entities, hud.particles
        ),
        Err(e) => log::error!("Demo failed: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use skill_collector::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
    use skill_collector::render::RecordingSurface;
    use skill_collector::{FrameLoop, FrameOutcome, Hud, Settings, SurfaceError, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Play `frames` frames with a bot steering toward the nearest skill
    pub fn run(seed: u64, tuning: Tuning, frames: u32) -> Result<Hud, SurfaceError> {
        let surface = RecordingSurface::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT);
        let mut game = FrameLoop::new(surface, seed, tuning, Settings::default())?;
        let token = game.start(None);

        for i in 0..frames {
            steer(&mut game);
            if game.frame(&token, i as f64 * FRAME_MS) == FrameOutcome::Stop {
                break;
            }
        }
        game.stop();
        Ok(game.hud())
    }

    fn steer(game: &mut FrameLoop<RecordingSurface>) {
        let world = game.session().world();
        let player = world.player.pos;
        let target = world
            .entities
            .iter()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player)
                    .total_cmp(&b.pos.distance_squared(player))
            })
            .map(|e| e.pos);

        let (mut up, mut down, mut left, mut right) = (false, false, false, false);
        if let Some(t) = target {
            let d = t - player;
            up = d.y < -2.0;
            down = d.y > 2.0;
            left = d.x < -2.0;
            right = d.x > 2.0;
        }
        for (key, held) in [("w", up), ("s", down), ("a", left), ("d", right)] {
            if held {
                game.key_down(key);
            } else {
                game.key_up(key);
            }
        }
    }
}
