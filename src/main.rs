//! Wave Survivor entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use wave_survivor::Tuning;
    use wave_survivor::platform::{apply_key, backbuffer_size};
    use wave_survivor::renderer::{DrawCmd, RenderState, build_frame, text_commands};
    use wave_survivor::sim::{FrameClock, GameState, InputSnapshot, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: InputSnapshot,
        document: Document,
        /// Last overlay text, to skip redundant DOM writes
        overlay: String,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64, document: Document) -> Self {
            Self {
                state: GameState::new(tuning, seed),
                render_state: None,
                clock: FrameClock::new(),
                input: InputSnapshot::new(),
                document,
                overlay: String::new(),
            }
        }

        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta(time, self.state.tuning.max_frame_dt);
            tick(&mut self.state, &self.input, dt);

            let cmds = build_frame(&self.state);
            self.render(&cmds);
            self.update_hud(&cmds);
        }

        fn render(&mut self, cmds: &[DrawCmd]) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(cmds) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, cmds: &[DrawCmd]) {
            let hud = self.state.hud();
            let fields = [
                ("hud-kills", hud.kills.to_string()),
                ("hud-wave", hud.wave.to_string()),
                ("hud-coins", hud.coins.to_string()),
                ("hud-health", format!("{}/{}", hud.health, hud.health_max)),
            ];
            for (id, value) in fields {
                if let Some(el) = self.document.get_element_by_id(id) {
                    el.set_text_content(Some(&value));
                }
            }

            let overlay: Vec<&str> = text_commands(cmds)
                .filter_map(|c| match c {
                    DrawCmd::Text { text, .. } => Some(text.as_str()),
                    DrawCmd::Rect { .. } => None,
                })
                .collect();
            let overlay = overlay.join("\n");
            if overlay != self.overlay {
                if let Some(el) = self.document.get_element_by_id("shop") {
                    let class = if hud.shop_open { "" } else { "hidden" };
                    let _ = el.set_attribute("class", class);
                    el.set_text_content(Some(&overlay));
                }
                self.overlay = overlay;
            }
        }
    }

    /// Tuning overrides from an optional `<script id="tuning">` JSON block
    fn load_tuning(document: &Document) -> Tuning {
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

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Wave Survivor starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let (width, height) = size_canvas(&window, &canvas);

        let tuning = load_tuning(&document);
        let arena = glam::Vec2::new(tuning.arena_width, tuning.arena_height);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(tuning, seed, document)));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone());
        setup_resize_handler(&window, canvas, game.clone());

        request_animation_frame(game);

        log::info!("Wave Survivor running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        for (event, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if apply_key(&mut g.input, &event.key(), pressed) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup never arrives for keys released while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
                log::info!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Match the canvas backbuffer to its CSS size at the device pixel ratio
    fn size_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let (width, height) = backbuffer_size(
            canvas.client_width(),
            canvas.client_height(),
            window.device_pixel_ratio(),
        );
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        canvas: HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = size_canvas(&window, &canvas);
            if let Some(render_state) = game.borrow_mut().render_state.as_mut() {
                render_state.resize(width, height);
                log::debug!("Canvas resized to {}x{}", width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Wave Survivor (native) starting...");
    log::info!("Rendering requires the browser host; running a headless session");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let tuning = match args.next() {
        Some(path) => native::load_tuning(&path),
        None => wave_survivor::Tuning::default(),
    };

    native::run_session(tuning, seed, 1800);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use wave_survivor::Tuning;
    use wave_survivor::renderer::build_frame;
    use wave_survivor::sim::{Action, GameState, InputSnapshot, tick};

    /// Simulated frame step (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;

    pub fn load_tuning(path: &str) -> Tuning {
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    /// Held actions for a given frame of the scripted session
    ///
    /// Circles the arena while sweeping the aim direction, and visits the
    /// shop every ten seconds to try a purchase.
    fn scripted_input(frame: u32) -> InputSnapshot {
        const MOVES: [Action; 4] = [
            Action::MoveRight,
            Action::MoveDown,
            Action::MoveLeft,
            Action::MoveUp,
        ];
        const AIMS: [Action; 4] = [
            Action::AimLeft,
            Action::AimUp,
            Action::AimRight,
            Action::AimDown,
        ];

        let mut held = vec![
            MOVES[(frame / 90) as usize % MOVES.len()],
            AIMS[(frame / 20) as usize % AIMS.len()],
        ];
        match frame % 600 {
            0..=2 => held.push(Action::ShopToggle),
            10..=12 => held.push(Action::ShopMultiplier),
            20..=22 => held.push(Action::ShopSpeed),
            30..=32 => held.push(Action::ShopClose),
            _ => {}
        }
        InputSnapshot::with(&held)
    }

    pub fn run_session(tuning: Tuning, seed: u64, frames: u32) {
        let mut state = GameState::new(tuning, seed);
        log::info!("Headless session: seed {}, {} frames", seed, frames);

        for frame in 0..frames {
            tick(&mut state, &scripted_input(frame), FRAME_DT);

            if frame % 300 == 299 {
                let cmds = build_frame(&state);
                match serde_json::to_string(&state.hud()) {
                    Ok(hud) => log::info!(
                        "t={:.1}s draws={} hud={}",
                        state.time_ticks as f32 * FRAME_DT,
                        cmds.len(),
                        hud
                    ),
                    Err(e) => log::warn!("HUD snapshot failed: {}", e),
                }
            }
        }

        let hud = state.hud();
        log::info!(
            "Session over: wave {}, {} kills, {} coins",
            hud.wave,
            hud.kills,
            hud.coins
        );
    }
}
