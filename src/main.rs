//! SkyFlap entry point
//!
//! Browser build: wires the simulation to requestAnimationFrame, the canvas,
//! Web Audio, LocalStorage and the DOM overlays.
//! Native build: runs a headless autopilot game and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use skyflap::audio::AudioManager;
    use skyflap::consts::GROUND_HEIGHT;
    use skyflap::persistence::LocalStore;
    use skyflap::platform::{RawInput, is_jump, is_mute_key};
    use skyflap::renderer::CanvasRenderer;
    use skyflap::{
        AudioSink, BestScoreStore, Driver, GameEvent, GameObserver, Hooks, Settings, Simulation,
        SoundCue, Tuning, World,
    };

    /// Pending request and in-flight frame handle
    #[derive(Default)]
    struct FrameState {
        pending: bool,
        handle: Option<i32>,
    }

    /// requestAnimationFrame driver; the frame loop honours `pending`
    #[derive(Clone, Default)]
    struct RafDriver {
        frames: Rc<RefCell<FrameState>>,
    }

    impl Driver for RafDriver {
        fn schedule_next_tick(&mut self) {
            self.frames.borrow_mut().pending = true;
        }

        fn cancel_tick(&mut self) {
            let mut frames = self.frames.borrow_mut();
            frames.pending = false;
            if let Some(handle) = frames.handle.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
        }
    }

    /// Audio shared between the simulation and the blur/focus handlers
    struct SharedAudio(Rc<RefCell<AudioManager>>);

    impl AudioSink for SharedAudio {
        fn play(&mut self, cue: SoundCue) {
            self.0.borrow_mut().play(cue);
        }
    }

    /// DOM overlays: start screen, live score, game-over screen
    struct DomUi {
        document: Document,
    }

    impl DomUi {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_visible(&self, id: &str, visible: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
            }
        }
    }

    impl GameObserver for DomUi {
        fn on_event(&mut self, event: &GameEvent) {
            match event {
                GameEvent::Started => {
                    self.set_visible("startScreen", false);
                    self.set_visible("gameOver", false);
                    self.set_text("currentScore", "0");
                    self.set_text("medal", "");
                }
                GameEvent::ScoreChanged { score } => {
                    self.set_text("currentScore", &score.to_string());
                }
                GameEvent::GameOver {
                    final_score,
                    best_score,
                    medal,
                    ..
                } => {
                    self.set_text("finalScore", &final_score.to_string());
                    self.set_text("highScore", &best_score.to_string());
                    self.set_text("medal", medal.map(|m| m.as_str()).unwrap_or(""));
                    self.set_visible("gameOver", true);
                }
                GameEvent::Jumped => {}
            }
        }
    }

    struct App {
        sim: RefCell<Simulation>,
        renderer: CanvasRenderer,
        settings: RefCell<Settings>,
        audio: Rc<RefCell<AudioManager>>,
        frames: Rc<RefCell<FrameState>>,
        canvas: HtmlCanvasElement,
    }

    impl App {
        fn jump(&self) {
            self.sim.borrow_mut().on_jump_signal();
        }

        fn start(&self) {
            self.sim.borrow_mut().start();
        }

        /// Flip and persist the mute preference
        fn toggle_mute(&self) {
            let mut settings = self.settings.borrow_mut();
            let muted = settings.toggle_mute(&mut LocalStore);
            self.audio.borrow_mut().apply_settings(&settings);
            log::info!("Sound {}", if muted { "muted" } else { "on" });
        }

        fn draw(&self) {
            self.renderer
                .render(&self.sim.borrow(), &self.settings.borrow());
        }

        /// Match the canvas to its container and tell the simulation
        fn resize(&self) {
            let width = self.canvas.client_width().max(1) as u32;
            let height = self.canvas.client_height().max(1) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.sim.borrow_mut().resize(World::new(
                width as f32,
                height as f32,
                GROUND_HEIGHT,
            ));
            log::info!("Canvas resized to {}x{}", width, height);
        }
    }

    /// Request a frame if the simulation asked for one and none is in flight
    fn kick(app: &Rc<App>) {
        let mut frames = app.frames.borrow_mut();
        if frames.pending && frames.handle.is_none() {
            frames.pending = false;
            frames.handle = request_animation_frame(app.clone());
        }
    }

    fn request_animation_frame(app: Rc<App>) -> Option<i32> {
        let window = web_sys::window()?;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
        handle
    }

    fn game_loop(app: Rc<App>, time: f64) {
        // Consumed; a cancel during the tick has nothing left to cancel
        app.frames.borrow_mut().handle = None;
        app.sim.borrow_mut().tick(time);
        app.draw();
        kick(&app);
    }

    fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("SkyFlap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load(&LocalStore);
        let audio = Rc::new(RefCell::new(AudioManager::new(&settings)));
        let driver = RafDriver::default();
        let frames = driver.frames.clone();

        let hooks = Hooks::new()
            .with_driver(driver)
            .with_audio(SharedAudio(audio.clone()))
            .with_scores(BestScoreStore::new(LocalStore))
            .with_observer(DomUi {
                document: document.clone(),
            });

        let seed = js_sys::Date::now() as u64;
        let world = World::new(
            canvas.client_width().max(1) as f32,
            canvas.client_height().max(1) as f32,
            GROUND_HEIGHT,
        );
        let sim = Simulation::new(Tuning::default(), world, seed, hooks)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let best = sim.best_score();

        let app = Rc::new(App {
            sim: RefCell::new(sim),
            renderer: CanvasRenderer::new(ctx),
            settings: RefCell::new(settings),
            audio,
            frames,
            canvas: canvas.clone(),
        });
        app.resize();

        if let Some(el) = document.get_element_by_id("highScore") {
            el.set_text_content(Some(&best.to_string()));
        }

        setup_input_handlers(&app, &document)?;
        setup_buttons(&app, &document);
        setup_focus_handlers(&app, &window);

        app.draw();
        log::info!("SkyFlap ready (seed {})", seed);
        Ok(())
    }

    fn setup_input_handlers(app: &Rc<App>, document: &Document) -> Result<(), JsValue> {
        let canvas = app.canvas.clone();

        // Click
        {
            let app = app.clone();
            listen(&canvas, "click", move |event: MouseEvent| {
                event.prevent_default();
                if is_jump(RawInput::Click) {
                    app.jump();
                    kick(&app);
                }
            });
        }

        // Touch
        {
            let app = app.clone();
            listen(&canvas, "touchstart", move |event: TouchEvent| {
                event.prevent_default();
                if is_jump(RawInput::Touch) {
                    app.jump();
                    kick(&app);
                }
            });
        }

        // Keyboard
        {
            let app = app.clone();
            listen(document, "keydown", move |event: KeyboardEvent| {
                let code = event.code();
                let key = event.key();
                if is_jump(RawInput::Key {
                    code: &code,
                    key: &key,
                }) {
                    event.prevent_default();
                    app.jump();
                    kick(&app);
                } else if is_mute_key(&key) {
                    app.toggle_mute();
                }
            });
        }

        // Resize
        {
            let app = app.clone();
            let window = web_sys::window().ok_or("no window")?;
            listen(&window, "resize", move |_event: web_sys::Event| {
                app.resize();
                app.draw();
            });
        }

        Ok(())
    }

    fn setup_buttons(app: &Rc<App>, document: &Document) {
        for id in ["startButton", "restartButton"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                listen(&btn, "click", move |event: MouseEvent| {
                    event.stop_propagation();
                    app.start();
                    kick(&app);
                });
            }
        }
    }

    fn setup_focus_handlers(app: &Rc<App>, window: &web_sys::Window) {
        // Window blur (tab switch, click outside)
        {
            let app = app.clone();
            listen(window, "blur", move |_event: web_sys::FocusEvent| {
                let settings = app.settings.borrow();
                if settings.mute_on_blur {
                    app.audio.borrow_mut().set_muted(true, &settings);
                    log::info!("Muted (window blur)");
                }
            });
        }

        // Window focus
        {
            let app = app.clone();
            listen(window, "focus", move |_event: web_sys::FocusEvent| {
                let settings = app.settings.borrow();
                app.audio.borrow_mut().apply_settings(&settings);
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("SkyFlap failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("SkyFlap (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match skyflap::Tuning::load_from_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => skyflap::Tuning::default(),
    };

    match headless::run(tuning, 5) {
        Ok(scores) => println!("Headless runs finished, scores: {:?}", scores),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use skyflap::consts::FRAME_MS;
    use skyflap::hooks::ManualDriver;
    use skyflap::persistence::MemoryStore;
    use skyflap::{
        BestScoreStore, GameEvent, GameObserver, Hooks, Simulation, Tuning, TuningError, World,
    };

    /// Frames after which a headless run is stopped (two minutes)
    const MAX_FRAMES: u32 = 60 * 120;

    struct LogObserver;

    impl GameObserver for LogObserver {
        fn on_event(&mut self, event: &GameEvent) {
            match event {
                GameEvent::ScoreChanged { score } => log::debug!("score {}", score),
                GameEvent::GameOver {
                    final_score,
                    best_score,
                    medal,
                    ..
                } => log::info!(
                    "final score {} (best {}, medal {})",
                    final_score,
                    best_score,
                    medal.map(|m| m.as_str()).unwrap_or("none")
                ),
                _ => {}
            }
        }
    }

    /// Jump when the actor sinks below the centre of the next gap
    fn autopilot(sim: &Simulation) -> bool {
        let actor = sim.actor();
        let width = sim.tuning().obstacle_width;
        let target = sim
            .obstacles()
            .iter()
            .find(|o| o.x + width >= actor.left())
            .map(|o| (o.top_height + o.bottom_y) / 2.0 + 20.0)
            .unwrap_or(sim.world().height / 2.0);
        actor.pos.y > target && actor.velocity >= 0.0
    }

    /// Play `games` headless runs and return their scores
    pub fn run(tuning: Tuning, games: u32) -> Result<Vec<u32>, TuningError> {
        let driver = ManualDriver::new();
        let hooks = Hooks::new()
            .with_driver(driver.clone())
            .with_scores(BestScoreStore::new(MemoryStore::new()))
            .with_observer(LogObserver);
        let mut sim = Simulation::new(tuning, World::default(), 0x5EED, hooks)?;

        let mut now = 0.0;
        let mut scores = Vec::new();
        for _ in 0..games {
            sim.start();
            let mut frames = 0;
            while driver.take_scheduled() {
                now += FRAME_MS;
                frames += 1;
                if frames > MAX_FRAMES {
                    sim.stop();
                    break;
                }
                if autopilot(&sim) {
                    sim.on_jump_signal();
                }
                sim.tick(now);
            }
            scores.push(sim.score());
        }
        Ok(scores)
    }
}
