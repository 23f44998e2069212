//! Dino Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_dash::assets::{Sounds, Sprites};
    use dino_dash::audio::{AudioManager, SoundEffect};
    use dino_dash::highscores::HighScores;
    use dino_dash::input::{self, UiLayout};
    use dino_dash::render::{Renderer, apply_viewport};
    use dino_dash::settings::Settings;
    use dino_dash::sim::{Cue, GamePhase, GameState, Intent, tick};
    use dino_dash::viewport::Viewport;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        viewport: Viewport,
        layout: UiLayout,
        sprites: Sprites,
        renderer: Renderer,
        audio: AudioManager,
        highscores: HighScores,
    }

    impl Game {
        /// Feed an intent into the sim and act on whatever it announces
        fn apply(&mut self, intent: Intent) {
            if let Some(cue) = self.state.trigger(intent) {
                self.dispatch(cue);
            }
        }

        /// One animation frame: a single sim tick, then paint
        fn frame(&mut self) {
            let cues = tick(&mut self.state);
            for cue in cues {
                self.dispatch(cue);
            }
            self.renderer.draw(
                &self.state,
                &self.viewport,
                &self.layout,
                &self.sprites,
                &self.highscores,
            );
        }

        /// Map sim cues to audio and persistence side effects
        fn dispatch(&mut self, cue: Cue) {
            match cue {
                Cue::Started => self.audio.start_music(),
                Cue::Paused => self.audio.pause_music(),
                Cue::Resumed => self.audio.resume_music(),
                Cue::Jumped => self.audio.play(SoundEffect::Jump),
                Cue::Scored => self.audio.play(SoundEffect::Score),
                Cue::Collided => self.on_game_over(),
                Cue::Reset => {
                    self.audio.stop_music();
                    self.audio.cancel_game_over_music();
                }
            }
        }

        fn on_game_over(&mut self) {
            self.audio.stop_music();
            self.audio.play(SoundEffect::Collision);
            self.audio.play(SoundEffect::GameOver);
            self.audio.schedule_game_over_music();

            let score = self.state.score;
            if let Some(rank) = self.highscores.add_score(score, js_sys::Date::now()) {
                log::info!("New high score: {} (rank {})", score, rank);
                self.highscores.save();
            }
        }

        fn pointer_down(&mut self, canvas_x: f32, canvas_y: f32) {
            let p = self.viewport.to_logical(canvas_x, canvas_y);
            if let Some(intent) = input::intent_for_pointer_down(&self.layout, p, self.state.phase) {
                self.apply(intent);
            }
        }

        fn resize(&mut self, canvas: &HtmlCanvasElement) {
            let (w, h) = container_size();
            self.viewport = Viewport::fit(w, h);
            apply_viewport(canvas, &self.viewport);
        }
    }

    /// Window inner size in CSS pixels
    fn container_size() -> (f32, f32) {
        let fallback = (
            dino_dash::consts::BASE_WIDTH,
            dino_dash::consts::BASE_HEIGHT,
        );
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64());
        let h = window.inner_height().ok().and_then(|v| v.as_f64());
        match (w, h) {
            (Some(w), Some(h)) => (w as f32, h as f32),
            _ => fallback,
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let highscores = HighScores::load();
        let sprites = Sprites::load().expect("failed to create image elements");
        let sounds = Sounds::load().expect("failed to create audio elements");

        let (w, h) = container_size();
        let viewport = Viewport::fit(w, h);
        apply_viewport(&canvas, &viewport);

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            viewport,
            layout: UiLayout::new(),
            sprites,
            renderer: Renderer::new(ctx),
            audio: AudioManager::new(sounds, &settings),
            highscores,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(canvas.clone(), game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Dino Dash running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().pointer_down(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up releases any held movement
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let intent = input::intent_for_pointer_up();
                game.borrow_mut().apply(intent);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer_down(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let intent = input::intent_for_pointer_up();
                game.borrow_mut().apply(intent);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(intent) = input::intent_for_key(&event.code(), g.state.phase) {
                    // Keep Tab from moving focus and Space from scrolling
                    event.prevent_default();
                    g.apply(intent);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(intent) = input::intent_for_key_release(&event.code()) {
                    game.borrow_mut().apply(intent);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let Some(document) = window.document() else {
            return;
        };

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Running {
                    g.apply(Intent::Pause);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // The loop keeps running while paused; the tick is a no-op then, but the
    // frame still repaints so the pause overlay stays responsive to resizes.
    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
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
    log::info!("Dino Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless smoke sim...");
    smoke_sim();
}

/// Drive a seeded run for a few seconds of sim time and check the basics hold
#[cfg(not(target_arch = "wasm32"))]
fn smoke_sim() {
    use dino_dash::consts::{BASE_WIDTH, GROUND_Y};
    use dino_dash::sim::{GameState, Intent, tick};

    let mut state = GameState::new(12345);
    state.trigger(Intent::Start);

    for i in 0..600u32 {
        if i % 90 == 0 {
            state.trigger(Intent::Jump);
        }
        tick(&mut state);

        let p = &state.player;
        assert!(p.pos.y + p.size.y <= GROUND_Y, "player sank below the ground");
        assert!(
            p.pos.x >= 0.0 && p.pos.x + p.size.x <= BASE_WIDTH,
            "player left the play field"
        );
    }

    println!(
        "✓ Smoke sim passed! ({} ticks, score {}, {} obstacles live)",
        state.time_ticks, state.score, state.obstacles.len()
    );
}
