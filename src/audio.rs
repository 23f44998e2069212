//! Audio playback over HTML audio elements (WASM only)
//!
//! Browsers reject `play()` before the first user gesture; every play call
//! routes its promise through a shared rejection handler so an autoplay block
//! logs a warning instead of an unhandled rejection.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::assets::{AudioAsset, Sounds};
use crate::settings::Settings;

/// Delay before the game-over music starts, after the crash sound
pub const GAME_OVER_MUSIC_DELAY_MS: i32 = 500;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player leaves the ground
    Jump,
    /// Obstacle cleared
    Score,
    /// Player hit an obstacle
    Collision,
    /// Run ended
    GameOver,
}

thread_local! {
    static PLAY_ERROR: Closure<dyn FnMut(JsValue)> =
        Closure::new(|err: JsValue| {
            log::warn!("Audio playback blocked: {:?}", err);
        });
}

fn play_element(el: &HtmlAudioElement) {
    if let Ok(promise) = el.play() {
        PLAY_ERROR.with(|handler| {
            let _ = promise.catch(handler);
        });
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sounds: Sounds,
    music_volume: f32,
    sfx_volume: f32,
    game_over_timeout: Option<i32>,
}

impl AudioManager {
    pub fn new(sounds: Sounds, settings: &Settings) -> Self {
        let mut mgr = Self {
            sounds,
            music_volume: 0.0,
            sfx_volume: 0.0,
            game_over_timeout: None,
        };
        mgr.apply_settings(settings);
        mgr
    }

    /// Pick up volume changes
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.music_volume = settings.effective_music_volume();
        self.sfx_volume = settings.effective_sfx_volume();
        self.sounds
            .background_music
            .element()
            .set_volume(self.music_volume as f64);
        self.sounds
            .game_over_music
            .element()
            .set_volume(self.music_volume as f64);
    }

    fn asset_for(&self, effect: SoundEffect) -> &AudioAsset {
        match effect {
            SoundEffect::Jump => &self.sounds.jump,
            SoundEffect::Score => &self.sounds.score,
            SoundEffect::Collision => &self.sounds.collision,
            SoundEffect::GameOver => &self.sounds.game_over_sound,
        }
    }

    /// Play a sound effect from the start, cutting off a previous play
    pub fn play(&self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let asset = self.asset_for(effect);
        if !asset.is_ready() {
            return;
        }
        let el = asset.element();
        el.set_current_time(0.0);
        el.set_volume(self.sfx_volume as f64);
        play_element(el);
    }

    /// Start the looping background music from the top
    pub fn start_music(&self) {
        let el = self.sounds.background_music.element();
        el.set_current_time(0.0);
        play_element(el);
    }

    /// Pause the background music in place
    pub fn pause_music(&self) {
        let _ = self.sounds.background_music.element().pause();
    }

    /// Resume the background music where it left off
    pub fn resume_music(&self) {
        play_element(self.sounds.background_music.element());
    }

    /// Stop the background music and rewind it
    pub fn stop_music(&self) {
        let el = self.sounds.background_music.element();
        let _ = el.pause();
        el.set_current_time(0.0);
    }

    /// Queue the game-over music to start after a short beat
    pub fn schedule_game_over_music(&mut self) {
        self.cancel_game_over_music();

        let Some(window) = web_sys::window() else {
            return;
        };
        let el = self.sounds.game_over_music.element().clone();
        let cb = Closure::once(move || {
            el.set_current_time(0.0);
            play_element(&el);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            GAME_OVER_MUSIC_DELAY_MS,
        ) {
            Ok(id) => self.game_over_timeout = Some(id),
            Err(err) => log::warn!("Failed to schedule game-over music: {:?}", err),
        }
        cb.forget();
    }

    /// Stop the game-over music, whether pending or already playing
    pub fn cancel_game_over_music(&mut self) {
        if let Some(id) = self.game_over_timeout.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        let el = self.sounds.game_over_music.element();
        let _ = el.pause();
        el.set_current_time(0.0);
    }
}
