//! Image and audio asset loading (WASM only)
//!
//! Assets load in the background while the game runs. Each asset tracks its
//! own load state; the renderer and audio manager check `is_ready` and fall
//! back to placeholder drawing or silence until then. A failed load stays
//! failed, the fallback is permanent for that asset.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, HtmlImageElement};

use crate::input::UiButton;

/// Load state of a single asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Ready,
    Failed,
}

/// An image with its load state
pub struct ImageAsset {
    element: HtmlImageElement,
    state: Rc<Cell<AssetState>>,
}

impl ImageAsset {
    /// Start loading an image. The state flips exactly once, on load or error.
    pub fn load(src: &str) -> Result<Self, JsValue> {
        let element = HtmlImageElement::new()?;
        let state = Rc::new(Cell::new(AssetState::Pending));

        {
            let state = state.clone();
            let onload = Closure::<dyn FnMut()>::new(move || {
                state.set(AssetState::Ready);
            });
            element.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
        }
        {
            let state = state.clone();
            let src = src.to_string();
            let onerror = Closure::<dyn FnMut()>::new(move || {
                log::warn!("Failed to load image: {}", src);
                state.set(AssetState::Failed);
            });
            element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();
        }

        element.set_src(src);
        Ok(Self { element, state })
    }

    pub fn state(&self) -> AssetState {
        self.state.get()
    }

    pub fn is_ready(&self) -> bool {
        self.state.get() == AssetState::Ready
    }

    /// The underlying element, for drawImage
    pub fn element(&self) -> &HtmlImageElement {
        &self.element
    }
}

/// An audio clip with its load state
pub struct AudioAsset {
    element: HtmlAudioElement,
    state: Rc<Cell<AssetState>>,
}

impl AudioAsset {
    pub fn load(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        element.set_preload("auto");
        let state = Rc::new(Cell::new(AssetState::Pending));

        {
            let state = state.clone();
            let oncanplay = Closure::<dyn FnMut()>::new(move || {
                state.set(AssetState::Ready);
            });
            element.set_oncanplaythrough(Some(oncanplay.as_ref().unchecked_ref()));
            oncanplay.forget();
        }
        {
            let state = state.clone();
            let src = src.to_string();
            let onerror = Closure::<dyn FnMut()>::new(move || {
                log::warn!("Failed to load audio: {}", src);
                state.set(AssetState::Failed);
            });
            element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();
        }

        Ok(Self { element, state })
    }

    pub fn is_ready(&self) -> bool {
        self.state.get() == AssetState::Ready
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

/// All image assets
pub struct Sprites {
    pub player: ImageAsset,
    pub obstacle: ImageAsset,
    pub background: ImageAsset,
    pub ground: ImageAsset,
    pub start_character: ImageAsset,
    pub start_button: ImageAsset,
    pub restart_button: ImageAsset,
    pub pause_button: ImageAsset,
    pub continue_button: ImageAsset,
    pub left_button: ImageAsset,
    pub right_button: ImageAsset,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            player: ImageAsset::load("assets/player.png")?,
            obstacle: ImageAsset::load("assets/obstacle.png")?,
            background: ImageAsset::load("assets/background.png")?,
            ground: ImageAsset::load("assets/ground.png")?,
            start_character: ImageAsset::load("assets/start_character.png")?,
            start_button: ImageAsset::load("assets/start_button.png")?,
            restart_button: ImageAsset::load("assets/restart_button.png")?,
            pause_button: ImageAsset::load("assets/pause_button.png")?,
            continue_button: ImageAsset::load("assets/continue_button.png")?,
            left_button: ImageAsset::load("assets/left_button.png")?,
            right_button: ImageAsset::load("assets/right_button.png")?,
        })
    }

    pub fn for_button(&self, button: UiButton) -> &ImageAsset {
        match button {
            UiButton::Start => &self.start_button,
            UiButton::Restart => &self.restart_button,
            UiButton::Pause => &self.pause_button,
            UiButton::Continue => &self.continue_button,
            UiButton::Left => &self.left_button,
            UiButton::Right => &self.right_button,
        }
    }
}

/// All audio assets
pub struct Sounds {
    pub background_music: AudioAsset,
    pub jump: AudioAsset,
    pub score: AudioAsset,
    pub collision: AudioAsset,
    pub game_over_sound: AudioAsset,
    pub game_over_music: AudioAsset,
}

impl Sounds {
    pub fn load() -> Result<Self, JsValue> {
        let background_music = AudioAsset::load("assets/background_music.mp3")?;
        background_music.element().set_loop(true);
        let game_over_music = AudioAsset::load("assets/game_over_music.mp3")?;
        game_over_music.element().set_loop(true);

        Ok(Self {
            background_music,
            jump: AudioAsset::load("assets/jump.mp3")?,
            score: AudioAsset::load("assets/score.mp3")?,
            collision: AudioAsset::load("assets/collision.mp3")?,
            game_over_sound: AudioAsset::load("assets/game_over.mp3")?,
            game_over_music,
        })
    }
}
