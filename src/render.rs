//! Canvas 2D renderer (WASM only)
//!
//! Draws the whole frame from scratch every callback. Every sprite has a
//! flat-color fallback so the game is playable before (or without) assets.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::{ImageAsset, Sprites};
use crate::consts::{BASE_HEIGHT, BASE_WIDTH, GROUND_HEIGHT, GROUND_Y};
use crate::highscores::HighScores;
use crate::input::{UiButton, UiLayout};
use crate::sim::{GamePhase, GameState, Rect};
use crate::viewport::Viewport;

const SKY_COLOR: &str = "#cce7ff";
const GROUND_COLOR: &str = "#333";
const PLAYER_COLOR: &str = "#555";
const OBSTACLE_COLOR: &str = "#333";
const BUTTON_FILL: &str = "#007bff";
const BUTTON_BORDER: &str = "#0056b3";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.5)";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Paint one frame
    pub fn draw(
        &self,
        state: &GameState,
        viewport: &Viewport,
        layout: &UiLayout,
        sprites: &Sprites,
        highscores: &HighScores,
    ) {
        self.draw_background(viewport, sprites);
        self.draw_ground(viewport, sprites);
        self.draw_player(state, viewport, sprites);
        self.draw_obstacles(state, viewport, sprites);
        self.draw_score(state, viewport);
        self.draw_buttons(state.phase, viewport, layout, sprites);

        match state.phase {
            GamePhase::Paused => self.draw_pause_overlay(viewport),
            GamePhase::GameOver => self.draw_game_over_overlay(state, viewport, highscores),
            _ => {}
        }
    }

    fn draw_sprite_or_fill(&self, asset: &ImageAsset, rect: Rect, viewport: &Viewport, color: &str) {
        let screen = viewport.to_screen_rect(rect);
        if asset.is_ready() {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    asset.element(),
                    screen.pos.x as f64,
                    screen.pos.y as f64,
                    screen.size.x as f64,
                    screen.size.y as f64,
                )
                .ok();
        } else {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(
                screen.pos.x as f64,
                screen.pos.y as f64,
                screen.size.x as f64,
                screen.size.y as f64,
            );
        }
    }

    fn draw_background(&self, viewport: &Viewport, sprites: &Sprites) {
        let full = Rect::new(0.0, 0.0, BASE_WIDTH, BASE_HEIGHT);
        self.draw_sprite_or_fill(&sprites.background, full, viewport, SKY_COLOR);
    }

    fn draw_ground(&self, viewport: &Viewport, sprites: &Sprites) {
        let strip = Rect::new(0.0, GROUND_Y, BASE_WIDTH, GROUND_HEIGHT);
        self.draw_sprite_or_fill(&sprites.ground, strip, viewport, GROUND_COLOR);
    }

    fn draw_player(&self, state: &GameState, viewport: &Viewport, sprites: &Sprites) {
        // On the title screen the mascot pose replaces the run sprite
        let sprite = if state.phase == GamePhase::Idle && sprites.start_character.is_ready() {
            &sprites.start_character
        } else {
            &sprites.player
        };
        self.draw_sprite_or_fill(sprite, state.player.bounds(), viewport, PLAYER_COLOR);
    }

    fn draw_obstacles(&self, state: &GameState, viewport: &Viewport, sprites: &Sprites) {
        for obstacle in &state.obstacles {
            self.draw_sprite_or_fill(&sprites.obstacle, obstacle.bounds(), viewport, OBSTACLE_COLOR);
        }
    }

    fn draw_score(&self, state: &GameState, viewport: &Viewport) {
        self.ctx.set_fill_style_str("#000");
        self.ctx
            .set_font(&format!("{}px Arial", viewport.px(20.0) as u32));
        self.ctx.set_text_align("left");
        self.ctx
            .fill_text(
                &format!("Score: {}", state.score),
                viewport.px(10.0) as f64,
                viewport.px(28.0) as f64,
            )
            .ok();
    }

    fn draw_buttons(
        &self,
        phase: GamePhase,
        viewport: &Viewport,
        layout: &UiLayout,
        sprites: &Sprites,
    ) {
        for &button in UiLayout::visible(phase) {
            self.draw_button(button, layout.rect(button), viewport, sprites);
        }
    }

    fn draw_button(&self, button: UiButton, rect: Rect, viewport: &Viewport, sprites: &Sprites) {
        let asset = sprites.for_button(button);
        let screen = viewport.to_screen_rect(rect);
        if asset.is_ready() {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    asset.element(),
                    screen.pos.x as f64,
                    screen.pos.y as f64,
                    screen.size.x as f64,
                    screen.size.y as f64,
                )
                .ok();
            return;
        }

        self.ctx.set_fill_style_str(BUTTON_FILL);
        self.ctx.fill_rect(
            screen.pos.x as f64,
            screen.pos.y as f64,
            screen.size.x as f64,
            screen.size.y as f64,
        );
        self.ctx.set_stroke_style_str(BUTTON_BORDER);
        self.ctx.set_line_width(viewport.px(2.0) as f64);
        self.ctx.stroke_rect(
            screen.pos.x as f64,
            screen.pos.y as f64,
            screen.size.x as f64,
            screen.size.y as f64,
        );

        self.ctx.set_fill_style_str("#fff");
        self.ctx
            .set_font(&format!("{}px Arial", viewport.px(16.0) as u32));
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(
                button.fallback_label(),
                (screen.pos.x + screen.size.x / 2.0) as f64,
                (screen.pos.y + screen.size.y / 2.0 + viewport.px(5.0)) as f64,
            )
            .ok();
    }

    fn draw_overlay(&self, viewport: &Viewport) {
        self.ctx.set_fill_style_str(OVERLAY_COLOR);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn draw_pause_overlay(&self, viewport: &Viewport) {
        self.draw_overlay(viewport);
        self.ctx.set_fill_style_str("#fff");
        self.ctx
            .set_font(&format!("{}px Arial", viewport.px(32.0) as u32));
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(
                "PAUSED",
                (viewport.width / 2.0) as f64,
                viewport.px(BASE_HEIGHT / 2.0 - 40.0) as f64,
            )
            .ok();
    }

    fn draw_game_over_overlay(
        &self,
        state: &GameState,
        viewport: &Viewport,
        highscores: &HighScores,
    ) {
        self.draw_overlay(viewport);

        let cx = (viewport.width / 2.0) as f64;
        self.ctx.set_fill_style_str("#fff");
        self.ctx.set_text_align("center");

        self.ctx
            .set_font(&format!("{}px Arial", viewport.px(32.0) as u32));
        self.ctx
            .fill_text("GAME OVER", cx, viewport.px(100.0) as f64)
            .ok();

        self.ctx
            .set_font(&format!("{}px Arial", viewport.px(20.0) as u32));
        self.ctx
            .fill_text(
                &format!("Score: {}", state.score),
                cx,
                viewport.px(135.0) as f64,
            )
            .ok();
        if let Some(best) = highscores.top_score() {
            self.ctx
                .fill_text(&format!("Best: {}", best), cx, viewport.px(160.0) as f64)
                .ok();
        }
    }
}

/// Resize the canvas backing store to the viewport
pub fn apply_viewport(canvas: &HtmlCanvasElement, viewport: &Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}
