//! Input routing: key codes and pointer positions to sim intents
//!
//! Pure logic only. DOM event listeners live in the loop driver; they
//! translate events into logical-space points and key codes and ask this
//! module what the player meant. Button hit boxes use inclusive bounds.

use glam::Vec2;

use crate::consts::{BASE_HEIGHT, BASE_WIDTH};
use crate::sim::{GamePhase, Intent, Rect};

/// On-canvas UI buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiButton {
    Start,
    Restart,
    Pause,
    Continue,
    Left,
    Right,
}

impl UiButton {
    /// Text drawn when the button sprite has not loaded
    pub fn fallback_label(&self) -> &'static str {
        match self {
            UiButton::Start => "START",
            UiButton::Restart => "RESTART",
            UiButton::Pause => "||",
            UiButton::Continue => "CONTINUE",
            UiButton::Left => "\u{2190}",
            UiButton::Right => "\u{2192}",
        }
    }
}

const BUTTON_W: f32 = 100.0;
const BUTTON_H: f32 = 50.0;

/// Button hit rectangles in logical space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiLayout {
    pub start: Rect,
    pub restart: Rect,
    pub pause: Rect,
    pub continue_: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl UiLayout {
    pub fn new() -> Self {
        let center = Rect::new(
            BASE_WIDTH / 2.0 - BUTTON_W / 2.0,
            BASE_HEIGHT / 2.0 - BUTTON_H,
            BUTTON_W,
            BUTTON_H,
        );
        Self {
            start: center,
            restart: center,
            pause: Rect::new(BASE_WIDTH - 60.0, 20.0, 40.0, 40.0),
            continue_: Rect::new(
                BASE_WIDTH / 2.0 - BUTTON_W / 2.0,
                BASE_HEIGHT / 2.0 + BUTTON_H,
                BUTTON_W,
                BUTTON_H,
            ),
            left: Rect::new(20.0, BASE_HEIGHT - BUTTON_H - 20.0, BUTTON_W, BUTTON_H),
            right: Rect::new(
                BASE_WIDTH - BUTTON_W - 20.0,
                BASE_HEIGHT - BUTTON_H - 20.0,
                BUTTON_W,
                BUTTON_H,
            ),
        }
    }

    pub fn rect(&self, button: UiButton) -> Rect {
        match button {
            UiButton::Start => self.start,
            UiButton::Restart => self.restart,
            UiButton::Pause => self.pause,
            UiButton::Continue => self.continue_,
            UiButton::Left => self.left,
            UiButton::Right => self.right,
        }
    }

    /// Buttons shown (and hit-testable) in the given phase
    pub fn visible(phase: GamePhase) -> &'static [UiButton] {
        match phase {
            GamePhase::Idle => &[UiButton::Start, UiButton::Left, UiButton::Right],
            GamePhase::Running => &[UiButton::Pause, UiButton::Left, UiButton::Right],
            GamePhase::Paused => &[UiButton::Continue, UiButton::Left, UiButton::Right],
            GamePhase::GameOver => &[UiButton::Restart, UiButton::Left, UiButton::Right],
        }
    }
}

/// Map a pointer-down in logical space to an intent.
///
/// Buttons take priority; a press on empty canvas while Running is a jump.
pub fn intent_for_pointer_down(layout: &UiLayout, p: Vec2, phase: GamePhase) -> Option<Intent> {
    match phase {
        GamePhase::Idle if layout.start.contains(p) => return Some(Intent::Start),
        GamePhase::GameOver if layout.restart.contains(p) => return Some(Intent::Restart),
        GamePhase::Running if layout.pause.contains(p) => return Some(Intent::Pause),
        GamePhase::Paused if layout.continue_.contains(p) => return Some(Intent::Resume),
        _ => {}
    }

    if phase == GamePhase::Running {
        if layout.left.contains(p) {
            return Some(Intent::MoveLeft);
        }
        if layout.right.contains(p) {
            return Some(Intent::MoveRight);
        }
        return Some(Intent::Jump);
    }
    None
}

/// Pointer release always stops horizontal movement
pub fn intent_for_pointer_up() -> Intent {
    Intent::StopMove
}

/// Map a key-down (KeyboardEvent.code) to an intent
pub fn intent_for_key(code: &str, phase: GamePhase) -> Option<Intent> {
    match code {
        "ArrowLeft" => Some(Intent::MoveLeft),
        "ArrowRight" => Some(Intent::MoveRight),
        "ArrowUp" | "Space" => Some(Intent::Jump),
        "Tab" => match phase {
            GamePhase::Running => Some(Intent::Pause),
            GamePhase::Paused => Some(Intent::Resume),
            _ => None,
        },
        "Enter" => match phase {
            GamePhase::Idle => Some(Intent::Start),
            GamePhase::GameOver => Some(Intent::Restart),
            _ => None,
        },
        _ => None,
    }
}

/// Map a key-up to an intent (movement keys release the strafe)
pub fn intent_for_key_release(code: &str) -> Option<Intent> {
    match code {
        "ArrowLeft" | "ArrowRight" => Some(Intent::StopMove),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(r: Rect) -> Vec2 {
        r.pos + r.size * 0.5
    }

    #[test]
    fn start_button_only_works_while_idle() {
        let layout = UiLayout::new();
        let p = center(layout.start);
        assert_eq!(
            intent_for_pointer_down(&layout, p, GamePhase::Idle),
            Some(Intent::Start)
        );
        // Same spot mid-run is a jump, not a start
        assert_eq!(
            intent_for_pointer_down(&layout, p, GamePhase::Running),
            Some(Intent::Jump)
        );
        assert_eq!(intent_for_pointer_down(&layout, p, GamePhase::Paused), None);
    }

    #[test]
    fn restart_button_only_works_after_game_over() {
        let layout = UiLayout::new();
        let p = center(layout.restart);
        assert_eq!(
            intent_for_pointer_down(&layout, p, GamePhase::GameOver),
            Some(Intent::Restart)
        );
        assert_eq!(intent_for_pointer_down(&layout, p, GamePhase::Idle), None);
    }

    #[test]
    fn pause_and_continue_buttons_toggle() {
        let layout = UiLayout::new();
        assert_eq!(
            intent_for_pointer_down(&layout, center(layout.pause), GamePhase::Running),
            Some(Intent::Pause)
        );
        assert_eq!(
            intent_for_pointer_down(&layout, center(layout.continue_), GamePhase::Paused),
            Some(Intent::Resume)
        );
    }

    #[test]
    fn strafe_buttons_and_open_canvas_while_running() {
        let layout = UiLayout::new();
        assert_eq!(
            intent_for_pointer_down(&layout, center(layout.left), GamePhase::Running),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_pointer_down(&layout, center(layout.right), GamePhase::Running),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_pointer_down(&layout, Vec2::new(320.0, 40.0), GamePhase::Running),
            Some(Intent::Jump)
        );
    }

    #[test]
    fn button_border_counts_as_a_hit() {
        let layout = UiLayout::new();
        let corner = layout.pause.pos;
        assert_eq!(
            intent_for_pointer_down(&layout, corner, GamePhase::Running),
            Some(Intent::Pause)
        );
    }

    #[test]
    fn key_table_matches_the_controls() {
        assert_eq!(
            intent_for_key("ArrowLeft", GamePhase::Running),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_key("ArrowRight", GamePhase::Running),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_key("ArrowUp", GamePhase::Running),
            Some(Intent::Jump)
        );
        assert_eq!(
            intent_for_key("Space", GamePhase::Running),
            Some(Intent::Jump)
        );
        assert_eq!(intent_for_key("KeyQ", GamePhase::Running), None);
    }

    #[test]
    fn tab_toggles_pause_by_phase() {
        assert_eq!(
            intent_for_key("Tab", GamePhase::Running),
            Some(Intent::Pause)
        );
        assert_eq!(
            intent_for_key("Tab", GamePhase::Paused),
            Some(Intent::Resume)
        );
        assert_eq!(intent_for_key("Tab", GamePhase::Idle), None);
        assert_eq!(intent_for_key("Tab", GamePhase::GameOver), None);
    }

    #[test]
    fn enter_starts_or_restarts() {
        assert_eq!(
            intent_for_key("Enter", GamePhase::Idle),
            Some(Intent::Start)
        );
        assert_eq!(
            intent_for_key("Enter", GamePhase::GameOver),
            Some(Intent::Restart)
        );
        assert_eq!(intent_for_key("Enter", GamePhase::Running), None);
    }

    #[test]
    fn releasing_movement_keys_stops_the_strafe() {
        assert_eq!(intent_for_key_release("ArrowLeft"), Some(Intent::StopMove));
        assert_eq!(intent_for_key_release("ArrowRight"), Some(Intent::StopMove));
        assert_eq!(intent_for_key_release("Space"), None);
    }

    #[test]
    fn visible_buttons_track_the_phase() {
        assert!(UiLayout::visible(GamePhase::Idle).contains(&UiButton::Start));
        assert!(UiLayout::visible(GamePhase::Running).contains(&UiButton::Pause));
        assert!(UiLayout::visible(GamePhase::Paused).contains(&UiButton::Continue));
        assert!(UiLayout::visible(GamePhase::GameOver).contains(&UiButton::Restart));
        assert!(!UiLayout::visible(GamePhase::Idle).contains(&UiButton::Pause));
    }
}
