//! Terminal events → one input frame per tick.
//!
//! Fire and restart are edge-triggered: each mouse press or `R` key press
//! counts once, in the frame that drains it. Key repeats and releases are
//! ignored, so holding a button never turns into automatic fire.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::collision::Point;
use crate::consts::{PLAYER_START_X, PLAYER_START_Y};
use crate::viewport::Viewport;

/// Input for a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputFrame {
    /// Last known pointer position in world pixels.
    pub pointer: Point,
    /// A fire press arrived since the previous frame.
    pub fire: bool,
    /// A restart press arrived since the previous frame.
    pub restart: bool,
    /// Quit was requested.
    pub quit: bool,
}

impl Default for InputFrame {
    fn default() -> Self {
        InputFrame {
            pointer: Point::new(PLAYER_START_X, PLAYER_START_Y),
            fire: false,
            restart: false,
            quit: false,
        }
    }
}

/// Accumulates events between ticks.
#[derive(Debug, Default)]
pub struct InputState {
    pending: InputFrame,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &Event, viewport: &Viewport) {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            Event::Key(key) => self.handle_key(key),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: &Viewport) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pending.pointer = viewport.to_world(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pending.pointer = viewport.to_world(mouse.column, mouse.row);
                self.pending.fire = true;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.pending.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pending.quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.pending.restart = true,
            _ => {}
        }
    }

    /// Hand out the accumulated frame and clear its edges. The pointer and
    /// a quit request persist.
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = self.pending;
        self.pending.fire = false;
        self.pending.restart = false;
        frame
    }
}
