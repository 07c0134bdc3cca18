//! Per-frame input batching for terminal environments.
//!
//! The frame loop feeds every polled crossterm event in; the handler keeps
//! the mapped actions in a fixed-capacity buffer until the game drains them.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Actions accepted per frame. Presses beyond this are dropped; at most two
/// buffered turns ever matter to the game.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

/// Collects mapped actions and the quit request between two frames.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    quit: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event. Non-key events are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            self.handle_key(*key);
        }
    }

    /// Feed one key event.
    ///
    /// Auto-repeat counts as a press; release events carry no action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(action) = handle_key_event(key) {
            self.push(action);
        }
    }

    /// Queue an action. A full batch drops further turns, but pause and
    /// restart replace the oldest queued turn.
    fn push(&mut self, action: GameAction) {
        if self.actions.try_push(action).is_ok() || matches!(action, GameAction::Turn(_)) {
            return;
        }
        if let Some(i) = self
            .actions
            .iter()
            .position(|a| matches!(a, GameAction::Turn(_)))
        {
            self.actions.remove(i);
            self.actions.push(action);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn pending(&self) -> &[GameAction] {
        &self.actions
    }

    /// Drain the actions gathered since the last call, oldest first.
    pub fn take_actions(&mut self) -> ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME> {
        std::mem::take(&mut self.actions)
    }
}
