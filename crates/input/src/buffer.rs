//! Per-frame action buffer.
//!
//! Key events arrive between frames; the buffer collects the resulting actions
//! in arrival order so the game loop can apply them serially before the next
//! gravity check. Storage is a fixed-capacity `ArrayVec`, so buffering never
//! allocates.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Maximum actions buffered between two frames
pub const ACTION_BUFFER_CAPACITY: usize = 32;

/// What a single key event did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// An action was queued.
    Queued(GameAction),
    /// The user asked to leave the game.
    Quit,
    /// Unmapped key, release event, or buffer full.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ActionBuffer {
    actions: ArrayVec<GameAction, ACTION_BUFFER_CAPACITY>,
}

impl ActionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event.
    ///
    /// Presses and terminal auto-repeats both queue an action; releases are
    /// ignored. When the buffer is full the newest action is dropped.
    pub fn feed(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }
        if should_quit(key) {
            return KeyOutcome::Quit;
        }

        match handle_key_event(key) {
            Some(action) => match self.actions.try_push(action) {
                Ok(()) => KeyOutcome::Queued(action),
                Err(_) => KeyOutcome::Ignored,
            },
            None => KeyOutcome::Ignored,
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Take all buffered actions in arrival order, leaving the buffer empty.
    pub fn drain(&mut self) -> impl Iterator<Item = GameAction> + '_ {
        self.actions.drain(..)
    }
}
