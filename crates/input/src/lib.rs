//! Terminal input module.
//!
//! Maps `crossterm` key events onto the four [`GameAction`](types::GameAction)s
//! and buffers them between frames. Independent of any UI framework.

pub mod buffer;
pub mod map;

pub use blockfall_types as types;

pub use buffer::{ActionBuffer, KeyOutcome, ACTION_BUFFER_CAPACITY};
pub use map::{handle_key_event, should_quit};
