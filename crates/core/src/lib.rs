//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block game: the arena, the falling
//! piece, collision, merge, rotation and the gravity clock. It has **no**
//! dependencies on terminals or I/O; rendering goes through the [`Surface`]
//! trait and input arrives as [`GameAction`](types::GameAction) values.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size arena with collision detection and merge
//! - [`piece`]: square shape matrices, clockwise rotation, the falling piece
//! - [`game_state`]: movement, drop, reset and the frame clock
//! - [`surface`]: drawing contract for renderers
//!
//! # Game Rules
//!
//! - One shape only (a T), spawned horizontally centered at the top
//! - Left/right moves and rotation are rejected when they would collide
//! - Gravity drops the piece once per second; a blocked drop merges the piece
//!   into the arena and spawns a new one
//! - No line clears, no score, no game over
//!
//! Rows below the arena are not blocked unless the arena was built with
//! [`Grid::with_solid_floor`]: on an empty column path a piece falls out of
//! the bottom and keeps falling.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, GameState};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::default();
//! assert_eq!((game.player().x, game.player().y), (5, 0));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.drop(), DropOutcome::Fell);
//!
//! // Gravity: more than 1000ms must accumulate before the next drop.
//! assert_eq!(game.update(1000), None);
//! assert_eq!(game.update(1001), Some(DropOutcome::Fell));
//! ```

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod surface;

pub use blockfall_types as types;

pub use game_state::{DropOutcome, GameState};
pub use grid::Grid;
pub use piece::{spawn_x, Piece, ShapeMatrix, CANONICAL_SHAPE};
pub use surface::Surface;
