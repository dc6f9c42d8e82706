//! Shared types module - constants and actions used across the workspace
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from core logic, input mapping and rendering alike.
//!
//! # Arena Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, `y = 0`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval, one row per second |
//! | `FRAME_MS` | 16 | Frame scheduling interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//! assert_eq!(action.as_str(), "moveLeft");
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! ```

/// Arena width in cells (12 columns)
pub const ARENA_WIDTH: usize = 12;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Gravity interval in milliseconds
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Frame scheduling interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Cell value stored in the arena and in shape matrices.
///
/// `0` is empty; any other value is occupied and doubles as a color id.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Player actions exposed to the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    /// All actions in a stable order
    pub const ALL: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    /// Parse from the camelCase action name
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveLeft" => Some(GameAction::MoveLeft),
            "moveRight" => Some(GameAction::MoveRight),
            "softDrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// camelCase action name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }

    /// Horizontal direction for movement actions
    pub fn direction(&self) -> Option<i32> {
        match self {
            GameAction::MoveLeft => Some(-1),
            GameAction::MoveRight => Some(1),
            _ => None,
        }
    }
}
