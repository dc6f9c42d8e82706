//! Game state module - the single owner of arena, player and clock
//!
//! All player actions are validated transitions: a candidate piece is built,
//! checked against the arena, and only committed when it does not collide.
//! A rejected action leaves the state untouched.
//!
//! Timing follows a frame-driven clock: [`GameState::update`] receives a
//! monotonic timestamp each frame, accumulates the elapsed time, and performs
//! a gravity drop once more than the drop interval has passed. The drop itself
//! resets the accumulator, which is why a manual soft drop also postpones the
//! next gravity step.

use log::{debug, trace};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::surface::Surface;
use crate::types::{GameAction, ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS};

/// Result of one drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move down; it was merged and a new piece spawned.
    Landed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Grid,
    player: Piece,
    /// Milliseconds accumulated since the last drop
    drop_counter: u64,
    drop_interval: u64,
    /// Timestamp passed to the previous `update`
    last_time: u64,
    /// Number of merges so far
    landed: u64,
}

impl GameState {
    /// Empty `width x height` arena with the default drop interval
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_arena(Grid::new(width, height), DROP_INTERVAL_MS)
    }

    /// Start from an existing arena with a freshly spawned player
    pub fn with_arena(arena: Grid, drop_interval_ms: u64) -> Self {
        let player = Piece::spawn(arena.width());
        debug!("spawned piece at ({}, {})", player.x, player.y);
        Self {
            arena,
            player,
            drop_counter: 0,
            drop_interval: drop_interval_ms,
            last_time: 0,
            landed: 0,
        }
    }

    pub fn arena(&self) -> &Grid {
        &self.arena
    }

    pub fn player(&self) -> &Piece {
        &self.player
    }

    pub fn drop_counter(&self) -> u64 {
        self.drop_counter
    }

    pub fn drop_interval(&self) -> u64 {
        self.drop_interval
    }

    pub fn last_time(&self) -> u64 {
        self.last_time
    }

    /// How many pieces have been merged into the arena
    pub fn landed_count(&self) -> u64 {
        self.landed
    }

    /// Replace the player with a fresh canonical piece at the top center.
    ///
    /// A spawn position that already collides is not detected.
    pub fn reset(&mut self) {
        self.player = Piece::spawn(self.arena.width());
        debug!("spawned piece at ({}, {})", self.player.x, self.player.y);
    }

    /// Commit `candidate` as the player unless it collides
    fn try_replace(&mut self, candidate: Piece) -> bool {
        if self.arena.collides(&candidate) {
            return false;
        }
        self.player = candidate;
        true
    }

    /// Shift the player one column in direction `dir` (`-1` or `1`).
    ///
    /// Returns false if the move was rejected; the player is then unchanged.
    pub fn move_horizontal(&mut self, dir: i32) -> bool {
        let moved = self.try_replace(self.player.translated(dir, 0));
        if !moved {
            trace!("rejected move {} at x={}", dir, self.player.x);
        }
        moved
    }

    /// Rotate the player clockwise in place.
    ///
    /// A rotation that would collide is rejected and the shape is left exactly
    /// as it was.
    pub fn rotate(&mut self) -> bool {
        let rotated = self.try_replace(self.player.rotated());
        if !rotated {
            trace!("rejected rotation at ({}, {})", self.player.x, self.player.y);
        }
        rotated
    }

    /// Move the player down one row, or merge it and spawn a new one.
    ///
    /// Always resets the drop counter.
    pub fn drop(&mut self) -> DropOutcome {
        let outcome = if self.try_replace(self.player.translated(0, 1)) {
            DropOutcome::Fell
        } else {
            let written = self.arena.merge(&self.player);
            self.landed += 1;
            debug!(
                "merged piece at ({}, {}), {} cells",
                self.player.x, self.player.y, written
            );
            self.reset();
            DropOutcome::Landed
        };
        self.drop_counter = 0;
        outcome
    }

    /// Apply one player action. Returns false if it was rejected.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => action
                .direction()
                .map_or(false, |dir| self.move_horizontal(dir)),
            GameAction::SoftDrop => {
                self.drop();
                true
            }
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Advance the gravity clock to `time_ms`.
    ///
    /// Drops once when the accumulated time exceeds the drop interval.
    /// Timestamps that go backwards count as zero elapsed time.
    pub fn update(&mut self, time_ms: u64) -> Option<DropOutcome> {
        let delta = time_ms.saturating_sub(self.last_time);
        self.last_time = time_ms;
        self.drop_counter = self.drop_counter.saturating_add(delta);

        if self.drop_counter > self.drop_interval {
            Some(self.drop())
        } else {
            None
        }
    }

    /// Clear `surface`, then paint every occupied arena cell and the player.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for (x, y, cell) in self.arena.occupied_cells() {
            surface.draw_cell(x, y, cell);
        }
        for (x, y, cell) in self.player.occupied_cells() {
            surface.draw_cell(x, y, cell);
        }
    }

    /// One frame: gravity check, then render unconditionally.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        time_ms: u64,
        surface: &mut S,
    ) -> Option<DropOutcome> {
        let outcome = self.update(time_ms);
        self.draw(surface);
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}
