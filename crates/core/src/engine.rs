//! Engine module - ties the grid, the value source and the subscriber lists together
//!
//! [`GridEngine::try_resolve_pair`] is the only mutating gameplay entry point. Its order of
//! operations is fixed:
//!
//! 1. validate and resolve the pair (merge or subtract), scoring immediately
//! 2. gravity over the play zone
//! 3. count the move
//! 4. game-over check; on a hit the rise is skipped
//! 5. rise every `rise_interval` moves, then check again
//!
//! Changing that order changes which move loses when both checks would trip.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::events::{Subscribers, SubscriptionId};
use crate::grid::Grid;
use crate::pair::PairPreview;
use crate::rng::ValueSource;
use crate::snapshot::{GameSnapshot, SnapshotError};
use crate::types::{Cell, Coord, Phase};

/// The puzzle engine
#[derive(Debug)]
pub struct GridEngine {
    config: EngineConfig,
    grid: Grid,
    values: ValueSource,
    score: u32,
    moves: u32,
    phase: Phase,
    /// Monotonic session id (increments on every new game).
    session_id: u32,
    subscribers: Subscribers,
}

impl GridEngine {
    /// Build an engine and start its first game.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            grid: Grid::new(config.width, config.height, config.out_zone_rows),
            values: ValueSource::new(config.seed_mode(), config.min_value, config.max_value),
            score: 0,
            moves: 0,
            phase: Phase::Playing,
            session_id: 0,
            subscribers: Subscribers::default(),
            config,
        };
        engine.start_session();
        Ok(engine)
    }

    /// Reset to a fresh game. Listeners stay attached; they get score-changed, then
    /// board-changed.
    pub fn new_game(&mut self) {
        self.values.reseed();
        self.start_session();
        self.subscribers.score_changed(self.score);
        self.subscribers.board_changed(&self.grid);
    }

    fn start_session(&mut self) {
        self.score = 0;
        self.moves = 0;
        self.phase = Phase::Playing;
        self.session_id = self.session_id.wrapping_add(1);

        self.grid.clear();
        let values = &mut self.values;
        self.grid
            .fill_bottom_with(self.config.initial_filled_rows, || values.next_value());
        self.grid.apply_gravity();

        debug!(
            "New game: session {} seed {} ({} tiles)",
            self.session_id,
            self.values.seed(),
            self.grid.occupied_count()
        );
    }

    /// Resolve the pair `a`/`b`.
    ///
    /// Returns false, with nothing changed, when the pair is out of bounds, not edge-adjacent,
    /// touches the out zone, or touches an empty cell. Every other call returns true, including
    /// the one that ends the game.
    ///
    /// The engine does not refuse moves after game over; the game-over notification only fires
    /// on the transition.
    pub fn try_resolve_pair(&mut self, a: Coord, b: Coord) -> bool {
        let Some(preview) = PairPreview::evaluate(&self.grid, a, b) else {
            trace!("Rejected pair {} {}", a, b);
            return false;
        };

        preview.apply(&mut self.grid);
        self.add_score(preview.score_delta);
        self.grid.apply_gravity();
        self.moves = self.moves.saturating_add(1);

        trace!(
            "Resolved {:?} {} {} (+{}), moves {}",
            preview.kind,
            a,
            b,
            preview.score_delta,
            self.moves
        );

        if self.grid.is_out_zone_occupied() {
            self.finish_game_over();
            return true;
        }

        if self.config.rise_interval > 0 && self.moves % self.config.rise_interval == 0 {
            self.rise();

            if self.grid.is_out_zone_occupied() {
                self.finish_game_over();
                return true;
            }
        }

        self.subscribers.board_changed(&self.grid);
        true
    }

    fn add_score(&mut self, add: u32) {
        let score = self.score.saturating_add(add);
        if score == self.score {
            return;
        }
        self.score = score;
        self.subscribers.score_changed(self.score);
    }

    fn rise(&mut self) {
        let values = &mut self.values;
        self.grid.rise_with(|| values.next_value());
        debug!("Row rise after move {}", self.moves);
    }

    fn finish_game_over(&mut self) {
        self.subscribers.board_changed(&self.grid);
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;
        info!(
            "Game over: session {} score {} after {} moves",
            self.session_id, self.score, self.moves
        );
        self.subscribers.game_over(self.score);
    }

    /// What [`try_resolve_pair`](Self::try_resolve_pair) would do, without doing it.
    /// `None` exactly when that call would return false.
    pub fn preview_pair(&self, a: Coord, b: Coord) -> Option<PairPreview> {
        PairPreview::evaluate(&self.grid, a, b)
    }

    /// In-bounds play-zone neighbours of `c` (right, left, up, down order).
    pub fn neighbors(&self, c: Coord) -> ArrayVec<Coord, 4> {
        c.neighbors4()
            .into_iter()
            .filter(|&n| self.grid.in_play_zone(n))
            .collect()
    }

    /// Every resolvable pair, each listed once with the left/lower cell first.
    pub fn legal_pairs(&self) -> Vec<(Coord, Coord)> {
        let mut pairs = Vec::new();
        let width = self.grid.width() as i32;
        let play_height = self.grid.play_height() as i32;

        for y in 0..play_height {
            for x in 0..width {
                if !self.grid.is_occupied(x, y) {
                    continue;
                }
                let here = Coord::new(x, y);
                for there in [here.offset(1, 0), here.offset(0, 1)] {
                    if PairPreview::evaluate(&self.grid, here, there).is_some() {
                        pairs.push((here, there));
                    }
                }
            }
        }
        pairs
    }

    pub fn has_legal_pair(&self) -> bool {
        !self.legal_pairs().is_empty()
    }

    /// Load a saved position. Score, moves and phase come from the snapshot; the value
    /// stream continues from where it is. Emits score-changed, then board-changed.
    ///
    /// The snapshot must match the grid shape, out zone included. A snapshot still marked in
    /// play may not hold tiles in the out zone.
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        snapshot.check_against(
            self.grid.width(),
            self.grid.height(),
            self.grid.out_zone_rows(),
        )?;

        self.grid.copy_from_cells(&snapshot.cells);
        self.score = snapshot.score;
        self.moves = snapshot.moves;
        self.phase = if snapshot.playable() {
            Phase::Playing
        } else {
            Phase::GameOver
        };

        debug!(
            "Restored position: score {} moves {} ({} tiles)",
            self.score,
            self.moves,
            self.grid.occupied_count()
        );
        self.subscribers.score_changed(self.score);
        self.subscribers.board_changed(&self.grid);
        Ok(())
    }

    /// Copy the observable state into `out`, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.out_zone_rows = self.grid.out_zone_rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.moves = self.moves;
        out.moves_until_rise = self.moves_until_rise();
        out.game_over = self.is_game_over();
        out.session_id = self.session_id;
        out.seed = self.values.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Register a handler called with the new score on every increase and on reset.
    pub fn on_score_changed(&mut self, handler: impl FnMut(u32) + Send + 'static) -> SubscriptionId {
        self.subscribers.add_score(Box::new(handler))
    }

    /// Register a handler called after every successful mutation.
    pub fn on_board_changed(
        &mut self,
        handler: impl FnMut(&Grid) + Send + 'static,
    ) -> SubscriptionId {
        self.subscribers.add_board(Box::new(handler))
    }

    /// Register a handler called with the final score once per session.
    pub fn on_game_over(&mut self, handler: impl FnMut(u32) + Send + 'static) -> SubscriptionId {
        self.subscribers.add_game_over(Box::new(handler))
    }

    /// Returns false if the id is unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Bounds-safe read; out of bounds reads as empty.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid.cell(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn play_height(&self) -> usize {
        self.grid.play_height()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Moves left before the next rise; 0 when rising is disabled.
    pub fn moves_until_rise(&self) -> u32 {
        let interval = self.config.rise_interval;
        if interval == 0 {
            return 0;
        }
        interval - self.moves % interval
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Seed of the current session
    pub fn seed(&self) -> u32 {
        self.values.seed()
    }
}
