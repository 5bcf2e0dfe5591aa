//! Change notifications.
//!
//! Each engine owns its own subscriber lists; there is no shared registry. Handlers are
//! `'static` closures stored inside the engine and called while the engine is mutably
//! borrowed, so a handler has no way to call back into the engine that is notifying it.

use std::fmt;

use crate::grid::Grid;

/// Handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type ScoreHandler = Box<dyn FnMut(u32) + Send>;
pub type BoardHandler = Box<dyn FnMut(&Grid) + Send>;
pub type GameOverHandler = Box<dyn FnMut(u32) + Send>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    score: Vec<(SubscriptionId, ScoreHandler)>,
    board: Vec<(SubscriptionId, BoardHandler)>,
    game_over: Vec<(SubscriptionId, GameOverHandler)>,
}

impl Subscribers {
    fn next_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    pub(crate) fn add_score(&mut self, handler: ScoreHandler) -> SubscriptionId {
        let id = self.next_id();
        self.score.push((id, handler));
        id
    }

    pub(crate) fn add_board(&mut self, handler: BoardHandler) -> SubscriptionId {
        let id = self.next_id();
        self.board.push((id, handler));
        id
    }

    pub(crate) fn add_game_over(&mut self, handler: GameOverHandler) -> SubscriptionId {
        let id = self.next_id();
        self.game_over.push((id, handler));
        id
    }

    /// Ids are unique across the three lists, so at most one entry goes.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.len();
        self.score.retain(|(sid, _)| *sid != id);
        self.board.retain(|(sid, _)| *sid != id);
        self.game_over.retain(|(sid, _)| *sid != id);
        self.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.score.len() + self.board.len() + self.game_over.len()
    }

    pub(crate) fn score_changed(&mut self, score: u32) {
        for (_, handler) in &mut self.score {
            handler(score);
        }
    }

    pub(crate) fn board_changed(&mut self, grid: &Grid) {
        for (_, handler) in &mut self.board {
            handler(grid);
        }
    }

    pub(crate) fn game_over(&mut self, final_score: u32) {
        for (_, handler) in &mut self.game_over {
            handler(final_score);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("score", &self.score.len())
            .field("board", &self.board.len())
            .field("game_over", &self.game_over.len())
            .finish()
    }
}
