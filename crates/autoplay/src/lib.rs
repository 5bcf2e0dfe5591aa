//! Headless pair selection.
//!
//! A [`Policy`] looks at an engine and picks the next pair; [`run_session`] feeds its choices
//! into the engine until the game ends, the board has no legal pair left, or a move cap is hit.
//! Policies only read the engine: every decision goes through
//! [`GridEngine::try_resolve_pair`] like any other caller.

use std::fmt;

use tracing::{debug, info};

use tile_rise_core::{GridEngine, SimpleRng};
use tile_rise_types::Coord;

pub trait Policy {
    fn name(&self) -> &'static str;

    /// Next pair to play, or `None` if the policy has nothing to offer.
    fn choose(&mut self, engine: &GridEngine) -> Option<(Coord, Coord)>;
}

/// Highest immediate score; ties go to the first pair in [`GridEngine::legal_pairs`] order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, engine: &GridEngine) -> Option<(Coord, Coord)> {
        let mut best: Option<((Coord, Coord), u32)> = None;
        for (a, b) in engine.legal_pairs() {
            let Some(preview) = engine.preview_pair(a, b) else {
                continue;
            };
            if best.map_or(true, |(_, score)| preview.score_delta > score) {
                best = Some(((a, b), preview.score_delta));
            }
        }
        best.map(|(pair, _)| pair)
    }
}

/// Uniform choice among legal pairs, reproducible from its seed.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: SimpleRng,
}

impl RandomPolicy {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, engine: &GridEngine) -> Option<(Coord, Coord)> {
        let pairs = engine.legal_pairs();
        if pairs.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(pairs.len() as u32) as usize;
        pairs.get(idx).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver,
    NoLegalPair,
    MoveCap,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::GameOver => "game over",
            StopReason::NoLegalPair => "no legal pair",
            StopReason::MoveCap => "move cap",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub seed: u32,
    pub score: u32,
    pub moves: u32,
    pub stop: StopReason,
}

/// Play the engine's current session with `policy`. `max_moves == 0` means no cap.
pub fn run_session(
    engine: &mut GridEngine,
    policy: &mut dyn Policy,
    max_moves: u32,
) -> SessionReport {
    let stop = loop {
        if engine.is_game_over() {
            break StopReason::GameOver;
        }
        if max_moves > 0 && engine.moves() >= max_moves {
            break StopReason::MoveCap;
        }
        let Some((a, b)) = policy.choose(engine) else {
            break StopReason::NoLegalPair;
        };
        if !engine.try_resolve_pair(a, b) {
            // A policy offering an illegal pair would loop forever otherwise.
            debug!("{} offered rejected pair {} {}", policy.name(), a, b);
            break StopReason::NoLegalPair;
        }
    };

    let report = SessionReport {
        seed: engine.seed(),
        score: engine.score(),
        moves: engine.moves(),
        stop,
    };
    info!(
        "Session finished ({}): policy {} seed {} score {} moves {}",
        report.stop,
        policy.name(),
        report.seed,
        report.score,
        report.moves
    );
    report
}
