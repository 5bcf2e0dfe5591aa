use anyhow::{anyhow, Result};

use crate::autoplay::{GreedyPolicy, Policy, RandomPolicy, SessionReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Greedy,
    Random,
}

impl PolicyKind {
    pub fn build(self, seed: u32) -> Box<dyn Policy> {
        match self {
            PolicyKind::Greedy => Box::new(GreedyPolicy),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub policy: PolicyKind,
    pub games: u32,
    /// 0 means no cap
    pub max_moves: u32,
    /// Forces a fixed seed, overriding the loaded config
    pub seed: Option<u32>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Greedy,
            games: 1,
            max_moves: 10_000,
            seed: None,
        }
    }
}

pub fn parse_run_args(args: &[String]) -> Result<RunArgs> {
    let mut run = RunArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--policy" => {
                let v = value_for(args, &mut i, flag)?;
                run.policy = match v {
                    "greedy" => PolicyKind::Greedy,
                    "random" => PolicyKind::Random,
                    other => return Err(anyhow!("unknown policy: {}", other)),
                };
            }
            "--games" => {
                let v = value_for(args, &mut i, flag)?;
                run.games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --games value: {}", v))?;
                if run.games == 0 {
                    return Err(anyhow!("--games must be at least 1"));
                }
            }
            "--max-moves" => {
                let v = value_for(args, &mut i, flag)?;
                run.max_moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --max-moves value: {}", v))?;
            }
            "--seed" => {
                let v = value_for(args, &mut i, flag)?;
                run.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(run)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

pub fn summary_lines(reports: &[SessionReport]) -> [String; 3] {
    let games = reports.len() as u64;
    let best = reports.iter().map(|r| r.score).max().unwrap_or(0);
    let total: u64 = reports.iter().map(|r| r.score as u64).sum();
    let mean = if games == 0 { 0 } else { total / games };
    let over = reports
        .iter()
        .filter(|r| r.stop == crate::autoplay::StopReason::GameOver)
        .count();

    [
        format!("GAMES {}", games),
        format!("BEST {} MEAN {}", best, mean),
        format!("GAME_OVER {} / {}", over, games),
    ]
}
