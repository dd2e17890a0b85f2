//! Difficulty dispatcher.
//!
//! Maps (difficulty, round, starter) to an ordered chain of rules and runs
//! the chain until one rule names a cell. Priority within every chain is
//! finish, block, strategize, seek space, random.

use crate::error::{BoardError, DecisionError};
use crate::position::Position;
use crate::rules::winner;
use crate::strategy::{
    RoundSelector, build_strategy, find_empty_space, pick_random_empty, try_block, try_finish,
};
use crate::types::{Board, Difficulty, Player, Starter};
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Cell the hard agent always opens with when it starts.
pub const OPENING_MOVE: Position = Position::TopLeft;

/// How the strategist is entered from a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyEntry {
    /// Pass the round number.
    ByRound,
    /// Pass whatever the earlier rules chose.
    CarryThrough,
}

/// One link in a rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fixed opening cell.
    Opening,
    /// Complete the agent's line.
    Finish,
    /// Deny the opponent's line.
    Block,
    /// Consult the strategy tables.
    Strategize(StrategyEntry),
    /// Positional fallback.
    SeekSpace,
    /// Uniform-random empty cell.
    Random,
}

/// Rule that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Fixed opening.
    Opening,
    /// Finisher.
    Finish,
    /// Blocker.
    Block,
    /// Strategist.
    Strategy,
    /// Space-seeker.
    SeekSpace,
    /// Random-seeker.
    Random,
}

impl From<Step> for RuleKind {
    fn from(step: Step) -> Self {
        match step {
            Step::Opening => RuleKind::Opening,
            Step::Finish => RuleKind::Finish,
            Step::Block => RuleKind::Block,
            Step::Strategize(_) => RuleKind::Strategy,
            Step::SeekSpace => RuleKind::SeekSpace,
            Step::Random => RuleKind::Random,
        }
    }
}

/// The agent's chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Decision {
    /// Cell the agent took.
    pub position: Position,
    /// Rule that chose it.
    pub rule: RuleKind,
}

/// Builds the rule chain for a turn.
///
/// Hard play opens from the tables in rounds 1 and 2 and special-cases
/// round 4; every other round runs the full chain.
#[instrument]
pub fn plan(difficulty: Difficulty, round: u8, starter: Starter) -> Vec<Step> {
    use Step::*;
    use StrategyEntry::*;

    match difficulty {
        Difficulty::Easy => vec![Random],
        Difficulty::Medium => vec![Finish, Block, Random],
        Difficulty::Hard => match (round, starter) {
            (1, Starter::Agent) => vec![Opening],
            // The round 2 table assumes the agent opened A0; other openings fall back to space.
            (1, Starter::Opponent) | (2, Starter::Agent) => vec![Strategize(ByRound), SeekSpace],
            // Same chain as round 5+, kept apart from the round 4 special case.
            (2, Starter::Opponent) | (3, _) => {
                vec![Finish, Block, Strategize(CarryThrough), SeekSpace]
            }
            (4, _) => vec![Finish, Block, SeekSpace],
            _ => vec![Finish, Block, Strategize(CarryThrough), SeekSpace],
        },
    }
}

/// Marks each side has placed before the agent moves in `round`.
///
/// Returns `(agent, opponent)`. Rounds start at 1.
pub fn expected_marks(round: u8, starter: Starter) -> (usize, usize) {
    let done = usize::from(round.saturating_sub(1));
    match starter {
        Starter::Agent => (done, done),
        Starter::Opponent => (done, done + 1),
    }
}

/// Validates a request before any rule runs.
fn check_request(board: &Board, round: u8, starter: Starter) -> Result<(), DecisionError> {
    if round == 0 {
        return Err(DecisionError::InvalidRound { round });
    }
    if let Some(player) = winner(board) {
        return Err(BoardError::AlreadyWon { player }.into());
    }

    let (expected_agent, expected_opponent) = expected_marks(round, starter);
    let agent = board.count(Player::Agent);
    let opponent = board.count(Player::Opponent);
    if (agent, opponent) != (expected_agent, expected_opponent) {
        warn!(round, %starter, agent, opponent, "Mark counts do not fit the round");
        return Err(BoardError::InconsistentMarks {
            round,
            starter,
            agent,
            opponent,
            expected_agent,
            expected_opponent,
        }
        .into());
    }
    Ok(())
}

/// Runs one step, returning the cell it names.
fn run_step<R: Rng + ?Sized>(
    step: Step,
    board: &Board,
    round: u8,
    starter: Starter,
    carried: Option<Position>,
    rng: &mut R,
) -> Option<Position> {
    match step {
        Step::Opening => Some(OPENING_MOVE).filter(|&pos| board.is_empty(pos)),
        Step::Finish => try_finish(board),
        Step::Block => try_block(board),
        Step::Strategize(StrategyEntry::ByRound) => {
            build_strategy(board, RoundSelector::ByNumber(round), starter)
        }
        Step::Strategize(StrategyEntry::CarryThrough) => {
            build_strategy(board, RoundSelector::CarryMove(carried), starter)
        }
        Step::SeekSpace => find_empty_space(board),
        Step::Random => pick_random_empty(board, rng),
    }
}

/// Decides the agent's move and writes it into `board`.
///
/// On success the board holds exactly one more agent mark. A rejected
/// request or an exhausted chain leaves the board untouched.
///
/// # Errors
///
/// - [`DecisionError::InvalidRound`] for round 0.
/// - [`DecisionError::InvalidBoardState`] when a side already has a line, or
///   when the mark counts do not match `round` and `starter` (see
///   [`expected_marks`]).
/// - [`DecisionError::ExhaustedCascade`] when no rule finds a cell. Every chain
///   ends in a rule that succeeds on a non-full board, so this needs a full one,
///   which only an opponent-started round 5 can hold.
#[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
pub fn decide_move<R: Rng + ?Sized>(
    board: &mut Board,
    round: u8,
    starter: Starter,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Decision, DecisionError> {
    check_request(board, round, starter)?;

    let mut carried = None;
    for step in plan(difficulty, round, starter) {
        carried = run_step(step, board, round, starter, carried, rng);
        if let Some(pos) = carried {
            let decision = Decision::new(board.place_agent(pos), step.into());
            debug!(%pos, rule = ?decision.rule, "Rule produced move");
            return Ok(decision);
        }
        debug!(?step, "Rule declined");
    }

    warn!(round, %difficulty, "Every rule declined");
    Err(DecisionError::ExhaustedCascade { round, difficulty })
}

/// The automated opponent for one session.
///
/// Owns the difficulty and random source so the turn loop only passes the
/// board, round and starter.
#[derive(Debug, Clone)]
pub struct Bot {
    difficulty: Difficulty,
    rng: StdRng,
}

impl Bot {
    /// Creates a bot seeded from the operating system.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "Creating bot");
        Self {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a bot with a fixed seed, for reproducible games.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        info!(%difficulty, seed, "Creating seeded bot");
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the bot's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Plays the bot's move for `round`.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn play(
        &mut self,
        board: &mut Board,
        round: u8,
        starter: Starter,
    ) -> Result<Decision, DecisionError> {
        decide_move(board, round, starter, self.difficulty, &mut self.rng)
    }
}
