//! Opening and mid-game case tables.
//!
//! The tables are hand-tuned and keyed on who started the match, the round
//! bucket, and which cells the opponent holds. Each [`StrategyRule`] names a
//! target cell and the board patterns that trigger it; the target must also be
//! empty. Rules are tried top to bottom and the first hit wins.

use crate::position::Position;
use crate::types::{Board, Player, Starter};
use tracing::{debug, instrument};

const A0: Position = Position::TopLeft;
const A1: Position = Position::MiddleLeft;
const A2: Position = Position::BottomLeft;
const B0: Position = Position::TopCenter;
const B1: Position = Position::Center;
const B2: Position = Position::BottomCenter;
const C0: Position = Position::TopRight;
const C1: Position = Position::MiddleRight;
const C2: Position = Position::BottomRight;

/// How the caller selects the strategist's branch.
///
/// The first two agent turns pass the round number. Later turns pass the
/// move already chosen by the earlier rules in the cascade, if any, and the
/// strategist reads the board shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSelector {
    /// Explicit round number.
    ByNumber(u8),
    /// Carry-through from an earlier rule; `None` when nothing was chosen.
    CarryMove(Option<Position>),
}

/// Round classification used to pick a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundBucket {
    /// The agent's first move.
    First,
    /// The agent's second move.
    Second,
    /// Any later move.
    Later,
}

impl RoundSelector {
    /// Bucket this selector maps to.
    pub fn bucket(self) -> RoundBucket {
        match self {
            RoundSelector::ByNumber(1) => RoundBucket::First,
            RoundSelector::ByNumber(2) => RoundBucket::Second,
            RoundSelector::ByNumber(_) | RoundSelector::CarryMove(_) => RoundBucket::Later,
        }
    }
}

/// A single cell test.
#[derive(Debug, Clone, Copy)]
enum Cond {
    /// Cell held by the opponent.
    Opp(Position),
    /// Cell empty.
    Free(Position),
    /// Cell held by either side.
    Taken(Position),
}

impl Cond {
    fn holds(self, board: &Board) -> bool {
        match self {
            Cond::Opp(pos) => board.is_held_by(pos, Player::Opponent),
            Cond::Free(pos) => board.is_empty(pos),
            Cond::Taken(pos) => !board.is_empty(pos),
        }
    }
}

/// Target cell plus the patterns that trigger it.
///
/// `when` is a disjunction of conjunctions; `&[&[]]` always matches.
#[derive(Debug, Clone, Copy)]
struct StrategyRule {
    target: Position,
    when: &'static [&'static [Cond]],
}

impl StrategyRule {
    fn matches(&self, board: &Board) -> bool {
        board.is_empty(self.target)
            && self
                .when
                .iter()
                .any(|all| all.iter().all(|cond| cond.holds(board)))
    }
}

use Cond::{Free, Opp, Taken};

const ALWAYS: &[&[Cond]] = &[&[]];

const fn rule(target: Position, when: &'static [&'static [Cond]]) -> StrategyRule {
    StrategyRule { target, when }
}

const AGENT_FIRST: &[StrategyRule] = &[
    rule(B1, &[&[Opp(A0)], &[Opp(A2)], &[Opp(C0)], &[Opp(C2)]]),
    rule(A0, ALWAYS),
];

const AGENT_SECOND: &[StrategyRule] = &[
    rule(C2, &[&[Opp(B1)]]),
    rule(A2, &[&[Opp(B0)], &[Opp(C0)], &[Opp(B2)], &[Opp(C2)]]),
    rule(C0, ALWAYS),
];

const AGENT_LATER: &[StrategyRule] = &[
    rule(B1, &[&[Opp(B0), Opp(A1)]]),
    rule(C0, ALWAYS),
    rule(A2, ALWAYS),
    rule(C2, ALWAYS),
];

const OPPONENT_FIRST: &[StrategyRule] = &[rule(A0, &[&[Opp(B1)]]), rule(B1, ALWAYS)];

const OPPONENT_SECOND: &[StrategyRule] = &[
    rule(B0, &[&[Opp(A0), Opp(C2)], &[Opp(C0), Taken(A2)]]),
    rule(
        A2,
        &[
            &[Opp(B1), Opp(C2)],
            &[Opp(A1), Opp(B2)],
            &[Opp(A1), Opp(C1)],
        ],
    ),
    rule(A0, &[&[Opp(A1), Opp(B0)]]),
    rule(C0, &[&[Opp(B0), Opp(C1)]]),
    rule(C2, &[&[Opp(B2), Opp(C1)]]),
    rule(B2, ALWAYS),
    rule(A2, ALWAYS),
];

const OPPONENT_LATER: &[StrategyRule] = &[
    rule(A0, &[&[Opp(A1), Opp(B0)]]),
    rule(C0, &[&[Opp(B0), Opp(C1)]]),
    rule(C2, &[&[Opp(B2), Opp(C1)]]),
    rule(
        A2,
        &[
            &[Opp(A1), Opp(B2)],
            &[Opp(A1), Opp(B0), Free(C2), Free(C0)],
        ],
    ),
    rule(
        A1,
        &[
            &[Opp(B0), Opp(B2), Free(A0), Free(C1)],
            &[Opp(B1), Opp(C2)],
        ],
    ),
];

fn table(starter: Starter, bucket: RoundBucket) -> &'static [StrategyRule] {
    match (starter, bucket) {
        (Starter::Agent, RoundBucket::First) => AGENT_FIRST,
        (Starter::Agent, RoundBucket::Second) => AGENT_SECOND,
        (Starter::Agent, RoundBucket::Later) => AGENT_LATER,
        (Starter::Opponent, RoundBucket::First) => OPPONENT_FIRST,
        (Starter::Opponent, RoundBucket::Second) => OPPONENT_SECOND,
        (Starter::Opponent, RoundBucket::Later) => OPPONENT_LATER,
    }
}

/// Chooses a setup or forking cell from the case tables.
///
/// A carried move is passed through untouched. Otherwise the table for
/// `(starter, bucket)` is consulted; `None` means no entry matched.
#[instrument(skip(board))]
pub fn build_strategy(board: &Board, selector: RoundSelector, starter: Starter) -> Option<Position> {
    if let RoundSelector::CarryMove(Some(pos)) = selector {
        debug!(%pos, "Strategist carried move through");
        return Some(pos);
    }

    let bucket = selector.bucket();
    let found = table(starter, bucket)
        .iter()
        .find(|rule| rule.matches(board))
        .map(|rule| rule.target);
    debug!(?bucket, ?found, "Strategist consulted table");
    found
}
