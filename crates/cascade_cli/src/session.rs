//! Interactive matches between the bot and a human.

use crate::input::{InputError, Prompter};
use crate::render::render_board;
use cascade_core::{Board, Bot, DecisionError, Player, Square, Starter, has_won, is_draw};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side completed a line.
    Won(Player),
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Line printed when the match ends.
    pub fn announcement(self) -> &'static str {
        match self {
            Outcome::Won(Player::Agent) => "The machine won!",
            Outcome::Won(Player::Opponent) => "You won!",
            Outcome::Draw => "The game is a draw!",
        }
    }
}

/// Results across the matches of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Matches the bot won.
    pub agent: u32,
    /// Matches the human won.
    pub opponent: u32,
    /// Drawn matches.
    pub draws: u32,
}

impl Scoreboard {
    /// Tallies one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::Agent) => self.agent += 1,
            Outcome::Won(Player::Opponent) => self.opponent += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}: {} | {}: {} | draws: {}",
            Player::Agent.symbol(),
            self.agent,
            Player::Opponent.symbol(),
            self.opponent,
            self.draws
        )
    }
}

/// Failure that ends a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The human's input could not be read.
    #[display("{_0}")]
    Input(InputError),

    /// The bot could not move.
    #[display("{_0}")]
    Decision(DecisionError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Input(InputError::Io(err))
    }
}

/// Win check for the side that just moved, then the draw check.
pub fn check_end(board: &Board, mover: Player) -> Option<Outcome> {
    if has_won(board, mover) {
        Some(Outcome::Won(mover))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// A run of matches against one bot.
///
/// The starter alternates after every match.
#[derive(Debug)]
pub struct Session<R, W> {
    bot: Bot,
    prompter: Prompter<R, W>,
    scoreboard: Scoreboard,
    next_starter: Starter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session whose first match is opened by `first_starter`.
    #[instrument(skip(bot, prompter), fields(difficulty = %bot.difficulty()))]
    pub fn new(bot: Bot, first_starter: Starter, prompter: Prompter<R, W>) -> Self {
        info!("Starting session");
        Self {
            bot,
            prompter,
            scoreboard: Scoreboard::default(),
            next_starter: first_starter,
        }
    }

    /// Current tally.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Who opens the next match.
    pub fn next_starter(&self) -> Starter {
        self.next_starter
    }

    /// Consumes the session, returning the prompter.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Plays one match, records the result and flips the starter.
    #[instrument(skip(self), fields(starter = %self.next_starter))]
    pub fn play_match(&mut self) -> Result<Outcome, SessionError> {
        let starter = self.next_starter;
        let order = match starter {
            Starter::Agent => [Player::Agent, Player::Opponent],
            Starter::Opponent => [Player::Opponent, Player::Agent],
        };
        let mut board = Board::new();
        let mut round: u8 = 0;

        let outcome = 'rounds: loop {
            round += 1;
            debug!(round, "Round begins");
            for mover in order {
                match mover {
                    Player::Agent => {
                        let decision = self.bot.play(&mut board, round, starter)?;
                        writeln!(
                            self.prompter.output(),
                            "The machine plays {}.",
                            decision.position.coordinate()
                        )?;
                    }
                    Player::Opponent => {
                        writeln!(self.prompter.output(), "{}", render_board(&board))?;
                        let position = self.prompter.prompt_move(&board)?;
                        board.set(position, Square::Occupied(Player::Opponent));
                    }
                }
                if let Some(outcome) = check_end(&board, mover) {
                    break 'rounds outcome;
                }
            }
        };

        info!(?outcome, round, "Match finished");
        self.scoreboard.record(outcome);
        self.next_starter = starter.toggle();

        let output = self.prompter.output();
        writeln!(output, "{}", render_board(&board))?;
        writeln!(output, "{}", outcome.announcement())?;
        writeln!(output, "{}", self.scoreboard)?;
        Ok(outcome)
    }

    /// Plays matches until the human declines another.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard, SessionError> {
        loop {
            self.play_match()?;
            if !self.prompter.confirm("Play again?")? {
                break;
            }
        }
        info!(score = %self.scoreboard, "Session over");
        Ok(self.scoreboard)
    }
}
