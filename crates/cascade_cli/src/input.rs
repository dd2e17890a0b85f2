//! Reading the human's answers from a line-oriented stream.

use cascade_core::{Board, Column, Difficulty, Position, Row};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// A typed coordinate the board cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// Not a column letter followed by a row number.
    #[display("{input:?} is not a coordinate; type a column and a row, like A 1")]
    Malformed {
        /// What was typed.
        input: String,
    },

    /// Shaped like a coordinate but off the board.
    #[display("{input:?} is off the board; columns are A-C and rows are 1-3")]
    OutOfRange {
        /// What was typed.
        input: String,
    },

    /// The cell already holds a mark.
    #[display("{} is already taken", position.coordinate())]
    Occupied {
        /// The taken cell.
        position: Position,
    },
}

/// Failure to get a usable answer.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The input stream ended.
    #[display("Input closed")]
    Closed,

    /// Too many rejected answers in a row.
    #[display("Gave up after {attempts} invalid answers")]
    TooManyAttempts {
        /// Answers rejected.
        attempts: u32,
    },

    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Parses `"A 1"`, `"a 1"` or `"A1"` into a cell.
///
/// Columns are letters A to C and rows are numbered 1 to 3 from the top.
pub fn parse_coordinate(text: &str) -> Result<Position, MoveRejection> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let malformed = || MoveRejection::Malformed {
        input: text.trim().to_string(),
    };

    let mut chars = compact.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(malformed)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let number: usize = digits.parse().map_err(|_| malformed())?;

    let out_of_range = || MoveRejection::OutOfRange {
        input: text.trim().to_string(),
    };
    let column = Column::from_letter(letter).ok_or_else(out_of_range)?;
    let row = Row::from_number(number).ok_or_else(out_of_range)?;
    Ok(Position::at(column, row))
}

/// Parses a coordinate and checks the cell is free on `board`.
pub fn parse_move(board: &Board, text: &str) -> Result<Position, MoveRejection> {
    let position = parse_coordinate(text)?;
    if board.is_empty(position) {
        Ok(position)
    } else {
        Err(MoveRejection::Occupied { position })
    }
}

/// Asks questions on `output` and reads answers from `input`.
///
/// Every prompt gives up after `max_attempts` rejected answers.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter. A limit of zero is treated as one.
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Stream the prompts are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input stream closed");
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Repeats `question` until `parse` accepts an answer.
    fn ask<T, E: std::fmt::Display>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, InputError> {
        for attempt in 1..=self.max_attempts {
            write!(self.output, "{question} ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    warn!(attempt, %answer, %reason, "Rejected answer");
                    writeln!(self.output, "{reason}")?;
                }
            }
        }
        Err(InputError::TooManyAttempts {
            attempts: self.max_attempts,
        })
    }

    /// Asks for a free cell on `board`.
    #[instrument(skip(self, board))]
    pub fn prompt_move(&mut self, board: &Board) -> Result<Position, InputError> {
        self.ask("Your move (column and row, e.g. B 2):", |text| {
            parse_move(board, text)
        })
    }

    /// Asks a yes/no question.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, question: &str) -> Result<bool, InputError> {
        self.ask(&format!("{question} (y/n)"), |text| {
            match text.to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err("Please answer y or n"),
            }
        })
    }

    /// Asks for a difficulty from a numbered menu.
    #[instrument(skip(self))]
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, InputError> {
        writeln!(self.output, "Choose a difficulty:")?;
        for (number, difficulty) in Difficulty::iter().enumerate() {
            writeln!(self.output, "  {}. {}", number + 1, difficulty)?;
        }
        self.ask("Difficulty (1-3):", |text| {
            text.parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| Difficulty::iter().nth(index))
                .ok_or("Please pick 1, 2 or 3")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::Player;
    use std::io::Cursor;

    fn prompter(script: &str, attempts: u32) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), attempts)
    }

    #[test]
    fn test_coordinate_spellings() {
        for text in ["A 1", "a 1", "A1", "  a1  "] {
            assert_eq!(parse_coordinate(text), Ok(Position::TopLeft), "{text:?}");
        }
        assert_eq!(parse_coordinate("C 2"), Ok(Position::MiddleRight));
        assert_eq!(parse_coordinate("b3"), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_coordinate_rejections() {
        assert!(matches!(parse_coordinate(""), Err(MoveRejection::Malformed { .. })));
        assert!(matches!(parse_coordinate("1 A"), Err(MoveRejection::Malformed { .. })));
        assert!(matches!(parse_coordinate("A x"), Err(MoveRejection::Malformed { .. })));
        assert!(matches!(parse_coordinate("D 1"), Err(MoveRejection::OutOfRange { .. })));
        assert!(matches!(parse_coordinate("A 4"), Err(MoveRejection::OutOfRange { .. })));
        assert!(matches!(parse_coordinate("A 0"), Err(MoveRejection::OutOfRange { .. })));
    }

    #[test]
    fn test_signed_rows_rejected() {
        for text in ["A +1", "a+2", "B -1", "C+3"] {
            assert!(
                matches!(parse_coordinate(text), Err(MoveRejection::Malformed { .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::with_marks([(Position::Center, Player::Agent)]);
        assert_eq!(
            parse_move(&board, "B 2"),
            Err(MoveRejection::Occupied {
                position: Position::Center
            })
        );
    }

    #[test]
    fn test_prompt_move_retries_until_valid() {
        let board = Board::with_marks([(Position::TopLeft, Player::Agent)]);
        let mut prompter = prompter("Z9\nA 1\nC 3\n", 5);
        assert_eq!(prompter.prompt_move(&board).expect("valid move"), Position::BottomRight);
        let output = String::from_utf8(prompter.into_output()).expect("utf8");
        assert!(output.contains("off the board"));
        assert!(output.contains("A 1 is already taken"));
    }

    #[test]
    fn test_prompt_gives_up() {
        let mut prompter = prompter("x\ny\nz\n", 3);
        assert!(matches!(
            prompter.prompt_move(&Board::new()),
            Err(InputError::TooManyAttempts { attempts: 3 })
        ));
    }

    #[test]
    fn test_closed_input() {
        let mut prompter = prompter("", 3);
        assert!(matches!(prompter.confirm("Again?"), Err(InputError::Closed)));
    }

    #[test]
    fn test_confirm_and_difficulty() {
        let mut prompter = prompter("maybe\nY\n4\n2\n", 5);
        assert!(prompter.confirm("Again?").expect("answer"));
        assert_eq!(prompter.choose_difficulty().expect("answer"), Difficulty::Medium);
    }
}
