//! Core domain types for N×N tic-tac-toe.

use crate::action::{Move, MoveError};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Smallest supported side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 10;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used when printing or parsing boards.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Side length of a board, validated to lie in
/// [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3×3 board.
    pub const CLASSIC: Self = Self(3);

    /// Validates a side length.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoardSizeError { size })
        }
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// A side length outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "board size {} is outside the supported range {}..={}",
    size,
    MIN_BOARD_SIZE,
    MAX_BOARD_SIZE
)]
pub struct BoardSizeError {
    /// The rejected side length.
    pub size: usize,
}

/// Error building a board from raw squares or text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length out of range.
    #[display("{_0}")]
    Size(BoardSizeError),

    /// Square count does not match the side length.
    #[display("expected {} squares for a {}x{} board, found {}", expected, size, size, found)]
    SquareCount {
        /// Side length.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Squares actually supplied.
        found: usize,
    },

    /// A row of text has a different width than the board height.
    #[display("row {} has {} cells, expected {}", row, width, expected)]
    RaggedRow {
        /// 0-based row index.
        row: usize,
        /// Cells found in the row.
        width: usize,
        /// Number of rows in the board.
        expected: usize,
    },

    /// A character that is not `X`, `O`, `.` or `_`.
    #[display("unknown mark {:?}", mark)]
    UnknownMark {
        /// The offending character.
        mark: char,
    },
}

impl From<BoardSizeError> for BoardError {
    fn from(err: BoardSizeError) -> Self {
        Self::Size(err)
    }
}

/// An N×N board, stored row-major.
///
/// Callers cannot write squares directly. The only way to change a board is
/// [`Board::with_mark`] (exposed as [`crate::apply_move`]), which returns a new
/// value and leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.get() * size.get()],
        }
    }

    /// Builds a board from row-major squares.
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, BoardError> {
        let expected = size.get() * size.get();
        if squares.len() != expected {
            return Err(BoardError::SquareCount {
                size: size.get(),
                expected,
                found: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Side length as the validated newtype.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Returns true if `mv` lies on the board.
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size() && mv.col < self.size()
    }

    /// Gets the square at `mv`, or `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        self.index(mv).map(|i| self.squares[i])
    }

    /// Checks if the square at `mv` exists and is empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size())
    }

    /// Returns a copy of this board with `player`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `mv` is off the board
    /// - [`MoveError::CellOccupied`] if the square already holds a mark
    pub fn with_mark(&self, mv: Move, player: Player) -> Result<Self, MoveError> {
        let Some(index) = self.index(mv) else {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size(),
            });
        };
        if self.squares[index] != Square::Empty {
            return Err(MoveError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = self.clone();
        next.squares[index] = Square::Occupied(player);
        Ok(next)
    }

    fn index(&self, mv: Move) -> Option<usize> {
        self.contains(mv).then(|| mv.row * self.size() + mv.col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, square) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses rows separated by `/` or newlines, e.g. `"XX./.O./..."`.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let size = BoardSize::new(rows.len())?;

        let mut squares = Vec::with_capacity(size.get() * size.get());
        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size.get() {
                return Err(BoardError::RaggedRow {
                    row: r,
                    width,
                    expected: size.get(),
                });
            }
            for mark in row.chars() {
                squares.push(match mark {
                    'X' | 'x' => Square::Occupied(Player::X),
                    'O' | 'o' => Square::Occupied(Player::O),
                    '.' | '_' => Square::Empty,
                    other => return Err(BoardError::UnknownMark { mark: other }),
                });
            }
        }
        Self::from_squares(size, squares)
    }
}

/// Wire shape of a board; validated on the way back in.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    size: BoardSize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_squares(raw.size, raw.squares)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            squares: board.squares,
        }
    }
}
