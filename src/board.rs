use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error for board coordinate queries.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `[0, 8)`.
    #[error("invalid row or column: ({row}, {col})")]
    OutOfRange { row: i32, col: i32 },
}

/// Error when parsing a square from algebraic notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseSquareError(String);

/// One cell of the 8×8 grid, identified by (row, column).
///
/// Both coordinates are guaranteed to be in `[0, 8)` by construction,
/// so occupancy queries and move generation never see an out-of-range
/// square. Raw coordinates from input enter through [`Square::new`] or
/// the `TryFrom<(i32, i32)>` impl and are rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a signed (row, column) offset.
    ///
    /// Returns `None` if the result leaves the board, so candidate
    /// generation can filter off-board destinations without ever
    /// materialising an invalid square.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = BoardError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        u8::try_from(row)
            .ok()
            .zip(u8::try_from(col).ok())
            .and_then(|(r, c)| Square::new(r, c))
            .ok_or(BoardError::OutOfRange { row, col })
    }
}

/// Algebraic notation: file a–h maps to column 0–7, rank 1–8 to row 0–7.
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'1' + self.row) as char
        )
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Self {
                row: rank as u8 - b'1',
                col: file as u8 - b'a',
            }),
            _ => Err(ParseSquareError(s.to_string())),
        }
    }
}

/// 8×8 occupancy grid: which squares have something sitting on them,
/// independent of piece identity. No color or kind is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    occupied: [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            occupied: [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates a board with the initial layout already applied.
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.reset_initial_layout();
        board
    }

    /// Marks the two outermost rank-pairs occupied and everything else
    /// empty: rows {0, 1} and {6, 7}, all columns.
    pub fn reset_initial_layout(&mut self) {
        for (row, cols) in self.occupied.iter_mut().enumerate() {
            let occupied = matches!(row, 0 | 1 | 6 | 7);
            cols.fill(occupied);
        }
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied[square.row() as usize][square.col() as usize]
    }

    /// Sets occupancy for one square.
    ///
    /// Used by mock scenarios and tests; the live selection flow never
    /// mutates occupancy after the initial layout.
    pub fn set_occupied(&mut self, square: Square, occupied: bool) {
        self.occupied[square.row() as usize][square.col() as usize] = occupied;
    }
}
