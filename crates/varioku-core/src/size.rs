//! Supported board dimensions.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use derive_more::{Display as DeriveDisplay, Error};
use serde::{Deserialize, Serialize};

/// The edge length of a puzzle board.
///
/// Boards come in three sizes. Rows and columns always hold each digit at
/// most once; only 9×9 boards additionally enforce the 3×3 box rule, so
/// 5×5 and 7×7 boards are plain Latin squares.
///
/// The size is fixed for a board's lifetime. Over the wire it is encoded as
/// its numeric edge length (5, 7, or 9), which is how resumed sessions
/// record it.
///
/// # Examples
///
/// ```
/// use varioku_core::BoardSize;
///
/// let size = BoardSize::Nine;
/// assert_eq!(size.dimension(), 9);
/// assert_eq!(size.cell_count(), 81);
/// assert_eq!(size.box_dimension(), Some(3));
///
/// // Smaller boards have no box constraint
/// assert_eq!(BoardSize::Five.box_dimension(), None);
///
/// // Round-trip through the numeric edge length
/// let size = BoardSize::try_from(7).unwrap();
/// assert_eq!(size, BoardSize::Seven);
/// assert!(BoardSize::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BoardSize {
    /// A 5×5 board with digits 1-5.
    Five,
    /// A 7×7 board with digits 1-7.
    Seven,
    /// A 9×9 board with digits 1-9 and 3×3 boxes.
    Nine,
}

impl BoardSize {
    /// Array containing all supported sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Five, Self::Seven, Self::Nine];

    /// Returns the edge length of the board (5, 7, or 9).
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Seven => 7,
            Self::Nine => 9,
        }
    }

    /// Returns the total number of cells on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use varioku_core::BoardSize;
    ///
    /// assert_eq!(BoardSize::Five.cell_count(), 25);
    /// assert_eq!(BoardSize::Nine.cell_count(), 81);
    /// ```
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Returns the edge length of the box sub-grids, if the size has any.
    ///
    /// Only 9×9 boards are divided into boxes.
    #[must_use]
    pub const fn box_dimension(self) -> Option<usize> {
        match self {
            Self::Nine => Some(3),
            Self::Five | Self::Seven => None,
        }
    }

    /// Returns the largest digit playable on this board.
    #[must_use]
    pub const fn max_digit(self) -> u8 {
        match self {
            Self::Five => 5,
            Self::Seven => 7,
            Self::Nine => 9,
        }
    }

    /// Returns the range of playable digits, `1..=N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use varioku_core::BoardSize;
    ///
    /// let digits: Vec<u8> = BoardSize::Five.digits().collect();
    /// assert_eq!(digits, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub const fn digits(self) -> RangeInclusive<u8> {
        1..=self.max_digit()
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

/// Error returned when a numeric edge length is not 5, 7, or 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
#[display("unsupported board size {value}: expected 5, 7, or 9")]
pub struct InvalidBoardSize {
    /// The rejected edge length.
    pub value: u8,
}

impl TryFrom<u8> for BoardSize {
    type Error = InvalidBoardSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            7 => Ok(Self::Seven),
            9 => Ok(Self::Nine),
            value => Err(InvalidBoardSize { value }),
        }
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.max_digit()
    }
}
