//! Core data model for the varioku puzzle engine.
//!
//! This crate provides the types shared by puzzle generation and play:
//! board sizes, difficulty configuration, coordinates, cells, and the two
//! grid representations.
//!
//! # Overview
//!
//! - [`size`]: the three supported board sizes and their rules ([`BoardSize`])
//! - [`difficulty`]: difficulty tiers and the injected given-count
//!   configuration ([`Difficulty`], [`GivensTable`])
//! - [`position`]: coordinates, index conversion, and the peer relation
//!   ([`Position`])
//! - [`cell`]: the per-cell record and pencil notes ([`Cell`], [`NoteSet`])
//! - [`grid`]: the digit matrix with the placement-safety rule
//!   ([`SolutionGrid`])
//! - [`board`]: the player-facing board, win detection, and the validated
//!   restore path for persisted games ([`Board`], [`BoardRestoreError`])
//!
//! Everything here is a plain, exclusively owned value: no interior
//! mutability, no background work. Sessions own a [`Board`] and mutate it
//! in place; restoring, generation, and play rules are layered on top by
//! the sibling crates.
//!
//! # Examples
//!
//! ```
//! use varioku_core::{Board, BoardSize, Cell, Position};
//!
//! let mut board = Board::empty(BoardSize::Nine);
//! *board.cell_mut(0).unwrap() = Cell::given(4);
//!
//! assert_eq!(board.fixed_count(), 1);
//! assert_eq!(board.position(0), Some(Position::new(0, 0)));
//! assert!(!board.is_solved());
//! ```

pub mod board;
pub mod cell;
pub mod difficulty;
pub mod grid;
pub mod position;
pub mod size;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardRestoreError},
    cell::{Cell, NoteSet},
    difficulty::{Difficulty, GivensTable},
    grid::SolutionGrid,
    position::Position,
    size::{BoardSize, InvalidBoardSize},
};
