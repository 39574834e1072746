//! The seed grid every book is derived from.
//!
//! - [`grid::BookCorpus`]: 160 x 160 cells of paired 107-bit words, one chained counter
//! - [`cell::CellIndex`], [`cell::Channel`]: addressing into the grid
//! - [`room::RoomMove`], [`room::RoomAddress`]: movement input and the running room number

pub mod cell;
pub mod grid;
pub mod room;
