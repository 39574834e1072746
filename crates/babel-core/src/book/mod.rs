//! Opening books and turning pages.
//!
//! - [`opening::OpenedBook`]: the per-book working table derived from the seed grid
//! - [`reader::Reader`]: the open/closed state machine and page cursor
//! - [`page::Page`], [`page::Spread`]: rendered output

mod opening;
mod page;
mod reader;

pub use opening::OpenedBook;
pub use page::{Page, Spread};
pub use reader::{normalize_page, Reader, ReaderState};
