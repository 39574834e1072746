//! Text and JSON rendering of a spread.

use std::fmt::Write as _;

use babel_core::{Page, RoomAddress, Spread};
use serde::Serialize;

/// Glyphs per printed line: one grid cell's worth of text.
pub const LINE_WIDTH: usize = 18;

/// One page as serialized to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// 1-based page number.
    pub number: u16,
    /// The page text, unbroken.
    pub body: String,
}

impl From<&Page> for PageReport {
    fn from(page: &Page) -> Self {
        Self {
            number: page.number(),
            body: page.body().to_string(),
        }
    }
}

/// A spread plus where it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadReport {
    /// Room address as `[z, x, y]`.
    pub room: [i64; 3],
    /// Shelf selector.
    pub shelf: u8,
    /// Book selector.
    pub book: u8,
    /// Left-hand page.
    pub left: PageReport,
    /// Right-hand page, where the cursor sits.
    pub right: PageReport,
}

impl SpreadReport {
    /// Builds the report for `spread`.
    #[must_use]
    pub fn new(room: RoomAddress, shelf: u8, book: u8, spread: &Spread) -> Self {
        Self {
            room: [room.z, room.x, room.y],
            shelf,
            book,
            left: PageReport::from(&spread.left),
            right: PageReport::from(&spread.right),
        }
    }

    /// Both pages as plain text, broken into lines of [`LINE_WIDTH`] glyphs
    /// with the page number under each.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "room [{}, {}, {}]  shelf {}  book {}",
            self.room[0], self.room[1], self.room[2], self.shelf, self.book
        );
        for page in [&self.left, &self.right] {
            out.push('\n');
            out.push_str(&wrap(&page.body, LINE_WIDTH));
            let _ = writeln!(out, "{:>width$}", page.number, width = LINE_WIDTH);
        }
        out
    }
}

/// Breaks `body` into newline-terminated lines of `width` characters.
#[must_use]
pub fn wrap(body: &str, width: usize) -> String {
    let glyphs: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len() + glyphs.len() / width.max(1) + 1);
    for line in glyphs.chunks(width.max(1)) {
        out.extend(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_width() {
        assert_eq!(wrap("abcdefg", 3), "abc\ndef\ng\n");
        assert_eq!(wrap("", 3), "");
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("äöüß", 2), "äö\nüß\n");
    }

    #[test]
    fn test_report_from_library() {
        use babel_core::{Alphabet, Library};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut library = Library::from_rng(Alphabet::default(), &mut StdRng::seed_from_u64(1));
        library.move_room(0, 2, -1);
        let spread = library.open_book(1, 2);
        let report = SpreadReport::new(library.room(), 1, 2, &spread);

        assert_eq!(report.room, [0, 2, -1]);
        assert_eq!((report.left.number, report.right.number), (1, 2));

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["right"]["number"], 2);
        assert_eq!(json["room"][2], -1);
        assert_eq!(json["left"]["body"].as_str().map(|s| s.chars().count()), Some(720));

        let text = report.to_text();
        assert!(text.starts_with("room [0, 2, -1]  shelf 1  book 2\n"));
        // header, blank line, 40 lines and a number per page
        assert_eq!(text.lines().count(), 1 + 2 * (1 + 40 + 1));
    }
}
