//! Rendered pages.

use alloc::string::String;
use core::fmt;

/// One rendered page: 720 glyphs and its 1-based label.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Page {
    index: u16,
    body: String,
}

impl Page {
    pub(crate) fn new(index: u16, body: String) -> Self {
        Self { index, body }
    }

    /// 0-based page index.
    #[inline]
    #[must_use]
    pub fn index(&self) -> u16 {
        self.index
    }

    /// 1-based page number shown under the text.
    #[inline]
    #[must_use]
    pub fn number(&self) -> u16 {
        self.index + 1
    }

    /// The page text.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number())
            .field("glyphs", &self.body.chars().count())
            .finish()
    }
}

/// Body, a newline, then the page number.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.body, self.number())
    }
}

/// Two facing pages. The cursor always sits on the right-hand page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spread {
    pub left: Page,
    pub right: Page,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_one_based() {
        let page = Page::new(0, String::from("abc"));
        assert_eq!(page.number(), 1);
        assert_eq!(page.to_string(), "abc\n1");
    }

    #[test]
    fn test_debug_is_short() {
        let page = Page::new(638, String::from("xyz"));
        assert_eq!(format!("{:?}", page), "Page { number: 639, glyphs: 3 }");
    }
}
